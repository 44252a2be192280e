use clap::Parser;

use hulladek_scraper::{
    AddressQuery, CalendarClient, CollectionKind, DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS,
};

/// Looks up scheduled waste-collection dates for a Budapest address.
#[derive(Debug, Parser)]
#[command(name = "hulladek-cli")]
#[command(about = "Budapest waste-collection calendar lookup")]
struct Cli {
    /// District code as the site's own `<option>` values spell it.
    #[arg(long, default_value = "1062")]
    district: String,

    /// Street label; partial matches are allowed.
    #[arg(long, default_value = "Andrássy")]
    street: String,

    /// House-number label; partial matches are allowed.
    #[arg(long, default_value = "57")]
    house: String,

    /// Look up communal (general) pickups instead of selective ones.
    #[arg(long)]
    communal: bool,

    #[arg(long, env = "HULLADEK_BASE_URL", default_value = DEFAULT_BASE_URL)]
    base_url: String,

    #[arg(long, env = "HULLADEK_TIMEOUT_SECS", default_value_t = DEFAULT_TIMEOUT_SECS)]
    timeout_secs: u64,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let kind = if cli.communal {
        CollectionKind::Communal
    } else {
        CollectionKind::Selective
    };
    let query = AddressQuery::new(&cli.district, &cli.street, &cli.house);

    tracing::info!(
        district = %query.district,
        street = %query.street,
        house = %query.house,
        ?kind,
        "querying waste calendar"
    );

    let client = CalendarClient::with_base_url(&cli.base_url, cli.timeout_secs);
    let dates = client.fetch_collection_days(&query, kind).await?;

    tracing::info!(count = dates.len(), "collection dates found");
    for date in &dates {
        println!("{date}");
    }

    Ok(())
}
