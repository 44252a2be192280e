use thiserror::Error;

use crate::options::SelectOption;

#[derive(Debug, Error)]
pub enum CalendarError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("unexpected HTTP status {status} from handler {handler}")]
    UnexpectedStatus { status: u16, handler: String },

    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("no option matched \"{label}\"; candidates: {}", format_candidates(.candidates))]
    OptionNotFound {
        label: String,
        candidates: Vec<SelectOption>,
    },
}

/// Renders every candidate as a `("value", "label")` pair so a failed lookup
/// shows exactly what the site offered.
fn format_candidates(candidates: &[SelectOption]) -> String {
    let pairs: Vec<String> = candidates
        .iter()
        .map(|o| format!("(\"{}\", \"{}\")", o.value, o.label))
        .collect();
    format!("[{}]", pairs.join(", "))
}
