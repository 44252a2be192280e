//! Date extraction from the calendar search results partial.
//!
//! The search response is a JSON envelope mapping partial-template names to
//! raw HTML strings. The results partial holds a table where each row is one
//! scheduled pickup: the second cell carries the date as displayed
//! (e.g. `"2025.01.12."`) and the third cell carries a marker element naming
//! the collection category. Dates are returned as-is, never parsed.

use scraper::{Html, Selector};

use crate::error::CalendarError;

/// Partial-template key carrying the results table in the search response.
pub const SEARCH_RESULTS_PARTIAL: &str = "ajax/calSearchResults";

/// Waste-collection category of a result row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CollectionKind {
    /// Recyclable ("szelektív") pickup.
    #[default]
    Selective,
    /// General household ("kommunális") pickup.
    Communal,
}

impl CollectionKind {
    /// CSS selector of the marker element flagging a row's category.
    fn marker_selector(self) -> &'static str {
        match self {
            CollectionKind::Selective => ".selective",
            CollectionKind::Communal => ".communal",
        }
    }
}

/// Extracts the pickup-date strings for `kind` from the raw text of the
/// search response, in document order of the result rows.
///
/// A response without the results partial means "nothing to render" and
/// yields an empty list, as does a results table where no row carries the
/// requested category marker.
///
/// # Errors
///
/// [`CalendarError::Deserialize`] when `text` is not valid JSON.
pub fn extract_dates(text: &str, kind: CollectionKind) -> Result<Vec<String>, CalendarError> {
    let envelope: serde_json::Value =
        serde_json::from_str(text).map_err(|e| CalendarError::Deserialize {
            context: SEARCH_RESULTS_PARTIAL.to_owned(),
            source: e,
        })?;

    let html = envelope
        .get(SEARCH_RESULTS_PARTIAL)
        .and_then(serde_json::Value::as_str)
        .unwrap_or("");

    let fragment = Html::parse_fragment(html);
    let row_selector = Selector::parse("tbody tr").expect("valid selector");
    let cell_selector = Selector::parse("td").expect("valid selector");
    let marker_selector = Selector::parse(kind.marker_selector()).expect("valid selector");

    let mut dates = Vec::new();
    for row in fragment.select(&row_selector) {
        let cells: Vec<_> = row.select(&cell_selector).collect();
        // Category marker lives in the third cell; shorter rows are headers
        // or filler and carry no date.
        if cells.len() < 3 {
            continue;
        }
        if cells[2].select(&marker_selector).next().is_none() {
            continue;
        }
        dates.push(cells[1].text().collect::<String>().trim().to_owned());
    }

    Ok(dates)
}

#[cfg(test)]
#[path = "calendar_test.rs"]
mod tests;
