//! `<option>` fragment parsing and fuzzy label resolution.
//!
//! The site renders each step of the address form as a small HTML fragment of
//! `<option>` elements. User input is a human-readable label ("Andrássy"),
//! which must be resolved to the option value the server expects ("55").
//! Matching is tolerant: case differences and dash variants (– —) in street
//! names are common, and partial labels are accepted.

use scraper::{Html, Selector};

use crate::error::CalendarError;

/// One selectable choice decoded from an HTML `<option>` element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

impl SelectOption {
    /// The value submitted back to the site: the `value` attribute, or the
    /// visible label when the attribute is empty or absent.
    #[must_use]
    pub fn effective_value(&self) -> &str {
        if self.value.is_empty() {
            &self.label
        } else {
            &self.value
        }
    }
}

/// One step of the label-matching chain, tried in declaration order.
#[derive(Debug, Clone, Copy)]
enum MatchRule {
    Exact,
    CaseInsensitive,
    NormalizedSubstring,
}

/// Rules in precedence order. Candidates are scanned candidate-major: the
/// first option (document order) satisfying any rule wins.
const MATCH_RULES: [MatchRule; 3] = [
    MatchRule::Exact,
    MatchRule::CaseInsensitive,
    MatchRule::NormalizedSubstring,
];

impl MatchRule {
    fn matches(self, candidate: &str, target: &str) -> bool {
        match self {
            MatchRule::Exact => candidate == target,
            MatchRule::CaseInsensitive => candidate.to_lowercase() == target.to_lowercase(),
            MatchRule::NormalizedSubstring => normalize(candidate).contains(&normalize(target)),
        }
    }
}

/// Lowercases, folds en/em dashes to `-`, and trims surrounding whitespace.
fn normalize(s: &str) -> String {
    s.to_lowercase().replace(['–', '—'], "-").trim().to_owned()
}

/// Decodes every `<option>` of `html` into a (value, label) pair, in document
/// order. Options with empty visible text are skipped; values and labels are
/// trimmed.
#[must_use]
pub fn parse_options(html: &str) -> Vec<SelectOption> {
    let fragment = Html::parse_fragment(html);
    let selector = Selector::parse("option").expect("valid selector");

    fragment
        .select(&selector)
        .filter_map(|element| {
            let label = element.text().collect::<String>().trim().to_owned();
            if label.is_empty() {
                return None;
            }
            let value = element
                .value()
                .attr("value")
                .unwrap_or("")
                .trim()
                .to_owned();
            Some(SelectOption { value, label })
        })
        .collect()
}

/// Resolves `label` against the `<option>` elements of `html` and returns the
/// matched option's effective value.
///
/// # Errors
///
/// [`CalendarError::OptionNotFound`] when no candidate satisfies any rule of
/// [`MATCH_RULES`]; the error carries every (value, label) pair seen so the
/// caller can tell what the site actually offered.
pub fn resolve_option(html: &str, label: &str) -> Result<String, CalendarError> {
    let candidates = parse_options(html);

    for option in &candidates {
        if MATCH_RULES
            .iter()
            .any(|rule| rule.matches(&option.label, label))
        {
            return Ok(option.effective_value().to_owned());
        }
    }

    Err(CalendarError::OptionNotFound {
        label: label.to_owned(),
        candidates,
    })
}

#[cfg(test)]
#[path = "options_test.rs"]
mod tests;
