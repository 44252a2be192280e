//! HTTP client for the MOHU Budapest waste calendar AJAX flow.
//!
//! All four request phases hit the same URL; the October CMS backend routes
//! them by the `X-OCTOBER-REQUEST-HANDLER` header and names the partial it
//! renders back in the JSON envelope after `X-OCTOBER-REQUEST-PARTIALS`.

use std::time::Duration;

use reqwest::Client;

use crate::calendar::{extract_dates, CollectionKind, SEARCH_RESULTS_PARTIAL};
use crate::error::CalendarError;
use crate::options::resolve_option;

/// Production calendar page; also the target of every AJAX POST.
pub const DEFAULT_BASE_URL: &str = "https://mohubudapest.hu/hulladeknaptar";

/// Per-request timeout applied to every call in the flow.
pub const DEFAULT_TIMEOUT_SECS: u64 = 15;

const USER_AGENT: &str = "hulladek-scraper/0.1";

const HANDLER_SELECT_DISTRICTS: &str = "onSelectDistricts";
const HANDLER_SAVE_PUBLIC_PLACE: &str = "onSavePublicPlace";
const HANDLER_SEARCH: &str = "onSearch";

const PARTIAL_PUBLIC_PLACES: &str = "ajax/publicPlaces";
const PARTIAL_HOUSE_NUMBERS: &str = "ajax/houseNumbers";

/// One address to resolve: the district code as the site's own `<option>`
/// values spell it, plus street and house-number labels matched fuzzily
/// against the option lists each step returns.
#[derive(Debug, Clone)]
pub struct AddressQuery {
    pub district: String,
    pub street: String,
    pub house: String,
}

impl AddressQuery {
    #[must_use]
    pub fn new(district: &str, street: &str, house: &str) -> Self {
        Self {
            district: district.to_owned(),
            street: street.to_owned(),
            house: house.to_owned(),
        }
    }
}

/// Client for the waste calendar's cascading form flow.
///
/// Holds only the target URL and timeout; the cookie-bearing HTTP session is
/// created per lookup so that every resolution starts clean. Use
/// [`CalendarClient::new`] for production or
/// [`CalendarClient::with_base_url`] to point at a mock server in tests.
pub struct CalendarClient {
    base_url: String,
    origin: String,
    timeout_secs: u64,
}

impl Default for CalendarClient {
    fn default() -> Self {
        Self::new()
    }
}

impl CalendarClient {
    /// Creates a client pointed at the production calendar page.
    #[must_use]
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS)
    }

    /// Creates a client with a custom base URL (for testing with wiremock).
    #[must_use]
    pub fn with_base_url(base_url: &str, timeout_secs: u64) -> Self {
        Self {
            base_url: base_url.to_owned(),
            origin: base_origin(base_url),
            timeout_secs,
        }
    }

    /// Resolves `query` through the site's cascading form and returns the
    /// collection dates for `kind`, in the order the result table lists them.
    ///
    /// The four phases run strictly in sequence: load the base page to pick
    /// up session cookies, resolve the district to a street list, the street
    /// to a house-number list, and the house number to the results table.
    ///
    /// # Errors
    ///
    /// - [`CalendarError::Http`] on network or TLS failure in any phase, or
    ///   if the session client cannot be constructed.
    /// - [`CalendarError::UnexpectedStatus`] when an AJAX handler answers
    ///   with a non-success status.
    /// - [`CalendarError::Deserialize`] when a response body is not the
    ///   expected JSON envelope.
    /// - [`CalendarError::OptionNotFound`] when the street or house label
    ///   matches none of the offered options.
    pub async fn fetch_collection_days(
        &self,
        query: &AddressQuery,
        kind: CollectionKind,
    ) -> Result<Vec<String>, CalendarError> {
        // One cookie jar per resolution; dropped with `session` on every
        // exit path.
        let session = Client::builder()
            .timeout(Duration::from_secs(self.timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(USER_AGENT)
            .cookie_store(true)
            .build()?;

        // The first page load sets the cookies the AJAX handlers expect.
        session.get(&self.base_url).send().await?;

        let streets = self
            .post_partial(
                &session,
                HANDLER_SELECT_DISTRICTS,
                PARTIAL_PUBLIC_PLACES,
                &[("district", query.district.as_str())],
            )
            .await?;
        let street_value = resolve_option(&streets, &query.street)?;
        tracing::debug!(street = %query.street, value = %street_value, "resolved public place");

        let houses = self
            .post_partial(
                &session,
                HANDLER_SAVE_PUBLIC_PLACE,
                PARTIAL_HOUSE_NUMBERS,
                &[
                    ("district", query.district.as_str()),
                    ("publicPlace", street_value.as_str()),
                ],
            )
            .await?;
        let house_value = resolve_option(&houses, &query.house)?;
        tracing::debug!(house = %query.house, value = %house_value, "resolved house number");

        // The extractor does its own JSON decoding, so the search response
        // is passed through raw.
        let body = self
            .post_raw(
                &session,
                HANDLER_SEARCH,
                SEARCH_RESULTS_PARTIAL,
                &[("houseNumber", house_value.as_str())],
            )
            .await?;

        let dates = extract_dates(&body, kind)?;
        tracing::debug!(count = dates.len(), "extracted collection dates");
        Ok(dates)
    }

    /// POSTs one AJAX step and returns the raw response body after checking
    /// the status.
    async fn post_raw(
        &self,
        session: &Client,
        handler: &str,
        partial: &str,
        form: &[(&str, &str)],
    ) -> Result<String, CalendarError> {
        let response = session
            .post(&self.base_url)
            .header("X-Requested-With", "XMLHttpRequest")
            .header(reqwest::header::ACCEPT, "*/*")
            .header(reqwest::header::REFERER, &self.base_url)
            .header(reqwest::header::ORIGIN, &self.origin)
            .header("X-OCTOBER-REQUEST-HANDLER", handler)
            .header("X-OCTOBER-REQUEST-PARTIALS", partial)
            .form(form)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(CalendarError::UnexpectedStatus {
                status: status.as_u16(),
                handler: handler.to_owned(),
            });
        }

        Ok(response.text().await?)
    }

    /// POSTs one AJAX step and unwraps the named partial from the JSON
    /// envelope. The server omits the key when it has nothing to render, so
    /// an absent partial decodes to an empty fragment.
    async fn post_partial(
        &self,
        session: &Client,
        handler: &str,
        partial: &str,
        form: &[(&str, &str)],
    ) -> Result<String, CalendarError> {
        let body = self.post_raw(session, handler, partial, form).await?;

        let envelope: serde_json::Value =
            serde_json::from_str(&body).map_err(|e| CalendarError::Deserialize {
                context: partial.to_owned(),
                source: e,
            })?;

        Ok(envelope
            .get(partial)
            .and_then(serde_json::Value::as_str)
            .unwrap_or("")
            .to_owned())
    }
}

/// Extracts the scheme+host origin of the base URL for the `Origin` header.
///
/// Given `"https://mohubudapest.hu/hulladeknaptar"`, returns
/// `"https://mohubudapest.hu"`. Falls back to the scheme+host prefix when the
/// URL does not parse.
fn base_origin(base_url: &str) -> String {
    reqwest::Url::parse(base_url).map_or_else(
        |_| {
            base_url
                .trim_end_matches('/')
                .splitn(4, '/')
                .take(3)
                .collect::<Vec<_>>()
                .join("/")
        },
        |u| u.origin().ascii_serialization(),
    )
}

#[cfg(test)]
#[path = "client_test.rs"]
mod tests;
