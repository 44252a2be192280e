//! Scraper for the MOHU Budapest waste-collection calendar.
//!
//! Drives the site's cascading AJAX form flow (district → street → house
//! number) and extracts the scheduled pickup dates from the final results
//! partial. The site is an October CMS application: every step POSTs to the
//! same URL and the target handler and response partial are named in request
//! headers, with HTML fragments coming back wrapped in a JSON envelope.
//!
//! [`CalendarClient::fetch_collection_days`] is the entry point.

pub mod calendar;
pub mod client;
pub mod error;
pub mod options;

pub use calendar::{extract_dates, CollectionKind};
pub use client::{AddressQuery, CalendarClient, DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS};
pub use error::CalendarError;
pub use options::{parse_options, resolve_option, SelectOption};
