//! `fedfin-http` is an async HTTP client for two U.S. federal financial
//! data services.
//!
//! The crate wraps the FFIEC CDR Public Web Service and the FRED API with
//! thin, independently usable clients:
//! - [`FfiecClient::find_institution`]
//! - [`FfiecClient::search_call_report`]
//! - [`FfiecClient::search_ubpr`]
//! - [`FredClient::get_series_observations`]
//!
//! Every call goes through one retrying fetcher: failed attempts (transport
//! error, non-2xx status, or unparseable body) are logged at warn level and
//! retried with linearly increasing backoff up to the configured attempt
//! ceiling; the final attempt's error is returned unchanged. Responses pass
//! through as [`serde_json::Value`] — no schema is imposed.

mod error;
mod export;
mod fetch;
mod ffiec;
mod fred;
mod options;
mod query;

pub use error::FedFinError;
pub use export::{save_csv, save_json};
pub use ffiec::{basic_authorization, FfiecClient, FFIEC_BASE_URL};
pub use fred::{FredClient, FRED_BASE_URL};
pub use options::ClientOptions;
pub use query::Query;

pub type Result<T> = std::result::Result<T, FedFinError>;
