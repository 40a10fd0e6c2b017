use std::fmt;

use crate::{fetch::fetch_json, ClientOptions, FedFinError, Query, Result};

/// Production base URL of the FRED API.
pub const FRED_BASE_URL: &str = "https://api.stlouisfed.org/fred";

#[derive(Clone)]
/// HTTP client for the FRED macroeconomic time-series API.
pub struct FredClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
    options: ClientOptions,
}

impl fmt::Debug for FredClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FredClient")
            .field("base_url", &self.base_url)
            .field("api_key", &"<redacted>")
            .field("options", &self.options)
            .finish()
    }
}

impl FredClient {
    /// Creates a client from a FRED API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: FRED_BASE_URL.to_owned(),
            api_key: api_key.into(),
            options: ClientOptions::default(),
        }
    }

    /// Creates a client from the `FRED_API_KEY` environment variable.
    ///
    /// Returns a [`FedFinError::Config`] error if the variable is missing or
    /// empty. There is no placeholder fallback.
    pub fn from_env() -> Result<Self> {
        let api_key = std::env::var("FRED_API_KEY").map_err(|_| {
            FedFinError::Config("missing FRED_API_KEY environment variable".to_owned())
        })?;
        if api_key.trim().is_empty() {
            return Err(FedFinError::Config(
                "FRED_API_KEY is set but empty".to_owned(),
            ));
        }
        Ok(Self::new(api_key))
    }

    /// Overrides the service base URL. Intended for tests and proxies.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_owned();
        self
    }

    /// Applies client options such as timeout and retry behavior.
    pub fn with_options(mut self, opts: ClientOptions) -> Self {
        self.options = opts;
        self
    }

    /// Fetches observations for a series.
    ///
    /// The outbound query starts from `series_id`, `api_key`, and
    /// `file_type=json`; `extra` parameters are merged on top, so a
    /// caller-supplied key that collides with a default (for example a
    /// custom `file_type`) wins. Returns the decoded response body
    /// unchanged.
    pub async fn get_series_observations<Q: Into<Query>>(
        &self,
        series_id: impl AsRef<str>,
        extra: Q,
    ) -> Result<serde_json::Value> {
        let url = format!("{}/series/observations", self.base_url);
        let query = observations_query(series_id.as_ref(), &self.api_key, extra.into());
        fetch_json(&self.http, &url, &query, &[], &self.options).await
    }
}

fn observations_query(series_id: &str, api_key: &str, extra: Query) -> Query {
    let mut query = Query::from([
        ("series_id", series_id),
        ("api_key", api_key),
        ("file_type", "json"),
    ]);
    query.merge(extra);
    query
}

#[cfg(test)]
mod tests {
    use super::{observations_query, FredClient};
    use crate::Query;

    #[test]
    fn base_query_is_exactly_three_pairs() {
        let query = observations_query("GDP", "key", Query::new());
        assert_eq!(
            query.pairs(),
            &[
                ("series_id".to_owned(), "GDP".to_owned()),
                ("api_key".to_owned(), "key".to_owned()),
                ("file_type".to_owned(), "json".to_owned()),
            ]
        );
    }

    #[test]
    fn extra_params_merge_without_dropping_defaults() {
        let query = observations_query("GDP", "key", [("frequency", "q")].into());
        assert_eq!(query.len(), 4);
        assert_eq!(query.get("series_id"), Some("GDP"));
        assert_eq!(query.get("frequency"), Some("q"));
    }

    #[test]
    fn caller_file_type_overrides_default() {
        let query = observations_query("GDP", "key", [("file_type", "xml")].into());
        assert_eq!(query.len(), 3);
        assert_eq!(query.get("file_type"), Some("xml"));
    }

    #[test]
    fn debug_redacts_api_key() {
        let client = FredClient::new("super-secret-key");
        let debug = format!("{client:?}");
        assert!(debug.contains("<redacted>"));
        assert!(!debug.contains("super-secret-key"));
    }
}
