use std::fmt;

use base64::{engine::general_purpose::STANDARD, Engine as _};
use reqwest::header::{HeaderName, ACCEPT, AUTHORIZATION};

use crate::{fetch::fetch_json, ClientOptions, FedFinError, Query, Result};

/// Production base URL of the FFIEC CDR Public Web Service.
pub const FFIEC_BASE_URL: &str = "https://cdr.ffiec.gov/public/PWS";

/// Returns the HTTP Basic authorization value for the FFIEC PWS.
///
/// The security token is appended to the password field before encoding:
/// `Basic base64("{username}:{password}{token}")`.
pub fn basic_authorization(username: &str, password: &str, token: &str) -> String {
    let credentials = format!("{username}:{password}{token}");
    format!("Basic {}", STANDARD.encode(credentials.as_bytes()))
}

#[derive(Clone)]
/// HTTP client for the FFIEC CDR Public Web Service.
pub struct FfiecClient {
    http: reqwest::Client,
    base_url: String,
    authorization: String,
    options: ClientOptions,
}

impl fmt::Debug for FfiecClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FfiecClient")
            .field("base_url", &self.base_url)
            .field("authorization", &"<redacted>")
            .field("options", &self.options)
            .finish()
    }
}

impl FfiecClient {
    /// Creates a client from PWS credentials.
    ///
    /// Every request carries the Basic authorization value from
    /// [`basic_authorization`] and `Accept: application/json`.
    pub fn new(
        username: impl AsRef<str>,
        password: impl AsRef<str>,
        token: impl AsRef<str>,
    ) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: FFIEC_BASE_URL.to_owned(),
            authorization: basic_authorization(
                username.as_ref(),
                password.as_ref(),
                token.as_ref(),
            ),
            options: ClientOptions::default(),
        }
    }

    /// Creates a client from environment variables.
    ///
    /// Reads:
    /// - `FFIEC_PWS_USERNAME` — PWS account name
    /// - `FFIEC_PWS_PASSWORD` — PWS account password
    /// - `FFIEC_PWS_TOKEN` — PWS security token
    ///
    /// Returns a [`FedFinError::Config`] error if any variable is missing or
    /// empty. There are no placeholder fallbacks.
    pub fn from_env() -> Result<Self> {
        let username = required_env_var("FFIEC_PWS_USERNAME")?;
        let password = required_env_var("FFIEC_PWS_PASSWORD")?;
        let token = required_env_var("FFIEC_PWS_TOKEN")?;
        Ok(Self::new(username, password, token))
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

    /// Fetches institution details by FDIC certificate number.
    pub async fn find_institution(&self, fdic_cert: impl AsRef<str>) -> Result<serde_json::Value> {
        let url = format!("{}/Institution/Find/{}", self.base_url, fdic_cert.as_ref());
        self.get_json(&url, Query::new()).await
    }

    /// Searches call-report data with the given query parameters.
    pub async fn search_call_report<Q: Into<Query>>(&self, params: Q) -> Result<serde_json::Value> {
        let url = format!("{}/CallReport/Search", self.base_url);
        self.get_json(&url, params.into()).await
    }

    /// Searches UBPR data with the given query parameters.
    pub async fn search_ubpr<Q: Into<Query>>(&self, params: Q) -> Result<serde_json::Value> {
        let url = format!("{}/UBPR/Search", self.base_url);
        self.get_json(&url, params.into()).await
    }

    async fn get_json(&self, url: &str, query: Query) -> Result<serde_json::Value> {
        let headers: [(HeaderName, String); 2] = [
            (AUTHORIZATION, self.authorization.clone()),
            (ACCEPT, "application/json".to_owned()),
        ];
        fetch_json(&self.http, url, &query, &headers, &self.options).await
    }
}

fn required_env_var(name: &str) -> Result<String> {
    let value = std::env::var(name)
        .map_err(|_| FedFinError::Config(format!("missing {name} environment variable")))?;
    if value.trim().is_empty() {
        return Err(FedFinError::Config(format!("{name} is set but empty")));
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::{basic_authorization, FfiecClient};

    #[test]
    fn basic_authorization_appends_token_to_password() {
        // base64("user:passtoken")
        assert_eq!(
            basic_authorization("user", "pass", "token"),
            "Basic dXNlcjpwYXNzdG9rZW4=".to_owned()
        );
    }

    #[test]
    fn with_base_url_trims_trailing_slash() {
        let client = FfiecClient::new("u", "p", "t").with_base_url("http://127.0.0.1:8080/");
        assert!(format!("{client:?}").contains("\"http://127.0.0.1:8080\""));
    }

    #[test]
    fn debug_redacts_authorization_value() {
        let client = FfiecClient::new("user", "secret-password", "secret-token");
        let debug = format!("{client:?}");
        assert!(debug.contains("<redacted>"));
        assert!(!debug.contains("secret"));
    }
}
