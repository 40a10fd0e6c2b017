/// Error type returned by this crate.
#[derive(Debug, thiserror::Error)]
pub enum FedFinError {
    /// Network or request execution error from `reqwest`.
    #[error("transport error: {0}")]
    Transport(reqwest::Error),
    /// Non-success HTTP status code with raw response body.
    #[error("http error {status}: {body}")]
    Http { status: u16, body: String },
    /// HTTP-success response whose body failed to parse as JSON.
    #[error("decode error: {0}")]
    Decode(String),
    /// Missing or empty credential configuration.
    #[error("config error: {0}")]
    Config(String),
    /// Invalid input to a file export helper.
    #[error("export error: {0}")]
    Export(String),
    /// CSV serialization error while writing records.
    #[error("csv error: {0}")]
    Csv(csv::Error),
    /// Filesystem error while writing an export file.
    #[error("io error: {0}")]
    Io(std::io::Error),
}
