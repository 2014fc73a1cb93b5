use thiserror::Error;

/// Failure talking to the market-data provider.
#[derive(Error, Debug)]
pub enum UpstreamError {
    #[error("ALPHAVANTAGE_API_KEY is missing")]
    MissingApiKey,

    #[error("request error: {0}")]
    Request(#[from] reqwest::Error),

    #[error("provider returned status {0}")]
    Status(reqwest::StatusCode),

    #[error("unexpected provider payload: {0}")]
    MalformedPayload(String),
}

/// Failure reading or writing the alert store.
#[derive(Error, Debug)]
pub enum PersistenceError {
    #[error("alert store lock poisoned")]
    Poisoned,
}
