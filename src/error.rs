use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing or blank database setting '{field}'")]
    MissingField { field: &'static str },
    #[error("invalid value '{value}' for database setting '{field}'")]
    InvalidField { field: &'static str, value: String },
}

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("market data request failed")]
    Http(#[from] reqwest::Error),
    #[error("market data request returned status {status}")]
    Status { status: u16 },
    #[error("malformed market data payload: {0}")]
    Malformed(String),
}

#[derive(Clone, Debug, Error, Eq, PartialEq)]
pub enum QuoteError {
    #[error("ticker cannot be empty")]
    EmptyTicker,
    #[error("ticker '{0}' contains invalid characters")]
    InvalidTicker(String),
    #[error("field '{field}' must be non-negative")]
    NegativeValue { field: &'static str },
    #[error("price range invalid: low must not exceed open/close and high must not fall below them")]
    PriceOutOfRange,
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("database unavailable")]
    Unavailable(#[source] sqlx::Error),
    #[error("uniqueness constraint violated: {0}")]
    ConstraintViolation(String),
    #[error("storage schema mismatch: {0}")]
    SchemaMismatch(String),
}

#[derive(Debug, Error)]
pub enum IngestError {
    #[error("invalid ticker '{0}'")]
    InvalidTicker(String),
    #[error("no market data available for '{0}'")]
    NoData(String),
    #[error("fetched observation rejected: {0}")]
    Invalid(#[from] QuoteError),
    #[error(transparent)]
    Source(#[from] SourceError),
    #[error(transparent)]
    Store(#[from] StoreError),
}
