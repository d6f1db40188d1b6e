use thiserror::Error;

#[derive(Error, Debug)]
pub enum TrackerError {
    #[error("API request failed: {0}")]
    TransportError(#[from] reqwest::Error),

    #[error("API returned HTTP {status} for {endpoint}")]
    ApiStatusError { status: u16, endpoint: String },

    #[error("could not find client: {name}")]
    ClientNotFound { name: String },

    #[error("malformed duration token {token:?}: {reason}")]
    DurationParseError { token: String, reason: String },

    #[error("holiday calendar unavailable for country: {country}")]
    HolidayUnavailable { country: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid config value for '{field}' ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

pub type Result<T> = std::result::Result<T, TrackerError>;
