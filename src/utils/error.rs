use crate::domain::ports::StoreError;
use crate::utils::validation::InvalidValue;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ProductApiError {
    #[error("Storage error: {0}")]
    Store(#[from] StoreError),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Config file parse error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl From<InvalidValue> for ProductApiError {
    fn from(invalid: InvalidValue) -> Self {
        ProductApiError::InvalidConfigValueError {
            field: invalid.field,
            value: invalid.value,
            reason: invalid.reason,
        }
    }
}

pub type Result<T> = std::result::Result<T, ProductApiError>;
