use thiserror::Error;

#[derive(Error, Debug)]
pub enum QuoteError {
    #[error("HTTP client error: {0}")]
    HttpClientError(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("{message}")]
    ValidationError { message: String },
}

impl QuoteError {
    pub fn validation(message: impl Into<String>) -> Self {
        QuoteError::ValidationError {
            message: message.into(),
        }
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, QuoteError::ValidationError { .. })
    }

    /// 給終端使用者看的訊息
    pub fn user_friendly_message(&self) -> String {
        match self {
            QuoteError::ValidationError { message } => message.clone(),
            QuoteError::InvalidConfigValueError { field, reason, .. } => {
                format!("Configuration value '{}' is invalid: {}", field, reason)
            }
            QuoteError::ConfigError { message } => format!("Configuration problem: {}", message),
            QuoteError::TomlError(_) => "The configuration file is not valid TOML".to_string(),
            QuoteError::IoError(e) => format!("File access failed: {}", e),
            QuoteError::HttpClientError(_) => "Could not set up the HTTP client".to_string(),
            QuoteError::SerializationError(_) => "Could not encode the response".to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            QuoteError::ValidationError { .. } => {
                "Usage: <pickup lat,long> <dropoff lat,long> <passengers 1-16>"
            }
            QuoteError::InvalidConfigValueError { .. } | QuoteError::ConfigError { .. } => {
                "Check the [aggregator], [server] and [[suppliers]] sections of the config file"
            }
            QuoteError::TomlError(_) => "Make sure the file exists and is valid TOML format",
            QuoteError::IoError(_) => "Check that the path exists and is readable",
            QuoteError::HttpClientError(_) | QuoteError::SerializationError(_) => {
                "Re-run with --verbose and inspect the log output"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, QuoteError>;
