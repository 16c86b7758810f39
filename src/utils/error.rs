use thiserror::Error;

#[derive(Error, Debug)]
pub enum MapPropsError {
    #[error("Malformed image URI '{uri}': {source}")]
    MalformedUri {
        uri: String,
        #[source]
        source: url::ParseError,
    },

    #[error("Malformed timestamp '{value}'")]
    MalformedTimestamp { value: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// The map record or polygon handed in by the caller.
    Input,
    Config,
    System,
}

impl MapPropsError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            MapPropsError::MalformedUri { .. }
            | MapPropsError::MalformedTimestamp { .. }
            | MapPropsError::SerializationError(_) => ErrorCategory::Input,
            MapPropsError::ConfigError { .. }
            | MapPropsError::InvalidConfigValueError { .. } => ErrorCategory::Config,
            MapPropsError::IoError(_) => ErrorCategory::System,
        }
    }

    /// 給使用者看的簡短錯誤訊息
    pub fn user_friendly_message(&self) -> String {
        match self {
            MapPropsError::MalformedUri { uri, .. } => {
                format!("The image URI '{}' is not a valid absolute URL", uri)
            }
            MapPropsError::MalformedTimestamp { value } => {
                format!("The updatedAt value '{}' is not a valid ISO-8601 timestamp", value)
            }
            MapPropsError::IoError(e) => format!("Could not read input: {}", e),
            MapPropsError::SerializationError(e) => format!("Input is not valid JSON: {}", e),
            MapPropsError::ConfigError { message } => format!("Configuration problem: {}", message),
            MapPropsError::InvalidConfigValueError { field, reason, .. } => {
                format!("Configuration value {} is invalid: {}", field, reason)
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, MapPropsError>;
