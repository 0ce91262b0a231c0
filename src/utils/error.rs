use thiserror::Error;

#[derive(Error, Debug)]
pub enum FormatError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Malformed currency string '{amount}': expected exactly one decimal separator, found {separators}")]
    MalformedCurrency { amount: String, separators: usize },

    #[error("Invalid version '{value}': {reason}")]
    InvalidVersion { value: String, reason: String },

    #[error("Configuration parse error in {field}: {message}")]
    ConfigParseError { field: String, message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl FormatError {
    /// Short message suitable for printing to a terminal user.
    pub fn user_friendly_message(&self) -> String {
        match self {
            FormatError::IoError(e) => format!("Could not read file: {}", e),
            FormatError::MalformedCurrency { amount, .. } => {
                format!("'{}' is not a currency amount", amount)
            }
            FormatError::InvalidVersion { value, .. } => {
                format!("'{}' is not a version number", value)
            }
            FormatError::ConfigParseError { .. } | FormatError::InvalidConfigValueError { .. } => {
                format!("Configuration problem: {}", self)
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, FormatError>;
