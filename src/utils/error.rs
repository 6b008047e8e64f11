use thiserror::Error;

#[derive(Error, Debug)]
pub enum HuntError {
    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("HTTP error occurred: {status} for url {url}")]
    HttpStatusError {
        status: reqwest::StatusCode,
        url: String,
    },

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },
}

impl HuntError {
    /// 給終端使用者看的訊息
    pub fn user_friendly_message(&self) -> String {
        match self {
            HuntError::ApiError(e) => format!("Could not reach the search API: {}", e),
            HuntError::HttpStatusError { status, .. } => {
                format!("The search API answered with status {}", status)
            }
            HuntError::CsvError(e) => format!("Failed to write the CSV report: {}", e),
            HuntError::IoError(e) => format!("File operation failed: {}", e),
            HuntError::SerializationError(e) => format!("Unexpected response format: {}", e),
            HuntError::ConfigError { message } => format!("Invalid configuration: {}", message),
            HuntError::InvalidConfigValueError { field, reason, .. } => {
                format!("Invalid value for {}: {}", field, reason)
            }
            HuntError::MissingConfigError { field } => {
                format!("Missing required setting: {}", field)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            HuntError::ApiError(_) => "Check your network connection and the API endpoint",
            HuntError::HttpStatusError { status, .. } if status.as_u16() == 401 => {
                "Check the account email and API key"
            }
            HuntError::HttpStatusError { .. } => "Check your account balance and query syntax",
            HuntError::CsvError(_) | HuntError::IoError(_) => {
                "Check that the input file exists and the output paths are writable"
            }
            HuntError::SerializationError(_) => "Check that the endpoint is a DeHashed search API",
            HuntError::ConfigError { .. } | HuntError::InvalidConfigValueError { .. } => {
                "Fix the configuration file or command-line flags"
            }
            HuntError::MissingConfigError { .. } => {
                "Pass --email/--api-key, set DEHASHED_EMAIL/DEHASHED_API_KEY, or use --config"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, HuntError>;
