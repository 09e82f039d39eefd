use thiserror::Error;

#[derive(Error, Debug)]
pub enum IngestError {
    #[error("HTTP request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Page retrieval failed for {url}: HTTP {status}")]
    RetrievalError { url: String, status: u16 },

    #[error("Store {operation} failed: {message}")]
    StoreError { operation: String, message: String },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration validation failed for '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Retrieval,
    Store,
    Configuration,
    Io,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl IngestError {
    pub fn store(operation: &str, message: impl Into<String>) -> Self {
        IngestError::StoreError {
            operation: operation.to_string(),
            message: message.into(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            IngestError::ApiError(_) | IngestError::RetrievalError { .. } => {
                ErrorCategory::Retrieval
            }
            IngestError::StoreError { .. } | IngestError::SerializationError(_) => {
                ErrorCategory::Store
            }
            IngestError::IoError(_) => ErrorCategory::Io,
            IngestError::ConfigError { .. }
            | IngestError::ConfigValidationError { .. }
            | IngestError::InvalidConfigValueError { .. }
            | IngestError::MissingConfigError { .. } => ErrorCategory::Configuration,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            // 網路錯誤通常可以重跑
            ErrorCategory::Retrieval => ErrorSeverity::Medium,
            ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::Store | ErrorCategory::Io => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            IngestError::ApiError(_) => "Check network connectivity and the render endpoint",
            IngestError::RetrievalError { .. } => {
                "The listing page or render service rejected the request; try again later"
            }
            IngestError::StoreError { .. } => {
                "Verify ASTRA_DB_ENDPOINT, ASTRA_DB_TOKEN and that the collection exists"
            }
            IngestError::IoError(_) => "Check that the store file path is writable",
            IngestError::SerializationError(_) => {
                "The store returned a document that does not match the record schema"
            }
            IngestError::MissingConfigError { .. } => {
                "Set the missing value in the config file or environment"
            }
            IngestError::ConfigError { .. }
            | IngestError::ConfigValidationError { .. }
            | IngestError::InvalidConfigValueError { .. } => {
                "Fix the configuration value and run again"
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::Retrieval => format!("Could not fetch the press release listing: {}", self),
            ErrorCategory::Store => format!("Document store is unavailable: {}", self),
            ErrorCategory::Configuration => format!("Invalid configuration: {}", self),
            ErrorCategory::Io => format!("File access failed: {}", self),
        }
    }
}

pub type Result<T> = std::result::Result<T, IngestError>;
