use std::fmt;
use validator::ValidationErrors;

#[derive(Debug)]
pub enum AppError {
    NotFound(String),
    ValidationError(String),
    ConfigError(String),
    DatabaseError(String),
    IoError(String),
    InputClosed,
}

impl AppError {
    /// Errors the operator can act on; the menu is shown again after them.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, AppError::NotFound(_) | AppError::ValidationError(_))
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::NotFound(msg) => write!(f, "Not Found: {}", msg),
            AppError::ValidationError(msg) => write!(f, "Invalid input: {}", msg),
            AppError::ConfigError(msg) => write!(f, "Configuration Error: {}", msg),
            AppError::DatabaseError(msg) => write!(f, "Database Error: {}", msg),
            AppError::IoError(msg) => write!(f, "I/O Error: {}", msg),
            AppError::InputClosed => write!(f, "Input closed"),
        }
    }
}

impl std::error::Error for AppError {}

impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        AppError::DatabaseError(err.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::IoError(err.to_string())
    }
}

impl From<ValidationErrors> for AppError {
    fn from(err: ValidationErrors) -> Self {
        let mut fields: Vec<&str> = err.field_errors().keys().copied().collect();
        fields.sort_unstable();
        AppError::ValidationError(format!("missing value for {}", fields.join(", ")))
    }
}
