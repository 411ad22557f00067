use std::error::Error;
use std::fmt;
use std::io;

/// Common result type for loaders and CLI glue
pub type BoxResult<T> = Result<T, Box<dyn Error>>;

/// Error types for structured data generation
#[derive(Debug)]
pub enum JsonLdError {
    /// IO error wrapper
    Io(io::Error),
    /// Configuration error
    Config(String),
    /// Front matter parsing error
    FrontMatter(String),
    /// A field required for the requested output is absent
    MissingField {
        field: String,
        context: String,
    },
    /// A date value that could not be parsed
    InvalidDate(String),
    /// JSON serialization error
    Serialize(String),
    /// Generic error message
    Generic(String),
}

impl JsonLdError {
    /// Shorthand for a `MissingField` error
    pub fn missing(field: impl Into<String>, context: impl Into<String>) -> Self {
        JsonLdError::MissingField {
            field: field.into(),
            context: context.into(),
        }
    }
}

impl fmt::Display for JsonLdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            JsonLdError::Io(err) => write!(f, "IO error: {}", err),
            JsonLdError::Config(msg) => write!(f, "Configuration error: {}", msg),
            JsonLdError::FrontMatter(msg) => write!(f, "Front matter error: {}", msg),
            JsonLdError::MissingField { field, context } => {
                write!(f, "Missing required field '{}' ({})", field, context)
            }
            JsonLdError::InvalidDate(msg) => write!(f, "Invalid date: {}", msg),
            JsonLdError::Serialize(msg) => write!(f, "Serialization error: {}", msg),
            JsonLdError::Generic(msg) => write!(f, "{}", msg),
        }
    }
}

impl Error for JsonLdError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            JsonLdError::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<io::Error> for JsonLdError {
    fn from(err: io::Error) -> Self {
        JsonLdError::Io(err)
    }
}

impl From<serde_json::Error> for JsonLdError {
    fn from(err: serde_json::Error) -> Self {
        JsonLdError::Serialize(err.to_string())
    }
}

impl From<String> for JsonLdError {
    fn from(msg: String) -> Self {
        JsonLdError::Generic(msg)
    }
}

impl From<&str> for JsonLdError {
    fn from(msg: &str) -> Self {
        JsonLdError::Generic(msg.to_string())
    }
}
