//! Error types for accordion handling

use thiserror::Error;

/// Main error type for accordion operations
#[derive(Error, Debug)]
pub enum AccordionError {
    #[error("Header {0} has no following content element")]
    MissingContent(String),

    #[error("Header index {index} out of range ({bound} headers bound)")]
    HeaderIndexOutOfRange { index: usize, bound: usize },

    #[error("Invalid class name '{0}': must be non-empty and contain no whitespace")]
    InvalidClassName(String),

    #[error("Element {0} does not exist in this fragment")]
    UnknownElement(usize),

    #[error("Element {0} is not attached to a parent")]
    DetachedElement(usize),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type for accordion operations
pub type AccordionResult<T> = Result<T, AccordionError>;
