/// Error types for the amount-to-words engine
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TafqitError {
    /// Amount magnitude exceeds the scale-word table
    AmountOutOfRange(String),
    /// Error loading a label catalog file
    LabelLoad(String),
}

impl std::fmt::Display for TafqitError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TafqitError::AmountOutOfRange(msg) => write!(f, "Amount out of range: {}", msg),
            TafqitError::LabelLoad(msg) => write!(f, "Label catalog error: {}", msg),
        }
    }
}

impl std::error::Error for TafqitError {}

/// Result type for conversion operations
pub type TafqitResult<T> = Result<T, TafqitError>;
