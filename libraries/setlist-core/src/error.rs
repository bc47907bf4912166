/// Core error types for Setlist
use thiserror::Error;

/// Result type alias using `SetlistError`
pub type Result<T> = std::result::Result<T, SetlistError>;

/// Core error type for Setlist
#[derive(Error, Debug)]
pub enum SetlistError {
    /// Selection index outside the batch the set was sized for
    #[error("selection index {index} out of range (capacity {capacity})")]
    IndexOutOfRange { index: usize, capacity: usize },

    /// Commit attempted with no tracks selected
    #[error("selection is empty")]
    EmptySelection,

    /// Commit attempted with a blank playlist name
    #[error("playlist name is empty")]
    EmptyName,

    /// Operation cancelled by the caller
    #[error("operation cancelled")]
    Cancelled,

    /// Catalog-reported error, surfaced verbatim
    #[error("catalog error: {0}")]
    Catalog(String),
}

impl SetlistError {
    /// Create a catalog error
    pub fn catalog(msg: impl Into<String>) -> Self {
        Self::Catalog(msg.into())
    }

    /// Create an out-of-range error
    pub fn out_of_range(index: usize, capacity: usize) -> Self {
        Self::IndexOutOfRange { index, capacity }
    }
}
