//! Error types for inventory storage and the scan workflow

use thiserror::Error;

/// Unified error type for inventory operations
#[derive(Debug, Error)]
pub enum InventoryError {
    /// Reading or writing the inventory file failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// The inventory could not be encoded as JSON
    #[error("Serialization error: {0}")]
    Serialize(#[source] serde_json::Error),
    /// Imported bytes are not JSON, or not a map of code to {title, des}
    #[error("Invalid inventory file: {0}")]
    Format(#[source] serde_json::Error),
    /// A required field was empty on manual entry
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

impl InventoryError {
    /// True for the errors that come from touching the file system or encoding the file
    pub fn is_io(&self) -> bool {
        matches!(self, InventoryError::Io(_) | InventoryError::Serialize(_))
    }
}

/// Rejected manual entry
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Scanned code is empty")]
    EmptyCode,
    #[error("Title must not be empty")]
    EmptyTitle,
    #[error("Description must not be empty")]
    EmptyDescription,
}

/// Result alias for inventory operations
pub type Result<T> = std::result::Result<T, InventoryError>;
