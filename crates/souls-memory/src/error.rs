//! Error types for memory shapes.

/// Errors returned when building memory records from loose input.
#[derive(Debug, thiserror::Error)]
pub enum MemoryError {
    /// Role string outside the supported set.
    #[error("unknown role: {0}")]
    UnknownRole(String),
    /// Input did not match the record shape.
    #[error("serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}
