//! Error types for card layout operations.
//!
//! Interactive canvas operations never fail; these errors only surface at the
//! persistence boundary (validation and JSON round-trips) and on catalog
//! lookups by id.

use thiserror::Error;

/// Result type for card operations.
pub type CardResult<T> = Result<T, CardError>;

/// Errors that can occur in card operations.
#[derive(Debug, Error)]
pub enum CardError {
    /// An element has an empty identifier.
    #[error("Element at index {0} has an empty id")]
    EmptyId(usize),

    /// Two elements on the same side share an identifier.
    #[error("Duplicate element id: {0}")]
    DuplicateId(String),

    /// An element position is NaN or infinite.
    #[error("Element {0} has a non-finite position")]
    NonFiniteCoordinate(String),

    /// No catalog entry carries the requested id.
    #[error("Template not found: {0}")]
    TemplateNotFound(String),

    /// Side or card serialization/deserialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
