//! Error types for ordered collections.

use thiserror::Error;

/// Errors returned by [`OrderedCollection`](crate::framework::OrderedCollection) operations.
///
/// Every variant describes an ordinary, caller-handled outcome. A failed operation never
/// leaves the collection partially mutated.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CollectionError {
    /// An element with the same name is already stored in the collection.
    #[error("Element already exists.")]
    ExistingElement { name: String },

    /// No element with the given name is stored in the collection.
    #[error("Element does not exist.")]
    UnexistingElement { name: String },

    /// The requested position lies outside the valid range for the collection.
    #[error("Invalid position.")]
    InvalidPosition { position: i64, size: usize },
}

impl CollectionError {
    pub fn is_existing_element(&self) -> bool {
        matches!(self, CollectionError::ExistingElement { .. })
    }

    pub fn is_unexisting_element(&self) -> bool {
        matches!(self, CollectionError::UnexistingElement { .. })
    }

    pub fn is_invalid_position(&self) -> bool {
        matches!(self, CollectionError::InvalidPosition { .. })
    }
}

/// Result type returned by every fallible collection operation.
pub type CollectionResult<T> = Result<T, CollectionError>;
