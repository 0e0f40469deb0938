//! Generic ordered-collection framework shared by every level of the catalog.
//!
//! # Main Components
//!
//! - [`NamedEntity`] - Trait that element types implement to be stored in a collection
//! - [`OrderedCollection`] - Uniquely named elements with dense 1-based positions
//! - [`Container`] - Delegation trait for parents that own one collection
//! - [`transfer`] - Atomic move of one element between two collections
//! - [`CollectionError`] - The error taxonomy shared by all operations

pub mod collection;
pub mod container;
pub mod entity;
pub mod error;
pub mod transfer;

// Re-export core types for convenience
pub use collection::OrderedCollection;
pub use container::{ChildrenAccess, Container};
pub use entity::NamedEntity;
pub use error::{CollectionError, CollectionResult};
pub use transfer::transfer;
