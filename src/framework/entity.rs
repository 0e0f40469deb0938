//! # NamedEntity Trait
//!
//! The `NamedEntity` trait is the contract every element of an
//! [`OrderedCollection`](crate::framework::OrderedCollection) must satisfy. The name it
//! exposes is both the uniqueness key inside one collection and the lookup key used by
//! `remove`, `position`, `includes` and `move_to`.
//!
//! # Architecture Note
//! Identity is by name equality, never by reference identity. Two distinct `Module`
//! values named "Fundamentals" are the same element as far as a collection is concerned:
//! the second one is rejected by `add`, and either one can be used to look up the first.

use std::fmt::Debug;

/// Trait that any element must implement to be stored in an `OrderedCollection`.
pub trait NamedEntity: Debug {
    /// The key used for uniqueness checks and lookups.
    fn name(&self) -> &str;
}

/// Short type name used as the `entity_type` field in log events
/// (e.g. "Lecture" instead of "course_catalog::domain::lecture::Lecture").
pub(crate) fn entity_type<T>() -> &'static str {
    std::any::type_name::<T>()
        .split("::")
        .last()
        .unwrap_or("Unknown")
}
