//! Catalog data types. Each parent owns one
//! [`OrderedCollection`](crate::framework::OrderedCollection) of its children.

pub mod course;
pub mod lecture;
pub mod material;
pub mod module;

pub use course::*;
pub use lecture::*;
pub use material::*;
pub use module::*;
