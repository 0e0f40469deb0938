//! # Course Catalog
//!
//! A hierarchical course catalog: a [`Course`](domain::Course) holds ordered
//! [`Module`](domain::Module)s, a module holds ordered [`Lecture`](domain::Lecture)s and a
//! lecture holds ordered supplementary [`Material`](domain::Material)s.
//!
//! Every containment level follows the same rules:
//! - children are uniquely named within their parent;
//! - children have a dense 1-based position that can be queried and rearranged;
//! - every mutating operation returns a [`CollectionResult`](framework::CollectionResult)
//!   and leaves the parent unchanged on failure.
//!
//! ## Core Concepts
//!
//! ### Generics: one collection for every level
//! [`OrderedCollection<T: NamedEntity>`](framework::OrderedCollection) implements
//! add/remove/move/position once. Parents own one instance each and expose it through the
//! [`Container`](framework::Container) trait, whose provided methods do the delegation.
//!
//! ### Transfers
//! [`transfer`](framework::transfer) moves a child between two collections as one unit of
//! work: if the destination rejects it, the child goes back to its original position in
//! the source. [`Course::move_lecture`](domain::Course::move_lecture) is the catalog-level
//! entry point.
//!
//! ## Module Tour
//!
//! - [`framework`] - The generic core: `NamedEntity`, `OrderedCollection`, `Container`,
//!   `transfer`, `CollectionError`.
//! - [`domain`] - `Course`, `Module`, `Lecture`, `Material`.
//! - [`lifecycle`] - Tracing setup for binaries.
//!
//! ## Example
//!
//! ```
//! use course_catalog::domain::{Course, Module};
//! use course_catalog::framework::Container;
//!
//! let mut course = Course::new("azure-devops", "Continuous Delivery and DevOps with Azure DevOps");
//! let fundamentals = Module::new("Fundamentals");
//! let overview = Module::new("Course Overview");
//! course.add(fundamentals.clone()).unwrap();
//! course.add(overview.clone()).unwrap();
//!
//! course.move_to(&overview, 1).unwrap();
//! assert_eq!(course.position(&overview), Ok(1));
//! assert_eq!(course.position(&fundamentals), Ok(2));
//! ```
//!
//! ### Running the Demo
//!
//! ```bash
//! RUST_LOG=info cargo run
//! ```

pub mod domain;
pub mod framework;
pub mod lifecycle;
