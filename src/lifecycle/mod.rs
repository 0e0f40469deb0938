//! Process-level setup for binaries built on the catalog.
//!
//! - [`setup_tracing`] - Initializes the tracing/logging infrastructure from `RUST_LOG`

pub mod tracing;

pub use self::tracing::*;
