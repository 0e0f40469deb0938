//! # Observability & Tracing
//!
//! The [`setup_tracing`] function initializes structured logging with the `tracing` crate.
//! Library code only emits events; installing a subscriber is left to binaries and tests.
//!
//! ## What Gets Traced
//!
//! - **Collection operations**: Add, Remove, Move, Insert with the element `name`
//! - **Outcomes**: `position` and `size` after every successful mutation
//! - **Rejections**: duplicate names, missing elements, invalid positions (at `warn`)
//! - **Transfers**: the cross-module move and, on failure, the rollback
//!
//! Every event carries an `entity_type` field ("Module", "Lecture", ...).
//!
//! ## Usage Examples
//!
//! ```bash
//! # Successful mutations and rejections
//! RUST_LOG=info cargo run
//!
//! # Every lookup and call entry
//! RUST_LOG=debug cargo run
//!
//! # Only this crate
//! RUST_LOG=course_catalog=debug cargo run
//! ```
//!
//! With `RUST_LOG=info` the transfer from the demo reads:
//!
//! ```text
//! INFO Removed entity_type="Lecture" position=1 size=0
//! INFO Inserted entity_type="Lecture" position=2 size=3
//! INFO Transferred entity_type="Lecture" name="Branching" position=2
//! ```
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false) // entity_type already says where the event comes from
        .compact()
        .init();
}
