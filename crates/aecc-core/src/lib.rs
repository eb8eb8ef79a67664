//! The AECC grouping engine.
//!
//! Implements the published four-step algorithm: pre-ECDG processing,
//! diagnosis group assignment, complexity scoring, and final class
//! allocation. Reference data is consumed through
//! [`aecc_model::ReferenceProvider`]; see `aecc-standards` for the
//! file-backed and in-memory implementations.

pub mod grouper;
pub mod normalize;
pub mod preclass;
pub mod score;

pub use grouper::Grouper;
