//! Reference table loading and lookup stores for the AECC grouper.
//!
//! The grouping engine sees reference data only through
//! [`aecc_model::ReferenceProvider`]. This crate supplies the two
//! implementations: [`ReferenceStore`], backed by a CSV reference pack on
//! disk, and [`MemoryProvider`], built programmatically for tests and
//! embedding callers. The licensed AECC appendix tables are distributed
//! separately; the pack directory defaults to the workspace `tables/`
//! sample and can be overridden with `AECC_TABLES_DIR`.

pub mod csv_utils;
pub mod doctor;
pub mod error;
pub mod loaders;
pub mod memory;
pub mod store;
pub mod tables;

pub use csv_utils::{TABLES_ENV_VAR, default_tables_root};
pub use doctor::{TableCounts, TableIssue, check_tables};
pub use error::StandardsError;
pub use loaders::{load_default_tables, load_tables};
pub use memory::MemoryProvider;
pub use store::ReferenceStore;
pub use tables::ReferenceTables;
