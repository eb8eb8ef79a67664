//! Episode extract ingestion for the AECC grouper.
//!
//! Reads the eight-column jurisdictional extract and writes it back with
//! the subgroup, complexity score and end class columns appended.

pub mod episode_file;
pub mod error;

pub use episode_file::{EpisodeRecord, read_episode_file, write_episode_file};
pub use error::IngestError;
