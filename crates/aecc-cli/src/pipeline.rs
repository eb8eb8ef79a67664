//! Grouping run pipeline with explicit stages.
//!
//! A run has four stages, each under its own span:
//! 1. **Tables**: load and index the reference pack
//! 2. **Ingest**: read the episode extract
//! 3. **Group**: classify every episode
//! 4. **Output**: write the graded extract
//!
//! The `check` pipeline loads a pack without grouping and reports defects.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::{debug, info, info_span};

use aecc_core::Grouper;
use aecc_ingest::{read_episode_file, write_episode_file};
use aecc_standards::{ReferenceStore, TableCounts, TableIssue, check_tables, load_tables};

use crate::logging::redact_value;

/// Inputs of a grouping run.
#[derive(Debug, Clone)]
pub struct GroupRun {
    /// Episode extract to read.
    pub input: PathBuf,
    /// Graded extract to write.
    pub output: PathBuf,
    /// Reference pack directory.
    pub tables_dir: PathBuf,
}

/// Outcome counts of a grouping run.
#[derive(Debug)]
pub struct RunSummary {
    pub episodes: usize,
    /// Episodes per terminal end class, sorted by class code.
    pub class_counts: BTreeMap<String, usize>,
    /// Episodes whose score matched no threshold band.
    pub unclassified: usize,
    pub output: PathBuf,
    pub elapsed_ms: u128,
}

/// Group an episode extract end to end.
pub fn run_group(run: &GroupRun) -> Result<RunSummary> {
    let started = Instant::now();

    let tables_span = info_span!("tables", dir = %run.tables_dir.display());
    let store = tables_span
        .in_scope(|| ReferenceStore::load(&run.tables_dir))
        .context("load reference pack")?;
    info!(
        diagnosis_codes = store.diagnosis_count(),
        threshold_groups = store.threshold_group_count(),
        "reference pack loaded"
    );

    let ingest_span = info_span!("ingest", input = %run.input.display());
    let mut records = ingest_span
        .in_scope(|| read_episode_file(&run.input))
        .context("read episode extract")?;

    let group_span = info_span!("group", episodes = records.len());
    let group_guard = group_span.enter();
    let grouper = Grouper::new(&store);
    let mut class_counts: BTreeMap<String, usize> = BTreeMap::new();
    let mut unclassified = 0usize;
    for record in &mut records {
        let result = grouper
            .classify(&record.to_input())
            .context("classify episode")?;
        debug!(
            episode = redact_value(&result.episode_number),
            end_class = %result.end_class,
            score = result.complexity_score,
            "episode grouped"
        );
        record.apply_result(&result);
        if result.is_classified() {
            *class_counts.entry(result.end_class).or_insert(0) += 1;
        } else {
            unclassified += 1;
        }
    }
    drop(group_guard);

    let output_span = info_span!("output", output = %run.output.display());
    output_span
        .in_scope(|| write_episode_file(&run.output, &records))
        .context("write graded extract")?;

    Ok(RunSummary {
        episodes: records.len(),
        class_counts,
        unclassified,
        output: run.output.clone(),
        elapsed_ms: started.elapsed().as_millis(),
    })
}

/// Report of a reference pack check.
#[derive(Debug)]
pub struct CheckReport {
    pub tables_dir: PathBuf,
    pub counts: TableCounts,
    pub issues: Vec<TableIssue>,
}

/// Load a reference pack and report its defects.
pub fn run_check(tables_dir: &Path) -> Result<CheckReport> {
    let tables = load_tables(tables_dir).context("load reference pack")?;
    let counts = TableCounts::from_tables(&tables);
    let issues = check_tables(&tables);
    info!(
        dir = %tables_dir.display(),
        issues = issues.len(),
        "reference pack checked"
    );
    Ok(CheckReport {
        tables_dir: tables_dir.to_path_buf(),
        counts,
        issues,
    })
}
