//! Episode extract reading and graded output writing.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use aecc_model::{EpisodeInput, GroupingResult};

use crate::error::IngestError;

/// One row of an episode extract.
///
/// Input column names follow the jurisdictional extract the grouper
/// consumes. The three result columns are optional on input and appended on
/// output, so a graded file can be re-read (and re-graded) unchanged.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EpisodeRecord {
    /// Episode identifier.
    pub stateid: String,
    /// Triage category.
    pub edtriag: String,
    /// Episode end status.
    pub eddepst: String,
    /// Type of visit to the emergency department.
    pub edvisit: String,
    /// Age in completed years.
    pub ageyears: String,
    /// Transport mode (arrival).
    pub transmode: String,
    /// Principal diagnosis short list code.
    pub x11ddx1: String,
    /// Clinical care commencement date/time.
    pub servdate: String,

    #[serde(rename = "ECDG_Subgroup", default)]
    pub ecdg_subgroup: String,
    #[serde(rename = "ComplexityScore", default)]
    pub complexity_score: f64,
    #[serde(rename = "AECC_EndClass", default)]
    pub aecc_end_class: String,
}

impl EpisodeRecord {
    /// The episode attributes the grouper consumes.
    pub fn to_input(&self) -> EpisodeInput {
        EpisodeInput {
            episode_number: self.stateid.clone(),
            triage_category: self.edtriag.clone(),
            episode_end_status: self.eddepst.clone(),
            visit_type: self.edvisit.clone(),
            age_years: self.ageyears.clone(),
            transport_mode: self.transmode.clone(),
            principal_diagnosis: self.x11ddx1.clone(),
            service_date: self.servdate.clone(),
        }
    }

    /// Copy the grouping outcome onto the record's result columns.
    pub fn apply_result(&mut self, result: &GroupingResult) {
        self.ecdg_subgroup = result.ecdg_subgroup.clone();
        self.complexity_score = result.complexity_score;
        self.aecc_end_class = result.end_class.clone();
    }
}

/// Read an episode extract. Blank lines are skipped; a malformed row fails
/// the whole read rather than silently dropping episodes.
pub fn read_episode_file(path: &Path) -> Result<Vec<EpisodeRecord>, IngestError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)
        .map_err(|e| IngestError::read(path, e))?;

    let mut records = Vec::new();
    for row in reader.deserialize() {
        let record: EpisodeRecord = row.map_err(|e| IngestError::read(path, e))?;
        records.push(record);
    }
    debug!(path = %path.display(), episodes = records.len(), "read episode extract");
    Ok(records)
}

/// Write graded episode records with the result columns appended.
pub fn write_episode_file(path: &Path, records: &[EpisodeRecord]) -> Result<(), IngestError> {
    let mut writer = csv::Writer::from_path(path).map_err(|e| IngestError::write(path, e))?;
    for record in records {
        writer
            .serialize(record)
            .map_err(|e| IngestError::write(path, e))?;
    }
    writer.flush().map_err(|e| IngestError::write(path, e))?;
    debug!(path = %path.display(), episodes = records.len(), "wrote graded extract");
    Ok(())
}
