//! Data model for the Australian Emergency Care Classification grouper.
//!
//! Defines the episode input and result records, the fixed pre-ECDG and
//! error classes, the recognized code sets, the age brackets, and the
//! read-only reference-data contract ([`ReferenceProvider`]) the grouping
//! engine consumes.

pub mod age;
pub mod classes;
pub mod codes;
pub mod episode;
pub mod reference;
pub mod result;

pub use age::AgeBracket;
pub use classes::{ERROR_CLASSES, ErrorClass, PRE_ECDG_CLASSES, PreEcdgClass};
pub use episode::EpisodeInput;
pub use reference::{
    DiagnosisGroup, Intercept, InteractionCoefficients, ProviderError, ReferenceProvider,
    ThresholdRow, TriageCoefficients,
};
pub use result::GroupingResult;
