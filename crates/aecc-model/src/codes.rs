//! Recognized code sets for the variables the grouper validates.
//!
//! These sets gate Step 1 and the Step 3 validation; values outside them
//! terminate the episode in an error class. Transport mode deliberately has
//! no recognized set (see the scorer's validation gate).

/// Visit type values accepted by the grouper.
pub const VALID_VISIT_TYPES: &[&str] = &["1", "2", "3", "5"];

/// Episode end status values that reach complexity scoring.
pub const VALID_EPISODE_END_STATUSES: &[&str] = &["1", "2", "3", "5", "6"];

/// Triage category values accepted by the grouper.
pub const VALID_TRIAGE_CATEGORIES: &[&str] = &["1", "2", "3", "4", "5"];

/// Episode end status codes with grouping significance.
pub mod episode_end_status {
    /// Admitted to this hospital.
    pub const ADMITTED: &str = "1";
    /// Departed without being admitted or referred.
    pub const DEPARTED: &str = "2";
    /// Referred to another hospital for admission.
    pub const REFERRED: &str = "3";
    /// Did not wait to be attended by a healthcare professional.
    pub const DID_NOT_WAIT: &str = "4";
    /// Left at own risk after being attended but before completion.
    pub const LEFT_AT_OWN_RISK: &str = "5";
    /// Died in the emergency department.
    pub const DIED_IN_ED: &str = "6";
    /// Dead on arrival.
    pub const DEAD_ON_ARRIVAL: &str = "7";
    /// Registered, advised of another service, and left unattended.
    pub const LEFT_WITHOUT_SERVICE: &str = "8";
}

/// Visit type codes with grouping significance.
pub mod visit_type {
    /// Emergency presentation.
    pub const EMERGENCY_PRESENTATION: &str = "1";
    /// Return visit, planned.
    pub const PLANNED_RETURN: &str = "2";
    /// Unplanned return visit.
    pub const UNPLANNED_RETURN: &str = "3";
    /// Dead on arrival.
    pub const DEAD_ON_ARRIVAL: &str = "5";
}

/// Transport mode codes with grouping significance.
pub mod transport_mode {
    /// Arrival by ambulance, air ambulance or helicopter rescue.
    pub const AMBULANCE: &str = "1";
}
