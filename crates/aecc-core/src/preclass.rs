//! Step 1: pre-ECDG processing.
//!
//! Administrative dispositions are assigned before any reference lookup,
//! expressed as an ordered rule list evaluated first-match-wins. The order
//! carries meaning: dead on arrival is reported with visit type 5, a value
//! the later validity rule would otherwise send to `E9901Z`.

use aecc_model::{ErrorClass, PreEcdgClass, codes};

/// The episode facts the Step 1 rules see.
#[derive(Debug, Clone, Copy)]
pub struct PreClassInput<'a> {
    pub episode_end_status: &'a str,
    pub visit_type: &'a str,
    /// Whether the clinical care commencement date/time parsed.
    pub service_date_valid: bool,
}

struct PreClassRule {
    class: &'static str,
    applies: fn(&PreClassInput<'_>) -> bool,
}

const RULES: &[PreClassRule] = &[
    // Not attended by a healthcare professional: did not wait, or left
    // after registration without being seen.
    PreClassRule {
        class: PreEcdgClass::NotAttended.code(),
        applies: |e| {
            e.episode_end_status == codes::episode_end_status::DID_NOT_WAIT
                || e.episode_end_status == codes::episode_end_status::LEFT_WITHOUT_SERVICE
        },
    },
    // Left at own risk counts as not attended only when no valid clinical
    // care commencement date/time was reported.
    PreClassRule {
        class: PreEcdgClass::NotAttended.code(),
        applies: |e| {
            e.episode_end_status == codes::episode_end_status::LEFT_AT_OWN_RISK
                && !e.service_date_valid
        },
    },
    PreClassRule {
        class: PreEcdgClass::DeadOnArrival.code(),
        applies: |e| {
            e.episode_end_status == codes::episode_end_status::DEAD_ON_ARRIVAL
                || e.visit_type == codes::visit_type::DEAD_ON_ARRIVAL
        },
    },
    PreClassRule {
        class: PreEcdgClass::PlannedReturn.code(),
        applies: |e| e.visit_type == codes::visit_type::PLANNED_RETURN,
    },
    PreClassRule {
        class: ErrorClass::InvalidVisitType.code(),
        applies: |e| !codes::VALID_VISIT_TYPES.contains(&e.visit_type),
    },
];

/// Evaluate the Step 1 rules in published order; `None` means the episode
/// is an emergency presentation and continues to Step 2.
pub fn pre_classify(input: &PreClassInput<'_>) -> Option<&'static str> {
    RULES
        .iter()
        .find(|rule| (rule.applies)(input))
        .map(|rule| rule.class)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input<'a>(status: &'a str, visit: &'a str, date_valid: bool) -> PreClassInput<'a> {
        PreClassInput {
            episode_end_status: status,
            visit_type: visit,
            service_date_valid: date_valid,
        }
    }

    #[test]
    fn not_attended_statuses() {
        assert_eq!(pre_classify(&input("4", "1", true)), Some("E0001Z"));
        assert_eq!(pre_classify(&input("8", "1", true)), Some("E0001Z"));
    }

    #[test]
    fn left_at_own_risk_needs_invalid_date() {
        assert_eq!(pre_classify(&input("5", "1", false)), Some("E0001Z"));
        assert_eq!(pre_classify(&input("5", "1", true)), None);
    }

    #[test]
    fn dead_on_arrival_fires_before_visit_type_validity() {
        // Visit type 1 is independently valid; end status 7 still wins.
        assert_eq!(pre_classify(&input("7", "1", true)), Some("E0003Z"));
        // Visit type 5 sits outside the valid set but means dead on arrival,
        // not an invalid visit type.
        assert_eq!(pre_classify(&input("1", "5", true)), Some("E0003Z"));
    }

    #[test]
    fn not_attended_outranks_planned_return() {
        assert_eq!(pre_classify(&input("4", "2", true)), Some("E0001Z"));
    }

    #[test]
    fn planned_return_and_invalid_visit_type() {
        assert_eq!(pre_classify(&input("1", "2", true)), Some("E0002Z"));
        assert_eq!(pre_classify(&input("1", "4", true)), Some("E9901Z"));
        assert_eq!(pre_classify(&input("1", "", true)), Some("E9901Z"));
    }

    #[test]
    fn emergency_presentations_fall_through() {
        assert_eq!(pre_classify(&input("1", "1", true)), None);
        assert_eq!(pre_classify(&input("6", "3", true)), None);
    }
}
