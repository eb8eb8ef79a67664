//! The grouping engine: four ordered steps with short-circuit terminals.

use aecc_model::{
    AgeBracket, EpisodeInput, ErrorClass, GroupingResult, ProviderError, ReferenceProvider, codes,
};
use tracing::{debug, warn};

use crate::normalize::{normalize_diagnosis_code, parse_age_years, parse_service_datetime};
use crate::preclass::{PreClassInput, pre_classify};
use crate::score::complexity_score;

/// The AECC grouper.
///
/// A pure function of (episode input, reference lookups): no state is held
/// between calls, so one grouper can serve concurrent callers as long as
/// its provider tolerates concurrent reads.
pub struct Grouper<'a> {
    reference: &'a dyn ReferenceProvider,
}

impl<'a> Grouper<'a> {
    pub fn new(reference: &'a dyn ReferenceProvider) -> Self {
        Self { reference }
    }

    /// Classify one episode.
    ///
    /// Anomalies in the episode itself (missing date, unparseable age,
    /// unknown codes) become terminal class codes on the result; `Err` is
    /// reserved for reference store failures.
    pub fn classify(&self, input: &EpisodeInput) -> Result<GroupingResult, ProviderError> {
        let mut result = GroupingResult::from_input(input);

        let diagnosis_code = normalize_diagnosis_code(&input.principal_diagnosis);
        let service_date = parse_service_datetime(&input.service_date);
        let age_years = parse_age_years(&input.age_years);

        // Step 1: pre-ECDG processing.
        if let Some(class) = pre_classify(&PreClassInput {
            episode_end_status: &input.episode_end_status,
            visit_type: &input.visit_type,
            service_date_valid: service_date.is_some(),
        }) {
            result.end_class = class.to_string();
            return Ok(result);
        }

        // Step 2: assign the ECDG and its subcategory.
        if diagnosis_code.trim().is_empty() {
            result.end_class = ErrorClass::MissingDiagnosis.code().to_string();
            return Ok(result);
        }
        let Some(group) = self.reference.diagnosis_group(&diagnosis_code)? else {
            result.end_class = ErrorClass::InvalidDiagnosis.code().to_string();
            return Ok(result);
        };
        result.ecdg = group.ecdg;
        result.ecdg_subgroup = group.subgroup;
        debug!(
            ecdg = %result.ecdg,
            subgroup = %result.ecdg_subgroup,
            "assigned diagnosis group"
        );

        // Step 3: complexity score.
        let bracket = AgeBracket::from_age(age_years);
        result.age_bracket = bracket.as_str().to_string();

        // Transport mode has no recognized-set check here: the published
        // grouper accepts any non-blank value, and adding one would move
        // episodes into E9904Z relative to the reference vectors.
        let scoring_inputs_valid = !input.transport_mode.trim().is_empty()
            && !input.episode_end_status.trim().is_empty()
            && !input.triage_category.trim().is_empty()
            && bracket.is_scoring()
            && codes::VALID_EPISODE_END_STATUSES.contains(&input.episode_end_status.as_str())
            && codes::VALID_TRIAGE_CATEGORIES.contains(&input.triage_category.as_str())
            && codes::VALID_VISIT_TYPES.contains(&input.visit_type.as_str());
        if !scoring_inputs_valid {
            result.end_class = ErrorClass::OtherError.code().to_string();
            return Ok(result);
        }

        let intercept = self
            .reference
            .intercept(&result.ecdg, &result.ecdg_subgroup)?
            .unwrap_or_default();
        result.intercept = intercept.intercept;
        result.sub_intercept = intercept.sub_intercept;

        let triage = self
            .reference
            .triage_coefficients(
                &result.ecdg,
                &input.episode_end_status,
                &input.transport_mode,
                &input.triage_category,
            )?
            .unwrap_or_default();
        result.episode_end_status_coefficient = triage.episode_end_status;
        result.transport_mode_coefficient = triage.transport_mode;
        result.triage_category_coefficient = triage.triage_category;

        result.age_group_coefficient = self
            .reference
            .age_coefficient(&result.ecdg, bracket)?
            .unwrap_or_default();

        let interaction = self
            .reference
            .interaction_coefficients(&result.ecdg, &input.triage_category, bracket)?
            .unwrap_or_default();
        result.age_interaction = interaction.age;
        result.triage_interaction = interaction.triage;

        // The interaction terms apply to admitted episodes only.
        result.interaction = if input.episode_end_status == codes::episode_end_status::ADMITTED {
            result.age_interaction + result.triage_interaction
        } else {
            0.0
        };

        result.predicted_value = result.intercept
            + result.sub_intercept
            + result.transport_mode_coefficient
            + result.episode_end_status_coefficient
            + result.triage_category_coefficient
            + result.age_group_coefficient
            + result.interaction;
        result.complexity_score = complexity_score(result.predicted_value);

        // Step 4: allocate to the final class within the ECDG. The provider
        // returns candidate bands sorted by minimum score descending, so the
        // first row is the tightest lower bound the score satisfies.
        let rows = self
            .reference
            .threshold_rows(&result.ecdg, result.complexity_score)?;
        match rows.first() {
            Some(row) => result.end_class = row.class_code.clone(),
            None => {
                warn!(
                    ecdg = %result.ecdg,
                    score = result.complexity_score,
                    "no threshold band matched; episode left unclassified"
                );
            }
        }

        Ok(result)
    }
}
