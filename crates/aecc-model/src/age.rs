//! Age brackets used by the complexity-score regression.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Age bracket derived from age in completed years.
///
/// The eight scoring brackets carry regression coefficients; `Other` covers
/// negative, implausibly large (119 and over) and unparseable ages and fails
/// the Step 3 validation gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AgeBracket {
    Age0To4,
    Age5To9,
    Age10To14,
    Age15To69,
    Age70To74,
    Age75To79,
    Age80To84,
    Age85Plus,
    Other,
}

/// The brackets accepted by the Step 3 validation gate.
pub const SCORING_BRACKETS: [AgeBracket; 8] = [
    AgeBracket::Age0To4,
    AgeBracket::Age5To9,
    AgeBracket::Age10To14,
    AgeBracket::Age15To69,
    AgeBracket::Age70To74,
    AgeBracket::Age75To79,
    AgeBracket::Age80To84,
    AgeBracket::Age85Plus,
];

impl AgeBracket {
    /// Map an age in completed years to its bracket. `None` (age not
    /// reported or unparseable) maps to `Other`, never to the 0-4 bracket.
    pub fn from_age(age_years: Option<i32>) -> Self {
        let Some(age) = age_years else {
            return AgeBracket::Other;
        };
        match age {
            i32::MIN..=-1 => AgeBracket::Other,
            0..=4 => AgeBracket::Age0To4,
            5..=9 => AgeBracket::Age5To9,
            10..=14 => AgeBracket::Age10To14,
            15..=69 => AgeBracket::Age15To69,
            70..=74 => AgeBracket::Age70To74,
            75..=79 => AgeBracket::Age75To79,
            80..=84 => AgeBracket::Age80To84,
            85..=118 => AgeBracket::Age85Plus,
            _ => AgeBracket::Other,
        }
    }

    /// The bracket label as it appears in the published coefficient tables.
    pub fn as_str(&self) -> &'static str {
        match self {
            AgeBracket::Age0To4 => "0-4",
            AgeBracket::Age5To9 => "5-9",
            AgeBracket::Age10To14 => "10-14",
            AgeBracket::Age15To69 => "15-69",
            AgeBracket::Age70To74 => "70-74",
            AgeBracket::Age75To79 => "75-79",
            AgeBracket::Age80To84 => "80-84",
            AgeBracket::Age85Plus => "85+",
            AgeBracket::Other => "Other",
        }
    }

    /// True for the eight brackets that carry regression coefficients.
    pub fn is_scoring(&self) -> bool {
        !matches!(self, AgeBracket::Other)
    }
}

impl fmt::Display for AgeBracket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for AgeBracket {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "0-4" => Ok(AgeBracket::Age0To4),
            "5-9" => Ok(AgeBracket::Age5To9),
            "10-14" => Ok(AgeBracket::Age10To14),
            "15-69" => Ok(AgeBracket::Age15To69),
            "70-74" => Ok(AgeBracket::Age70To74),
            "75-79" => Ok(AgeBracket::Age75To79),
            "80-84" => Ok(AgeBracket::Age80To84),
            "85+" => Ok(AgeBracket::Age85Plus),
            "Other" => Ok(AgeBracket::Other),
            other => Err(format!("unknown age bracket: {other}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bracket_boundaries_are_inclusive() {
        assert_eq!(AgeBracket::from_age(Some(0)), AgeBracket::Age0To4);
        assert_eq!(AgeBracket::from_age(Some(4)), AgeBracket::Age0To4);
        assert_eq!(AgeBracket::from_age(Some(5)), AgeBracket::Age5To9);
        assert_eq!(AgeBracket::from_age(Some(14)), AgeBracket::Age10To14);
        assert_eq!(AgeBracket::from_age(Some(15)), AgeBracket::Age15To69);
        assert_eq!(AgeBracket::from_age(Some(69)), AgeBracket::Age15To69);
        assert_eq!(AgeBracket::from_age(Some(70)), AgeBracket::Age70To74);
        assert_eq!(AgeBracket::from_age(Some(84)), AgeBracket::Age80To84);
        assert_eq!(AgeBracket::from_age(Some(85)), AgeBracket::Age85Plus);
        assert_eq!(AgeBracket::from_age(Some(118)), AgeBracket::Age85Plus);
    }

    #[test]
    fn out_of_range_and_unknown_ages_are_other() {
        assert_eq!(AgeBracket::from_age(Some(-1)), AgeBracket::Other);
        assert_eq!(AgeBracket::from_age(Some(119)), AgeBracket::Other);
        assert_eq!(AgeBracket::from_age(Some(200)), AgeBracket::Other);
        assert_eq!(AgeBracket::from_age(None), AgeBracket::Other);
        assert!(!AgeBracket::Other.is_scoring());
    }

    #[test]
    fn labels_round_trip() {
        for bracket in SCORING_BRACKETS {
            assert_eq!(bracket.as_str().parse::<AgeBracket>().unwrap(), bracket);
        }
        assert!("85silly".parse::<AgeBracket>().is_err());
    }
}
