use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::thresholds::MAX_RATING;

/// One option of the six-point entrustment scale. The discriminant is the
/// stored integer score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum RatingLevel {
    NotObserved = 0,
    NeedsSignificantDevelopment = 1,
    Developing = 2,
    Progressing = 3,
    MeetsExpectations = 4,
    Exemplary = 5,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("rating for item '{item_id}' is {value}; expected an integer in 0..={max}", max = MAX_RATING)]
pub struct RangeError {
    pub item_id: String,
    pub value: i64,
}

impl RatingLevel {
    pub const ALL: [RatingLevel; 6] = [
        RatingLevel::NotObserved,
        RatingLevel::NeedsSignificantDevelopment,
        RatingLevel::Developing,
        RatingLevel::Progressing,
        RatingLevel::MeetsExpectations,
        RatingLevel::Exemplary,
    ];

    pub fn from_score(value: i64) -> Option<Self> {
        match value {
            0 => Some(RatingLevel::NotObserved),
            1 => Some(RatingLevel::NeedsSignificantDevelopment),
            2 => Some(RatingLevel::Developing),
            3 => Some(RatingLevel::Progressing),
            4 => Some(RatingLevel::MeetsExpectations),
            5 => Some(RatingLevel::Exemplary),
            _ => None,
        }
    }

    pub fn score(self) -> u8 {
        self as u8
    }

    pub fn is_rated(self) -> bool {
        self != RatingLevel::NotObserved
    }

    /// Label shown on the selection control.
    pub fn option_label(self) -> &'static str {
        match self {
            RatingLevel::NotObserved => "N/A — Not observed / Not applicable to role",
            RatingLevel::NeedsSignificantDevelopment => "1 — Needs Significant Development",
            RatingLevel::Developing => "2 — Developing (Below Expectations)",
            RatingLevel::Progressing => "3 — Progressing (Approaching Expectations)",
            RatingLevel::MeetsExpectations => "4 — Meets Expectations (Practice-Ready)",
            RatingLevel::Exemplary => "5 — Exemplary (Exceeds Expectations)",
        }
    }

    pub fn short_label(self) -> &'static str {
        match self {
            RatingLevel::NotObserved => "Not Observed",
            RatingLevel::NeedsSignificantDevelopment => "Needs Significant Development",
            RatingLevel::Developing => "Developing",
            RatingLevel::Progressing => "Progressing",
            RatingLevel::MeetsExpectations => "Meets Expectations",
            RatingLevel::Exemplary => "Exemplary",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            RatingLevel::NotObserved => {
                "Not observed or not applicable to this pharmacist's current role."
            }
            RatingLevel::NeedsSignificantDevelopment => {
                "Does not yet demonstrate expected competency. Requires significant supervision, direction, and guidance. Patient safety may be a concern without close oversight."
            }
            RatingLevel::Developing => {
                "Demonstrates basic/emerging competency. Requires direct supervision and frequent guidance. Performance is below expectations for a practice-ready pharmacist."
            }
            RatingLevel::Progressing => {
                "Demonstrates developing-to-expected competency. Able to perform with indirect supervision available. Approaches expectations; minor gaps remain."
            }
            RatingLevel::MeetsExpectations => {
                "Demonstrates expected competency for a practice-ready acute care clinical pharmacist. Practices independently and consistently. Meets all performance standards."
            }
            RatingLevel::Exemplary => {
                "Demonstrates exemplary competency well above expectations. Serves as a role model, peer resource, and mentor. Advances practice on the unit."
            }
        }
    }
}

/// Snapshot of item scores keyed by item id. Values are kept exactly as the
/// collaborator supplied them; range checks happen at aggregation time.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RatingStore {
    scores: BTreeMap<String, i64>,
}

impl RatingStore {
    /// Absent items read as `NotObserved`.
    pub fn level(&self, item_id: &str) -> Result<RatingLevel, RangeError> {
        match self.scores.get(item_id) {
            None => Ok(RatingLevel::NotObserved),
            Some(&value) => RatingLevel::from_score(value).ok_or_else(|| RangeError {
                item_id: item_id.to_string(),
                value,
            }),
        }
    }

    pub fn validate(&self) -> Result<(), RangeError> {
        for (item_id, &value) in &self.scores {
            if RatingLevel::from_score(value).is_none() {
                return Err(RangeError {
                    item_id: item_id.clone(),
                    value,
                });
            }
        }
        Ok(())
    }

    pub fn item_ids(&self) -> impl Iterator<Item = &str> {
        self.scores.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.scores.len()
    }
}

#[cfg(test)]
impl RatingStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_pairs<I, K>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, i64)>,
        K: Into<String>,
    {
        Self {
            scores: pairs.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/rating.rs"]
mod tests;
