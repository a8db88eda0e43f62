use serde::{Deserialize, Serialize};

use crate::model::rating::RatingStore;

/// Metadata about one assessment. Every field is passed through verbatim;
/// dates stay in whatever textual form the collaborator supplied.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssessmentInfo {
    pub pharmacist_name: String,
    pub pharmacist_credentials: String,
    pub unit: String,
    pub assessor_name: String,
    pub assessor_credentials: String,
    pub assessor_role: String,
    pub assessment_type: String,
    pub assessment_date: String,
    pub obs_start: String,
    pub obs_end: String,
    pub context_notes: String,
}

#[derive(Debug, Clone, Copy)]
pub struct InfoField {
    /// Column header in the tabular export.
    pub column: &'static str,
    /// Row label in the document's information table.
    pub caption: &'static str,
    pub get: fn(&AssessmentInfo) -> &str,
}

const INFO_FIELDS: &[InfoField] = &[
    InfoField {
        column: "Pharmacist Name",
        caption: "Pharmacist Being Assessed",
        get: |i| i.pharmacist_name.as_str(),
    },
    InfoField {
        column: "Pharmacist Credentials",
        caption: "Pharmacist Credentials",
        get: |i| i.pharmacist_credentials.as_str(),
    },
    InfoField {
        column: "Unit",
        caption: "Clinical Unit / Service",
        get: |i| i.unit.as_str(),
    },
    InfoField {
        column: "Assessor Name",
        caption: "Assessor Name",
        get: |i| i.assessor_name.as_str(),
    },
    InfoField {
        column: "Assessor Credentials",
        caption: "Assessor Credentials",
        get: |i| i.assessor_credentials.as_str(),
    },
    InfoField {
        column: "Assessor Role",
        caption: "Assessor Role",
        get: |i| i.assessor_role.as_str(),
    },
    InfoField {
        column: "Assessment Type",
        caption: "Assessment Type",
        get: |i| i.assessment_type.as_str(),
    },
    InfoField {
        column: "Assessment Date",
        caption: "Assessment Date",
        get: |i| i.assessment_date.as_str(),
    },
    InfoField {
        column: "Obs Start",
        caption: "Observation Period Start",
        get: |i| i.obs_start.as_str(),
    },
    InfoField {
        column: "Obs End",
        caption: "Observation Period End",
        get: |i| i.obs_end.as_str(),
    },
    InfoField {
        column: "Context Notes",
        caption: "Assessment Context / Notes",
        get: |i| i.context_notes.as_str(),
    },
];

pub fn info_fields() -> &'static [InfoField] {
    INFO_FIELDS
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FollowUp {
    #[default]
    NoneRequired,
    ThreeMonths,
    SixMonths,
    TwelveMonths,
    ThirtyToSixtyDays,
    FormalImprovement,
}

impl FollowUp {
    pub fn label(self) -> &'static str {
        match self {
            FollowUp::NoneRequired => {
                "No follow-up required — performance meets or exceeds expectations"
            }
            FollowUp::ThreeMonths => "3 months — minor development areas identified",
            FollowUp::SixMonths => "6 months — moderate development areas, targeted plan in place",
            FollowUp::TwelveMonths => "12 months — routine annual review cycle",
            FollowUp::ThirtyToSixtyDays => {
                "30–60 days — significant concerns, close follow-up needed"
            }
            FollowUp::FormalImprovement => "Refer to formal performance improvement process",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NarrativeSet {
    pub strengths: String,
    pub development: String,
    pub goals: String,
    pub summary: String,
    pub follow_up: FollowUp,
    pub attestation: bool,
}

#[derive(Debug, Clone, Copy)]
pub struct NarrativeField {
    pub column: &'static str,
    pub title: &'static str,
    pub get: fn(&NarrativeSet) -> &str,
}

const NARRATIVE_FIELDS: &[NarrativeField] = &[
    NarrativeField {
        column: "Strengths",
        title: "Clinical Strengths",
        get: |n| n.strengths.as_str(),
    },
    NarrativeField {
        column: "Areas for Development",
        title: "Areas for Development",
        get: |n| n.development.as_str(),
    },
    NarrativeField {
        column: "Action Plan / Goals",
        title: "Action Plan / Goals",
        get: |n| n.goals.as_str(),
    },
    NarrativeField {
        column: "Overall Summary",
        title: "Overall Performance Summary",
        get: |n| n.summary.as_str(),
    },
];

pub fn narrative_fields() -> &'static [NarrativeField] {
    NARRATIVE_FIELDS
}

/// The snapshot handed over at export time.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssessmentRecord {
    pub info: AssessmentInfo,
    pub ratings: RatingStore,
    pub narratives: NarrativeSet,
}
