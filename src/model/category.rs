use serde::Serialize;

use crate::model::thresholds::{CategoryBoundaries, STANDARD_BOUNDARIES};

/// Performance band derived from an average score. Variants are ordered from
/// lowest to highest; `InsufficientData` sorts first and means "no average".
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PerformanceCategory {
    InsufficientData,
    NeedsSignificantDevelopment,
    Developing,
    Progressing,
    MeetsExpectations,
    Exemplary,
}

impl PerformanceCategory {
    pub fn label(self) -> &'static str {
        match self {
            PerformanceCategory::InsufficientData => "Insufficient Data",
            PerformanceCategory::NeedsSignificantDevelopment => "Needs Significant Development",
            PerformanceCategory::Developing => "Developing — Below Expectations",
            PerformanceCategory::Progressing => "Progressing — Approaching Expectations",
            PerformanceCategory::MeetsExpectations => "Meets Expectations — Practice-Ready",
            PerformanceCategory::Exemplary => "Exemplary — Exceeds Expectations",
        }
    }

    pub fn short_label(self) -> &'static str {
        match self {
            PerformanceCategory::InsufficientData => "Insufficient Data",
            PerformanceCategory::NeedsSignificantDevelopment => "Needs Significant Development",
            PerformanceCategory::Developing => "Developing",
            PerformanceCategory::Progressing => "Progressing",
            PerformanceCategory::MeetsExpectations => "Meets Expectations",
            PerformanceCategory::Exemplary => "Exemplary",
        }
    }
}

/// Presentation color for a category, as a CSS hex token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorToken {
    pub foreground: &'static str,
    pub background: &'static str,
}

pub const MUTED: ColorToken = ColorToken {
    foreground: "#94a3b8",
    background: "#f8fafc",
};

pub fn classify(average: Option<f64>) -> PerformanceCategory {
    classify_with(average, &STANDARD_BOUNDARIES)
}

pub fn classify_with(average: Option<f64>, bounds: &CategoryBoundaries) -> PerformanceCategory {
    let Some(avg) = average else {
        return PerformanceCategory::InsufficientData;
    };
    if avg < bounds.developing {
        PerformanceCategory::NeedsSignificantDevelopment
    } else if avg < bounds.progressing {
        PerformanceCategory::Developing
    } else if avg < bounds.meets_expectations {
        PerformanceCategory::Progressing
    } else if avg < bounds.exemplary {
        PerformanceCategory::MeetsExpectations
    } else {
        PerformanceCategory::Exemplary
    }
}

pub fn color_for(category: PerformanceCategory) -> ColorToken {
    match category {
        PerformanceCategory::InsufficientData => MUTED,
        PerformanceCategory::NeedsSignificantDevelopment => ColorToken {
            foreground: "#dc2626",
            background: "#fef2f2",
        },
        PerformanceCategory::Developing => ColorToken {
            foreground: "#ea580c",
            background: "#fff7ed",
        },
        PerformanceCategory::Progressing => ColorToken {
            foreground: "#ca8a04",
            background: "#fefce8",
        },
        PerformanceCategory::MeetsExpectations => ColorToken {
            foreground: "#16a34a",
            background: "#f0fdf4",
        },
        PerformanceCategory::Exemplary => ColorToken {
            foreground: "#2563eb",
            background: "#eff6ff",
        },
    }
}

pub fn color_for_average(average: Option<f64>) -> ColorToken {
    color_for(classify(average))
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/category.rs"]
mod tests;
