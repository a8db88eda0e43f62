pub mod stage1_validate;
pub mod stage2_aggregate;
pub mod stage3_table;
pub mod stage4_document;
pub mod stage5_write;

use crate::catalog::RubricCatalog;
use crate::model::assessment::{AssessmentInfo, AssessmentRecord, NarrativeSet};
use crate::model::rating::RatingStore;

/// The four inputs every exporter reads. All borrowed; nothing in the
/// pipeline mutates them.
#[derive(Debug, Clone, Copy)]
pub struct ExportInputs<'a> {
    pub info: &'a AssessmentInfo,
    pub catalog: &'a RubricCatalog,
    pub ratings: &'a RatingStore,
    pub narratives: &'a NarrativeSet,
}

impl<'a> ExportInputs<'a> {
    pub fn new(record: &'a AssessmentRecord, catalog: &'a RubricCatalog) -> Self {
        Self {
            info: &record.info,
            catalog,
            ratings: &record.ratings,
            narratives: &record.narratives,
        }
    }
}
