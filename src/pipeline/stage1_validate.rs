use thiserror::Error;

use crate::model::assessment::{AssessmentInfo, NarrativeSet};
use crate::model::rating::RangeError;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("required field '{0}' is empty; fill it in before exporting")]
    MissingField(&'static str),
    #[error("assessor attestation is not confirmed; the formatted report requires it")]
    NotAttested,
    #[error(transparent)]
    Range(#[from] RangeError),
}

/// Both exporters refuse to emit a record without the two identities.
pub fn check_identity(info: &AssessmentInfo) -> Result<(), ExportError> {
    if info.pharmacist_name.trim().is_empty() {
        return Err(ExportError::MissingField("pharmacist_name"));
    }
    if info.assessor_name.trim().is_empty() {
        return Err(ExportError::MissingField("assessor_name"));
    }
    Ok(())
}

pub fn check_attestation(narratives: &NarrativeSet) -> Result<(), ExportError> {
    if narratives.attestation {
        Ok(())
    } else {
        Err(ExportError::NotAttested)
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage1_validate.rs"]
mod tests;
