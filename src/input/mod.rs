use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::model::assessment::AssessmentRecord;

#[derive(Debug, Error)]
pub enum InputError {
    #[error("IO error reading {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("parse error in {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Reads one assessment snapshot (`{"info", "ratings", "narratives"}`).
/// Missing sections default to empty; score ranges are checked later by the
/// aggregator so the error names the offending item.
pub fn load_record(path: &Path) -> Result<AssessmentRecord, InputError> {
    let text = std::fs::read_to_string(path).map_err(|source| InputError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_record(&text).map_err(|source| InputError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

pub fn parse_record(text: &str) -> Result<AssessmentRecord, serde_json::Error> {
    serde_json::from_str(text)
}

#[cfg(test)]
#[path = "../../tests/src_inline/input/tests.rs"]
mod tests;
