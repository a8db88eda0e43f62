use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use clap::ValueEnum;
use tracing::info;

use crate::model::assessment::AssessmentInfo;
use crate::pipeline::stage4_document::RenderedDocument;
use crate::report::TableRow;
use crate::report::csv::render_row_csv;
use crate::report::json::render_row_json;

const ARTIFACT_PREFIX: &str = "PharmAssessment";
const UNDATED: &str = "undated";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum TableFormat {
    #[default]
    Csv,
    Json,
}

impl TableFormat {
    pub fn extension(self) -> &'static str {
        match self {
            TableFormat::Csv => "csv",
            TableFormat::Json => "json",
        }
    }
}

/// `PharmAssessment_<subject>_<date>`, safe to use as a file name.
pub fn artifact_stem(info: &AssessmentInfo) -> String {
    let subject = info
        .pharmacist_name
        .trim()
        .replace(", ", "_")
        .replace(' ', "_")
        .replace(['/', '\\'], "_");
    let date = info.assessment_date.trim().replace(['/', '\\'], "_");
    let date = if date.is_empty() { UNDATED } else { date.as_str() };
    format!("{}_{}_{}", ARTIFACT_PREFIX, subject, date)
}

pub fn write_table(
    out_dir: &Path,
    stem: &str,
    row: &TableRow,
    format: TableFormat,
) -> std::io::Result<PathBuf> {
    fs::create_dir_all(out_dir)?;
    let contents = match format {
        TableFormat::Csv => render_row_csv(row),
        TableFormat::Json => {
            let mut json = render_row_json(row).map_err(std::io::Error::other)?;
            json.push('\n');
            json
        }
    };
    let path = out_dir.join(format!("{}.{}", stem, format.extension()));
    write_bytes(&path, contents.as_bytes())?;
    info!(path = %path.display(), columns = row.columns.len(), "wrote table export");
    Ok(path)
}

pub fn write_document(
    out_dir: &Path,
    stem: &str,
    doc: &RenderedDocument,
) -> std::io::Result<PathBuf> {
    fs::create_dir_all(out_dir)?;
    let path = out_dir.join(format!("{}.{}", stem, doc.extension));
    write_bytes(&path, &doc.bytes)?;
    info!(path = %path.display(), bytes = doc.bytes.len(), "wrote report document");
    Ok(path)
}

fn write_bytes(path: &Path, bytes: &[u8]) -> std::io::Result<()> {
    let mut w = BufWriter::new(File::create(path)?);
    w.write_all(bytes)?;
    w.flush()
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage5_write.rs"]
mod tests;
