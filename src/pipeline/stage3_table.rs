use crate::model::assessment::{info_fields, narrative_fields};
use crate::model::scores::Scorecard;
use crate::pipeline::ExportInputs;
use crate::pipeline::stage1_validate::{ExportError, check_identity};
use crate::pipeline::stage2_aggregate::aggregate;
use crate::report::{CellValue, TableRow, truncate_chars};

const ITEM_PROMPT_CHARS: usize = 80;

pub const OVERALL_AVERAGE_COLUMN: &str = "Overall Average Score";
pub const OVERALL_CATEGORY_COLUMN: &str = "Overall Performance Category";
pub const ITEMS_RATED_COLUMN: &str = "Items Rated (n)";
pub const FOLLOW_UP_COLUMN: &str = "Recommended Follow-Up";
pub const ATTESTATION_COLUMN: &str = "Attestation Confirmed";

pub fn to_row(inputs: &ExportInputs<'_>) -> Result<TableRow, ExportError> {
    check_identity(inputs.info)?;
    let scorecard = aggregate(inputs.catalog, inputs.ratings)?;
    build_row(inputs, &scorecard)
}

pub fn domain_average_column(short_label: &str) -> String {
    format!("Domain Avg — {}", short_label)
}

pub fn item_column(short_label: &str, prompt: &str) -> String {
    format!(
        "[{}] {}",
        short_label,
        truncate_chars(prompt, ITEM_PROMPT_CHARS)
    )
}

/// Flattens one assessment into a single row. The scorecard must come from
/// the same catalog and ratings held by `inputs`.
pub fn build_row(inputs: &ExportInputs<'_>, scorecard: &Scorecard) -> Result<TableRow, ExportError> {
    let catalog = inputs.catalog;
    let mut columns: Vec<(String, CellValue)> =
        Vec::with_capacity(info_fields().len() + catalog.domains().len() + catalog.total_items() + 12);

    for field in info_fields() {
        columns.push((
            field.column.to_string(),
            CellValue::Text((field.get)(inputs.info).to_string()),
        ));
    }

    for (domain, score) in catalog.domains().iter().zip(&scorecard.domains) {
        columns.push((
            domain_average_column(&domain.short_label),
            CellValue::average_or_empty(score.average),
        ));
    }

    let overall = &scorecard.overall;
    columns.push((
        OVERALL_AVERAGE_COLUMN.to_string(),
        CellValue::average_or_empty(overall.average),
    ));
    columns.push((
        OVERALL_CATEGORY_COLUMN.to_string(),
        CellValue::Text(overall.category.label().to_string()),
    ));
    columns.push((
        ITEMS_RATED_COLUMN.to_string(),
        CellValue::Count(overall.rated_count),
    ));

    for domain in catalog.domains() {
        for item in &domain.items {
            let level = inputs.ratings.level(&item.id)?;
            let value = if level.is_rated() {
                CellValue::Rating(level.score())
            } else {
                CellValue::NotApplicable
            };
            columns.push((item_column(&domain.short_label, &item.prompt), value));
        }
    }

    for field in narrative_fields() {
        columns.push((
            field.column.to_string(),
            CellValue::Text((field.get)(inputs.narratives).to_string()),
        ));
    }
    columns.push((
        FOLLOW_UP_COLUMN.to_string(),
        CellValue::Text(inputs.narratives.follow_up.label().to_string()),
    ));
    columns.push((
        ATTESTATION_COLUMN.to_string(),
        CellValue::Flag(inputs.narratives.attestation),
    ));

    Ok(TableRow { columns })
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage3_table.rs"]
mod tests;
