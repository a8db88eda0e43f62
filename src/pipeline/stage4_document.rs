use thiserror::Error;

use crate::model::assessment::{info_fields, narrative_fields};
use crate::model::category::{MUTED, color_for, color_for_average};
use crate::model::rating::RatingLevel;
use crate::model::scores::Scorecard;
use crate::pipeline::ExportInputs;
use crate::pipeline::stage1_validate::{ExportError, check_attestation, check_identity};
use crate::pipeline::stage2_aggregate::aggregate;
use crate::report::backend::BackendRegistry;
use crate::report::document::{Block, Cell, Document};
use crate::report::{EMPTY_FIELD, NOT_APPLICABLE, average_or, text_or_dash};

pub const REPORT_TITLE: &str = "CLINICAL PHARMACIST PERFORMANCE ASSESSMENT";
const REPORT_SUBTITLE: &str = "Acute Care Hospital — Peer/Manager Review";
const STANDARDS_NOTE: &str = "Grounded in ASHP Accreditation Standards (2024), ACCP Clinical Pharmacist Competencies, and the JCPP Pharmacists' Patient Care Process (PPCP)";
const NO_COMMENTS: &str = "No comments provided";
const ATTESTATION_TEXT: &str = "I attest that this assessment reflects my objective professional judgment of the pharmacist's performance based on direct observation and/or review of clinical work during the specified observation period. This evaluation was conducted in accordance with the institution's peer review process and is intended to support professional development, not punitive action. I have no conflict of interest that would compromise the objectivity of this assessment.";
const ACKNOWLEDGMENT_TEXT: &str = "□ I have reviewed this assessment and discussed it with my assessor.";
const SIGNATURE_LINE: &str = "____________________________";
const FOOTER_TEXT: &str = "CONFIDENTIAL — For Peer Review / Quality Improvement Purposes Only  •  Protected under applicable peer review confidentiality statutes  •  Grounded in ASHP Accreditation Standards (2024), ACCP Clinical Pharmacist Competencies (2019), and JCPP Pharmacists' Patient Care Process  •  Generated by Clinical Pharmacist Assessment Tool v1.0";

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("document backend '{requested}' is not available (available: {available})")]
    BackendUnavailable { requested: String, available: String },
    #[error(transparent)]
    Export(#[from] ExportError),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedDocument {
    pub bytes: Vec<u8>,
    pub extension: &'static str,
}

pub fn render(
    inputs: &ExportInputs<'_>,
    registry: &BackendRegistry,
    backend_name: &str,
) -> Result<RenderedDocument, RenderError> {
    let Some(backend) = registry.resolve(backend_name) else {
        return Err(RenderError::BackendUnavailable {
            requested: backend_name.to_string(),
            available: registry.available_names().join(", "),
        });
    };

    check_identity(inputs.info)?;
    check_attestation(inputs.narratives)?;
    let scorecard = aggregate(inputs.catalog, inputs.ratings).map_err(ExportError::from)?;
    let doc = build_document(inputs, &scorecard)?;

    Ok(RenderedDocument {
        bytes: backend.encode(&doc),
        extension: backend.extension(),
    })
}

/// Lays out the whole report. Numbers, categories and colors are read from
/// `scorecard`; nothing is recomputed here.
pub fn build_document(
    inputs: &ExportInputs<'_>,
    scorecard: &Scorecard,
) -> Result<Document, ExportError> {
    let mut blocks = vec![
        Block::Banner {
            title: REPORT_TITLE.to_string(),
            subtitle: REPORT_SUBTITLE.to_string(),
        },
        Block::Note(Cell::plain(STANDARDS_NOTE)),
        Block::Rule,
        Block::Heading("ASSESSMENT INFORMATION".to_string()),
        Block::Fields(
            info_fields()
                .iter()
                .map(|f| (f.caption.to_string(), text_or_dash((f.get)(inputs.info))))
                .collect(),
        ),
        Block::Rule,
    ];

    push_overall(&mut blocks, scorecard);
    push_domain_summary(&mut blocks, inputs, scorecard);
    push_details(&mut blocks, inputs)?;
    push_narratives(&mut blocks, inputs);
    push_attestation(&mut blocks, inputs);
    blocks.push(Block::Footer(FOOTER_TEXT.to_string()));

    Ok(Document {
        title: format!("{} — {}", REPORT_TITLE, inputs.info.pharmacist_name.trim()),
        blocks,
    })
}

fn push_overall(blocks: &mut Vec<Block>, scorecard: &Scorecard) {
    let overall = &scorecard.overall;
    blocks.push(Block::Heading("OVERALL PERFORMANCE SUMMARY".to_string()));
    blocks.push(Block::Summary {
        score: Cell::colored(
            average_or(overall.average, NOT_APPLICABLE),
            color_for(overall.category).foreground,
        ),
        scale: "out of 5.0".to_string(),
        category: overall.category.label().to_string(),
        detail: format!(
            "{} of {} items rated",
            overall.rated_count, overall.total_items
        ),
    });
}

fn push_domain_summary(blocks: &mut Vec<Block>, inputs: &ExportInputs<'_>, scorecard: &Scorecard) {
    blocks.push(Block::Heading("DOMAIN SCORES SUMMARY".to_string()));
    let rows = inputs
        .catalog
        .domains()
        .iter()
        .zip(&scorecard.domains)
        .map(|(domain, score)| {
            vec![
                Cell::plain(domain.short_label.clone()),
                Cell::colored(
                    average_or(score.average, EMPTY_FIELD),
                    color_for(score.category).foreground,
                ),
                Cell::plain(score.category.label()),
                Cell::plain(format!("{} / {}", score.rated_count, score.total_count)),
            ]
        })
        .collect();
    blocks.push(Block::Grid {
        columns: vec![
            "Domain".to_string(),
            "Avg Score".to_string(),
            "Performance Category".to_string(),
            "Items Rated".to_string(),
        ],
        rows,
    });
}

fn push_details(blocks: &mut Vec<Block>, inputs: &ExportInputs<'_>) -> Result<(), ExportError> {
    blocks.push(Block::Heading("DETAILED ASSESSMENT RATINGS".to_string()));
    blocks.push(Block::Note(Cell::plain(scale_legend())));

    for domain in inputs.catalog.domains() {
        let mut rows = Vec::with_capacity(domain.items.len());
        for item in &domain.items {
            let level = inputs.ratings.level(&item.id)?;
            let prompt = if item.optional {
                format!("{} [Optional]", item.prompt)
            } else {
                item.prompt.clone()
            };
            let (rating, label) = if level.is_rated() {
                let color = color_for_average(Some(f64::from(level.score()))).foreground;
                (
                    Cell::colored(level.score().to_string(), color),
                    Cell {
                        color: Some(color),
                        ..Cell::plain(level.short_label())
                    },
                )
            } else {
                (
                    Cell {
                        color: Some(MUTED.foreground),
                        ..Cell::muted(NOT_APPLICABLE)
                    },
                    Cell::muted(RatingLevel::NotObserved.short_label()),
                )
            };
            rows.push(vec![Cell::plain(prompt), rating, label]);
        }
        blocks.push(Block::KeepTogether(vec![
            Block::Subheading(domain.title.clone()),
            Block::Grid {
                columns: vec![
                    "Assessment Item".to_string(),
                    "Rating".to_string(),
                    "Performance Category".to_string(),
                ],
                rows,
            },
        ]));
    }
    Ok(())
}

fn scale_legend() -> String {
    let mut parts: Vec<String> = RatingLevel::ALL
        .iter()
        .filter(|l| l.is_rated())
        .map(|l| format!("{} = {}", l.score(), l.short_label()))
        .collect();
    parts.push(format!(
        "{} = {}",
        NOT_APPLICABLE,
        RatingLevel::NotObserved.short_label()
    ));
    format!("Rating Scale: {}", parts.join("  |  "))
}

fn push_narratives(blocks: &mut Vec<Block>, inputs: &ExportInputs<'_>) {
    blocks.push(Block::Rule);
    blocks.push(Block::Heading("NARRATIVE ASSESSMENT".to_string()));
    for field in narrative_fields() {
        let text = (field.get)(inputs.narratives);
        blocks.push(Block::Subheading(field.title.to_string()));
        blocks.push(Block::Paragraph(if text.trim().is_empty() {
            Cell::muted(NO_COMMENTS)
        } else {
            Cell::plain(text)
        }));
    }
    blocks.push(Block::Callout {
        label: "Recommended Follow-Up:".to_string(),
        text: inputs.narratives.follow_up.label().to_string(),
    });
}

fn push_attestation(blocks: &mut Vec<Block>, inputs: &ExportInputs<'_>) {
    let info = inputs.info;
    let assessor = format!(
        "{} {}",
        info.assessor_name.trim(),
        info.assessor_credentials.trim()
    );
    blocks.push(Block::Rule);
    blocks.push(Block::Heading("ASSESSOR ATTESTATION".to_string()));
    blocks.push(Block::Paragraph(Cell::plain(ATTESTATION_TEXT)));
    blocks.push(Block::Grid {
        columns: Vec::new(),
        rows: vec![
            vec![
                Cell::bold("Assessor Name & Credentials:"),
                Cell::plain(assessor.trim_end()),
                Cell::bold("Date:"),
                Cell::plain(text_or_dash(&info.assessment_date)),
            ],
            vec![
                Cell::bold("Assessor Role:"),
                Cell::plain(text_or_dash(&info.assessor_role)),
                Cell::bold("Signature:"),
                Cell::plain(SIGNATURE_LINE),
            ],
            vec![
                Cell::bold("Pharmacist Acknowledgment:"),
                Cell::plain(ACKNOWLEDGMENT_TEXT),
                Cell::bold("Date:"),
                Cell::plain(SIGNATURE_LINE),
            ],
        ],
    });
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage4_document.rs"]
mod tests;
