use super::*;
use crate::catalog::loader::validate;
use crate::catalog::{CatalogDocument, Domain, Item, RubricCatalog};
use crate::model::assessment::{AssessmentInfo, AssessmentRecord, FollowUp, NarrativeSet};
use crate::model::rating::RatingStore;

fn two_by_two() -> RubricCatalog {
    let domain = |id: &str| Domain {
        id: id.to_string(),
        title: format!("Domain {id}"),
        short_label: id.to_uppercase(),
        description: String::new(),
        items: (1..=2)
            .map(|n| Item {
                id: format!("{id}_i{n}"),
                prompt: format!("{id} item {n}"),
                low_anchor: String::new(),
                high_anchor: String::new(),
                optional: false,
            })
            .collect(),
    };
    validate(CatalogDocument {
        version: "test".to_string(),
        domains: vec![domain("d1"), domain("d2")],
    })
    .unwrap()
}

fn record(ratings: RatingStore) -> AssessmentRecord {
    AssessmentRecord {
        info: AssessmentInfo {
            pharmacist_name: "Doe, Jane".to_string(),
            assessor_name: "Sam Lee".to_string(),
            assessment_date: "2024-05-01".to_string(),
            ..AssessmentInfo::default()
        },
        ratings,
        narratives: NarrativeSet {
            strengths: "Clear notes".to_string(),
            follow_up: FollowUp::TwelveMonths,
            attestation: false,
            ..NarrativeSet::default()
        },
    }
}

#[test]
fn test_column_order() {
    let catalog = two_by_two();
    let rec = record(RatingStore::new());
    let row = to_row(&ExportInputs::new(&rec, &catalog)).unwrap();
    let headers: Vec<&str> = row.headers().collect();
    assert_eq!(
        headers,
        vec![
            "Pharmacist Name",
            "Pharmacist Credentials",
            "Unit",
            "Assessor Name",
            "Assessor Credentials",
            "Assessor Role",
            "Assessment Type",
            "Assessment Date",
            "Obs Start",
            "Obs End",
            "Context Notes",
            "Domain Avg — D1",
            "Domain Avg — D2",
            "Overall Average Score",
            "Overall Performance Category",
            "Items Rated (n)",
            "[D1] d1 item 1",
            "[D1] d1 item 2",
            "[D2] d2 item 1",
            "[D2] d2 item 2",
            "Strengths",
            "Areas for Development",
            "Action Plan / Goals",
            "Overall Summary",
            "Recommended Follow-Up",
            "Attestation Confirmed",
        ]
    );
}

#[test]
fn test_values_for_rated_record() {
    let catalog = two_by_two();
    let rec = record(RatingStore::from_pairs([
        ("d1_i1", 4),
        ("d1_i2", 5),
        ("d2_i1", 0),
        ("d2_i2", 3),
    ]));
    let row = to_row(&ExportInputs::new(&rec, &catalog)).unwrap();
    assert_eq!(row.get("Domain Avg — D1"), Some(&CellValue::Average(4.5)));
    assert_eq!(row.get("Domain Avg — D2"), Some(&CellValue::Average(3.0)));
    assert_eq!(row.get(OVERALL_AVERAGE_COLUMN), Some(&CellValue::Average(4.0)));
    assert_eq!(
        row.get(OVERALL_CATEGORY_COLUMN),
        Some(&CellValue::Text("Meets Expectations — Practice-Ready".to_string()))
    );
    assert_eq!(row.get(ITEMS_RATED_COLUMN), Some(&CellValue::Count(3)));
    assert_eq!(row.get("[D2] d2 item 1"), Some(&CellValue::NotApplicable));
    assert_eq!(row.get("[D2] d2 item 2"), Some(&CellValue::Rating(3)));
    assert_eq!(
        row.get(FOLLOW_UP_COLUMN),
        Some(&CellValue::Text(FollowUp::TwelveMonths.label().to_string()))
    );
    assert_eq!(row.get(ATTESTATION_COLUMN), Some(&CellValue::Flag(false)));
}

#[test]
fn test_empty_store_has_no_numbers() {
    let catalog = two_by_two();
    let rec = record(RatingStore::new());
    let row = to_row(&ExportInputs::new(&rec, &catalog)).unwrap();
    assert_eq!(row.get("Domain Avg — D1"), Some(&CellValue::Empty));
    assert_eq!(row.get(OVERALL_AVERAGE_COLUMN), Some(&CellValue::Empty));
    assert_eq!(
        row.get(OVERALL_CATEGORY_COLUMN),
        Some(&CellValue::Text("Insufficient Data".to_string()))
    );
    assert_eq!(row.get(ITEMS_RATED_COLUMN), Some(&CellValue::Count(0)));
    assert!(
        row.columns
            .iter()
            .filter(|(name, _)| name.starts_with('['))
            .all(|(_, v)| *v == CellValue::NotApplicable)
    );
}

#[test]
fn test_refuses_without_identity() {
    let catalog = two_by_two();
    let mut rec = record(RatingStore::new());
    rec.info.assessor_name = "  ".to_string();
    assert!(matches!(
        to_row(&ExportInputs::new(&rec, &catalog)),
        Err(ExportError::MissingField("assessor_name"))
    ));
}

#[test]
fn test_out_of_range_rating_is_reported() {
    let catalog = two_by_two();
    let rec = record(RatingStore::from_pairs([("d1_i1", 8)]));
    assert!(matches!(
        to_row(&ExportInputs::new(&rec, &catalog)),
        Err(ExportError::Range(_))
    ));
}

#[test]
fn test_item_column_truncates_prompt() {
    let prompt = "x".repeat(120);
    let column = item_column("PPCP", &prompt);
    assert_eq!(column, format!("[PPCP] {}", "x".repeat(80)));
}

#[test]
fn test_builtin_catalog_row_width() {
    let catalog = crate::catalog::load().unwrap();
    let rec = record(RatingStore::new());
    let row = to_row(&ExportInputs::new(&rec, &catalog)).unwrap();
    assert_eq!(row.columns.len(), 11 + 5 + 3 + 23 + 6);
}
