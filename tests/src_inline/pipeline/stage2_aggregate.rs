use super::*;
use crate::catalog::loader::validate;
use crate::catalog::{CatalogDocument, Item};
use crate::model::category::PerformanceCategory;

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

#[test]
fn test_mean_rounding() {
    assert_eq!(mean_rounded(&[3, 4]), Some(3.5));
    assert_eq!(mean_rounded(&[1, 2, 2]), Some(1.67));
    assert_eq!(mean_rounded(&[1, 1, 2]), Some(1.33));
    assert_eq!(mean_rounded(&[5]), Some(5.0));
    assert_eq!(mean_rounded(&[]), None);
}

#[test]
fn test_end_to_end_two_by_two() {
    let catalog = two_by_two();
    let ratings = RatingStore::from_pairs([("d1_i1", 4), ("d1_i2", 5), ("d2_i1", 0), ("d2_i2", 3)]);
    let card = aggregate(&catalog, &ratings).unwrap();

    let d1 = card.domain("d1").unwrap();
    assert_eq!(d1.average, Some(4.5));
    assert_eq!(d1.category, PerformanceCategory::Exemplary);
    assert_eq!((d1.rated_count, d1.total_count), (2, 2));

    let d2 = card.domain("d2").unwrap();
    assert_eq!(d2.average, Some(3.0));
    assert_eq!(d2.category, PerformanceCategory::Progressing);
    assert_eq!((d2.rated_count, d2.total_count), (1, 2));

    assert_eq!(card.overall.average, Some(4.0));
    assert_eq!(card.overall.category, PerformanceCategory::MeetsExpectations);
    assert_eq!((card.overall.rated_count, card.overall.total_items), (3, 4));
}

#[test]
fn test_zero_entries_never_move_averages() {
    let catalog = two_by_two();
    let base = RatingStore::from_pairs([("d1_i1", 2), ("d2_i2", 5)]);
    let padded = RatingStore::from_pairs([("d1_i1", 2), ("d1_i2", 0), ("d2_i1", 0), ("d2_i2", 5)]);
    let a = aggregate(&catalog, &base).unwrap();
    let b = aggregate(&catalog, &padded).unwrap();
    assert_eq!(a.overall, b.overall);
    assert_eq!(a.domains, b.domains);
}

#[test]
fn test_empty_store_is_insufficient_data() {
    let catalog = two_by_two();
    let card = aggregate(&catalog, &RatingStore::new()).unwrap();
    assert_eq!(card.overall.average, None);
    assert_eq!(card.overall.category, PerformanceCategory::InsufficientData);
    assert!(card.domains.iter().all(|d| d.average.is_none()));
    assert_eq!(card.overall.total_items, 4);
}

#[test]
fn test_aggregation_is_idempotent() {
    let catalog = two_by_two();
    let ratings = RatingStore::from_pairs([("d1_i1", 1), ("d1_i2", 2), ("d2_i1", 2)]);
    let a = aggregate(&catalog, &ratings).unwrap();
    let b = aggregate(&catalog, &ratings).unwrap();
    assert_eq!(
        a.overall.average.map(f64::to_bits),
        b.overall.average.map(f64::to_bits)
    );
    assert_eq!(a.overall.average, Some(1.67));
    assert_eq!(a.overall.category, PerformanceCategory::NeedsSignificantDevelopment);
}

#[test]
fn test_out_of_range_fails_whole_aggregation() {
    let catalog = two_by_two();
    let ratings = RatingStore::from_pairs([("d1_i1", 4), ("d2_i2", 6)]);
    let err = aggregate(&catalog, &ratings).unwrap_err();
    assert_eq!(err.item_id, "d2_i2");
    assert_eq!(err.value, 6);

    // Unknown ids are still range checked.
    let stray = RatingStore::from_pairs([("d1_i1", 4), ("zz", -2)]);
    assert!(aggregate(&catalog, &stray).is_err());
}

#[test]
fn test_unknown_ids_are_ignored() {
    let catalog = two_by_two();
    let ratings = RatingStore::from_pairs([("d1_i1", 4), ("other", 1)]);
    let card = aggregate(&catalog, &ratings).unwrap();
    assert_eq!(card.overall.average, Some(4.0));
    assert_eq!(card.overall.rated_count, 1);
}

#[test]
fn test_domain_average_counts() {
    let catalog = two_by_two();
    let ratings = RatingStore::from_pairs([("d2_i1", 3)]);
    let stats = domain_average(&catalog.domains()[1], &ratings).unwrap();
    assert_eq!(
        stats,
        AverageStats {
            average: Some(3.0),
            rated_count: 1,
            total_count: 2
        }
    );
    let overall = overall_average(&catalog, &ratings).unwrap();
    assert_eq!(overall.total_count, 4);
}
