use super::*;

#[test]
fn test_from_score_covers_scale() {
    for level in RatingLevel::ALL {
        assert_eq!(RatingLevel::from_score(i64::from(level.score())), Some(level));
    }
    assert_eq!(RatingLevel::from_score(6), None);
    assert_eq!(RatingLevel::from_score(-1), None);
}

#[test]
fn test_absent_item_is_not_observed() {
    let store = RatingStore::new();
    assert_eq!(store.level("ppcp_1").unwrap(), RatingLevel::NotObserved);
    assert!(!RatingLevel::NotObserved.is_rated());
    assert!(store.is_empty());
}

#[test]
fn test_out_of_range_is_rejected_not_clamped() {
    let store = RatingStore::from_pairs([("a", 4), ("b", 7)]);
    assert_eq!(store.level("a").unwrap(), RatingLevel::MeetsExpectations);
    let err = store.level("b").unwrap_err();
    assert_eq!(
        err,
        RangeError {
            item_id: "b".to_string(),
            value: 7
        }
    );
    assert!(err.to_string().contains("0..=5"));
    assert_eq!(store.validate().unwrap_err().item_id, "b");
}

#[test]
fn test_store_deserializes_from_plain_map() {
    let store: RatingStore = serde_json::from_str(r#"{"x": 3, "y": 0}"#).unwrap();
    assert_eq!(store.len(), 2);
    assert_eq!(store.item_ids().collect::<Vec<_>>(), vec!["x", "y"]);
    assert!(store.validate().is_ok());
}

#[test]
fn test_labels() {
    assert_eq!(RatingLevel::NotObserved.short_label(), "Not Observed");
    assert_eq!(
        RatingLevel::Exemplary.option_label(),
        "5 — Exemplary (Exceeds Expectations)"
    );
}
