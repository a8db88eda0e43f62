use super::*;
use crate::catalog::loader::validate;

fn item(id: &str) -> Item {
    Item {
        id: id.to_string(),
        prompt: format!("prompt {id}"),
        low_anchor: "low".to_string(),
        high_anchor: "high".to_string(),
        optional: false,
    }
}

fn domain(id: &str, items: &[&str]) -> Domain {
    Domain {
        id: id.to_string(),
        title: id.to_uppercase(),
        short_label: id.to_string(),
        description: String::new(),
        items: items.iter().map(|i| item(i)).collect(),
    }
}

fn doc(domains: Vec<Domain>) -> CatalogDocument {
    CatalogDocument {
        version: "test".to_string(),
        domains,
    }
}

#[test]
fn test_builtin_catalog_shape() {
    let catalog = load().unwrap();
    assert_eq!(catalog.version(), defs::BUILTIN_VERSION);
    assert_eq!(catalog.domains().len(), 5);
    assert_eq!(catalog.total_items(), 23);
    assert!(catalog.contains_item("ppcp_1"));
    assert!(!catalog.contains_item("nope"));
    let optional: Vec<&str> = catalog
        .domains()
        .iter()
        .flat_map(|d| d.items.iter())
        .filter(|i| i.optional)
        .map(|i| i.id.as_str())
        .collect();
    assert_eq!(optional, vec!["prof_3"]);
}

#[test]
fn test_builtin_anchor_typo_is_fixed() {
    let catalog = load().unwrap();
    for item in catalog.domains().iter().flat_map(|d| d.items.iter()) {
        assert!(!item.low_anchor.contains("seports"));
        assert!(!item.high_anchor.contains("seports"));
    }
}

#[test]
fn test_rejects_duplicate_item_id_across_domains() {
    let err = validate(doc(vec![domain("a", &["x"]), domain("b", &["x"])])).unwrap_err();
    match err {
        ConfigError::DuplicateItemId {
            item_id,
            first_domain,
            second_domain,
        } => {
            assert_eq!(item_id, "x");
            assert_eq!(first_domain, "a");
            assert_eq!(second_domain, "b");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_rejects_duplicate_domain_and_empty_domain() {
    assert!(matches!(
        validate(doc(vec![domain("a", &["x"]), domain("a", &["y"])])),
        Err(ConfigError::DuplicateDomainId(id)) if id == "a"
    ));
    assert!(matches!(
        validate(doc(vec![domain("a", &[])])),
        Err(ConfigError::EmptyDomain(id)) if id == "a"
    ));
    assert!(matches!(validate(doc(Vec::new())), Err(ConfigError::NoDomains)));
}

#[test]
fn test_rejects_blank_ids() {
    assert!(matches!(
        validate(doc(vec![domain("a", &["  "])])),
        Err(ConfigError::BlankId(_))
    ));
}

#[test]
fn test_load_from_path_reports_missing_file() {
    let path = std::env::temp_dir().join(format!(
        "pharm_review_missing_catalog_{}.json",
        std::process::id()
    ));
    assert!(matches!(
        load_from_path(&path),
        Err(ConfigError::Io { .. })
    ));
}
