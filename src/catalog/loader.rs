use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;

use crate::catalog::defs::{BUILTIN_VERSION, DomainDef, builtin_domains};
use crate::catalog::{CatalogDocument, ConfigError, Domain, Item, RubricCatalog};

/// Loads the rubric shipped with the binary.
pub fn load() -> Result<RubricCatalog, ConfigError> {
    let domains = builtin_domains().iter().map(domain_from_def).collect();
    validate(CatalogDocument {
        version: BUILTIN_VERSION.to_string(),
        domains,
    })
}

pub fn load_from_path(path: &Path) -> Result<RubricCatalog, ConfigError> {
    let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let doc: CatalogDocument =
        serde_json::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
    validate(doc)
}

pub fn validate(doc: CatalogDocument) -> Result<RubricCatalog, ConfigError> {
    if doc.domains.is_empty() {
        return Err(ConfigError::NoDomains);
    }

    let mut domain_ids = BTreeSet::new();
    let mut item_owner: BTreeMap<&str, &str> = BTreeMap::new();

    for domain in &doc.domains {
        if domain.id.trim().is_empty() {
            return Err(ConfigError::BlankId(domain.title.clone()));
        }
        if !domain_ids.insert(domain.id.as_str()) {
            return Err(ConfigError::DuplicateDomainId(domain.id.clone()));
        }
        if domain.items.is_empty() {
            return Err(ConfigError::EmptyDomain(domain.id.clone()));
        }
        for item in &domain.items {
            if item.id.trim().is_empty() {
                return Err(ConfigError::BlankId(domain.id.clone()));
            }
            if let Some(first) = item_owner.insert(item.id.as_str(), domain.id.as_str()) {
                return Err(ConfigError::DuplicateItemId {
                    item_id: item.id.clone(),
                    first_domain: first.to_string(),
                    second_domain: domain.id.clone(),
                });
            }
        }
    }

    Ok(RubricCatalog {
        version: doc.version,
        domains: doc.domains,
    })
}

fn domain_from_def(def: &DomainDef) -> Domain {
    Domain {
        id: def.id.to_string(),
        title: def.title.to_string(),
        short_label: def.short_label.to_string(),
        description: def.description.to_string(),
        items: def
            .items
            .iter()
            .map(|item| Item {
                id: item.id.to_string(),
                prompt: item.prompt.to_string(),
                low_anchor: item.low.to_string(),
                high_anchor: item.high.to_string(),
                optional: item.optional,
            })
            .collect(),
    }
}
