pub mod defs;
pub mod loader;

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use loader::{load, load_from_path};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: String,
    pub prompt: String,
    pub low_anchor: String,
    pub high_anchor: String,
    #[serde(default)]
    pub optional: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Domain {
    pub id: String,
    pub title: String,
    pub short_label: String,
    pub description: String,
    pub items: Vec<Item>,
}

impl Domain {
    pub fn item_ids(&self) -> impl Iterator<Item = &str> {
        self.items.iter().map(|i| i.id.as_str())
    }
}

/// Validated rubric. Only constructible through the loader, so every
/// instance has unique ids and non-empty domains.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RubricCatalog {
    version: String,
    domains: Vec<Domain>,
}

impl RubricCatalog {
    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn domains(&self) -> &[Domain] {
        &self.domains
    }

    pub fn total_items(&self) -> usize {
        self.domains.iter().map(|d| d.items.len()).sum()
    }

    pub fn contains_item(&self, item_id: &str) -> bool {
        self.domains
            .iter()
            .any(|d| d.items.iter().any(|i| i.id == item_id))
    }
}

/// Unvalidated catalog as read from JSON.
#[derive(Debug, Clone, Deserialize)]
pub struct CatalogDocument {
    pub version: String,
    pub domains: Vec<Domain>,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("catalog has no domains")]
    NoDomains,
    #[error("domain '{0}' has no items")]
    EmptyDomain(String),
    #[error("domain id '{0}' is used more than once")]
    DuplicateDomainId(String),
    #[error("item id '{item_id}' appears in both '{first_domain}' and '{second_domain}'")]
    DuplicateItemId {
        item_id: String,
        first_domain: String,
        second_domain: String,
    },
    #[error("blank id in domain '{0}'")]
    BlankId(String),
    #[error("cannot read catalog {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("cannot parse catalog {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

#[cfg(test)]
#[path = "../../tests/src_inline/catalog/tests.rs"]
mod tests;
