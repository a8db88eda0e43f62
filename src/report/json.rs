use serde::Serialize;
use serde::ser::{SerializeMap, Serializer};

use crate::catalog::RubricCatalog;
use crate::model::rating::RatingLevel;
use crate::report::{CellValue, NOT_APPLICABLE, TableRow};

impl Serialize for CellValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            CellValue::Text(s) => serializer.serialize_str(s),
            CellValue::Average(v) => serializer.serialize_f64(*v),
            CellValue::Count(n) => serializer.serialize_u64(*n as u64),
            CellValue::Rating(r) => serializer.serialize_u8(*r),
            CellValue::Flag(b) => serializer.serialize_bool(*b),
            CellValue::Empty => serializer.serialize_str(""),
            CellValue::NotApplicable => serializer.serialize_str(NOT_APPLICABLE),
        }
    }
}

// A map rather than a struct so column order survives without relying on
// serde_json's map ordering.
impl Serialize for TableRow {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.columns.len()))?;
        for (name, value) in &self.columns {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

pub fn render_row_json(row: &TableRow) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(row)
}

#[derive(Debug, Serialize)]
struct ScaleEntry {
    score: u8,
    label: &'static str,
    short_label: &'static str,
    description: &'static str,
}

#[derive(Debug, Serialize)]
struct CatalogListing<'a> {
    #[serde(flatten)]
    catalog: &'a RubricCatalog,
    rating_scale: Vec<ScaleEntry>,
}

/// Catalog plus the rating scale, in the schema `--catalog` accepts.
pub fn render_catalog_json(catalog: &RubricCatalog) -> Result<String, serde_json::Error> {
    let rating_scale = RatingLevel::ALL
        .iter()
        .map(|&level| ScaleEntry {
            score: level.score(),
            label: level.option_label(),
            short_label: level.short_label(),
            description: level.description(),
        })
        .collect();
    serde_json::to_string_pretty(&CatalogListing {
        catalog,
        rating_scale,
    })
}
