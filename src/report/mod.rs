pub mod backend;
pub mod csv;
pub mod document;
pub mod html;
pub mod json;
pub mod text;

pub const NOT_APPLICABLE: &str = "N/A";
pub const EMPTY_FIELD: &str = "—";

/// One exported column value. Numeric columns only ever hold a number,
/// `Empty` or `NotApplicable`.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Text(String),
    Average(f64),
    Count(usize),
    Rating(u8),
    Flag(bool),
    Empty,
    NotApplicable,
}

impl CellValue {
    pub fn average_or_empty(average: Option<f64>) -> Self {
        match average {
            Some(v) => CellValue::Average(v),
            None => CellValue::Empty,
        }
    }

    pub fn render(&self) -> String {
        match self {
            CellValue::Text(s) => s.clone(),
            CellValue::Average(v) => format_average(*v),
            CellValue::Count(n) => n.to_string(),
            CellValue::Rating(r) => r.to_string(),
            CellValue::Flag(b) => b.to_string(),
            CellValue::Empty => String::new(),
            CellValue::NotApplicable => NOT_APPLICABLE.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TableRow {
    pub columns: Vec<(String, CellValue)>,
}

impl TableRow {
    pub fn headers(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|(name, _)| name.as_str())
    }
}

#[cfg(test)]
impl TableRow {
    pub fn get(&self, column: &str) -> Option<&CellValue> {
        self.columns
            .iter()
            .find(|(name, _)| name == column)
            .map(|(_, v)| v)
    }
}

/// Every published average goes through here, in both artifacts.
pub fn format_average(v: f64) -> String {
    format!("{:.2}", v)
}

pub fn average_or(average: Option<f64>, missing: &str) -> String {
    average
        .map(format_average)
        .unwrap_or_else(|| missing.to_string())
}

pub fn text_or_dash(s: &str) -> String {
    if s.trim().is_empty() {
        EMPTY_FIELD.to_string()
    } else {
        s.to_string()
    }
}

pub fn truncate_chars(s: &str, max: usize) -> &str {
    match s.char_indices().nth(max) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/mod.rs"]
mod tests;
