/// A run of text with the little styling the report needs. Colors are CSS hex
/// tokens supplied by the category palette.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    pub text: String,
    pub color: Option<&'static str>,
    pub bold: bool,
    pub muted: bool,
}

impl Cell {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            color: None,
            bold: false,
            muted: false,
        }
    }

    pub fn bold(text: impl Into<String>) -> Self {
        Self {
            bold: true,
            ..Self::plain(text)
        }
    }

    pub fn colored(text: impl Into<String>, color: &'static str) -> Self {
        Self {
            color: Some(color),
            bold: true,
            ..Self::plain(text)
        }
    }

    pub fn muted(text: impl Into<String>) -> Self {
        Self {
            muted: true,
            ..Self::plain(text)
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    Banner {
        title: String,
        subtitle: String,
    },
    Heading(String),
    Subheading(String),
    /// Small print line.
    Note(Cell),
    Rule,
    /// Two-column label/value table.
    Fields(Vec<(String, String)>),
    Summary {
        score: Cell,
        scale: String,
        category: String,
        detail: String,
    },
    /// Grid with an optional header row (empty `columns` means no header).
    Grid {
        columns: Vec<String>,
        rows: Vec<Vec<Cell>>,
    },
    Paragraph(Cell),
    Callout {
        label: String,
        text: String,
    },
    /// Must not be split across a page boundary.
    KeepTogether(Vec<Block>),
    Footer(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    pub title: String,
    pub blocks: Vec<Block>,
}
