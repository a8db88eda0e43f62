use html_escape::encode_text;

use crate::report::backend::DocumentBackend;
use crate::report::document::{Block, Cell, Document};

const STYLE: &str = "\
@page { size: letter; margin: 0.75in; }
body { font-family: Helvetica, Arial, sans-serif; font-size: 9pt; color: #1e293b; max-width: 7in; margin: 0 auto; }
.banner { background: #0d2b4e; color: #ffffff; text-align: center; padding: 12pt 16pt; border-radius: 6pt; }
.banner h1 { margin: 0; font-size: 13pt; }
.banner p { margin: 4pt 0 0; font-size: 8pt; color: #93c5fd; }
h2 { font-size: 11pt; color: #0d2b4e; margin: 14pt 0 4pt; }
h3 { font-size: 9.5pt; color: #1a4a7a; margin: 8pt 0 3pt; }
hr { border: 0; border-top: 1pt solid #bfdbfe; }
table { width: 100%; border-collapse: collapse; margin: 4pt 0; }
td, th { border: 0.4pt solid #e2e8f0; padding: 5pt 8pt; vertical-align: top; text-align: left; }
th { background: #1a4a7a; color: #ffffff; font-size: 8pt; }
tr:nth-child(even) td { background: #f8fafc; }
.fields td:first-child { width: 32%; font-weight: bold; color: #0d2b4e; }
.summary { background: #f0f7ff; border: 1pt solid #bfdbfe; border-radius: 6pt; }
.summary td { border: 0; padding: 12pt 14pt; vertical-align: middle; }
.summary .score { font-size: 22pt; font-weight: bold; text-align: center; width: 22%; }
.summary .scale { display: block; font-size: 9pt; }
.summary .category { font-size: 11pt; font-weight: bold; color: #0d2b4e; }
.summary .detail { display: block; font-size: 8pt; color: #475569; font-weight: normal; }
.note { font-size: 7.5pt; color: #64748b; }
.muted { color: #94a3b8; font-style: italic; }
.narrative { background: #f8fafc; padding: 6pt; white-space: pre-wrap; }
.callout { background: #fefce8; padding: 6pt; }
.keep-together { break-inside: avoid; page-break-inside: avoid; }
.footer { font-size: 6.5pt; color: #94a3b8; text-align: center; border-top: 0.5pt solid #cbd5e1; padding-top: 6pt; margin-top: 16pt; }
";

/// Self-contained, print-ready HTML page.
#[derive(Debug, Clone, Default)]
pub struct HtmlBackend;

impl DocumentBackend for HtmlBackend {
    fn name(&self) -> &'static str {
        "html"
    }

    fn extension(&self) -> &'static str {
        "html"
    }

    fn encode(&self, doc: &Document) -> Vec<u8> {
        render_html(doc).into_bytes()
    }
}

pub fn render_html(doc: &Document) -> String {
    let mut out = String::new();
    out.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n");
    out.push_str(&format!("<title>{}</title>\n", encode_text(&doc.title)));
    out.push_str(&format!("<style>\n{}</style>\n", STYLE));
    out.push_str("</head>\n<body>\n");
    for block in &doc.blocks {
        push_block(&mut out, block);
    }
    out.push_str("</body>\n</html>\n");
    out
}

fn push_block(out: &mut String, block: &Block) {
    match block {
        Block::Banner { title, subtitle } => {
            out.push_str(&format!(
                "<header class=\"banner\"><h1>{}</h1><p>{}</p></header>\n",
                encode_text(title),
                encode_text(subtitle)
            ));
        }
        Block::Heading(s) => {
            out.push_str(&format!("<h2>{}</h2>\n", encode_text(s)));
        }
        Block::Subheading(s) => {
            out.push_str(&format!("<h3>{}</h3>\n", encode_text(s)));
        }
        Block::Note(cell) => {
            out.push_str(&format!("<p class=\"note\">{}</p>\n", cell_html(cell)));
        }
        Block::Rule => out.push_str("<hr>\n"),
        Block::Fields(rows) => {
            out.push_str("<table class=\"fields\">\n");
            for (label, value) in rows {
                out.push_str(&format!(
                    "<tr><td>{}</td><td>{}</td></tr>\n",
                    encode_text(label),
                    encode_text(value)
                ));
            }
            out.push_str("</table>\n");
        }
        Block::Summary {
            score,
            scale,
            category,
            detail,
        } => {
            out.push_str(&format!(
                "<table class=\"summary\"><tr><td class=\"score\">{}<span class=\"scale\">{}</span></td>\
                 <td class=\"category\">{}<span class=\"detail\">{}</span></td></tr></table>\n",
                cell_html(score),
                encode_text(scale),
                encode_text(category),
                encode_text(detail)
            ));
        }
        Block::Grid { columns, rows } => {
            out.push_str("<table class=\"grid\">\n");
            if !columns.is_empty() {
                out.push_str("<tr>");
                for c in columns {
                    out.push_str(&format!("<th>{}</th>", encode_text(c)));
                }
                out.push_str("</tr>\n");
            }
            for row in rows {
                out.push_str("<tr>");
                for cell in row {
                    out.push_str(&format!("<td>{}</td>", cell_html(cell)));
                }
                out.push_str("</tr>\n");
            }
            out.push_str("</table>\n");
        }
        Block::Paragraph(cell) => {
            if cell.muted {
                out.push_str(&format!("<p>{}</p>\n", cell_html(cell)));
            } else {
                out.push_str(&format!("<p class=\"narrative\">{}</p>\n", cell_html(cell)));
            }
        }
        Block::Callout { label, text } => {
            out.push_str(&format!(
                "<p class=\"callout\"><strong>{}</strong> {}</p>\n",
                encode_text(label),
                encode_text(text)
            ));
        }
        Block::KeepTogether(inner) => {
            out.push_str("<section class=\"keep-together\">\n");
            for b in inner {
                push_block(out, b);
            }
            out.push_str("</section>\n");
        }
        Block::Footer(s) => {
            out.push_str(&format!("<footer class=\"footer\">{}</footer>\n", encode_text(s)));
        }
    }
}

fn cell_html(cell: &Cell) -> String {
    let text = encode_text(&cell.text);
    let mut html = match (cell.bold, cell.muted) {
        (_, true) => format!("<span class=\"muted\">{}</span>", text),
        (true, false) => format!("<strong>{}</strong>", text),
        (false, false) => text.into_owned(),
    };
    if let Some(color) = cell.color {
        html = format!("<span style=\"color:{}\">{}</span>", color, html);
    }
    html
}
