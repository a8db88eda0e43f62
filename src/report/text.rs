use crate::report::backend::DocumentBackend;
use crate::report::document::{Block, Cell, Document};

pub const PAGE_BREAK: char = '\u{c}';

/// Fixed-width plain text, paginated with form feeds. Keep-together groups
/// move to the next page whole when they do not fit the current one.
#[derive(Debug, Clone)]
pub struct TextBackend {
    pub width: usize,
    pub page_height: usize,
}

impl Default for TextBackend {
    fn default() -> Self {
        Self {
            width: 96,
            page_height: 60,
        }
    }
}

impl DocumentBackend for TextBackend {
    fn name(&self) -> &'static str {
        "text"
    }

    fn extension(&self) -> &'static str {
        "txt"
    }

    fn encode(&self, doc: &Document) -> Vec<u8> {
        self.render(doc).into_bytes()
    }
}

impl TextBackend {
    pub fn render(&self, doc: &Document) -> String {
        let mut pager = Pager::new(self.page_height.max(1));
        for block in &doc.blocks {
            match block {
                Block::KeepTogether(inner) => {
                    let mut lines = Vec::new();
                    for b in inner {
                        self.block_lines(b, &mut lines);
                    }
                    pager.push_group(lines);
                }
                other => {
                    let mut lines = Vec::new();
                    self.block_lines(other, &mut lines);
                    pager.push_flow(lines);
                }
            }
        }
        pager.finish()
    }

    fn block_lines(&self, block: &Block, out: &mut Vec<String>) {
        let width = self.width;
        match block {
            Block::Banner { title, subtitle } => {
                out.push("=".repeat(width));
                out.push(center(title, width));
                for line in wrap(subtitle, width) {
                    out.push(center(&line, width));
                }
                out.push("=".repeat(width));
            }
            Block::Heading(s) => {
                out.push(String::new());
                out.push(s.to_uppercase());
                out.push("-".repeat(s.chars().count().min(width)));
            }
            Block::Subheading(s) => {
                out.push(String::new());
                out.extend(wrap(s, width));
            }
            Block::Note(cell) => out.extend(wrap(&cell_text(cell), width)),
            Block::Rule => out.push("-".repeat(width)),
            Block::Fields(rows) => {
                let label_width = rows
                    .iter()
                    .map(|(l, _)| l.chars().count() + 2)
                    .max()
                    .unwrap_or(0)
                    .min(width / 3);
                let value_width = width.saturating_sub(label_width).max(1);
                for (label, value) in rows {
                    let value_lines = wrap(value, value_width);
                    for (i, line) in value_lines.iter().enumerate() {
                        let head = if i == 0 {
                            format!("{}:", label)
                        } else {
                            String::new()
                        };
                        out.push(format!("{}{}", pad(&head, label_width), line).trim_end().to_string());
                    }
                }
            }
            Block::Summary {
                score,
                scale,
                category,
                detail,
            } => {
                out.push(format!("Overall score: {} {}", score.text, scale));
                out.push(format!("Category: {}", category));
                out.extend(wrap(detail, width));
            }
            Block::Grid { columns, rows } => grid_lines(columns, rows, width, out),
            Block::Paragraph(cell) => {
                for line in wrap(&cell_text(cell), width.saturating_sub(2).max(1)) {
                    out.push(format!("  {}", line).trim_end().to_string());
                }
                out.push(String::new());
            }
            Block::Callout { label, text } => {
                out.extend(wrap(&format!("{} {}", label, text), width));
            }
            Block::KeepTogether(inner) => {
                for b in inner {
                    self.block_lines(b, out);
                }
            }
            Block::Footer(s) => {
                out.push(String::new());
                out.push("-".repeat(width));
                out.extend(wrap(s, width));
            }
        }
    }
}

struct Pager {
    height: usize,
    pages: Vec<Vec<String>>,
    current: Vec<String>,
}

impl Pager {
    fn new(height: usize) -> Self {
        Self {
            height,
            pages: Vec::new(),
            current: Vec::new(),
        }
    }

    fn break_page(&mut self) {
        let page = std::mem::take(&mut self.current);
        self.pages.push(page);
    }

    fn push_flow(&mut self, lines: Vec<String>) {
        for line in lines {
            if self.current.len() >= self.height {
                self.break_page();
            }
            // A page never opens on a blank spacer line.
            if self.current.is_empty() && line.is_empty() {
                continue;
            }
            self.current.push(line);
        }
    }

    fn push_group(&mut self, lines: Vec<String>) {
        let remaining = self.height.saturating_sub(self.current.len());
        let needed = lines.iter().skip_while(|l| l.is_empty()).count();
        if needed > remaining && !self.current.is_empty() {
            self.break_page();
        }
        self.push_flow(lines);
    }

    fn finish(mut self) -> String {
        if !self.current.is_empty() {
            self.break_page();
        }
        let mut out = String::new();
        for (i, page) in self.pages.iter().enumerate() {
            if i > 0 {
                out.push(PAGE_BREAK);
            }
            for line in page {
                out.push_str(line);
                out.push('\n');
            }
        }
        out
    }
}

fn cell_text(cell: &Cell) -> String {
    if cell.muted {
        format!("[{}]", cell.text)
    } else {
        cell.text.clone()
    }
}

fn grid_lines(columns: &[String], rows: &[Vec<Cell>], width: usize, out: &mut Vec<String>) {
    let n = columns
        .len()
        .max(rows.iter().map(|r| r.len()).max().unwrap_or(0));
    if n == 0 {
        return;
    }

    let mut natural = vec![1usize; n];
    for (i, c) in columns.iter().enumerate() {
        natural[i] = natural[i].max(c.chars().count());
    }
    for row in rows {
        for (i, cell) in row.iter().enumerate() {
            natural[i] = natural[i].max(cell_text(cell).chars().count());
        }
    }

    let available = width.saturating_sub(3 * (n - 1));
    let mut widths = natural.clone();
    if natural.iter().sum::<usize>() > available {
        for w in widths.iter_mut().skip(1) {
            *w = (*w).min(30);
        }
        let rest: usize = widths.iter().skip(1).sum();
        widths[0] = available.saturating_sub(rest).max(10).min(natural[0]);
    }

    if !columns.is_empty() {
        let header: Vec<String> = (0..n)
            .map(|i| columns.get(i).cloned().unwrap_or_default())
            .collect();
        push_grid_row(&header, &widths, out);
        let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
        out.push(rule.join("-+-"));
    }
    for row in rows {
        let texts: Vec<String> = (0..n)
            .map(|i| row.get(i).map(cell_text).unwrap_or_default())
            .collect();
        push_grid_row(&texts, &widths, out);
    }
}

fn push_grid_row(texts: &[String], widths: &[usize], out: &mut Vec<String>) {
    let wrapped: Vec<Vec<String>> = texts
        .iter()
        .zip(widths)
        .map(|(t, w)| wrap(t, *w))
        .collect();
    let height = wrapped.iter().map(|w| w.len()).max().unwrap_or(1).max(1);
    for line_idx in 0..height {
        let parts: Vec<String> = wrapped
            .iter()
            .zip(widths)
            .map(|(lines, w)| pad(lines.get(line_idx).map(String::as_str).unwrap_or(""), *w))
            .collect();
        out.push(parts.join(" | ").trim_end().to_string());
    }
}

fn pad(s: &str, width: usize) -> String {
    let len = s.chars().count();
    if len >= width {
        s.to_string()
    } else {
        format!("{}{}", s, " ".repeat(width - len))
    }
}

fn center(s: &str, width: usize) -> String {
    let len = s.chars().count();
    if len >= width {
        return s.to_string();
    }
    format!("{}{}", " ".repeat((width - len) / 2), s)
}

/// Greedy word wrap on char counts; embedded newlines are kept and words
/// longer than the width are split.
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();
    for paragraph in text.split('\n') {
        let mut line = String::new();
        let mut line_len = 0usize;
        for word in paragraph.split_whitespace() {
            let mut word: Vec<char> = word.chars().collect();
            while word.len() > width {
                if line_len > 0 {
                    lines.push(std::mem::take(&mut line));
                    line_len = 0;
                }
                let rest = word.split_off(width);
                lines.push(word.into_iter().collect());
                word = rest;
            }
            if word.is_empty() {
                continue;
            }
            let extra = if line_len == 0 { 0 } else { 1 };
            if line_len + extra + word.len() > width {
                lines.push(std::mem::take(&mut line));
                line_len = 0;
            }
            if line_len > 0 {
                line.push(' ');
                line_len += 1;
            }
            line_len += word.len();
            line.extend(word);
        }
        lines.push(line);
    }
    lines
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/text.rs"]
mod tests;
