use crate::report::TableRow;

/// Header line plus one data line, CRLF-free, quoted per RFC 4180.
pub fn render_row_csv(row: &TableRow) -> String {
    let mut out = String::new();
    push_record(&mut out, row.headers());
    let values: Vec<String> = row.columns.iter().map(|(_, v)| v.render()).collect();
    push_record(&mut out, values.iter().map(String::as_str));
    out
}

fn push_record<'a>(out: &mut String, fields: impl Iterator<Item = &'a str>) {
    for (i, field) in fields.enumerate() {
        if i > 0 {
            out.push(',');
        }
        push_field(out, field);
    }
    out.push('\n');
}

fn push_field(out: &mut String, field: &str) {
    let needs_quotes = field
        .chars()
        .any(|c| matches!(c, ',' | '"' | '\n' | '\r'));
    if !needs_quotes {
        out.push_str(field);
        return;
    }
    out.push('"');
    for c in field.chars() {
        if c == '"' {
            out.push('"');
        }
        out.push(c);
    }
    out.push('"');
}
