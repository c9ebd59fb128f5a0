use crate::schema::{data_type::SchemaType, token_kind::SchemaKind};
use crate::token::{Highlighter, Token};

/// Display highlighter for ASCII-art table definitions such as
///
/// ```text
/// +-------------+---------+
/// | Column Name | Type    |
/// +-------------+---------+
/// | id          | int     |
/// +-------------+---------+
/// id is the primary key column for this table.
/// ```
///
/// Works line by line. Every `\n` becomes a [`SchemaKind::LineBreak`] token
/// spanning that byte. A line made only of `+`, `-`, `|` and whitespace is one
/// border token. Any other line containing `|` is split into cells separated
/// by border tokens; each cell keeps its untrimmed text and is classified from
/// its trimmed, lower-cased form. Remaining non-blank lines are notes; blank
/// lines emit nothing.
///
/// Token texts concatenate back to `schema` except on whitespace-only lines,
/// whose spaces are dropped while their line breaks are kept.
pub fn highlight_schema(schema: &str) -> Vec<Token<SchemaKind>> {
    let mut out = Vec::new();
    let mut offset = 0;

    for (idx, line) in schema.split('\n').enumerate() {
        if idx > 0 {
            out.push(Token::new(SchemaKind::LineBreak, offset - 1, offset));
        }
        line_tokens(line, offset, &mut out);
        offset += line.len() + 1;
    }

    out
}

fn line_tokens(line: &str, offset: usize, out: &mut Vec<Token<SchemaKind>>) {
    if is_rule(line) {
        out.push(Token::new(SchemaKind::Border, offset, offset + line.len()));
        return;
    }

    if line.contains('|') {
        let mut start = offset;
        for (idx, cell) in line.split('|').enumerate() {
            if idx > 0 {
                out.push(Token::new(SchemaKind::Border, start, start + 1));
                start += 1;
            }
            out.push(Token::new(classify_cell(cell), start, start + cell.len()));
            start += cell.len();
        }
        return;
    }

    if !line.trim().is_empty() {
        out.push(Token::new(SchemaKind::Note, offset, offset + line.len()));
    }
}

/// True when the line, ignoring whitespace, is a non-empty run of `+-|`.
fn is_rule(line: &str) -> bool {
    let mut compact = line.chars().filter(|c| !c.is_whitespace()).peekable();
    compact.peek().is_some() && compact.all(|c| matches!(c, '+' | '-' | '|'))
}

fn classify_cell(cell: &str) -> SchemaKind {
    let trimmed = cell.trim();
    let lower = trimmed.to_lowercase();

    if let Some(ty) = SchemaType::from_lower(&lower) {
        SchemaKind::Type(ty)
    } else if lower == "column name" || lower == "type" {
        SchemaKind::Header
    } else if !trimmed.is_empty() && !trimmed.chars().all(|c| matches!(c, '-' | '+')) {
        SchemaKind::Column
    } else {
        SchemaKind::Plain
    }
}

/// [`highlight_schema`] as a [`Highlighter`].
#[derive(Debug, Clone, Copy, Default)]
pub struct SchemaHighlighter;

impl Highlighter for SchemaHighlighter {
    type Kind = SchemaKind;
    const CONTAINER_CLASS: &'static str = "schema-code";

    fn highlight(source: &str) -> Vec<Token<SchemaKind>> {
        highlight_schema(source)
    }
}
