//! Token classes emitted by the SQL highlighter.
//!
//! The set is closed and maps one-to-one onto the `sql-*` CSS classes. A
//! keyword token remembers which [`Keyword`] it matched so callers can ask
//! about specific words without re-reading the source.

use crate::sql::keyword::Keyword;
use crate::token::TokenClass;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
pub enum SqlKind {
    /// `--` or `#` up to, not including, the end of the line.
    #[display("comment")]
    Comment,
    /// `'...'` including both quotes.
    #[display("string")]
    String,
    /// Unsigned decimal literal.
    #[display("number")]
    Number,
    /// Word found in the reserved-word vocabulary.
    #[display("keyword")]
    Keyword(Keyword),
    /// Any other word.
    #[display("identifier")]
    Identifier,
    #[display("operator")]
    Operator,
    /// Single character of anything else, whitespace included.
    #[display("punctuation")]
    Punctuation,
}

impl SqlKind {
    pub fn is_keyword(&self, kw: Keyword) -> bool {
        matches!(self, SqlKind::Keyword(k) if *k == kw)
    }

    pub fn keyword(&self) -> Option<Keyword> {
        match self {
            SqlKind::Keyword(k) => Some(*k),
            _ => None,
        }
    }
}

impl TokenClass for SqlKind {
    fn css_class(&self) -> Option<&'static str> {
        Some(match self {
            SqlKind::Comment => "sql-comment",
            SqlKind::String => "sql-string",
            SqlKind::Number => "sql-number",
            SqlKind::Keyword(_) => "sql-keyword",
            SqlKind::Identifier => "sql-identifier",
            SqlKind::Operator => "sql-operator",
            SqlKind::Punctuation => "sql-punctuation",
        })
    }
}
