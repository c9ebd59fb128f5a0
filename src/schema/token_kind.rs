//! Token classes emitted by the schema highlighter.

use crate::schema::data_type::SchemaType;
use crate::token::TokenClass;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
pub enum SchemaKind {
    /// A rule line such as `+----+------+`, or a single `|` separator.
    #[display("border")]
    Border,
    #[display("type")]
    Type(SchemaType),
    /// `Column Name` / `Type` heading cells.
    #[display("header")]
    Header,
    #[display("column")]
    Column,
    /// Free text outside the table, e.g. primary key remarks.
    #[display("note")]
    Note,
    /// Empty or dash-only cell; rendered without a class.
    #[display("plain")]
    Plain,
    /// Stands in for a `\n` of the input.
    #[display("break")]
    LineBreak,
}

impl TokenClass for SchemaKind {
    fn css_class(&self) -> Option<&'static str> {
        match self {
            SchemaKind::Border => Some("schema-border"),
            SchemaKind::Type(_) => Some("schema-type"),
            SchemaKind::Header => Some("schema-header"),
            SchemaKind::Column => Some("schema-column"),
            SchemaKind::Note => Some("schema-note"),
            SchemaKind::Plain | SchemaKind::LineBreak => None,
        }
    }

    fn is_line_break(&self) -> bool {
        matches!(self, SchemaKind::LineBreak)
    }
}
