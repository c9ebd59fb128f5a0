//! Display highlighting for free-form SQL.
//!
//! Modules:
//! - `keyword`    : Closed reserved-word vocabulary, matched case-insensitively.
//! - `token_kind` : The seven SQL token classes and their CSS names.
//! - `tokenizer`  : Single pass scanner producing `Vec<Token<SqlKind>>` from raw SQL.
//!
//! Design Principles:
//! 1. Colour, don't parse: malformed SQL still highlights, one character at a
//!    time if nothing else matches.
//! 2. Lossless: token texts concatenate back to the input byte for byte.
//! 3. Preserve original casing; keyword lookup upper-cases a copy.
//!
//! Example:
//! ```rust
//! use sqldaily::prelude::*;
//!
//! let tokens = highlight_sql("select a FROM my_table");
//! assert!(tokens.iter().any(|t| t.kind.is_keyword(Keyword::Select)));
//! assert!(tokens.iter().any(|t| t.kind == SqlKind::Identifier));
//! ```

pub mod keyword;
pub mod token_kind;
pub mod tokenizer;

pub use keyword::Keyword;
pub use token_kind::SqlKind;
pub use tokenizer::{SqlHighlighter, highlight_sql};

/// Convenience prelude re-exporting the most commonly used items.
pub mod prelude {
    pub use super::{Keyword, SqlHighlighter, SqlKind, highlight_sql};
    pub use crate::token::{Highlighter, Token, TokenClass};
}

impl crate::token::Token<SqlKind> {
    /// Returns true if this token represents a given keyword.
    pub fn is_keyword(&self, kw: Keyword) -> bool {
        self.kind.is_keyword(kw)
    }
}
