//! Display highlighting for the ASCII-art table definitions shipped with each
//! problem.
//!
//! Modules:
//! - `data_type`  : Closed set of bare column type names.
//! - `token_kind` : Schema token classes and their CSS names.
//! - `tokenizer`  : Line-oriented scanner producing `Vec<Token<SchemaKind>>`.

pub mod data_type;
pub mod token_kind;
pub mod tokenizer;

pub use data_type::SchemaType;
pub use token_kind::SchemaKind;
pub use tokenizer::{SchemaHighlighter, highlight_schema};
