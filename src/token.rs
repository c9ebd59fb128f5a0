//! Span model shared by both highlighters.
//!
//! A `Token` pairs a classification with byte offsets into the source it was
//! cut from. Its text is never copied; callers slice the original string with
//! [`Token::text`]. Concatenating the text of every SQL token, in order,
//! reproduces the input exactly. Schema tokens do the same except that
//! whitespace-only lines come back empty.

/// A classified span with inclusive start and exclusive end byte offsets.
///
/// Invariants:
/// - `end >= start`; only the schema highlighter emits empty (unstyled) splits
/// - `[start, end)` is a valid `str` slice range of the highlighted source
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Token<K> {
    pub kind: K,
    pub start: usize,
    pub end: usize,
}

impl<K> Token<K> {
    pub const fn new(kind: K, start: usize, end: usize) -> Self {
        Self { kind, start, end }
    }

    /// Byte length of this token (`end - start`).
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The original substring this token covers.
    ///
    /// `source` must be the string the token was produced from.
    pub fn text<'s>(&self, source: &'s str) -> &'s str {
        &source[self.start..self.end]
    }

    pub const fn span(&self) -> (usize, usize) {
        (self.start, self.end)
    }
}

/// Classification that knows how it is presented.
pub trait TokenClass: Copy + Eq + std::fmt::Debug {
    /// Stable CSS class name, or `None` for unstyled text.
    fn css_class(&self) -> Option<&'static str>;

    /// True for the marker that materializes as a hard line break.
    fn is_line_break(&self) -> bool {
        false
    }
}

/// A pure, total source-to-token function.
pub trait Highlighter {
    type Kind: TokenClass + Send + Sync + 'static;

    /// Class of the `<code>` element wrapping the rendered tokens.
    const CONTAINER_CLASS: &'static str;

    fn highlight(source: &str) -> Vec<Token<Self::Kind>>;
}

/// Concatenate the text of `tokens` back into a string.
pub fn reconstruct<K>(source: &str, tokens: &[Token<K>]) -> String {
    tokens.iter().map(|t| t.text(source)).collect()
}
