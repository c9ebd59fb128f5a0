use crate::render::node::{Element, Node};
use crate::token::{Highlighter, Token, TokenClass};

/// Materialize `tokens` as `<pre><code class="{class}">` holding one inline
/// element per token.
///
/// - Element order is token order and each element is keyed by its token
///   index.
/// - Styled tokens become `<span class="...">`, unstyled ones a bare `<span>`,
///   line-break markers a `<br>`.
/// - Text is copied verbatim, so the tree's text content equals `source` for
///   any lossless token sequence.
pub fn bind<K: TokenClass>(source: &str, tokens: &[Token<K>], class: &str) -> Element {
    let inline = tokens
        .iter()
        .enumerate()
        .map(|(key, token)| inline(source, key, token));
    Element::new("pre").with_child(Element::new("code").with_class(class).with_children(inline))
}

/// Highlight `source` with `H` and bind the result.
pub fn render<H: Highlighter>(source: &str) -> Element {
    bind(source, &H::highlight(source), H::CONTAINER_CLASS)
}

fn inline<K: TokenClass>(source: &str, key: usize, token: &Token<K>) -> Node {
    if token.kind.is_line_break() {
        return Element::new("br").with_key(key).into();
    }
    let span = Element::new("span").with_key(key);
    let span = match token.kind.css_class() {
        Some(class) => span.with_class(class),
        None => span,
    };
    span.with_text(token.text(source)).into()
}
