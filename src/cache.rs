use crate::*;
use moka::sync::Cache;
use std::{marker::PhantomData, sync::Arc};

/// Highlighted tokens shared between every render of the same source.
pub type Tokens<K> = Arc<[Token<K>]>;

/// Bounded memo of one highlighter's output, keyed by source text.
///
/// Re-rendering a problem whose solution did not change hands back the same
/// `Arc` instead of scanning again.
pub struct HighlightCache<H: Highlighter> {
    inner: Cache<String, Tokens<H::Kind>>,
    _highlighter: PhantomData<H>,
}

impl<H: Highlighter> HighlightCache<H> {
    pub fn new(capacity: u64) -> Self {
        Self {
            inner: Cache::new(capacity),
            _highlighter: PhantomData,
        }
    }

    pub fn tokens(&self, source: &str) -> Tokens<H::Kind> {
        if let Some(hit) = self.inner.get(source) {
            return hit;
        }
        self.inner.get_with(source.to_owned(), || {
            trace!("Highlight cache miss ({} bytes)", source.len());
            H::highlight(source).into()
        })
    }

    /// Highlight through the cache and bind into a `<pre>` tree.
    pub fn render(&self, source: &str) -> Element {
        bind(source, &self.tokens(source), H::CONTAINER_CLASS)
    }

    pub fn entry_count(&self) -> u64 {
        self.inner.run_pending_tasks();
        self.inner.entry_count()
    }
}

impl<H: Highlighter> std::fmt::Debug for HighlightCache<H> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HighlightCache")
            .field("entries", &self.inner.entry_count())
            .finish()
    }
}
