//! # Rank ``{ Vec<u8> -> T }`` Merge Vocabulary

use crate::types::TokenType;
use crate::vocab::vocab_types::SpanTokenMap;

/// Merge vocabulary as a dictionary map of ``{ Vec<u8> -> T }``.
///
/// Ranks are unique; a lower rank merges earlier. Built once at
/// configuration-load time and never mutated afterward.
#[derive(Debug, Clone, PartialEq)]
pub struct RankVocab<T: TokenType> {
    /// Map of ``{ Vec<u8> -> T }``.
    span_map: SpanTokenMap<T>,
}

impl<T: TokenType> From<SpanTokenMap<T>> for RankVocab<T> {
    fn from(span_map: SpanTokenMap<T>) -> Self {
        Self::from_span_map(span_map)
    }
}

/// List the byte values with no single-byte entry in a span map.
pub fn uncovered_bytes<T: TokenType>(span_map: &SpanTokenMap<T>) -> Vec<u8> {
    (0..=255u8)
        .filter(|b| !span_map.contains_key(core::slice::from_ref(b)))
        .collect()
}

impl<T: TokenType> RankVocab<T> {
    /// Build a [`RankVocab`] from a [`SpanTokenMap`].
    ///
    /// Single-byte coverage is checked here, once: a merge can leave behind a
    /// part with no vocabulary entry only when some byte value has no entry,
    /// and such parts are omitted from encode output. Uncovered byte values
    /// are surfaced as a load-time warning rather than an encode-time error.
    ///
    /// ## Arguments
    /// * `span_map` - The span to rank mapping.
    ///
    /// ## Returns
    /// A new `RankVocab` instance.
    pub fn from_span_map(mut span_map: SpanTokenMap<T>) -> Self {
        let missing = uncovered_bytes(&span_map);
        if !missing.is_empty() {
            log::warn!(
                "rank vocab covers {}/256 byte values; fragments over uncovered bytes \
                 {missing:02x?} will be omitted from encode output",
                256 - missing.len(),
            );
        }

        span_map.shrink_to_fit();

        Self { span_map }
    }

    /// The number of entries in the vocabulary.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.span_map.len()
    }

    /// Iterate over the entries in the vocabulary.
    pub fn iter<'a>(&'a self) -> impl Iterator<Item = (&'a Vec<u8>, &'a T)> + 'a {
        self.span_map.iter()
    }

    /// Return the rank for the byte span, if any.
    ///
    /// ## Arguments
    /// * `span` - The byte slice to look up.
    ///
    /// ## Returns
    /// An `Option` containing the rank if the span exists in the vocabulary.
    pub fn lookup_rank(
        &self,
        span: &[u8],
    ) -> Option<T> {
        self.span_map.get(span).copied()
    }
}
