//! # Span Encoder Trait

use crate::types::TokenType;
use crate::vocab::RankVocab;

/// A merge strategy for one segmented span.
///
/// Implementations keep no state across calls; all working memory is local
/// to one `encode_append_span` invocation.
pub trait SpanEncoder<T: TokenType>: Send + Sync {
    /// Merge one span into tokens, appending to a target buffer.
    ///
    /// ## Arguments
    /// * `vocab` - The merge vocabulary.
    /// * `span` - The byte span to merge; contains no special token.
    /// * `tokens` - The target token buffer to append to.
    fn encode_append_span(
        &self,
        vocab: &RankVocab<T>,
        span: &[u8],
        tokens: &mut Vec<T>,
    );
}

/// Emit the rank of a final merged part.
///
/// A part with no vocabulary entry is omitted from the output; coverage
/// holes are surfaced once, at vocabulary load time.
pub(crate) fn append_part_rank<T: TokenType>(
    vocab: &RankVocab<T>,
    part: &[u8],
    tokens: &mut Vec<T>,
) {
    match vocab.lookup_rank(part) {
        Some(rank) => tokens.push(rank),
        None => log::debug!("omitting {}-byte part with no vocab entry", part.len()),
    }
}
