//! # Ordered-List Vocabulary IO

use base64::{Engine, prelude::BASE64_STANDARD};

use crate::{
    errors::TokencountError,
    types::TokenType,
    vocab::vocab_types::SpanTokenMap,
};

/// Read a [`SpanTokenMap`] from an ordered token list.
///
/// The payload is a single whitespace-separated list of base64 spans;
/// rank is the zero-based position in the list. An entry that fails base64
/// decoding is kept as its literal byte string — by convention the very
/// first entry is a literal marker token, not base64.
///
/// # Arguments
/// * `text` - the whitespace-separated token list.
///
/// # Errors
/// * [`TokencountError::MissingPayload`] if the list is empty.
/// * [`TokencountError::TokenOutOfRange`] if a rank exceeds `T::max()`.
pub fn read_token_list<T>(text: &str) -> crate::errors::Result<SpanTokenMap<T>>
where
    T: TokenType,
{
    let mut span_map = SpanTokenMap::default();

    for (position, entry) in text.split_whitespace().enumerate() {
        let span = BASE64_STANDARD
            .decode(entry)
            .unwrap_or_else(|_| entry.as_bytes().to_vec());

        let rank = T::from_usize(position).ok_or(TokencountError::TokenOutOfRange)?;

        span_map.insert(span, rank);
    }

    if span_map.is_empty() {
        return Err(TokencountError::MissingPayload(
            "ordered token list is empty".into(),
        ));
    }

    span_map.shrink_to_fit();

    Ok(span_map)
}
