//! # Vocabulary Types

use crate::types::TcHashMap;

/// `{ Vec<u8> -> T }` map.
///
/// ## Style Hints
/// Instance names should prefer `span_map`, or `span_token_map`.
pub type SpanTokenMap<T> = TcHashMap<Vec<u8>, T>;
