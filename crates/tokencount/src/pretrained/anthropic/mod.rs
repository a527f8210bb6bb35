//! # Anthropic Pretrained Encodings
//!
//! The ordered-list vocabulary family. The payload is a single JSON
//! document carrying the word pattern, the special-token table, and the
//! merge vocabulary as a whitespace-separated base64 list (rank = list
//! position). Input is NFKC-normalized before segmentation.
//!
//! Note: this matches the tokenizer for older Claude models (pre-Claude 3).
//! For newer models it is only a rough approximation, useful for estimation.

use std::fs::File;
use std::io::BufReader;

use crate::encoding::Encoding;
use crate::errors::TokencountError;
use crate::normalize::Normalization;
use crate::resources::{ConstUrlResource, ResourceLoader};
use crate::segmentation::SegmentationConfig;
use crate::types::TokenType;
use crate::vocab::RankVocab;
use crate::vocab::io::read_token_list;

/// The "claude" tokenizer document resource.
pub const CLAUDE_JSON_RESOURCE: ConstUrlResource = ConstUrlResource {
    urls: &[
        "https://raw.githubusercontent.com/anthropics/anthropic-tokenizer-typescript/main/claude.json",
    ],
    hash: None,
};

/// The documented "claude" word pattern; used when the tokenizer document
/// does not carry its own `pat_str`.
pub const CLAUDE_WORD_PATTERN: &str = concat!(
    r"'(?i:[sdmt]|ll|ve|re)",
    r"|[^\r\n\p{L}\p{N}]?\p{L}+",
    r"|\p{N}{1,3}",
    r"| ?[^\s\p{L}\p{N}]+[\r\n]*",
    r"|\s*[\r\n]+",
    r"|\s+(?!\S)",
    r"|\s+",
);

/// The on-disk layout of the "claude" tokenizer document.
#[derive(Debug, serde::Deserialize)]
struct ClaudeDocument {
    /// The word-split pattern, when the document carries one.
    #[serde(default)]
    pat_str: Option<String>,

    /// The special word table.
    #[serde(default)]
    special_tokens: std::collections::HashMap<String, u64>,

    /// Whitespace-separated base64 merge list; rank = list position.
    bpe_ranks: String,
}

/// Build an [`Encoding`] from a parsed "claude" tokenizer document.
fn encoding_from_document<T: TokenType>(
    doc: ClaudeDocument
) -> crate::errors::Result<Encoding<T>> {
    let span_map = read_token_list::<T>(&doc.bpe_ranks)?;

    let mut specials = Vec::with_capacity(doc.special_tokens.len());
    for (word, token) in &doc.special_tokens {
        let token = T::from_u64(*token).ok_or(TokencountError::TokenOutOfRange)?;
        specials.push((word.as_str(), token));
    }

    let pattern = doc
        .pat_str
        .as_deref()
        .filter(|p| !p.is_empty())
        .unwrap_or(CLAUDE_WORD_PATTERN);

    let config = SegmentationConfig::<T>::from_pattern(pattern)
        .with_special_words(specials)
        .with_normalization(Normalization::Nfkc);

    Encoding::from_config(config, RankVocab::from_span_map(span_map))
}

/// Load the "claude" pretrained encoding.
///
/// ## Arguments
/// * `loader` - The resource loader supplying the tokenizer document.
///
/// ## Returns
/// A `Result` containing the encoding; an undecodable document or an empty
/// merge list is a fatal load error.
pub fn load_claude_vocab<T: TokenType>(
    loader: &mut dyn ResourceLoader
) -> crate::errors::Result<Encoding<T>> {
    let path = loader.load_resource_path(&["anthropic", "claude"], &CLAUDE_JSON_RESOURCE)?;

    let doc: ClaudeDocument = serde_json::from_reader(BufReader::new(File::open(path)?))
        .map_err(|e| TokencountError::Parse(e.to_string()))?;

    encoding_from_document(doc)
}
