//! # Token Encoder

use std::sync::Arc;

use crate::encoders::priority_merge_encoder::PriorityMergeSpanEncoder;
use crate::encoders::span_encoder::SpanEncoder;
use crate::encoding::Encoding;
use crate::normalize::normalize;
use crate::segmentation::SpanRef;
use crate::types::TokenType;

/// A trait for token encoders.
///
/// Encoding and counting are pure computations over the in-memory tables of
/// an [`Encoding`]; they never fail and perform no I/O.
pub trait TokenEncoder<T: TokenType>: Send + Sync {
    /// Encode text into tokens.
    ///
    /// ## Arguments
    /// * `text` - The text to encode.
    ///
    /// ## Returns
    /// A vector of tokens.
    fn encode(
        &self,
        text: &str,
    ) -> Vec<T>;

    /// Count the tokens in the text.
    ///
    /// Always equal to `self.encode(text).len()`.
    ///
    /// ## Arguments
    /// * `text` - The text to count.
    ///
    /// ## Returns
    /// The number of tokens.
    fn count(
        &self,
        text: &str,
    ) -> usize {
        self.encode(text).len()
    }
}

/// A [`TokenEncoder`] applying a [`SpanEncoder`] per segmented span.
///
/// Pipeline per call: normalize (if the encoding asks for it) → segment with
/// special-token interception → merge each word/gap span → emit special IDs
/// verbatim.
#[derive(Debug)]
pub struct SpanTokenEncoder<T: TokenType, E: SpanEncoder<T>> {
    encoding: Arc<Encoding<T>>,
    span_encoder: E,
}

/// The default [`TokenEncoder`], using [`PriorityMergeSpanEncoder`].
pub type DefaultTokenEncoder<T> = SpanTokenEncoder<T, PriorityMergeSpanEncoder>;

impl<T: TokenType, E: SpanEncoder<T> + Default> SpanTokenEncoder<T, E> {
    /// Create a new encoder over the given encoding.
    ///
    /// ## Arguments
    /// * `encoding` - The shared encoding configuration.
    pub fn new(encoding: Arc<Encoding<T>>) -> Self {
        Self::with_span_encoder(encoding, E::default())
    }
}

impl<T: TokenType, E: SpanEncoder<T>> SpanTokenEncoder<T, E> {
    /// Create a new encoder with an explicit span encoder.
    ///
    /// ## Arguments
    /// * `encoding` - The shared encoding configuration.
    /// * `span_encoder` - The merge strategy to apply per span.
    pub fn with_span_encoder(
        encoding: Arc<Encoding<T>>,
        span_encoder: E,
    ) -> Self {
        Self {
            encoding,
            span_encoder,
        }
    }

    /// Get the attached encoding.
    pub fn encoding(&self) -> &Arc<Encoding<T>> {
        &self.encoding
    }
}

impl<T: TokenType, E: SpanEncoder<T>> TokenEncoder<T> for SpanTokenEncoder<T, E> {
    fn encode(
        &self,
        text: &str,
    ) -> Vec<T> {
        let text = normalize(self.encoding.normalization(), text);
        let text = text.as_ref();

        let mut tokens = Vec::with_capacity(text.len() / 3 + 1);

        for span_ref in self.encoding.segmentor().split_spans(text) {
            match span_ref {
                SpanRef::Word(range) | SpanRef::Gap(range) => {
                    self.span_encoder.encode_append_span(
                        self.encoding.vocab(),
                        text[range].as_bytes(),
                        &mut tokens,
                    );
                }
                SpanRef::Special(range) => {
                    // The special pattern only matches configured literals.
                    tokens.push(
                        self.encoding
                            .specials()
                            .lookup_token(text[range].as_bytes())
                            .unwrap(),
                    );
                }
            }
        }

        tokens
    }
}
