//! # Named Encoding Configuration
//!
//! An [`Encoding`] is the immutable bundle behind one named tokenizer
//! variant: merge vocabulary, special words, word-split pattern, and
//! normalization mode. Constructed once, then shared read-only across
//! arbitrarily many concurrent callers.

use std::sync::Arc;

use crate::encoders::DefaultTokenEncoder;
use crate::normalize::Normalization;
use crate::segmentation::{SegmentationConfig, TextSegmentor};
use crate::types::TokenType;
use crate::vocab::{RankVocab, SpecialVocab};

/// A named encoding configuration.
///
/// No field is written after construction; the compiled segmentor and both
/// vocabularies may be shared by reference without locking.
#[derive(Debug)]
pub struct Encoding<T: TokenType> {
    /// The merge vocabulary.
    vocab: RankVocab<T>,

    /// The special words vocabulary.
    specials: SpecialVocab<T>,

    /// The input normalization mode.
    normalization: Normalization,

    /// The compiled word-split / special-interception segmentor.
    segmentor: TextSegmentor,
}

impl<T: TokenType> Encoding<T> {
    /// Build an [`Encoding`] from a segmentation config and a merge vocab.
    ///
    /// ## Arguments
    /// * `config` - The segmentation configuration (pattern, specials,
    ///   normalization).
    /// * `vocab` - The merge vocabulary.
    ///
    /// ## Returns
    /// A `Result` containing the new `Encoding`, or a parse error if a
    /// pattern fails to compile.
    pub fn from_config(
        config: SegmentationConfig<T>,
        vocab: RankVocab<T>,
    ) -> crate::errors::Result<Self> {
        let segmentor = TextSegmentor::from_config(&config)?;

        let SegmentationConfig {
            specials,
            normalization,
            ..
        } = config;

        Ok(Self {
            vocab,
            specials,
            normalization,
            segmentor,
        })
    }

    /// Get the merge vocabulary.
    pub fn vocab(&self) -> &RankVocab<T> {
        &self.vocab
    }

    /// Get the special words vocabulary.
    pub fn specials(&self) -> &SpecialVocab<T> {
        &self.specials
    }

    /// Get the input normalization mode.
    pub fn normalization(&self) -> Normalization {
        self.normalization
    }

    /// Get the segmentor.
    pub fn segmentor(&self) -> &TextSegmentor {
        &self.segmentor
    }

    /// Wrap this encoding in the default token encoder.
    pub fn into_default_encoder(self: Arc<Self>) -> DefaultTokenEncoder<T> {
        DefaultTokenEncoder::new(self)
    }
}
