//! # Segmentation Configuration

use crate::normalize::Normalization;
use crate::types::TokenType;
use crate::vocab::SpecialVocab;

/// Configuration for a [`crate::segmentation::TextSegmentor`].
///
/// Binds a word-split pattern, the special words intercepted ahead of it,
/// and the input normalization mode.
#[derive(Clone, Debug)]
pub struct SegmentationConfig<T: TokenType> {
    /// The word-split regex pattern.
    pub pattern: String,

    /// The special words vocabulary.
    pub specials: SpecialVocab<T>,

    /// The input normalization mode.
    pub normalization: Normalization,
}

impl<T: TokenType> SegmentationConfig<T> {
    /// Create a new segmentation config from a word-split pattern.
    ///
    /// ## Arguments
    /// * `pattern` - The word split pattern.
    ///
    /// ## Returns
    /// A new `SegmentationConfig` instance, with no special words
    /// and no normalization.
    pub fn from_pattern<P: Into<String>>(pattern: P) -> Self {
        Self {
            pattern: pattern.into(),
            specials: SpecialVocab::default(),
            normalization: Normalization::default(),
        }
    }

    /// Extend the config with the given special words.
    ///
    /// ## Arguments
    /// * `special_words` - An iterator of word strings and tokens.
    pub fn with_special_words<W, S>(
        mut self,
        special_words: W,
    ) -> Self
    where
        W: IntoIterator<Item = (S, T)>,
        S: AsRef<str>,
    {
        self.specials = self.specials.with_special_words(special_words);
        self
    }

    /// Set the input normalization mode.
    pub fn with_normalization(
        mut self,
        normalization: Normalization,
    ) -> Self {
        self.normalization = normalization;
        self
    }
}
