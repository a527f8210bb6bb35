//! # Special Words Vocabulary

use crate::types::TokenType;
use crate::vocab::SpanTokenMap;

/// Token vocabulary for special words.
///
/// Special word ranks are assigned explicitly and never participate in
/// pair-merging; their numeric values may overlap the merge vocabulary.
#[derive(Default, Debug, Clone, PartialEq)]
pub struct SpecialVocab<T: TokenType> {
    /// The map of special words to tokens.
    span_map: SpanTokenMap<T>,
}

impl<T: TokenType> From<SpanTokenMap<T>> for SpecialVocab<T> {
    fn from(span_map: SpanTokenMap<T>) -> Self {
        Self::from_map(span_map)
    }
}

impl<T: TokenType> SpecialVocab<T> {
    /// Create a new special words vocab.
    ///
    /// ## Arguments
    /// * `span_map` - A mapping of byte spans to tokens.
    ///
    /// ## Returns
    /// A new `SpecialVocab` instance.
    pub fn from_map(span_map: SpanTokenMap<T>) -> Self {
        Self { span_map }
    }

    /// Get the number of special words in the vocab.
    pub fn len(&self) -> usize {
        self.span_map.len()
    }

    /// Check if the vocab is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Add a word to the vocab.
    ///
    /// ## Arguments
    /// * `word` - The word string to add.
    /// * `token` - The token value to assign to the word.
    pub fn add_str_word(
        &mut self,
        word: &str,
        token: T,
    ) {
        self.span_map.insert(word.as_bytes().to_vec(), token);
    }

    /// Extend the vocabulary with the given special words.
    ///
    /// ## Arguments
    /// * `special_words` - An iterator of word strings and tokens.
    ///
    /// ## Returns
    /// The updated `SpecialVocab` instance.
    pub fn with_special_words<W, S>(
        self,
        special_words: W,
    ) -> Self
    where
        W: IntoIterator<Item = (S, T)>,
        S: AsRef<str>,
    {
        let mut vocab = self;
        for (word, token) in special_words {
            vocab.add_str_word(word.as_ref(), token);
        }
        vocab
    }

    /// Return the associated token for the word, if any.
    ///
    /// ## Arguments
    /// * `chunk` - The byte slice to look up.
    ///
    /// ## Returns
    /// An `Option` containing the token if the span exists in the special vocabulary.
    pub fn lookup_token(
        &self,
        chunk: &[u8],
    ) -> Option<T> {
        self.span_map.get(chunk).copied()
    }

    /// Get the special word literals, longest first.
    ///
    /// Longest-first ordering makes prefix interception deterministic:
    /// when several literals match at the same position, the longest wins.
    pub fn literals_by_length(&self) -> Vec<&[u8]> {
        let mut literals: Vec<&[u8]> = self.span_map.keys().map(|k| k.as_ref()).collect();
        literals.sort_by(|a, b| b.len().cmp(&a.len()).then(a.cmp(b)));
        literals
    }

    /// Get the regex pattern matching special words, longest match first.
    ///
    /// ## Returns
    /// `None` if no special words are present;
    /// and `Some(String)` otherwise.
    pub fn special_pattern(&self) -> Option<String> {
        if self.is_empty() {
            return None;
        }

        let alts = self
            .literals_by_length()
            .into_iter()
            .map(|k| regex::escape(&String::from_utf8_lossy(k)))
            .collect::<Vec<_>>();
        Some(format!("({})", alts.join("|")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_special_vocab() {
        type T = u32;
        let mut vocab: SpecialVocab<T> = SpecialVocab::default();
        assert!(vocab.is_empty());
        assert_eq!(vocab.len(), 0);
        assert_eq!(vocab.special_pattern(), None);

        vocab.add_str_word("hello", 1);
        assert_eq!(vocab.len(), 1);
        assert!(!vocab.is_empty());
        assert_eq!(vocab.lookup_token(b"hello"), Some(1));
        assert_eq!(vocab.lookup_token(b"world"), None);

        let rebuild: SpecialVocab<T> = vocab.clone();
        assert_eq!(rebuild, vocab);
    }

    #[test]
    fn test_special_pattern_longest_first() {
        type T = u32;
        let vocab: SpecialVocab<T> = SpecialVocab::default()
            .with_special_words([("<EOT>", 0), ("<EOT_LONG>", 1), ("<META>", 2)]);

        assert_eq!(
            vocab.special_pattern().unwrap(),
            r"(<EOT_LONG>|<META>|<EOT>)"
        );
    }
}
