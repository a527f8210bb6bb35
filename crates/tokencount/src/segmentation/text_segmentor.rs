//! # Text Segmentor

use core::ops::Range;

use crate::errors::TokencountError;
use crate::segmentation::segmentation_config::SegmentationConfig;
use crate::types::TokenType;

/// Word Reference for [`TextSegmentor`].
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum SpanRef {
    /// A normal word reference.
    Word(Range<usize>),

    /// A special word reference.
    Special(Range<usize>),

    /// A gap between word matches.
    ///
    /// Bytes the word pattern leaves uncovered are emitted as their own
    /// chunk rather than dropped, so segmentation always covers the input.
    Gap(Range<usize>),
}

impl From<SpanRef> for Range<usize> {
    fn from(span: SpanRef) -> Self {
        match span {
            SpanRef::Word(range) => range,
            SpanRef::Special(range) => range,
            SpanRef::Gap(range) => range,
        }
    }
}

/// Word Split + Special Words Segmentor
///
/// Special words are intercepted ahead of ordinary word splitting, with
/// longest-match-wins resolution (the special pattern alternation is sorted
/// longest first).
#[derive(Debug)]
pub struct TextSegmentor {
    /// Regex for splitting words.
    ///
    /// The reference word patterns use negative lookahead for the trailing
    /// whitespace rule, which `regex` cannot express; `fancy-regex` can.
    word_re: fancy_regex::Regex,

    /// Regex for matching special words.
    special_re: Option<regex::Regex>,
}

impl TextSegmentor {
    /// Create a new text segmentor from the given configuration.
    ///
    /// ## Arguments
    /// * `config` - The segmentation configuration.
    ///
    /// ## Returns
    /// A `Result` containing the new `TextSegmentor`, or a parse error if
    /// a pattern fails to compile.
    pub fn from_config<T>(config: &SegmentationConfig<T>) -> crate::errors::Result<Self>
    where
        T: TokenType,
    {
        let word_re = fancy_regex::Regex::new(&config.pattern)
            .map_err(|e| TokencountError::Parse(e.to_string()))?;

        let special_re = match config.specials.special_pattern() {
            None => None,
            Some(pattern) => Some(
                regex::Regex::new(&pattern).map_err(|e| TokencountError::Parse(e.to_string()))?,
            ),
        };

        Ok(Self {
            word_re,
            special_re,
        })
    }

    /// Find the next special span in the text.
    ///
    /// ## Arguments
    /// * `text` - The text to search in.
    ///
    /// ## Returns
    /// * `Some(Range<usize>)` if a special span is found,
    /// * `None` otherwise.
    pub fn next_special_span(
        &self,
        text: &str,
    ) -> Option<Range<usize>> {
        match &self.special_re {
            None => None,
            Some(re) => re.find(text).map(|m| m.range()),
        }
    }

    /// Split text into spans.
    ///
    /// Every input byte lands in exactly one [`SpanRef`]: specials are
    /// intercepted first, the word pattern splits the text between them,
    /// and anything the word pattern skips becomes a [`SpanRef::Gap`].
    ///
    /// ## Arguments
    /// * `text` - The text to split.
    ///
    /// ## Returns
    /// A vector of `SpanRef` items, in input order.
    pub fn split_spans(
        &self,
        text: &str,
    ) -> Vec<SpanRef> {
        let mut spans = Vec::with_capacity(text.len() / 3 + 1);

        let mut current = text;
        let mut offset = 0;

        while let Some(range) = self.next_special_span(current) {
            self.split_words(&current[..range.start], offset, &mut spans);
            spans.push(SpanRef::Special(offset + range.start..offset + range.end));

            current = &current[range.end..];
            offset += range.end;
        }

        self.split_words(current, offset, &mut spans);

        spans
    }

    fn split_words(
        &self,
        text: &str,
        offset: usize,
        spans: &mut Vec<SpanRef>,
    ) {
        let mut last = 0;
        for m in self.word_re.find_iter(text).flatten() {
            let Range { start, end } = m.range();

            if last < start {
                spans.push(SpanRef::Gap(offset + last..offset + start));
            }
            spans.push(SpanRef::Word(offset + start..offset + end));
            last = end;
        }

        if last < text.len() {
            spans.push(SpanRef::Gap(offset + last..offset + text.len()));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pretrained::openai::patterns::CL100K_BASE_PATTERN;

    type T = u32;

    fn cl100k_segmentor(config: SegmentationConfig<T>) -> TextSegmentor {
        TextSegmentor::from_config(&config).unwrap()
    }

    fn span_strs<'a>(
        segmentor: &TextSegmentor,
        text: &'a str,
    ) -> Vec<&'a str> {
        segmentor
            .split_spans(text)
            .into_iter()
            .map(|s| &text[Range::<usize>::from(s)])
            .collect()
    }

    #[test]
    fn test_split_words() {
        let segmentor = cl100k_segmentor(
            SegmentationConfig::from_pattern(CL100K_BASE_PATTERN)
                .with_special_words([("<|FNORD|>", 4000), ("<|NORP|>", 4001)]),
        );

        let buf = "hello<|FNORD|> wor<|NORP|>ld!";

        assert_eq!(
            &segmentor.split_spans(buf),
            &vec![
                SpanRef::Word(0..5),
                SpanRef::Special(5..14),
                SpanRef::Word(14..18),
                SpanRef::Special(18..26),
                SpanRef::Word(26..28),
                SpanRef::Word(28..buf.len()),
            ]
        );
    }

    #[test]
    fn test_contractions_and_digits() {
        let segmentor = cl100k_segmentor(SegmentationConfig::from_pattern(CL100K_BASE_PATTERN));

        assert_eq!(
            span_strs(&segmentor, "I'm here, they'll say 12345"),
            vec!["I", "'m", " here", ",", " they", "'ll", " say", " ", "123", "45"],
        );
    }

    #[test]
    fn test_trailing_whitespace_lookahead() {
        // The reference rule "whitespace not followed by non-whitespace"
        // requires negative lookahead; the word pattern keeps the final
        // space attached to nothing, rather than to "trailing".
        let segmentor = cl100k_segmentor(SegmentationConfig::from_pattern(CL100K_BASE_PATTERN));

        assert_eq!(
            span_strs(&segmentor, "text with trailing  "),
            vec!["text", " with", " trailing", "  "],
        );
    }

    #[test]
    fn test_longest_special_wins() {
        let segmentor = cl100k_segmentor(
            SegmentationConfig::from_pattern(CL100K_BASE_PATTERN)
                .with_special_words([("<EOT>", 0), ("<EOT><EOT>", 1)]),
        );

        let buf = "a<EOT><EOT>b";
        assert_eq!(
            &segmentor.split_spans(buf),
            &vec![
                SpanRef::Word(0..1),
                SpanRef::Special(1..11),
                SpanRef::Word(11..12),
            ]
        );
    }

    #[test]
    fn test_full_coverage() {
        let segmentor = cl100k_segmentor(
            SegmentationConfig::from_pattern(CL100K_BASE_PATTERN)
                .with_special_words([("<EOT>", 0)]),
        );

        for text in ["", "hello world!", "a<EOT>b", "  \n\t x ", "ϰ™\u{0301}"] {
            let spans = segmentor.split_spans(text);

            // Spans tile the input: in order, adjacent, and complete.
            let mut cursor = 0;
            for span in spans {
                let range = Range::<usize>::from(span);
                assert_eq!(range.start, cursor, "gap or overlap in {text:?}");
                cursor = range.end;
            }
            assert_eq!(cursor, text.len(), "dropped suffix in {text:?}");
        }
    }
}
