//! # Merge Scan Span Encoder
//!
//! Incrementally re-scans for the best available merge,
//! iterates until no more merges remain.

use crate::encoders::span_encoder::{SpanEncoder, append_part_rank};
use crate::types::TokenType;
use crate::vocab::RankVocab;

/// A [`SpanEncoder`] which incrementally scans for merges.
///
/// Every iteration re-scans all adjacent part pairs for the lowest-rank
/// concatenation; O(n^2) per span. Fine for the short spans segmentation
/// yields; [`super::PriorityMergeSpanEncoder`] is preferred for unbounded
/// letter runs.
#[derive(Clone, Copy, Debug, Default)]
pub struct MergeScanSpanEncoder;

impl<T: TokenType> SpanEncoder<T> for MergeScanSpanEncoder {
    fn encode_append_span(
        &self,
        vocab: &RankVocab<T>,
        span: &[u8],
        tokens: &mut Vec<T>,
    ) {
        if span.is_empty() {
            return;
        }

        // One part per raw byte; parts are boundary offsets into the span,
        // so part i covers bounds[i]..bounds[i + 1].
        let mut bounds: Vec<usize> = (0..=span.len()).collect();

        while bounds.len() > 2 {
            let mut best: Option<(T, usize)> = None;

            for i in 0..bounds.len() - 2 {
                if let Some(rank) = vocab.lookup_rank(&span[bounds[i]..bounds[i + 2]]) {
                    // Strict less-than: a later pair with an equal rank
                    // never displaces an earlier one.
                    if best.is_none_or(|(r, _)| rank < r) {
                        best = Some((rank, i));
                    }
                }
            }

            match best {
                Some((_, i)) => {
                    bounds.remove(i + 1);
                }
                None => break,
            }
        }

        for w in bounds.windows(2) {
            append_part_rank(vocab, &span[w[0]..w[1]], tokens);
        }
    }
}
