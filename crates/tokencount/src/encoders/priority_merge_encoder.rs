//! # Priority-merge [`SpanEncoder`].
//!
//! Uses a binary min-heap over a doubly-linked list for O(n log n) BPE
//! merging, replacing the O(n^2) rescan in
//! [`super::MergeScanSpanEncoder`].

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use crate::encoders::span_encoder::{SpanEncoder, append_part_rank};
use crate::types::TokenType;
use crate::vocab::RankVocab;

const NONE: u32 = u32::MAX;

/// A linked-list part; node index `i` covers span bytes `i..end`.
struct Node {
    end: u32,
    prev: u32,
    next: u32,
}

/// Heap entry representing a potential merge.
///
/// Ordered by (rank, `left_idx`) so the lowest-rank, leftmost pair is popped
/// first; on exact rank ties an earlier pair always precedes a later one.
/// `left_end` and `right_end` are stored for O(1) stale-entry detection.
#[derive(Eq)]
struct MergeEntry<T: Ord> {
    rank: T,
    left_idx: u32,
    left_end: u32,
    right_end: u32,
}

impl<T: Ord> PartialEq for MergeEntry<T> {
    fn eq(
        &self,
        other: &Self,
    ) -> bool {
        self.rank == other.rank && self.left_idx == other.left_idx
    }
}

impl<T: Ord> Ord for MergeEntry<T> {
    fn cmp(
        &self,
        other: &Self,
    ) -> core::cmp::Ordering {
        self.rank
            .cmp(&other.rank)
            .then(self.left_idx.cmp(&other.left_idx))
    }
}

impl<T: Ord> PartialOrd for MergeEntry<T> {
    fn partial_cmp(
        &self,
        other: &Self,
    ) -> Option<core::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

/// A [`SpanEncoder`] using a binary min-heap with a doubly-linked list.
///
/// Processes BPE merges in O(n log n) time per span. Produces exactly the
/// output of [`super::MergeScanSpanEncoder`]: a popped entry corresponds to
/// the lowest-rank, leftmost mergeable pair among the current parts.
#[derive(Clone, Copy, Debug, Default)]
pub struct PriorityMergeSpanEncoder;

impl<T: TokenType> SpanEncoder<T> for PriorityMergeSpanEncoder {
    fn encode_append_span(
        &self,
        vocab: &RankVocab<T>,
        span: &[u8],
        tokens: &mut Vec<T>,
    ) {
        let n = span.len();

        if n < 2 {
            if n == 1 {
                append_part_rank(vocab, span, tokens);
            }
            return;
        }

        // Build the doubly-linked list of single-byte parts.
        // Node index == the part's start byte offset; only `end` moves.
        let mut nodes: Vec<Node> = (0..n)
            .map(|i| Node {
                end: (i + 1) as u32,
                prev: if i == 0 { NONE } else { (i - 1) as u32 },
                next: if i + 1 < n { (i + 1) as u32 } else { NONE },
            })
            .collect();

        // Seed the heap with all initially-mergeable adjacent pairs.
        let mut heap: BinaryHeap<Reverse<MergeEntry<T>>> = BinaryHeap::with_capacity(n);
        for i in 0..(n - 1) {
            if let Some(rank) = vocab.lookup_rank(&span[i..i + 2]) {
                heap.push(Reverse(MergeEntry {
                    rank,
                    left_idx: i as u32,
                    left_end: (i + 1) as u32,
                    right_end: (i + 2) as u32,
                }));
            }
        }

        // Process merges in priority order (lowest rank, then leftmost).
        while let Some(Reverse(entry)) = heap.pop() {
            let li = entry.left_idx as usize;

            // Validate: left node still active with expected right neighbor.
            let ri_u32 = nodes[li].next;
            if ri_u32 == NONE {
                continue;
            }
            let ri = ri_u32 as usize;

            // Bidirectional adjacency + span freshness.
            if nodes[ri].prev != entry.left_idx
                || nodes[li].end != entry.left_end
                || nodes[ri].end != entry.right_end
            {
                continue;
            }

            // Merge: left absorbs right.
            nodes[li].end = nodes[ri].end;
            let right_next = nodes[ri].next;
            nodes[li].next = right_next;
            if right_next != NONE {
                nodes[right_next as usize].prev = entry.left_idx;
            }

            // Enqueue new neighbor pairs.
            let left_prev = nodes[li].prev;
            if left_prev != NONE {
                let lp = left_prev as usize;
                if let Some(rank) = vocab.lookup_rank(&span[lp..nodes[li].end as usize]) {
                    heap.push(Reverse(MergeEntry {
                        rank,
                        left_idx: left_prev,
                        left_end: nodes[lp].end,
                        right_end: nodes[li].end,
                    }));
                }
            }
            if right_next != NONE {
                let rn = right_next as usize;
                if let Some(rank) = vocab.lookup_rank(&span[li..nodes[rn].end as usize]) {
                    heap.push(Reverse(MergeEntry {
                        rank,
                        left_idx: entry.left_idx,
                        left_end: nodes[li].end,
                        right_end: nodes[rn].end,
                    }));
                }
            }
        }

        // Collect final parts by walking the linked list.
        let mut idx = 0u32;
        while idx != NONE {
            let node = &nodes[idx as usize];
            append_part_rank(vocab, &span[idx as usize..node.end as usize], tokens);
            idx = node.next;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encoders::MergeScanSpanEncoder;
    use crate::encoders::testing::{common_encoder_test_encoding, common_encoder_tests};
    use crate::encoders::token_encoder::{SpanTokenEncoder, TokenEncoder};

    #[test]
    fn test_encoder() {
        let encoding = common_encoder_test_encoding();
        let encoder =
            SpanTokenEncoder::with_span_encoder(encoding.clone(), PriorityMergeSpanEncoder);
        common_encoder_tests(&encoder);
    }

    #[test]
    fn test_agrees_with_merge_scan() {
        let encoding = common_encoder_test_encoding();
        let heap = SpanTokenEncoder::with_span_encoder(encoding.clone(), PriorityMergeSpanEncoder);
        let scan = SpanTokenEncoder::with_span_encoder(encoding.clone(), MergeScanSpanEncoder);

        for text in [
            "",
            "hello world!",
            "abc",
            "aaaa",
            "hello hello hello",
            "I'm, you're, they've, we'll, it's",
            "lines\nof\ntext\n",
            "  spaced   out  ",
            "<EOT>hello<EOT>",
        ] {
            assert_eq!(
                heap.encode(text),
                scan.encode(text),
                "encoder disagreement on {text:?}"
            );
        }
    }
}
