//! # Shared Encoder Test Fixtures

use std::sync::Arc;

use crate::encoders::span_encoder::SpanEncoder;
use crate::encoders::token_encoder::{SpanTokenEncoder, TokenEncoder};
use crate::encoding::Encoding;
use crate::pretrained::openai::patterns::CL100K_BASE_PATTERN;
use crate::segmentation::SegmentationConfig;
use crate::vocab::{RankVocab, SpanTokenMap};

type T = u32;

/// Build an [`Encoding`] over the cl100k word pattern from a span map
/// and special words.
pub(crate) fn test_encoding(
    span_map: SpanTokenMap<T>,
    specials: &[(&str, T)],
) -> Arc<Encoding<T>> {
    let config = SegmentationConfig::from_pattern(CL100K_BASE_PATTERN)
        .with_special_words(specials.iter().copied());

    Encoding::from_config(config, RankVocab::from_span_map(span_map))
        .unwrap()
        .into()
}

/// The common synthetic test encoding.
///
/// Every byte value maps to its own rank, so coverage is total; merge
/// words sit at ranks >= 256. The ranks are arranged so that
/// `"hello world!"` merges to `[400, 285, 295, 297, 33]`:
///
/// * `"hello"`: `he`(300) + `ll`(290), `llo`(310), `hello`(400).
/// * `" world"`: ` w`(285), `or`(295), `ld`(297); no further merges.
/// * `"!"`: the raw byte rank 33.
pub(crate) fn common_encoder_test_encoding() -> Arc<Encoding<T>> {
    let mut span_map = SpanTokenMap::<T>::default();
    for b in 0..=255u8 {
        span_map.insert(vec![b], b as T);
    }
    for (word, rank) in [
        ("he", 300),
        ("ll", 290),
        ("llo", 310),
        ("hello", 400),
        (" w", 285),
        ("or", 295),
        ("ld", 297),
        // Equal-rank pair for the tie-break checks.
        ("ab", 500),
        ("bc", 500),
        ("aa", 510),
    ] {
        span_map.insert(word.as_bytes().to_vec(), rank);
    }

    test_encoding(span_map, &[("<EOT>", 9999)])
}

/// Assertions shared by every [`SpanEncoder`] implementation.
pub(crate) fn common_encoder_tests<E: SpanEncoder<T>>(encoder: &SpanTokenEncoder<T, E>) {
    // Empty input.
    assert_eq!(encoder.encode(""), Vec::<T>::new());
    assert_eq!(encoder.count(""), 0);

    // Merge order: "hello" fully merges; " world" stops at three parts.
    assert_eq!(
        encoder.encode("hello world!"),
        vec![400, 285, 295, 297, 33]
    );
    assert_eq!(encoder.count("hello world!"), 5);

    // Equal-rank adjacent pairs merge leftmost-first: "ab"(500) wins over
    // "bc"(500), leaving the lone 'c' byte.
    assert_eq!(encoder.encode("abc"), vec![500, 99]);

    // Runs of an equal-rank pair collapse pairwise from the left.
    assert_eq!(encoder.encode("aaaa"), vec![510, 510]);
    assert_eq!(encoder.encode("aaa"), vec![510, 97]);

    // Special words bypass merging entirely, and never pair with
    // neighboring text.
    assert_eq!(encoder.encode("<EOT>"), vec![9999]);
    assert_eq!(encoder.encode("hello<EOT>"), vec![400, 9999]);

    // Counting is always the encode length.
    for text in ["hello", "<EOT><EOT>", "a1! \n"] {
        assert_eq!(encoder.count(text), encoder.encode(text).len());
    }
}
