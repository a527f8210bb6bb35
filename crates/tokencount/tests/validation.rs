//! End-to-end validation against the published vocabulary payloads.
//!
//! These tests download (and cache) the real vocab payloads; they are
//! `#[ignore]`d so the offline suite stays hermetic. Run with:
//!
//! ```terminaloutput
//! cargo test -p tokencount -- --ignored
//! ```

#![allow(missing_docs)]

use std::sync::Arc;

use tokencount::disk_cache::TokencountDiskCache;
use tokencount::encoders::{DefaultTokenEncoder, TokenEncoder};
use tokencount::encoding::Encoding;
use tokencount::pretrained::get_encoding;

const SAMPLES: &[&str] = &[
    "hello world",
    "The quick brown fox jumps over the lazy dog.",
    "It's a beautiful day, and I'll be taking my 3 dogs for a walk.",
    "Don't forget: the temperature is 72 degrees!",
    "  multiple   spaces  ",
    "line1\nline2\r\nline3",
    "123 + 456 = 789",
    "caf\u{00e9} na\u{ef}ve \u{4f60}\u{597d}",
    "$$$!!!...---",
    " ",
    "a",
    "\t\ttabs\tand\tspaces ",
];

fn load_encoder(name: &str) -> DefaultTokenEncoder<u32> {
    let mut disk_cache = TokencountDiskCache::default();
    let encoding: Arc<Encoding<u32>> = get_encoding(name, &mut disk_cache).unwrap();
    encoding.into_default_encoder()
}

fn count_expectations(
    name: &str,
    cases: &[(&str, usize)],
) {
    let encoder = load_encoder(name);

    for &(text, want) in cases {
        assert_eq!(
            encoder.count(text),
            want,
            "count mismatch for {name}: {text:?}"
        );
        assert_eq!(encoder.count(text), encoder.encode(text).len());
    }
}

#[test]
#[ignore]
fn o200k_hello_world() {
    count_expectations("o200k_base", &[("Hello, world!", 4), ("", 0)]);
}

#[test]
#[ignore]
fn cl100k_hello_world() {
    count_expectations("cl100k_base", &[("Hello, world!", 4), ("", 0)]);
}

#[test]
#[ignore]
fn o200k_vs_tiktoken() {
    let encoder = load_encoder("o200k_base");
    let bpe = tiktoken_rs::o200k_base().unwrap();

    for text in SAMPLES {
        let tokens = encoder.encode(text);
        let reference: Vec<u32> = bpe
            .encode_with_special_tokens(text)
            .into_iter()
            .map(|t| t as u32)
            .collect();

        assert_eq!(
            tokens, reference,
            "encode mismatch (tokencount vs tiktoken) for o200k_base: {text:?}"
        );
    }
}

#[test]
#[ignore]
fn cl100k_vs_tiktoken() {
    let encoder = load_encoder("cl100k_base");
    let bpe = tiktoken_rs::cl100k_base().unwrap();

    for text in SAMPLES {
        let tokens = encoder.encode(text);
        let reference: Vec<u32> = bpe
            .encode_with_special_tokens(text)
            .into_iter()
            .map(|t| t as u32)
            .collect();

        assert_eq!(
            tokens, reference,
            "encode mismatch (tokencount vs tiktoken) for cl100k_base: {text:?}"
        );
    }
}

#[test]
#[ignore]
fn claude_token_ids() {
    let encoder = load_encoder("claude");

    assert_eq!(encoder.encode("hello world!"), vec![9378, 2250, 2]);
}

#[test]
#[ignore]
fn claude_counts() {
    count_expectations(
        "claude",
        &[
            ("hello world!", 3),
            ("\u{2122}", 1),
            ("\u{3f0}", 1),
            ("<EOT>", 1),
            ("", 0),
            ("I'm, you're, they've, we'll, it's", 14),
            ("spaces   between   words", 5),
            ("text with trailing  ", 4),
            ("The year 2024 has 365 days", 9),
            ("Hello, world! How are you?", 8),
        ],
    );
}
