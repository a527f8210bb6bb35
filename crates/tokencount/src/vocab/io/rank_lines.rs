//! # Rank-Line Vocabulary IO

use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
};

use base64::{Engine, prelude::BASE64_STANDARD};

use crate::{
    types::TokenType,
    vocab::vocab_types::SpanTokenMap,
};

/// Load a [`SpanTokenMap`] from a rank-line vocab file.
///
/// Lines are:
/// ```terminaloutput
/// {BASE64 SPAN} {RANK}
/// ```
///
/// # Arguments
/// * `path` - the path to the vocabulary file.
pub fn load_rank_lines_path<T, P>(path: P) -> crate::errors::Result<SpanTokenMap<T>>
where
    T: TokenType,
    P: AsRef<Path>,
{
    let reader = BufReader::new(File::open(path)?);
    read_rank_lines(reader)
}

/// Read a [`SpanTokenMap`] from a rank-line vocab reader.
///
/// Lines are:
/// ```terminaloutput
/// {BASE64 SPAN} {RANK}
/// ```
///
/// The parse is lenient per line: an entry with the wrong field count,
/// undecodable base64, or a non-integer rank is skipped, and the load
/// continues. Only an unreadable stream is an error.
///
/// # Arguments
/// * `reader` - the line reader.
pub fn read_rank_lines<T, R>(reader: R) -> crate::errors::Result<SpanTokenMap<T>>
where
    T: TokenType,
    R: BufRead,
{
    let mut span_map = SpanTokenMap::default();

    for (lineno, line) in reader.lines().enumerate() {
        let line = line?;

        let mut fields = line.split_whitespace();
        let (Some(span_field), Some(rank_field), None) =
            (fields.next(), fields.next(), fields.next())
        else {
            log::debug!("skipping rank line {lineno}: expected 2 fields");
            continue;
        };

        let Ok(span) = BASE64_STANDARD.decode(span_field) else {
            log::debug!("skipping rank line {lineno}: undecodable base64");
            continue;
        };

        let Some(rank) = rank_field.parse::<u64>().ok().and_then(T::from_u64) else {
            log::debug!("skipping rank line {lineno}: bad rank {rank_field:?}");
            continue;
        };

        span_map.insert(span, rank);
    }

    span_map.shrink_to_fit();

    Ok(span_map)
}
