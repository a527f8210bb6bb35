//! # Vocabulary IO
//!
//! Parsers for the two supported vocabulary payload formats:
//!
//! * [`rank_lines`] - one `{base64 span} {decimal rank}` entry per line
//!   (the `tiktoken` table format).
//! * [`token_list`] - a single whitespace-separated list of base64 spans,
//!   where rank is the zero-based list position.

pub mod rank_lines;
pub mod token_list;

#[doc(inline)]
pub use rank_lines::{load_rank_lines_path, read_rank_lines};
#[doc(inline)]
pub use token_list::read_token_list;
