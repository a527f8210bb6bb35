//! # Token Encoders
//!
//! ## Example
//!
//! ```rust,no_run
//! use std::sync::Arc;
//!
//! use tokencount::{Encoding, TokenEncoder, TokenType};
//!
//! fn example<T: TokenType>(
//!     encoding: Arc<Encoding<T>>,
//!     text: &str,
//! ) -> usize {
//!     encoding.into_default_encoder().count(text)
//! }
//! ```

pub mod merge_scan_encoder;
pub mod priority_merge_encoder;
pub mod span_encoder;
#[cfg(test)]
pub(crate) mod testing;
mod token_encoder;

#[doc(inline)]
pub use merge_scan_encoder::MergeScanSpanEncoder;
#[doc(inline)]
pub use priority_merge_encoder::PriorityMergeSpanEncoder;
#[doc(inline)]
pub use span_encoder::SpanEncoder;
#[doc(inline)]
pub use token_encoder::*;
