//! # Pretrained Encodings
//!
//! Named, pretrained encoding configurations:
//!
//! * [`openai`] - the rank-line (`tiktoken`) family: `o200k_base`,
//!   `cl100k_base`, `p50k_base`, `r50k_base`.
//! * [`anthropic`] - the ordered-list family: `claude`, with NFKC
//!   normalization.
//!
//! [`get_encoding`] resolves a name to a shared [`crate::Encoding`].

pub mod anthropic;
pub mod load_by_name;
pub mod openai;

#[doc(inline)]
pub use load_by_name::{get_encoding, list_encodings};
