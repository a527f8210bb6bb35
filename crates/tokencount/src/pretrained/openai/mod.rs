//! # `OpenAI` Pretrained Encodings
//!
//! The rank-line vocabulary family. Payloads are the published
//! `*.tiktoken` tables; none of these encodings normalize input.

pub mod loaders;
pub mod patterns;
pub mod resources;
pub mod specials;

#[doc(inline)]
pub use loaders::{
    load_cl100k_base_vocab, load_o200k_base_vocab, load_p50k_base_vocab, load_r50k_base_vocab,
};
