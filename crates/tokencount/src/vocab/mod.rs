//! # Vocabulary
//!
//! This module provides the rank-table vocabulary and related io mechanisms.
//!
//! ## Rank Vocabulary
//!
//! The merge vocabulary is [`RankVocab`], an immutable
//! ``{ Vec<u8> -> T }`` table where lower ranks merge earlier.
//!
//! ## Special Vocabulary
//!
//! Special words live in a parallel [`SpecialVocab`] table; they bypass
//! pair-merging entirely and are intercepted during segmentation.

pub mod io;

pub mod rank_vocab;
pub mod special_vocab;
pub mod vocab_types;

#[doc(inline)]
pub use rank_vocab::RankVocab;
#[doc(inline)]
pub use special_vocab::SpecialVocab;
#[doc(inline)]
pub use vocab_types::SpanTokenMap;
