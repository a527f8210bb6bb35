//! # `tokencount` Offline LLM Token Counting
//!
//! This library counts and encodes text into the integer token sequences used
//! by large-language-model APIs, entirely offline. No network access happens
//! during [`TokenEncoder::count`] or [`TokenEncoder::encode`]; vocabulary
//! payloads are fetched once (and cached) through a [`resources::ResourceLoader`].
//!
//! See:
//! * [`encoders`] to encode text into tokens.
//! * [`vocab`] to manage rank tables and vocab io.
//! * [`segmentation`] for the word-split / special-token segmentor.
//! * [`pretrained`] for the named, pretrained encoding configurations.
//!
//! ## Crate Features
//!
//! #### feature: ``download``
//!
//! Enables fetching vocabulary payloads from their canonical URLs through
//! [`disk_cache`]. On by default.
//!
//! ## Loading Pretrained Encodings
//!
//! ```rust,ignore
//! use tokencount::disk_cache::TokencountDiskCache;
//! use tokencount::encoders::TokenEncoder;
//! use tokencount::pretrained::get_encoding;
//!
//! let mut disk_cache = TokencountDiskCache::default();
//! let encoding = get_encoding("o200k_base", &mut disk_cache)?;
//! let encoder = encoding.into_default_encoder();
//!
//! assert_eq!(encoder.count("Hello, world!"), 4);
//! ```
#![warn(missing_docs, unused)]

#[cfg(feature = "download")]
#[doc(inline)]
pub use tokencount_disk_cache as disk_cache;

pub mod encoders;
pub mod encoding;
pub mod errors;
pub mod normalize;
pub mod pretrained;
pub mod resources;
pub mod segmentation;
pub mod types;
pub mod vocab;

#[doc(inline)]
pub use encoders::{DefaultTokenEncoder, TokenEncoder};
#[doc(inline)]
pub use encoding::Encoding;
#[doc(inline)]
pub use errors::{Result, TokencountError};
#[doc(inline)]
pub use types::TokenType;
