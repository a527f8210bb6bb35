//! # Text Segmentation
//!
//! Splits text into merge-eligible chunks with a word-split pattern,
//! short-circuited by special-token interception.

pub mod segmentation_config;
pub mod text_segmentor;

#[doc(inline)]
pub use segmentation_config::SegmentationConfig;
#[doc(inline)]
pub use text_segmentor::{SpanRef, TextSegmentor};
