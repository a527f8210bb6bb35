//! # `OpenAI` Pretrained Vocabulary Loaders

use crate::encoding::Encoding;
use crate::errors::TokencountError;
use crate::pretrained::openai::patterns::{
    CL100K_BASE_PATTERN, O200K_BASE_PATTERN, R50K_BASE_PATTERN,
};
use crate::pretrained::openai::resources::{
    CL100K_BASE_TIKTOKEN_RESOURCE, O200K_BASE_TIKTOKEN_RESOURCE, P50K_BASE_TIKTOKEN_RESOURCE,
    R50K_BASE_TIKTOKEN_RESOURCE,
};
use crate::pretrained::openai::specials::{
    CL100K_BASE_SPECIALS, O200K_BASE_SPECIALS, P50K_BASE_SPECIALS, R50K_BASE_SPECIALS,
};
use crate::resources::{ConstUrlResource, ResourceLoader};
use crate::segmentation::SegmentationConfig;
use crate::types::TokenType;
use crate::vocab::RankVocab;
use crate::vocab::io::load_rank_lines_path;

/// Shared resource context key.
const OA_KEY: &str = "openai";

fn load_common_vocab<T: TokenType>(
    loader: &mut dyn ResourceLoader,
    context: &[&str],
    vocab_resource: &ConstUrlResource,
    pattern: &str,
    special_tokens: &[(&str, usize)],
) -> crate::errors::Result<Encoding<T>> {
    let span_map = load_rank_lines_path(loader.load_resource_path(context, vocab_resource)?)?;

    let mut specials = Vec::with_capacity(special_tokens.len());
    for &(word, token) in special_tokens {
        let token = T::from_usize(token).ok_or(TokencountError::TokenOutOfRange)?;
        specials.push((word, token));
    }

    let config = SegmentationConfig::<T>::from_pattern(pattern).with_special_words(specials);

    Encoding::from_config(config, RankVocab::from_span_map(span_map))
}

/// Load the GPT-2 "`r50k_base`" pretrained encoding.
pub fn load_r50k_base_vocab<T: TokenType>(
    loader: &mut dyn ResourceLoader
) -> crate::errors::Result<Encoding<T>> {
    load_common_vocab(
        loader,
        &[OA_KEY, "r50k"],
        &R50K_BASE_TIKTOKEN_RESOURCE,
        R50K_BASE_PATTERN,
        R50K_BASE_SPECIALS,
    )
}

/// Load the "`p50k_base`" pretrained encoding.
pub fn load_p50k_base_vocab<T: TokenType>(
    loader: &mut dyn ResourceLoader
) -> crate::errors::Result<Encoding<T>> {
    load_common_vocab(
        loader,
        &[OA_KEY, "p50k"],
        &P50K_BASE_TIKTOKEN_RESOURCE,
        R50K_BASE_PATTERN,
        P50K_BASE_SPECIALS,
    )
}

/// Load the "`cl100k_base`" pretrained encoding.
pub fn load_cl100k_base_vocab<T: TokenType>(
    loader: &mut dyn ResourceLoader
) -> crate::errors::Result<Encoding<T>> {
    load_common_vocab(
        loader,
        &[OA_KEY, "cl100k"],
        &CL100K_BASE_TIKTOKEN_RESOURCE,
        CL100K_BASE_PATTERN,
        CL100K_BASE_SPECIALS,
    )
}

/// Load the "`o200k_base`" pretrained encoding.
pub fn load_o200k_base_vocab<T: TokenType>(
    loader: &mut dyn ResourceLoader
) -> crate::errors::Result<Encoding<T>> {
    load_common_vocab(
        loader,
        &[OA_KEY, "o200k"],
        &O200K_BASE_TIKTOKEN_RESOURCE,
        O200K_BASE_PATTERN,
        O200K_BASE_SPECIALS,
    )
}
