//! # `OpenAI` Special Tokens

/// The "`r50k_base`" special tokens.
pub const R50K_BASE_SPECIALS: &[(&str, usize)] = &[("<|endoftext|>", 50256)];

/// The "`p50k_base`" special tokens.
pub const P50K_BASE_SPECIALS: &[(&str, usize)] = &[("<|endoftext|>", 50256)];

/// The "`cl100k_base`" special tokens.
pub const CL100K_BASE_SPECIALS: &[(&str, usize)] = &[
    ("<|endoftext|>", 100257),
    ("<|fim_prefix|>", 100258),
    ("<|fim_middle|>", 100259),
    ("<|fim_suffix|>", 100260),
    ("<|endofprompt|>", 100276),
];

/// The "`o200k_base`" special tokens.
pub const O200K_BASE_SPECIALS: &[(&str, usize)] =
    &[("<|endoftext|>", 199999), ("<|endofprompt|>", 200018)];
