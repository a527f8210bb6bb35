//! # `OpenAI` Word Patterns
//!
//! The reference word-split patterns. These rely on the negative lookahead
//! `\s+(?!\S)` for the trailing-whitespace rule, so they must be compiled
//! with `fancy-regex`.

/// The "`r50k_base`" / "`p50k_base`" pretrained vocabulary word pattern.
pub const R50K_BASE_PATTERN: &str = concat!(
    r"'(?:[sdmt]|ll|ve|re)",
    r"| ?\p{L}++",
    r"| ?\p{N}++",
    r"| ?[^\s\p{L}\p{N}]++",
    r"|\s++$",
    r"|\s+(?!\S)",
    r"|\s",
);

/// The "`cl100k_base`" pretrained vocabulary word pattern.
pub const CL100K_BASE_PATTERN: &str = concat!(
    r"'(?i:[sdmt]|ll|ve|re)",
    r"|[^\r\n\p{L}\p{N}]?+\p{L}++",
    r"|\p{N}{1,3}+",
    r"| ?[^\s\p{L}\p{N}]++[\r\n]*+",
    r"|\s++$",
    r"|\s*[\r\n]",
    r"|\s+(?!\S)",
    r"|\s",
);

/// The "`o200k_base`" pretrained vocabulary word pattern.
pub const O200K_BASE_PATTERN: &str = concat!(
    r"[^\r\n\p{L}\p{N}]?[\p{Lu}\p{Lt}\p{Lm}\p{Lo}\p{M}]*[\p{Ll}\p{Lm}\p{Lo}\p{M}]+(?i:'s|'t|'re|'ve|'m|'ll|'d)?",
    r"|[^\r\n\p{L}\p{N}]?[\p{Lu}\p{Lt}\p{Lm}\p{Lo}\p{M}]+[\p{Ll}\p{Lm}\p{Lo}\p{M}]*(?i:'s|'t|'re|'ve|'m|'ll|'d)?",
    r"|\p{N}{1,3}",
    r"| ?[^\s\p{L}\p{N}]+[\r\n/]*",
    r"|\s*[\r\n]+",
    r"|\s+(?!\S)",
    r"|\s+",
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_patterns_compile() {
        assert!(fancy_regex::Regex::new(R50K_BASE_PATTERN).is_ok());
        assert!(fancy_regex::Regex::new(CL100K_BASE_PATTERN).is_ok());
        assert!(fancy_regex::Regex::new(O200K_BASE_PATTERN).is_ok());
    }
}
