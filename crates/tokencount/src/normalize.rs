//! # Unicode Normalization
//!
//! The Claude family applies NFKC to the whole input before segmentation;
//! every other family passes text through unchanged.

use std::borrow::Cow;

use unicode_normalization::{IsNormalized, UnicodeNormalization, is_nfkc_quick};

/// Input normalization mode for an [`crate::Encoding`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Normalization {
    /// Pass text through unchanged.
    #[default]
    None,

    /// Unicode NFKC (compatibility decomposition, canonical composition).
    Nfkc,
}

/// Apply the given normalization mode to `text`.
///
/// Already-normalized text is returned borrowed; normalization is idempotent.
///
/// ## Arguments
/// * `mode` - The normalization mode.
/// * `text` - The text to normalize.
///
/// ## Returns
/// The (possibly borrowed) normalized text.
pub fn normalize(
    mode: Normalization,
    text: &str,
) -> Cow<'_, str> {
    match mode {
        Normalization::None => Cow::Borrowed(text),
        Normalization::Nfkc => match is_nfkc_quick(text.chars()) {
            IsNormalized::Yes => Cow::Borrowed(text),
            _ => Cow::Owned(text.nfkc().collect()),
        },
    }
}
