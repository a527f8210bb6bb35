//! # Encoding Name Resolution

use std::sync::Arc;

use crate::encoding::Encoding;
use crate::errors::TokencountError;
use crate::pretrained::anthropic::load_claude_vocab;
use crate::pretrained::openai::{
    load_cl100k_base_vocab, load_o200k_base_vocab, load_p50k_base_vocab, load_r50k_base_vocab,
};
use crate::resources::ResourceLoader;

/// A hook that can be used to load a pretrained encoding.
pub struct ConstPretrainedHook {
    /// The aliases for the pretrained encoding.
    pub aliases: &'static [&'static str],

    /// A function that loads the pretrained encoding.
    pub load: fn(&mut dyn ResourceLoader) -> crate::errors::Result<Encoding<u32>>,
}

const PRETRAINED_HOOKS: &[ConstPretrainedHook] = &[
    ConstPretrainedHook {
        aliases: &["o200k_base", "openai/o200k_base"],
        load: load_o200k_base_vocab::<u32>,
    },
    ConstPretrainedHook {
        aliases: &["cl100k_base", "openai/cl100k_base"],
        load: load_cl100k_base_vocab::<u32>,
    },
    ConstPretrainedHook {
        aliases: &["p50k_base", "openai/p50k_base"],
        load: load_p50k_base_vocab::<u32>,
    },
    ConstPretrainedHook {
        aliases: &["r50k_base", "openai/r50k_base"],
        load: load_r50k_base_vocab::<u32>,
    },
    ConstPretrainedHook {
        aliases: &["claude", "anthropic", "anthropic/claude"],
        load: load_claude_vocab::<u32>,
    },
];

/// Load a pretrained encoding by name.
///
/// ## Arguments
/// * `name` - The encoding name or alias.
/// * `loader` - The resource loader supplying vocabulary payloads.
///
/// ## Returns
/// A `Result` containing the shared encoding. An unrecognized name is an
/// explicit [`TokencountError::UnknownEncoding`]; there is no fallback.
pub fn get_encoding(
    name: &str,
    loader: &mut dyn ResourceLoader,
) -> crate::errors::Result<Arc<Encoding<u32>>> {
    for hook in PRETRAINED_HOOKS {
        if hook.aliases.contains(&name) {
            return Ok(Arc::new((hook.load)(loader)?));
        }
    }

    Err(TokencountError::UnknownEncoding(name.to_string()))
}

/// List the available pretrained encodings.
///
/// ## Arguments
/// * `aliases` - Whether to include all aliases or just the primary names.
pub fn list_encodings(aliases: bool) -> Vec<String> {
    let mut encodings = Vec::new();
    for hook in PRETRAINED_HOOKS {
        if aliases {
            encodings.extend(hook.aliases.iter().map(|a| a.to_string()));
        } else {
            encodings.push(hook.aliases[0].to_string());
        }
    }
    encodings
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;
    use crate::resources::ConstUrlResource;

    /// A loader that refuses every resource; name resolution must fail
    /// before any load is attempted.
    struct NullLoader;

    impl ResourceLoader for NullLoader {
        fn load_resource_path(
            &mut self,
            _context: &[&str],
            _resource: &ConstUrlResource,
        ) -> crate::errors::Result<PathBuf> {
            Err(TokencountError::External("no resources".into()))
        }
    }

    #[test]
    fn test_unknown_name() {
        assert!(matches!(
            get_encoding("bogus_base", &mut NullLoader),
            Err(TokencountError::UnknownEncoding(_))
        ));
    }

    #[test]
    fn test_known_names_reach_the_loader() {
        for name in ["o200k_base", "cl100k_base", "claude", "anthropic"] {
            assert!(matches!(
                get_encoding(name, &mut NullLoader),
                Err(TokencountError::External(_))
            ));
        }
    }

    #[test]
    fn test_list_encodings() {
        let primary = list_encodings(false);
        assert_eq!(
            primary,
            vec!["o200k_base", "cl100k_base", "p50k_base", "r50k_base", "claude"]
        );

        let all = list_encodings(true);
        assert!(all.contains(&"openai/o200k_base".to_string()));
        assert!(all.contains(&"anthropic/claude".to_string()));
    }
}
