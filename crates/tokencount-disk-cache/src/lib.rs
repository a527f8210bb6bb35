//! # tokencount-disk-cache
#![warn(missing_docs)]

use crate::path_resolver::PathResolver;

pub mod disk_cache;
pub mod path_resolver;
pub mod path_utils;

pub use disk_cache::{TokencountDiskCache, TokencountDiskCacheOptions};

/// Environment variable key to override the default cache directory.
pub const TOKENCOUNT_CACHE_DIR: &str = "TOKENCOUNT_CACHE_DIR";
/// Environment variable key to override the default data directory.
pub const TOKENCOUNT_DATA_DIR: &str = "TOKENCOUNT_DATA_DIR";

/// Default [`PathResolver`] for tokencount.
pub const TOKENCOUNT_CACHE_CONFIG: PathResolver = PathResolver {
    qualifier: "io.crates.tokencount",
    organization: "",
    application: "tokencount",
    cache_env_vars: &[TOKENCOUNT_CACHE_DIR],
    data_env_vars: &[TOKENCOUNT_DATA_DIR],
};
