//! # Vocabulary Resources
//!
//! The core never performs network access: a [`ResourceLoader`] collaborator
//! resolves a keyed, URL-addressed resource to a local path, and the loaders
//! in [`crate::pretrained`] parse the file at that path.

use std::path::PathBuf;

/// A named, URL-addressed vocabulary payload.
pub struct ConstUrlResource {
    /// Mirror URLs for the payload.
    pub urls: &'static [&'static str],

    /// Optional sha256 content hash.
    pub hash: Option<&'static str>,
}

/// A trait for loading resources.
pub trait ResourceLoader {
    /// Resolve a resource to a local file path, fetching it if needed.
    ///
    /// ## Arguments
    /// * `context` - prefix keys identifying the resource family.
    /// * `resource` - the resource to resolve.
    ///
    /// ## Returns
    /// A `Result` containing the local path of the payload.
    fn load_resource_path(
        &mut self,
        context: &[&str],
        resource: &ConstUrlResource,
    ) -> crate::errors::Result<PathBuf>;
}

#[cfg(feature = "download")]
impl ResourceLoader for crate::disk_cache::TokencountDiskCache {
    fn load_resource_path(
        &mut self,
        context: &[&str],
        resource: &ConstUrlResource,
    ) -> crate::errors::Result<PathBuf> {
        self.load_cached_path(context, resource.urls, true)
            .map_err(|e| crate::errors::TokencountError::External(e.to_string()))
    }
}
