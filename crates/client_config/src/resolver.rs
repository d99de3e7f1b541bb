//! Repository-resolution view.

use std::ops::Deref;

use crate::property_store::PropertyStore;
use crate::repository::{MatrixParamPolicy, RepositoryConfig};

/// Prefix of every resolution setting in the shared store.
pub const RESOLVE_PREFIX: &str = "resolve.";

const MATRIX: &str = "matrix.";

// Root-level key written by older tooling, predating the `resolve.`
// namespace. Kept so existing property files keep resolving.
const LEGACY_DOWNLOAD_URL: &str = "downloadUrl";

/// Configuration of the repository artifacts are resolved from.
///
/// Matrix parameters are inserted under `resolve.matrix.` and recognized by
/// that same prefix. Dereferences to [`RepositoryConfig`].
///
/// # Examples
///
/// ```
/// use client_config::{PropertyStore, ResolverConfig};
///
/// let store = PropertyStore::new();
/// let resolver = ResolverConfig::new(store.clone());
///
/// resolver.set_repo_key("libs-release");
/// assert_eq!(store.get("resolve.repoKey").as_deref(), Some("libs-release"));
/// ```
#[derive(Debug)]
pub struct ResolverConfig {
    repository: RepositoryConfig,
}

impl ResolverConfig {
    /// Creates the resolver view over the given store handle.
    pub fn new(store: PropertyStore) -> Self {
        let matrix_prefix = format!("{RESOLVE_PREFIX}{MATRIX}");
        Self {
            repository: RepositoryConfig::new(
                store,
                RESOLVE_PREFIX,
                MatrixParamPolicy::prefixed(matrix_prefix),
            ),
        }
    }

    /// Legacy download URL, read from the unprefixed root key
    /// `downloadUrl`.
    ///
    /// This is the one accessor that deliberately breaks prefix isolation;
    /// the key name belongs to an older configuration convention and must
    /// not change.
    pub fn download_url(&self) -> Option<String> {
        self.repository.store().get(LEGACY_DOWNLOAD_URL)
    }
}

impl Deref for ResolverConfig {
    type Target = RepositoryConfig;

    fn deref(&self) -> &Self::Target {
        &self.repository
    }
}

#[cfg(test)]
#[path = "resolver_tests.rs"]
mod tests;
