//! Repository-publishing view.

use std::ops::Deref;

use crate::errors::ConfigurationResult;
use crate::property_store::PropertyStore;
use crate::repository::{MatrixParamPolicy, RepositoryConfig};

/// Prefix of every publishing setting in the shared store.
pub const PUBLISH_PREFIX: &str = "publish.";

/// Global namespace for deployment matrix parameters.
///
/// Deliberately not scoped under [`PUBLISH_PREFIX`]: these entries are
/// deployment metadata attached from the outside, and every producer writes
/// them under the same namespace regardless of the publishing settings.
pub const DEPLOY_MATRIX_PREFIX: &str = "deploy.";

const SNAPSHOT_REPO_KEY: &str = "snapshotRepoKey";
const PUBLISH_ARTIFACTS: &str = "publishArtifacts";
const PUBLISH_BUILD_INFO: &str = "publishBuildInfo";
const INCLUDE_PATTERNS: &str = "includePatterns";
const EXCLUDE_PATTERNS: &str = "excludePatterns";

/// Configuration of the repository artifacts are published to.
///
/// Matrix parameters are inserted under the global
/// [`DEPLOY_MATRIX_PREFIX`] and recognized by that prefix. Dereferences to
/// [`RepositoryConfig`].
#[derive(Debug)]
pub struct PublisherConfig {
    repository: RepositoryConfig,
}

impl PublisherConfig {
    /// Creates the publisher view over the given store handle.
    pub fn new(store: PropertyStore) -> Self {
        Self {
            repository: RepositoryConfig::new(
                store,
                PUBLISH_PREFIX,
                MatrixParamPolicy::prefixed(DEPLOY_MATRIX_PREFIX),
            ),
        }
    }

    pub fn set_snapshot_repo_key(&self, repo_key: &str) {
        self.repository.set_string(SNAPSHOT_REPO_KEY, Some(repo_key));
    }

    pub fn snapshot_repo_key(&self) -> Option<String> {
        self.repository.get_string(SNAPSHOT_REPO_KEY)
    }

    pub fn set_publish_artifacts(&self, enabled: bool) {
        self.repository.set_boolean(PUBLISH_ARTIFACTS, Some(enabled));
    }

    pub fn publish_artifacts(&self) -> ConfigurationResult<Option<bool>> {
        self.repository.get_boolean(PUBLISH_ARTIFACTS)
    }

    pub fn set_publish_build_info(&self, enabled: bool) {
        self.repository.set_boolean(PUBLISH_BUILD_INFO, Some(enabled));
    }

    pub fn publish_build_info(&self) -> ConfigurationResult<Option<bool>> {
        self.repository.get_boolean(PUBLISH_BUILD_INFO)
    }

    /// Pattern list of artifacts to include when publishing; the syntax is
    /// opaque at this layer.
    pub fn set_include_patterns(&self, patterns: &str) {
        self.repository.set_string(INCLUDE_PATTERNS, Some(patterns));
    }

    pub fn include_patterns(&self) -> Option<String> {
        self.repository.get_string(INCLUDE_PATTERNS)
    }

    /// Pattern list of artifacts to exclude when publishing; the syntax is
    /// opaque at this layer.
    pub fn set_exclude_patterns(&self, patterns: &str) {
        self.repository.set_string(EXCLUDE_PATTERNS, Some(patterns));
    }

    pub fn exclude_patterns(&self) -> Option<String> {
        self.repository.get_string(EXCLUDE_PATTERNS)
    }
}

impl Deref for PublisherConfig {
    type Target = RepositoryConfig;

    fn deref(&self) -> &Self::Target {
        &self.repository
    }
}

#[cfg(test)]
#[path = "publisher_tests.rs"]
mod tests;
