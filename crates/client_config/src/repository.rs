//! Shared field set and matrix-parameter mechanism for repository views.
//!
//! The resolver and publisher views differ only in their prefix and in how
//! matrix-parameter keys are recognized. Everything they have in common —
//! repository identity, packaging-format flags, layout patterns with their
//! fixed defaults, and the matrix-parameter operations — lives here. The
//! per-view matrix policy is an explicit value ([`MatrixParamPolicy`])
//! supplied at construction instead of a method override.

use std::collections::BTreeMap;
use std::fmt;
use std::ops::Deref;

use tracing::debug;

use crate::auth::AuthConfig;
use crate::errors::ConfigurationResult;
use crate::property_store::PropertyStore;

/// Standard Maven-2 layout pattern, the fallback for an unset or blank Ivy
/// artifact pattern.
pub const MAVEN_2_LAYOUT_PATTERN: &str =
    "[organisation]/[module]/[revision]/[artifact]-[revision](-[classifier]).[ext]";

/// Standard Ivy descriptor layout pattern, the fallback for an unset or
/// blank Ivy pattern.
pub const DEFAULT_IVY_LAYOUT_PATTERN: &str =
    "[organisation]/[module]/[revision]/[type]s/ivy-[revision].xml";

const NAME: &str = "name";
const URL: &str = "url";
const REPO_KEY: &str = "repoKey";
const MAVEN: &str = "maven";
const IVY: &str = "ivy";
const IVY_M2_COMPATIBLE: &str = "m2Compatible";
const IVY_ARTIFACT_PATTERN: &str = "ivyArtifactPattern";
const IVY_PATTERN: &str = "ivyPattern";

/// Per-view matrix-parameter policy: where new entries are inserted and
/// which keys of the whole store count as this view's matrix parameters.
///
/// Insertion uses `insert_prefix + name`; reading filters the *entire*
/// store with the predicate over full keys, so a view's matrix parameters
/// are reachable even when they do not live under the view's own field
/// prefix (the publisher's do not, by design).
pub struct MatrixParamPolicy {
    insert_prefix: String,
    filter: Box<dyn Fn(&str) -> bool>,
}

impl MatrixParamPolicy {
    /// Creates a policy from an insertion prefix and an arbitrary full-key
    /// predicate.
    pub fn new(insert_prefix: impl Into<String>, filter: impl Fn(&str) -> bool + 'static) -> Self {
        Self {
            insert_prefix: insert_prefix.into(),
            filter: Box::new(filter),
        }
    }

    /// Creates the common policy where a key is a matrix parameter exactly
    /// when it starts with the insertion prefix.
    pub fn prefixed(prefix: impl Into<String>) -> Self {
        let prefix = prefix.into();
        let filter_prefix = prefix.clone();
        Self::new(prefix, move |key: &str| key.starts_with(&filter_prefix))
    }

    /// The namespace under which new matrix entries are inserted.
    pub fn insert_prefix(&self) -> &str {
        &self.insert_prefix
    }

    /// Whether `full_key` is recognized as a matrix parameter of this view.
    pub fn matches(&self, full_key: &str) -> bool {
        (self.filter)(full_key)
    }
}

impl fmt::Debug for MatrixParamPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MatrixParamPolicy")
            .field("insert_prefix", &self.insert_prefix)
            .finish_non_exhaustive()
    }
}

/// Field set common to the resolver and publisher views: authentication,
/// repository identity, packaging-format flags, layout patterns and matrix
/// parameters.
///
/// Dereferences to [`AuthConfig`] (and through it to the raw typed
/// accessor).
#[derive(Debug)]
pub struct RepositoryConfig {
    auth: AuthConfig,
    matrix: MatrixParamPolicy,
}

impl RepositoryConfig {
    /// Creates the shared repository field set for `prefix` with the given
    /// matrix-parameter policy.
    pub fn new(store: PropertyStore, prefix: impl Into<String>, matrix: MatrixParamPolicy) -> Self {
        Self {
            auth: AuthConfig::new(store, prefix),
            matrix,
        }
    }

    pub fn set_name(&self, name: &str) {
        self.auth.set_string(NAME, Some(name));
    }

    pub fn name(&self) -> Option<String> {
        self.auth.get_string(NAME)
    }

    pub fn set_url(&self, url: &str) {
        self.auth.set_string(URL, Some(url));
    }

    pub fn url(&self) -> Option<String> {
        self.auth.get_string(URL)
    }

    pub fn set_repo_key(&self, repo_key: &str) {
        self.auth.set_string(REPO_KEY, Some(repo_key));
    }

    pub fn repo_key(&self) -> Option<String> {
        self.auth.get_string(REPO_KEY)
    }

    pub fn set_maven(&self, enabled: bool) {
        self.auth.set_boolean(MAVEN, Some(enabled));
    }

    /// Whether Maven packaging is enabled. `None` means unspecified; no
    /// default is assumed on the caller's behalf.
    pub fn maven(&self) -> ConfigurationResult<Option<bool>> {
        self.auth.get_boolean(MAVEN)
    }

    pub fn set_ivy(&self, enabled: bool) {
        self.auth.set_boolean(IVY, Some(enabled));
    }

    /// Whether Ivy packaging is enabled. `None` means unspecified.
    pub fn ivy(&self) -> ConfigurationResult<Option<bool>> {
        self.auth.get_boolean(IVY)
    }

    pub fn set_m2_compatible(&self, enabled: bool) {
        self.auth.set_boolean(IVY_M2_COMPATIBLE, Some(enabled));
    }

    pub fn m2_compatible(&self) -> ConfigurationResult<Option<bool>> {
        self.auth.get_boolean(IVY_M2_COMPATIBLE)
    }

    pub fn set_ivy_artifact_pattern(&self, pattern: &str) {
        self.auth.set_string(IVY_ARTIFACT_PATTERN, Some(pattern));
    }

    /// The Ivy artifact layout pattern, trimmed; falls back to
    /// [`MAVEN_2_LAYOUT_PATTERN`] when the key is absent or blank.
    pub fn ivy_artifact_pattern(&self) -> String {
        self.pattern_or_default(IVY_ARTIFACT_PATTERN, MAVEN_2_LAYOUT_PATTERN)
    }

    pub fn set_ivy_pattern(&self, pattern: &str) {
        self.auth.set_string(IVY_PATTERN, Some(pattern));
    }

    /// The Ivy descriptor layout pattern, trimmed; falls back to
    /// [`DEFAULT_IVY_LAYOUT_PATTERN`] when the key is absent or blank.
    pub fn ivy_pattern(&self) -> String {
        self.pattern_or_default(IVY_PATTERN, DEFAULT_IVY_LAYOUT_PATTERN)
    }

    fn pattern_or_default(&self, local_key: &str, default: &str) -> String {
        match self.auth.get_string(local_key) {
            Some(value) if !value.trim().is_empty() => value.trim().to_string(),
            _ => default.to_string(),
        }
    }

    /// The namespace under which [`add_matrix_param`](Self::add_matrix_param)
    /// inserts new entries.
    pub fn matrix_param_prefix(&self) -> &str {
        self.matrix.insert_prefix()
    }

    /// Stores one matrix parameter under the view's matrix namespace.
    pub fn add_matrix_param(&self, name: &str, value: &str) {
        let key = format!("{}{}", self.matrix.insert_prefix(), name);
        self.auth.store().set(key, value);
    }

    /// Bulk-inserts the entries of `pairs` whose key already satisfies this
    /// view's matrix filter; entries outside the namespace are dropped.
    ///
    /// The dropping is intentional: callers may pass a larger mapping and
    /// have only the relevant already-prefixed subset absorbed.
    pub fn add_matrix_params<I, K, V>(&self, pairs: I)
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut dropped = 0usize;
        for (key, value) in pairs {
            let key = key.into();
            if self.matrix.matches(&key) {
                self.auth.store().set(key, value.into());
            } else {
                dropped += 1;
            }
        }
        if dropped > 0 {
            debug!(
                dropped,
                namespace = self.matrix.insert_prefix(),
                "ignored matrix parameters outside the view's namespace"
            );
        }
    }

    /// All entries of the shared store recognized as this view's matrix
    /// parameters, keyed by full key.
    pub fn matrix_params(&self) -> BTreeMap<String, String> {
        self.auth.store().filter(|key| self.matrix.matches(key))
    }
}

impl Deref for RepositoryConfig {
    type Target = AuthConfig;

    fn deref(&self) -> &Self::Target {
        &self.auth
    }
}

#[cfg(test)]
#[path = "repository_tests.rs"]
mod tests;
