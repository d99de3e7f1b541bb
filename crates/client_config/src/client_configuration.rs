//! Root of the client configuration: one store, every view.

use std::collections::BTreeMap;

use tracing::debug;

use crate::build_info::BuildInfoConfig;
#[allow(deprecated)]
use crate::build_info_recorder::BuildInfoRecorderConfig;
use crate::errors::ConfigurationResult;
use crate::prefixed_properties::PrefixedProperties;
use crate::property_store::PropertyStore;
use crate::proxy::ProxyConfig;
use crate::publisher::PublisherConfig;
use crate::resolver::ResolverConfig;

const CONTEXT_URL: &str = "contextUrl";
const TIMEOUT: &str = "timeout";

/// The complete client configuration.
///
/// Owns the shared [`PropertyStore`] and instantiates every view against
/// it: resolution, publishing, build metadata (which owns license control),
/// proxy, and the superseded recorder settings. All views mutate the same
/// store; assembly is single-threaded by contract.
///
/// # Examples
///
/// ```
/// use client_config::ClientConfiguration;
///
/// let configuration = ClientConfiguration::new();
/// configuration.fill_from_properties([
///     ("resolve.repoKey", "libs-release"),
///     ("publish.publishArtifacts", "true"),
/// ]);
///
/// assert_eq!(configuration.resolver.repo_key().as_deref(), Some("libs-release"));
/// assert_eq!(configuration.publisher.publish_artifacts().unwrap(), Some(true));
/// ```
#[derive(Debug)]
pub struct ClientConfiguration {
    root: PrefixedProperties,

    /// Repository-resolution settings (`resolve.`).
    pub resolver: ResolverConfig,

    /// Repository-publishing settings (`publish.`, matrix under `deploy.`).
    pub publisher: PublisherConfig,

    /// Build metadata (`build.info.`), owning the license-control child.
    pub info: BuildInfoConfig,

    /// Proxy server settings (`proxy.`).
    pub proxy: ProxyConfig,

    /// Superseded recorder settings (`buildInfoConfig.`), kept so existing
    /// property files continue to resolve.
    #[allow(deprecated)]
    pub build_info_recorder: BuildInfoRecorderConfig,
}

impl ClientConfiguration {
    /// Creates an empty configuration and all of its views over one fresh
    /// store.
    pub fn new() -> Self {
        let store = PropertyStore::new();
        #[allow(deprecated)]
        let build_info_recorder = BuildInfoRecorderConfig::new(store.clone());
        Self {
            root: PrefixedProperties::new(store.clone(), ""),
            resolver: ResolverConfig::new(store.clone()),
            publisher: PublisherConfig::new(store.clone()),
            info: BuildInfoConfig::new(store.clone()),
            proxy: ProxyConfig::new(store),
            build_info_recorder,
        }
    }

    /// Copies every pair into the shared store, overwriting existing keys.
    ///
    /// No key validation is performed: unknown keys are stored and simply
    /// never surfaced through a typed accessor, which keeps property files
    /// written by newer tooling ingestible.
    pub fn fill_from_properties<I, K, V>(&self, properties: I)
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let before = self.root.store().len();
        self.root.store().extend(properties);
        debug!(
            ingested = self.root.store().len() - before,
            total = self.root.store().len(),
            "filled configuration from properties"
        );
    }

    /// A snapshot of the full mapping gathered so far, including matrix
    /// parameters and build variables not modeled as named fields.
    pub fn all_properties(&self) -> BTreeMap<String, String> {
        self.root.store().snapshot()
    }

    /// The live shared store handle; later mutations through any view are
    /// visible to the holder.
    pub fn property_store(&self) -> PropertyStore {
        self.root.store().clone()
    }

    pub fn set_context_url(&self, context_url: &str) {
        self.root.set_string(CONTEXT_URL, Some(context_url));
    }

    pub fn context_url(&self) -> Option<String> {
        self.root.get_string(CONTEXT_URL)
    }

    pub fn set_timeout(&self, timeout: i64) {
        self.root.set_integer(TIMEOUT, Some(timeout));
    }

    pub fn timeout(&self) -> ConfigurationResult<Option<i64>> {
        self.root.get_integer(TIMEOUT)
    }
}

impl Default for ClientConfiguration {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "client_configuration_tests.rs"]
mod tests;
