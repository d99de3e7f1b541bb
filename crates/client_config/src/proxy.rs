//! Proxy server view.

use std::ops::Deref;

use crate::auth::AuthConfig;
use crate::errors::ConfigurationResult;
use crate::property_store::PropertyStore;

/// Prefix of every proxy setting in the shared store.
pub const PROXY_PREFIX: &str = "proxy.";

const HOST: &str = "host";
const PORT: &str = "port";

/// Proxy server settings: host, port and the shared authentication fields.
///
/// Dereferences to [`AuthConfig`].
#[derive(Clone, Debug)]
pub struct ProxyConfig {
    auth: AuthConfig,
}

impl ProxyConfig {
    /// Creates the proxy view over the given store handle.
    pub fn new(store: PropertyStore) -> Self {
        Self {
            auth: AuthConfig::new(store, PROXY_PREFIX),
        }
    }

    pub fn set_host(&self, host: &str) {
        self.auth.set_string(HOST, Some(host));
    }

    pub fn host(&self) -> Option<String> {
        self.auth.get_string(HOST)
    }

    pub fn set_port(&self, port: i64) {
        self.auth.set_integer(PORT, Some(port));
    }

    pub fn port(&self) -> ConfigurationResult<Option<i64>> {
        self.auth.get_integer(PORT)
    }
}

impl Deref for ProxyConfig {
    type Target = AuthConfig;

    fn deref(&self) -> &Self::Target {
        &self.auth
    }
}

#[cfg(test)]
#[path = "proxy_tests.rs"]
mod tests;
