//! Authentication fields shared by several configuration views.

use std::ops::Deref;

use crate::errors::ConfigurationResult;
use crate::prefixed_properties::PrefixedProperties;
use crate::property_store::PropertyStore;

const ENABLED: &str = "enabled";
const USERNAME: &str = "username";
const PASSWORD: &str = "password";

/// Authentication sub-schema over a prefix: enabled flag, user name and
/// password.
///
/// Used directly by the proxy view and composed into the repository views.
/// Dereferences to [`PrefixedProperties`] for raw typed access to the same
/// prefix.
#[derive(Clone, Debug)]
pub struct AuthConfig {
    props: PrefixedProperties,
}

impl AuthConfig {
    /// Creates the authentication fields accessor for `prefix`.
    pub fn new(store: PropertyStore, prefix: impl Into<String>) -> Self {
        Self {
            props: PrefixedProperties::new(store, prefix),
        }
    }

    pub fn set_enabled(&self, enabled: bool) {
        self.props.set_boolean(ENABLED, Some(enabled));
    }

    pub fn enabled(&self) -> ConfigurationResult<Option<bool>> {
        self.props.get_boolean(ENABLED)
    }

    pub fn set_user_name(&self, user_name: &str) {
        self.props.set_string(USERNAME, Some(user_name));
    }

    pub fn user_name(&self) -> Option<String> {
        self.props.get_string(USERNAME)
    }

    pub fn set_password(&self, password: &str) {
        self.props.set_string(PASSWORD, Some(password));
    }

    pub fn password(&self) -> Option<String> {
        self.props.get_string(PASSWORD)
    }
}

impl Deref for AuthConfig {
    type Target = PrefixedProperties;

    fn deref(&self) -> &Self::Target {
        &self.props
    }
}

#[cfg(test)]
#[path = "auth_tests.rs"]
mod tests;
