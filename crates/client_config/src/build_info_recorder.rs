//! Superseded build-info recorder settings.
//!
//! These settings configure the recorder component itself (where the input
//! property file lives, where the collected record is exported, whether
//! environment variables are captured). They belong at the root level of
//! the configuration but keep their historical `buildInfoConfig.` key names
//! so existing property files continue to resolve.

use std::ops::Deref;

use crate::errors::ConfigurationResult;
use crate::prefixed_properties::PrefixedProperties;
use crate::property_store::PropertyStore;

/// Legacy prefix of the recorder settings.
pub const BUILD_INFO_CONFIG_PREFIX: &str = "buildInfoConfig.";

const PROPERTIES_FILE: &str = "propertiesFile";
const EXPORT_FILE: &str = "exportFile";
const INCLUDE_ENV_VARS: &str = "includeEnvVars";

/// Recorder settings retained for property-file compatibility.
#[deprecated(
    note = "recorder settings belong at the root configuration level; retained so the historical buildInfoConfig. keys keep resolving"
)]
#[derive(Clone, Debug)]
pub struct BuildInfoRecorderConfig {
    props: PrefixedProperties,
}

#[allow(deprecated)]
impl BuildInfoRecorderConfig {
    /// Creates the legacy recorder view over the given store handle.
    pub fn new(store: PropertyStore) -> Self {
        Self {
            props: PrefixedProperties::new(store, BUILD_INFO_CONFIG_PREFIX),
        }
    }

    pub fn set_properties_file(&self, properties_file: &str) {
        self.props.set_string(PROPERTIES_FILE, Some(properties_file));
    }

    pub fn properties_file(&self) -> Option<String> {
        self.props.get_string(PROPERTIES_FILE)
    }

    pub fn set_export_file(&self, export_file: &str) {
        self.props.set_string(EXPORT_FILE, Some(export_file));
    }

    pub fn export_file(&self) -> Option<String> {
        self.props.get_string(EXPORT_FILE)
    }

    pub fn set_include_env_vars(&self, enabled: bool) {
        self.props.set_boolean(INCLUDE_ENV_VARS, Some(enabled));
    }

    pub fn include_env_vars(&self) -> ConfigurationResult<Option<bool>> {
        self.props.get_boolean(INCLUDE_ENV_VARS)
    }
}

#[allow(deprecated)]
impl Deref for BuildInfoRecorderConfig {
    type Target = PrefixedProperties;

    fn deref(&self) -> &Self::Target {
        &self.props
    }
}

#[cfg(test)]
#[path = "build_info_recorder_tests.rs"]
mod tests;
