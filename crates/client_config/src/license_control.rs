//! License-control policy view, nested under the build-info namespace.

use std::ops::Deref;

use crate::errors::ConfigurationResult;
use crate::prefixed_properties::PrefixedProperties;
use crate::property_store::PropertyStore;

/// Prefix of every license-control setting, one level below the build-info
/// namespace.
pub const LICENSE_CONTROL_PREFIX: &str = "build.info.licenseControl.";

const RUN_CHECKS: &str = "runChecks";
const VIOLATION_RECIPIENTS: &str = "violationRecipients";
const INCLUDE_PUBLISHED_ARTIFACTS: &str = "includePublishedArtifacts";
const SCOPES: &str = "scopes";
const AUTO_DISCOVER: &str = "autoDiscover";

/// License-check policy attached to the build metadata.
#[derive(Clone, Debug)]
pub struct LicenseControlConfig {
    props: PrefixedProperties,
}

impl LicenseControlConfig {
    /// Creates the license-control view over the given store handle.
    pub fn new(store: PropertyStore) -> Self {
        Self {
            props: PrefixedProperties::new(store, LICENSE_CONTROL_PREFIX),
        }
    }

    pub fn set_run_checks(&self, enabled: bool) {
        self.props.set_boolean(RUN_CHECKS, Some(enabled));
    }

    pub fn run_checks(&self) -> ConfigurationResult<Option<bool>> {
        self.props.get_boolean(RUN_CHECKS)
    }

    /// Recipients notified on license violations; a delimited list whose
    /// format is opaque at this layer.
    pub fn set_violation_recipients(&self, recipients: &str) {
        self.props.set_string(VIOLATION_RECIPIENTS, Some(recipients));
    }

    pub fn violation_recipients(&self) -> Option<String> {
        self.props.get_string(VIOLATION_RECIPIENTS)
    }

    pub fn set_include_published_artifacts(&self, enabled: bool) {
        self.props
            .set_boolean(INCLUDE_PUBLISHED_ARTIFACTS, Some(enabled));
    }

    pub fn include_published_artifacts(&self) -> ConfigurationResult<Option<bool>> {
        self.props.get_boolean(INCLUDE_PUBLISHED_ARTIFACTS)
    }

    pub fn set_scopes(&self, scopes: &str) {
        self.props.set_string(SCOPES, Some(scopes));
    }

    pub fn scopes(&self) -> Option<String> {
        self.props.get_string(SCOPES)
    }

    pub fn set_auto_discover(&self, enabled: bool) {
        self.props.set_boolean(AUTO_DISCOVER, Some(enabled));
    }

    pub fn auto_discover(&self) -> ConfigurationResult<Option<bool>> {
        self.props.get_boolean(AUTO_DISCOVER)
    }
}

impl Deref for LicenseControlConfig {
    type Target = PrefixedProperties;

    fn deref(&self) -> &Self::Target {
        &self.props
    }
}

#[cfg(test)]
#[path = "license_control_tests.rs"]
mod tests;
