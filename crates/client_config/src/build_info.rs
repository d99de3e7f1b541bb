//! Build-metadata view.
//!
//! Holds the fixed build-record fields (name, number, timestamps, agent,
//! parent build, retention) plus free-form build variables stored under the
//! `env.` sub-namespace. Owns the license-control child view, which is
//! constructed against the same store with a prefix nested one level
//! deeper.

use std::collections::BTreeMap;
use std::ops::Deref;

use crate::errors::ConfigurationResult;
use crate::license_control::LicenseControlConfig;
use crate::prefixed_properties::PrefixedProperties;
use crate::property_store::PropertyStore;

/// Prefix of every build-metadata setting in the shared store.
pub const BUILD_INFO_PREFIX: &str = "build.info.";

/// Sub-namespace (relative to [`BUILD_INFO_PREFIX`]) holding build
/// variables.
pub const ENVIRONMENT_PREFIX: &str = "env.";

const BUILD_NAME: &str = "buildName";
const BUILD_NUMBER: &str = "buildNumber";
const BUILD_TIMESTAMP: &str = "buildTimestamp";
const BUILD_STARTED: &str = "buildStarted";
const PRINCIPAL: &str = "principal";
const BUILD_URL: &str = "buildUrl";
const VCS_REVISION: &str = "vcsRevision";
const BUILD_AGENT_NAME: &str = "buildAgentName";
const BUILD_AGENT_VERSION: &str = "buildAgentVersion";
const BUILD_PARENT_NAME: &str = "parentBuildName";
const BUILD_PARENT_NUMBER: &str = "parentBuildNumber";
const BUILD_RETENTION_DAYS: &str = "buildRetentionDays";
const BUILD_RETENTION_MINIMUM_DATE: &str = "buildRetentionMinimumDate";

/// Build metadata gathered for the eventual build record.
///
/// Build variables are arbitrary caller-supplied pairs kept apart from the
/// fixed fields under `build.info.env.`; they represent the
/// environment/variable context of the build.
#[derive(Clone, Debug)]
pub struct BuildInfoConfig {
    props: PrefixedProperties,

    /// License-control policy, nested one namespace level deeper on the
    /// same store.
    pub license_control: LicenseControlConfig,
}

impl BuildInfoConfig {
    /// Creates the build-info view (and its license-control child) over the
    /// given store handle.
    pub fn new(store: PropertyStore) -> Self {
        Self {
            props: PrefixedProperties::new(store.clone(), BUILD_INFO_PREFIX),
            license_control: LicenseControlConfig::new(store),
        }
    }

    pub fn set_build_name(&self, build_name: &str) {
        self.props.set_string(BUILD_NAME, Some(build_name));
    }

    pub fn build_name(&self) -> Option<String> {
        self.props.get_string(BUILD_NAME)
    }

    pub fn set_build_number(&self, build_number: &str) {
        self.props.set_string(BUILD_NUMBER, Some(build_number));
    }

    pub fn build_number(&self) -> Option<String> {
        self.props.get_string(BUILD_NUMBER)
    }

    pub fn set_build_timestamp(&self, timestamp: &str) {
        self.props.set_string(BUILD_TIMESTAMP, Some(timestamp));
    }

    pub fn build_timestamp(&self) -> Option<String> {
        self.props.get_string(BUILD_TIMESTAMP)
    }

    pub fn set_build_started(&self, timestamp: &str) {
        self.props.set_string(BUILD_STARTED, Some(timestamp));
    }

    pub fn build_started(&self) -> Option<String> {
        self.props.get_string(BUILD_STARTED)
    }

    pub fn set_principal(&self, principal: &str) {
        self.props.set_string(PRINCIPAL, Some(principal));
    }

    pub fn principal(&self) -> Option<String> {
        self.props.get_string(PRINCIPAL)
    }

    pub fn set_build_url(&self, build_url: &str) {
        self.props.set_string(BUILD_URL, Some(build_url));
    }

    pub fn build_url(&self) -> Option<String> {
        self.props.get_string(BUILD_URL)
    }

    pub fn set_vcs_revision(&self, vcs_revision: &str) {
        self.props.set_string(VCS_REVISION, Some(vcs_revision));
    }

    pub fn vcs_revision(&self) -> Option<String> {
        self.props.get_string(VCS_REVISION)
    }

    pub fn set_build_agent_name(&self, agent_name: &str) {
        self.props.set_string(BUILD_AGENT_NAME, Some(agent_name));
    }

    pub fn build_agent_name(&self) -> Option<String> {
        self.props.get_string(BUILD_AGENT_NAME)
    }

    pub fn set_build_agent_version(&self, agent_version: &str) {
        self.props.set_string(BUILD_AGENT_VERSION, Some(agent_version));
    }

    pub fn build_agent_version(&self) -> Option<String> {
        self.props.get_string(BUILD_AGENT_VERSION)
    }

    pub fn set_parent_build_name(&self, parent_build_name: &str) {
        self.props.set_string(BUILD_PARENT_NAME, Some(parent_build_name));
    }

    pub fn parent_build_name(&self) -> Option<String> {
        self.props.get_string(BUILD_PARENT_NAME)
    }

    pub fn set_parent_build_number(&self, parent_build_number: &str) {
        self.props
            .set_string(BUILD_PARENT_NUMBER, Some(parent_build_number));
    }

    pub fn parent_build_number(&self) -> Option<String> {
        self.props.get_string(BUILD_PARENT_NUMBER)
    }

    pub fn set_build_retention_days(&self, days_to_keep: Option<i64>) {
        self.props.set_integer(BUILD_RETENTION_DAYS, days_to_keep);
    }

    pub fn build_retention_days(&self) -> ConfigurationResult<Option<i64>> {
        self.props.get_integer(BUILD_RETENTION_DAYS)
    }

    pub fn set_build_retention_minimum_date(&self, date: &str) {
        self.props
            .set_string(BUILD_RETENTION_MINIMUM_DATE, Some(date));
    }

    pub fn build_retention_minimum_date(&self) -> Option<String> {
        self.props.get_string(BUILD_RETENTION_MINIMUM_DATE)
    }

    /// Stores each pair under `build.info.env. + key`.
    ///
    /// # Examples
    ///
    /// ```
    /// use client_config::{BuildInfoConfig, PropertyStore};
    ///
    /// let store = PropertyStore::new();
    /// let info = BuildInfoConfig::new(store.clone());
    ///
    /// info.add_build_variables([("BRANCH", "main")]);
    /// assert_eq!(store.get("build.info.env.BRANCH").as_deref(), Some("main"));
    /// ```
    pub fn add_build_variables<I, K, V>(&self, build_variables: I)
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        for (key, value) in build_variables {
            let local_key = format!("{ENVIRONMENT_PREFIX}{}", key.as_ref());
            self.props.set_string(&local_key, Some(&value.into()));
        }
    }

    /// All build variables currently in the store, keyed by full key.
    pub fn build_variables(&self) -> BTreeMap<String, String> {
        let namespace = format!("{BUILD_INFO_PREFIX}{ENVIRONMENT_PREFIX}");
        self.props
            .store()
            .filter(|key| key.starts_with(&namespace))
    }
}

impl Deref for BuildInfoConfig {
    type Target = PrefixedProperties;

    fn deref(&self) -> &Self::Target {
        &self.props
    }
}

#[cfg(test)]
#[path = "build_info_tests.rs"]
mod tests;
