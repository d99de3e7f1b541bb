//! Tests for the legacy recorder settings.

#![allow(deprecated)]

use crate::build_info_recorder::BuildInfoRecorderConfig;
use crate::property_store::PropertyStore;

#[test]
fn fields_keep_their_historical_key_names() {
    let store = PropertyStore::new();
    let recorder = BuildInfoRecorderConfig::new(store.clone());

    recorder.set_properties_file("buildinfo.properties");
    recorder.set_export_file("build-info.json");
    recorder.set_include_env_vars(true);

    assert_eq!(
        store.get("buildInfoConfig.propertiesFile").as_deref(),
        Some("buildinfo.properties")
    );
    assert_eq!(
        store.get("buildInfoConfig.exportFile").as_deref(),
        Some("build-info.json")
    );
    assert_eq!(
        store.get("buildInfoConfig.includeEnvVars").as_deref(),
        Some("true")
    );
}

#[test]
fn absent_fields_read_back_as_none() {
    let recorder = BuildInfoRecorderConfig::new(PropertyStore::new());

    assert_eq!(recorder.properties_file(), None);
    assert_eq!(recorder.export_file(), None);
    assert_eq!(recorder.include_env_vars().unwrap(), None);
}
