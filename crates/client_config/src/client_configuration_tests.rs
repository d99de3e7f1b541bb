//! Tests for the root configuration.

use crate::client_configuration::ClientConfiguration;

#[test]
fn root_fields_are_unprefixed() {
    let configuration = ClientConfiguration::new();

    configuration.set_context_url("https://repo.example");
    configuration.set_timeout(300);

    let properties = configuration.all_properties();
    assert_eq!(
        properties.get("contextUrl").map(String::as_str),
        Some("https://repo.example")
    );
    assert_eq!(properties.get("timeout").map(String::as_str), Some("300"));

    assert_eq!(
        configuration.context_url().as_deref(),
        Some("https://repo.example")
    );
    assert_eq!(configuration.timeout().unwrap(), Some(300));
}

#[test]
fn fill_from_properties_overwrites_on_collision() {
    let configuration = ClientConfiguration::new();

    configuration.fill_from_properties([("resolve.repoKey", "first")]);
    configuration.fill_from_properties([("resolve.repoKey", "second")]);

    assert_eq!(configuration.resolver.repo_key().as_deref(), Some("second"));
    assert_eq!(configuration.all_properties().len(), 1);
}

#[test]
fn unknown_keys_are_ingested_and_kept() {
    let configuration = ClientConfiguration::new();

    configuration.fill_from_properties([("future.tooling.key", "kept")]);

    assert_eq!(
        configuration
            .all_properties()
            .get("future.tooling.key")
            .map(String::as_str),
        Some("kept")
    );
}

#[test]
fn every_view_shares_the_one_store() {
    let configuration = ClientConfiguration::new();

    configuration.resolver.set_repo_key("libs-release");
    configuration.publisher.set_repo_key("libs-release-local");
    configuration.info.set_build_name("nightly");
    configuration.info.license_control.set_run_checks(false);
    configuration.proxy.set_host("proxy.example.com");

    let properties = configuration.all_properties();
    assert_eq!(properties.len(), 5);
    assert!(properties.contains_key("resolve.repoKey"));
    assert!(properties.contains_key("publish.repoKey"));
    assert!(properties.contains_key("build.info.buildName"));
    assert!(properties.contains_key("build.info.licenseControl.runChecks"));
    assert!(properties.contains_key("proxy.host"));
}

#[test]
fn property_store_returns_the_live_handle() {
    let configuration = ClientConfiguration::new();
    let store = configuration.property_store();

    configuration.resolver.set_repo_key("libs-release");

    // Mutations made after the handle was taken are visible through it.
    assert_eq!(store.get("resolve.repoKey").as_deref(), Some("libs-release"));
}

#[test]
#[allow(deprecated)]
fn legacy_recorder_settings_remain_reachable() {
    let configuration = ClientConfiguration::new();

    configuration.fill_from_properties([("buildInfoConfig.exportFile", "build-info.json")]);

    assert_eq!(
        configuration.build_info_recorder.export_file().as_deref(),
        Some("build-info.json")
    );
}
