//! Tests for the resolver view.

use crate::property_store::PropertyStore;
use crate::resolver::ResolverConfig;

#[test]
fn fields_live_under_the_resolve_namespace() {
    let store = PropertyStore::new();
    let resolver = ResolverConfig::new(store.clone());

    resolver.set_repo_key("libs-release");
    resolver.set_maven(true);

    assert_eq!(store.get("resolve.repoKey").as_deref(), Some("libs-release"));
    assert_eq!(store.get("resolve.maven").as_deref(), Some("true"));
}

#[test]
fn matrix_params_are_inserted_under_resolve_matrix() {
    let store = PropertyStore::new();
    let resolver = ResolverConfig::new(store.clone());

    assert_eq!(resolver.matrix_param_prefix(), "resolve.matrix.");

    resolver.add_matrix_param("a", "1");
    assert_eq!(store.get("resolve.matrix.a").as_deref(), Some("1"));
}

#[test]
fn bulk_add_drops_entries_outside_resolve_matrix() {
    let store = PropertyStore::new();
    let resolver = ResolverConfig::new(store.clone());

    resolver.add_matrix_params([
        ("resolve.matrix.x", "1"),
        ("unrelated.key", "2"),
    ]);

    assert_eq!(store.get("resolve.matrix.x").as_deref(), Some("1"));
    assert!(!store.contains_key("unrelated.key"));
    assert_eq!(store.len(), 1);
}

#[test]
fn download_url_reads_the_legacy_root_key() {
    let store = PropertyStore::new();
    let resolver = ResolverConfig::new(store.clone());

    assert_eq!(resolver.download_url(), None);

    store.set("downloadUrl", "https://repo.example/libs-release");
    assert_eq!(
        resolver.download_url().as_deref(),
        Some("https://repo.example/libs-release")
    );
}
