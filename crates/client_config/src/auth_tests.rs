//! Tests for the shared authentication fields.

use crate::auth::AuthConfig;
use crate::property_store::PropertyStore;

#[test]
fn fields_land_under_the_configured_prefix() {
    let store = PropertyStore::new();
    let auth = AuthConfig::new(store.clone(), "proxy.");

    auth.set_enabled(true);
    auth.set_user_name("deployer");
    auth.set_password("secret");

    assert_eq!(store.get("proxy.enabled").as_deref(), Some("true"));
    assert_eq!(store.get("proxy.username").as_deref(), Some("deployer"));
    assert_eq!(store.get("proxy.password").as_deref(), Some("secret"));
}

#[test]
fn absent_fields_read_back_as_none() {
    let auth = AuthConfig::new(PropertyStore::new(), "proxy.");

    assert_eq!(auth.enabled().unwrap(), None);
    assert_eq!(auth.user_name(), None);
    assert_eq!(auth.password(), None);
}

#[test]
fn enabled_false_is_not_absence() {
    let auth = AuthConfig::new(PropertyStore::new(), "proxy.");
    auth.set_enabled(false);

    assert_eq!(auth.enabled().unwrap(), Some(false));
}

#[test]
fn derefs_to_raw_typed_access_on_the_same_prefix() {
    let store = PropertyStore::new();
    let auth = AuthConfig::new(store.clone(), "proxy.");

    auth.set_string("custom", Some("value"));
    assert_eq!(store.get("proxy.custom").as_deref(), Some("value"));
}
