//! Typed, prefix-scoped accessor over the shared property store.
//!
//! A `PrefixedProperties` binds an immutable prefix to a store handle and
//! translates between local (unprefixed) keys and full keys. Every
//! configuration view in this crate is built on top of it. A view only ever
//! touches keys under its own prefix; the documented exceptions (matrix
//! parameters, build variables, one legacy key) go through the exposed
//! [`store`](PrefixedProperties::store) handle explicitly.

use crate::errors::{ConfigurationError, ConfigurationResult};
use crate::property_store::PropertyStore;

/// Typed accessor for the keys under one fixed prefix of the shared store.
///
/// Setters accept `Option` values: passing `None` removes the key so that
/// subsequent reads correctly report absence (and computed defaults can
/// engage). A literal `"null"` token is never written.
///
/// # Examples
///
/// ```
/// use client_config::{PrefixedProperties, PropertyStore};
///
/// let store = PropertyStore::new();
/// let view = PrefixedProperties::new(store.clone(), "proxy.");
///
/// view.set_string("host", Some("proxy.example.com"));
/// assert_eq!(store.get("proxy.host").as_deref(), Some("proxy.example.com"));
///
/// view.set_string("host", None);
/// assert_eq!(store.get("proxy.host"), None);
/// ```
#[derive(Clone, Debug)]
pub struct PrefixedProperties {
    store: PropertyStore,
    prefix: String,
}

impl PrefixedProperties {
    /// Creates an accessor for `prefix` over the given store handle.
    pub fn new(store: PropertyStore, prefix: impl Into<String>) -> Self {
        Self {
            store,
            prefix: prefix.into(),
        }
    }

    /// The immutable prefix this accessor is bound to.
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// The shared store handle, for cross-prefix filtering (matrix
    /// parameters, build variables).
    pub fn store(&self) -> &PropertyStore {
        &self.store
    }

    /// Translates a local key into the full store key.
    pub fn full_key(&self, local_key: &str) -> String {
        format!("{}{}", self.prefix, local_key)
    }

    /// Returns the string value stored under `prefix + local_key`.
    pub fn get_string(&self, local_key: &str) -> Option<String> {
        self.store.get(&self.full_key(local_key))
    }

    /// Stores a string value under `prefix + local_key`; `None` removes the
    /// key.
    pub fn set_string(&self, local_key: &str, value: Option<&str>) {
        let key = self.full_key(local_key);
        match value {
            Some(value) => self.store.set(key, value),
            None => self.store.remove(&key),
        }
    }

    /// Parses the value under `prefix + local_key` as a base-10 integer.
    ///
    /// Absence is `Ok(None)`. A present but non-numeric value is a
    /// [`ConfigurationError::InvalidInteger`]; malformed numeric
    /// configuration is a caller mistake and is never mapped to a default.
    pub fn get_integer(&self, local_key: &str) -> ConfigurationResult<Option<i64>> {
        let key = self.full_key(local_key);
        match self.store.get(&key) {
            None => Ok(None),
            Some(raw) => raw
                .parse::<i64>()
                .map(Some)
                .map_err(|_| ConfigurationError::InvalidInteger { key, value: raw }),
        }
    }

    /// Stores the decimal representation of `value` under
    /// `prefix + local_key`; `None` removes the key.
    pub fn set_integer(&self, local_key: &str, value: Option<i64>) {
        let key = self.full_key(local_key);
        match value {
            Some(value) => self.store.set(key, value.to_string()),
            None => self.store.remove(&key),
        }
    }

    /// Parses the value under `prefix + local_key` as a boolean.
    ///
    /// Recognized tokens are `true` and `false` (trimmed, ASCII
    /// case-insensitive). Absence is `Ok(None)` and is distinct from
    /// `Ok(Some(false))`; any other present token is a
    /// [`ConfigurationError::InvalidBoolean`].
    pub fn get_boolean(&self, local_key: &str) -> ConfigurationResult<Option<bool>> {
        let key = self.full_key(local_key);
        match self.store.get(&key) {
            None => Ok(None),
            Some(raw) => {
                let token = raw.trim();
                if token.eq_ignore_ascii_case("true") {
                    Ok(Some(true))
                } else if token.eq_ignore_ascii_case("false") {
                    Ok(Some(false))
                } else {
                    Err(ConfigurationError::InvalidBoolean { key, value: raw })
                }
            }
        }
    }

    /// Stores `"true"`/`"false"` under `prefix + local_key`; `None` removes
    /// the key.
    pub fn set_boolean(&self, local_key: &str, value: Option<bool>) {
        let key = self.full_key(local_key);
        match value {
            Some(value) => self.store.set(key, value.to_string()),
            None => self.store.remove(&key),
        }
    }
}

#[cfg(test)]
#[path = "prefixed_properties_tests.rs"]
mod tests;
