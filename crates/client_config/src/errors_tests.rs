//! Tests for configuration accessor error types.

use crate::errors::ConfigurationError;

#[test]
fn invalid_integer_display_names_key_and_value() {
    let error = ConfigurationError::InvalidInteger {
        key: "proxy.port".to_string(),
        value: "eight".to_string(),
    };

    assert_eq!(
        error.to_string(),
        "Property 'proxy.port' has invalid integer value 'eight'"
    );
}

#[test]
fn invalid_boolean_display_names_expected_tokens() {
    let error = ConfigurationError::InvalidBoolean {
        key: "resolve.maven".to_string(),
        value: "yes".to_string(),
    };

    assert_eq!(
        error.to_string(),
        "Property 'resolve.maven' has invalid boolean value 'yes' (expected 'true' or 'false')"
    );
}

#[test]
fn errors_are_comparable_and_cloneable() {
    let error = ConfigurationError::InvalidInteger {
        key: "timeout".to_string(),
        value: "abc".to_string(),
    };

    assert_eq!(error.clone(), error);
}
