//! Layered client configuration over one shared property store.
//!
//! A single flat `String → String` mapping backs the entire configuration.
//! Typed, prefix-scoped views each expose one facet of it — connection,
//! authentication, repository resolution, repository publishing, proxy,
//! build metadata and license-control policy — while every view reads and
//! writes the same store. A view is a prefix bound to the store plus typed
//! accessors for a fixed field set; the key naming convention (nested
//! prefixes + fixed local names) is part of the interop contract with
//! existing property files and must not change.
//!
//! Assembly is single-threaded by contract: configuration is gathered on
//! one thread and then consumed read-only. The store handle is neither
//! `Send` nor `Sync`, so this is enforced at compile time.
//!
//! # Examples
//!
//! ```
//! use client_config::ClientConfiguration;
//!
//! let configuration = ClientConfiguration::new();
//! configuration.fill_from_properties([
//!     ("resolve.repoKey", "libs-release"),
//!     ("resolve.maven", "true"),
//! ]);
//!
//! assert_eq!(configuration.resolver.repo_key().as_deref(), Some("libs-release"));
//! assert_eq!(configuration.resolver.maven().unwrap(), Some(true));
//!
//! configuration.info.add_build_variables([("BRANCH", "main")]);
//! assert_eq!(
//!     configuration.all_properties().get("build.info.env.BRANCH").map(String::as_str),
//!     Some("main"),
//! );
//! ```

pub mod auth;
pub mod build_info;
pub mod build_info_recorder;
pub mod client_configuration;
pub mod errors;
pub mod license_control;
pub mod prefixed_properties;
pub mod property_store;
pub mod proxy;
pub mod publisher;
pub mod repository;
pub mod resolver;


// Re-export for convenient access
pub use auth::AuthConfig;
pub use build_info::BuildInfoConfig;
#[allow(deprecated)]
pub use build_info_recorder::BuildInfoRecorderConfig;
pub use client_configuration::ClientConfiguration;
pub use errors::{ConfigurationError, ConfigurationResult};
pub use license_control::LicenseControlConfig;
pub use prefixed_properties::PrefixedProperties;
pub use property_store::PropertyStore;
pub use proxy::ProxyConfig;
pub use publisher::PublisherConfig;
pub use repository::{
    MatrixParamPolicy, RepositoryConfig, DEFAULT_IVY_LAYOUT_PATTERN, MAVEN_2_LAYOUT_PATTERN,
};
pub use resolver::ResolverConfig;
