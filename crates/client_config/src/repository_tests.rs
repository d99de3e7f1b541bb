//! Tests for the shared repository field set and matrix parameters.

use crate::property_store::PropertyStore;
use crate::repository::{
    MatrixParamPolicy, RepositoryConfig, DEFAULT_IVY_LAYOUT_PATTERN, MAVEN_2_LAYOUT_PATTERN,
};

fn repository(store: &PropertyStore) -> RepositoryConfig {
    RepositoryConfig::new(
        store.clone(),
        "repo.",
        MatrixParamPolicy::prefixed("repo.matrix."),
    )
}

mod identity_fields {
    use super::*;

    #[test]
    fn fields_land_under_the_repository_prefix() {
        let store = PropertyStore::new();
        let repo = repository(&store);

        repo.set_name("main");
        repo.set_url("https://repo.example/libs");
        repo.set_repo_key("libs-release");

        assert_eq!(store.get("repo.name").as_deref(), Some("main"));
        assert_eq!(store.get("repo.url").as_deref(), Some("https://repo.example/libs"));
        assert_eq!(store.get("repo.repoKey").as_deref(), Some("libs-release"));
    }

    #[test]
    fn authentication_fields_are_inherited() {
        let store = PropertyStore::new();
        let repo = repository(&store);

        repo.set_user_name("deployer");
        assert_eq!(store.get("repo.username").as_deref(), Some("deployer"));
    }
}

mod packaging_flags {
    use super::*;

    #[test]
    fn unspecified_flags_read_back_as_none() {
        let repo = repository(&PropertyStore::new());

        assert_eq!(repo.maven().unwrap(), None);
        assert_eq!(repo.ivy().unwrap(), None);
        assert_eq!(repo.m2_compatible().unwrap(), None);
    }

    #[test]
    fn flags_round_trip() {
        let repo = repository(&PropertyStore::new());

        repo.set_maven(true);
        repo.set_ivy(false);
        repo.set_m2_compatible(true);

        assert_eq!(repo.maven().unwrap(), Some(true));
        assert_eq!(repo.ivy().unwrap(), Some(false));
        assert_eq!(repo.m2_compatible().unwrap(), Some(true));
    }
}

mod layout_patterns {
    use super::*;

    #[test]
    fn absent_patterns_fall_back_to_the_fixed_defaults() {
        let repo = repository(&PropertyStore::new());

        assert_eq!(repo.ivy_artifact_pattern(), MAVEN_2_LAYOUT_PATTERN);
        assert_eq!(repo.ivy_pattern(), DEFAULT_IVY_LAYOUT_PATTERN);
    }

    #[test]
    fn blank_patterns_fall_back_to_the_fixed_defaults() {
        let repo = repository(&PropertyStore::new());

        repo.set_ivy_artifact_pattern("");
        repo.set_ivy_pattern("   ");

        assert_eq!(repo.ivy_artifact_pattern(), MAVEN_2_LAYOUT_PATTERN);
        assert_eq!(repo.ivy_pattern(), DEFAULT_IVY_LAYOUT_PATTERN);
    }

    #[test]
    fn stored_patterns_are_returned_trimmed() {
        let repo = repository(&PropertyStore::new());

        repo.set_ivy_pattern("  [module]/ivy-[revision].xml  ");
        assert_eq!(repo.ivy_pattern(), "[module]/ivy-[revision].xml");
    }
}

mod matrix_params {
    use super::*;

    #[test]
    fn add_inserts_under_the_matrix_namespace() {
        let store = PropertyStore::new();
        let repo = repository(&store);

        repo.add_matrix_param("stage", "integration");

        assert_eq!(store.get("repo.matrix.stage").as_deref(), Some("integration"));
    }

    #[test]
    fn read_filters_the_whole_store_by_the_policy_predicate() {
        let store = PropertyStore::new();
        let repo = repository(&store);

        repo.add_matrix_param("stage", "integration");
        store.set("repo.repoKey", "libs-release");
        store.set("unrelated.key", "x");

        let params = repo.matrix_params();
        assert_eq!(params.len(), 1);
        assert_eq!(params.get("repo.matrix.stage").map(String::as_str), Some("integration"));
    }

    #[test]
    fn bulk_add_absorbs_only_already_prefixed_entries() {
        let store = PropertyStore::new();
        let repo = repository(&store);

        repo.add_matrix_params([
            ("repo.matrix.x", "1"),
            ("unrelated.key", "2"),
        ]);

        assert_eq!(store.get("repo.matrix.x").as_deref(), Some("1"));
        assert!(!store.contains_key("unrelated.key"));
    }

    #[test]
    fn custom_predicate_policies_are_honoured() {
        let store = PropertyStore::new();
        let repo = RepositoryConfig::new(
            store.clone(),
            "repo.",
            MatrixParamPolicy::new("attached.", |key| key.ends_with(".param")),
        );

        store.set("anything.param", "kept");
        store.set("anything.other", "ignored");

        let params = repo.matrix_params();
        assert_eq!(params.len(), 1);
        assert!(params.contains_key("anything.param"));
    }

    #[test]
    fn matrix_namespace_never_collides_with_typed_fields() {
        let store = PropertyStore::new();
        let repo = repository(&store);

        repo.set_repo_key("libs-release");
        repo.add_matrix_param("repoKey", "shadow");

        assert_eq!(repo.repo_key().as_deref(), Some("libs-release"));
        assert_eq!(store.get("repo.matrix.repoKey").as_deref(), Some("shadow"));
    }
}
