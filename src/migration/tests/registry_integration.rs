//! Integration tests for the migration registry
//!
//! Exercises the registry the way a host uses it: configured from JSON, built
//! once at startup, then read concurrently.

use std::sync::{Arc, Once};
use std::thread;
use usage_roles_core::{canonical, CanonicalRole, UsageAxis};
use usage_roles_migration::{
    MigrationPath, MigrationRegistry, MigrationTarget, RegistryConfig, RoleNaming, UsageCheck,
};

static TRACING: Once = Once::new();

fn init_tracing() {
    TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "usage_roles_migration=debug".into()),
            )
            .with_test_writer()
            .try_init();
    });
}

#[test]
fn test_registry_from_json_config() {
    init_tracing();

    let config: RegistryConfig =
        serde_json::from_str(r#"{ "naming": "path", "require_unique_names": true }"#).unwrap();
    let registry = MigrationRegistry::with_config(config).unwrap();

    assert_eq!(registry.config().naming, RoleNaming::Path);
    assert_eq!(
        registry.consumable_to_retired().name(),
        "CONSUMABLE_TO_RETIRED"
    );
}

#[test]
fn test_concurrent_readers() {
    init_tracing();

    let registry = Arc::new(MigrationRegistry::new().unwrap());
    let handles: Vec<_> = (0..8)
        .map(|i| {
            let registry = Arc::clone(&registry);
            thread::spawn(move || {
                let path = MigrationPath::ALL[i % MigrationPath::ALL.len()];
                let role = registry.role(path).clone();
                let deprecated: Vec<UsageAxis> = UsageAxis::ALL
                    .into_iter()
                    .filter(|axis| {
                        matches!(
                            registry.check_usage(&role, *axis),
                            UsageCheck::Deprecated { path: Some(p) } if p == path
                        )
                    })
                    .collect();
                (path, deprecated)
            })
        })
        .collect();

    for handle in handles {
        let (path, deprecated) = handle.join().unwrap();
        assert_eq!(
            deprecated,
            registry.role(path).deprecated_usages().collect::<Vec<_>>()
        );
        assert!(!deprecated.is_empty());
    }
}

#[test]
fn test_entries_trace_back_to_canonical_roles() {
    let registry = MigrationRegistry::new().unwrap();

    let legacy = registry.get(MigrationPath::LegacyToResolvableDependencyScope);
    assert_eq!(legacy.initial, CanonicalRole::All);
    assert_eq!(
        legacy.eventual,
        MigrationTarget::Role(CanonicalRole::ResolvableDependencyScope)
    );

    let retired = registry.get(MigrationPath::ConsumableToRetired);
    assert_eq!(retired.eventual, MigrationTarget::Retired);

    // Capabilities always come from the initial canonical role
    for entry in registry.iter() {
        let initial = entry.initial.role();
        for axis in UsageAxis::ALL {
            assert_eq!(entry.role.allows(axis), initial.allows(axis));
        }
    }
}

#[test]
fn test_canonical_roles_are_not_migration_roles() {
    let registry = MigrationRegistry::new().unwrap();

    for role in canonical::all() {
        assert!(!registry.contains(role), "{} is canonical", role);
        for axis in UsageAxis::ALL {
            assert_ne!(
                registry.check_usage(role, axis),
                UsageCheck::Deprecated { path: None }
            );
        }
    }
}

#[test]
fn test_migration_entries_serialize() {
    let registry = MigrationRegistry::new().unwrap();
    let entry = registry.get(MigrationPath::ResolvableDependencyScopeToResolvable);

    let json = serde_json::to_value(entry).unwrap();
    assert_eq!(json["path"], "RESOLVABLE_DEPENDENCY_SCOPE_TO_RESOLVABLE");
    assert_eq!(json["initial"], "RESOLVABLE_DEPENDENCY_SCOPE");
    assert_eq!(json["eventual"]["role"], "RESOLVABLE");
    assert_eq!(json["role"]["declaration_deprecated"], true);
}

#[test]
fn test_describe_migration_usage() {
    let registry = MigrationRegistry::new().unwrap();

    let description = registry.legacy_to_resolvable_dependency_scope().describe_usage();
    let lines: Vec<&str> = description.lines().collect();

    assert_eq!(lines.len(), 3);
    assert!(lines[0].starts_with("\tConsumable"));
    assert!(lines[0].ends_with("(but this behavior is marked deprecated)"));
    assert!(!lines[1].contains("deprecated"));
}
