//! Named migration paths between canonical roles

use serde::{Deserialize, Serialize};
use std::fmt;
use usage_roles_core::{CanonicalRole, ConfigurationRole};

/// A role with no usages left at all
///
/// Used as the eventual role when a usage is removed outright rather than
/// narrowed to another canonical role.
pub static RETIRED: ConfigurationRole =
    ConfigurationRole::new("Deprecated", false, false, false, false, false, false);

/// Where a migration ends up
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MigrationTarget {
    /// Narrowed to another canonical role
    Role(CanonicalRole),
    /// Every usage removed
    Retired,
}

impl MigrationTarget {
    pub fn role(&self) -> &'static ConfigurationRole {
        match self {
            Self::Role(canonical) => canonical.role(),
            Self::Retired => &RETIRED,
        }
    }
}

impl fmt::Display for MigrationTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Role(canonical) => write!(f, "{}", canonical),
            Self::Retired => write!(f, "RETIRED"),
        }
    }
}

/// Every migration the registry knows about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MigrationPath {
    /// A resolvable dependency scope that becomes resolvable only
    ResolvableDependencyScopeToResolvable,
    /// A resolvable dependency scope that becomes a plain dependency scope
    ResolvableDependencyScopeToDependencyScope,
    /// A legacy configuration that becomes a resolvable dependency scope
    LegacyToResolvableDependencyScope,
    /// A consumable configuration that will be removed
    ConsumableToRetired,
}

impl MigrationPath {
    pub const ALL: [MigrationPath; 4] = [
        MigrationPath::ResolvableDependencyScopeToResolvable,
        MigrationPath::ResolvableDependencyScopeToDependencyScope,
        MigrationPath::LegacyToResolvableDependencyScope,
        MigrationPath::ConsumableToRetired,
    ];

    pub fn initial(&self) -> CanonicalRole {
        match self {
            Self::ResolvableDependencyScopeToResolvable
            | Self::ResolvableDependencyScopeToDependencyScope => CanonicalRole::ResolvableDependencyScope,
            Self::LegacyToResolvableDependencyScope => CanonicalRole::All,
            Self::ConsumableToRetired => CanonicalRole::Consumable,
        }
    }

    pub fn eventual(&self) -> MigrationTarget {
        match self {
            Self::ResolvableDependencyScopeToResolvable => MigrationTarget::Role(CanonicalRole::Resolvable),
            Self::ResolvableDependencyScopeToDependencyScope => {
                MigrationTarget::Role(CanonicalRole::DependencyScope)
            }
            Self::LegacyToResolvableDependencyScope => {
                MigrationTarget::Role(CanonicalRole::ResolvableDependencyScope)
            }
            Self::ConsumableToRetired => MigrationTarget::Retired,
        }
    }

    /// Constant-style label, e.g. `CONSUMABLE_TO_RETIRED`
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ResolvableDependencyScopeToResolvable => "RESOLVABLE_DEPENDENCY_SCOPE_TO_RESOLVABLE",
            Self::ResolvableDependencyScopeToDependencyScope => {
                "RESOLVABLE_DEPENDENCY_SCOPE_TO_DEPENDENCY_SCOPE"
            }
            Self::LegacyToResolvableDependencyScope => "LEGACY_TO_RESOLVABLE_DEPENDENCY_SCOPE",
            Self::ConsumableToRetired => "CONSUMABLE_TO_RETIRED",
        }
    }

    pub(crate) fn index(&self) -> usize {
        *self as usize
    }
}

impl fmt::Display for MigrationPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_matches_listing_order() {
        for (idx, path) in MigrationPath::ALL.iter().enumerate() {
            assert_eq!(path.index(), idx);
        }
    }

    #[test]
    fn test_endpoints() {
        let path = MigrationPath::LegacyToResolvableDependencyScope;
        assert_eq!(path.initial(), CanonicalRole::All);
        assert_eq!(
            path.eventual(),
            MigrationTarget::Role(CanonicalRole::ResolvableDependencyScope)
        );
        assert_eq!(MigrationPath::ConsumableToRetired.eventual().role(), &RETIRED);
    }

    #[test]
    fn test_retired_has_no_usages() {
        assert!(!RETIRED.is_consumable() && !RETIRED.is_resolvable() && !RETIRED.is_declarable());
        assert!(!RETIRED.is_deprecated());
        assert_eq!(RETIRED.name(), "Deprecated");
    }

    #[test]
    fn test_labels_serialize_as_constants() {
        let json = serde_json::to_string(&MigrationPath::ConsumableToRetired).unwrap();
        assert_eq!(json, "\"CONSUMABLE_TO_RETIRED\"");
        assert_eq!(MigrationTarget::Retired.to_string(), "RETIRED");
    }
}
