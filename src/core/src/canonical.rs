//! Canonical configuration roles
//!
//! These are the roles configurations are created in. None of them carries a
//! deprecated usage, which makes every one of them a valid input to a
//! narrowing migration.

use crate::types::ConfigurationRole;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Consumable, resolvable and declarable: the legacy default for a configuration.
pub static ALL: ConfigurationRole =
    ConfigurationRole::new("Legacy", true, true, true, false, false, false);

/// Exposes artifacts to other projects.
pub static CONSUMABLE: ConfigurationRole =
    ConfigurationRole::new("Consumable", true, false, false, false, false, false);

/// Resolved by its own project.
pub static RESOLVABLE: ConfigurationRole =
    ConfigurationRole::new("Resolvable", false, true, false, false, false, false);

/// Collects declared dependencies and can be resolved.
pub static RESOLVABLE_DEPENDENCY_SCOPE: ConfigurationRole = ConfigurationRole::new(
    "Resolvable Dependency Scope",
    false,
    true,
    true,
    false,
    false,
    false,
);

/// Collects declared dependencies and can be consumed.
pub static CONSUMABLE_DEPENDENCY_SCOPE: ConfigurationRole = ConfigurationRole::new(
    "Consumable Dependency Scope",
    true,
    false,
    true,
    false,
    false,
    false,
);

/// Only collects declared dependencies.
pub static DEPENDENCY_SCOPE: ConfigurationRole =
    ConfigurationRole::new("Dependency Scope", false, false, true, false, false, false);

/// Identity of a canonical role
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CanonicalRole {
    All,
    Consumable,
    Resolvable,
    ResolvableDependencyScope,
    ConsumableDependencyScope,
    DependencyScope,
}

impl CanonicalRole {
    pub const ALL: [CanonicalRole; 6] = [
        CanonicalRole::All,
        CanonicalRole::Consumable,
        CanonicalRole::Resolvable,
        CanonicalRole::ResolvableDependencyScope,
        CanonicalRole::ConsumableDependencyScope,
        CanonicalRole::DependencyScope,
    ];

    /// The role definition behind this identity
    pub fn role(&self) -> &'static ConfigurationRole {
        match self {
            Self::All => &ALL,
            Self::Consumable => &CONSUMABLE,
            Self::Resolvable => &RESOLVABLE,
            Self::ResolvableDependencyScope => &RESOLVABLE_DEPENDENCY_SCOPE,
            Self::ConsumableDependencyScope => &CONSUMABLE_DEPENDENCY_SCOPE,
            Self::DependencyScope => &DEPENDENCY_SCOPE,
        }
    }

    /// Constant name, e.g. `RESOLVABLE_DEPENDENCY_SCOPE`
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::All => "ALL",
            Self::Consumable => "CONSUMABLE",
            Self::Resolvable => "RESOLVABLE",
            Self::ResolvableDependencyScope => "RESOLVABLE_DEPENDENCY_SCOPE",
            Self::ConsumableDependencyScope => "CONSUMABLE_DEPENDENCY_SCOPE",
            Self::DependencyScope => "DEPENDENCY_SCOPE",
        }
    }

    /// Canonical identity of a role, if it is structurally one of the constants
    pub fn of(role: &ConfigurationRole) -> Option<CanonicalRole> {
        Self::ALL.into_iter().find(|canonical| canonical.role() == role)
    }
}

impl fmt::Display for CanonicalRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Every canonical role definition
pub fn all() -> impl Iterator<Item = &'static ConfigurationRole> {
    CanonicalRole::ALL.into_iter().map(|canonical| canonical.role())
}
