//! Migration registry
//!
//! The registry derives one role per [`MigrationPath`] when it is built and is
//! read-only afterwards. Building fails as a whole if any single path fails;
//! there is no partially built registry.
//!
//! # Example
//!
//! ```rust
//! use usage_roles_core::UsageAxis;
//! use usage_roles_migration::{MigrationRegistry, UsageCheck};
//!
//! let registry = MigrationRegistry::new().unwrap();
//! let role = registry.consumable_to_retired();
//!
//! assert!(registry.contains(role));
//! assert!(matches!(
//!     registry.check_usage(role, UsageAxis::Consumption),
//!     UsageCheck::Deprecated { path: Some(_) }
//! ));
//! ```

use crate::config::{RegistryConfig, RoleNaming};
use crate::difference::difference;
use crate::path::{MigrationPath, MigrationTarget};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tracing::{debug, error, info};
use usage_roles_core::{CanonicalRole, ConfigurationRole, Result, RoleError, UsageAxis};

/// One migration to derive: a label and its two input roles
#[derive(Debug, Clone, Copy)]
pub struct MigrationDefinition<'a> {
    pub label: &'a str,
    pub initial: &'a ConfigurationRole,
    pub eventual: &'a ConfigurationRole,
}

impl<'a> MigrationDefinition<'a> {
    pub fn new(label: &'a str, initial: &'a ConfigurationRole, eventual: &'a ConfigurationRole) -> Self {
        Self {
            label,
            initial,
            eventual,
        }
    }
}

impl From<MigrationPath> for MigrationDefinition<'static> {
    fn from(path: MigrationPath) -> Self {
        Self::new(path.as_str(), path.initial().role(), path.eventual().role())
    }
}

/// Derive one role per definition, in order
///
/// The difference algorithm runs exactly once per definition. The first
/// failure aborts the whole derivation.
///
/// # Errors
///
/// - `RoleError::Migration` wrapping the difference failure of a definition
/// - `RoleError::DuplicateMigration` if a label repeats or two definitions
///   derive the same role
/// - `RoleError::DuplicateRoleName` if `config.require_unique_names` is set
///   and two derived roles share a name
pub fn derive_migrations(
    definitions: &[MigrationDefinition<'_>],
    config: &RegistryConfig,
) -> Result<Vec<ConfigurationRole>> {
    let mut labels = HashSet::with_capacity(definitions.len());
    let mut roles: HashSet<ConfigurationRole> = HashSet::with_capacity(definitions.len());
    let mut names = HashSet::with_capacity(definitions.len());
    let mut derived = Vec::with_capacity(definitions.len());

    for definition in definitions {
        if !labels.insert(definition.label) {
            return Err(RoleError::DuplicateMigration(definition.label.to_string()));
        }

        let role = difference(definition.initial, definition.eventual)
            .map_err(|e| RoleError::migration(definition.label, e))?;

        let role = match config.naming {
            RoleNaming::Initial => role,
            RoleNaming::Path => role.renamed(definition.label.to_string()),
        };

        if roles.contains(&role) {
            return Err(RoleError::DuplicateMigration(format!(
                "'{}' derives the same role as an earlier migration",
                definition.label
            )));
        }

        if config.require_unique_names && !names.insert(role.name().to_string()) {
            return Err(RoleError::DuplicateRoleName(role.name().to_string()));
        }

        debug!("Registered migration {} as '{}'", definition.label, role.name());
        roles.insert(role.clone());
        derived.push(role);
    }

    Ok(derived)
}

/// A derived migration role together with where it came from
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MigrationRole {
    pub path: MigrationPath,
    pub initial: CanonicalRole,
    pub eventual: MigrationTarget,
    pub role: ConfigurationRole,
}

/// Outcome of exercising a usage on a configuration in some role
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UsageCheck {
    /// The role does not allow this usage
    Forbidden,
    /// Allowed without a warning
    Allowed,
    /// Allowed, but should emit a deprecation warning
    ///
    /// `path` names the migration the role belongs to, if it is a registered
    /// migration role.
    Deprecated { path: Option<MigrationPath> },
}

/// Immutable set of migration roles
///
/// Holds exactly one entry per [`MigrationPath`]. Safe to share across
/// threads without locking.
#[derive(Debug, Clone)]
pub struct MigrationRegistry {
    /// Entries in `MigrationPath::ALL` order
    entries: Vec<MigrationRole>,

    /// Every migration role, for bulk lookups
    all: HashSet<ConfigurationRole>,

    config: RegistryConfig,
}

impl MigrationRegistry {
    /// Build the registry with the default configuration
    pub fn new() -> Result<Self> {
        Self::with_config(RegistryConfig::default())
    }

    /// Build the registry
    ///
    /// # Errors
    ///
    /// Propagates the first error of [`derive_migrations`]. This indicates
    /// broken canonical role definitions and should abort startup.
    pub fn with_config(config: RegistryConfig) -> Result<Self> {
        let definitions: Vec<MigrationDefinition<'static>> =
            MigrationPath::ALL.into_iter().map(MigrationDefinition::from).collect();

        let roles = derive_migrations(&definitions, &config).map_err(|e| {
            error!("Failed to build migration registry: {}", e);
            e
        })?;

        let entries: Vec<MigrationRole> = MigrationPath::ALL
            .into_iter()
            .zip(roles)
            .map(|(path, role)| MigrationRole {
                path,
                initial: path.initial(),
                eventual: path.eventual(),
                role,
            })
            .collect();

        let all = entries.iter().map(|entry| entry.role.clone()).collect();

        info!(
            "MigrationRegistry built with {} roles (naming={:?}, unique_names={})",
            entries.len(),
            config.naming,
            config.require_unique_names
        );

        Ok(Self { entries, all, config })
    }

    /// Entry for a migration path
    pub fn get(&self, path: MigrationPath) -> &MigrationRole {
        &self.entries[path.index()]
    }

    pub fn role(&self, path: MigrationPath) -> &ConfigurationRole {
        &self.get(path).role
    }

    pub fn resolvable_dependency_scope_to_resolvable(&self) -> &ConfigurationRole {
        self.role(MigrationPath::ResolvableDependencyScopeToResolvable)
    }

    pub fn resolvable_dependency_scope_to_dependency_scope(&self) -> &ConfigurationRole {
        self.role(MigrationPath::ResolvableDependencyScopeToDependencyScope)
    }

    pub fn legacy_to_resolvable_dependency_scope(&self) -> &ConfigurationRole {
        self.role(MigrationPath::LegacyToResolvableDependencyScope)
    }

    pub fn consumable_to_retired(&self) -> &ConfigurationRole {
        self.role(MigrationPath::ConsumableToRetired)
    }

    /// All migration roles, unordered
    pub fn all(&self) -> &HashSet<ConfigurationRole> {
        &self.all
    }

    pub fn iter(&self) -> impl Iterator<Item = &MigrationRole> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn config(&self) -> &RegistryConfig {
        &self.config
    }

    /// The migration entry whose role equals `role`, if any
    pub fn find(&self, role: &ConfigurationRole) -> Option<&MigrationRole> {
        if !self.all.contains(role) {
            return None;
        }
        self.entries.iter().find(|entry| &entry.role == role)
    }

    /// Whether `role` is one of the migration roles
    pub fn contains(&self, role: &ConfigurationRole) -> bool {
        self.all.contains(role)
    }

    /// Classify exercising `axis` on a configuration in `role`
    pub fn check_usage(&self, role: &ConfigurationRole, axis: UsageAxis) -> UsageCheck {
        if !role.allows(axis) {
            UsageCheck::Forbidden
        } else if role.is_deprecated_for(axis) {
            UsageCheck::Deprecated {
                path: self.find(role).map(|entry| entry.path),
            }
        } else {
            UsageCheck::Allowed
        }
    }
}

impl<'a> IntoIterator for &'a MigrationRegistry {
    type Item = &'a MigrationRole;
    type IntoIter = std::slice::Iter<'a, MigrationRole>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
