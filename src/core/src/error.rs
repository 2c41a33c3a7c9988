//! Error types for usage roles and role migrations
//!
//! Every variant here is a construction-time failure. Once a migration
//! registry exists, reading from it cannot fail.

use crate::types::UsageAxis;
use std::fmt;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, RoleError>;

/// Argument position of a role passed to the difference algorithm
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RolePosition {
    /// The role a configuration starts in
    Initial,
    /// The role a configuration ends up in after the migration completes
    Eventual,
}

impl fmt::Display for RolePosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Initial => write!(f, "initial"),
            Self::Eventual => write!(f, "eventual"),
        }
    }
}

/// Role error type
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RoleError {
    /// A migration input already carries a deprecated usage
    #[error("The {position} role '{role}' must not contain deprecated usages, but {axis} is deprecated")]
    DeprecatedInput {
        position: RolePosition,
        axis: UsageAxis,
        role: String,
    },

    /// A usage is deprecated without being allowed
    #[error("Role '{role}' deprecates {axis} without allowing it")]
    IllFormedRole { role: String, axis: UsageAxis },

    /// A migration path failed to derive its role
    #[error("Migration '{path}' failed: {source}")]
    Migration {
        path: String,
        #[source]
        source: Box<RoleError>,
    },

    /// Migration path or derived role registered twice
    #[error("Duplicate migration: {0}")]
    DuplicateMigration(String),

    /// Two migration roles share a name while unique names are required
    #[error("Duplicate role name: {0}")]
    DuplicateRoleName(String),
}

impl RoleError {
    /// Create a deprecated input error
    pub fn deprecated_input<S: Into<String>>(position: RolePosition, axis: UsageAxis, role: S) -> Self {
        RoleError::DeprecatedInput {
            position,
            axis,
            role: role.into(),
        }
    }

    /// Wrap an error with the migration path it was raised for
    pub fn migration<S: Into<String>>(path: S, source: RoleError) -> Self {
        RoleError::Migration {
            path: path.into(),
            source: Box::new(source),
        }
    }

    /// Innermost error, skipping any `Migration` wrappers
    pub fn root_cause(&self) -> &RoleError {
        match self {
            RoleError::Migration { source, .. } => source.root_cause(),
            other => other,
        }
    }
}
