//! Registry configuration

use serde::{Deserialize, Serialize};

/// How migration roles are named
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoleNaming {
    /// Keep the initial role's name
    #[default]
    Initial,
    /// Use the migration path label
    Path,
}

/// Migration registry configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegistryConfig {
    /// Naming scheme for derived roles
    pub naming: RoleNaming,

    /// Reject registries where two migration roles share a name
    pub require_unique_names: bool,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            naming: RoleNaming::Initial,
            require_unique_names: false,
        }
    }
}

impl RegistryConfig {
    /// Path-named roles with enforced unique names
    pub fn strict() -> Self {
        Self {
            naming: RoleNaming::Path,
            require_unique_names: true,
        }
    }
}
