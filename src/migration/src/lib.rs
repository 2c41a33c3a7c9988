//! # Usage Roles Migration
//!
//! Narrowing migrations between configuration usage roles.
//!
//! A migration role is the intermediate state between the role a
//! configuration has today and the role it will have after the next major
//! version. It keeps every usage of the current role and marks each usage the
//! future role drops as deprecated.
//!
//! ## Features
//!
//! - **Difference algorithm**: derives a migration role from two clean roles
//! - **Strict inputs**: roles that already carry deprecations are rejected
//! - **Registry**: built once at startup, immutable and lock-free afterwards
//! - **Usage checks**: tells a caller whether exercising a usage is deprecated
//!
//! ## Example
//!
//! ```rust
//! use usage_roles_core::UsageAxis;
//! use usage_roles_migration::MigrationRegistry;
//!
//! let registry = MigrationRegistry::new().unwrap();
//! let legacy = registry.legacy_to_resolvable_dependency_scope();
//!
//! assert!(legacy.is_consumable());
//! assert!(legacy.is_deprecated_for(UsageAxis::Consumption));
//! assert!(registry.all().contains(legacy));
//! ```

pub mod config;
pub mod difference;
pub mod path;
pub mod registry;


// Re-export commonly used types
pub use config::{RegistryConfig, RoleNaming};
pub use difference::{difference, is_narrowing};
pub use path::{MigrationPath, MigrationTarget, RETIRED};
pub use registry::{derive_migrations, MigrationDefinition, MigrationRegistry, MigrationRole, UsageCheck};
pub use usage_roles_core::{ConfigurationRole, Result, RoleError, RolePosition, UsageAxis};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
