//! # Usage Roles Core
//!
//! Usage roles for dependency configurations in a build graph.
//!
//! A role says whether a configuration may be declared against, resolved, or
//! consumed by other projects, and which of those usages are deprecated. This
//! crate holds the role value object, the canonical role definitions that
//! migrations are built from, and the shared error type.
//!
//! ```rust
//! use usage_roles_core::{canonical, UsageAxis};
//!
//! let role = &canonical::RESOLVABLE_DEPENDENCY_SCOPE;
//! assert!(role.allows(UsageAxis::Resolution));
//! assert!(!role.allows(UsageAxis::Consumption));
//! assert!(!role.is_deprecated());
//! ```

pub mod canonical;
pub mod error;
pub mod types;

// Re-export commonly used types
pub use canonical::CanonicalRole;
pub use error::{Result, RoleError, RolePosition};
pub use types::{ConfigurationRole, UsageAxis};
