//! Role difference for narrowing migrations
//!
//! Given the role a configuration is in today and the role it will be in after
//! the next major version, [`difference`] computes the intermediate role: every
//! usage of the initial role stays allowed, and each usage the eventual role
//! drops is marked deprecated.
//!
//! Only clean-to-clean migrations are supported. A role that already carries a
//! deprecation (for instance another migration role) is rejected instead of
//! being folded into a compound deprecation state.

use tracing::{debug, error};
use usage_roles_core::{ConfigurationRole, Result, RoleError, RolePosition, UsageAxis};

/// Compute the migration role between `initial` and `eventual`
///
/// Per axis, the result allows the usage iff `initial` does, and deprecates it
/// iff `initial` allows it and `eventual` does not. The name is copied from
/// `initial`.
///
/// # Errors
///
/// Returns `RoleError::DeprecatedInput` if either role has a deprecated
/// usage. `initial` is checked before `eventual`; both are checked before
/// anything is derived.
///
/// # Example
///
/// ```rust
/// use usage_roles_core::{canonical, UsageAxis};
/// use usage_roles_migration::difference;
///
/// let role = difference(&canonical::ALL, &canonical::RESOLVABLE_DEPENDENCY_SCOPE).unwrap();
///
/// assert!(role.allows(UsageAxis::Consumption));
/// assert!(role.is_deprecated_for(UsageAxis::Consumption));
/// assert!(!role.is_deprecated_for(UsageAxis::Resolution));
/// ```
pub fn difference(initial: &ConfigurationRole, eventual: &ConfigurationRole) -> Result<ConfigurationRole> {
    ensure_not_deprecated(initial, RolePosition::Initial)?;
    ensure_not_deprecated(eventual, RolePosition::Eventual)?;

    let role = ConfigurationRole::from_axes(
        initial.name().to_string(),
        |axis| initial.allows(axis),
        |axis| initial.allows(axis) && !eventual.allows(axis),
    );

    debug!(
        "Derived migration role '{}' from '{}' to '{}', deprecating {:?}",
        role.name(),
        initial.name(),
        eventual.name(),
        role.deprecated_usages().collect::<Vec<_>>()
    );

    Ok(role)
}

fn ensure_not_deprecated(role: &ConfigurationRole, position: RolePosition) -> Result<()> {
    if let Some(axis) = role.deprecated_usages().next() {
        error!("Rejected {} role '{}': {} is deprecated", position, role.name(), axis);
        return Err(RoleError::deprecated_input(position, axis, role.name()));
    }
    Ok(())
}

/// Whether every usage `eventual` allows is also allowed by `initial`
pub fn is_narrowing(initial: &ConfigurationRole, eventual: &ConfigurationRole) -> bool {
    UsageAxis::ALL
        .into_iter()
        .all(|axis| !eventual.allows(axis) || initial.allows(axis))
}
