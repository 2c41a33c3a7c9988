//! Configuration role value object

use super::usage::UsageAxis;
use crate::error::{Result, RoleError};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;

/// Usage role of a dependency configuration
///
/// A role is a fixed set of allowed usages (consumable, resolvable,
/// declarable) plus a parallel set of deprecation flags. A deprecated usage is
/// still allowed but emits a deprecation warning when exercised.
///
/// Roles are immutable values: equality and hashing are structural over the
/// name and all six flags, and every derivation produces a new role.
///
/// A role is *well-formed* when no usage is deprecated without also being
/// allowed. Canonical roles are well-formed by construction; see
/// [`ConfigurationRole::validate`] for roles coming from elsewhere.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ConfigurationRole {
    name: Cow<'static, str>,
    consumable: bool,
    resolvable: bool,
    declarable: bool,
    consumption_deprecated: bool,
    resolution_deprecated: bool,
    declaration_deprecated: bool,
}

impl ConfigurationRole {
    /// Create a role from its name and six flags
    #[allow(clippy::too_many_arguments, clippy::fn_params_excessive_bools)]
    pub const fn new(
        name: &'static str,
        consumable: bool,
        resolvable: bool,
        declarable: bool,
        consumption_deprecated: bool,
        resolution_deprecated: bool,
        declaration_deprecated: bool,
    ) -> Self {
        Self {
            name: Cow::Borrowed(name),
            consumable,
            resolvable,
            declarable,
            consumption_deprecated,
            resolution_deprecated,
            declaration_deprecated,
        }
    }

    /// Create a role by evaluating `allowed` and `deprecated` once per axis
    pub fn from_axes<N, A, D>(name: N, allowed: A, deprecated: D) -> Self
    where
        N: Into<Cow<'static, str>>,
        A: Fn(UsageAxis) -> bool,
        D: Fn(UsageAxis) -> bool,
    {
        Self {
            name: name.into(),
            consumable: allowed(UsageAxis::Consumption),
            resolvable: allowed(UsageAxis::Resolution),
            declarable: allowed(UsageAxis::Declaration),
            consumption_deprecated: deprecated(UsageAxis::Consumption),
            resolution_deprecated: deprecated(UsageAxis::Resolution),
            declaration_deprecated: deprecated(UsageAxis::Declaration),
        }
    }

    /// Copy of this role under a different name
    pub fn renamed<N: Into<Cow<'static, str>>>(&self, name: N) -> Self {
        Self {
            name: name.into(),
            ..self.clone()
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_consumable(&self) -> bool {
        self.consumable
    }

    pub fn is_resolvable(&self) -> bool {
        self.resolvable
    }

    pub fn is_declarable(&self) -> bool {
        self.declarable
    }

    pub fn is_consumption_deprecated(&self) -> bool {
        self.consumption_deprecated
    }

    pub fn is_resolution_deprecated(&self) -> bool {
        self.resolution_deprecated
    }

    pub fn is_declaration_deprecated(&self) -> bool {
        self.declaration_deprecated
    }

    /// Whether the usage on `axis` is allowed at all
    pub fn allows(&self, axis: UsageAxis) -> bool {
        match axis {
            UsageAxis::Consumption => self.consumable,
            UsageAxis::Resolution => self.resolvable,
            UsageAxis::Declaration => self.declarable,
        }
    }

    /// Whether exercising the usage on `axis` is deprecated
    pub fn is_deprecated_for(&self, axis: UsageAxis) -> bool {
        match axis {
            UsageAxis::Consumption => self.consumption_deprecated,
            UsageAxis::Resolution => self.resolution_deprecated,
            UsageAxis::Declaration => self.declaration_deprecated,
        }
    }

    /// Whether any usage is deprecated
    pub fn is_deprecated(&self) -> bool {
        UsageAxis::ALL.iter().any(|axis| self.is_deprecated_for(*axis))
    }

    /// Deprecated axes, in canonical order
    pub fn deprecated_usages(&self) -> impl Iterator<Item = UsageAxis> + '_ {
        UsageAxis::ALL
            .into_iter()
            .filter(move |axis| self.is_deprecated_for(*axis))
    }

    pub fn is_well_formed(&self) -> bool {
        self.validate().is_ok()
    }

    /// Check that no usage is deprecated without being allowed
    ///
    /// # Errors
    ///
    /// Returns `RoleError::IllFormedRole` naming the first offending axis.
    pub fn validate(&self) -> Result<()> {
        match UsageAxis::ALL
            .into_iter()
            .find(|axis| self.is_deprecated_for(*axis) && !self.allows(*axis))
        {
            Some(axis) => Err(RoleError::IllFormedRole {
                role: self.name.to_string(),
                axis,
            }),
            None => Ok(()),
        }
    }

    /// Human-readable summary of the allowed usages, one per line
    pub fn describe_usage(&self) -> String {
        let lines: Vec<String> = UsageAxis::ALL
            .into_iter()
            .filter(|axis| self.allows(*axis))
            .map(|axis| {
                if self.is_deprecated_for(axis) {
                    format!("\t{} (but this behavior is marked deprecated)", axis.description())
                } else {
                    format!("\t{}", axis.description())
                }
            })
            .collect();

        if lines.is_empty() {
            "\tThis configuration does not allow any usage".to_string()
        } else {
            lines.join("\n")
        }
    }
}

impl fmt::Display for ConfigurationRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
