//! Usage axes of a configuration

use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the three independent ways a configuration can be used
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UsageAxis {
    /// Selected by another project as a variant of a dependency
    Consumption,
    /// Resolved by its own project to a dependency graph and a set of files
    Resolution,
    /// Declared against, i.e. dependencies may be added to it
    Declaration,
}

impl UsageAxis {
    /// Every axis, in canonical order
    pub const ALL: [UsageAxis; 3] = [
        UsageAxis::Consumption,
        UsageAxis::Resolution,
        UsageAxis::Declaration,
    ];

    /// Lowercase axis name
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Consumption => "consumption",
            Self::Resolution => "resolution",
            Self::Declaration => "declaration",
        }
    }

    /// Usage description shown by `ConfigurationRole::describe_usage`
    pub(crate) fn description(&self) -> &'static str {
        match self {
            Self::Consumption => {
                "Consumable - this configuration can be selected by another project as a dependency"
            }
            Self::Resolution => {
                "Resolvable - this configuration can be resolved by this project to a set of files"
            }
            Self::Declaration => "Declarable - this configuration can have dependencies added to it",
        }
    }
}

impl fmt::Display for UsageAxis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_axis_order_and_names() {
        let names: Vec<_> = UsageAxis::ALL.iter().map(|a| a.to_string()).collect();
        assert_eq!(names, vec!["consumption", "resolution", "declaration"]);
    }

    #[test]
    fn test_axis_serde() {
        let json = serde_json::to_string(&UsageAxis::Declaration).unwrap();
        assert_eq!(json, "\"declaration\"");

        let axis: UsageAxis = serde_json::from_str("\"resolution\"").unwrap();
        assert_eq!(axis, UsageAxis::Resolution);
    }
}
