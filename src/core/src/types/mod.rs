//! Shared role types

pub mod role;
pub mod usage;

// Re-export commonly used types
pub use role::ConfigurationRole;
pub use usage::UsageAxis;
