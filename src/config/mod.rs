//! Configuration module - Render policy and logging settings
//!
//! This module provides functionality for:
//! - Loading configuration from ~/.ui-render/config.json
//! - Default values for all settings
//! - Type definitions for config structures
//!
//! # Module Structure
//!
//! - `defaults` - All default constant values
//! - `types` - Configuration struct definitions (RenderConfig, ContractPolicy)
//! - `loader` - File system loading and parsing

mod defaults;
mod loader;
mod types;

pub use defaults::{DEFAULT_CONFIG_PATH, DEFAULT_LOG_FILTER};
pub use loader::{load_config, load_config_from};
pub use types::{ContractPolicy, RenderConfig};

#[cfg(test)]
pub use defaults::DEFAULT_CHECK_CONTRACTS;

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
