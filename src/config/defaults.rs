//! Default configuration values
//!
//! All constants used throughout the config module are defined here.

/// Where `load_config` looks when no explicit path is given
pub const DEFAULT_CONFIG_PATH: &str = "~/.ui-render/config.json";

/// Run the development-time contract check before each render
pub const DEFAULT_CHECK_CONTRACTS: bool = true;

/// Default tracing filter; `RUST_LOG` takes precedence
pub const DEFAULT_LOG_FILTER: &str = "info";
