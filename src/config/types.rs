//! Configuration type definitions

use serde::{Deserialize, Serialize};

use super::defaults::*;

// ============================================
// CONTRACT POLICY
// ============================================

/// What happens to a prop value that breaks its contract.
///
/// Every policy renders without the offending class token; they differ only
/// in where the violation is reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ContractPolicy {
    /// Drop silently.
    Silent,
    /// Log at `warn` via tracing.
    #[default]
    Log,
    /// Keep in the process-wide overlay collector for a development UI.
    Collect,
}

// ============================================
// MAIN CONFIG
// ============================================

/// Render-time settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderConfig {
    #[serde(default)]
    pub contract_policy: ContractPolicy,
    /// Validate props against component contracts before rendering (default: true)
    #[serde(default = "default_check_contracts")]
    pub check_contracts: bool,
    /// Tracing filter directive (default: "info")
    #[serde(default = "default_log_filter")]
    pub log_filter: String,
    /// Optional JSONL log file in addition to stderr
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_file: Option<String>,
}

fn default_check_contracts() -> bool {
    DEFAULT_CHECK_CONTRACTS
}
fn default_log_filter() -> String {
    DEFAULT_LOG_FILTER.to_string()
}

impl Default for RenderConfig {
    fn default() -> Self {
        RenderConfig {
            contract_policy: ContractPolicy::default(),
            check_contracts: DEFAULT_CHECK_CONTRACTS,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            log_file: None,
        }
    }
}
