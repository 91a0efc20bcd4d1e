use serde::Serialize;
use thiserror::Error;
use tracing::warn;

/// A prop value that falls outside its declared contract.
///
/// Violations are advisory: they are reported through a
/// [`ContractSink`](crate::contract::ContractSink) and never abort a render.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[error("Invalid prop `{prop}` supplied to `{component}`: {reason}")]
pub struct ContractViolation {
    pub component: String,
    pub prop: String,
    pub reason: String,
}

impl ContractViolation {
    pub fn new(
        component: impl Into<String>,
        prop: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self {
            component: component.into(),
            prop: prop.into(),
            reason: reason.into(),
        }
    }
}

/// Errors raised at the edges of the crate (config, definitions, registry).
///
/// Rendering itself is infallible and never produces one of these.
#[derive(Error, Debug)]
pub enum RenderKitError {
    #[error("Failed to read '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Component '{0}' is defined more than once")]
    DuplicateComponent(String),

    #[error("Unknown component '{0}'")]
    UnknownComponent(String),

    #[error("The global component registry is already installed")]
    RegistryInstalled,
}

pub type Result<T> = std::result::Result<T, RenderKitError>;

/// Extension trait for silent error logging with caller location tracking.
/// Use when the operation is recoverable and the caller can fall back.
///
/// ```ignore
/// use ui_render_core::error::ResultExt;
///
/// let config = load_config_from(path).warn_on_err().unwrap_or_default();
/// ```
pub trait ResultExt<T> {
    /// Log as warning with caller location and return None.
    fn warn_on_err(self) -> Option<T>;
}

impl<T, E: std::fmt::Debug> ResultExt<T> for std::result::Result<T, E> {
    #[track_caller]
    fn warn_on_err(self) -> Option<T> {
        match self {
            Ok(value) => Some(value),
            Err(error) => {
                let caller = std::panic::Location::caller();
                warn!(
                    error = ?error,
                    file = caller.file(),
                    line = caller.line(),
                    "Operation had warning"
                );
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contract_violation_message() {
        let violation = ContractViolation::new("CardHeader", "textAlign", "`justified` is not allowed");
        assert_eq!(
            violation.to_string(),
            "Invalid prop `textAlign` supplied to `CardHeader`: `justified` is not allowed"
        );
    }

    #[test]
    fn test_result_ext_returns_value_on_ok() {
        let ok: std::result::Result<u8, String> = Ok(7);
        assert_eq!(ok.warn_on_err(), Some(7));
    }

    #[test]
    fn test_result_ext_swallows_error() {
        let err: std::result::Result<u8, String> = Err("boom".into());
        assert_eq!(err.warn_on_err(), None);
    }
}
