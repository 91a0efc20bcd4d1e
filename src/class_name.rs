//! Class string composition.
//!
//! Every component builds its class string the same way: an ordered list of
//! [`ClassSource`]s is evaluated against the prop bag, nil tokens are dropped,
//! and the caller's `className` goes last.

use serde::{Deserialize, Serialize};

use crate::component_spec::ComponentSpec;
use crate::contract::PropContract;
use crate::error::ContractViolation;
use crate::props::{PropBag, PropValue};

/// Join tokens in order, skipping missing and empty ones, then append the
/// caller's class name.
///
/// ```ignore
/// let classes = compose([Some("results"), Some("transition")], Some("foo"));
/// assert_eq!(classes, "results transition foo");
/// ```
pub fn compose<I, S>(tokens: I, caller_class_name: Option<&str>) -> String
where
    I: IntoIterator<Item = Option<S>>,
    S: AsRef<str>,
{
    let mut classes = String::new();
    let caller = caller_class_name.map(|name| Some(name.to_string()));
    let tokens = tokens
        .into_iter()
        .map(|token| token.map(|t| t.as_ref().to_string()))
        .chain(caller);

    for token in tokens.flatten() {
        if token.is_empty() {
            continue;
        }
        if !classes.is_empty() {
            classes.push(' ');
        }
        classes.push_str(&token);
    }
    classes
}

// =============================================================================
// Conditional token builders
// =============================================================================

/// Emit an enumerated value as its own token.
///
/// Nil values emit nothing. A value outside `allowed` is a contract failure;
/// the returned reason names the allowed set.
pub fn enum_token<S: AsRef<str>>(
    allowed: &[S],
    value: Option<&PropValue>,
) -> Result<Option<String>, String> {
    let Some(value) = value.filter(|v| !v.is_nil()) else {
        return Ok(None);
    };
    match value.to_token() {
        Some(token) if allowed.iter().any(|a| a.as_ref() == token) => Ok(Some(token)),
        _ => Err(format!(
            "expected one of [{}], got {}",
            allowed.iter().map(|a| a.as_ref()).collect::<Vec<_>>().join(", "),
            describe_value(value)
        )),
    }
}

/// Emit `key` when the flag is truthy (`basic` → `"basic"`).
pub fn key_only(value: Option<&PropValue>, key: &str) -> Option<String> {
    value
        .filter(|v| v.is_truthy())
        .map(|_| key.to_string())
}

/// Emit `"<value> <key>"` for any non-nil value other than `true`
/// (`"top"`, `"aligned"` → `"top aligned"`).
pub fn value_and_key(value: Option<&PropValue>, key: &str) -> Option<String> {
    match value {
        Some(PropValue::Bool(_)) | Some(PropValue::Null) | None => None,
        Some(v) => v.to_token().map(|token| format!("{} {}", token, key)),
    }
}

fn describe_value(value: &PropValue) -> String {
    match value.to_token() {
        Some(token) => format!("`{}`", token),
        None => value.kind().to_string(),
    }
}

// =============================================================================
// ClassSource
// =============================================================================

/// One entry in a component's class token list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum ClassSource {
    /// Always emitted, e.g. the component's own name.
    Static { token: String },
    /// The prop's value, checked against its `oneOf` contract.
    Enum { prop: String },
    /// `token` when the prop is truthy.
    KeyOnly { prop: String, token: String },
    /// `"<value> <key>"` when the prop carries a value.
    ValueAndKey { prop: String, key: String },
}

impl ClassSource {
    pub fn static_token(token: impl Into<String>) -> Self {
        Self::Static {
            token: token.into(),
        }
    }

    pub fn enumerated(prop: impl Into<String>) -> Self {
        Self::Enum { prop: prop.into() }
    }

    /// Prop this source reads, if any.
    pub fn prop(&self) -> Option<&str> {
        match self {
            Self::Static { .. } => None,
            Self::Enum { prop } | Self::KeyOnly { prop, .. } | Self::ValueAndKey { prop, .. } => {
                Some(prop)
            }
        }
    }

    /// Evaluate against one prop bag.
    ///
    /// A value outside the prop's declared contract yields `Err` and no token.
    pub fn token(
        &self,
        spec: &ComponentSpec,
        props: &PropBag,
    ) -> Result<Option<String>, ContractViolation> {
        match self {
            Self::Static { token } => Ok(Some(token.clone())),
            Self::Enum { prop } => {
                let value = checked_value(spec, prop, props)?;
                match spec.contract_for(prop).and_then(PropContract::allowed_values) {
                    Some(allowed) => enum_token(allowed, value)
                        .map_err(|reason| ContractViolation::new(spec.display_name(), prop, reason)),
                    None => Ok(value.filter(|v| !v.is_nil()).and_then(PropValue::to_token)),
                }
            }
            Self::KeyOnly { prop, token } => Ok(key_only(checked_value(spec, prop, props)?, token)),
            Self::ValueAndKey { prop, key } => {
                Ok(value_and_key(checked_value(spec, prop, props)?, key))
            }
        }
    }
}

/// Look up `prop` and check it against its declared contract, if any.
fn checked_value<'a>(
    spec: &ComponentSpec,
    prop: &str,
    props: &'a PropBag,
) -> Result<Option<&'a PropValue>, ContractViolation> {
    let value = props.get(prop);
    if let (Some(value), Some(contract)) = (value, spec.contract_for(prop)) {
        contract
            .check(value, props)
            .map_err(|reason| ContractViolation::new(spec.display_name(), prop, reason))?;
    }
    Ok(value)
}

#[cfg(test)]
#[path = "class_name_tests.rs"]
mod tests;
