//! Prop contracts and the development-time validator.
//!
//! Contracts describe what each handled prop accepts. They are published as
//! component metadata and checked before rendering when validation is on.
//! A failed check never stops a render: violations go to a [`ContractSink`].

use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use std::sync::{Arc, OnceLock};
use tracing::warn;

use crate::component_spec::ComponentSpec;
use crate::constants::PROP_CHILDREN;
use crate::error::ContractViolation;
use crate::props::{PropBag, PropValue};

// =============================================================================
// PropContract
// =============================================================================

/// Allowed values for one prop.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum PropContract {
    /// A tag name or component reference.
    ElementType,
    /// Renderable markup.
    Node,
    String,
    Bool,
    /// Markup that stands in for `children` and may not be combined with it.
    ContentShorthand,
    /// One of a fixed set of string values.
    OneOf { values: Vec<String> },
    Any,
}

impl PropContract {
    pub fn one_of(values: &[&str]) -> Self {
        Self::OneOf {
            values: values.iter().map(|v| v.to_string()).collect(),
        }
    }

    /// `values` minus `excluded`, keeping their order.
    pub fn one_of_without(values: &[&str], excluded: &[&str]) -> Self {
        Self::OneOf {
            values: values
                .iter()
                .filter(|v| !excluded.contains(v))
                .map(|v| v.to_string())
                .collect(),
        }
    }

    pub fn allowed_values(&self) -> Option<&[String]> {
        match self {
            Self::OneOf { values } => Some(values),
            _ => None,
        }
    }

    /// Human-readable form for generated documentation.
    pub fn describe(&self) -> String {
        match self {
            Self::ElementType => "element type (tag or component)".to_string(),
            Self::Node => "node".to_string(),
            Self::String => "string".to_string(),
            Self::Bool => "bool".to_string(),
            Self::ContentShorthand => "content shorthand (node, exclusive with children)".to_string(),
            Self::OneOf { values } => format!("one of: {}", values.join(", ")),
            Self::Any => "any".to_string(),
        }
    }

    /// Check one value. `props` is the whole bag, for cross-prop rules.
    ///
    /// Nil values always pass; every prop is optional.
    pub fn check(&self, value: &PropValue, props: &PropBag) -> Result<(), String> {
        if value.is_nil() {
            return Ok(());
        }
        match self {
            Self::Any => Ok(()),
            Self::ElementType => match value {
                PropValue::Element(_) => Ok(()),
                PropValue::Str(tag) if !tag.is_empty() => Ok(()),
                other => Err(format!("expected an element type, got {}", other.kind())),
            },
            Self::Node => check_node(value),
            Self::String => match value {
                PropValue::Str(_) => Ok(()),
                other => Err(format!("expected string, got {}", other.kind())),
            },
            Self::Bool => match value {
                PropValue::Bool(_) => Ok(()),
                other => Err(format!("expected bool, got {}", other.kind())),
            },
            Self::ContentShorthand => {
                if props.get(PROP_CHILDREN).is_some_and(|c| !c.is_nil()) {
                    return Err("cannot be combined with `children`".to_string());
                }
                check_node(value)
            }
            Self::OneOf { values } => {
                crate::class_name::enum_token(values.as_slice(), Some(value)).map(|_| ())
            }
        }
    }
}

fn check_node(value: &PropValue) -> Result<(), String> {
    match value {
        PropValue::Null
        | PropValue::Bool(_)
        | PropValue::Number(_)
        | PropValue::Str(_)
        | PropValue::Node(_) => Ok(()),
        PropValue::List(items) => items.iter().try_for_each(check_node),
        other => Err(format!("expected a node, got {}", other.kind())),
    }
}

/// Check every declared prop present in the bag, in declaration order.
pub fn validate_props(spec: &ComponentSpec, props: &PropBag) -> Vec<ContractViolation> {
    spec.prop_contract()
        .iter()
        .filter_map(|(name, contract)| {
            let value = props.get(name)?;
            contract
                .check(value, props)
                .err()
                .map(|reason| ContractViolation::new(spec.display_name(), name, reason))
        })
        .collect()
}

// =============================================================================
// Sinks
// =============================================================================

/// Receives contract violations out-of-band.
pub trait ContractSink: Send + Sync {
    fn report(&self, violation: ContractViolation);
}

/// Logs each violation at `warn`.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl ContractSink for TracingSink {
    fn report(&self, violation: ContractViolation) {
        warn!(
            component = %violation.component,
            prop = %violation.prop,
            reason = %violation.reason,
            "Prop contract violation"
        );
    }
}

/// Discards violations.
#[derive(Debug, Default, Clone, Copy)]
pub struct SilentSink;

impl ContractSink for SilentSink {
    fn report(&self, _violation: ContractViolation) {}
}

/// Keeps violations for later display.
#[derive(Debug, Default)]
pub struct CollectingSink {
    violations: Mutex<Vec<ContractViolation>>,
}

impl CollectingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Remove and return everything collected so far.
    pub fn take(&self) -> Vec<ContractViolation> {
        std::mem::take(&mut *self.violations.lock())
    }

    pub fn len(&self) -> usize {
        self.violations.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl ContractSink for CollectingSink {
    fn report(&self, violation: ContractViolation) {
        self.violations.lock().push(violation);
    }
}

static OVERLAY: OnceLock<Arc<CollectingSink>> = OnceLock::new();

/// Process-wide collector backing the `collect` contract policy.
pub fn overlay() -> Arc<CollectingSink> {
    OVERLAY.get_or_init(|| Arc::new(CollectingSink::new())).clone()
}

#[cfg(test)]
#[path = "contract_tests.rs"]
mod tests;
