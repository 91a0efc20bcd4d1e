//! Render plan assembly.
//!
//! [`Renderer::render`] runs the whole pipeline for one call: contract check
//! (optional), element type, pass-through props, class string and body. The
//! result is a [`RenderPlan`] for a host rendering layer to execute.

use serde::Serialize;
use std::sync::Arc;
use tracing::trace;

use crate::class_name::compose;
use crate::classify::unhandled_props;
use crate::component_spec::ComponentSpec;
use crate::config::{ContractPolicy, RenderConfig};
use crate::constants::{PROP_CHILDREN, PROP_CLASS_NAME, PROP_CONTENT, PROP_REF};
use crate::contract::{overlay, validate_props, ContractSink, SilentSink, TracingSink};
use crate::element::{resolve_element_type, ElementType};
use crate::props::{PropBag, PropValue, RefHandle};
use crate::shorthand::resolve_body;

/// Fully resolved render instruction. Recomputed on every call.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderPlan {
    pub element_type: ElementType,
    /// Pass-through props plus `className` and `ref`.
    pub attributes: PropBag,
    pub body: Option<PropValue>,
}

impl RenderPlan {
    pub fn class_name(&self) -> &str {
        self.attributes
            .get(PROP_CLASS_NAME)
            .and_then(PropValue::as_str)
            .unwrap_or_default()
    }

    pub fn forwarded_ref(&self) -> Option<RefHandle> {
        match self.attributes.get(PROP_REF) {
            Some(PropValue::Ref(handle)) => Some(*handle),
            _ => None,
        }
    }
}

/// Evaluate the component's class sources and append the caller's class.
///
/// Tokens that fail their contract are dropped here without reporting;
/// reporting is the validator's job.
pub fn compose_class_name(spec: &ComponentSpec, props: &PropBag) -> String {
    let tokens = spec.class_sources().iter().map(|source| {
        source.token(spec, props).unwrap_or_else(|violation| {
            trace!(%violation, "Dropping class token");
            None
        })
    });
    let caller = props.get(PROP_CLASS_NAME).and_then(PropValue::as_str);
    compose(tokens, caller)
}

/// Combine already-resolved parts. `className` and `ref` are always attached
/// and take precedence over same-named pass-through props.
pub fn assemble(
    element_type: ElementType,
    rest: PropBag,
    class_name: String,
    forwarded_ref: Option<RefHandle>,
    body: Option<PropValue>,
) -> RenderPlan {
    let mut attributes = rest;
    attributes.insert(PROP_CLASS_NAME.to_string(), PropValue::Str(class_name));
    attributes.insert(PROP_REF.to_string(), PropValue::from(forwarded_ref));
    RenderPlan {
        element_type,
        attributes,
        body,
    }
}

// =============================================================================
// Renderer
// =============================================================================

/// Runs the render pipeline with a given contract policy.
#[derive(Clone)]
pub struct Renderer {
    check_contracts: bool,
    sink: Arc<dyn ContractSink>,
}

impl Default for Renderer {
    fn default() -> Self {
        Self {
            check_contracts: true,
            sink: Arc::new(TracingSink),
        }
    }
}

impl std::fmt::Debug for Renderer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Renderer")
            .field("check_contracts", &self.check_contracts)
            .finish_non_exhaustive()
    }
}

impl Renderer {
    pub fn new(sink: Arc<dyn ContractSink>) -> Self {
        Self {
            check_contracts: true,
            sink,
        }
    }

    pub fn from_config(config: &RenderConfig) -> Self {
        let sink: Arc<dyn ContractSink> = match config.contract_policy {
            ContractPolicy::Silent => Arc::new(SilentSink),
            ContractPolicy::Log => Arc::new(TracingSink),
            ContractPolicy::Collect => overlay(),
        };
        Self {
            check_contracts: config.check_contracts,
            sink,
        }
    }

    /// Skip the development-time contract check entirely.
    pub fn without_contract_checks(mut self) -> Self {
        self.check_contracts = false;
        self
    }

    pub fn checks_contracts(&self) -> bool {
        self.check_contracts
    }

    /// Resolve one render call. Never fails, whatever the props contain.
    pub fn render(
        &self,
        spec: &ComponentSpec,
        props: &PropBag,
        forwarded_ref: Option<RefHandle>,
    ) -> RenderPlan {
        if self.check_contracts {
            for violation in validate_props(spec, props) {
                self.sink.report(violation);
            }
        }

        let element_type = resolve_element_type(spec, props);
        let rest = unhandled_props(spec, props);
        let class_name = compose_class_name(spec, props);
        let body = resolve_body(props.get(PROP_CHILDREN), props.get(PROP_CONTENT)).cloned();

        trace!(
            component = spec.display_name(),
            element = %element_type,
            class_name = %class_name,
            "Resolved render plan"
        );
        assemble(element_type, rest, class_name, forwarded_ref, body)
    }
}

/// Render with the default policy: contracts checked, violations logged.
pub fn render(
    spec: &ComponentSpec,
    props: &PropBag,
    forwarded_ref: Option<RefHandle>,
) -> RenderPlan {
    Renderer::default().render(spec, props, forwarded_ref)
}

#[cfg(test)]
#[path = "render_tests.rs"]
mod tests;
