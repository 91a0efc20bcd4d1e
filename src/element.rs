//! Element types and the resolver that picks one per render call.

use serde::Serialize;
use std::fmt;
use tracing::debug;

use crate::component_spec::ComponentSpec;
use crate::constants::PROP_AS;
use crate::props::{PropBag, PropValue};

// =============================================================================
// ElementType - Opaque render target
// =============================================================================

/// The tag or component a render call instantiates.
///
/// Both variants are opaque render targets: nothing in this crate checks
/// whether a target can actually be rendered by the host.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "kind", content = "name", rename_all = "camelCase")]
pub enum ElementType {
    /// Primitive host tag such as `div` or `a`.
    NativeTag(String),
    /// Another component, referenced by its display name.
    Component(ComponentHandle),
}

impl ElementType {
    pub fn tag(name: impl Into<String>) -> Self {
        Self::NativeTag(name.into())
    }

    pub fn component(spec: &ComponentSpec) -> Self {
        Self::Component(ComponentHandle::from(spec))
    }

    pub fn name(&self) -> &str {
        match self {
            Self::NativeTag(tag) => tag,
            Self::Component(handle) => handle.display_name(),
        }
    }
}

impl fmt::Display for ElementType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NativeTag(tag) => write!(f, "{}", tag),
            Self::Component(handle) => write!(f, "<{}>", handle.display_name()),
        }
    }
}

impl From<&str> for ElementType {
    fn from(tag: &str) -> Self {
        Self::NativeTag(tag.to_string())
    }
}

impl From<ComponentHandle> for ElementType {
    fn from(handle: ComponentHandle) -> Self {
        Self::Component(handle)
    }
}

/// Reference to a component used as a render target.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct ComponentHandle(String);

impl ComponentHandle {
    pub fn new(display_name: impl Into<String>) -> Self {
        Self(display_name.into())
    }

    pub fn display_name(&self) -> &str {
        &self.0
    }
}

impl From<&ComponentSpec> for ComponentHandle {
    fn from(spec: &ComponentSpec) -> Self {
        Self(spec.display_name().to_string())
    }
}

// =============================================================================
// Resolver
// =============================================================================

/// Decide the element type for one render call.
///
/// An `as` override is returned verbatim. Values that cannot name a target
/// (nil, empty string, numbers, lists, maps) fall back to the component's
/// default element.
pub fn resolve_element_type(spec: &ComponentSpec, props: &PropBag) -> ElementType {
    match props.get(PROP_AS) {
        Some(PropValue::Element(element)) => element.clone(),
        Some(PropValue::Str(tag)) if !tag.is_empty() => ElementType::NativeTag(tag.clone()),
        Some(other) if !other.is_nil() => {
            debug!(
                component = spec.display_name(),
                value = ?other,
                "Ignoring `as` value that is not a render target"
            );
            spec.default_element_type().clone()
        }
        _ => spec.default_element_type().clone(),
    }
}
