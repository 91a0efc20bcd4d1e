//! Per-component-type descriptors.
//!
//! A [`ComponentSpec`] is built once when a component type is defined and is
//! read-only afterward. Its handled-prop set is exactly the key set of its
//! prop contract, so the two can never drift apart.
//!
//! # Example
//!
//! ```ignore
//! use ui_render_core::{ClassSource, ComponentSpec, PropContract};
//! use ui_render_core::constants::TEXT_ALIGNMENTS;
//!
//! let card_header = ComponentSpec::builder("CardHeader")
//!     .with_base_props()
//!     .prop("textAlign", PropContract::one_of_without(TEXT_ALIGNMENTS, &["justified"]))
//!     .class(ClassSource::enumerated("textAlign"))
//!     .class(ClassSource::static_token("header"))
//!     .build();
//! ```

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::collections::BTreeSet;

use crate::class_name::ClassSource;
use crate::constants::{
    DEFAULT_ELEMENT_TAG, PROP_AS, PROP_CHILDREN, PROP_CLASS_NAME, PROP_CONTENT,
};
use crate::contract::PropContract;
use crate::element::ElementType;

// =============================================================================
// ComponentSpec
// =============================================================================

/// Immutable metadata for one component type.
#[derive(Debug, Clone, PartialEq)]
pub struct ComponentSpec {
    display_name: String,
    default_element_type: ElementType,
    handled_props: BTreeSet<String>,
    prop_contract: Vec<(String, PropContract)>,
    class_sources: SmallVec<[ClassSource; 4]>,
}

impl ComponentSpec {
    pub fn builder(display_name: impl Into<String>) -> ComponentSpecBuilder {
        ComponentSpecBuilder::new(display_name)
    }

    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    pub fn default_element_type(&self) -> &ElementType {
        &self.default_element_type
    }

    /// Keys this component consumes, sorted.
    pub fn handled_props(&self) -> &BTreeSet<String> {
        &self.handled_props
    }

    pub fn is_handled(&self, key: &str) -> bool {
        self.handled_props.contains(key)
    }

    /// Declared contracts in declaration order.
    pub fn prop_contract(&self) -> &[(String, PropContract)] {
        &self.prop_contract
    }

    pub fn contract_for(&self, prop: &str) -> Option<&PropContract> {
        self.prop_contract
            .iter()
            .find(|(name, _)| name == prop)
            .map(|(_, contract)| contract)
    }

    pub fn class_sources(&self) -> &[ClassSource] {
        &self.class_sources
    }

    /// Introspectable, serializable view for documentation tooling.
    pub fn metadata(&self) -> ComponentMetadata {
        ComponentMetadata {
            display_name: self.display_name.clone(),
            default_element_type: self.default_element_type.to_string(),
            handled_props: self.handled_props.iter().cloned().collect(),
            props: self
                .prop_contract
                .iter()
                .map(|(name, contract)| PropDoc {
                    name: name.clone(),
                    description: contract.describe(),
                    contract: contract.clone(),
                })
                .collect(),
        }
    }
}

// =============================================================================
// Builder
// =============================================================================

/// Fluent construction of a [`ComponentSpec`].
#[derive(Debug, Clone)]
pub struct ComponentSpecBuilder {
    display_name: String,
    default_element_type: Option<ElementType>,
    prop_contract: Vec<(String, PropContract)>,
    class_sources: SmallVec<[ClassSource; 4]>,
}

impl ComponentSpecBuilder {
    pub fn new(display_name: impl Into<String>) -> Self {
        Self {
            display_name: display_name.into(),
            default_element_type: None,
            prop_contract: Vec::new(),
            class_sources: SmallVec::new(),
        }
    }

    /// Element rendered when no `as` override is given (default: `div`).
    pub fn element(mut self, element: impl Into<ElementType>) -> Self {
        self.default_element_type = Some(element.into());
        self
    }

    /// Declare `as`, `children`, `className` and `content`.
    pub fn with_base_props(self) -> Self {
        self.prop(PROP_AS, PropContract::ElementType)
            .prop(PROP_CHILDREN, PropContract::Node)
            .prop(PROP_CLASS_NAME, PropContract::String)
            .prop(PROP_CONTENT, PropContract::ContentShorthand)
    }

    /// Declare a handled prop. Redeclaring a prop replaces its contract.
    pub fn prop(mut self, name: impl Into<String>, contract: PropContract) -> Self {
        let name = name.into();
        match self.prop_contract.iter_mut().find(|(existing, _)| *existing == name) {
            Some(entry) => entry.1 = contract,
            None => self.prop_contract.push((name, contract)),
        }
        self
    }

    /// Append a class token source; sources are evaluated in this order.
    pub fn class(mut self, source: ClassSource) -> Self {
        self.class_sources.push(source);
        self
    }

    /// Props read by class sources but never declared get an `any` contract,
    /// so they are handled and never passed through.
    pub fn build(mut self) -> ComponentSpec {
        let read_by_sources: Vec<String> = self
            .class_sources
            .iter()
            .filter_map(ClassSource::prop)
            .map(str::to_string)
            .collect();
        for prop in read_by_sources {
            if !self.prop_contract.iter().any(|(name, _)| *name == prop) {
                self.prop_contract.push((prop, PropContract::Any));
            }
        }

        let handled_props = self
            .prop_contract
            .iter()
            .map(|(name, _)| name.clone())
            .collect();
        ComponentSpec {
            display_name: self.display_name,
            default_element_type: self
                .default_element_type
                .unwrap_or_else(|| ElementType::tag(DEFAULT_ELEMENT_TAG)),
            handled_props,
            prop_contract: self.prop_contract,
            class_sources: self.class_sources,
        }
    }
}

// =============================================================================
// Metadata
// =============================================================================

/// Static component metadata as published to external tooling.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentMetadata {
    pub display_name: String,
    pub default_element_type: String,
    pub handled_props: Vec<String>,
    pub props: Vec<PropDoc>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PropDoc {
    pub name: String,
    pub description: String,
    pub contract: PropContract,
}

// =============================================================================
// Declarative definitions
// =============================================================================

/// A component type as written in a JSON catalog file.
///
/// ```json
/// {
///   "displayName": "CardHeader",
///   "props": [{ "name": "textAlign", "type": "oneOf", "values": ["left", "center", "right"] }],
///   "classes": [{ "type": "enum", "prop": "textAlign" }, { "type": "static", "token": "header" }]
/// }
/// ```
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentDefinition {
    pub display_name: String,
    #[serde(default)]
    pub element: Option<String>,
    #[serde(default = "default_base_props")]
    pub base_props: bool,
    #[serde(default)]
    pub props: Vec<PropDefinition>,
    #[serde(default)]
    pub classes: Vec<ClassSource>,
}

fn default_base_props() -> bool {
    true
}

#[derive(Debug, Clone, Deserialize)]
pub struct PropDefinition {
    pub name: String,
    #[serde(flatten)]
    pub contract: PropContract,
}

impl ComponentDefinition {
    pub fn into_spec(self) -> ComponentSpec {
        let mut builder = ComponentSpec::builder(self.display_name);
        if self.base_props {
            builder = builder.with_base_props();
        }
        if let Some(element) = self.element.filter(|e| !e.is_empty()) {
            builder = builder.element(ElementType::NativeTag(element));
        }
        for prop in self.props {
            builder = builder.prop(prop.name, prop.contract);
        }
        for source in self.classes {
            builder = builder.class(source);
        }
        builder.build()
    }
}
