//! UI Render Core - the shared render mechanism behind presentational components
//!
//! Every component in a catalog is a descriptor ([`ComponentSpec`]) wired into
//! the same pipeline:
//!
//! - [`resolve_element_type`] - which tag or component to instantiate (`as`)
//! - [`unhandled_props`] - which props pass through to that element
//! - [`compose_class_name`] - static and conditional class tokens, caller class last
//! - [`resolve_body`] - explicit `children` or shorthand `content`
//! - [`Renderer`] - assembles the above into a [`RenderPlan`]
//!
//! ```ignore
//! use ui_render_core::{render, ClassSource, ComponentSpec, PropContract, RefHandle};
//! use ui_render_core::props::bag_from_json;
//!
//! let results = ComponentSpec::builder("SearchResults")
//!     .with_base_props()
//!     .class(ClassSource::static_token("results transition"))
//!     .build();
//!
//! let props = bag_from_json(serde_json::json!({ "className": "foo", "content": "hi" }));
//! let plan = render(&results, &props, Some(RefHandle::new(1)));
//! assert_eq!(plan.class_name(), "results transition foo");
//! ```

pub mod class_name;
pub mod classify;
pub mod component_spec;
pub mod config;
pub mod constants;
pub mod contract;
pub mod element;
pub mod error;
pub mod logging;
pub mod props;
pub mod registry;
pub mod render;
pub mod shorthand;

pub use class_name::{compose, enum_token, key_only, value_and_key, ClassSource};
pub use classify::{handled_props, unhandled_props};
pub use component_spec::{ComponentDefinition, ComponentMetadata, ComponentSpec, ComponentSpecBuilder};
pub use contract::{validate_props, CollectingSink, ContractSink, PropContract};
pub use element::{resolve_element_type, ComponentHandle, ElementType};
pub use error::{ContractViolation, RenderKitError};
pub use props::{Node, PropBag, PropValue, RefHandle};
pub use registry::ComponentRegistry;
pub use render::{assemble, compose_class_name, render, RenderPlan, Renderer};
pub use shorthand::{count_children, is_nil, resolve_body};
