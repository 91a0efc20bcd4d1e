//! Prop bags and the values they carry.
//!
//! A [`PropBag`] is an ordered map so that every plan built from it has a
//! stable attribute order.

use serde::Serialize;
use std::collections::BTreeMap;

use crate::element::ElementType;
use crate::render::RenderPlan;

/// Caller-supplied props for one render call.
pub type PropBag = BTreeMap<String, PropValue>;

// =============================================================================
// PropValue
// =============================================================================

/// A single prop value.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum PropValue {
    Null,
    Bool(bool),
    Number(f64),
    Str(String),
    /// Renderable markup.
    Node(Node),
    /// A render target, typically passed as `as`.
    Element(ElementType),
    /// Host-side reference handle.
    Ref(RefHandle),
    List(Vec<PropValue>),
    Map(BTreeMap<String, PropValue>),
}

impl PropValue {
    /// Absent-equivalent: `null` or `false`.
    pub fn is_nil(&self) -> bool {
        matches!(self, Self::Null | Self::Bool(false))
    }

    /// Host truthiness, used by flag-style class tokens.
    pub fn is_truthy(&self) -> bool {
        match self {
            Self::Null => false,
            Self::Bool(flag) => *flag,
            Self::Number(n) => *n != 0.0 && !n.is_nan(),
            Self::Str(s) => !s.is_empty(),
            _ => true,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(s) => Some(s),
            _ => None,
        }
    }

    /// Text form of scalar values, used when a value becomes a class token.
    pub fn to_token(&self) -> Option<String> {
        match self {
            Self::Str(s) => Some(s.clone()),
            // f64 `Display` never uses exponent notation and drops `.0`.
            Self::Number(n) => Some(n.to_string()),
            _ => None,
        }
    }

    /// Short type label for diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Bool(_) => "bool",
            Self::Number(_) => "number",
            Self::Str(_) => "string",
            Self::Node(_) => "node",
            Self::Element(_) => "element",
            Self::Ref(_) => "ref",
            Self::List(_) => "list",
            Self::Map(_) => "map",
        }
    }
}

impl From<&str> for PropValue {
    fn from(value: &str) -> Self {
        Self::Str(value.to_string())
    }
}

impl From<String> for PropValue {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

impl From<bool> for PropValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<f64> for PropValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<i64> for PropValue {
    fn from(value: i64) -> Self {
        Self::Number(value as f64)
    }
}

impl From<Node> for PropValue {
    fn from(node: Node) -> Self {
        Self::Node(node)
    }
}

impl From<ElementType> for PropValue {
    fn from(element: ElementType) -> Self {
        Self::Element(element)
    }
}

impl From<RefHandle> for PropValue {
    fn from(handle: RefHandle) -> Self {
        Self::Ref(handle)
    }
}

impl<T: Into<PropValue>> From<Option<T>> for PropValue {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(Self::Null)
    }
}

impl From<serde_json::Value> for PropValue {
    fn from(value: serde_json::Value) -> Self {
        use serde_json::Value;
        match value {
            Value::Null => Self::Null,
            Value::Bool(flag) => Self::Bool(flag),
            Value::Number(n) => Self::Number(n.as_f64().unwrap_or_default()),
            Value::String(s) => Self::Str(s),
            Value::Array(items) => Self::List(items.into_iter().map(Self::from).collect()),
            Value::Object(map) => {
                Self::Map(map.into_iter().map(|(k, v)| (k, Self::from(v))).collect())
            }
        }
    }
}

/// Build a prop bag from a JSON object. Non-object input yields an empty bag.
pub fn bag_from_json(value: serde_json::Value) -> PropBag {
    match value {
        serde_json::Value::Object(map) => map
            .into_iter()
            .map(|(key, value)| (key, PropValue::from(value)))
            .collect(),
        _ => PropBag::new(),
    }
}

// =============================================================================
// Node - Renderable markup
// =============================================================================

/// Explicit nested markup.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Node {
    Text(String),
    /// Output of another component's render call.
    Plan(Box<RenderPlan>),
    Fragment(Vec<Node>),
}

impl Node {
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text(text.into())
    }
}

impl From<RenderPlan> for Node {
    fn from(plan: RenderPlan) -> Self {
        Self::Plan(Box::new(plan))
    }
}

// =============================================================================
// RefHandle
// =============================================================================

/// Identity of a host-side reference, forwarded untouched to the element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct RefHandle {
    pub id: u64,
}

impl RefHandle {
    pub fn new(id: u64) -> Self {
        Self { id }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_nil_values() {
        assert!(PropValue::Null.is_nil());
        assert!(PropValue::Bool(false).is_nil());
        assert!(!PropValue::Bool(true).is_nil());
        assert!(!PropValue::from("").is_nil());
        assert!(!PropValue::Number(0.0).is_nil());
    }

    #[test]
    fn test_truthiness_follows_host_rules() {
        assert!(!PropValue::from("").is_truthy());
        assert!(!PropValue::Number(0.0).is_truthy());
        assert!(!PropValue::Number(f64::NAN).is_truthy());
        assert!(PropValue::from("basic").is_truthy());
        assert!(PropValue::List(vec![]).is_truthy());
    }

    #[test]
    fn test_integral_numbers_render_without_fraction() {
        assert_eq!(PropValue::Number(4.0).to_token().as_deref(), Some("4"));
        assert_eq!(PropValue::Number(1.5).to_token().as_deref(), Some("1.5"));
        assert_eq!(PropValue::Bool(true).to_token(), None);
    }

    #[test]
    fn test_large_integral_numbers_keep_their_digits() {
        assert_eq!(
            PropValue::Number(1e20).to_token().as_deref(),
            Some("100000000000000000000")
        );
        assert_eq!(
            PropValue::Number(-1e20).to_token().as_deref(),
            Some("-100000000000000000000")
        );
        assert_eq!(
            PropValue::Number(9007199254740993.0).to_token().as_deref(),
            Some("9007199254740992")
        );
    }

    #[test]
    fn test_bag_from_json_converts_nested_values() {
        let props = bag_from_json(json!({
            "textAlign": "left",
            "data-id": 7,
            "items": [true, null],
            "style": { "color": "red" }
        }));

        assert_eq!(props["textAlign"], PropValue::from("left"));
        assert_eq!(props["data-id"], PropValue::Number(7.0));
        assert_eq!(
            props["items"],
            PropValue::List(vec![PropValue::Bool(true), PropValue::Null])
        );
        assert!(matches!(props["style"], PropValue::Map(_)));
    }

    #[test]
    fn test_bag_from_non_object_is_empty() {
        assert!(bag_from_json(json!(["a"])).is_empty());
    }

    #[test]
    fn test_option_conversion_maps_none_to_null() {
        assert_eq!(PropValue::from(None::<&str>), PropValue::Null);
        assert_eq!(PropValue::from(Some("x")), PropValue::from("x"));
    }

    #[test]
    fn test_serializes_untagged() {
        let value = PropValue::List(vec![
            PropValue::Null,
            PropValue::from("a"),
            PropValue::Ref(RefHandle::new(3)),
        ]);
        assert_eq!(
            serde_json::to_value(&value).unwrap(),
            json!([null, "a", { "id": 3 }])
        );
    }
}
