//! Choose between explicit children and shorthand content.

use crate::props::PropValue;

/// Absent, `null`, or `false`.
pub fn is_nil(value: Option<&PropValue>) -> bool {
    value.map_or(true, PropValue::is_nil)
}

/// Pick the rendered body.
///
/// Children win unless nil; otherwise the shorthand content is returned as-is,
/// whatever its shape.
pub fn resolve_body<'a>(
    children: Option<&'a PropValue>,
    content: Option<&'a PropValue>,
) -> Option<&'a PropValue> {
    if is_nil(children) { content } else { children }
}

/// Number of children a value represents.
pub fn count_children(children: Option<&PropValue>) -> usize {
    match children {
        None => 0,
        Some(value) if value.is_nil() => 0,
        Some(PropValue::List(items)) => items.len(),
        Some(_) => 1,
    }
}
