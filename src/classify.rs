//! Partition a prop bag into handled and pass-through halves.

use crate::component_spec::ComponentSpec;
use crate::props::PropBag;

/// Props the component does not consume itself.
///
/// Every key outside the component's handled set is forwarded unchanged,
/// including keys this crate has never heard of (`data-*`, `aria-*`, ...).
pub fn unhandled_props(spec: &ComponentSpec, props: &PropBag) -> PropBag {
    props
        .iter()
        .filter(|(key, _)| !spec.is_handled(key))
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect()
}

/// Props the component consumes itself; the complement of [`unhandled_props`].
pub fn handled_props(spec: &ComponentSpec, props: &PropBag) -> PropBag {
    props
        .iter()
        .filter(|(key, _)| spec.is_handled(key))
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect()
}
