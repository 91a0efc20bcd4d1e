//! Shared prop names and enumerated value vocabularies.

/// Element-type override.
pub const PROP_AS: &str = "as";
/// Explicit nested body.
pub const PROP_CHILDREN: &str = "children";
/// Extra classes appended after the composed ones.
pub const PROP_CLASS_NAME: &str = "className";
/// Shorthand body, used when `children` is nil.
pub const PROP_CONTENT: &str = "content";
/// Attribute key the forwarded reference is attached under.
pub const PROP_REF: &str = "ref";

/// Props every component handles itself.
pub const BASE_PROPS: [&str; 4] = [PROP_AS, PROP_CHILDREN, PROP_CLASS_NAME, PROP_CONTENT];

/// Element a component renders as when it declares nothing else.
pub const DEFAULT_ELEMENT_TAG: &str = "div";

pub const TEXT_ALIGNMENTS: &[&str] = &["left", "center", "right", "justified"];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_props_are_the_shared_configuration_keys() {
        assert_eq!(BASE_PROPS, ["as", "children", "className", "content"]);
    }

    #[test]
    fn test_text_alignments_include_justified() {
        // Components narrow this set; the shared vocabulary keeps all four.
        assert_eq!(TEXT_ALIGNMENTS.len(), 4);
        assert!(TEXT_ALIGNMENTS.contains(&"justified"));
    }
}
