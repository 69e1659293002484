//! Style resolution and computed style lookup.
//!
//! A node's own style comes from two channels applied in order:
//! 1. presentation attributes, routed by [`classify`];
//! 2. the `style` attribute's declarations, which override step 1.
//!
//! Nothing is copied from ancestors at this stage. Inheritance happens at
//! lookup time in [`computed_style`], which walks the parent links on a miss.

use vellum_dom::{AttributeClass, DocumentTree, Node, NodeId, classify};

use crate::declarations::parse_declarations;

/// Whether an attribute namespace prefix denotes the document's default scope.
///
/// `None` is the null namespace and `""` the default namespace; a literal
/// `svg` prefix names the SVG namespace itself. Attributes in all three are
/// addressed by their bare name.
#[must_use]
pub fn is_default_scope(prefix: Option<&str>) -> bool {
    matches!(prefix, None | Some("" | "svg"))
}

/// Apply one raw markup attribute to `node`.
///
/// In the default scope the name is classified: style properties go to the
/// node's style, `style` itself is left for [`apply_style_text`], anything
/// else becomes a plain attribute. In any other namespace the attribute is
/// always plain and stored as `prefix:name`.
pub fn apply_attribute(node: &mut Node, prefix: Option<&str>, name: &str, value: &str) {
    match prefix {
        Some(prefix) if !is_default_scope(Some(prefix)) => {
            node.set_attribute(&format!("{prefix}:{name}"), value);
        }
        _ => node.set_attribute(name, value),
    }
}

/// Set `name` on `node` as a style property or plain attribute, whichever it
/// classifies as.
///
/// This is the programmatic counterpart of a default-scope markup attribute.
/// A `style` name is parsed as declaration text.
pub fn set_property(node: &mut Node, name: &str, value: &str) {
    if classify(name) == AttributeClass::Ignored {
        apply_style_text(node, value);
    } else {
        node.set_attribute(name, value);
    }
}

/// Apply the declarations of a `style` attribute, overriding same-named entries.
pub fn apply_style_text(node: &mut Node, text: &str) {
    for declaration in parse_declarations(text) {
        node.set_style(&declaration.name, &declaration.value);
    }
}

/// [CSS Cascading § 7 Inheritance](https://www.w3.org/TR/css-cascade-4/#inheriting)
///
/// The effective value of `property` for `id`: the node's own value, or on a
/// miss (or an explicit `inherit`) the parent's computed value, recursively.
/// `None` when no node up to the root sets it.
#[must_use]
pub fn computed_style<'a>(tree: &'a DocumentTree, id: NodeId, property: &str) -> Option<&'a str> {
    std::iter::once(id)
        .chain(tree.ancestors(id))
        .filter_map(|ancestor| tree.get(ancestor))
        .find_map(|node| node.style(property).filter(|&value| value != "inherit"))
}
