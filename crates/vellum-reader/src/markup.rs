//! The parsed markup tree a document is built from.
//!
//! Attribute access is scoped by namespace prefix: `None` is the null
//! namespace (unprefixed attributes) and `Some("")` the default namespace.

use std::collections::BTreeSet;

/// An element of an already-parsed markup tree.
pub trait MarkupElement: Sized {
    /// The element's local name.
    fn name(&self) -> &str;

    /// `(local name, value)` pairs of the attributes in scope `prefix`, in
    /// document order.
    fn attributes(&self, prefix: Option<&str>) -> Vec<(&str, &str)>;

    /// Child elements in document order. Character data is not included.
    fn children(&self) -> Vec<Self>;

    /// Namespace prefixes declared or used anywhere in this element's
    /// subtree, the default namespace as `""`. Each prefix appears once.
    fn namespaces(&self) -> Vec<String>;

    /// Concatenated character data of the element and its descendants.
    fn text(&self) -> String;

    /// The value of attribute `name` in scope `prefix`.
    fn attribute(&self, prefix: Option<&str>, name: &str) -> Option<&str> {
        self.attributes(prefix)
            .into_iter()
            .find(|&(key, _)| key == name)
            .map(|(_, value)| value)
    }
}

/// An attribute of a [`MarkupNode`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkupAttribute {
    /// Namespace prefix, `None` for an unprefixed attribute.
    pub prefix: Option<String>,
    /// Local name.
    pub name: String,
    /// Raw value.
    pub value: String,
}

/// An owned, in-memory markup element.
///
/// # Example
/// ```
/// use vellum_reader::MarkupNode;
///
/// let svg = MarkupNode::new("svg")
///     .attr("width", "100")
///     .child(MarkupNode::new("rect").attr("fill", "red"));
/// assert_eq!(svg.child_nodes().len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkupNode {
    name: String,
    attributes: Vec<MarkupAttribute>,
    children: Vec<MarkupNode>,
    declared_namespaces: Vec<String>,
    text: String,
}

impl MarkupNode {
    /// An element with no attributes, children or text.
    #[must_use]
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            attributes: Vec::new(),
            children: Vec::new(),
            declared_namespaces: Vec::new(),
            text: String::new(),
        }
    }

    /// Add an unprefixed attribute.
    #[must_use]
    pub fn attr(mut self, name: &str, value: &str) -> Self {
        self.attributes.push(MarkupAttribute {
            prefix: None,
            name: name.to_string(),
            value: value.to_string(),
        });
        self
    }

    /// Add an attribute under namespace `prefix`.
    #[must_use]
    pub fn ns_attr(mut self, prefix: &str, name: &str, value: &str) -> Self {
        self.attributes.push(MarkupAttribute {
            prefix: Some(prefix.to_string()),
            name: name.to_string(),
            value: value.to_string(),
        });
        self
    }

    /// Declare a namespace prefix on this element (`""` for the default namespace).
    #[must_use]
    pub fn namespace(mut self, prefix: &str) -> Self {
        self.declared_namespaces.push(prefix.to_string());
        self
    }

    /// Append a child element.
    #[must_use]
    pub fn child(mut self, child: Self) -> Self {
        self.children.push(child);
        self
    }

    /// Append character data.
    #[must_use]
    pub fn with_text(mut self, text: &str) -> Self {
        self.text.push_str(text);
        self
    }

    /// Child elements in order.
    #[must_use]
    pub fn child_nodes(&self) -> &[Self] {
        &self.children
    }

    fn collect_namespaces(&self, out: &mut BTreeSet<String>) {
        out.extend(self.declared_namespaces.iter().cloned());
        out.extend(self.attributes.iter().filter_map(|a| a.prefix.clone()));
        for child in &self.children {
            child.collect_namespaces(out);
        }
    }
}

impl MarkupElement for &MarkupNode {
    fn name(&self) -> &str {
        &self.name
    }

    fn attributes(&self, prefix: Option<&str>) -> Vec<(&str, &str)> {
        self.attributes
            .iter()
            .filter(|a| a.prefix.as_deref() == prefix)
            .map(|a| (a.name.as_str(), a.value.as_str()))
            .collect()
    }

    fn children(&self) -> Vec<Self> {
        self.children.iter().collect()
    }

    fn namespaces(&self) -> Vec<String> {
        let mut out = BTreeSet::new();
        self.collect_namespaces(&mut out);
        out.into_iter().collect()
    }

    fn text(&self) -> String {
        let mut out = self.text.clone();
        for child in &self.children {
            out.push_str(&MarkupElement::text(&child));
        }
        out
    }
}
