//! [`MarkupElement`] over a `roxmltree` document.
//!
//! roxmltree resolves attribute prefixes to namespace URIs, so scoped
//! lookups map the requested prefix back to its URI on the element.

use std::collections::BTreeSet;

use roxmltree::Node;

use crate::markup::MarkupElement;

/// The `xml` prefix is bound implicitly and never declared.
const XML_NAMESPACE: &str = "http://www.w3.org/XML/1998/namespace";

impl MarkupElement for Node<'_, '_> {
    fn name(&self) -> &str {
        self.tag_name().name()
    }

    fn attributes(&self, prefix: Option<&str>) -> Vec<(&str, &str)> {
        let uri = match prefix {
            None => None,
            Some(prefix) => {
                let Some(uri) = self
                    .lookup_namespace_uri((!prefix.is_empty()).then_some(prefix))
                    .or_else(|| (prefix == "xml").then_some(XML_NAMESPACE))
                else {
                    return Vec::new();
                };
                Some(uri)
            }
        };
        Node::attributes(self)
            .filter(|attr| attr.namespace() == uri)
            .map(|attr| (attr.name(), attr.value()))
            .collect()
    }

    fn children(&self) -> Vec<Self> {
        Node::children(self).filter(Node::is_element).collect()
    }

    fn namespaces(&self) -> Vec<String> {
        let prefixes: BTreeSet<String> = self
            .descendants()
            .filter(Node::is_element)
            .flat_map(|node| {
                Node::namespaces(&node)
                    .map(|ns| ns.name().unwrap_or_default().to_string())
                    .collect::<Vec<_>>()
            })
            .chain(std::iter::once("xml".to_string()))
            .collect();
        prefixes.into_iter().collect()
    }

    fn text(&self) -> String {
        self.descendants()
            .filter(Node::is_text)
            .filter_map(|node| Node::text(&node))
            .collect()
    }
}
