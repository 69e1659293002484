//! The document builder.
//!
//! Each element is handled in a fixed order:
//! 1. look its tag up in the type registry; unknown tags drop the subtree
//! 2. construct the node from its raw attributes
//! 3. apply every attribute, in every declared namespace plus the null one
//! 4. apply the `style` attribute's declarations
//! 5. for containers, build the children in document order

use std::iter;

use vellum_common::{parse_number, parse_view_box, warning::warn_once};
use vellum_dom::registry::{self, AttributeSource};
use vellum_dom::{Document, DocumentTree, Node, NodeId};
use vellum_style::{apply_attribute, apply_style_text};

use crate::ReadError;
use crate::markup::MarkupElement;

/// Builds [`Document`]s from markup trees.
///
/// The reader holds no per-document state, so one instance can read any
/// number of documents in sequence.
#[derive(Debug, Clone, Copy, Default)]
pub struct SvgReader;

impl SvgReader {
    /// Create a reader.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Parse XML text and build a document from its root element.
    ///
    /// # Errors
    ///
    /// Returns [`ReadError::Xml`] for malformed XML and
    /// [`ReadError::UnexpectedRoot`] when the root is not `<svg>`.
    pub fn parse_string(&self, text: &str) -> Result<Document, ReadError> {
        let mut options = roxmltree::ParsingOptions::default();
        options.allow_dtd = true;
        let xml = roxmltree::Document::parse_with_options(text, options)?;
        self.read(&xml.root_element())
    }

    /// Build a document from a parsed `<svg>` root element.
    ///
    /// # Errors
    ///
    /// Returns [`ReadError::UnexpectedRoot`] when the root is not `<svg>`.
    pub fn read<E: MarkupElement>(&self, root: &E) -> Result<Document, ReadError> {
        if root.name() != "svg" {
            return Err(ReadError::UnexpectedRoot {
                found: root.name().to_string(),
            });
        }

        let namespaces = root.namespaces();
        let scopes: Vec<Option<&str>> = namespaces
            .iter()
            .map(|prefix| Some(prefix.as_str()))
            .chain(iter::once(None))
            .collect();

        let (width, height) = document_dimensions(root);
        let mut document = Document::new(width, height);
        let tree = document.tree_mut();

        if let Some(node) = tree.get_mut(NodeId::ROOT) {
            apply_attributes(node, root, &scopes);
            apply_styles(node, root);
        }
        add_children(tree, NodeId::ROOT, root, &scopes)?;

        Ok(document)
    }
}

/// Resolve the document size from the root's `width` and `height`.
///
/// When both are zero or absent, the `viewBox` width and height are used
/// instead. If that fails too the document is zero-sized.
fn document_dimensions<E: MarkupElement>(root: &E) -> (f64, f64) {
    let width = root.attribute(None, "width").map_or(0.0, parse_number);
    let height = root.attribute(None, "height").map_or(0.0, parse_number);
    if width != 0.0 || height != 0.0 {
        return (width, height);
    }

    match parse_view_box(root.attribute(None, "viewBox")) {
        Some([_, _, box_width, box_height]) if box_width != 0.0 || box_height != 0.0 => {
            (box_width, box_height)
        }
        _ => {
            warn_once("Reader", "no usable width/height or viewBox on <svg>; document is 0x0");
            (0.0, 0.0)
        }
    }
}

/// Step 3: route every attribute through the classifier.
///
/// The `style` attribute is skipped here and handled by [`apply_styles`].
fn apply_attributes<E: MarkupElement>(node: &mut Node, element: &E, scopes: &[Option<&str>]) {
    for &scope in scopes {
        for (name, value) in element.attributes(scope) {
            apply_attribute(node, scope, name, value);
        }
    }
}

/// Step 4: the `style` attribute overrides presentation attributes.
fn apply_styles<E: MarkupElement>(node: &mut Node, element: &E) {
    if let Some(text) = element.attribute(None, "style") {
        apply_style_text(node, text);
    }
}

/// Step 5: build each child and append the ones that resolved.
fn add_children<E: MarkupElement>(
    tree: &mut DocumentTree,
    parent: NodeId,
    element: &E,
    scopes: &[Option<&str>],
) -> Result<(), ReadError> {
    for child in element.children() {
        if let Some(child_id) = parse_node(tree, &child, scopes)? {
            tree.append_child(parent, child_id)?;
        }
    }
    Ok(())
}

/// Steps 1-5 for one element. `None` when its type is unknown.
fn parse_node<E: MarkupElement>(
    tree: &mut DocumentTree,
    element: &E,
    scopes: &[Option<&str>],
) -> Result<Option<NodeId>, ReadError> {
    let Some(construct) = registry::resolve(element.name()) else {
        warn_once("Reader", &format!("skipping unknown element <{}>", element.name()));
        return Ok(None);
    };

    let mut node = Node::new(construct(&Source(element)));
    apply_attributes(&mut node, element, scopes);
    apply_styles(&mut node, element);

    let is_container = node.is_container();
    let id = tree.alloc(node);
    if is_container {
        add_children(tree, id, element, scopes)?;
    }
    Ok(Some(id))
}

/// Presents a markup element to the registry's constructors.
///
/// `prefix:name` looks in that namespace; a bare name looks in the null
/// namespace, then the default namespace.
struct Source<'e, E>(&'e E);

impl<E: MarkupElement> AttributeSource for Source<'_, E> {
    fn attribute(&self, name: &str) -> Option<&str> {
        match name.split_once(':') {
            Some((prefix, local)) => self.0.attribute(Some(prefix), local),
            None => self
                .0
                .attribute(None, name)
                .or_else(|| self.0.attribute(Some(""), name)),
        }
    }

    fn text_content(&self) -> String {
        self.0.text()
    }
}
