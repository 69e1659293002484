//! Rasterization dispatch over a document tree.
//!
//! [SVG 1.1 § 3.3 Rendering Order](https://www.w3.org/TR/SVG11/render.html#RenderingOrder)
//!
//! "Elements in an SVG document fragment have an implicit drawing order,
//! with the first elements in the SVG document fragment getting 'painted'
//! first. Subsequent elements are painted on top of previously painted
//! elements."

use vellum_dom::{Document, ElementKind, NodeId};
use vellum_style::computed_style;

use crate::instruction::{ParamValue, Params, ShapeKind};
use crate::sink::{DisplayList, NodeRef, RenderSink};

/// Walks a document in pre-order and emits one draw call per visible shape.
pub struct Rasterizer<'a> {
    document: &'a Document,
}

impl<'a> Rasterizer<'a> {
    /// Create a rasterizer for `document`.
    #[must_use]
    pub const fn new(document: &'a Document) -> Self {
        Self { document }
    }

    /// Emit draw calls for the whole document into `sink`.
    pub fn rasterize<S: RenderSink + ?Sized>(&self, sink: &mut S) {
        self.rasterize_node(self.document.root(), sink);
    }

    /// Rasterize into a fresh [`DisplayList`].
    #[must_use]
    pub fn display_list(&self) -> DisplayList {
        let mut list = DisplayList::new();
        self.rasterize(&mut list);
        list
    }

    /// Rasterize a node and its descendants.
    ///
    /// - `display: none` suppresses the node and its whole subtree.
    /// - `visibility: hidden | collapse` suppresses only this node's own
    ///   draw call; children resolve their own visibility.
    /// - Definitions, style sheets and gradients are referenced, never painted.
    fn rasterize_node<S: RenderSink + ?Sized>(&self, id: NodeId, sink: &mut S) {
        let tree = self.document.tree();
        let Some(node) = tree.get(id) else { return };

        if property(self.document, id, "display") == Some("none") {
            return;
        }

        if matches!(
            node.kind(),
            ElementKind::Definitions
                | ElementKind::StyleSheet(_)
                | ElementKind::LinearGradient(_)
                | ElementKind::RadialGradient(_)
                | ElementKind::GradientStop(_)
        ) {
            return;
        }

        let hidden = matches!(
            property(self.document, id, "visibility"),
            Some("hidden" | "collapse")
        );
        if !hidden && let Some((kind, params)) = draw_parameters(node.kind()) {
            sink.render(kind, params, NodeRef::new(tree, id));
        }

        for &child in tree.children(id) {
            self.rasterize_node(child, sink);
        }
    }
}

fn property<'a>(document: &'a Document, id: NodeId, name: &str) -> Option<&'a str> {
    computed_style(document.tree(), id, name).map(str::trim)
}

/// The shape kind and resolved geometry of a drawable element kind.
///
/// Absent numeric attributes resolve to zero.
fn draw_parameters(kind: &ElementKind) -> Option<(ShapeKind, Params)> {
    let number = |value: Option<f64>| ParamValue::Number(value.unwrap_or_default());
    let text = |value: Option<&str>| ParamValue::Text(value.unwrap_or_default().to_owned());

    let (shape, entries) = match kind {
        ElementKind::Rect(r) => (
            ShapeKind::Rect,
            vec![
                ("x", number(r.x)),
                ("y", number(r.y)),
                ("width", number(r.width)),
                ("height", number(r.height)),
                ("rx", number(r.rx)),
                ("ry", number(r.ry)),
            ],
        ),
        ElementKind::Circle(c) => (
            ShapeKind::Circle,
            vec![("cx", number(c.cx)), ("cy", number(c.cy)), ("r", number(c.r))],
        ),
        ElementKind::Ellipse(e) => (
            ShapeKind::Ellipse,
            vec![
                ("cx", number(e.cx)),
                ("cy", number(e.cy)),
                ("rx", number(e.rx)),
                ("ry", number(e.ry)),
            ],
        ),
        ElementKind::Line(l) => (
            ShapeKind::Line,
            vec![
                ("x1", number(l.x1)),
                ("y1", number(l.y1)),
                ("x2", number(l.x2)),
                ("y2", number(l.y2)),
            ],
        ),
        ElementKind::Polygon(p) => (
            ShapeKind::Polygon,
            vec![("points", ParamValue::Points(p.points.clone()))],
        ),
        ElementKind::Polyline(p) => (
            ShapeKind::Polyline,
            vec![("points", ParamValue::Points(p.points.clone()))],
        ),
        ElementKind::Path(p) => (ShapeKind::Path, vec![("d", text(p.d.as_deref()))]),
        ElementKind::Text(t) => (
            ShapeKind::Text,
            vec![
                ("x", number(t.x)),
                ("y", number(t.y)),
                ("content", ParamValue::Text(t.content.clone())),
            ],
        ),
        ElementKind::Image(i) => (
            ShapeKind::Image,
            vec![
                ("x", number(i.x)),
                ("y", number(i.y)),
                ("width", number(i.width)),
                ("height", number(i.height)),
                ("href", text(i.href())),
            ],
        ),
        ElementKind::Document
        | ElementKind::Group
        | ElementKind::Definitions
        | ElementKind::StyleSheet(_)
        | ElementKind::LinearGradient(_)
        | ElementKind::RadialGradient(_)
        | ElementKind::GradientStop(_) => return None,
    };

    Some((shape, entries.into_iter().collect()))
}
