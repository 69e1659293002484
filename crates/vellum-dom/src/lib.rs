//! SVG document tree for the Vellum document model.
//!
//! This crate provides an arena-based scene graph of SVG elements following
//! the [SVG 1.1 document structure](https://www.w3.org/TR/SVG11/struct.html),
//! plus the registry that maps markup tag names to element kinds.
//!
//! # Design
//!
//! The tree uses arena allocation with [`NodeId`] indices for all relationships.
//! A node's parent link is a plain index into the same arena, so it never owns
//! anything and style lookups can walk it without borrow checker issues.

mod document;
pub mod kind;
pub mod properties;
pub mod registry;

use std::collections::HashMap;

use serde::Serialize;
use thiserror::Error;

pub use document::Document;
pub use kind::{
    Circle, Coordinate, ElementKind, Ellipse, GradientStop, GradientUnits, Image, Line,
    LinearGradient, Path, PointList, RadialGradient, Rect, StyleSheet, Text,
};
pub use properties::{AttributeClass, STYLE_PROPERTIES, classify, is_style_property};
pub use registry::{AttributeSource, Constructor, resolve};

/// Map of plain attribute names to raw values.
pub type AttributesMap = HashMap<String, String>;

/// Map of style property names to raw values.
pub type StyleMap = HashMap<String, String>;

/// A type-safe index into the document tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct NodeId(pub usize);

impl NodeId {
    /// The root `<svg>` node is always at index 0.
    pub const ROOT: Self = Self(0);
}

/// Errors from structural tree mutation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TreeError {
    /// The node does not exist in this tree.
    #[error("node {0:?} does not exist")]
    UnknownNode(NodeId),
    /// Only container kinds own children.
    #[error("<{tag}> cannot have children")]
    NotAContainer {
        /// Tag name of the would-be parent.
        tag: &'static str,
    },
    /// The child is the parent itself or one of its ancestors.
    #[error("appending {child:?} under {parent:?} would create a cycle")]
    WouldCycle {
        /// The would-be parent.
        parent: NodeId,
        /// The node that encloses `parent`.
        child: NodeId,
    },
    /// The node is not a child of the given parent.
    #[error("node {child:?} is not a child of {parent:?}")]
    NotAChild {
        /// The parent that was searched.
        parent: NodeId,
        /// The node that was not found.
        child: NodeId,
    },
}

/// One element of the scene graph.
///
/// A node's kind is fixed at construction. Attributes understood by the kind
/// are mirrored into its typed fields by [`Node::set_attribute`], so the two
/// never disagree. Style properties are kept apart from plain attributes.
#[derive(Debug, Clone)]
pub struct Node {
    kind: ElementKind,
    attributes: AttributesMap,
    style: StyleMap,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

impl Node {
    /// Create a detached node, seeding its attributes from the kind's typed fields.
    #[must_use]
    pub fn new(kind: ElementKind) -> Self {
        let attributes = kind
            .typed_attributes()
            .into_iter()
            .map(|(name, value)| (name.to_string(), value))
            .collect();
        Self {
            kind,
            attributes,
            style: StyleMap::new(),
            parent: None,
            children: Vec::new(),
        }
    }

    /// The markup tag name.
    #[must_use]
    pub const fn tag_name(&self) -> &'static str {
        self.kind.tag_name()
    }

    /// The element kind with its typed data.
    #[must_use]
    pub const fn kind(&self) -> &ElementKind {
        &self.kind
    }

    /// Whether this node may own children.
    #[must_use]
    pub const fn is_container(&self) -> bool {
        self.kind.is_container()
    }

    /// The parent node, `None` for the root or a detached node.
    #[must_use]
    pub const fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    /// Children in document order. Always empty for leaf kinds.
    #[must_use]
    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    /// All plain attributes.
    #[must_use]
    pub const fn attributes(&self) -> &AttributesMap {
        &self.attributes
    }

    /// A plain attribute value.
    #[must_use]
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    /// Set an attribute, routed by [`classify`].
    ///
    /// Style property names go to the node's style, so a plain attribute
    /// never shares a name with a presentation attribute. Plain attributes
    /// update the typed field that backs them. The `style` attribute itself
    /// is not stored; its declarations are applied with
    /// `vellum_style::apply_style_text`.
    pub fn set_attribute(&mut self, name: &str, value: &str) {
        match classify(name) {
            AttributeClass::Style => self.set_style(name, value),
            AttributeClass::Plain => {
                self.kind.sync_attribute(name, Some(value));
                let _ = self.attributes.insert(name.to_string(), value.to_string());
            }
            AttributeClass::Ignored => {}
        }
    }

    /// Remove a plain attribute, clearing the typed field that backs it.
    pub fn remove_attribute(&mut self, name: &str) -> Option<String> {
        self.kind.sync_attribute(name, None);
        self.attributes.remove(name)
    }

    /// This node's own style declarations, without inheritance.
    #[must_use]
    pub const fn styles(&self) -> &StyleMap {
        &self.style
    }

    /// This node's own value for style property `name`.
    #[must_use]
    pub fn style(&self, name: &str) -> Option<&str> {
        self.style.get(name).map(String::as_str)
    }

    /// Set style property `name` on this node.
    pub fn set_style(&mut self, name: &str, value: &str) {
        let _ = self.style.insert(name.to_string(), value.to_string());
    }

    /// Remove style property `name` from this node.
    pub fn remove_style(&mut self, name: &str) -> Option<String> {
        self.style.remove(name)
    }

    /// Replace the character data of a `<text>` or `<style>` node.
    ///
    /// Returns `false` for kinds without character data.
    pub fn set_text_content(&mut self, content: &str) -> bool {
        match &mut self.kind {
            ElementKind::Text(text) => text.content = content.to_string(),
            ElementKind::StyleSheet(sheet) => sheet.css = content.to_string(),
            _ => return false,
        }
        true
    }
}

/// Arena-based scene graph with O(1) node access.
///
/// The root `<svg>` node lives at [`NodeId::ROOT`]. Nodes removed from their
/// parent stay allocated but are unreachable from the root; a removed
/// subtree never outlives the tree that holds the arena.
#[derive(Debug, Clone)]
pub struct DocumentTree {
    nodes: Vec<Node>,
}

impl DocumentTree {
    /// Create a tree holding only the root `<svg>` node.
    #[must_use]
    pub fn new() -> Self {
        Self {
            nodes: vec![Node::new(ElementKind::Document)],
        }
    }

    /// The root node ID.
    #[must_use]
    pub const fn root(&self) -> NodeId {
        NodeId::ROOT
    }

    /// Get a node by its ID.
    #[must_use]
    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.0)
    }

    /// Get a mutable reference to a node by its ID.
    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.nodes.get_mut(id.0)
    }

    /// Number of allocated nodes, including detached ones.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Always `false`: the root is allocated at construction.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Allocate a detached node and return its ID.
    pub fn alloc(&mut self, node: Node) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(node);
        id
    }

    /// Append `child` as the last child of `parent`.
    ///
    /// A child that already has a parent is moved.
    ///
    /// # Errors
    ///
    /// Fails if either node is unknown, `parent` is a leaf kind, or `child`
    /// is `parent` or one of its ancestors.
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) -> Result<(), TreeError> {
        let parent_node = self.get(parent).ok_or(TreeError::UnknownNode(parent))?;
        if !parent_node.is_container() {
            return Err(TreeError::NotAContainer {
                tag: parent_node.tag_name(),
            });
        }
        let previous = self.get(child).ok_or(TreeError::UnknownNode(child))?.parent;
        if child == parent || self.ancestors(parent).any(|id| id == child) {
            return Err(TreeError::WouldCycle { parent, child });
        }
        if let Some(previous) = previous {
            self.remove_child(previous, child)?;
        }
        self.nodes[child.0].parent = Some(parent);
        self.nodes[parent.0].children.push(child);
        Ok(())
    }

    /// Detach `child` (and with it its subtree) from `parent`.
    ///
    /// # Errors
    ///
    /// Fails if `parent` is unknown or `child` is not one of its children.
    pub fn remove_child(&mut self, parent: NodeId, child: NodeId) -> Result<(), TreeError> {
        let parent_node = self.nodes.get_mut(parent.0).ok_or(TreeError::UnknownNode(parent))?;
        let position = parent_node
            .children
            .iter()
            .position(|&id| id == child)
            .ok_or(TreeError::NotAChild { parent, child })?;
        let _ = parent_node.children.remove(position);
        self.nodes[child.0].parent = None;
        Ok(())
    }

    /// Get the parent of a node.
    #[must_use]
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.get(id).and_then(Node::parent)
    }

    /// Get all children of a node, in document order.
    #[must_use]
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.get(id).map(Node::children).unwrap_or(&[])
    }

    /// Iterate over all ancestors of a node, from parent to root.
    #[must_use]
    pub fn ancestors(&self, id: NodeId) -> AncestorIterator<'_> {
        AncestorIterator {
            tree: self,
            current: self.parent(id),
        }
    }

    /// Iterate over `id` and its descendants in pre-order (document order).
    #[must_use]
    pub fn descendants(&self, id: NodeId) -> DescendantIterator<'_> {
        DescendantIterator {
            tree: self,
            stack: if self.get(id).is_some() { vec![id] } else { Vec::new() },
        }
    }

    /// The `<stop>` children of a gradient, in authored order.
    ///
    /// Empty when `id` is not a gradient.
    #[must_use]
    pub fn gradient_stops(&self, id: NodeId) -> Vec<NodeId> {
        if !self.get(id).is_some_and(|n| n.kind().is_gradient()) {
            return Vec::new();
        }
        self.children(id)
            .iter()
            .copied()
            .filter(|&c| matches!(self.get(c).map(Node::kind), Some(ElementKind::GradientStop(_))))
            .collect()
    }

    /// The first node reachable from the root whose `id` attribute equals `element_id`.
    #[must_use]
    pub fn find_by_id(&self, element_id: &str) -> Option<NodeId> {
        self.descendants(NodeId::ROOT)
            .find(|&id| self.get(id).and_then(|n| n.attribute("id")) == Some(element_id))
    }
}

impl Default for DocumentTree {
    fn default() -> Self {
        Self::new()
    }
}

/// Iterator over ancestors of a node.
pub struct AncestorIterator<'a> {
    tree: &'a DocumentTree,
    current: Option<NodeId>,
}

impl Iterator for AncestorIterator<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.current?;
        self.current = self.tree.parent(id);
        Some(id)
    }
}

/// Pre-order iterator over a subtree.
pub struct DescendantIterator<'a> {
    tree: &'a DocumentTree,
    stack: Vec<NodeId>,
}

impl Iterator for DescendantIterator<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.stack.pop()?;
        self.stack.extend(self.tree.children(id).iter().rev());
        Some(id)
    }
}
