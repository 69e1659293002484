//! Render sinks and the recording display list.

use vellum_dom::{DocumentTree, Node, NodeId};
use vellum_style::computed_style;

use crate::instruction::{DrawInstruction, Params, ShapeKind};

/// A handle to the node behind a draw call.
///
/// Sinks use it to resolve paint properties (`fill`, `stroke`, `opacity`, ...)
/// only when they need them.
#[derive(Debug, Clone, Copy)]
pub struct NodeRef<'a> {
    tree: &'a DocumentTree,
    id: NodeId,
}

impl<'a> NodeRef<'a> {
    pub(crate) const fn new(tree: &'a DocumentTree, id: NodeId) -> Self {
        Self { tree, id }
    }

    /// The node's ID.
    #[must_use]
    pub const fn id(&self) -> NodeId {
        self.id
    }

    /// The node itself.
    #[must_use]
    pub fn node(&self) -> Option<&'a Node> {
        self.tree.get(self.id)
    }

    /// The node's computed value for `property`, inheriting from ancestors.
    #[must_use]
    pub fn computed_style(&self, property: &str) -> Option<&'a str> {
        computed_style(self.tree, self.id, property)
    }
}

/// The consumer of draw calls, typically a pixel backend.
pub trait RenderSink {
    /// Draw one shape. Called once per visible node, in painting order.
    fn render(&mut self, kind: ShapeKind, params: Params, node: NodeRef<'_>);
}

/// A sink that records every draw call in order.
#[derive(Debug, Clone, Default)]
pub struct DisplayList {
    instructions: Vec<DrawInstruction>,
}

impl DisplayList {
    /// Create an empty display list.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            instructions: Vec::new(),
        }
    }

    /// Record an instruction.
    pub fn push(&mut self, instruction: DrawInstruction) {
        self.instructions.push(instruction);
    }

    /// Instructions in painting order.
    #[must_use]
    pub fn instructions(&self) -> &[DrawInstruction] {
        &self.instructions
    }

    /// Number of recorded instructions.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.instructions.len()
    }

    /// Whether nothing was recorded.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.instructions.is_empty()
    }
}

impl RenderSink for DisplayList {
    fn render(&mut self, kind: ShapeKind, params: Params, node: NodeRef<'_>) {
        self.push(DrawInstruction {
            kind,
            params,
            node: node.id(),
        });
    }
}
