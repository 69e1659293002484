//! The document: a node tree plus its resolved pixel dimensions.

use crate::{DocumentTree, NodeId};

/// A built SVG document.
///
/// The dimensions are resolved once when the document is created and cannot
/// change afterwards. A zero width or height is a valid document; callers
/// decide what a zero-sized image means for them.
#[derive(Debug, Clone)]
pub struct Document {
    width: f64,
    height: f64,
    tree: DocumentTree,
}

impl Document {
    /// Create an empty document of the given size.
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            tree: DocumentTree::new(),
        }
    }

    /// Resolved document width in pixels.
    #[must_use]
    pub const fn width(&self) -> f64 {
        self.width
    }

    /// Resolved document height in pixels.
    #[must_use]
    pub const fn height(&self) -> f64 {
        self.height
    }

    /// The root `<svg>` node.
    #[must_use]
    pub const fn root(&self) -> NodeId {
        NodeId::ROOT
    }

    /// The node tree.
    #[must_use]
    pub const fn tree(&self) -> &DocumentTree {
        &self.tree
    }

    /// The node tree, for mutation.
    pub const fn tree_mut(&mut self) -> &mut DocumentTree {
        &mut self.tree
    }
}
