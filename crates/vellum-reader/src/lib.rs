//! Document building for the Vellum document model.
//!
//! # Scope
//!
//! This crate implements:
//! - **Markup Interface** - [`MarkupElement`], the already-parsed element tree
//!   a document is built from, with an owned [`MarkupNode`] implementation
//! - **XML Input** - a [`MarkupElement`] implementation over `roxmltree`
//! - **Document Builder** - [`SvgReader`], which walks a markup tree, creates
//!   nodes through the type registry and resolves their attributes and styles
//!
//! # Not Yet Implemented
//!
//! - `<use>` reference expansion
//! - Applying `<style>` sheet rules

pub mod markup;
mod reader;
mod xml;

use thiserror::Error;
use vellum_dom::TreeError;

pub use markup::{MarkupAttribute, MarkupElement, MarkupNode};
pub use reader::SvgReader;

/// Errors that stop a document from being built.
#[derive(Debug, Error)]
pub enum ReadError {
    /// The root element is not `<svg>`.
    #[error("expected <svg> root element, found <{found}>")]
    UnexpectedRoot {
        /// Tag name of the rejected root.
        found: String,
    },
    /// The XML text could not be parsed.
    #[error("malformed XML: {0}")]
    Xml(#[from] roxmltree::Error),
    /// A structural tree operation failed.
    #[error(transparent)]
    Tree(#[from] TreeError),
}
