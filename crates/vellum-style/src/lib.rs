//! Style classification and resolution for the Vellum document model.
//!
//! # Scope
//!
//! This crate implements:
//! - **Attribute Classifier** - decides whether a markup attribute is a
//!   presentation attribute ([SVG 1.1 § 6.4](https://www.w3.org/TR/SVG11/styling.html#UsingPresentationAttributes))
//! - **Declaration Parsing** - the `style` attribute's `property: value` list
//! - **Style Resolution** - presentation attributes first, `style` text second
//! - **Computed Style Lookup** - local value, falling back to ancestors
//!
//! # Not Yet Implemented
//!
//! - Selector matching for `<style>` sheets
//! - Value validation per property

pub mod declarations;
pub mod resolver;

pub use declarations::{Declaration, parse_declarations};
pub use vellum_dom::properties::{AttributeClass, STYLE_PROPERTIES, classify, is_style_property};
pub use resolver::{apply_attribute, apply_style_text, computed_style, is_default_scope, set_property};
