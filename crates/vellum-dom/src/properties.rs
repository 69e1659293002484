//! The presentation attribute vocabulary.
//!
//! [SVG 1.1 § 6.4 Specifying properties using the presentation attributes](https://www.w3.org/TR/SVG11/styling.html#UsingPresentationAttributes)
//!
//! "For each styling property defined in this specification, there is a
//! corresponding XML attribute (the presentation attribute) with the same
//! name that is available on all relevant SVG elements."

use strum_macros::Display;

/// Attribute names interpreted as style properties rather than plain attributes.
///
/// Documents that style through presentation attributes depend on this exact
/// set, so entries are kept as published, including `alignment-base`.
pub const STYLE_PROPERTIES: &[&str] = &[
    // font properties
    "font",
    "font-family",
    "font-size",
    "font-size-adjust",
    "font-stretch",
    "font-style",
    "font-variant",
    "font-weight",
    // text properties
    "direction",
    "letter-spacing",
    "word-spacing",
    "text-decoration",
    "unicode-bidi",
    // other properties for visual media
    "clip",
    "color",
    "cursor",
    "display",
    "overflow",
    "visibility",
    // clipping, masking and compositing properties
    "clip-path",
    "clip-rule",
    "mask",
    "opacity",
    // filter effects properties
    "enable-background",
    "filter",
    "flood-color",
    "flood-opacity",
    "lighting-color",
    // gradient properties
    "stop-color",
    "stop-opacity",
    // interactivity properties
    "pointer-events",
    // color and painting properties
    "color-interpolation",
    "color-interpolation-filters",
    "color-profile",
    "color-rendering",
    "fill",
    "fill-opacity",
    "fill-rule",
    "image-rendering",
    "marker",
    "marker-end",
    "marker-mid",
    "marker-start",
    "shape-rendering",
    "stroke",
    "stroke-dasharray",
    "stroke-dashoffset",
    "stroke-linecap",
    "stroke-linejoin",
    "stroke-miterlimit",
    "stroke-opacity",
    "stroke-width",
    "text-rendering",
    // text properties
    "alignment-base",
    "baseline-shift",
    "dominant-baseline",
    "glyph-orientation-horizontal",
    "glyph-orientation-vertical",
    "kerning",
    "text-anchor",
    "writing-mode",
];

/// How an attribute name is routed when applied to a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum AttributeClass {
    /// A presentation attribute; stored in the node's style.
    #[strum(serialize = "style")]
    Style,
    /// Stored as a plain attribute.
    #[strum(serialize = "plain")]
    Plain,
    /// Not applied per attribute (the `style` attribute itself).
    #[strum(serialize = "ignored")]
    Ignored,
}

/// Classify an attribute name. Matching is exact and case-sensitive.
#[must_use]
pub fn classify(name: &str) -> AttributeClass {
    if name == "style" {
        AttributeClass::Ignored
    } else if is_style_property(name) {
        AttributeClass::Style
    } else {
        AttributeClass::Plain
    }
}

/// Whether `name` is in [`STYLE_PROPERTIES`].
#[must_use]
pub fn is_style_property(name: &str) -> bool {
    STYLE_PROPERTIES.contains(&name)
}
