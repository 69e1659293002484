//! Tag name to element kind registry.
//!
//! The registry is a fixed table from markup tag name to a constructor that
//! builds a default instance of the kind from a raw attribute source. Adding
//! an element kind means adding one row here plus the kind itself; callers
//! only ever go through [`resolve`].

use crate::kind::{
    Circle, Coordinate, ElementKind, Ellipse, GradientStop, Image, Line, LinearGradient, Path,
    PointList, RadialGradient, Rect, StyleSheet, Text,
};
use vellum_common::parse_number;

/// Read access to the raw attributes of a markup element.
///
/// Names may be namespace-qualified (`xlink:href`).
pub trait AttributeSource {
    /// The raw value of attribute `name`, if present.
    fn attribute(&self, name: &str) -> Option<&str>;

    /// The concatenated character data of the element.
    fn text_content(&self) -> String;
}

/// Builds a default instance of an element kind from its raw attributes.
pub type Constructor = fn(&dyn AttributeSource) -> ElementKind;

/// Registered tag names, in lookup order.
static NODE_TYPES: &[(&str, Constructor)] = &[
    ("svg", construct_document),
    ("g", construct_group),
    ("defs", construct_definitions),
    ("style", construct_style_sheet),
    ("linearGradient", construct_linear_gradient),
    ("radialGradient", construct_radial_gradient),
    ("stop", construct_gradient_stop),
    ("rect", construct_rect),
    ("circle", construct_circle),
    ("ellipse", construct_ellipse),
    ("line", construct_line),
    ("polygon", construct_polygon),
    ("polyline", construct_polyline),
    ("path", construct_path),
    ("text", construct_text),
    ("image", construct_image),
];

/// Look up the constructor registered for `tag_name`.
///
/// Tag names are case-sensitive, as in XML. `None` means the element is of
/// an unknown type and should be skipped by the caller.
#[must_use]
pub fn resolve(tag_name: &str) -> Option<Constructor> {
    NODE_TYPES
        .iter()
        .find(|(tag, _)| *tag == tag_name)
        .map(|&(_, construct)| construct)
}

/// Iterate over every registered tag name.
pub fn registered_tags() -> impl Iterator<Item = &'static str> {
    NODE_TYPES.iter().map(|&(tag, _)| tag)
}

fn number(source: &dyn AttributeSource, name: &str) -> Option<f64> {
    source.attribute(name).map(parse_number)
}

fn coordinate(source: &dyn AttributeSource, name: &str) -> Option<Coordinate> {
    source.attribute(name).map(Coordinate::parse)
}

fn construct_document(_: &dyn AttributeSource) -> ElementKind {
    ElementKind::Document
}

fn construct_group(_: &dyn AttributeSource) -> ElementKind {
    ElementKind::Group
}

fn construct_definitions(_: &dyn AttributeSource) -> ElementKind {
    ElementKind::Definitions
}

fn construct_style_sheet(source: &dyn AttributeSource) -> ElementKind {
    ElementKind::StyleSheet(StyleSheet {
        css: source.text_content(),
    })
}

fn construct_linear_gradient(source: &dyn AttributeSource) -> ElementKind {
    let mut kind = ElementKind::LinearGradient(LinearGradient {
        x1: coordinate(source, "x1"),
        y1: coordinate(source, "y1"),
        x2: coordinate(source, "x2"),
        y2: coordinate(source, "y2"),
        gradient_units: None,
    });
    kind.sync_attribute("gradientUnits", source.attribute("gradientUnits"));
    kind
}

fn construct_radial_gradient(source: &dyn AttributeSource) -> ElementKind {
    let mut kind = ElementKind::RadialGradient(RadialGradient {
        cx: coordinate(source, "cx"),
        cy: coordinate(source, "cy"),
        r: coordinate(source, "r"),
        fx: coordinate(source, "fx"),
        fy: coordinate(source, "fy"),
        gradient_units: None,
    });
    kind.sync_attribute("gradientUnits", source.attribute("gradientUnits"));
    kind
}

fn construct_gradient_stop(source: &dyn AttributeSource) -> ElementKind {
    ElementKind::GradientStop(GradientStop {
        offset: coordinate(source, "offset").map(Coordinate::fraction),
    })
}

fn construct_rect(source: &dyn AttributeSource) -> ElementKind {
    ElementKind::Rect(Rect {
        x: number(source, "x"),
        y: number(source, "y"),
        width: number(source, "width"),
        height: number(source, "height"),
        rx: number(source, "rx"),
        ry: number(source, "ry"),
    })
}

fn construct_circle(source: &dyn AttributeSource) -> ElementKind {
    ElementKind::Circle(Circle {
        cx: number(source, "cx"),
        cy: number(source, "cy"),
        r: number(source, "r"),
    })
}

fn construct_ellipse(source: &dyn AttributeSource) -> ElementKind {
    ElementKind::Ellipse(Ellipse {
        cx: number(source, "cx"),
        cy: number(source, "cy"),
        rx: number(source, "rx"),
        ry: number(source, "ry"),
    })
}

fn construct_line(source: &dyn AttributeSource) -> ElementKind {
    ElementKind::Line(Line {
        x1: number(source, "x1"),
        y1: number(source, "y1"),
        x2: number(source, "x2"),
        y2: number(source, "y2"),
    })
}

fn points(source: &dyn AttributeSource) -> PointList {
    source.attribute("points").map(PointList::parse).unwrap_or_default()
}

fn construct_polygon(source: &dyn AttributeSource) -> ElementKind {
    ElementKind::Polygon(points(source))
}

fn construct_polyline(source: &dyn AttributeSource) -> ElementKind {
    ElementKind::Polyline(points(source))
}

fn construct_path(source: &dyn AttributeSource) -> ElementKind {
    ElementKind::Path(Path {
        d: source.attribute("d").map(str::to_string),
    })
}

fn construct_text(source: &dyn AttributeSource) -> ElementKind {
    ElementKind::Text(Text {
        x: number(source, "x"),
        y: number(source, "y"),
        content: source.text_content(),
    })
}

fn construct_image(source: &dyn AttributeSource) -> ElementKind {
    ElementKind::Image(Image {
        x: number(source, "x"),
        y: number(source, "y"),
        width: number(source, "width"),
        height: number(source, "height"),
        href: source.attribute("href").map(str::to_string),
        xlink_href: source.attribute("xlink:href").map(str::to_string),
    })
}
