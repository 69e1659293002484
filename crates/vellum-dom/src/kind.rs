//! Concrete element kinds and their typed attribute data.
//!
//! Every kind keeps the attributes it understands in typed form. A field is
//! `None` when the attribute is absent, which lets a node seed its raw
//! attribute map with exactly the attributes its kind was given.

use std::fmt;
use std::str::FromStr;

use strum_macros::{AsRefStr, Display, EnumString};
use vellum_common::{parse_number, parse_number_list};

/// The `gradientUnits` mode of a gradient definition.
///
/// [SVG 1.1 § 13.2.2](https://www.w3.org/TR/SVG11/pservers.html#LinearGradientElementGradientUnitsAttribute)
/// "If attribute gradientUnits is not specified, then the effect is as if a
/// value of 'objectBoundingBox' were specified."
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumString, AsRefStr)]
pub enum GradientUnits {
    /// Coordinates are in the user space of the element referencing the gradient.
    #[strum(serialize = "userSpaceOnUse")]
    UserSpaceOnUse,
    /// Coordinates are fractions of the referencing element's bounding box.
    #[default]
    #[strum(serialize = "objectBoundingBox")]
    ObjectBoundingBox,
}

/// A gradient coordinate: a plain number or a percentage.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Coordinate {
    /// A unitless user-space or bounding-box value.
    Number(f64),
    /// A percentage, stored as written (`50%` is `Percent(50.0)`).
    Percent(f64),
}

impl Coordinate {
    /// Parse best-effort; a trailing `%` selects [`Coordinate::Percent`].
    #[must_use]
    pub fn parse(value: &str) -> Self {
        let value = value.trim();
        value
            .strip_suffix('%')
            .map_or_else(|| Self::Number(parse_number(value)), |v| Self::Percent(parse_number(v)))
    }

    /// The value as a fraction, percentages divided by 100.
    #[must_use]
    pub fn fraction(self) -> f64 {
        match self {
            Self::Number(n) => n,
            Self::Percent(p) => p / 100.0,
        }
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Percent(p) => write!(f, "{p}%"),
        }
    }
}

/// `<rect>`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Rect {
    /// `x`
    pub x: Option<f64>,
    /// `y`
    pub y: Option<f64>,
    /// `width`
    pub width: Option<f64>,
    /// `height`
    pub height: Option<f64>,
    /// `rx`
    pub rx: Option<f64>,
    /// `ry`
    pub ry: Option<f64>,
}

impl Rect {
    /// A rectangle without rounded corners.
    #[must_use]
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x: Some(x),
            y: Some(y),
            width: Some(width),
            height: Some(height),
            rx: None,
            ry: None,
        }
    }
}

/// `<circle>`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Circle {
    /// `cx`
    pub cx: Option<f64>,
    /// `cy`
    pub cy: Option<f64>,
    /// `r`
    pub r: Option<f64>,
}

impl Circle {
    /// A circle centered at `(cx, cy)`.
    #[must_use]
    pub const fn new(cx: f64, cy: f64, r: f64) -> Self {
        Self {
            cx: Some(cx),
            cy: Some(cy),
            r: Some(r),
        }
    }
}

/// `<ellipse>`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Ellipse {
    /// `cx`
    pub cx: Option<f64>,
    /// `cy`
    pub cy: Option<f64>,
    /// `rx`
    pub rx: Option<f64>,
    /// `ry`
    pub ry: Option<f64>,
}

/// `<line>`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Line {
    /// `x1`
    pub x1: Option<f64>,
    /// `y1`
    pub y1: Option<f64>,
    /// `x2`
    pub x2: Option<f64>,
    /// `y2`
    pub y2: Option<f64>,
}

/// The `points` list shared by `<polygon>` and `<polyline>`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PointList {
    /// Coordinate pairs in authored order.
    pub points: Vec<(f64, f64)>,
}

impl PointList {
    /// Parse a `points` attribute. A trailing unpaired coordinate is dropped.
    #[must_use]
    pub fn parse(value: &str) -> Self {
        let numbers = parse_number_list(value);
        Self {
            points: numbers.chunks_exact(2).map(|pair| (pair[0], pair[1])).collect(),
        }
    }

    fn to_attribute(&self) -> String {
        self.points
            .iter()
            .map(|(x, y)| format!("{x},{y}"))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// `<path>`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Path {
    /// Path data, kept as authored.
    pub d: Option<String>,
}

/// `<text>`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Text {
    /// `x`
    pub x: Option<f64>,
    /// `y`
    pub y: Option<f64>,
    /// Character data of the element.
    pub content: String,
}

/// `<image>`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Image {
    /// `x`
    pub x: Option<f64>,
    /// `y`
    pub y: Option<f64>,
    /// `width`
    pub width: Option<f64>,
    /// `height`
    pub height: Option<f64>,
    /// `href`
    pub href: Option<String>,
    /// `xlink:href`
    pub xlink_href: Option<String>,
}

impl Image {
    /// The referenced resource. `href` takes precedence over `xlink:href`.
    #[must_use]
    pub fn href(&self) -> Option<&str> {
        self.href.as_deref().or(self.xlink_href.as_deref())
    }
}

/// `<linearGradient>`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LinearGradient {
    /// `x1`
    pub x1: Option<Coordinate>,
    /// `y1`
    pub y1: Option<Coordinate>,
    /// `x2`
    pub x2: Option<Coordinate>,
    /// `y2`
    pub y2: Option<Coordinate>,
    /// `gradientUnits`
    pub gradient_units: Option<GradientUnits>,
}

/// `<radialGradient>`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RadialGradient {
    /// `cx`
    pub cx: Option<Coordinate>,
    /// `cy`
    pub cy: Option<Coordinate>,
    /// `r`
    pub r: Option<Coordinate>,
    /// `fx`
    pub fx: Option<Coordinate>,
    /// `fy`
    pub fy: Option<Coordinate>,
    /// `gradientUnits`
    pub gradient_units: Option<GradientUnits>,
}

/// `<stop>`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GradientStop {
    /// `offset` as a fraction; `50%` is stored as `0.5`.
    pub offset: Option<f64>,
}

impl GradientStop {
    /// A stop at the given fractional offset.
    #[must_use]
    pub const fn new(offset: f64) -> Self {
        Self { offset: Some(offset) }
    }

    /// The stop offset, `0` when absent.
    #[must_use]
    pub fn offset(&self) -> f64 {
        self.offset.unwrap_or_default()
    }
}

/// `<style>`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StyleSheet {
    /// The CSS text held by the element.
    pub css: String,
}

/// Every element kind the document model knows how to hold.
#[derive(Debug, Clone, PartialEq)]
pub enum ElementKind {
    /// `<svg>`, the document root.
    Document,
    /// `<g>`
    Group,
    /// `<defs>`
    Definitions,
    /// `<style>`
    StyleSheet(StyleSheet),
    /// `<linearGradient>`
    LinearGradient(LinearGradient),
    /// `<radialGradient>`
    RadialGradient(RadialGradient),
    /// `<stop>`
    GradientStop(GradientStop),
    /// `<rect>`
    Rect(Rect),
    /// `<circle>`
    Circle(Circle),
    /// `<ellipse>`
    Ellipse(Ellipse),
    /// `<line>`
    Line(Line),
    /// `<polygon>`
    Polygon(PointList),
    /// `<polyline>`
    Polyline(PointList),
    /// `<path>`
    Path(Path),
    /// `<text>`
    Text(Text),
    /// `<image>`
    Image(Image),
}

impl ElementKind {
    /// The markup tag name of this kind.
    #[must_use]
    pub const fn tag_name(&self) -> &'static str {
        match self {
            Self::Document => "svg",
            Self::Group => "g",
            Self::Definitions => "defs",
            Self::StyleSheet(_) => "style",
            Self::LinearGradient(_) => "linearGradient",
            Self::RadialGradient(_) => "radialGradient",
            Self::GradientStop(_) => "stop",
            Self::Rect(_) => "rect",
            Self::Circle(_) => "circle",
            Self::Ellipse(_) => "ellipse",
            Self::Line(_) => "line",
            Self::Polygon(_) => "polygon",
            Self::Polyline(_) => "polyline",
            Self::Path(_) => "path",
            Self::Text(_) => "text",
            Self::Image(_) => "image",
        }
    }

    /// Whether nodes of this kind own an ordered child sequence.
    #[must_use]
    pub const fn is_container(&self) -> bool {
        matches!(
            self,
            Self::Document
                | Self::Group
                | Self::Definitions
                | Self::StyleSheet(_)
                | Self::LinearGradient(_)
                | Self::RadialGradient(_)
        )
    }

    /// Whether this kind defines a paint server.
    #[must_use]
    pub const fn is_gradient(&self) -> bool {
        matches!(self, Self::LinearGradient(_) | Self::RadialGradient(_))
    }

    /// The raw attributes this kind's typed fields currently describe.
    pub(crate) fn typed_attributes(&self) -> Vec<(&'static str, String)> {
        fn push<T: ToString>(out: &mut Vec<(&'static str, String)>, name: &'static str, value: Option<&T>) {
            if let Some(value) = value {
                out.push((name, value.to_string()));
            }
        }

        let mut out = Vec::new();
        match self {
            Self::Document | Self::Group | Self::Definitions | Self::StyleSheet(_) => {}
            Self::LinearGradient(g) => {
                push(&mut out, "x1", g.x1.as_ref());
                push(&mut out, "y1", g.y1.as_ref());
                push(&mut out, "x2", g.x2.as_ref());
                push(&mut out, "y2", g.y2.as_ref());
                push(&mut out, "gradientUnits", g.gradient_units.as_ref());
            }
            Self::RadialGradient(g) => {
                push(&mut out, "cx", g.cx.as_ref());
                push(&mut out, "cy", g.cy.as_ref());
                push(&mut out, "r", g.r.as_ref());
                push(&mut out, "fx", g.fx.as_ref());
                push(&mut out, "fy", g.fy.as_ref());
                push(&mut out, "gradientUnits", g.gradient_units.as_ref());
            }
            Self::GradientStop(s) => push(&mut out, "offset", s.offset.as_ref()),
            Self::Rect(r) => {
                push(&mut out, "x", r.x.as_ref());
                push(&mut out, "y", r.y.as_ref());
                push(&mut out, "width", r.width.as_ref());
                push(&mut out, "height", r.height.as_ref());
                push(&mut out, "rx", r.rx.as_ref());
                push(&mut out, "ry", r.ry.as_ref());
            }
            Self::Circle(c) => {
                push(&mut out, "cx", c.cx.as_ref());
                push(&mut out, "cy", c.cy.as_ref());
                push(&mut out, "r", c.r.as_ref());
            }
            Self::Ellipse(e) => {
                push(&mut out, "cx", e.cx.as_ref());
                push(&mut out, "cy", e.cy.as_ref());
                push(&mut out, "rx", e.rx.as_ref());
                push(&mut out, "ry", e.ry.as_ref());
            }
            Self::Line(l) => {
                push(&mut out, "x1", l.x1.as_ref());
                push(&mut out, "y1", l.y1.as_ref());
                push(&mut out, "x2", l.x2.as_ref());
                push(&mut out, "y2", l.y2.as_ref());
            }
            Self::Polygon(p) | Self::Polyline(p) => {
                if !p.points.is_empty() {
                    out.push(("points", p.to_attribute()));
                }
            }
            Self::Path(p) => push(&mut out, "d", p.d.as_ref()),
            Self::Text(t) => {
                push(&mut out, "x", t.x.as_ref());
                push(&mut out, "y", t.y.as_ref());
            }
            Self::Image(i) => {
                push(&mut out, "x", i.x.as_ref());
                push(&mut out, "y", i.y.as_ref());
                push(&mut out, "width", i.width.as_ref());
                push(&mut out, "height", i.height.as_ref());
                push(&mut out, "href", i.href.as_ref());
                push(&mut out, "xlink:href", i.xlink_href.as_ref());
            }
        }
        out
    }

    /// Update the typed field backing `name`, if this kind has one.
    ///
    /// `None` clears the field (the attribute was removed).
    pub(crate) fn sync_attribute(&mut self, name: &str, value: Option<&str>) {
        let number = || value.map(parse_number);
        let coordinate = || value.map(Coordinate::parse);
        let text = || value.map(str::to_string);

        match self {
            Self::Document | Self::Group | Self::Definitions | Self::StyleSheet(_) => {}
            Self::LinearGradient(g) => match name {
                "x1" => g.x1 = coordinate(),
                "y1" => g.y1 = coordinate(),
                "x2" => g.x2 = coordinate(),
                "y2" => g.y2 = coordinate(),
                "gradientUnits" => g.gradient_units = parse_units(value),
                _ => {}
            },
            Self::RadialGradient(g) => match name {
                "cx" => g.cx = coordinate(),
                "cy" => g.cy = coordinate(),
                "r" => g.r = coordinate(),
                "fx" => g.fx = coordinate(),
                "fy" => g.fy = coordinate(),
                "gradientUnits" => g.gradient_units = parse_units(value),
                _ => {}
            },
            Self::GradientStop(s) => {
                if name == "offset" {
                    s.offset = coordinate().map(Coordinate::fraction);
                }
            }
            Self::Rect(r) => match name {
                "x" => r.x = number(),
                "y" => r.y = number(),
                "width" => r.width = number(),
                "height" => r.height = number(),
                "rx" => r.rx = number(),
                "ry" => r.ry = number(),
                _ => {}
            },
            Self::Circle(c) => match name {
                "cx" => c.cx = number(),
                "cy" => c.cy = number(),
                "r" => c.r = number(),
                _ => {}
            },
            Self::Ellipse(e) => match name {
                "cx" => e.cx = number(),
                "cy" => e.cy = number(),
                "rx" => e.rx = number(),
                "ry" => e.ry = number(),
                _ => {}
            },
            Self::Line(l) => match name {
                "x1" => l.x1 = number(),
                "y1" => l.y1 = number(),
                "x2" => l.x2 = number(),
                "y2" => l.y2 = number(),
                _ => {}
            },
            Self::Polygon(p) | Self::Polyline(p) => {
                if name == "points" {
                    *p = value.map(PointList::parse).unwrap_or_default();
                }
            }
            Self::Path(p) => {
                if name == "d" {
                    p.d = text();
                }
            }
            Self::Text(t) => match name {
                "x" => t.x = number(),
                "y" => t.y = number(),
                _ => {}
            },
            Self::Image(i) => match name {
                "x" => i.x = number(),
                "y" => i.y = number(),
                "width" => i.width = number(),
                "height" => i.height = number(),
                "href" => i.href = text(),
                "xlink:href" => i.xlink_href = text(),
                _ => {}
            },
        }
    }
}

/// Unrecognized `gradientUnits` values fall back to the default mode.
fn parse_units(value: Option<&str>) -> Option<GradientUnits> {
    value.map(|v| GradientUnits::from_str(v.trim()).unwrap_or_default())
}
