//! Semantic draw instructions.

use std::collections::BTreeMap;

use serde::Serialize;
use strum_macros::Display;
use vellum_dom::NodeId;

/// The kind of shape a draw instruction describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ShapeKind {
    /// `<rect>`
    Rect,
    /// `<circle>`
    Circle,
    /// `<ellipse>`
    Ellipse,
    /// `<line>`
    Line,
    /// `<polygon>`
    Polygon,
    /// `<polyline>`
    Polyline,
    /// `<path>`
    Path,
    /// `<text>`
    Text,
    /// `<image>`
    Image,
}

/// A resolved draw parameter.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ParamValue {
    /// A numeric geometry value.
    Number(f64),
    /// A string value such as path data or an image reference.
    Text(String),
    /// An ordered list of points.
    Points(Vec<(f64, f64)>),
}

impl ParamValue {
    /// The numeric value, if this is a number.
    #[must_use]
    pub const fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// The string value, if this is text.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }
}

/// Draw parameters keyed by attribute name.
pub type Params = BTreeMap<&'static str, ParamValue>;

/// One recorded draw call.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DrawInstruction {
    /// What to draw.
    pub kind: ShapeKind,
    /// Resolved geometry.
    pub params: Params,
    /// The node that produced the instruction.
    pub node: NodeId,
}
