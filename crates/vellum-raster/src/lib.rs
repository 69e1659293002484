//! Rasterization dispatch for Vellum documents.
//!
//! # Architecture
//!
//! The dispatcher decides what gets drawn and in which order; it never
//! touches pixels:
//!
//! ```text
//! Markup → Reader → Document → Rasterizer → RenderSink
//!                                   ↓
//!                            DisplayList (recording sink)
//! ```
//!
//! Instructions are emitted in document order, so later siblings paint over
//! earlier ones.

mod instruction;
mod rasterizer;
mod sink;

pub use instruction::{DrawInstruction, ParamValue, Params, ShapeKind};
pub use rasterizer::Rasterizer;
pub use sink::{DisplayList, NodeRef, RenderSink};
