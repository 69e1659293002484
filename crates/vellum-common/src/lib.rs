//! Common utilities for the Vellum SVG document model.
//!
//! This crate provides shared infrastructure used by all components:
//! - **Warning System** - colored terminal output for recoverable input problems
//! - **Number Parsing** - best-effort numeric attribute parsing

pub mod number;
pub mod warning;

pub use number::{parse_number, parse_number_list, parse_view_box};
