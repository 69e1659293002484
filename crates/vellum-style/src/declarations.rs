//! Parsing of the `style` attribute's declaration list.
//!
//! [SVG 1.1 § 6.5 The 'style' attribute](https://www.w3.org/TR/SVG11/styling.html#StyleAttribute)
//!
//! The attribute holds `property: value` pairs separated by `;`. Each
//! declaration is parsed on its own: a malformed one is skipped and the
//! others still apply.

use vellum_common::warning::warn_once;

/// A single `property: value` declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration {
    /// Property name, whitespace-trimmed.
    pub name: String,
    /// Property value, whitespace-trimmed.
    pub value: String,
}

/// Parse declarations in source order.
///
/// Empty statements are dropped silently. A statement with no `:`, an empty
/// property name or an empty value is skipped with a warning.
#[must_use]
pub fn parse_declarations(text: &str) -> Vec<Declaration> {
    text.split(';')
        .map(str::trim)
        .filter(|statement| !statement.is_empty())
        .filter_map(|statement| {
            let declaration = parse_declaration(statement);
            if declaration.is_none() {
                warn_once("Style", &format!("skipping malformed declaration '{statement}'"));
            }
            declaration
        })
        .collect()
}

fn parse_declaration(statement: &str) -> Option<Declaration> {
    let (name, value) = statement.split_once(':')?;
    let (name, value) = (name.trim(), value.trim());
    if name.is_empty() || value.is_empty() {
        return None;
    }
    Some(Declaration {
        name: name.to_string(),
        value: value.to_string(),
    })
}
