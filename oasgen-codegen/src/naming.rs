//! Identifier case conversion.
//!
//! Schema and field names arrive in whatever style the document author used
//! (`pet_owner`, `petOwner`, `pet-owner`). These functions turn them into
//! Rust identifiers; keyword escaping is left to the renderer.

use heck::{ToSnakeCase, ToUpperCamelCase};

/// Converts a schema or field name to a type name (`UpperCamelCase`).
#[must_use]
pub fn to_type_name(s: &str) -> String {
    sanitize(&s.to_upper_camel_case(), "Type")
}

/// Converts a property name to a field name (`snake_case`).
///
/// Keywords that cannot be raw identifiers get a trailing underscore.
#[must_use]
pub fn to_field_name(s: &str) -> String {
    let mut name = sanitize(&s.to_snake_case(), "field");
    if is_non_raw_keyword(&name) {
        name.push('_');
    }
    name
}

/// Keeps ASCII identifier characters and fixes up an invalid start.
fn sanitize(converted: &str, fallback: &str) -> String {
    let mut result: String = converted
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '_')
        .collect();

    if result.trim_matches('_').is_empty() {
        return fallback.to_string();
    }
    if result.starts_with(|c: char| c.is_ascii_digit()) {
        result.insert(0, '_');
    }
    result
}

/// Returns true if `s` is a Rust keyword (strict or reserved, 2024 edition).
#[must_use]
pub fn is_keyword(s: &str) -> bool {
    matches!(
        s,
        "as" | "async"
            | "await"
            | "break"
            | "const"
            | "continue"
            | "crate"
            | "dyn"
            | "else"
            | "enum"
            | "extern"
            | "false"
            | "fn"
            | "for"
            | "gen"
            | "if"
            | "impl"
            | "in"
            | "let"
            | "loop"
            | "match"
            | "mod"
            | "move"
            | "mut"
            | "pub"
            | "ref"
            | "return"
            | "self"
            | "Self"
            | "static"
            | "struct"
            | "super"
            | "trait"
            | "true"
            | "type"
            | "unsafe"
            | "use"
            | "where"
            | "while"
            | "abstract"
            | "become"
            | "box"
            | "do"
            | "final"
            | "macro"
            | "override"
            | "priv"
            | "try"
            | "typeof"
            | "unsized"
            | "virtual"
            | "yield"
    )
}

/// Returns true if `s` is a keyword that cannot be written as a raw identifier.
#[must_use]
pub fn is_non_raw_keyword(s: &str) -> bool {
    matches!(s, "crate" | "self" | "Self" | "super")
}
