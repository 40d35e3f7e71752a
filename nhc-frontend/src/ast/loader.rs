//! JSON loader for syntax trees produced by the external parser
//!
//! A program is a JSON array of declarations, each an object with a
//! single key naming its kind:
//!
//! ```json
//! [
//!   { "constant": { "name": "x", "value": { "bool_literal": true } } },
//!   { "function": { "name": "main", "params": [], "body": [ { "print": "hi" } ] } }
//! ]
//! ```

use super::{Declaration, Expression};
use nhc_common::CompilerError;
use serde_json::Value as Json;

/// Parse a JSON array of top-level declarations
pub fn parse_declarations(source: &str) -> Result<Vec<Declaration>, CompilerError> {
    let items: Vec<Json> = serde_json::from_str(source)?;
    items.into_iter().map(declaration_from_json).collect()
}

/// Parse a single JSON expression
pub fn parse_expression(source: &str) -> Result<Expression, CompilerError> {
    Ok(serde_json::from_str(source)?)
}

fn declaration_from_json(item: Json) -> Result<Declaration, CompilerError> {
    let kind = declaration_kind(&item)?;
    if !Declaration::KINDS.contains(&kind.as_str()) {
        return Err(CompilerError::UnknownDeclarationKind { kind });
    }
    Ok(serde_json::from_value(item)?)
}

fn declaration_kind(item: &Json) -> Result<String, CompilerError> {
    match item {
        // Unit-like kinds are written as a bare string
        Json::String(kind) => Ok(kind.clone()),
        Json::Object(map) if map.len() == 1 => match map.keys().next() {
            Some(kind) => Ok(kind.clone()),
            None => Err(invalid_declaration(item)),
        },
        _ => Err(invalid_declaration(item)),
    }
}

fn invalid_declaration(item: &Json) -> CompilerError {
    CompilerError::InvalidInput {
        message: format!("expected a declaration, found {item}"),
    }
}
