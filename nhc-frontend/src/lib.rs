//! Nighthawk Compiler - Frontend
//!
//! This crate takes the syntax tree produced by the external parser and
//! turns it into an IR module:
//! - AST: syntax tree definitions and the JSON loader
//! - Eval: compile-time folding of constant expressions
//! - Codegen: lowering of declarations into IR

pub mod ast;
pub mod eval;
pub mod codegen;

pub use ast::{
    Expression, Statement, Declaration, ConstantDeclaration, FunctionDeclaration,
    BinaryOp, UnaryOp, parse_declarations, parse_expression,
};
pub use eval::{evaluate, ConstValue};
pub use codegen::{lower, CodeGenerator, PRINT_ROUTINE};

use nhc_common::CompilerError;
use nhc_ir::Module;

/// High-level frontend interface
pub struct Frontend;

impl Frontend {
    /// Lower a JSON syntax tree into an IR module
    pub fn compile_json(source: &str) -> Result<Module, CompilerError> {
        let declarations = parse_declarations(source)?;
        lower(&declarations)
    }

    /// Lower a JSON syntax tree straight to IR text
    pub fn compile_json_to_text(source: &str) -> Result<String, CompilerError> {
        Ok(Self::compile_json(source)?.to_string())
    }

    /// Fold a single JSON constant expression
    pub fn evaluate_json(source: &str) -> Result<ConstValue, CompilerError> {
        let expr = parse_expression(source)?;
        evaluate(&expr)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frontend_compile_json() {
        let source = r#"[ { "constant": { "name": "x", "value": { "bool_literal": true } } } ]"#;
        let module = Frontend::compile_json(source).unwrap();
        assert_eq!(module.data.len(), 1);
        assert!(module.functions.is_empty());
    }

    #[test]
    fn test_frontend_evaluate_json() {
        let source = r#"{ "binary": { "op": "mul", "lhs": { "int_literal": 6 }, "rhs": { "int_literal": 7 } } }"#;
        assert_eq!(Frontend::evaluate_json(source).unwrap(), ConstValue::Int(42));
    }

    #[test]
    fn test_frontend_errors_abort_compilation() {
        let source = r#"[
            { "function": { "name": "main", "body": [ { "print": "hi" } ] } },
            { "constant": { "name": "bad", "value": { "identifier": "a" } } }
        ]"#;
        assert_eq!(
            Frontend::compile_json(source).unwrap_err(),
            CompilerError::non_constant("a")
        );
    }
}
