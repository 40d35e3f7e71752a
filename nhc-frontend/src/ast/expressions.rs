//! Expression nodes for Nighthawk

use super::ops::{BinaryOp, UnaryOp};
use serde::{Deserialize, Serialize};

/// Expression nodes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Expression {
    /// Integer literal
    IntLiteral(i64),

    /// Floating point literal
    FloatLiteral(f64),

    /// `true` / `false`
    BoolLiteral(bool),

    /// String literal, quotes already stripped
    StringLiteral(String),

    /// Variable reference
    Identifier(String),

    /// Binary operation
    Binary {
        op: BinaryOp,
        lhs: Box<Expression>,
        rhs: Box<Expression>,
    },

    /// Unary operation
    Unary {
        op: UnaryOp,
        operand: Box<Expression>,
    },
}

impl Expression {
    pub fn int(value: i64) -> Self {
        Expression::IntLiteral(value)
    }

    pub fn float(value: f64) -> Self {
        Expression::FloatLiteral(value)
    }

    pub fn boolean(value: bool) -> Self {
        Expression::BoolLiteral(value)
    }

    pub fn name(name: impl Into<String>) -> Self {
        Expression::Identifier(name.into())
    }

    pub fn binary(op: BinaryOp, lhs: Expression, rhs: Expression) -> Self {
        Expression::Binary {
            op,
            lhs: Box::new(lhs),
            rhs: Box::new(rhs),
        }
    }

    pub fn unary(op: UnaryOp, operand: Expression) -> Self {
        Expression::Unary {
            op,
            operand: Box::new(operand),
        }
    }

    /// Human readable node kind, used in diagnostics
    pub fn kind_name(&self) -> String {
        match self {
            Expression::IntLiteral(_) => "integer literal".to_string(),
            Expression::FloatLiteral(_) => "float literal".to_string(),
            Expression::BoolLiteral(_) => "boolean literal".to_string(),
            Expression::StringLiteral(_) => "string literal".to_string(),
            Expression::Identifier(_) => "variable reference".to_string(),
            Expression::Binary { op, .. } => format!("binary '{op}'"),
            Expression::Unary { op, .. } => format!("unary '{op}'"),
        }
    }
}
