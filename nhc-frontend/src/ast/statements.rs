//! Statement and declaration nodes for Nighthawk

use super::expressions::Expression;
use serde::{Deserialize, Serialize};

/// Statements inside a function body
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Statement {
    /// `print "text"`
    Print(String),

    /// Expression statement
    Expression(Expression),
}

/// `const name = value`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConstantDeclaration {
    pub name: String,
    pub value: Expression,
}

/// Function definition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FunctionDeclaration {
    pub name: String,
    #[serde(default)]
    pub params: Vec<String>,
    #[serde(default)]
    pub body: Vec<Statement>,
}

/// Top-level declaration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Declaration {
    Constant(ConstantDeclaration),
    Function(FunctionDeclaration),
}

impl Declaration {
    /// Tags of the known declaration kinds in JSON input
    pub const KINDS: [&'static str; 2] = ["constant", "function"];

    pub fn name(&self) -> &str {
        match self {
            Declaration::Constant(decl) => &decl.name,
            Declaration::Function(decl) => &decl.name,
        }
    }
}
