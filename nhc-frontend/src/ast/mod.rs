//! Syntax tree definitions for Nighthawk
//! 
//! The tree is produced by the external parser and handed to this crate
//! either directly or as JSON (see `loader`).

pub mod ops;
pub mod expressions;
pub mod statements;
pub mod loader;

// Re-export commonly used types at module level
pub use ops::{BinaryOp, UnaryOp};
pub use expressions::Expression;
pub use statements::{Statement, Declaration, ConstantDeclaration, FunctionDeclaration};
pub use loader::{parse_declarations, parse_expression};
