//! Error handling for the Nighthawk compiler
//!
//! Every failure in this compiler is fatal for the compilation unit it
//! happens in, so there is a single error type shared by all phases.

use thiserror::Error;

/// Main compiler error type that encompasses all phases of compilation
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CompilerError {
    #[error("Cannot evaluate variable '{name}' in constant expression")]
    NonConstantReference { name: String },

    #[error("Cannot evaluate {node} in constant expression")]
    UnsupportedConstantNode { node: String },

    #[error("Unknown declaration kind: {kind}")]
    UnknownDeclarationKind { kind: String },

    #[error("Division by zero in constant expression")]
    ConstantDivisionByZero,

    #[error("Integer overflow while folding '{op}' in constant expression")]
    ConstantOverflow { op: String },

    #[error("Invalid input: {message}")]
    InvalidInput { message: String },

    #[error("IO error: {message}")]
    IoError { message: String },
}

impl CompilerError {
    /// Create a non-constant reference error
    pub fn non_constant(name: impl Into<String>) -> Self {
        CompilerError::NonConstantReference { name: name.into() }
    }

    /// Create an unsupported constant node error
    pub fn unsupported_node(node: impl Into<String>) -> Self {
        CompilerError::UnsupportedConstantNode { node: node.into() }
    }

    /// Create an overflow error for the given operator
    pub fn overflow(op: impl Into<String>) -> Self {
        CompilerError::ConstantOverflow { op: op.into() }
    }

    /// Whether this error was raised while folding a constant expression
    pub fn is_evaluation_error(&self) -> bool {
        matches!(
            self,
            CompilerError::NonConstantReference { .. }
                | CompilerError::UnsupportedConstantNode { .. }
                | CompilerError::ConstantDivisionByZero
                | CompilerError::ConstantOverflow { .. }
        )
    }
}

/// Convert from std::io::Error
impl From<std::io::Error> for CompilerError {
    fn from(err: std::io::Error) -> Self {
        CompilerError::IoError {
            message: err.to_string(),
        }
    }
}

/// Convert from serde_json::Error (malformed syntax-tree input)
impl From<serde_json::Error> for CompilerError {
    fn from(err: serde_json::Error) -> Self {
        CompilerError::InvalidInput {
            message: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CompilerError::non_constant("a");
        assert_eq!(err.to_string(), "Cannot evaluate variable 'a' in constant expression");

        let err = CompilerError::UnknownDeclarationKind { kind: "struct".to_string() };
        assert_eq!(err.to_string(), "Unknown declaration kind: struct");
    }

    #[test]
    fn test_evaluation_error_classification() {
        assert!(CompilerError::non_constant("x").is_evaluation_error());
        assert!(CompilerError::unsupported_node("string literal").is_evaluation_error());
        assert!(CompilerError::ConstantDivisionByZero.is_evaluation_error());
        assert!(!CompilerError::UnknownDeclarationKind { kind: "x".into() }.is_evaluation_error());
    }

    #[test]
    fn test_from_io_error() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: CompilerError = io.into();
        assert!(matches!(err, CompilerError::IoError { .. }));
    }

    #[test]
    fn test_from_json_error() {
        let json_err = serde_json::from_str::<u32>("not json").unwrap_err();
        let err: CompilerError = json_err.into();
        assert!(matches!(err, CompilerError::InvalidInput { .. }));
    }
}
