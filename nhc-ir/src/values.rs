//! IR Value Representations
//!
//! Defines values that can be used as operands in IR instructions.

use serde::{Deserialize, Serialize};
use std::fmt;

/// IR Value - represents operands in IR instructions
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Value {
    /// Function-local temporary
    Temporary(String),

    /// Global symbol reference
    Global(String),

    /// Constant integer
    Const(i64),
}

impl Value {
    pub fn temp(name: impl Into<String>) -> Self {
        Value::Temporary(name.into())
    }

    pub fn global(name: impl Into<String>) -> Self {
        Value::Global(name.into())
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Temporary(name) => write!(f, "%{name}"),
            Value::Global(name) => write!(f, "${name}"),
            Value::Const(val) => write!(f, "{val}"),
        }
    }
}
