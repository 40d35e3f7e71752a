//! IR Type System
//!
//! Defines the scalar type tags understood by the assembler and named
//! aggregate type definitions.

use serde::{Deserialize, Serialize};
use std::fmt;

/// IR Type system
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Type {
    // Base types
    Word,
    Long,
    Single,
    Double,

    // Extended types
    Byte,
    Halfword,

    /// Aggregate type, referring to a `TypeDef` by name
    Aggregate(String),
}

impl Type {
    /// Construct an aggregate type referring to `def`
    pub fn aggregate(def: &TypeDef) -> Self {
        Type::Aggregate(def.name.clone())
    }

    /// Type used when the value crosses a call or return boundary
    pub fn into_abi(self) -> Self {
        match self {
            Type::Byte | Type::Halfword => Type::Word,
            other => other,
        }
    }

    /// Check if this is an aggregate type
    pub fn is_aggregate(&self) -> bool {
        matches!(self, Type::Aggregate(_))
    }

    /// Check if this is a floating point type
    pub fn is_float(&self) -> bool {
        matches!(self, Type::Single | Type::Double)
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Type::Word => write!(f, "w"),
            Type::Long => write!(f, "l"),
            Type::Single => write!(f, "s"),
            Type::Double => write!(f, "d"),
            Type::Byte => write!(f, "b"),
            Type::Halfword => write!(f, "h"),
            Type::Aggregate(name) => write!(f, ":{name}"),
        }
    }
}

/// Named aggregate type definition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TypeDef {
    pub name: String,
    pub align: Option<u64>,
    items: Vec<(Type, u64)>,
}

impl TypeDef {
    pub fn new(name: impl Into<String>, align: Option<u64>) -> Self {
        Self {
            name: name.into(),
            align,
            items: Vec::new(),
        }
    }

    /// Append `count` consecutive fields of type `ty`
    pub fn add_field(&mut self, ty: Type, count: u64) {
        assert!(count >= 1, "field repeat count must be at least 1");
        self.items.push((ty, count));
    }

    /// Field types with their repeat counts (always >= 1)
    pub fn items(&self) -> &[(Type, u64)] {
        &self.items
    }
}

impl fmt::Display for TypeDef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "type :{} = ", self.name)?;
        if let Some(align) = self.align {
            write!(f, "align {align} ")?;
        }

        write!(f, "{{ ")?;
        for (i, (ty, count)) in self.items.iter().enumerate() {
            if i > 0 { write!(f, ", ")?; }
            if *count > 1 {
                write!(f, "{ty} {count}")?;
            } else {
                write!(f, "{ty}")?;
            }
        }
        write!(f, " }}")
    }
}
