//! Data Definitions
//!
//! Defines global data emitted into the object file.

use serde::{Deserialize, Serialize};
use std::fmt;
use crate::{Linkage, Type};

/// One initializer inside a data definition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DataItem {
    /// Address of a symbol with an optional byte offset
    Symbol(String, Option<u64>),
    /// String bytes, escaped when written between quotes
    Str(String),
    /// Integer constant
    Const(i64),
    /// Double precision float constant
    Float(f64),
}

impl fmt::Display for DataItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataItem::Symbol(name, Some(offset)) => write!(f, "${name} +{offset}"),
            DataItem::Symbol(name, None) => write!(f, "${name}"),
            DataItem::Str(string) => {
                write!(f, "\"")?;
                for c in string.chars() {
                    match c {
                        '"' => write!(f, "\\\"")?,
                        '\\' => write!(f, "\\\\")?,
                        '\n' => write!(f, "\\n")?,
                        '\t' => write!(f, "\\t")?,
                        '\r' => write!(f, "\\r")?,
                        c if c.is_ascii_control() => write!(f, "\\{:03o}", c as u32)?,
                        c => write!(f, "{c}")?,
                    }
                }
                write!(f, "\"")
            }
            DataItem::Const(val) => write!(f, "{val}"),
            DataItem::Float(val) => write!(f, "d_{val}"),
        }
    }
}

/// Data definition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataDef {
    pub linkage: Linkage,
    pub name: String,
    pub align: Option<u64>,
    pub items: Vec<(Type, DataItem)>,
}

impl DataDef {
    pub fn new(
        linkage: Linkage,
        name: impl Into<String>,
        align: Option<u64>,
        items: Vec<(Type, DataItem)>,
    ) -> Self {
        Self {
            linkage,
            name: name.into(),
            align,
            items,
        }
    }
}

impl fmt::Display for DataDef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}data ${} = ", self.linkage, self.name)?;
        if let Some(align) = self.align {
            write!(f, "align {align} ")?;
        }

        write!(f, "{{ ")?;
        for (i, (ty, item)) in self.items.iter().enumerate() {
            if i > 0 { write!(f, ", ")?; }
            write!(f, "{ty} {item}")?;
        }
        write!(f, " }}")
    }
}
