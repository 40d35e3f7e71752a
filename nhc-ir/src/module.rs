//! Module - one compilation unit
//!
//! The module owns every function, data definition, and aggregate type
//! produced for a unit. Items are only ever appended, and the serializer
//! writes them back in insertion order.

use log::trace;
use serde::{Deserialize, Serialize};
use std::fmt;
use crate::{DataDef, Function, TypeDef};

/// IR Module - represents a complete compilation unit
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Module {
    pub functions: Vec<Function>,
    pub data: Vec<DataDef>,
    pub types: Vec<TypeDef>,
}

impl Module {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_function(&mut self, function: Function) -> &mut Function {
        trace!("module: adding function ${}", function.name);
        self.functions.push(function);
        let index = self.functions.len() - 1;
        &mut self.functions[index]
    }

    pub fn add_data(&mut self, data: DataDef) -> &mut DataDef {
        trace!("module: adding data ${}", data.name);
        self.data.push(data);
        let index = self.data.len() - 1;
        &mut self.data[index]
    }

    pub fn add_type(&mut self, def: TypeDef) -> &mut TypeDef {
        trace!("module: adding type :{}", def.name);
        self.types.push(def);
        let index = self.types.len() - 1;
        &mut self.types[index]
    }

    pub fn function(&self, name: &str) -> Option<&Function> {
        self.functions.iter().find(|f| f.name == name)
    }

    pub fn data(&self, name: &str) -> Option<&DataDef> {
        self.data.iter().find(|d| d.name == name)
    }

    pub fn type_def(&self, name: &str) -> Option<&TypeDef> {
        self.types.iter().find(|t| t.name == name)
    }
}

impl fmt::Display for Module {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for function in &self.functions {
            writeln!(f, "{function}")?;
        }
        for data in &self.data {
            writeln!(f, "{data}")?;
        }
        for def in &self.types {
            writeln!(f, "{def}")?;
        }
        Ok(())
    }
}
