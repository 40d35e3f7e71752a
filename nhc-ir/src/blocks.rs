//! Block Management
//!
//! Defines labelled blocks - ordered sequences of statements. Control falls
//! through from one statement to the next unless a jump or return appears.

use serde::{Deserialize, Serialize};
use std::fmt;
use crate::{Instr, Type, Value};

/// A single line inside a block
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Statement {
    /// `%dest =<ty> <instr>`
    Assign(Value, Type, Instr),
    /// Instruction whose result (if any) is discarded
    Volatile(Instr),
}

impl Statement {
    pub fn instr(&self) -> &Instr {
        match self {
            Statement::Assign(_, _, instr) | Statement::Volatile(instr) => instr,
        }
    }
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Statement::Assign(dest, ty, instr) => write!(f, "{dest} ={ty} {instr}"),
            Statement::Volatile(instr) => write!(f, "{instr}"),
        }
    }
}

/// Block - a label followed by the statements it covers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Block {
    pub label: String,
    pub statements: Vec<Statement>,
}

impl Block {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            statements: Vec::new(),
        }
    }

    pub fn add_instruction(&mut self, instr: Instr) {
        self.statements.push(Statement::Volatile(instr));
    }

    /// Append `dest =ty instr`
    pub fn assign_instruction(&mut self, dest: Value, ty: Type, instr: Instr) {
        self.statements.push(Statement::Assign(dest, ty, instr));
    }

    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }

    pub fn has_terminator(&self) -> bool {
        self.statements
            .last()
            .is_some_and(|stmt| stmt.instr().is_terminator())
    }
}

impl fmt::Display for Block {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "@{}", self.label)?;
        for statement in &self.statements {
            write!(f, "\n\t{statement}")?;
        }
        Ok(())
    }
}
