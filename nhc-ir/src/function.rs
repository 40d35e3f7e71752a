//! Function Definitions
//!
//! Defines IR functions with their linkage, parameters, and blocks.

use serde::{Deserialize, Serialize};
use std::fmt;
use crate::{Block, Instr, Type, Value};

/// Visibility and placement of a function or data definition
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Linkage {
    /// Whether the symbol is visible to other modules
    pub exported: bool,
    /// Section to place the symbol in
    pub section: Option<String>,
    /// Section flags, only rendered when a section is given
    pub flags: Option<String>,
}

impl Linkage {
    /// Only visible within this module
    pub fn private() -> Self {
        Self::default()
    }

    /// Visible to other modules
    pub fn public() -> Self {
        Self {
            exported: true,
            ..Self::default()
        }
    }

    pub fn public_with_section(section: impl Into<String>) -> Self {
        Self {
            exported: true,
            section: Some(section.into()),
            flags: None,
        }
    }
}

impl fmt::Display for Linkage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.exported {
            write!(f, "export ")?;
        }
        if let Some(section) = &self.section {
            write!(f, "section \"{section}\" ")?;
            if let Some(flags) = &self.flags {
                write!(f, "\"{flags}\" ")?;
            }
        }
        Ok(())
    }
}

/// Function in IR
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Function {
    pub linkage: Linkage,
    pub name: String,
    pub arguments: Vec<(Type, Value)>,
    pub return_type: Option<Type>,
    /// The first block is the entry point
    pub blocks: Vec<Block>,
}

impl Function {
    pub fn new(
        linkage: Linkage,
        name: impl Into<String>,
        arguments: Vec<(Type, Value)>,
        return_type: Option<Type>,
    ) -> Self {
        Self {
            linkage,
            name: name.into(),
            arguments,
            return_type,
            blocks: Vec::new(),
        }
    }

    /// Start a new block and return it for filling in
    pub fn add_block(&mut self, label: impl Into<String>) -> &mut Block {
        self.blocks.push(Block::new(label));
        let index = self.blocks.len() - 1;
        &mut self.blocks[index]
    }

    /// Block currently being filled in
    pub fn last_block_mut(&mut self) -> Option<&mut Block> {
        self.blocks.last_mut()
    }

    /// Append an instruction to the last block. Does nothing if there are no blocks yet.
    pub fn add_instruction(&mut self, instr: Instr) {
        if let Some(block) = self.last_block_mut() {
            block.add_instruction(instr);
        }
    }

    pub fn get_block(&self, label: &str) -> Option<&Block> {
        self.blocks.iter().find(|b| b.label == label)
    }

    pub fn entry_block(&self) -> Option<&Block> {
        self.blocks.first()
    }
}

impl fmt::Display for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}function ", self.linkage)?;
        if let Some(ty) = &self.return_type {
            write!(f, "{ty} ")?;
        }

        write!(f, "${}(", self.name)?;
        for (i, (ty, value)) in self.arguments.iter().enumerate() {
            if i > 0 { write!(f, ", ")?; }
            write!(f, "{ty} {value}")?;
        }
        writeln!(f, ") {{")?;

        for block in &self.blocks {
            writeln!(f, "{block}")?;
        }
        write!(f, "}}")
    }
}
