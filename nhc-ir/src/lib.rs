//! Nighthawk Compiler - Intermediate Representation
//! 
//! This crate defines the textual IR handed to the external assembler.
//! Every container implements `Display`, and the rendered text is the
//! assembler's input grammar verbatim.
//! 
//! ## Architecture
//! 
//! - `types` - scalar type tags and aggregate type definitions
//! - `values` - operands (temporaries, globals, literals)
//! - `instructions` - the closed instruction set
//! - `blocks` - labelled instruction sequences
//! - `function` - functions and linkage
//! - `data` - data definitions
//! - `module` - the compilation unit

pub use self::types::{Type, TypeDef};
pub use self::values::Value;
pub use self::instructions::{Cmp, Instr};
pub use self::blocks::{Block, Statement};
pub use self::function::{Function, Linkage};
pub use self::data::{DataDef, DataItem};
pub use self::module::Module;

mod types;
mod values;
mod instructions;
mod blocks;
mod function;
mod data;
mod module;
