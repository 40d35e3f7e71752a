//! Nighthawk Compiler - Common Types
//! 
//! This crate contains the error taxonomy shared by every phase of the
//! Nighthawk compiler.

pub mod error;

pub use error::CompilerError;
