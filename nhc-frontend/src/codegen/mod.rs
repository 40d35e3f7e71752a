//! Code generation from the syntax tree to IR
//!
//! Walks the top-level declarations in order and appends the matching IR
//! items to a module. Constants become private data definitions holding
//! their folded value; functions become exported IR functions with a
//! single `entry` block.

mod constant_gen;
mod function_gen;

use crate::ast::Declaration;
use log::debug;
use nhc_common::CompilerError;
use nhc_ir::{DataDef, Module};

/// Symbol of the externally linked routine used by `print`
pub const PRINT_ROUTINE: &str = "printf";

/// Code generator - lowers declarations into an IR module
pub struct CodeGenerator {
    module: Module,
    /// Number of data definitions in `module`, used to name string literals
    next_data_id: usize,
}

impl CodeGenerator {
    /// Create a code generator for an empty module
    pub fn new() -> Self {
        Self::with_module(Module::new())
    }

    /// Continue generating into an existing module
    pub fn with_module(module: Module) -> Self {
        let next_data_id = module.data.len();
        Self {
            module,
            next_data_id,
        }
    }

    /// Generate the IR module for the given declarations
    pub fn generate(mut self, declarations: &[Declaration]) -> Result<Module, CompilerError> {
        for declaration in declarations {
            self.generate_declaration(declaration)?;
        }
        Ok(self.module)
    }

    fn generate_declaration(&mut self, declaration: &Declaration) -> Result<(), CompilerError> {
        debug!("lowering declaration '{}'", declaration.name());
        match declaration {
            Declaration::Constant(decl) => {
                let data = self.generate_constant(decl)?;
                self.push_data(data);
            }
            Declaration::Function(decl) => {
                let function = self.generate_function(decl);
                self.module.add_function(function);
            }
        }
        Ok(())
    }

    fn push_data(&mut self, data: DataDef) {
        debug!("emitting data ${}", data.name);
        self.module.add_data(data);
        self.next_data_id += 1;
    }
}

impl Default for CodeGenerator {
    fn default() -> Self {
        Self::new()
    }
}

/// Lower a list of declarations into a fresh module
pub fn lower(declarations: &[Declaration]) -> Result<Module, CompilerError> {
    CodeGenerator::new().generate(declarations)
}
