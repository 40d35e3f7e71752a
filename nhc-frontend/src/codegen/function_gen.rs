//! Function code generation

use super::{CodeGenerator, PRINT_ROUTINE};
use crate::ast::{FunctionDeclaration, Statement};
use log::{debug, trace};
use nhc_ir::{DataDef, DataItem, Function, Instr, Linkage, Type, Value};

impl CodeGenerator {
    /// Generate an exported function with a single `entry` block
    pub(super) fn generate_function(&mut self, decl: &FunctionDeclaration) -> Function {
        if !decl.params.is_empty() {
            debug!(
                "function '{}': {} parameter(s) are not lowered",
                decl.name,
                decl.params.len()
            );
        }

        let mut function = Function::new(Linkage::public(), decl.name.as_str(), Vec::new(), None);
        let block = function.add_block("entry");
        for stmt in &decl.body {
            match stmt {
                Statement::Print(text) => {
                    let literal = self.emit_string_literal(text);
                    block.add_instruction(Instr::call(
                        PRINT_ROUTINE,
                        vec![(Type::Long, Value::Global(literal))],
                    ));
                }
                Statement::Expression(_) => {
                    trace!("function '{}': skipping expression statement", decl.name);
                }
            }
        }
        block.add_instruction(Instr::Ret(None));

        function
    }

    /// Emit a zero-terminated string as private data and return its symbol
    pub(super) fn emit_string_literal(&mut self, text: &str) -> String {
        let name = format!("str.{}", self.next_data_id);
        self.push_data(DataDef::new(
            Linkage::private(),
            name.as_str(),
            None,
            vec![
                (Type::Byte, DataItem::Str(text.to_string())),
                (Type::Byte, DataItem::Const(0)),
            ],
        ));
        name
    }
}
