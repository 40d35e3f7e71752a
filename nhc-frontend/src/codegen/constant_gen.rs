//! Constant declaration code generation

use super::CodeGenerator;
use crate::ast::ConstantDeclaration;
use crate::eval::{evaluate, ConstValue};
use nhc_common::CompilerError;
use nhc_ir::{DataDef, DataItem, Linkage, Type};

impl CodeGenerator {
    /// Fold the constant's value and wrap it in a private data definition
    pub(super) fn generate_constant(&self, decl: &ConstantDeclaration) -> Result<DataDef, CompilerError> {
        let value = evaluate(&decl.value)?;
        let item = constant_item(value);

        Ok(DataDef::new(Linkage::private(), decl.name.as_str(), None, vec![item]))
    }
}

/// Narrowest IR type able to hold the folded value
fn constant_item(value: ConstValue) -> (Type, DataItem) {
    match value {
        ConstValue::Bool(b) => (Type::Byte, DataItem::Const(i64::from(b))),
        ConstValue::Float(x) => (Type::Double, DataItem::Float(x)),
        ConstValue::Int(n) => (Type::Long, DataItem::Const(n)),
    }
}
