//! IR Instructions
//!
//! Defines all instruction types available in the IR. The `Display`
//! impls produce the exact text the assembler expects for each variant.

use serde::{Deserialize, Serialize};
use std::fmt;
use crate::{Type, Value};

/// Comparison kinds used by `Instr::Cmp` (all signed)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cmp {
    Slt,
    Sle,
    Seq,
    Sne,
    Sgt,
    Sge,
}

impl fmt::Display for Cmp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let op_str = match self {
            Cmp::Slt => "slt",
            Cmp::Sle => "sle",
            Cmp::Seq => "seq",
            Cmp::Sne => "sne",
            Cmp::Sgt => "sgt",
            Cmp::Sge => "sge",
        };
        write!(f, "{op_str}")
    }
}

/// IR Instruction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Instr {
    /// Adds values of two temporaries together
    Add(Value, Value),
    /// Subtracts the second value from the first
    Sub(Value, Value),
    Mul(Value, Value),
    /// Divides the first value by the second
    Div(Value, Value),
    /// Remainder of the first value divided by the second
    Rem(Value, Value),

    /// Compares two values of a non-aggregate type
    Cmp {
        ty: Type,
        cmp: Cmp,
        lhs: Value,
        rhs: Value,
    },

    /// Bitwise AND
    And(Value, Value),
    /// Bitwise OR
    Or(Value, Value),

    Copy(Value),

    /// Return from the function, optionally with a value
    Ret(Option<Value>),

    /// Jump to `if_nonzero` when the value is non-zero, else to `otherwise`
    Jnz {
        value: Value,
        if_nonzero: String,
        otherwise: String,
    },

    /// Unconditional jump
    Jmp(String),

    /// Call a global function with typed arguments
    Call {
        function: String,
        args: Vec<(Type, Value)>,
    },

    // Stack allocation with 4/8/16 byte alignment; operand is the size in bytes
    Alloc4(u64),
    Alloc8(u64),
    Alloc16(u64),

    /// Store a value of the given type into memory at `dest`
    Store {
        ty: Type,
        value: Value,
        dest: Value,
    },

    /// Load a value of the given type from memory at `src`
    Load {
        ty: Type,
        src: Value,
    },

    /// Copy `len` bytes from `src` to `dest`; `len` is a compile-time constant
    Blit {
        src: Value,
        dest: Value,
        len: u64,
    },
}

impl Instr {
    /// Build a comparison. Panics on aggregate types, which cannot be compared.
    pub fn cmp(ty: Type, cmp: Cmp, lhs: Value, rhs: Value) -> Self {
        assert!(!ty.is_aggregate(), "cannot compare values of aggregate type {ty}");
        Instr::Cmp { ty, cmp, lhs, rhs }
    }

    pub fn call(function: impl Into<String>, args: Vec<(Type, Value)>) -> Self {
        Instr::Call {
            function: function.into(),
            args,
        }
    }

    /// Check if this instruction ends a block
    pub fn is_terminator(&self) -> bool {
        matches!(self, Instr::Ret(_) | Instr::Jmp(_) | Instr::Jnz { .. })
    }
}

impl fmt::Display for Instr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Instr::Add(lhs, rhs) => write!(f, "add {lhs}, {rhs}"),
            Instr::Sub(lhs, rhs) => write!(f, "sub {lhs}, {rhs}"),
            Instr::Mul(lhs, rhs) => write!(f, "mul {lhs}, {rhs}"),
            Instr::Div(lhs, rhs) => write!(f, "div {lhs}, {rhs}"),
            Instr::Rem(lhs, rhs) => write!(f, "rem {lhs}, {rhs}"),
            Instr::Cmp { ty, cmp, lhs, rhs } => {
                assert!(!ty.is_aggregate(), "cannot compare values of aggregate type {ty}");
                write!(f, "c{cmp}{ty} {lhs} {rhs}")
            }
            Instr::And(lhs, rhs) => write!(f, "and {lhs}, {rhs}"),
            Instr::Or(lhs, rhs) => write!(f, "or {lhs}, {rhs}"),
            Instr::Copy(value) => write!(f, "copy {value}"),
            Instr::Ret(Some(value)) => write!(f, "ret {value}"),
            Instr::Ret(None) => write!(f, "ret"),
            Instr::Jnz { value, if_nonzero, otherwise } => {
                write!(f, "jnz {value}, @{if_nonzero}, @{otherwise}")
            }
            Instr::Jmp(label) => write!(f, "jmp @{label}"),
            Instr::Call { function, args } => {
                write!(f, "call ${function}(")?;
                for (i, (ty, value)) in args.iter().enumerate() {
                    if i > 0 { write!(f, ", ")?; }
                    write!(f, "{ty} {value}")?;
                }
                write!(f, ")")
            }
            Instr::Alloc4(size) => write!(f, "alloc4 {size}"),
            Instr::Alloc8(size) => write!(f, "alloc8 {size}"),
            Instr::Alloc16(size) => write!(f, "alloc16 {size}"),
            Instr::Store { ty, value, dest } => write!(f, "store{ty} {value}, {dest}"),
            Instr::Load { ty, src } => write!(f, "load{ty} {src}"),
            Instr::Blit { src, dest, len } => write!(f, "blit {src}, {dest}, {len}"),
        }
    }
}
