//! Constant expression evaluation
//!
//! Reduces an expression tree made of literals and operators to a single
//! literal at compile time. Used to fold the value of constant
//! declarations before they are emitted as data.

use crate::ast::{BinaryOp, Expression, UnaryOp};
use log::trace;
use nhc_common::CompilerError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Result of folding a constant expression
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum ConstValue {
    Int(i64),
    Float(f64),
    Bool(bool),
}

impl ConstValue {
    /// Non-zero numbers and `true` are truthy
    pub fn is_truthy(&self) -> bool {
        match *self {
            ConstValue::Int(n) => n != 0,
            ConstValue::Float(x) => x != 0.0,
            ConstValue::Bool(b) => b,
        }
    }

    // Booleans take part in arithmetic as 0 and 1
    fn number(self) -> Number {
        match self {
            ConstValue::Int(n) => Number::Int(n),
            ConstValue::Float(x) => Number::Float(x),
            ConstValue::Bool(b) => Number::Int(i64::from(b)),
        }
    }
}

impl fmt::Display for ConstValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConstValue::Int(n) => write!(f, "{n}"),
            ConstValue::Float(x) => write!(f, "{x}"),
            ConstValue::Bool(b) => write!(f, "{b}"),
        }
    }
}

#[derive(Debug, Clone, Copy)]
enum Number {
    Int(i64),
    Float(f64),
}

impl Number {
    fn as_f64(self) -> f64 {
        match self {
            Number::Int(n) => n as f64,
            Number::Float(x) => x,
        }
    }
}

/// Evaluate a constant expression.
///
/// Both operands of every binary node are evaluated before the node
/// itself, including `and`/`or`.
pub fn evaluate(expr: &Expression) -> Result<ConstValue, CompilerError> {
    let value = match expr {
        Expression::IntLiteral(n) => ConstValue::Int(*n),
        Expression::FloatLiteral(x) => ConstValue::Float(*x),
        Expression::BoolLiteral(b) => ConstValue::Bool(*b),
        Expression::Identifier(name) => return Err(CompilerError::non_constant(name.as_str())),
        Expression::Binary { op, lhs, rhs } => {
            let lhs = evaluate(lhs)?;
            let rhs = evaluate(rhs)?;
            let value = fold_binary(*op, lhs, rhs)?;
            trace!("folded {lhs} {op} {rhs} -> {value}");
            value
        }
        Expression::Unary { op: UnaryOp::Neg, operand } => negate(evaluate(operand)?)?,
        Expression::StringLiteral(_) | Expression::Unary { op: UnaryOp::Not, .. } => {
            return Err(CompilerError::unsupported_node(expr.kind_name()));
        }
    };
    Ok(value)
}

fn fold_binary(op: BinaryOp, lhs: ConstValue, rhs: ConstValue) -> Result<ConstValue, CompilerError> {
    match op {
        BinaryOp::Add | BinaryOp::Sub | BinaryOp::Mul | BinaryOp::Div => {
            fold_arithmetic(op, lhs.number(), rhs.number())
        }
        // Selects an operand, both sides have already been evaluated
        BinaryOp::And => Ok(if lhs.is_truthy() { rhs } else { lhs }),
        BinaryOp::Or => Ok(if lhs.is_truthy() { lhs } else { rhs }),
        _ => Ok(ConstValue::Bool(compare(op, lhs.number(), rhs.number()))),
    }
}

fn fold_arithmetic(op: BinaryOp, lhs: Number, rhs: Number) -> Result<ConstValue, CompilerError> {
    // Division is always true division and yields a float
    if op == BinaryOp::Div {
        let divisor = rhs.as_f64();
        if divisor == 0.0 {
            return Err(CompilerError::ConstantDivisionByZero);
        }
        return Ok(ConstValue::Float(lhs.as_f64() / divisor));
    }

    if let (Number::Int(a), Number::Int(b)) = (lhs, rhs) {
        let result = match op {
            BinaryOp::Add => a.checked_add(b),
            BinaryOp::Sub => a.checked_sub(b),
            BinaryOp::Mul => a.checked_mul(b),
            _ => unreachable!("not an arithmetic operator: {op}"),
        };
        return result
            .map(ConstValue::Int)
            .ok_or_else(|| CompilerError::overflow(op.to_string()));
    }

    let (a, b) = (lhs.as_f64(), rhs.as_f64());
    let result = match op {
        BinaryOp::Add => a + b,
        BinaryOp::Sub => a - b,
        BinaryOp::Mul => a * b,
        _ => unreachable!("not an arithmetic operator: {op}"),
    };
    Ok(ConstValue::Float(result))
}

fn compare(op: BinaryOp, lhs: Number, rhs: Number) -> bool {
    if let (Number::Int(a), Number::Int(b)) = (lhs, rhs) {
        return match op {
            BinaryOp::Equal => a == b,
            BinaryOp::NotEqual => a != b,
            BinaryOp::Less => a < b,
            BinaryOp::Greater => a > b,
            BinaryOp::LessEqual => a <= b,
            BinaryOp::GreaterEqual => a >= b,
            _ => unreachable!("not a comparison: {op}"),
        };
    }

    let (a, b) = (lhs.as_f64(), rhs.as_f64());
    match op {
        BinaryOp::Equal => a == b,
        BinaryOp::NotEqual => a != b,
        BinaryOp::Less => a < b,
        BinaryOp::Greater => a > b,
        BinaryOp::LessEqual => a <= b,
        BinaryOp::GreaterEqual => a >= b,
        _ => unreachable!("not a comparison: {op}"),
    }
}

fn negate(value: ConstValue) -> Result<ConstValue, CompilerError> {
    match value.number() {
        Number::Int(n) => n
            .checked_neg()
            .map(ConstValue::Int)
            .ok_or_else(|| CompilerError::overflow("-")),
        Number::Float(x) => Ok(ConstValue::Float(-x)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::BinaryOp::*;

    fn bin(op: BinaryOp, lhs: Expression, rhs: Expression) -> Expression {
        Expression::binary(op, lhs, rhs)
    }

    fn int(n: i64) -> Expression {
        Expression::int(n)
    }

    #[test]
    fn test_literals() {
        assert_eq!(evaluate(&int(42)).unwrap(), ConstValue::Int(42));
        assert_eq!(evaluate(&Expression::float(1.5)).unwrap(), ConstValue::Float(1.5));
        assert_eq!(evaluate(&Expression::boolean(true)).unwrap(), ConstValue::Bool(true));
    }

    #[test]
    fn test_integer_arithmetic() {
        assert_eq!(evaluate(&bin(Add, int(3), int(4))).unwrap(), ConstValue::Int(7));
        assert_eq!(evaluate(&bin(Sub, int(3), int(4))).unwrap(), ConstValue::Int(-1));
        assert_eq!(evaluate(&bin(Mul, int(6), int(7))).unwrap(), ConstValue::Int(42));
        assert_eq!(evaluate(&bin(Div, int(7), int(2))).unwrap(), ConstValue::Float(3.5));
        assert_eq!(evaluate(&bin(Div, int(-7), int(2))).unwrap(), ConstValue::Float(-3.5));
        assert_eq!(evaluate(&bin(Div, int(6), int(2))).unwrap(), ConstValue::Float(3.0));

        // (2 + 3) * -(4 - 6) = 10
        let expr = bin(
            Mul,
            bin(Add, int(2), int(3)),
            Expression::unary(UnaryOp::Neg, bin(Sub, int(4), int(6))),
        );
        assert_eq!(evaluate(&expr).unwrap(), ConstValue::Int(10));
    }

    #[test]
    fn test_float_promotion() {
        assert_eq!(
            evaluate(&bin(Add, int(1), Expression::float(0.5))).unwrap(),
            ConstValue::Float(1.5)
        );
        assert_eq!(
            evaluate(&bin(Div, Expression::float(7.0), int(2))).unwrap(),
            ConstValue::Float(3.5)
        );
        assert_eq!(
            evaluate(&Expression::unary(UnaryOp::Neg, Expression::float(2.5))).unwrap(),
            ConstValue::Float(-2.5)
        );
    }

    #[test]
    fn test_booleans_as_numbers() {
        let expr = bin(Add, Expression::boolean(true), int(1));
        assert_eq!(evaluate(&expr).unwrap(), ConstValue::Int(2));

        let expr = Expression::unary(UnaryOp::Neg, Expression::boolean(true));
        assert_eq!(evaluate(&expr).unwrap(), ConstValue::Int(-1));
    }

    #[test]
    fn test_comparisons() {
        let cases = [
            (Equal, 3, 3, true),
            (NotEqual, 3, 3, false),
            (Less, 2, 3, true),
            (Greater, 2, 3, false),
            (LessEqual, 3, 3, true),
            (GreaterEqual, 2, 3, false),
        ];
        for (op, a, b, expected) in cases {
            assert_eq!(
                evaluate(&bin(op, int(a), int(b))).unwrap(),
                ConstValue::Bool(expected),
                "{a} {op} {b}"
            );
        }

        let expr = bin(Equal, int(1), Expression::float(1.0));
        assert_eq!(evaluate(&expr).unwrap(), ConstValue::Bool(true));
        let expr = bin(Equal, Expression::boolean(true), int(1));
        assert_eq!(evaluate(&expr).unwrap(), ConstValue::Bool(true));
    }

    #[test]
    fn test_logical_operators() {
        let t = Expression::boolean(true);
        let f = Expression::boolean(false);
        assert_eq!(evaluate(&bin(And, t.clone(), f.clone())).unwrap(), ConstValue::Bool(false));
        assert_eq!(evaluate(&bin(And, t.clone(), t.clone())).unwrap(), ConstValue::Bool(true));
        assert_eq!(evaluate(&bin(Or, f.clone(), t.clone())).unwrap(), ConstValue::Bool(true));
        assert_eq!(evaluate(&bin(Or, f.clone(), f.clone())).unwrap(), ConstValue::Bool(false));

        // Operand values are selected, not coerced
        assert_eq!(evaluate(&bin(And, int(1), int(2))).unwrap(), ConstValue::Int(2));
        assert_eq!(evaluate(&bin(And, int(0), int(2))).unwrap(), ConstValue::Int(0));
        assert_eq!(evaluate(&bin(Or, int(0), int(5))).unwrap(), ConstValue::Int(5));
    }

    #[test]
    fn test_logical_operators_evaluate_both_sides() {
        // The right side is still evaluated when the left decides the result
        let expr = bin(And, Expression::boolean(false), Expression::name("x"));
        assert_eq!(evaluate(&expr).unwrap_err(), CompilerError::non_constant("x"));

        let expr = bin(Or, Expression::boolean(true), bin(Div, int(1), int(0)));
        assert_eq!(evaluate(&expr).unwrap_err(), CompilerError::ConstantDivisionByZero);
    }

    #[test]
    fn test_variable_reference_is_rejected() {
        let expr = bin(Add, Expression::name("a"), int(1));
        assert_eq!(
            evaluate(&expr).unwrap_err(),
            CompilerError::NonConstantReference { name: "a".to_string() }
        );

        let nested = bin(Mul, int(2), Expression::unary(UnaryOp::Neg, Expression::name("b")));
        assert!(matches!(
            evaluate(&nested),
            Err(CompilerError::NonConstantReference { .. })
        ));
    }

    #[test]
    fn test_unsupported_nodes() {
        let err = evaluate(&Expression::StringLiteral("hi".to_string())).unwrap_err();
        assert_eq!(err, CompilerError::unsupported_node("string literal"));

        let err = evaluate(&Expression::unary(UnaryOp::Not, Expression::boolean(true))).unwrap_err();
        assert_eq!(err, CompilerError::unsupported_node("unary 'not'"));
    }

    #[test]
    fn test_arithmetic_errors() {
        assert_eq!(
            evaluate(&bin(Div, int(1), int(0))).unwrap_err(),
            CompilerError::ConstantDivisionByZero
        );
        assert_eq!(
            evaluate(&bin(Add, int(i64::MAX), int(1))).unwrap_err(),
            CompilerError::overflow("+")
        );
        assert_eq!(
            evaluate(&Expression::unary(UnaryOp::Neg, int(i64::MIN))).unwrap_err(),
            CompilerError::overflow("-")
        );
        assert_eq!(
            evaluate(&bin(Mul, int(i64::MAX), int(2))).unwrap_err(),
            CompilerError::overflow("*")
        );
    }

    #[test]
    fn test_division_by_zero() {
        assert_eq!(
            evaluate(&bin(Div, Expression::float(1.0), int(0))).unwrap_err(),
            CompilerError::ConstantDivisionByZero
        );
        assert_eq!(
            evaluate(&bin(Div, int(1), Expression::float(0.0))).unwrap_err(),
            CompilerError::ConstantDivisionByZero
        );
        assert_eq!(
            evaluate(&bin(Div, int(1), Expression::boolean(false))).unwrap_err(),
            CompilerError::ConstantDivisionByZero
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(ConstValue::Int(7).to_string(), "7");
        assert_eq!(ConstValue::Float(3.5).to_string(), "3.5");
        assert_eq!(ConstValue::Bool(true).to_string(), "true");
    }
}
