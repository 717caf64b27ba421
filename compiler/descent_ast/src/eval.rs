//! Integer evaluation of expression trees.

use std::convert::Infallible;

use crate::ast::BinaryOperator;
use crate::visit::{VisitResult, Visitor};

/// An error raised while computing a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum EvalError {
    /// Division by zero, including zero raised to a negative power.
    #[error("division by zero")]
    DivisionByZero,

    /// The result does not fit in a 64-bit signed integer.
    #[error("integer overflow evaluating {left} {operator} {right}")]
    Overflow {
        /// The operator being applied.
        operator: BinaryOperator,
        /// The left operand.
        left: i64,
        /// The right operand.
        right: i64,
    },
}

impl From<Infallible> for EvalError {
    fn from(never: Infallible) -> Self {
        match never {}
    }
}

impl BinaryOperator {
    /// Applies the operator with checked 64-bit arithmetic.
    ///
    /// Division truncates toward zero. Exponentiation is exact and equals
    /// the real-valued power truncated toward zero, so a negative exponent
    /// yields 0 unless the base is 1 or -1, and `0` to a negative power is a
    /// division by zero.
    pub fn apply(self, left: i64, right: i64) -> Result<i64, EvalError> {
        let result = match self {
            BinaryOperator::Add => left.checked_add(right),
            BinaryOperator::Sub => left.checked_sub(right),
            BinaryOperator::Mul => left.checked_mul(right),
            BinaryOperator::Div => {
                if right == 0 {
                    return Err(EvalError::DivisionByZero);
                }
                // Only i64::MIN / -1 overflows
                left.checked_div(right)
            }
            BinaryOperator::Pow => return checked_power(left, right),
        };
        result.ok_or(EvalError::Overflow {
            operator: self,
            left,
            right,
        })
    }
}

fn checked_power(base: i64, exponent: i64) -> Result<i64, EvalError> {
    let odd = exponent % 2 != 0;
    match base {
        1 => return Ok(1),
        -1 => return Ok(if odd { -1 } else { 1 }),
        0 if exponent < 0 => return Err(EvalError::DivisionByZero),
        0 => return Ok(if exponent == 0 { 1 } else { 0 }),
        _ if exponent < 0 => return Ok(0),
        _ => {}
    }

    let overflow = EvalError::Overflow {
        operator: BinaryOperator::Pow,
        left: base,
        right: exponent,
    };
    // |base| >= 2 here, so an exponent beyond u32 overflows anyway
    let exponent = u32::try_from(exponent).map_err(|_| overflow)?;
    base.checked_pow(exponent).ok_or(overflow)
}

/// A visitor that folds a tree to its value.
#[derive(Debug, Default, Clone, Copy)]
pub struct Evaluator;

impl Visitor for Evaluator {
    type Output = i64;
    type Error = EvalError;

    fn visit_literal(&mut self, value: i64) -> VisitResult<Self> {
        Ok(value)
    }

    fn visit_binary(&mut self, operator: BinaryOperator, left: i64, right: i64) -> VisitResult<Self> {
        operator.apply(left, right)
    }
}
