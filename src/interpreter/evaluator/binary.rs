use crate::{
    ast::InfixOperator,
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, value::Value},
};

/// Applies an infix operator to two values.
///
/// Every application follows the same two-step check before any work is
/// done:
///
/// 1. When the left operand's type does not implement the operator at all,
///    the application fails with `invalid operation`.
/// 2. When it does, but the operands are of different types, the application
///    fails with `type mismatch`.
///
/// Only then is the operator delegated to the operands' type. `!=` is the
/// negation of `==`, and `>` holds when neither `<` nor `==` does, so both
/// derive their meaning for every type that provides equality and ordering.
///
/// # Parameters
/// - `op`: The operator to apply.
/// - `left`: The left operand.
/// - `right`: The right operand.
///
/// # Returns
/// The result value, or the error value describing the failed application.
///
/// # Examples
/// ```
/// use petrel::{
///     ast::InfixOperator,
///     interpreter::{evaluator::binary::apply, value::Value},
/// };
///
/// let sum = apply(InfixOperator::Plus, &Value::Integer(2), &Value::Integer(3));
/// assert_eq!(sum, Ok(Value::Integer(5)));
///
/// let err = apply(InfixOperator::Plus, &Value::Integer(2), &Value::Bool(true));
/// assert_eq!(err.unwrap_err().to_string(), "type mismatch: int + bool");
///
/// let err = apply(InfixOperator::Less, &Value::Bool(true), &Value::Bool(false));
/// assert_eq!(err.unwrap_err().to_string(), "invalid operation: bool < bool");
/// ```
pub fn apply(op: InfixOperator, left: &Value, right: &Value) -> EvalResult<Value> {
    if !supports(left, op) {
        return Err(RuntimeError::InvalidOperation { left: left.type_name(),
                                                    op,
                                                    right: right.type_name() });
    }

    if std::mem::discriminant(left) != std::mem::discriminant(right) {
        return Err(RuntimeError::TypeMismatch { left: left.type_name(),
                                                op,
                                                right: right.type_name() });
    }

    match op {
        InfixOperator::Equal => Ok(Value::Bool(eq(left, right))),
        InfixOperator::NotEqual => Ok(Value::Bool(!eq(left, right))),
        InfixOperator::Less => Ok(Value::Bool(lt(left, right))),
        InfixOperator::Greater => Ok(Value::Bool(!lt(left, right) && !eq(left, right))),
        InfixOperator::Plus
        | InfixOperator::Minus
        | InfixOperator::Asterisk
        | InfixOperator::Slash => arithmetic(op, left, right),
    }
}

/// Whether a value's type implements an operator.
///
/// Integers implement all eight operators. Strings implement `+`
/// (concatenation), equality, and lexicographic ordering. Booleans implement
/// equality only, so `true < false` is an invalid operation rather than a
/// comparison. Every other type implements nothing.
const fn supports(value: &Value, op: InfixOperator) -> bool {
    match value {
        Value::Integer(_) => true,
        Value::Str(_) => matches!(op,
                                  InfixOperator::Plus
                                  | InfixOperator::Equal
                                  | InfixOperator::NotEqual
                                  | InfixOperator::Less
                                  | InfixOperator::Greater),
        Value::Bool(_) => matches!(op, InfixOperator::Equal | InfixOperator::NotEqual),
        _ => false,
    }
}

/// Equality between two values of the same type.
fn eq(left: &Value, right: &Value) -> bool {
    match (left, right) {
        (Value::Integer(a), Value::Integer(b)) => a == b,
        (Value::Str(a), Value::Str(b)) => a == b,
        (Value::Bool(a), Value::Bool(b)) => a == b,
        _ => false,
    }
}

/// Strict ordering between two values of the same type. Strings order
/// lexicographically by bytes.
fn lt(left: &Value, right: &Value) -> bool {
    match (left, right) {
        (Value::Integer(a), Value::Integer(b)) => a < b,
        (Value::Str(a), Value::Str(b)) => a < b,
        _ => false,
    }
}

/// Arithmetic delegation for operands that passed both checks.
///
/// Integer arithmetic wraps on overflow; division by zero is an error.
/// String `+` concatenates.
fn arithmetic(op: InfixOperator, left: &Value, right: &Value) -> EvalResult<Value> {
    match (left, right) {
        (Value::Integer(a), Value::Integer(b)) => integer_arithmetic(op, *a, *b),
        (Value::Str(a), Value::Str(b)) if op == InfixOperator::Plus => {
            Ok(Value::Str(format!("{a}{b}")))
        },
        _ => Err(RuntimeError::InvalidOperation { left: left.type_name(),
                                                  op,
                                                  right: right.type_name() }),
    }
}

fn integer_arithmetic(op: InfixOperator, left: i64, right: i64) -> EvalResult<Value> {
    let result = match op {
        InfixOperator::Plus => left.wrapping_add(right),
        InfixOperator::Minus => left.wrapping_sub(right),
        InfixOperator::Asterisk => left.wrapping_mul(right),
        InfixOperator::Slash => {
            if right == 0 {
                return Err(RuntimeError::DivisionByZero);
            }
            left.wrapping_div(right)
        },
        _ => {
            return Err(RuntimeError::InvalidOperation { left:  "int",
                                                        op,
                                                        right: "int", });
        },
    };

    Ok(Value::Integer(result))
}
