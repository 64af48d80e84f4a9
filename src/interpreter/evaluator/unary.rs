use crate::{
    ast::PrefixOperator,
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, value::Value},
};

/// Applies a prefix operator to a value.
///
/// # Examples
/// ```
/// use petrel::{
///     ast::PrefixOperator,
///     interpreter::{evaluator::unary::apply, value::Value},
/// };
///
/// assert_eq!(apply(PrefixOperator::Bang, &Value::Bool(true)), Ok(Value::Bool(false)));
/// assert_eq!(apply(PrefixOperator::Minus, &Value::Integer(5)), Ok(Value::Integer(-5)));
///
/// let err = apply(PrefixOperator::Minus, &Value::Bool(true));
/// assert_eq!(err.unwrap_err().to_string(), "unknown operator: -bool");
/// ```
pub fn apply(op: PrefixOperator, right: &Value) -> EvalResult<Value> {
    match op {
        PrefixOperator::Bang => Ok(bang(right)),
        PrefixOperator::Minus => minus(right),
    }
}

/// Logical NOT.
///
/// Maps `true` to `false` and `false` to `true`. Every non-boolean operand
/// maps to `Null`.
const fn bang(right: &Value) -> Value {
    match right {
        Value::Bool(value) => Value::Bool(!*value),
        _ => Value::Null,
    }
}

/// Arithmetic negation, defined only for integers. Negation wraps at the
/// edge of the `i64` range.
const fn minus(right: &Value) -> EvalResult<Value> {
    match right {
        Value::Integer(value) => Ok(Value::Integer(value.wrapping_neg())),
        other => Err(RuntimeError::UnknownPrefixOperator { op:    PrefixOperator::Minus,
                                                          right: other.type_name(), }),
    }
}
