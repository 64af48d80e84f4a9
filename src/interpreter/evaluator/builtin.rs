use std::rc::Rc;

use crate::{
    ast::InfixOperator,
    error::RuntimeError,
    interpreter::{
        evaluator::{binary, core::EvalResult},
        value::{Builtin, Value},
    },
    util::num,
};

/// Names of every built-in function, in registry order.
pub const BUILTIN_NAMES: &[&str] = &["len", "print", "exit", "list", "add"];

/// Looks up a built-in function by name.
///
/// The evaluator consults this registry only after scope lookup fails, so a
/// user binding of the same name shadows the built-in.
///
/// # Example
/// ```
/// use petrel::interpreter::evaluator::builtin::lookup;
///
/// assert!(lookup("len").is_some());
/// assert!(lookup("frobnicate").is_none());
/// ```
#[must_use]
pub fn lookup(name: &str) -> Option<Builtin> {
    let builtin = match name {
        "len" => Builtin { name: "len", func: len },
        "print" => Builtin { name: "print", func: print },
        "exit" => Builtin { name: "exit", func: exit },
        "list" => Builtin { name: "list", func: list },
        "add" => Builtin { name: "add", func: add },
        _ => return None,
    };

    Some(builtin)
}

/// Checks that the argument list has exactly the expected length.
const fn check_arity(args: &[Value], expected: usize) -> EvalResult<()> {
    if args.len() == expected {
        Ok(())
    } else {
        Err(RuntimeError::WrongArgumentCount { expected,
                                               found: args.len() })
    }
}

/// Returns the length of a string (in bytes) or a list (in elements).
///
/// Any other argument type is a type error.
fn len(args: &[Value]) -> EvalResult<Value> {
    check_arity(args, 1)?;

    let length = match &args[0] {
        Value::Str(text) => text.len(),
        Value::List(items) => items.len(),
        other => return Err(RuntimeError::NotIterable { found: other.type_name() }),
    };

    Ok(Value::Integer(num::usize_to_i64_checked(length, RuntimeError::IntegerOverflow)?))
}

/// Writes a value to standard output followed by a newline.
///
/// Strings are written raw, without their inspect-form quotes; every other
/// value is written in inspect form. Yields `Null`.
fn print(args: &[Value]) -> EvalResult<Value> {
    check_arity(args, 1)?;

    match &args[0] {
        Value::Str(text) => println!("{text}"),
        other => println!("{other}"),
    }

    Ok(Value::Null)
}

/// Terminates the host process.
///
/// With no argument the exit code is 0; with one integer argument it is that
/// integer. A non-integer argument is a type error.
fn exit(args: &[Value]) -> EvalResult<Value> {
    if args.len() > 1 {
        return Err(RuntimeError::WrongArgumentCount { expected: 1,
                                                      found:    args.len(), });
    }

    let code = match args.first() {
        None => 0,
        Some(Value::Integer(value)) => {
            num::i64_to_i32_checked(*value, RuntimeError::IntegerOverflow)?
        },
        Some(other) => {
            return Err(RuntimeError::WrongArgumentType { position: 1,
                                                         expected: "int",
                                                         found:    other.type_name(), });
        },
    };

    std::process::exit(code)
}

/// Converts a string into a list of its one-character strings.
///
/// Any other argument type is a type error.
fn list(args: &[Value]) -> EvalResult<Value> {
    check_arity(args, 1)?;

    match &args[0] {
        Value::Str(text) => {
            let items = text.chars().map(|c| Value::Str(c.to_string())).collect();
            Ok(Value::List(Rc::new(items)))
        },
        other => Err(RuntimeError::NotListable { found: other.type_name() }),
    }
}

/// Applies the `+` operator to two values, exactly as `a + b` would.
fn add(args: &[Value]) -> EvalResult<Value> {
    check_arity(args, 2)?;

    binary::apply(InfixOperator::Plus, &args[0], &args[1])
}
