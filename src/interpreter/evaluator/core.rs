use std::rc::Rc;

use crate::{
    ast::{Block, Expr, Program, Statement},
    error::RuntimeError,
    interpreter::{
        environment::{Env, Environment},
        evaluator::{binary, builtin, unary},
        value::{FunctionValue, Value},
    },
    util::num,
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// [`RuntimeError`]. The error is the language's first-class error value: any
/// step that produces one terminates the enclosing reduction, and `?`
/// propagates it unchanged through every evaluator branch.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Evaluates a whole program.
///
/// Statements run in source order. A `return` at the top level stops the
/// program and yields the unwrapped value; an error stops it immediately.
/// The result of a completed program is its last statement's value, or
/// `Null` for an empty program.
///
/// # Parameters
/// - `program`: The parsed program.
/// - `env`: The environment top-level bindings are created in.
///
/// # Returns
/// The value of the program.
///
/// # Example
/// ```
/// use petrel::{
///     interpreter::{environment::Environment, evaluator::core::eval_program, value::Value},
///     parse_source,
/// };
///
/// let (program, errors) = parse_source("let a = 5; let b = a; a + b");
/// assert!(errors.is_empty());
///
/// let env = Environment::new();
/// assert_eq!(eval_program(&program, &env), Ok(Value::Integer(10)));
/// ```
pub fn eval_program(program: &Program, env: &Env) -> EvalResult<Value> {
    let mut result = Value::Null;

    for statement in &program.statements {
        match eval_statement(statement, env)? {
            Value::Return(value) => return Ok(*value),
            value => result = value,
        }
    }

    Ok(result)
}

/// Evaluates a block of statements.
///
/// Like a program, except a `return` value is not unwrapped: it propagates
/// as-is so the enclosing call boundary can unwrap it, however deeply the
/// blocks nest. An empty block yields `Null`.
pub fn eval_block(block: &Block, env: &Env) -> EvalResult<Value> {
    let mut result = Value::Null;

    for statement in &block.statements {
        result = eval_statement(statement, env)?;

        if matches!(result, Value::Return(_)) {
            return Ok(result);
        }
    }

    Ok(result)
}

/// Evaluates a single statement.
///
/// A `let` binds into the innermost scope and yields the bound value; a
/// `return` wraps its value in the in-flight return marker; an expression
/// statement yields the expression's value.
pub fn eval_statement(statement: &Statement, env: &Env) -> EvalResult<Value> {
    match statement {
        Statement::Let { name, value, .. } => {
            let value = eval_expression(value, env)?;
            env.borrow_mut().set(name, value.clone());
            Ok(value)
        },
        Statement::Return { value, .. } => {
            let value = eval_expression(value, env)?;
            Ok(Value::Return(Box::new(value)))
        },
        Statement::Expression { expr, .. } => eval_expression(expr, env),
    }
}

/// Evaluates an expression to a value.
///
/// This is the main dispatch of the tree walk. Operand order is observable
/// through `print`: infix left before right, callee before arguments,
/// arguments and list items left to right.
///
/// # Parameters
/// - `expr`: The expression to reduce.
/// - `env`: The environment names resolve against.
///
/// # Returns
/// The value of the expression.
pub fn eval_expression(expr: &Expr, env: &Env) -> EvalResult<Value> {
    match expr {
        Expr::IntegerLiteral { value, .. } => Ok(Value::Integer(*value)),
        Expr::StringLiteral { value, .. } => Ok(Value::Str(value.clone())),
        Expr::Boolean { value, .. } => Ok(Value::Bool(*value)),
        Expr::Identifier { name, .. } => eval_identifier(name, env),
        Expr::Prefix { op, right, .. } => {
            let right = eval_expression(right, env)?;
            unary::apply(*op, &right)
        },
        Expr::Infix { op, left, right, .. } => {
            let left = eval_expression(left, env)?;
            let right = eval_expression(right, env)?;
            binary::apply(*op, &left, &right)
        },
        Expr::If { condition,
                   consequence,
                   alternative,
                   .. } => eval_if_expression(condition, consequence, alternative.as_ref(), env),
        Expr::FunctionLiteral { parameters, body, .. } => {
            Ok(Value::Function(Rc::new(FunctionValue { parameters: parameters.clone(),
                                                       body:       body.clone(),
                                                       env:        Rc::clone(env), })))
        },
        Expr::Call { function, arguments, .. } => {
            let callee = eval_expression(function, env)?;
            let args = eval_expressions(arguments, env)?;
            apply_function(&callee, &args)
        },
        Expr::List { items, .. } => {
            let values = eval_expressions(items, env)?;
            Ok(Value::List(Rc::new(values)))
        },
        Expr::Index { left, index, .. } => {
            let collection = eval_expression(left, env)?;
            let index = eval_expression(index, env)?;
            eval_index_expression(&collection, &index)
        },
    }
}

/// Resolves an identifier.
///
/// User bindings are consulted first, walking the scope chain outward; a
/// name that is bound nowhere falls back to the built-in registry. Shadowing
/// a built-in with `let` therefore works as expected.
fn eval_identifier(name: &str, env: &Env) -> EvalResult<Value> {
    if let Some(value) = env.borrow().get(name) {
        return Ok(value);
    }

    if let Some(builtin) = builtin::lookup(name) {
        return Ok(Value::Builtin(builtin));
    }

    Err(RuntimeError::IdentifierNotFound { name: name.to_string() })
}

/// Evaluates an `if` expression.
///
/// The condition must reduce to a boolean; any other type is a type error
/// rather than being coerced. When the condition is false and no `else`
/// branch exists, the expression yields `Null`.
fn eval_if_expression(condition: &Expr,
                      consequence: &Block,
                      alternative: Option<&Block>,
                      env: &Env)
                      -> EvalResult<Value> {
    match eval_expression(condition, env)? {
        Value::Bool(true) => eval_block(consequence, env),
        Value::Bool(false) => alternative.map_or(Ok(Value::Null), |block| eval_block(block, env)),
        other => Err(RuntimeError::ConditionNotBoolean { found: other.type_name() }),
    }
}

/// Evaluates a sequence of expressions left to right, short-circuiting on
/// the first error.
fn eval_expressions(expressions: &[Expr], env: &Env) -> EvalResult<Vec<Value>> {
    let mut values = Vec::with_capacity(expressions.len());

    for expression in expressions {
        values.push(eval_expression(expression, env)?);
    }

    Ok(values)
}

/// Applies a callee to already-evaluated arguments.
///
/// Built-ins validate their own arguments. A user-defined function checks
/// arity, pushes a fresh scope beneath its captured environment (not the
/// caller's scope), binds parameters positionally, evaluates the body, and
/// unwraps a top-level `return`. Duplicate parameter names bind last-wins.
///
/// # Parameters
/// - `callee`: The value being called.
/// - `args`: The evaluated arguments, in source order.
///
/// # Returns
/// The call's result, or an error when the callee is not callable or the
/// argument count does not match.
pub fn apply_function(callee: &Value, args: &[Value]) -> EvalResult<Value> {
    match callee {
        Value::Builtin(builtin) => (builtin.func)(args),
        Value::Function(function) => {
            if args.len() != function.parameters.len() {
                return Err(RuntimeError::ArityMismatch { expected: function.parameters.len(),
                                                         found:    args.len(), });
            }

            let call_env = Environment::enclosed(&function.env);
            for (parameter, value) in function.parameters.iter().zip(args) {
                call_env.borrow_mut().set(parameter, value.clone());
            }

            match eval_block(&function.body, &call_env)? {
                Value::Return(value) => Ok(*value),
                value => Ok(value),
            }
        },
        other => Err(RuntimeError::NotAFunction { found: other.type_name() }),
    }
}

/// Evaluates an indexing expression over an already-evaluated collection and
/// index.
///
/// The index must be an integer. Negative indices are normalized by adding
/// the collection's length. Strings index by byte and yield a one-character
/// string; lists yield the element at the position.
fn eval_index_expression(collection: &Value, index: &Value) -> EvalResult<Value> {
    let Value::Integer(raw) = index else {
        return Err(RuntimeError::IndexNotInteger { found: index.type_name() });
    };

    match collection {
        Value::Str(text) => {
            let position = normalize_index(*raw, text.len(), collection.type_name())?;
            Ok(Value::Str((text.as_bytes()[position] as char).to_string()))
        },
        Value::List(items) => {
            let position = normalize_index(*raw, items.len(), collection.type_name())?;
            Ok(items[position].clone())
        },
        other => Err(RuntimeError::NotIndexable { found: other.type_name() }),
    }
}

/// Normalizes a possibly-negative index against a collection length and
/// bounds-checks it.
fn normalize_index(raw: i64, length: usize, collection: &'static str) -> EvalResult<usize> {
    let out_of_range = RuntimeError::IndexOutOfRange { collection };

    let length = num::usize_to_i64_checked(length, out_of_range.clone())?;
    let index = if raw < 0 { raw + length } else { raw };

    if index < 0 || index >= length {
        return Err(out_of_range);
    }

    num::i64_to_usize_checked(index, out_of_range)
}
