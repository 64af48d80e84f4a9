//! # petrel
//!
//! petrel is an interpreter for a small, dynamically typed expression language
//! written in Rust. Source text is scanned into tokens, parsed into an
//! abstract syntax tree by an operator-precedence parser, and reduced to
//! first-class values by a tree-walking evaluator with lexically scoped
//! environments and closures.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
)]
#![allow(clippy::missing_errors_doc)]

use crate::{
    error::{ParseError, RunError},
    interpreter::{
        environment::Env,
        evaluator::core::eval_program,
        lexer::lex,
        parser::core::Parser,
        value::Value,
    },
};

/// Defines the structure of parsed code.
///
/// This module declares the `Program`, `Statement` and `Expr` types that
/// represent the syntactic structure of source code as a tree. The AST is
/// built by the parser and traversed by the evaluator.
///
/// # Responsibilities
/// - Defines expression and statement types for all language constructs.
/// - Attaches source line numbers to AST nodes for diagnostics.
/// - Provides the canonical, fully parenthesized re-print of parsed code.
pub mod ast;
/// Provides unified error types for parsing and evaluation.
///
/// This module defines all errors that can be raised during lexing, parsing,
/// or evaluating code. The two taxonomies are kept separate: parse errors
/// carry source line numbers, while runtime errors are the first-class error
/// values of the language and display their fixed message forms.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (lexer, parser, evaluator).
/// - Supports integration with standard error handling traits and reporting
///   utilities.
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together lexing, parsing, evaluation, value
/// representations, environments, and built-in functions to provide a
/// complete runtime for source code evaluation.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser, evaluator, and values.
/// - Provides entry points for parsing and evaluating user code.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;
/// The interactive read-eval-print loop.
///
/// Reads one line at a time, parses and evaluates it against a persistent
/// environment, and prints the result. Parse errors are reported inline and
/// do not end the session.
pub mod repl;
/// General utilities for safe numeric conversion.
///
/// This module provides reusable helpers for converting between integer
/// types without silent data loss. They are used wherever collection lengths
/// and user-supplied indices meet.
pub mod util;

/// Scans and parses source text into a program.
///
/// The parser never fails as a whole: malformed statements are skipped and
/// reported, and every statement that parsed successfully is kept. The
/// returned error list is ordered by position in the source.
///
/// # Parameters
/// - `source`: The source text to parse.
///
/// # Returns
/// The parsed [`ast::Program`] together with all parse errors.
///
/// # Examples
/// ```
/// use petrel::parse_source;
///
/// let (program, errors) = parse_source("let x = 1 + 2;");
/// assert!(errors.is_empty());
/// assert_eq!(program.statements.len(), 1);
///
/// // A malformed statement is reported but does not abort parsing.
/// let (program, errors) = parse_source("let x 5; let y = 10;");
/// assert_eq!(errors.len(), 1);
/// assert_eq!(program.statements.len(), 1);
/// ```
#[must_use]
pub fn parse_source(source: &str) -> (ast::Program, Vec<ParseError>) {
    let mut parser = Parser::new(lex(source));
    let program = parser.parse_program();
    (program, parser.into_errors())
}

/// Parses and evaluates source text against an environment.
///
/// Returns the value of the last statement, or an error describing why the
/// run failed. Parse errors abort the run before evaluation begins; a runtime
/// error aborts it at the failing reduction.
///
/// # Errors
/// Returns [`RunError::Parse`] when the parser reported at least one error,
/// and [`RunError::Runtime`] when evaluation produced an error value.
///
/// # Examples
/// ```
/// use petrel::{interpreter::{environment::Environment, value::Value}, run_source};
///
/// let env = Environment::new();
/// let value = run_source("let double = fn(x) { x * 2 }; double(21)", &env).unwrap();
/// assert_eq!(value, Value::Integer(42));
///
/// // The environment persists between runs.
/// let value = run_source("double(5)", &env).unwrap();
/// assert_eq!(value, Value::Integer(10));
///
/// // 'y' is not defined, so evaluation fails.
/// let result = run_source("y + 1", &env);
/// assert!(result.is_err());
/// ```
pub fn run_source(source: &str, env: &Env) -> Result<Value, RunError> {
    let (program, errors) = parse_source(source);

    if !errors.is_empty() {
        return Err(RunError::Parse(errors));
    }

    eval_program(&program, env).map_err(RunError::Runtime)
}
