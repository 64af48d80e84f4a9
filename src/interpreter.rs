/// Lexically scoped name bindings.
///
/// Defines the `Environment` type: a mapping from names to values with an
/// optional parent scope. Environments are shared through reference-counted
/// handles so that function values can capture their defining scope.
pub mod environment;
/// The evaluator module executes AST nodes and computes results.
///
/// The evaluator traverses the AST, evaluates expressions and statements,
/// applies operators and built-in functions, and manages scopes. It is the
/// core execution engine of the interpreter.
///
/// # Responsibilities
/// - Evaluates AST nodes, performing all supported operations.
/// - Handles bindings, closures, conditionals and control flow.
/// - Reports runtime errors such as type mismatches or unknown identifiers.
pub mod evaluator;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer (tokenizer) reads the raw source text and produces a stream of
/// tokens, each corresponding to meaningful language elements such as
/// integers, identifiers, operators, delimiters, and keywords. This is the
/// first stage of interpretation.
///
/// # Responsibilities
/// - Converts the input character stream into tokens with source line info.
/// - Handles numeric and string literals, identifiers, and operators.
/// - Surfaces unrecognized input as illegal tokens instead of failing.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser processes the token stream produced by the lexer and constructs
/// an AST that represents the syntactic structure of expressions and
/// statements. Operator precedence is resolved with a Pratt-style core loop.
///
/// # Responsibilities
/// - Converts tokens into structured AST nodes (expressions, statements).
/// - Resolves operator precedence and associativity.
/// - Collects syntax errors with location info while continuing to parse.
pub mod parser;
/// The value module defines the runtime data types for evaluation.
///
/// This module declares all value types used during execution, such as
/// integers, booleans, strings, lists, functions and built-ins, together
/// with their display forms and type names.
pub mod value;
