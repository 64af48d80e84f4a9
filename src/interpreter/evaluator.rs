/// Infix operator evaluation logic.
///
/// Handles the execution of all binary operations in expressions, including
/// the capability and same-type checks that precede every application.
pub mod binary;
/// Built-in function registry.
///
/// Declares the named intrinsic functions (`len`, `print`, `exit`, `list`,
/// `add`) and their argument validation.
pub mod builtin;
/// Core evaluation logic.
///
/// Contains the main tree-walking reduction over programs, blocks,
/// statements and expressions, including closures, calls and indexing.
pub mod core;
/// Prefix operator evaluation logic.
///
/// Implements logical NOT and arithmetic negation.
pub mod unary;
