/// Core parser state and the Pratt expression loop.
///
/// Holds the two-token lookahead buffer, the error accumulator, and the
/// operator precedence ladder.
pub mod core;
/// Expression productions.
///
/// Implements the prefix and infix parse functions dispatched by the Pratt
/// loop: literals, identifiers, operator applications, grouping,
/// conditionals, function literals, calls, lists and indexing.
pub mod expression;
/// Statement productions.
///
/// Implements `let` statements, `return` statements, expression statements
/// and brace-delimited blocks.
pub mod statement;
