/// Parsing errors.
///
/// Defines all error types that can occur during lexing and parsing of source
/// code. Parse errors include syntax mistakes, unexpected tokens, and illegal
/// characters, and carry the source line on which they were detected.
pub mod parse_error;
/// Aggregate errors for running whole programs.
///
/// Distinguishes a run that failed before evaluation (one or more parse
/// errors) from a run that failed during evaluation (a single runtime error).
pub mod run_error;
/// Runtime errors.
///
/// Contains the first-class error values that can be raised during
/// evaluation, such as type mismatches, unknown identifiers, division by
/// zero, or out-of-range indices.
pub mod runtime_error;

pub use parse_error::ParseError;
pub use run_error::RunError;
pub use runtime_error::RuntimeError;
