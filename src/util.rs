/// Numeric conversion helpers.
///
/// This module provides safe functions for converting between integer types
/// without silent truncation or wraparound. Use these helpers wherever
/// collection lengths (`usize`) and language integers (`i64`) meet, and when
/// narrowing to host-facing types such as process exit codes.
///
/// All functions return a `Result`, which is `Ok` if the conversion is
/// lossless, or the caller-supplied error if the value is out of range.
pub mod num;
