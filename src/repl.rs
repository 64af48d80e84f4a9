use std::io::{BufRead, Write};

use crate::{
    error::RunError,
    interpreter::{environment::Environment, value::Value},
    run_source,
};

/// The prompt written before each line is read.
pub const PROMPT: &str = ">> ";

/// Runs the read-eval-print loop until end of input.
///
/// Each line is parsed and evaluated against a single environment that
/// persists for the whole session, so bindings and functions accumulate
/// across lines. Parse errors are written tab-indented and the loop
/// continues; results are written in inspect form unless they are `Null`;
/// runtime errors are written as their message. End of input ends the loop.
///
/// # Parameters
/// - `input`: The line source, usually standard input.
/// - `output`: The sink for prompts, results and errors.
///
/// # Errors
/// Returns an error only when reading or writing fails; nothing the user
/// types can end the session with an error.
///
/// # Example
/// ```
/// use petrel::repl;
///
/// let input = b"let x = 2;\nx * 3\n" as &[u8];
/// let mut output = Vec::new();
///
/// repl::start(input, &mut output).unwrap();
///
/// let session = String::from_utf8(output).unwrap();
/// assert_eq!(session, ">> 2\n>> 6\n>> ");
/// ```
pub fn start<R, W>(input: R, mut output: W) -> std::io::Result<()>
    where R: BufRead,
          W: Write
{
    let env = Environment::new();
    let mut lines = input.lines();

    loop {
        write!(output, "{PROMPT}")?;
        output.flush()?;

        let Some(line) = lines.next() else {
            return Ok(());
        };

        match run_source(&line?, &env) {
            Ok(Value::Null) => {},
            Ok(value) => writeln!(output, "{value}")?,
            Err(RunError::Parse(errors)) => {
                for error in errors {
                    writeln!(output, "\t{error}")?;
                }
            },
            Err(RunError::Runtime(error)) => writeln!(output, "{error}")?,
        }
    }
}
