use crate::error::{ParseError, RuntimeError};

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents the failure of a whole program run.
///
/// A run fails either before evaluation, with the ordered list of parse
/// errors the parser collected, or during evaluation, with the runtime error
/// that terminated it. The host decides how to surface each case: the file
/// runner prints the messages to standard error and exits with code 1, while
/// the REPL prints them and continues.
pub enum RunError {
    /// The parser reported at least one error; evaluation never started.
    Parse(Vec<ParseError>),
    /// Evaluation terminated with an error value.
    Runtime(RuntimeError),
}

impl std::fmt::Display for RunError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(errors) => {
                for (index, error) in errors.iter().enumerate() {
                    if index > 0 {
                        writeln!(f)?;
                    }
                    write!(f, "{error}")?;
                }
                Ok(())
            },
            Self::Runtime(error) => write!(f, "{error}"),
        }
    }
}

impl std::error::Error for RunError {}

impl From<RuntimeError> for RunError {
    fn from(error: RuntimeError) -> Self {
        Self::Runtime(error)
    }
}

impl From<Vec<ParseError>> for RunError {
    fn from(errors: Vec<ParseError>) -> Self {
        Self::Parse(errors)
    }
}
