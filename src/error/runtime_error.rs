use crate::ast::{InfixOperator, PrefixOperator};

/// The error category attached to a runtime error.
///
/// Categories classify failures the way the language reports them to
/// embedders; the displayed message never includes the category name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The default category for general evaluation failures.
    Exception,
    /// A value had an unexpected or incompatible type.
    TypeError,
    /// A collection was indexed outside its bounds.
    IndexError,
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Exception => write!(f, "Exception"),
            Self::TypeError => write!(f, "TypeError"),
            Self::IndexError => write!(f, "IndexError"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can be raised during evaluation.
///
/// Runtime errors are the first-class error values of the language: any
/// reduction that produces one terminates the enclosing evaluation and the
/// error propagates unchanged to the top. The display form of each variant is
/// the exact message reported to the user.
pub enum RuntimeError {
    /// An infix operator was applied to operands of different types.
    TypeMismatch {
        /// Type name of the left operand.
        left:  &'static str,
        /// The operator that was applied.
        op:    InfixOperator,
        /// Type name of the right operand.
        right: &'static str,
    },
    /// The left operand's type does not support the operator at all.
    InvalidOperation {
        /// Type name of the left operand.
        left:  &'static str,
        /// The operator that was applied.
        op:    InfixOperator,
        /// Type name of the right operand.
        right: &'static str,
    },
    /// A prefix operator was applied to an operand that does not support it.
    UnknownPrefixOperator {
        /// The operator that was applied.
        op:    PrefixOperator,
        /// Type name of the operand.
        right: &'static str,
    },
    /// A name was neither bound in any scope nor a built-in.
    IdentifierNotFound {
        /// The unresolved name.
        name: String,
    },
    /// A call expression's callee is not callable.
    NotAFunction {
        /// Type name of the callee.
        found: &'static str,
    },
    /// A function was called with the wrong number of arguments.
    ArityMismatch {
        /// Number of parameters the function declares.
        expected: usize,
        /// Number of arguments that were supplied.
        found:    usize,
    },
    /// An `if` condition evaluated to something other than a boolean.
    ConditionNotBoolean {
        /// Type name of the condition value.
        found: &'static str,
    },
    /// Integer division with a zero divisor.
    DivisionByZero,
    /// A length or exit code did not fit the required integer type.
    IntegerOverflow,
    /// An index was outside the bounds of the collection.
    IndexOutOfRange {
        /// Type name of the indexed collection.
        collection: &'static str,
    },
    /// An index expression evaluated to a non-integer.
    IndexNotInteger {
        /// Type name of the index value.
        found: &'static str,
    },
    /// An index was applied to a value that is not a list or a string.
    NotIndexable {
        /// Type name of the value being indexed.
        found: &'static str,
    },
    /// `len` was applied to a value without a length.
    NotIterable {
        /// Type name of the offending value.
        found: &'static str,
    },
    /// `list` was applied to a value that cannot be turned into a list.
    NotListable {
        /// Type name of the offending value.
        found: &'static str,
    },
    /// A built-in was called with the wrong number of arguments.
    WrongArgumentCount {
        /// Number of arguments the built-in accepts.
        expected: usize,
        /// Number of arguments that were supplied.
        found:    usize,
    },
    /// A built-in argument had the wrong type.
    WrongArgumentType {
        /// One-based position of the offending argument.
        position: usize,
        /// Type name the built-in requires.
        expected: &'static str,
        /// Type name that was supplied.
        found:    &'static str,
    },
}

impl RuntimeError {
    /// Returns the category this error belongs to.
    ///
    /// # Examples
    /// ```
    /// use petrel::error::runtime_error::{ErrorKind, RuntimeError};
    ///
    /// assert_eq!(RuntimeError::DivisionByZero.kind(), ErrorKind::Exception);
    /// assert_eq!(RuntimeError::IndexOutOfRange { collection: "List" }.kind(),
    ///            ErrorKind::IndexError);
    /// ```
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::UnknownPrefixOperator { .. }
            | Self::IdentifierNotFound { .. }
            | Self::NotAFunction { .. }
            | Self::DivisionByZero
            | Self::IntegerOverflow => ErrorKind::Exception,

            Self::TypeMismatch { .. }
            | Self::InvalidOperation { .. }
            | Self::ArityMismatch { .. }
            | Self::ConditionNotBoolean { .. }
            | Self::IndexNotInteger { .. }
            | Self::NotIndexable { .. }
            | Self::NotIterable { .. }
            | Self::NotListable { .. }
            | Self::WrongArgumentCount { .. }
            | Self::WrongArgumentType { .. } => ErrorKind::TypeError,

            Self::IndexOutOfRange { .. } => ErrorKind::IndexError,
        }
    }
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::TypeMismatch { left, op, right } => {
                write!(f, "type mismatch: {left} {op} {right}")
            },
            Self::InvalidOperation { left, op, right } => {
                write!(f, "invalid operation: {left} {op} {right}")
            },
            Self::UnknownPrefixOperator { op, right } => {
                write!(f, "unknown operator: {op}{right}")
            },
            Self::IdentifierNotFound { name } => write!(f, "identifier not found: {name}"),
            Self::NotAFunction { found } => write!(f, "not a function {found}"),
            Self::ArityMismatch { expected, found } => {
                let plural = if *expected == 1 { "argument" } else { "arguments" };
                write!(f, "arity mismatch: expected {expected} {plural}, got {found}")
            },
            Self::ConditionNotBoolean { found } => write!(f, "expected boolean, got {found}"),
            Self::DivisionByZero => write!(f, "division by zero"),
            Self::IntegerOverflow => write!(f, "integer overflow"),
            Self::IndexOutOfRange { collection } => write!(f, "{collection} index out of range"),
            Self::IndexNotInteger { found } => write!(f, "expected integer, got {found}"),
            Self::NotIndexable { found } => write!(f, "expected list or string, got {found}"),
            Self::NotIterable { found } => write!(f, "object is not iterable: {found}"),
            Self::NotListable { found } => write!(f, "object is not listable: {found}"),
            Self::WrongArgumentCount { expected, found } => {
                let plural = if *expected == 1 { "argument" } else { "arguments" };
                write!(f,
                       "expected {expected} positional {plural} but received {found}")
            },
            Self::WrongArgumentType { position, expected, found } => write!(f,
                                                                            "expected positional argument {position} to be type {expected} but received type {found}"),
        }
    }
}

impl std::error::Error for RuntimeError {}
