use std::rc::Rc;

use crate::{
    ast::Block,
    interpreter::{environment::Env, evaluator::core::EvalResult},
};

/// Represents a runtime value in the interpreter.
///
/// This enum models all the possible types that can appear in expressions,
/// bindings, function returns, and conditions. Booleans and `Null` are plain
/// variants compared by value, so every producer of a boolean yields a value
/// indistinguishable from any other with the same truth.
#[derive(Debug, Clone)]
pub enum Value {
    /// A 64-bit signed integer.
    Integer(i64),
    /// A boolean value (`true` or `false`).
    /// Produced by comparison operators (`<`, `==`, `!=`, etc.) and the `!`
    /// prefix. `if` conditions must evaluate to `Bool`.
    Bool(bool),
    /// An immutable string of text.
    Str(String),
    /// The absence of a value: the result of an `if` without a taken branch
    /// and of built-ins that only have effects.
    Null,
    /// An ordered list of values.
    List(Rc<Vec<Self>>),
    /// A user-defined function together with its captured environment.
    Function(Rc<FunctionValue>),
    /// A named intrinsic function.
    Builtin(Builtin),
    /// In-flight marker wrapping the value of a `return` statement while it
    /// unwinds to the enclosing call boundary. Never observable by user
    /// code: call evaluation unwraps it before yielding a result.
    Return(Box<Self>),
}

/// A function value: parameters, body, and the environment captured at the
/// definition site.
///
/// The captured environment is shared, not copied. Closures built from the
/// same definition site observe the same bindings, including mutations made
/// after the function value was created.
#[derive(Debug)]
pub struct FunctionValue {
    /// Ordered parameter names.
    pub parameters: Vec<String>,
    /// The function body.
    pub body:       Block,
    /// The environment that was current when the literal was evaluated.
    pub env:        Env,
}

/// A named built-in function.
///
/// Built-ins are plain function pointers; two built-ins are equal when they
/// have the same name.
#[derive(Debug, Clone, Copy)]
pub struct Builtin {
    /// The name the built-in is registered under.
    pub name: &'static str,
    /// The intrinsic implementation.
    pub func: fn(&[Value]) -> EvalResult<Value>,
}

impl PartialEq for Builtin {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl PartialEq for Value {
    /// Structural equality for data values; identity for functions.
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Integer(a), Self::Integer(b)) => a == b,
            (Self::Bool(a), Self::Bool(b)) => a == b,
            (Self::Str(a), Self::Str(b)) => a == b,
            (Self::Null, Self::Null) => true,
            (Self::List(a), Self::List(b)) => a == b,
            (Self::Function(a), Self::Function(b)) => Rc::ptr_eq(a, b),
            (Self::Builtin(a), Self::Builtin(b)) => a == b,
            (Self::Return(a), Self::Return(b)) => a == b,
            _ => false,
        }
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::Str(value.to_string())
    }
}

impl From<Vec<Self>> for Value {
    fn from(values: Vec<Self>) -> Self {
        Self::List(Rc::new(values))
    }
}

impl Value {
    /// Returns the display name of the value's type.
    ///
    /// These names appear verbatim in runtime error messages.
    ///
    /// # Example
    /// ```
    /// use petrel::interpreter::value::Value;
    ///
    /// assert_eq!(Value::Integer(1).type_name(), "int");
    /// assert_eq!(Value::Str("a".to_string()).type_name(), "str");
    /// assert_eq!(Value::Null.type_name(), "NULL");
    /// ```
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Integer(_) => "int",
            Self::Bool(_) => "bool",
            Self::Str(_) => "str",
            Self::Null => "NULL",
            Self::List(_) => "List",
            Self::Function(_) => "FUNCTION",
            Self::Builtin(_) => "BUILTIN",
            Self::Return(_) => "RETURN_VALUE",
        }
    }

    /// Returns `true` if the value is [`Integer`].
    ///
    /// [`Integer`]: Value::Integer
    #[must_use]
    pub const fn is_integer(&self) -> bool {
        matches!(self, Self::Integer(..))
    }
}

impl std::fmt::Display for Value {
    /// Writes the value's inspect form.
    ///
    /// Strings are quoted in inspect form; `print` strips the quotes when
    /// writing them out.
    ///
    /// # Example
    /// ```
    /// use std::rc::Rc;
    ///
    /// use petrel::interpreter::value::Value;
    ///
    /// let list = Value::List(Rc::new(vec![Value::Integer(1), Value::Str("x".to_string())]));
    /// assert_eq!(list.to_string(), "[1, \"x\"]");
    /// assert_eq!(Value::Null.to_string(), "null");
    /// ```
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Integer(value) => write!(f, "{value}"),
            Self::Bool(value) => write!(f, "{value}"),
            Self::Str(text) => write!(f, "\"{text}\""),
            Self::Null => write!(f, "null"),
            Self::List(items) => {
                write!(f, "[")?;

                for (index, item) in items.iter().enumerate() {
                    if index > 0 {
                        write!(f, ", ")?;
                    }

                    write!(f, "{item}")?;
                }

                write!(f, "]")
            },
            Self::Function(function) => {
                write!(f,
                       "fn({}) {{\n{}\n}}",
                       function.parameters.join(", "),
                       function.body)
            },
            Self::Builtin(_) => write!(f, "BUILTIN_FUNCTION"),
            Self::Return(value) => write!(f, "{value}"),
        }
    }
}
