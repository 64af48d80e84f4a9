use std::{cell::RefCell, collections::HashMap, rc::Rc};

use crate::interpreter::value::Value;

/// A shared handle to an environment.
///
/// Environments are reference counted and interior mutable so that a
/// function value and the scope that defined it can hold the same
/// environment: closures observe later changes to captured bindings.
pub type Env = Rc<RefCell<Environment>>;

/// A single lexical scope: a mapping from names to values with an optional
/// parent scope.
///
/// Lookup walks the parent chain outward; binding always writes to this
/// scope, so `let` shadows rather than assigns. A function value keeps a
/// handle to the environment that was current at its definition site, and
/// each call pushes a fresh scope beneath that captured environment.
#[derive(Debug, Default)]
pub struct Environment {
    store: HashMap<String, Value>,
    outer: Option<Env>,
}

impl Environment {
    /// Creates a new empty environment with no parent.
    ///
    /// # Example
    /// ```
    /// use petrel::interpreter::environment::Environment;
    ///
    /// let env = Environment::new();
    /// assert!(env.borrow().get("x").is_none());
    /// ```
    #[must_use]
    pub fn new() -> Env {
        Rc::new(RefCell::new(Self::default()))
    }

    /// Creates a new empty scope whose parent is `outer`.
    ///
    /// Used for function calls: parameters are bound in the fresh scope while
    /// lookups still reach the function's captured environment.
    ///
    /// # Example
    /// ```
    /// use petrel::interpreter::{environment::Environment, value::Value};
    ///
    /// let outer = Environment::new();
    /// outer.borrow_mut().set("x", Value::Integer(1));
    ///
    /// let inner = Environment::enclosed(&outer);
    /// assert_eq!(inner.borrow().get("x"), Some(Value::Integer(1)));
    /// ```
    #[must_use]
    pub fn enclosed(outer: &Env) -> Env {
        Rc::new(RefCell::new(Self { store: HashMap::new(),
                                    outer: Some(Rc::clone(outer)), }))
    }

    /// Looks up a name, walking the parent chain outward.
    ///
    /// # Parameters
    /// - `name`: The name to resolve.
    ///
    /// # Returns
    /// A clone of the bound value, or `None` when the name is not bound in
    /// any reachable scope.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<Value> {
        if let Some(value) = self.store.get(name) {
            return Some(value.clone());
        }
        self.outer.as_ref().and_then(|outer| outer.borrow().get(name))
    }

    /// Binds a name in this scope.
    ///
    /// Never walks upward: re-binding a name that exists in an outer scope
    /// shadows it locally, and re-binding in the same scope replaces the
    /// previous value.
    ///
    /// # Parameters
    /// - `name`: The name to bind.
    /// - `value`: The value to store.
    pub fn set(&mut self, name: &str, value: Value) {
        self.store.insert(name.to_string(), value);
    }
}
