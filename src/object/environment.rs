//! Lexical scopes: a name-to-value map plus an optional outer link.
//!
//! Environments are shared via `Rc<RefCell<...>>` so that a closure can hold
//! a handle to the frame it was defined in without that frame being copied
//! or going out of scope while the closure is still reachable.

use super::Value;
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

#[derive(Debug, Default)]
struct EnvironmentImpl {
    store: HashMap<String, Value>,
    outer: Option<Environment>,
}

/// A reference-counted handle to a single lexical scope.
#[derive(Debug, Clone)]
pub struct Environment(Rc<RefCell<EnvironmentImpl>>);

impl Environment {
    /// A fresh, outer-less environment (the program's top-level scope).
    pub fn new() -> Self {
        Environment(Rc::new(RefCell::new(EnvironmentImpl::default())))
    }

    /// A child scope whose lookups fall back to `self` when a name is not
    /// found locally. Used for function-call frames and block scopes.
    pub fn enclose(outer: &Environment) -> Self {
        Environment(Rc::new(RefCell::new(EnvironmentImpl {
            store: HashMap::new(),
            outer: Some(outer.clone()),
        })))
    }

    /// Looks up `name`, walking outer links until found or exhausted.
    pub fn get(&self, name: &str) -> Option<Value> {
        let inner = self.0.borrow();
        match inner.store.get(name) {
            Some(value) => Some(value.clone()),
            None => inner.outer.as_ref().and_then(|outer| outer.get(name)),
        }
    }

    /// Binds `name` to `value` in this frame (not an outer one), returning
    /// the value back to the caller so `let x = ...` can yield it.
    pub fn set(&self, name: impl Into<String>, value: Value) -> Value {
        self.0.borrow_mut().store.insert(name.into(), value.clone());
        value
    }

    /// Pointer identity, used to compare closures by the frame they capture.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl Default for Environment {
    fn default() -> Self {
        Environment::new()
    }
}
