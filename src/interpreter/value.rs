use std::fmt;
use std::rc::Rc;

use crate::core::Lexp;
use crate::env::Env;

use super::error::{EvalError, EvalResult};

/// Value environment: variable name to runtime value, newest binding wins.
pub type Scope = Env<Value>;

/// A function value together with the environment it was created in
#[derive(Debug, Clone)]
pub struct Closure {
    pub env: Scope,
    pub param: String,
    pub body: Lexp,
}

type PrimitiveFn = Rc<dyn Fn(Value) -> EvalResult<Value>>;

/// Built-in curried operation. Each application consumes one argument and
/// returns either the result or another primitive waiting for the next one.
#[derive(Clone)]
pub struct Primitive {
    pub name: &'static str,
    /// Arguments consumed so far
    pub applied: usize,
    op: PrimitiveFn,
}

impl Primitive {
    pub fn new(
        name: &'static str,
        applied: usize,
        op: impl Fn(Value) -> EvalResult<Value> + 'static,
    ) -> Self {
        Primitive {
            name,
            applied,
            op: Rc::new(op),
        }
    }

    pub fn apply(&self, arg: Value) -> EvalResult<Value> {
        (self.op)(arg)
    }
}

impl fmt::Debug for Primitive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Primitive")
            .field("name", &self.name)
            .field("applied", &self.applied)
            .finish_non_exhaustive()
    }
}

/// Runtime value representation
#[derive(Debug, Clone)]
pub enum Value {
    Int(i64),
    Closure(Closure),
    Primitive(Primitive),
}

impl Value {
    pub fn primitive(
        name: &'static str,
        applied: usize,
        op: impl Fn(Value) -> EvalResult<Value> + 'static,
    ) -> Self {
        Value::Primitive(Primitive::new(name, applied, op))
    }

    /// The integer inside, or an error naming the operation that needed it.
    pub fn expect_int(&self, operation: &str) -> EvalResult<i64> {
        match self {
            Value::Int(n) => Ok(*n),
            other => Err(EvalError::NotAnInteger {
                operation: operation.to_string(),
                found: other.to_string(),
            }),
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(n) => Some(*n),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(n) => write!(f, "{}", n),
            Value::Closure(_) => f.write_str("<function>"),
            Value::Primitive(_) => f.write_str("<primitive>"),
        }
    }
}
