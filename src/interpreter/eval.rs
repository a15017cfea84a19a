//! Evaluator for the core language
//!
//! Evaluation is strict and environment-based: a function literal becomes a
//! closure over the scope it is evaluated in, and type annotations are
//! erased.
//!
//! Two kinds of local binding are bound *two-phase*: the name's slot is
//! reserved first, a closure is built over the scope containing that slot,
//! and the slot is then filled with the closure. The closure can therefore
//! refer to the name it is bound to.
//!
//! - `let x = (v -> T)`: the binding produced by `(dec x T)` becomes a
//!   placeholder closure whose parameter is `x` and whose body is the
//!   annotated reference.
//! - `let x = (x (g e))`: a definition applying itself is not evaluated;
//!   `x` becomes a closure with parameter `g` and body `e`. Only an outer
//!   function named `x` itself takes this path; `(f (g e))` bound to any
//!   other name is evaluated like every other binding.
//!
//! Any other binding, function literals included, evaluates its right-hand
//! side in the outer scope. A function calls itself only through a declared
//! name, whose slot the declaration processor reserves.

use crate::core::Lexp;
use crate::env::Lookup;

use super::error::{EvalError, EvalResult};
use super::value::{Closure, Scope, Value};

impl Lexp {
    pub fn eval(&self, scope: &Scope) -> EvalResult<Value> {
        evaluate(scope, self)
    }
}

pub fn evaluate(scope: &Scope, expr: &Lexp) -> EvalResult<Value> {
    match expr {
        Lexp::Num(n) => Ok(Value::Int(*n)),
        Lexp::Var(name) => lookup(scope, name),
        Lexp::HasType { expr, .. } => evaluate(scope, expr),
        Lexp::Fun { param, body } => Ok(closure(scope.clone(), param, body)),
        Lexp::App { func, arg } => {
            if let Some(value) = eval_if0(scope, expr)? {
                return Ok(value);
            }
            let func = evaluate(scope, func)?;
            let arg = evaluate(scope, arg)?;
            apply(func, arg)
        }
        Lexp::Let { name, bound, body } => {
            let scope = bind(scope, name, bound)?;
            evaluate(&scope, body)
        }
    }
}

pub fn apply(func: Value, arg: Value) -> EvalResult<Value> {
    match func {
        Value::Primitive(prim) => prim.apply(arg),
        Value::Closure(Closure { env, param, body }) => evaluate(&env.extend(param, arg), &body),
        other => Err(EvalError::NotCallable {
            found: other.to_string(),
        }),
    }
}

fn lookup(scope: &Scope, name: &str) -> EvalResult<Value> {
    match scope.lookup(name) {
        Lookup::Bound(value) => Ok(value.clone()),
        Lookup::Reserved => Err(EvalError::UninitializedVariable {
            name: name.to_string(),
        }),
        Lookup::Unbound => Err(EvalError::UnboundVariable {
            name: name.to_string(),
        }),
    }
}

fn closure(env: Scope, param: &str, body: &Lexp) -> Value {
    Value::Closure(Closure {
        env,
        param: param.to_string(),
        body: body.clone(),
    })
}

fn bind_closure(scope: &Scope, name: &str, param: &str, body: &Lexp) -> Scope {
    let scope = scope.reserve(name);
    let filled = scope.fill(closure(scope.clone(), param, body));
    debug_assert!(filled.is_ok(), "a freshly reserved slot is empty");
    log::trace!("bound {} to a closure over its own slot", name);
    scope
}

/// Scope for the body of `let name = bound`.
fn bind(scope: &Scope, name: &str, bound: &Lexp) -> EvalResult<Scope> {
    match bound {
        Lexp::HasType { expr, .. } if expr.as_var().is_some() => {
            Ok(bind_closure(scope, name, name, bound))
        }
        Lexp::App { func, arg } if func.as_var() == Some(name) => match arg.as_ref() {
            Lexp::App {
                func: inner,
                arg: innermost,
            } => match inner.as_var() {
                Some(param) => Ok(bind_closure(scope, name, param, innermost)),
                None => bind_strict(scope, name, bound),
            },
            _ => bind_strict(scope, name, bound),
        },
        _ => bind_strict(scope, name, bound),
    }
}

fn bind_strict(scope: &Scope, name: &str, bound: &Lexp) -> EvalResult<Scope> {
    let value = evaluate(scope, bound)?;
    Ok(scope.extend(name, value))
}

/// `(if0 c t e)` with the built-in `if0` at its head evaluates only the
/// selected branch. Returns `None` for every other expression.
fn eval_if0(scope: &Scope, expr: &Lexp) -> EvalResult<Option<Value>> {
    let Lexp::App {
        func,
        arg: else_expr,
    } = expr
    else {
        return Ok(None);
    };
    let Lexp::App {
        func,
        arg: then_expr,
    } = func.as_ref()
    else {
        return Ok(None);
    };
    let Lexp::App {
        func: head,
        arg: condition,
    } = func.as_ref()
    else {
        return Ok(None);
    };

    let is_builtin = match head.as_var().map(|name| scope.lookup(name)) {
        Some(Lookup::Bound(Value::Primitive(prim))) => prim.name == "if0" && prim.applied == 0,
        _ => false,
    };
    if !is_builtin {
        return Ok(None);
    }

    let condition = evaluate(scope, condition)?.expect_int("if0")?;
    let branch = if condition == 0 { then_expr } else { else_expr };
    evaluate(scope, branch).map(Some)
}
