//! Built-in operators of the initial value environment.
//!
//! `+ - * /` are curried binary operations on machine integers (wrapping on
//! overflow, division truncating toward zero). `if0 c t e` yields `t` when
//! `c` is zero and `e` otherwise.

use crate::core::BUILTINS;

use super::error::{EvalError, EvalResult};
use super::value::{Scope, Value};

fn binary(name: &'static str, op: fn(i64, i64) -> EvalResult<i64>) -> Value {
    Value::primitive(name, 0, move |left| {
        let left = left.expect_int(name)?;
        Ok(Value::primitive(name, 1, move |right| {
            let right = right.expect_int(name)?;
            op(left, right).map(Value::Int)
        }))
    })
}

fn if0() -> Value {
    Value::primitive("if0", 0, |condition| {
        let is_zero = condition.expect_int("if0")? == 0;
        Ok(Value::primitive("if0", 1, move |then_value| {
            Ok(Value::primitive("if0", 2, move |else_value| {
                Ok(if is_zero {
                    then_value.clone()
                } else {
                    else_value
                })
            }))
        }))
    })
}

fn divide(left: i64, right: i64) -> EvalResult<i64> {
    if right == 0 {
        return Err(EvalError::DivisionByZero);
    }
    Ok(left.wrapping_div(right))
}

pub fn builtin(name: &str) -> Option<Value> {
    match name {
        "+" => Some(binary("+", |a, b| Ok(a.wrapping_add(b)))),
        "-" => Some(binary("-", |a, b| Ok(a.wrapping_sub(b)))),
        "*" => Some(binary("*", |a, b| Ok(a.wrapping_mul(b)))),
        "/" => Some(binary("/", divide)),
        "if0" => Some(if0()),
        _ => None,
    }
}

/// The value environment every program starts in.
pub fn initial_scope() -> Scope {
    Scope::with_bindings(
        BUILTINS
            .iter()
            .filter_map(|name| builtin(name).map(|value| (name.to_string(), value))),
    )
}
