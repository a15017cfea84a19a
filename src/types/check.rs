//! Bidirectional type checking over the core language.
//!
//! [`synthesize`] computes the type of an expression; [`check`] compares a
//! synthesized type with an expected one by structural equality. Function
//! parameters are always `Int`, and an argument must synthesize exactly
//! `Int`. There are no type variables and nothing is inferred beyond this.

use crate::core::{Lexp, Ltype};

use super::env::TypeEnv;
use super::error::{TypeError, TypeResult};

pub fn synthesize(env: &TypeEnv, expr: &Lexp) -> TypeResult<Ltype> {
    match expr {
        Lexp::Num(_) => Ok(Ltype::Int),

        Lexp::Var(name) => env
            .get(name)
            .cloned()
            .ok_or_else(|| TypeError::unknown_variable(name.clone())),

        Lexp::HasType { expr, ty } => {
            check(env, expr, ty)?;
            Ok(ty.clone())
        }

        Lexp::Let { name, bound, body } => {
            let bound_ty = synthesize(env, bound)?;
            synthesize(&env.extend(name.clone(), bound_ty), body)
        }

        Lexp::Fun { param, body } => {
            let body_ty = synthesize(&env.extend(param.clone(), Ltype::Int), body)?;
            Ok(Ltype::arrow(Ltype::Int, body_ty))
        }

        Lexp::App { func, arg } => match synthesize(env, func)? {
            Ltype::Arrow(_, codomain) => {
                let arg_ty = synthesize(env, arg)?;
                if arg_ty != Ltype::Int {
                    return Err(TypeError::NotAnInteger {
                        expr: arg.to_string(),
                        found: arg_ty,
                    });
                }
                Ok(*codomain)
            }
            found => Err(TypeError::NotAFunction {
                expr: func.to_string(),
                found,
            }),
        },
    }
}

/// Check `expr` against `expected`.
///
/// A bare variable is re-synthesized with itself bound to `expected`, so
/// `(x -> T)` holds for any `x`, bound or not.
pub fn check(env: &TypeEnv, expr: &Lexp, expected: &Ltype) -> TypeResult<()> {
    let found = match expr {
        Lexp::Var(name) => synthesize(&env.extend(name.clone(), expected.clone()), expr)?,
        _ => synthesize(env, expr)?,
    };

    if &found == expected {
        Ok(())
    } else {
        Err(TypeError::mismatch(expected.clone(), found, expr))
    }
}
