//! # Elaborator - Symbolic expressions to the core language
//!
//! Turns one [`Sexp`] into a type, an expression or a declaration. Every
//! recognized surface shape has its own arm; anything else is an
//! [`ElabError`] carrying the rendered form. There is no partial elaboration.
//!
//! ## Types
//!
//! ```text
//! Int | <integer>            → Int
//! (T)                        → T
//! (fun x B)                  → Int -> B
//! (A -> B)                   → A -> B
//! (A B)                      → A -> B
//! + - * / if0                → their built-in arrow types
//! ```
//!
//! Because lists are stored head-first, the prefix of `(Int -> Int -> Int)` is
//! the list `(Int -> Int)`, so multi-arrow types come out left-nested. The one
//! shape `((Int -> Int) -> Int)` is re-associated to `(Int -> (Int -> Int))`;
//! no other type is rewritten.
//!
//! ## Expressions
//!
//! ```text
//! <integer> | <symbol>       → constant | variable
//! (E -> T)                   → E ascribed to T
//! (let ((x E1) ...) E2)      → nested local bindings
//! (dec x T)                  → let x = (x -> T) in x
//! (def x V)                  → let x = V in x
//! (fun x B)                  → one-parameter function
//! (op A B)                   → ((op A) B)
//! (L . R)                    → L applied to R
//! ```
//!
//! `(def x V)` binds `x` around its own body so a definition is in scope of
//! itself; the interpreter relies on this for recursion.

pub mod error;

pub use error::{ElabError, ElabResult, FormKind};

use crate::core::{Ldec, Lexp, Ltype, builtin_type};
use crate::sexp::Sexp;

const ARROW: &str = "->";
const KEYWORDS: [&str; 4] = ["def", "dec", "let", "fun"];

/// `((Int -> Int) -> Int)` becomes `(Int -> (Int -> Int))`; every other
/// domain/codomain pair is kept as written.
fn arrow(domain: Ltype, codomain: Ltype) -> Ltype {
    if codomain == Ltype::Int && domain == Ltype::int_function(1) {
        Ltype::int_function(2)
    } else {
        Ltype::arrow(domain, codomain)
    }
}

pub fn elab_type(sexp: &Sexp) -> ElabResult<Ltype> {
    let unrecognized = || ElabError::unrecognized(FormKind::Type, sexp);

    match sexp {
        Sexp::Number(_) => Ok(Ltype::Int),
        Sexp::Symbol(name) if name == "Int" => Ok(Ltype::Int),
        Sexp::Symbol(name) => builtin_type(name).ok_or_else(unrecognized),
        Sexp::Nil => Err(unrecognized()),
        Sexp::Pair(prefix, last) => {
            if let Sexp::Nil = prefix.as_ref() {
                return elab_type(last);
            }

            if let Some(items) = sexp.list_items() {
                if let [Sexp::Symbol(kw), Sexp::Symbol(_), body] = items.as_slice() {
                    if kw == "fun" {
                        return Ok(Ltype::arrow(Ltype::Int, elab_type(body)?));
                    }
                }
            }

            match prefix.as_ref() {
                Sexp::Pair(domain, op) if op.as_symbol() == Some(ARROW) => {
                    Ok(arrow(elab_type(domain)?, elab_type(last)?))
                }
                Sexp::Pair(_, _) => Ok(arrow(elab_type(prefix)?, elab_type(last)?)),
                _ => Err(unrecognized()),
            }
        }
    }
}

fn elab_bindings(bindings: &Sexp, body: Lexp, form: &Sexp) -> ElabResult<Lexp> {
    let unrecognized = || ElabError::unrecognized(FormKind::Expression, form);
    let items = bindings.list_items().ok_or_else(unrecognized)?;

    items
        .into_iter()
        .rev()
        .try_fold(body, |body, binding| match binding.list_items().as_deref() {
            Some([Sexp::Symbol(name), bound]) => {
                Ok(Lexp::let_in(name.clone(), elab_expr(bound)?, body))
            }
            _ => Err(unrecognized()),
        })
}

fn elab_keyword_form(items: &[&Sexp], form: &Sexp) -> ElabResult<Lexp> {
    match items {
        [Sexp::Symbol(kw), bindings, body] if kw == "let" => {
            elab_bindings(bindings, elab_expr(body)?, form)
        }
        [Sexp::Symbol(kw), Sexp::Symbol(name), ty] if kw == "dec" => Ok(Lexp::let_in(
            name.clone(),
            Lexp::has_type(Lexp::var(name.clone()), elab_type(ty)?),
            Lexp::var(name.clone()),
        )),
        [Sexp::Symbol(kw), Sexp::Symbol(name), value] if kw == "def" => Ok(Lexp::let_in(
            name.clone(),
            elab_expr(value)?,
            Lexp::var(name.clone()),
        )),
        [Sexp::Symbol(kw), Sexp::Symbol(param), body] if kw == "fun" => {
            Ok(Lexp::fun(param.clone(), elab_expr(body)?))
        }
        _ => Err(ElabError::unrecognized(FormKind::Expression, form)),
    }
}

pub fn elab_expr(sexp: &Sexp) -> ElabResult<Lexp> {
    match sexp {
        Sexp::Number(n) => Ok(Lexp::Num(*n)),
        Sexp::Symbol(name) => Ok(Lexp::var(name.clone())),
        Sexp::Nil => Err(ElabError::unrecognized(FormKind::Expression, sexp)),
        Sexp::Pair(prefix, last) => {
            if let Sexp::Nil = prefix.as_ref() {
                return elab_expr(last);
            }

            if let Some(items) = sexp.list_items() {
                match items.as_slice() {
                    [expr, Sexp::Symbol(op), ty] if op == ARROW => {
                        return Ok(Lexp::has_type(elab_expr(expr)?, elab_type(ty)?));
                    }
                    [Sexp::Symbol(kw), ..] if KEYWORDS.contains(&kw.as_str()) => {
                        return elab_keyword_form(&items, sexp);
                    }
                    _ => {}
                }
            }

            // (op a b) is ((() . op) . a) . b, so this yields ((op a) b)
            Ok(Lexp::app(elab_expr(prefix)?, elab_expr(last)?))
        }
    }
}

pub fn elab_declaration(sexp: &Sexp) -> ElabResult<Ldec> {
    let decl = match sexp.list_items().as_deref() {
        Some([Sexp::Symbol(kw), Sexp::Symbol(name), _]) if kw == "def" => Ldec::Def {
            name: name.clone(),
            expr: elab_expr(sexp)?,
        },
        Some([Sexp::Symbol(kw), Sexp::Symbol(name), ty]) if kw == "dec" => Ldec::Dec {
            name: name.clone(),
            ty: elab_type(ty)?,
        },
        _ => return Err(ElabError::unrecognized(FormKind::Declaration, sexp)),
    };

    log::trace!("elaborated {}", decl);
    Ok(decl)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::read_all;

    fn parse(source: &str) -> Sexp {
        read_all(source).unwrap().remove(0)
    }

    #[test]
    fn test_type_forms() {
        assert_eq!(elab_type(&parse("Int")).unwrap(), Ltype::Int);
        assert_eq!(elab_type(&parse("(Int)")).unwrap(), Ltype::Int);
        assert_eq!(
            elab_type(&parse("(Int -> Int)")).unwrap(),
            Ltype::int_function(1)
        );
        assert_eq!(
            elab_type(&parse("(fun x Int)")).unwrap(),
            Ltype::int_function(1)
        );
        assert_eq!(elab_type(&parse("if0")).unwrap(), Ltype::int_function(3));
    }

    #[test]
    fn test_only_one_shape_is_reassociated() {
        assert_eq!(
            elab_type(&parse("((Int -> Int) -> Int)")).unwrap(),
            Ltype::int_function(2)
        );
        assert_eq!(
            elab_type(&parse("(Int -> (Int -> Int))")).unwrap(),
            Ltype::int_function(2)
        );
        let higher = Ltype::arrow(Ltype::int_function(2), Ltype::Int);
        assert_eq!(
            elab_type(&parse("((Int -> (Int -> Int)) -> Int)")).unwrap(),
            higher
        );
    }

    #[test]
    fn test_unknown_type_symbol() {
        let err = elab_type(&parse("Bool")).unwrap_err();
        assert_eq!(err.kind, FormKind::Type);
        assert_eq!(err.form, "Bool");
    }

    #[test]
    fn test_prefix_application_is_curried() {
        let expr = elab_expr(&parse("(+ 2 3)")).unwrap();
        assert_eq!(
            expr,
            Lexp::app(Lexp::app(Lexp::var("+"), Lexp::Num(2)), Lexp::Num(3))
        );
    }

    #[test]
    fn test_ascription() {
        let expr = elab_expr(&parse("(x -> Int)")).unwrap();
        assert_eq!(expr, Lexp::has_type(Lexp::var("x"), Ltype::Int));
    }

    #[test]
    fn test_let_bindings_nest_left_to_right() {
        let expr = elab_expr(&parse("(let ((x 1) (y x)) y)")).unwrap();
        assert_eq!(
            expr,
            Lexp::let_in(
                "x",
                Lexp::Num(1),
                Lexp::let_in("y", Lexp::var("x"), Lexp::var("y"))
            )
        );
        assert_eq!(elab_expr(&parse("(let () 7)")).unwrap(), Lexp::Num(7));
    }

    #[test]
    fn test_dec_and_def_expressions() {
        assert_eq!(
            elab_expr(&parse("(dec x Int)")).unwrap(),
            Lexp::let_in(
                "x",
                Lexp::has_type(Lexp::var("x"), Ltype::Int),
                Lexp::var("x")
            )
        );
        assert_eq!(
            elab_expr(&parse("(def x 5)")).unwrap(),
            Lexp::let_in("x", Lexp::Num(5), Lexp::var("x"))
        );
    }

    #[test]
    fn test_misused_keyword_is_rejected() {
        let err = elab_expr(&parse("(fun (x) 1)")).unwrap_err();
        assert_eq!(err.kind, FormKind::Expression);
        assert!(elab_expr(&parse("(let x 1)")).is_err());
    }

    #[test]
    fn test_declarations() {
        assert_eq!(
            elab_declaration(&parse("(dec f (Int -> Int))")).unwrap(),
            Ldec::Dec {
                name: "f".to_string(),
                ty: Ltype::int_function(1),
            }
        );
        let def = elab_declaration(&parse("(def x 5)")).unwrap();
        assert_eq!(def.name(), "x");
        let err = elab_declaration(&parse("(+ 1 2)")).unwrap_err();
        assert_eq!(err.kind, FormKind::Declaration);
    }
}
