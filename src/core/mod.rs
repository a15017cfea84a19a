//! # Core language - Typed intermediate representation
//!
//! The elaborator turns symbolic expressions into the types and expressions
//! defined here; the type checker and the interpreter only ever see this
//! representation.
//!
//! ## Pipeline Position
//!
//! ```text
//! Reader → Sexp → Elaborator → [CORE] → Type Checker + Interpreter
//! ```
//!
//! ## Shape
//!
//! - Every function takes exactly one parameter, and that parameter is always
//!   an `Int`. Multi-argument calls are nested single-argument applications.
//! - Types are compared structurally; there are no type variables.
//! - A declaration is either a type declaration `(dec x T)` or a value
//!   definition `(def x E)`.

/// Type expression
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Ltype {
    Int,
    Arrow(Box<Ltype>, Box<Ltype>),
}

impl Ltype {
    pub fn arrow(domain: Ltype, codomain: Ltype) -> Self {
        Ltype::Arrow(Box::new(domain), Box::new(codomain))
    }

    /// Curried arrow over `Int`, taking `arity` arguments and returning `Int`.
    pub fn int_function(arity: usize) -> Self {
        (0..arity).fold(Ltype::Int, |codomain, _| Ltype::arrow(Ltype::Int, codomain))
    }
}

/// Names bound by the initial environments.
pub const BUILTINS: [&str; 5] = ["+", "-", "*", "/", "if0"];

/// Type of a built-in operator.
pub fn builtin_type(name: &str) -> Option<Ltype> {
    match name {
        "+" | "-" | "*" | "/" => Some(Ltype::int_function(2)),
        "if0" => Some(Ltype::int_function(3)),
        _ => None,
    }
}

/// Intermediate expression
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Lexp {
    Num(i64),
    Var(String),
    HasType {
        expr: Box<Lexp>,
        ty: Ltype,
    },
    /// Application with exactly one argument (multi-arg calls are curried)
    App {
        func: Box<Lexp>,
        arg: Box<Lexp>,
    },
    Let {
        name: String,
        bound: Box<Lexp>,
        body: Box<Lexp>,
    },
    /// Function with exactly one `Int` parameter
    Fun {
        param: String,
        body: Box<Lexp>,
    },
}

impl Lexp {
    pub fn var(name: impl Into<String>) -> Self {
        Lexp::Var(name.into())
    }

    pub fn has_type(expr: Lexp, ty: Ltype) -> Self {
        Lexp::HasType {
            expr: Box::new(expr),
            ty,
        }
    }

    pub fn app(func: Lexp, arg: Lexp) -> Self {
        Lexp::App {
            func: Box::new(func),
            arg: Box::new(arg),
        }
    }

    pub fn let_in(name: impl Into<String>, bound: Lexp, body: Lexp) -> Self {
        Lexp::Let {
            name: name.into(),
            bound: Box::new(bound),
            body: Box::new(body),
        }
    }

    pub fn fun(param: impl Into<String>, body: Lexp) -> Self {
        Lexp::Fun {
            param: param.into(),
            body: Box::new(body),
        }
    }

    pub fn as_var(&self) -> Option<&str> {
        match self {
            Lexp::Var(name) => Some(name),
            _ => None,
        }
    }
}

/// Declaration
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Ldec {
    Dec { name: String, ty: Ltype },
    Def { name: String, expr: Lexp },
}

impl Ldec {
    pub fn name(&self) -> &str {
        match self {
            Ldec::Dec { name, .. } | Ldec::Def { name, .. } => name,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_int_function_is_curried() {
        assert_eq!(Ltype::int_function(0), Ltype::Int);
        assert_eq!(
            Ltype::int_function(2),
            Ltype::arrow(Ltype::Int, Ltype::arrow(Ltype::Int, Ltype::Int))
        );
    }

    #[test]
    fn test_structural_equality() {
        let a = Ltype::arrow(Ltype::Int, Ltype::Int);
        let b = Ltype::arrow(Ltype::Int, Ltype::Int);
        assert_eq!(a, b);
        assert_ne!(a, Ltype::Int);
    }
}
