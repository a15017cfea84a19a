//! # Type Error Definitions
//!
//! Errors raised by the type checker:
//!
//! - A variable is used but not bound (`UnknownVariable`)
//! - A non-function is applied (`NotAFunction`)
//! - A function is applied to a non-integer (`NotAnInteger`)
//! - A checked type disagrees with the expected one (`Mismatch`)
//! - A definition disagrees with its declaration (`DeclarationMismatch`)
//!
//! Expressions are carried pre-rendered, so messages show the offending
//! source form.

use std::fmt;

use crate::core::Ltype;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeError {
    UnknownVariable {
        name: String,
    },

    /// The function side of an application does not have an arrow type.
    NotAFunction {
        expr: String,
        found: Ltype,
    },

    /// The argument side of an application is not an `Int`.
    NotAnInteger {
        expr: String,
        found: Ltype,
    },

    Mismatch {
        expected: Ltype,
        found: Ltype,
        expr: String,
    },

    /// A definition whose type differs from the pending `(dec name T)`.
    DeclarationMismatch {
        name: String,
        expected: Ltype,
        found: Ltype,
    },
}

impl TypeError {
    pub fn unknown_variable(name: impl Into<String>) -> Self {
        TypeError::UnknownVariable { name: name.into() }
    }

    pub fn mismatch(expected: Ltype, found: Ltype, expr: impl fmt::Display) -> Self {
        TypeError::Mismatch {
            expected,
            found,
            expr: expr.to_string(),
        }
    }
}

impl fmt::Display for TypeError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            TypeError::UnknownVariable { name } => {
                write!(f, "Type error: unknown variable: {}", name)
            }
            TypeError::NotAFunction { expr, found } => write!(
                f,
                "Type error: {} is applied but has type {}, which is not a function",
                expr, found
            ),
            TypeError::NotAnInteger { expr, found } => write!(
                f,
                "Type error: argument {} has type {}, expected Int",
                expr, found
            ),
            TypeError::Mismatch {
                expected,
                found,
                expr,
            } => write!(
                f,
                "Type error: type mismatch in {}: expected {}, found {}",
                expr, expected, found
            ),
            TypeError::DeclarationMismatch {
                name,
                expected,
                found,
            } => write!(
                f,
                "Type error: definition of {} has type {}, but it was declared {}",
                name, found, expected
            ),
        }
    }
}

impl std::error::Error for TypeError {}

pub type TypeResult<T> = Result<T, TypeError>;
