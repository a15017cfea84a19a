use std::fmt;

use crate::elab::ElabError;
use crate::interpreter::EvalError;
use crate::parser::ReadError;
use crate::types::TypeError;

/// Any fatal condition that ends a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    Read(ReadError),
    Elab(ElabError),
    Type(TypeError),
    Eval(EvalError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::Read(err) => write!(f, "{}", err),
            Error::Elab(err) => write!(f, "{}", err),
            Error::Type(err) => write!(f, "{}", err),
            Error::Eval(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Read(err) => Some(err),
            Error::Elab(err) => Some(err),
            Error::Type(err) => Some(err),
            Error::Eval(err) => Some(err),
        }
    }
}

impl From<ReadError> for Error {
    fn from(err: ReadError) -> Self {
        Error::Read(err)
    }
}

impl From<ElabError> for Error {
    fn from(err: ElabError) -> Self {
        Error::Elab(err)
    }
}

impl From<TypeError> for Error {
    fn from(err: TypeError) -> Self {
        Error::Type(err)
    }
}

impl From<EvalError> for Error {
    fn from(err: EvalError) -> Self {
        Error::Eval(err)
    }
}
