use std::fmt;

/// Runtime failure while evaluating an expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EvalError {
    UnboundVariable { name: String },
    /// The variable's binding exists but its value is still being computed
    UninitializedVariable { name: String },
    /// Something other than a closure or primitive was applied
    NotCallable { found: String },
    NotAnInteger { operation: String, found: String },
    DivisionByZero,
}

impl fmt::Display for EvalError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            EvalError::UnboundVariable { name } => {
                write!(f, "Runtime error: unbound variable: {}", name)
            }
            EvalError::UninitializedVariable { name } => write!(
                f,
                "Runtime error: {} is used before its definition completes",
                name
            ),
            EvalError::NotCallable { found } => {
                write!(f, "Runtime error: cannot apply non-function value {}", found)
            }
            EvalError::NotAnInteger { operation, found } => write!(
                f,
                "Runtime error: {} expects an integer, got {}",
                operation, found
            ),
            EvalError::DivisionByZero => f.write_str("Runtime error: division by zero"),
        }
    }
}

impl std::error::Error for EvalError {}

pub type EvalResult<T> = Result<T, EvalError>;
