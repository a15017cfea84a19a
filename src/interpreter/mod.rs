//! Tree-walking interpreter for elaborated expressions.

pub mod builtins;
pub mod error;
pub mod eval;
pub mod value;

pub use builtins::initial_scope;
pub use error::{EvalError, EvalResult};
pub use eval::{apply, evaluate};
pub use value::{Closure, Primitive, Scope, Value};
