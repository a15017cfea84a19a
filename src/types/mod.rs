pub mod check;
pub mod env;
pub mod error;

pub use check::{check, synthesize};
pub use env::{TypeEnv, initial_type_env};
pub use error::{TypeError, TypeResult};
