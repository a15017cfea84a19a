use crate::core::{BUILTINS, Ltype, builtin_type};
use crate::env::Env;

/// Typing environment: variable name to type, newest binding wins.
pub type TypeEnv = Env<Ltype>;

/// The typing environment every program starts in: the built-in operators.
pub fn initial_type_env() -> TypeEnv {
    TypeEnv::with_bindings(
        BUILTINS
            .iter()
            .filter_map(|name| builtin_type(name).map(|ty| (name.to_string(), ty))),
    )
}
