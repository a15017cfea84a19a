//! Rendering for Psil
//!
//! `Display` implementations for symbolic expressions (the surface syntax,
//! used in diagnostics) and for the core language (types, expressions and
//! declarations, used in results and `--dump-ast` output).

pub mod core;
pub mod sexp;
