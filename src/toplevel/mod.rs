//! # Declaration processor
//!
//! Folds the declarations of a program into a typing environment and a value
//! environment, one declaration at a time.
//!
//! ```text
//!            (dec x T)
//! [none] ───────────────→ [pending x : T]
//!   ↑  (def y E)                │  (def y E): checked against T, bound as x
//!   └── synth, eval, bind ──────┘
//!                               │  (dec z U): x is reported missing,
//!                               └─ then (dec z U) is processed from [none]
//! ```
//!
//! Every completed definition appends an [`Outcome`] to the log, which the
//! driver drains with [`Processor::flush`] after each declaration.

use std::fmt;
use std::mem;

use crate::core::{Ldec, Lexp, Ltype};
use crate::error::Error;
use crate::interpreter::{Scope, Value, initial_scope};
use crate::types::{TypeEnv, TypeError, initial_type_env, synthesize};

/// One printable result line.
#[derive(Debug, Clone)]
pub enum Outcome {
    Defined {
        name: String,
        value: Value,
        ty: Ltype,
    },
    /// A declaration that was never followed by its definition
    MissingDefinition { name: String, ty: Ltype },
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Outcome::Defined { value, ty, .. } => write!(f, "  {} : {}", value, ty),
            Outcome::MissingDefinition { name, ty } => {
                write!(f, "  <missing definition of {}> : {}", name, ty)
            }
        }
    }
}

#[derive(Debug)]
pub struct Processor {
    types: TypeEnv,
    values: Scope,
    pending: Option<(String, Ltype)>,
    log: Vec<Outcome>,
}

impl Default for Processor {
    fn default() -> Self {
        Self::new()
    }
}

impl Processor {
    pub fn new() -> Self {
        Processor {
            types: initial_type_env(),
            values: initial_scope(),
            pending: None,
            log: Vec::new(),
        }
    }

    pub fn types(&self) -> &TypeEnv {
        &self.types
    }

    pub fn values(&self) -> &Scope {
        &self.values
    }

    /// The declaration waiting for its definition, if any.
    pub fn pending(&self) -> Option<(&str, &Ltype)> {
        self.pending.as_ref().map(|(name, ty)| (name.as_str(), ty))
    }

    pub fn process(&mut self, decl: &Ldec) -> Result<(), Error> {
        match (self.pending.take(), decl) {
            (None, Ldec::Dec { name, ty }) => {
                log::debug!("{} declared as {}, awaiting definition", name, ty);
                self.pending = Some((name.clone(), ty.clone()));
                Ok(())
            }
            (Some((name, ty)), Ldec::Dec { .. }) => {
                log::warn!("{} was declared but never defined", name);
                self.log.push(Outcome::MissingDefinition { name, ty });
                self.process(decl)
            }
            (None, Ldec::Def { name, expr }) => self.define(name, expr),
            (Some((name, declared)), Ldec::Def { expr, .. }) => {
                self.define_declared(name, declared, expr)
            }
        }
    }

    fn define(&mut self, name: &str, expr: &Lexp) -> Result<(), Error> {
        let ty = synthesize(&self.types, expr)?;
        let value = expr.eval(&self.values)?;
        log::debug!("defined {} : {}", name, ty);

        self.types = self.types.extend(name, ty.clone());
        self.values = self.values.extend(name, value.clone());
        self.log.push(Outcome::Defined {
            name: name.to_string(),
            value,
            ty,
        });
        Ok(())
    }

    /// The declared name is in scope of its own definition, both for typing
    /// and, through a reserved slot, for evaluation.
    fn define_declared(&mut self, name: String, declared: Ltype, expr: &Lexp) -> Result<(), Error> {
        let types = self.types.extend(name.clone(), declared.clone());
        let found = synthesize(&types, expr)?;
        if found != declared {
            return Err(TypeError::DeclarationMismatch {
                name,
                expected: declared,
                found,
            }
            .into());
        }

        let values = self.values.reserve(name.clone());
        let value = expr.eval(&values)?;
        let filled = values.fill(value.clone());
        debug_assert!(filled.is_ok(), "a freshly reserved slot is empty");
        log::debug!("defined declared {} : {}", name, declared);

        self.types = types;
        self.values = values;
        self.log.push(Outcome::Defined {
            name,
            value,
            ty: declared,
        });
        Ok(())
    }

    /// Take the outcomes logged since the previous flush, oldest first.
    pub fn flush(&mut self) -> Vec<Outcome> {
        mem::take(&mut self.log)
    }

    /// End of input: a declaration still pending is reported missing.
    pub fn finish(mut self) -> Vec<Outcome> {
        if let Some((name, ty)) = self.pending.take() {
            log::warn!("{} was declared but never defined", name);
            self.log.push(Outcome::MissingDefinition { name, ty });
        }
        self.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(name: &str, ty: Ltype) -> Ldec {
        Ldec::Dec {
            name: name.to_string(),
            ty,
        }
    }

    fn def(name: &str, expr: Lexp) -> Ldec {
        Ldec::Def {
            name: name.to_string(),
            expr: Lexp::let_in(name, expr, Lexp::var(name)),
        }
    }

    #[test]
    fn test_declaration_alone_prints_nothing() {
        let mut processor = Processor::new();
        processor.process(&dec("x", Ltype::Int)).unwrap();
        assert!(processor.flush().is_empty());
        assert_eq!(processor.pending(), Some(("x", &Ltype::Int)));
    }

    #[test]
    fn test_definition_binds_both_environments() {
        let mut processor = Processor::new();
        processor.process(&def("x", Lexp::Num(5))).unwrap();

        assert_eq!(processor.types().get("x"), Some(&Ltype::Int));
        assert_eq!(processor.values().get("x").and_then(Value::as_int), Some(5));

        let lines: Vec<String> = processor.flush().iter().map(|o| o.to_string()).collect();
        assert_eq!(lines, vec!["  5 : Int"]);
    }

    #[test]
    fn test_declared_definition_binds_declared_name() {
        let mut processor = Processor::new();
        processor.process(&dec("x", Ltype::Int)).unwrap();
        processor.process(&def("y", Lexp::Num(3))).unwrap();

        assert!(processor.pending().is_none());
        assert_eq!(processor.values().get("x").and_then(Value::as_int), Some(3));
    }

    #[test]
    fn test_consecutive_declarations_report_missing_definition() {
        let mut processor = Processor::new();
        processor.process(&dec("x", Ltype::Int)).unwrap();
        processor.process(&dec("y", Ltype::Int)).unwrap();

        let outcomes = processor.flush();
        assert!(matches!(
            outcomes.as_slice(),
            [Outcome::MissingDefinition { name, .. }] if name == "x"
        ));
        assert_eq!(processor.pending(), Some(("y", &Ltype::Int)));
    }

    #[test]
    fn test_mismatched_definition_is_fatal() {
        let mut processor = Processor::new();
        processor
            .process(&dec("f", Ltype::int_function(1)))
            .unwrap();
        let err = processor.process(&def("f", Lexp::Num(1))).unwrap_err();
        assert_eq!(
            err,
            Error::Type(TypeError::DeclarationMismatch {
                name: "f".to_string(),
                expected: Ltype::int_function(1),
                found: Ltype::Int,
            })
        );
    }

    #[test]
    fn test_finish_reports_trailing_declaration() {
        let mut processor = Processor::new();
        processor.process(&dec("x", Ltype::Int)).unwrap();
        let outcomes = processor.finish();
        assert_eq!(outcomes.len(), 1);
        assert_eq!(outcomes[0].to_string(), "  <missing definition of x> : Int");
    }
}
