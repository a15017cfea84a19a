//! # Psil - a small typed Lisp, run as a batch of declarations
//!
//! A Psil program is a sequence of top-level forms, each either a type
//! declaration `(dec name Type)` or a value definition `(def name Expr)`.
//! Every definition is type checked, evaluated, and printed as
//! `  <value> : <type>` in source order.
//!
//! ## Pipeline
//!
//! ```text
//! Source Code (String)
//!     ↓
//! [Lexer] → Token Stream
//!     ↓
//! [Reader] → Symbolic expressions (sexp::Sexp), one per top-level form
//!     ↓
//! [Elaborator] → Declarations (core::Ldec)
//!     ↓
//! [Processor] → Type Checker + Interpreter, one declaration at a time
//!     ↓
//! Outcomes (toplevel::Outcome) → "  5 : Int"
//! ```
//!
//! Forms are read lazily, so everything before the first fatal error is
//! still processed and printed.
//!
//! ## Language
//!
//! - The only base type is `Int`; `(A -> B)` is a function type.
//! - Functions take one `Int` parameter: `(fun x (+ x 1))`.
//! - `(let ((x E1) (y E2)) B)` binds locally; `(E -> T)` ascribes a type.
//! - Built-ins: `+ - * /` and `if0`, all curried.
//! - A definition can call itself when its name was declared first:
//!
//! ```text
//! (dec fact (Int -> Int))
//! (def fact (fun n (if0 n 1 (* n (fact (- n 1))))))
//! ```
//!
//! ## Module Structure
//!
//! - [`lexer`] - Tokenization using lachs
//! - [`parser`] - The Reader, combinator-based
//! - [`sexp`] - Symbolic expression trees
//! - [`elab`] - Symbolic expressions to types, expressions and declarations
//! - [`core`] - Types, expressions and declarations
//! - [`types`] - Synthesis and checking of types
//! - [`interpreter`] - Values, built-ins and evaluation
//! - [`toplevel`] - The declaration processor
//! - [`env`] - Persistent environments shared by typing and evaluation
//! - [`fmt`] - Rendering of every tree back to text

pub mod config;
pub mod core;
pub mod elab;
pub mod env;
pub mod error;
pub mod fmt;
pub mod interpreter;
pub mod lexer;
pub mod parser;
pub mod sexp;
pub mod toplevel;
pub mod types;

pub use config::Config;
pub use error::Error;
pub use toplevel::{Outcome, Processor};

/// Run a whole program, handing every outcome to `emit` as soon as the
/// declaration producing it has been processed.
///
/// Returns the first fatal error. Outcomes emitted before it stand.
pub fn run(source: &str, config: &Config, mut emit: impl FnMut(&Outcome)) -> Result<(), Error> {
    let mut processor = Processor::new();

    for form in parser::read(source)? {
        let decl = elab::elab_declaration(&form?)?;
        if config.dump_ast {
            eprintln!("{}", decl);
        }

        let result = processor.process(&decl);
        processor.flush().iter().for_each(&mut emit);
        result?;
    }

    processor.finish().iter().for_each(&mut emit);
    Ok(())
}
