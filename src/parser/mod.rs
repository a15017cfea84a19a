//! # Reader
//!
//! Reads Psil source text into a sequence of [`Sexp`] trees.
//!
//! The whole input is tokenized up front, but forms are produced one at a
//! time by the [`Reader`] iterator, so a syntax error late in the file only
//! surfaces after the forms before it have been handed out. End of input
//! between two top-level forms simply ends the sequence; end of input inside
//! a form is an error.

mod combinators;
mod grammar;
mod state;

pub use combinators::*;
pub use grammar::{is_integer_literal, sexp};
pub use state::{ParseState, Parser, ReadError, ReadResult};

use crate::lexer;
use crate::sexp::Sexp;

/// Lazy, restartable sequence of top-level forms.
#[derive(Debug, Clone)]
pub struct Reader {
    state: ParseState,
    done: bool,
}

impl Reader {
    pub fn new(state: ParseState) -> Self {
        Self { state, done: false }
    }

    /// Start over from the first form.
    pub fn rewind(&mut self) {
        self.state.restore(0);
        self.done = false;
    }
}

impl Iterator for Reader {
    type Item = ReadResult<Sexp>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        if !self.state.has_next() {
            self.done = true;
            return self
                .state
                .bad_char()
                .map(|bad| Err(ReadError::UnexpectedCharacter(bad.clone())));
        }

        let result = sexp().parse(&mut self.state);
        if result.is_err() {
            self.done = true;
        }
        Some(result)
    }
}

/// Tokenize `source` and return a reader over its top-level forms.
pub fn read(source: &str) -> ReadResult<Reader> {
    let lexed = lexer::lex(source).map_err(ReadError::Lex)?;
    Ok(Reader::new(ParseState::new(lexed.tokens, lexed.bad_char)))
}

/// Read every top-level form, stopping at the first error.
pub fn read_all(source: &str) -> ReadResult<Vec<Sexp>> {
    read(source)?.collect()
}
