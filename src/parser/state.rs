use std::fmt;

use lachs::Span;

use crate::lexer::{BadChar, Token};

/// Syntax error raised while reading symbolic expressions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReadError {
    /// A character that starts no token, met where an expression was required
    UnexpectedCharacter(BadChar),
    /// Input ended in the middle of a form
    UnexpectedEof { expected: String },
    /// A token that cannot appear here, e.g. a stray `)` or `.`
    UnexpectedToken {
        found: String,
        expected: String,
        span: Span,
    },
    IntegerOutOfRange { literal: String, span: Span },
    /// The tokenizer itself rejected the input
    Lex(String),
}

impl ReadError {
    pub fn unexpected_token(token: &Token, expected: impl Into<String>) -> Self {
        ReadError::UnexpectedToken {
            found: token.describe(),
            expected: expected.into(),
            span: token.pos(),
        }
    }
}

impl fmt::Display for ReadError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ReadError::UnexpectedCharacter(BadChar { ch, line, column }) => write!(
                f,
                "Syntax error: unexpected character '{}' at line {}, column {}",
                ch, line, column
            ),
            ReadError::UnexpectedEof { expected } => write!(
                f,
                "Syntax error: unexpected end of stream, expected {}",
                expected
            ),
            ReadError::UnexpectedToken {
                found,
                expected,
                span,
            } => {
                let msg = format!("unexpected {}, expected {}", found, expected);
                if span.source.is_empty() {
                    write!(f, "Syntax error: {}", msg)
                } else {
                    write!(f, "{}", span.to_string(&msg))
                }
            }
            ReadError::IntegerOutOfRange { literal, span } => {
                let msg = format!("integer literal out of range: {}", literal);
                if span.source.is_empty() {
                    write!(f, "Syntax error: {}", msg)
                } else {
                    write!(f, "{}", span.to_string(&msg))
                }
            }
            ReadError::Lex(msg) => write!(f, "Syntax error: {}", msg),
        }
    }
}

impl std::error::Error for ReadError {}

pub type ReadResult<T> = Result<T, ReadError>;

#[derive(Debug, Clone)]
pub struct ParseState {
    tokens: Vec<Token>,
    index: usize,
    bad_char: Option<BadChar>,
}

impl ParseState {
    pub fn new(tokens: Vec<Token>, bad_char: Option<BadChar>) -> Self {
        Self {
            tokens,
            index: 0,
            bad_char,
        }
    }

    pub fn advance(&mut self) -> Option<Token> {
        if self.has_next() {
            let token = self.tokens[self.index].clone();
            self.index += 1;
            Some(token)
        } else {
            None
        }
    }

    pub fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.index)
    }

    pub fn has_next(&self) -> bool {
        self.index < self.tokens.len()
    }

    pub fn restore(&mut self, position: usize) {
        self.index = position;
    }

    pub fn bad_char(&self) -> Option<&BadChar> {
        self.bad_char.as_ref()
    }

    /// Error for running out of tokens while `expected` was required. If
    /// lexing stopped at a bad character, that character is the real cause.
    pub fn end_of_input(&self, expected: impl Into<String>) -> ReadError {
        match &self.bad_char {
            Some(bad) => ReadError::UnexpectedCharacter(bad.clone()),
            None => ReadError::UnexpectedEof {
                expected: expected.into(),
            },
        }
    }
}

pub trait Parser<T>: Sized {
    fn parse(&self, state: &mut ParseState) -> ReadResult<T>;
}

impl<T, F: Fn(&mut ParseState) -> ReadResult<T>> Parser<T> for F {
    fn parse(&self, state: &mut ParseState) -> ReadResult<T> {
        self(state)
    }
}
