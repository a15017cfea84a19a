//! Reader combinators
//!
//! `A - B` reads both and keeps `A`, `A * B` reads both and keeps `B`, and
//! `A >> f` maps the result of `A`.

use std::ops::{Mul, Shr, Sub};
use std::rc::Rc;

use crate::lexer::Token;

use super::state::{ParseState, Parser, ReadError, ReadResult};

pub struct BoxedParser<T> {
    run: Rc<dyn Fn(&mut ParseState) -> ReadResult<T>>,
}

impl<T> Clone for BoxedParser<T> {
    fn clone(&self) -> Self {
        BoxedParser {
            run: Rc::clone(&self.run),
        }
    }
}

impl<T: 'static> BoxedParser<T> {
    pub fn new<P: Parser<T> + 'static>(parser: P) -> Self {
        BoxedParser {
            run: Rc::new(move |state| parser.parse(state)),
        }
    }
}

impl<T> Parser<T> for BoxedParser<T> {
    fn parse(&self, state: &mut ParseState) -> ReadResult<T> {
        (self.run)(state)
    }
}

impl<T: 'static, U: 'static> Sub<BoxedParser<U>> for BoxedParser<T> {
    type Output = BoxedParser<T>;

    fn sub(self, rhs: BoxedParser<U>) -> Self::Output {
        BoxedParser::new(move |state: &mut ParseState| {
            let kept = self.parse(state)?;
            rhs.parse(state)?;
            Ok(kept)
        })
    }
}

impl<T: 'static, U: 'static> Mul<BoxedParser<U>> for BoxedParser<T> {
    type Output = BoxedParser<U>;

    fn mul(self, rhs: BoxedParser<U>) -> Self::Output {
        BoxedParser::new(move |state: &mut ParseState| {
            self.parse(state)?;
            rhs.parse(state)
        })
    }
}

impl<T: 'static, U: 'static, F: Fn(T) -> U + 'static> Shr<F> for BoxedParser<T> {
    type Output = BoxedParser<U>;

    fn shr(self, f: F) -> Self::Output {
        BoxedParser::new(move |state: &mut ParseState| self.parse(state).map(&f))
    }
}

/// Consume one punctuation token accepted by `is_expected`.
fn punctuation(is_expected: fn(&Token) -> bool, expected: &'static str) -> BoxedParser<Token> {
    BoxedParser::new(move |state: &mut ParseState| {
        match state.peek() {
            Some(tok) if is_expected(tok) => {}
            Some(tok) => return Err(ReadError::unexpected_token(tok, expected)),
            None => return Err(state.end_of_input(expected)),
        }
        state.advance().ok_or_else(|| state.end_of_input(expected))
    })
}

pub fn expect_lparen() -> BoxedParser<Token> {
    punctuation(|t| matches!(t, Token::LParen(_)), "'('")
}

pub fn expect_rparen() -> BoxedParser<Token> {
    punctuation(|t| matches!(t, Token::RParen(_)), "')'")
}

pub fn expect_dot() -> BoxedParser<Token> {
    punctuation(|t| matches!(t, Token::Dot(_)), "'.'")
}

pub fn expect_quote() -> BoxedParser<Token> {
    punctuation(|t| matches!(t, Token::Quote(_)), "'''")
}

pub fn expect_backquote() -> BoxedParser<Token> {
    punctuation(|t| matches!(t, Token::Backquote(_)), "'`'")
}

pub fn expect_comma() -> BoxedParser<Token> {
    punctuation(|t| matches!(t, Token::Comma(_)), "','")
}
