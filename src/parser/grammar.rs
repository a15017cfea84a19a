//! Grammar for symbolic expressions
//!
//! ```text
//! sexp  := atom | list | "'" sexp | "`" sexp | "," sexp
//! list  := "(" ")" | "(" sexp "." sexp ")" | "(" sexp sexp* ")"
//! ```

use crate::lexer::Token;
use crate::sexp::Sexp;

use super::combinators::{
    BoxedParser, expect_backquote, expect_comma, expect_dot, expect_lparen, expect_quote,
    expect_rparen,
};
use super::state::{ParseState, Parser, ReadError, ReadResult};

/// An optional minus sign followed by one or more decimal digits.
pub fn is_integer_literal(text: &str) -> bool {
    let digits = text.strip_prefix('-').unwrap_or(text);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

fn classify_atom(value: String, position: lachs::Span) -> ReadResult<Sexp> {
    if !is_integer_literal(&value) {
        return Ok(Sexp::Symbol(value));
    }
    value
        .parse::<i64>()
        .map(Sexp::Number)
        .map_err(|_| ReadError::IntegerOutOfRange {
            literal: value,
            span: position,
        })
}

/// atom := integer | symbol
fn atom() -> BoxedParser<Sexp> {
    BoxedParser::new(|state: &mut ParseState| match state.advance() {
        Some(Token::Atom(atom)) => classify_atom(atom.value, atom.position),
        Some(tok) => Err(ReadError::unexpected_token(&tok, "atom")),
        None => Err(state.end_of_input("atom")),
    })
}

/// `'E` reads as `(shorthand-quote E)`, and likewise for `` ` `` and `,`
fn shorthand(marker: BoxedParser<Token>, name: &'static str) -> BoxedParser<Sexp> {
    (marker * sexp()) >> move |quoted| Sexp::list([Sexp::symbol(name), quoted])
}

fn list() -> BoxedParser<Sexp> {
    BoxedParser::new(|state: &mut ParseState| {
        expect_lparen().parse(state)?;

        if let Some(Token::RParen(_)) = state.peek() {
            state.advance();
            return Ok(Sexp::Nil);
        }

        let first = sexp().parse(state)?;

        if let Some(Token::Dot(_)) = state.peek() {
            let last = (expect_dot() * sexp() - expect_rparen()).parse(state)?;
            return Ok(Sexp::pair(first, last));
        }

        let mut list = Sexp::pair(Sexp::Nil, first);
        loop {
            match state.peek() {
                Some(Token::RParen(_)) => {
                    state.advance();
                    return Ok(list);
                }
                Some(_) => list = Sexp::pair(list, sexp().parse(state)?),
                None => return Err(state.end_of_input("')'")),
            }
        }
    })
}

pub fn sexp() -> BoxedParser<Sexp> {
    BoxedParser::new(|state: &mut ParseState| match state.peek() {
        Some(Token::Atom(_)) => atom().parse(state),
        Some(Token::LParen(_)) => list().parse(state),
        Some(Token::Quote(_)) => shorthand(expect_quote(), "shorthand-quote").parse(state),
        Some(Token::Backquote(_)) => {
            shorthand(expect_backquote(), "shorthand-backquote").parse(state)
        }
        Some(Token::Comma(_)) => shorthand(expect_comma(), "shorthand-comma").parse(state),
        Some(tok) => Err(ReadError::unexpected_token(tok, "expression")),
        None => Err(state.end_of_input("expression")),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integer_literals() {
        assert!(is_integer_literal("42"));
        assert!(is_integer_literal("-7"));
        assert!(!is_integer_literal("-"));
        assert!(!is_integer_literal("4a"));
        assert!(!is_integer_literal("--1"));
        assert!(!is_integer_literal(""));
    }
}
