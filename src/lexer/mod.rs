//! # Lexer
//!
//! Turns Psil source text into a flat token stream using `lachs`.
//!
//! Psil has very few tokens: parentheses, the dot of a dotted pair, the three
//! quote shorthands and atoms. An atom is a maximal run of alphanumeric
//! characters and `! @ $ % ^ & * _ + - = : | / ? < >`; the reader later
//! decides whether an atom is an integer or a symbol.
//!
//! Line comments (`;` to end of line) are removed by [`strip_comments`] before
//! the text reaches `lachs`. Characters that can start no token are located
//! up front by [`lex`], so everything in front of a bad character can still be
//! read and processed.

use lachs::Span;

#[lachs::token]
pub enum Token {
    #[terminal("(")]
    LParen,
    #[terminal(")")]
    RParen,
    #[terminal(".")]
    Dot,
    #[terminal("'")]
    Quote,
    #[terminal("`")]
    Backquote,
    #[terminal(",")]
    Comma,
    #[literal(r"[\p{Alphabetic}\p{N}!@$%^&*_+=:|/?<>-]+")]
    Atom,
}

impl Token {
    pub fn pos(&self) -> Span {
        match self {
            Token::LParen(inner) => inner.position.clone(),
            Token::RParen(inner) => inner.position.clone(),
            Token::Dot(inner) => inner.position.clone(),
            Token::Quote(inner) => inner.position.clone(),
            Token::Backquote(inner) => inner.position.clone(),
            Token::Comma(inner) => inner.position.clone(),
            Token::Atom(inner) => inner.position.clone(),
        }
    }

    /// Returns a human-readable description of the token
    pub fn describe(&self) -> String {
        match self {
            Token::LParen(_) => "'('".to_string(),
            Token::RParen(_) => "')'".to_string(),
            Token::Dot(_) => "'.'".to_string(),
            Token::Quote(_) => "'''".to_string(),
            Token::Backquote(_) => "'`'".to_string(),
            Token::Comma(_) => "','".to_string(),
            Token::Atom(inner) => format!("atom '{}'", inner.value),
        }
    }
}

/// A character that cannot start any token, with its 1-based location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BadChar {
    pub ch: char,
    pub line: usize,
    pub column: usize,
}

/// Result of lexing: the tokens in front of the first bad character, and that
/// character if there is one.
#[derive(Debug, Clone)]
pub struct Lexed {
    pub tokens: Vec<Token>,
    pub bad_char: Option<BadChar>,
}

pub fn is_atom_char(c: char) -> bool {
    c.is_alphanumeric() || "!@$%^&*_+-=:|/?<>".contains(c)
}

fn is_token_start(c: char) -> bool {
    is_atom_char(c) || "().'`,".contains(c)
}

/// Remove `;` line comments, keeping the newline that ends each of them.
pub fn strip_comments(source: &str) -> String {
    let mut result = String::with_capacity(source.len());
    let mut in_comment = false;

    for c in source.chars() {
        match c {
            '\n' => {
                in_comment = false;
                result.push(c);
            }
            ';' => in_comment = true,
            _ if in_comment => {}
            _ => result.push(c),
        }
    }

    result
}

fn find_bad_char(source: &str) -> Option<(usize, BadChar)> {
    let mut line = 1;
    let mut column = 1;

    for (offset, c) in source.char_indices() {
        if c == '\n' {
            line += 1;
            column = 1;
            continue;
        }
        if !c.is_ascii_whitespace() && !is_token_start(c) {
            return Some((offset, BadChar { ch: c, line, column }));
        }
        column += 1;
    }

    None
}

/// Strip comments and tokenize `source`.
///
/// Lexing stops at the first character that cannot start a token; the
/// character is returned alongside the tokens that precede it.
pub fn lex(source: &str) -> Result<Lexed, String> {
    let source = strip_comments(source);

    let (text, bad_char) = match find_bad_char(&source) {
        Some((offset, bad)) => (&source[..offset], Some(bad)),
        None => (source.as_str(), None),
    };

    let tokens = Token::lex(text).map_err(|err| err.to_string())?;
    log::trace!("lexed {} tokens", tokens.len());

    Ok(Lexed { tokens, bad_char })
}
