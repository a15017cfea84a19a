//! Renders symbolic expressions back to surface syntax.
//!
//! A pair whose left spine ends in `()` is a proper list and prints as
//! `(a b c)`; any other pair prints dotted as `(left . right)`. Reading the
//! output again yields the same tree.

use std::fmt::{self, Display, Write};

use crate::sexp::Sexp;

impl Display for Sexp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Sexp::Nil => f.write_str("()"),
            Sexp::Number(n) => write!(f, "{}", n),
            Sexp::Symbol(name) => f.write_str(name),
            Sexp::Pair(left, right) => match self.list_items() {
                Some(items) => {
                    f.write_char('(')?;
                    for (i, item) in items.iter().enumerate() {
                        if i > 0 {
                            f.write_char(' ')?;
                        }
                        write!(f, "{}", item)?;
                    }
                    f.write_char(')')
                }
                None => write!(f, "({} . {})", left, right),
            },
        }
    }
}

/// Render a symbolic expression as text.
pub fn render(sexp: &Sexp) -> String {
    sexp.to_string()
}
