//! # Symbolic expressions
//!
//! The untyped tree produced by the reader. A list is stored head-first:
//! `(op a b)` is `(((() . op) . a) . b)`, so the prefix of a list is itself a
//! list and elements accumulate in application order.

/// Symbolic expression
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Sexp {
    Nil,
    Pair(Box<Sexp>, Box<Sexp>),
    Symbol(String),
    Number(i64),
}

impl Sexp {
    pub fn pair(left: Sexp, right: Sexp) -> Self {
        Sexp::Pair(Box::new(left), Box::new(right))
    }

    pub fn symbol(name: impl Into<String>) -> Self {
        Sexp::Symbol(name.into())
    }

    /// Build a proper list from its elements, left to right.
    pub fn list(items: impl IntoIterator<Item = Sexp>) -> Self {
        items.into_iter().fold(Sexp::Nil, Sexp::pair)
    }

    pub fn as_symbol(&self) -> Option<&str> {
        match self {
            Sexp::Symbol(name) => Some(name),
            _ => None,
        }
    }

    /// The elements of a proper list, left to right, or `None` when the left
    /// spine does not end in `()`.
    pub fn list_items(&self) -> Option<Vec<&Sexp>> {
        let mut items = Vec::new();
        let mut current = self;
        loop {
            match current {
                Sexp::Nil => break,
                Sexp::Pair(prefix, last) => {
                    items.push(last.as_ref());
                    current = prefix;
                }
                _ => return None,
            }
        }
        items.reverse();
        Some(items)
    }

    /// The symbol heading a proper list, if any.
    pub fn head_symbol(&self) -> Option<&str> {
        self.list_items()
            .and_then(|items| items.first().and_then(|head| head.as_symbol()))
    }
}
