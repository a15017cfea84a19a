//! Pretty printer for the core language
//!
//! Types print as `Int` or a fully parenthesized arrow such as
//! `(Int -> (Int -> Int))`. Expressions and declarations print in the surface
//! syntax they were elaborated from, with curried applications flattened back
//! into `(f a b)`.

use std::fmt::{self, Display, Write};

use crate::core::{Ldec, Lexp, Ltype};

impl Display for Ltype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Ltype::Int => f.write_str("Int"),
            Ltype::Arrow(domain, codomain) => write!(f, "({} -> {})", domain, codomain),
        }
    }
}

struct Formatter {
    buffer: String,
}

impl Formatter {
    fn new() -> Self {
        Self {
            buffer: String::new(),
        }
    }

    fn write_str(&mut self, s: &str) {
        self.buffer.push_str(s);
    }

    fn write_display(&mut self, value: &impl Display) {
        let _ = write!(self.buffer, "{}", value);
    }

    fn finish(self) -> String {
        self.buffer
    }
}

fn format_expression(expr: &Lexp, fmt: &mut Formatter) {
    match expr {
        Lexp::Num(n) => fmt.write_display(n),
        Lexp::Var(name) => fmt.write_str(name),
        Lexp::HasType { expr, ty } => {
            fmt.write_str("(");
            format_expression(expr, fmt);
            fmt.write_str(" -> ");
            fmt.write_display(ty);
            fmt.write_str(")");
        }
        Lexp::App { .. } => format_application(expr, fmt),
        Lexp::Let { name, bound, body } => {
            fmt.write_str("(let ((");
            fmt.write_str(name);
            fmt.write_str(" ");
            format_expression(bound, fmt);
            fmt.write_str(")) ");
            format_expression(body, fmt);
            fmt.write_str(")");
        }
        Lexp::Fun { param, body } => {
            fmt.write_str("(fun ");
            fmt.write_str(param);
            fmt.write_str(" ");
            format_expression(body, fmt);
            fmt.write_str(")");
        }
    }
}

fn format_application(expr: &Lexp, fmt: &mut Formatter) {
    let mut args = Vec::new();
    let mut head = expr;
    while let Lexp::App { func, arg } = head {
        args.push(arg.as_ref());
        head = func;
    }

    fmt.write_str("(");
    format_expression(head, fmt);
    for arg in args.iter().rev() {
        fmt.write_str(" ");
        format_expression(arg, fmt);
    }
    fmt.write_str(")");
}

impl Display for Lexp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut formatter = Formatter::new();
        format_expression(self, &mut formatter);
        write!(f, "{}", formatter.finish())
    }
}

impl Display for Ldec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Ldec::Dec { name, ty } => write!(f, "(dec {} {})", name, ty),
            Ldec::Def { name, expr } => write!(f, "(def {} {})", name, expr),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_display() {
        assert_eq!(Ltype::Int.to_string(), "Int");
        assert_eq!(Ltype::int_function(2).to_string(), "(Int -> (Int -> Int))");
    }

    #[test]
    fn test_application_is_flattened() {
        let expr = Lexp::app(
            Lexp::app(Lexp::var("+"), Lexp::Num(2)),
            Lexp::app(Lexp::var("f"), Lexp::Num(3)),
        );
        assert_eq!(expr.to_string(), "(+ 2 (f 3))");
    }

    #[test]
    fn test_binding_forms() {
        let expr = Lexp::let_in(
            "x",
            Lexp::has_type(Lexp::Num(1), Ltype::Int),
            Lexp::fun("y", Lexp::var("x")),
        );
        assert_eq!(expr.to_string(), "(let ((x (1 -> Int))) (fun y x))");
    }

    #[test]
    fn test_declaration_display() {
        let dec = Ldec::Dec {
            name: "f".to_string(),
            ty: Ltype::int_function(1),
        };
        assert_eq!(dec.to_string(), "(dec f (Int -> Int))");
    }
}
