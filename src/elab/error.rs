use std::fmt;

/// What the elaborator was trying to produce when it gave up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormKind {
    Declaration,
    Expression,
    Type,
}

impl fmt::Display for FormKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            FormKind::Declaration => f.write_str("declaration"),
            FormKind::Expression => f.write_str("expression"),
            FormKind::Type => f.write_str("type"),
        }
    }
}

/// A symbolic expression that matches none of the recognized forms.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElabError {
    pub kind: FormKind,
    /// The offending form, rendered back to surface syntax
    pub form: String,
}

impl ElabError {
    pub fn unrecognized(kind: FormKind, form: impl fmt::Display) -> Self {
        ElabError {
            kind,
            form: form.to_string(),
        }
    }
}

impl fmt::Display for ElabError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "Elaboration error: unrecognized {}: {}",
            self.kind, self.form
        )
    }
}

impl std::error::Error for ElabError {}

pub type ElabResult<T> = Result<T, ElabError>;
