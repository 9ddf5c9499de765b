//! Selection and validation error types.

use miette::Diagnostic as MietteDiagnostic;
use thiserror::Error;

use crate::core::kind::{Field, ShapeKind};
use crate::util::diagnostic::{suggestions, Diagnostic};

/// An unrecognized block kind token.
#[derive(Debug, Clone, PartialEq, Eq, Error, MietteDiagnostic)]
#[error("unknown block kind `{token}`")]
#[diagnostic(
    code(blockworks::selection),
    help("Choose 1 (round), 2 (square) or 3 (triangle)")
)]
pub struct SelectionError {
    token: String,
}

impl SelectionError {
    pub fn new(token: impl Into<String>) -> Self {
        SelectionError {
            token: token.into(),
        }
    }

    /// The token that failed to match a kind.
    pub fn token(&self) -> &str {
        &self.token
    }

    /// Convert to a user-friendly diagnostic.
    pub fn to_diagnostic(&self) -> Diagnostic {
        let accepted = ShapeKind::ALL
            .iter()
            .map(|kind| format!("{} ({})", kind.token(), kind.name()))
            .collect::<Vec<_>>()
            .join(", ");

        let message = if self.token.is_empty() {
            "no block kind selected".to_string()
        } else {
            format!("unknown block kind `{}`", self.token)
        };

        Diagnostic::error(message)
            .with_context(format!("accepted kinds: {}", accepted))
            .with_suggestion(suggestions::LIST_KINDS)
    }
}

/// A required dimension was missing, malformed, or not strictly positive.
#[derive(Debug, Clone, PartialEq, Error, MietteDiagnostic)]
pub enum ValidationError {
    #[error("missing value for `{field}`")]
    #[diagnostic(code(blockworks::validation::missing))]
    Missing { field: Field },

    #[error("`{field}` must be a number, got `{input}`")]
    #[diagnostic(code(blockworks::validation::not_numeric))]
    NotNumeric { field: Field, input: String },

    #[error("`{field}` must be finite, got `{input}`")]
    #[diagnostic(code(blockworks::validation::not_finite))]
    NotFinite { field: Field, input: String },

    #[error("`{field}` must be greater than zero, got {value}")]
    #[diagnostic(
        code(blockworks::validation::not_positive),
        help("Block dimensions are strictly positive")
    )]
    NotPositive { field: Field, value: f64 },
}

impl ValidationError {
    /// The field that failed validation.
    pub fn field(&self) -> Field {
        match self {
            ValidationError::Missing { field }
            | ValidationError::NotNumeric { field, .. }
            | ValidationError::NotFinite { field, .. }
            | ValidationError::NotPositive { field, .. } => *field,
        }
    }

    /// Convert to a user-friendly diagnostic.
    pub fn to_diagnostic(&self) -> Diagnostic {
        Diagnostic::error(self.to_string())
            .with_context(format!("field: {}", self.field()))
            .with_suggestion(format!(
                "Pass `{}` as a finite number greater than zero (e.g. 2.5)",
                self.field()
            ))
    }
}
