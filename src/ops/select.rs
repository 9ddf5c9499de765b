//! Factory selection: map a kind token to the factory that builds it.

use thiserror::Error;

use crate::core::errors::{SelectionError, ValidationError};
use crate::core::factory::{BlockFactory, RawParams, ShapeFactory};
use crate::core::kind::ShapeKind;
use crate::core::shape::Shape;
use crate::util::diagnostic::{suggestions, Diagnostic};

/// Pick the factory for `kind` and hand it the raw parameters.
///
/// Fails without constructing anything when the token is not a known kind.
/// Parameter validation is deferred to [`BlockFactory::create_shape`].
pub fn select_factory(kind: &str, params: &RawParams) -> Result<ShapeFactory, SelectionError> {
    let kind = ShapeKind::parse_token(kind).inspect_err(|e| {
        tracing::debug!(token = e.token(), "no factory for token");
    })?;

    tracing::debug!(%kind, "selected factory");
    Ok(ShapeFactory::for_kind(kind, params))
}

/// Select a factory and build its shape in one step.
pub fn make_shape(kind: &str, params: &RawParams) -> Result<Shape, MakeError> {
    let factory = select_factory(kind, params)?;
    Ok(factory.create_shape()?)
}

/// Failure of [`make_shape`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MakeError {
    #[error(transparent)]
    Selection(#[from] SelectionError),

    #[error(transparent)]
    Validation(#[from] ValidationError),
}

impl MakeError {
    /// Convert to a user-friendly diagnostic.
    pub fn to_diagnostic(&self) -> Diagnostic {
        match self {
            MakeError::Selection(e) => e.to_diagnostic(),
            MakeError::Validation(e @ ValidationError::Missing { .. }) => {
                e.to_diagnostic().with_suggestion(suggestions::MAKE_USAGE)
            }
            MakeError::Validation(e) => e.to_diagnostic(),
        }
    }
}
