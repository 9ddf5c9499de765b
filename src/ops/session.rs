//! Interactive block session.
//!
//! Drives one request over a line-oriented reader and writer:
//! menu, kind choice, one prompt per required field, then the finished
//! [`Shape`]. The retry loop for rejected values lives here; the factories
//! themselves stay pure.

use std::io::{self, BufRead, Write};

use thiserror::Error;

use crate::core::dimension::Dimension;
use crate::core::errors::{SelectionError, ValidationError};
use crate::core::factory::{BlockFactory, RawParams};
use crate::core::kind::{Field, ShapeKind};
use crate::core::shape::Shape;
use crate::ops::select::select_factory;
use crate::util::config::{InvalidInputPolicy, SessionConfig};
use crate::util::diagnostic::Diagnostic;

/// Menu heading.
pub const MENU_TITLE: &str = "Choose a building block type:";

/// Prompt after the menu.
pub const CHOICE_PROMPT: &str = "Your choice: ";

/// Failure of a session.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error(transparent)]
    Selection(#[from] SelectionError),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("gave up on `{field}` after {attempts} invalid attempts")]
    TooManyAttempts {
        field: Field,
        attempts: u32,
        #[source]
        source: ValidationError,
    },

    #[error("input ended before a value was entered")]
    UnexpectedEof,

    #[error("failed to read input")]
    Input(#[source] io::Error),
}

impl SessionError {
    /// Convert to a user-friendly diagnostic.
    pub fn to_diagnostic(&self) -> Diagnostic {
        match self {
            SessionError::Selection(e) => e.to_diagnostic(),
            SessionError::Validation(e) => e.to_diagnostic(),
            SessionError::TooManyAttempts {
                field,
                attempts,
                source,
            } => Diagnostic::error(self.to_string())
                .with_context(format!("last attempt: {}", source))
                .with_suggestion(format!(
                    "Enter `{}` as a finite number greater than zero",
                    field
                ))
                .with_suggestion(format!(
                    "Raise the limit with `--max-attempts {}`",
                    attempts + 1
                )),
            SessionError::UnexpectedEof => Diagnostic::error(self.to_string()),
            SessionError::Input(e) => {
                Diagnostic::error(self.to_string()).with_context(e.to_string())
            }
        }
    }
}

/// One interactive request.
#[derive(Debug, Clone, Default)]
pub struct Session {
    config: SessionConfig,
}

impl Session {
    pub fn new(config: SessionConfig) -> Self {
        Session { config }
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Run the session to completion.
    ///
    /// Prompts are written to `output`; the caller renders the returned
    /// shape. An unknown kind fails before any dimension is requested.
    pub fn run<R, W>(&self, input: &mut R, output: &mut W) -> Result<Shape, SessionError>
    where
        R: BufRead,
        W: Write,
    {
        write_menu(output).map_err(SessionError::Input)?;
        let choice = read_line(input, output, CHOICE_PROMPT)?;
        let kind = ShapeKind::parse_token(&choice)?;

        let mut params = RawParams::new();
        for &field in kind.fields() {
            let raw = self.prompt_dimension(input, output, field)?;
            params.insert(field, raw);
        }

        let factory = select_factory(kind.token(), &params)?;
        Ok(factory.create_shape()?)
    }

    /// Ask for `field` until the policy gives up, returning the accepted text.
    fn prompt_dimension<R, W>(
        &self,
        input: &mut R,
        output: &mut W,
        field: Field,
    ) -> Result<String, SessionError>
    where
        R: BufRead,
        W: Write,
    {
        let prompt = format!("Enter {}: ", field);
        let mut failed = 0;

        loop {
            let raw = read_line(input, output, &prompt)?;
            let err = match Dimension::parse(field, Some(&raw)) {
                Ok(_) => return Ok(raw),
                Err(e) => e,
            };

            failed += 1;
            tracing::debug!(%field, attempt = failed, "rejected input: {}", err);

            match self.config.policy {
                InvalidInputPolicy::Abort => return Err(err.into()),
                policy if policy.allows_retry(failed) => {
                    writeln!(output, "error: {}", err).map_err(SessionError::Input)?;
                }
                _ => {
                    tracing::warn!(%field, attempts = failed, "giving up after repeated invalid input");
                    return Err(SessionError::TooManyAttempts {
                        field,
                        attempts: failed,
                        source: err,
                    });
                }
            }
        }
    }
}

fn write_menu<W: Write>(output: &mut W) -> io::Result<()> {
    writeln!(output, "{}", MENU_TITLE)?;
    for kind in ShapeKind::ALL {
        writeln!(output, "{} - {} block", kind.token(), kind.label())?;
    }
    Ok(())
}

/// Write `prompt`, then read one line without its terminator.
fn read_line<R, W>(input: &mut R, output: &mut W, prompt: &str) -> Result<String, SessionError>
where
    R: BufRead,
    W: Write,
{
    write!(output, "{}", prompt).map_err(SessionError::Input)?;
    output.flush().map_err(SessionError::Input)?;

    let mut line = String::new();
    let read = input.read_line(&mut line).map_err(SessionError::Input)?;
    if read == 0 {
        return Err(SessionError::UnexpectedEof);
    }

    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}
