//! Shared utilities

pub mod config;
pub mod diagnostic;
pub mod shell;

pub use config::{InvalidInputPolicy, SessionConfig};
pub use diagnostic::Diagnostic;
pub use shell::Shell;
