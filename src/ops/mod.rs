//! High-level operations.
//!
//! This module contains the request flows behind the blockworks commands.

pub mod select;
pub mod session;

pub use select::{make_shape, select_factory, MakeError};
pub use session::{Session, SessionError};
