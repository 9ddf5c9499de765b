//! blockworks - building blocks from an abstract factory
//!
//! A kind token selects one of three factories; the factory validates raw
//! dimensions and builds an immutable shape that describes itself.

pub mod core;
pub mod ops;
pub mod util;

pub use crate::core::{BlockFactory, Field, RawParams, Shape, ShapeFactory, ShapeKind};
pub use ops::{select_factory, Session};
pub use util::SessionConfig;
