//! Core data structures for blockworks.
//!
//! This module contains the block model:
//! - Kinds and their dimension fields
//! - Validated dimensions and the shapes built from them
//! - The factories that turn raw input into shapes

pub mod dimension;
pub mod errors;
pub mod factory;
pub mod kind;
pub mod shape;

pub use dimension::Dimension;
pub use errors::{SelectionError, ValidationError};
pub use factory::{
    BlockFactory, RawParams, RoundFactory, ShapeFactory, SquareFactory, TriangleFactory,
};
pub use kind::{Field, ShapeKind};
pub use shape::{RoundShape, Shape, SquareShape, TriangleShape};
