//! Block factories.
//!
//! Each factory holds the raw, unvalidated text for one block kind and turns
//! it into a [`Shape`] with a single [`BlockFactory::create_shape`] call.
//! Validation happens there and nowhere else in the library.

use std::collections::BTreeMap;

use crate::core::dimension::Dimension;
use crate::core::errors::ValidationError;
use crate::core::kind::{Field, ShapeKind};
use crate::core::shape::{RoundShape, Shape, SquareShape, TriangleShape};

/// Raw dimension text keyed by field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawParams {
    values: BTreeMap<Field, String>,
}

impl RawParams {
    pub fn new() -> Self {
        RawParams::default()
    }

    /// Set a field, replacing any previous value.
    pub fn with(mut self, field: Field, value: impl Into<String>) -> Self {
        self.insert(field, value);
        self
    }

    pub fn insert(&mut self, field: Field, value: impl Into<String>) {
        self.values.insert(field, value.into());
    }

    pub fn get(&self, field: Field) -> Option<&str> {
        self.values.get(&field).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Capability shared by every concrete factory.
pub trait BlockFactory {
    /// The kind this factory produces.
    fn kind(&self) -> ShapeKind;

    /// Validate the held parameters and build the shape.
    fn create_shape(&self) -> Result<Shape, ValidationError>;
}

/// Builds [`RoundShape`]s from a `radius`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RoundFactory {
    radius: Option<String>,
}

impl RoundFactory {
    pub fn new(params: &RawParams) -> Self {
        RoundFactory {
            radius: params.get(Field::Radius).map(str::to_owned),
        }
    }
}

impl BlockFactory for RoundFactory {
    fn kind(&self) -> ShapeKind {
        ShapeKind::Round
    }

    fn create_shape(&self) -> Result<Shape, ValidationError> {
        let radius = Dimension::parse(Field::Radius, self.radius.as_deref())?;
        Ok(RoundShape::new(radius).into())
    }
}

/// Builds [`SquareShape`]s from a `sideLength`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SquareFactory {
    side_length: Option<String>,
}

impl SquareFactory {
    pub fn new(params: &RawParams) -> Self {
        SquareFactory {
            side_length: params.get(Field::SideLength).map(str::to_owned),
        }
    }
}

impl BlockFactory for SquareFactory {
    fn kind(&self) -> ShapeKind {
        ShapeKind::Square
    }

    fn create_shape(&self) -> Result<Shape, ValidationError> {
        let side_length = Dimension::parse(Field::SideLength, self.side_length.as_deref())?;
        Ok(SquareShape::new(side_length).into())
    }
}

/// Builds [`TriangleShape`]s from a `base` and a `height`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TriangleFactory {
    base: Option<String>,
    height: Option<String>,
}

impl TriangleFactory {
    pub fn new(params: &RawParams) -> Self {
        TriangleFactory {
            base: params.get(Field::Base).map(str::to_owned),
            height: params.get(Field::Height).map(str::to_owned),
        }
    }
}

impl BlockFactory for TriangleFactory {
    fn kind(&self) -> ShapeKind {
        ShapeKind::Triangle
    }

    fn create_shape(&self) -> Result<Shape, ValidationError> {
        // Base is checked first; its error wins when both are invalid.
        let base = Dimension::parse(Field::Base, self.base.as_deref())?;
        let height = Dimension::parse(Field::Height, self.height.as_deref())?;
        Ok(TriangleShape::new(base, height).into())
    }
}

/// The factory chosen for a request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShapeFactory {
    Round(RoundFactory),
    Square(SquareFactory),
    Triangle(TriangleFactory),
}

impl ShapeFactory {
    /// Build the factory for `kind`, capturing the fields it needs.
    pub fn for_kind(kind: ShapeKind, params: &RawParams) -> Self {
        match kind {
            ShapeKind::Round => ShapeFactory::Round(RoundFactory::new(params)),
            ShapeKind::Square => ShapeFactory::Square(SquareFactory::new(params)),
            ShapeKind::Triangle => ShapeFactory::Triangle(TriangleFactory::new(params)),
        }
    }

    fn inner(&self) -> &dyn BlockFactory {
        match self {
            ShapeFactory::Round(f) => f,
            ShapeFactory::Square(f) => f,
            ShapeFactory::Triangle(f) => f,
        }
    }
}

impl BlockFactory for ShapeFactory {
    fn kind(&self) -> ShapeKind {
        self.inner().kind()
    }

    fn create_shape(&self) -> Result<Shape, ValidationError> {
        let result = self.inner().create_shape();
        match &result {
            Ok(shape) => tracing::debug!(kind = %self.kind(), "created {}", shape),
            Err(e) => tracing::debug!(kind = %self.kind(), field = %e.field(), "rejected: {}", e),
        }
        result
    }
}
