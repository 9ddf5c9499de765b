//! Shape definitions - the products factories build.
//!
//! Every variant holds [`Dimension`]s, so a constructed shape is always valid
//! and never changes after construction.

use std::fmt;

use serde::Serialize;

use crate::core::dimension::Dimension;
use crate::core::kind::{Field, ShapeKind};

/// A round block.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RoundShape {
    radius: Dimension,
}

impl RoundShape {
    pub fn new(radius: Dimension) -> Self {
        RoundShape { radius }
    }

    pub fn radius(&self) -> Dimension {
        self.radius
    }
}

/// A square block.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SquareShape {
    #[serde(rename = "sideLength")]
    side_length: Dimension,
}

impl SquareShape {
    pub fn new(side_length: Dimension) -> Self {
        SquareShape { side_length }
    }

    pub fn side_length(&self) -> Dimension {
        self.side_length
    }
}

/// A triangle block.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TriangleShape {
    base: Dimension,
    height: Dimension,
}

impl TriangleShape {
    pub fn new(base: Dimension, height: Dimension) -> Self {
        TriangleShape { base, height }
    }

    pub fn base(&self) -> Dimension {
        self.base
    }

    pub fn height(&self) -> Dimension {
        self.height
    }
}

/// Any block a factory can produce.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Shape {
    Round(RoundShape),
    Square(SquareShape),
    Triangle(TriangleShape),
}

impl Shape {
    pub fn kind(&self) -> ShapeKind {
        match self {
            Shape::Round(_) => ShapeKind::Round,
            Shape::Square(_) => ShapeKind::Square,
            Shape::Triangle(_) => ShapeKind::Triangle,
        }
    }

    /// Dimensions in the kind's field order.
    pub fn dimensions(&self) -> Vec<(Field, Dimension)> {
        match self {
            Shape::Round(s) => vec![(Field::Radius, s.radius)],
            Shape::Square(s) => vec![(Field::SideLength, s.side_length)],
            Shape::Triangle(s) => vec![(Field::Base, s.base), (Field::Height, s.height)],
        }
    }

    /// Render the one-line description, e.g. `Triangle block: base=4, height=6`.
    pub fn describe(&self) -> String {
        let fields = self
            .dimensions()
            .iter()
            .map(|(field, value)| format!("{}={}", field, value))
            .collect::<Vec<_>>()
            .join(", ");

        format!("{} block: {}", self.kind().label(), fields)
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.describe())
    }
}

impl From<RoundShape> for Shape {
    fn from(shape: RoundShape) -> Self {
        Shape::Round(shape)
    }
}

impl From<SquareShape> for Shape {
    fn from(shape: SquareShape) -> Self {
        Shape::Square(shape)
    }
}

impl From<TriangleShape> for Shape {
    fn from(shape: TriangleShape) -> Self {
        Shape::Triangle(shape)
    }
}
