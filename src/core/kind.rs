//! Block kinds and the dimension fields each kind requires.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::errors::SelectionError;

/// The three building-block kinds a factory can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeKind {
    /// Round block, sized by radius
    Round,

    /// Square block, sized by side length
    Square,

    /// Triangle block, sized by base and height
    Triangle,
}

impl ShapeKind {
    /// Every kind, in menu order.
    pub const ALL: [ShapeKind; 3] = [ShapeKind::Round, ShapeKind::Square, ShapeKind::Triangle];

    /// Menu token selecting this kind.
    pub fn token(&self) -> &'static str {
        match self {
            ShapeKind::Round => "1",
            ShapeKind::Square => "2",
            ShapeKind::Triangle => "3",
        }
    }

    /// Lowercase name, also accepted as a token.
    pub fn name(&self) -> &'static str {
        match self {
            ShapeKind::Round => "round",
            ShapeKind::Square => "square",
            ShapeKind::Triangle => "triangle",
        }
    }

    /// Capitalized label used in descriptions.
    pub fn label(&self) -> &'static str {
        match self {
            ShapeKind::Round => "Round",
            ShapeKind::Square => "Square",
            ShapeKind::Triangle => "Triangle",
        }
    }

    /// Required fields, in prompt and validation order.
    pub fn fields(&self) -> &'static [Field] {
        match self {
            ShapeKind::Round => &[Field::Radius],
            ShapeKind::Square => &[Field::SideLength],
            ShapeKind::Triangle => &[Field::Base, Field::Height],
        }
    }

    /// Map a user-supplied token to a kind.
    ///
    /// Accepts the menu digits and the kind names (ASCII case-insensitive).
    /// Surrounding whitespace is ignored.
    pub fn parse_token(token: &str) -> Result<ShapeKind, SelectionError> {
        let trimmed = token.trim();

        ShapeKind::ALL
            .into_iter()
            .find(|kind| trimmed == kind.token() || trimmed.eq_ignore_ascii_case(kind.name()))
            .ok_or_else(|| SelectionError::new(trimmed))
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for ShapeKind {
    type Err = SelectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ShapeKind::parse_token(s)
    }
}

/// A named dimension of a block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Field {
    #[serde(rename = "radius")]
    Radius,
    #[serde(rename = "sideLength")]
    SideLength,
    #[serde(rename = "base")]
    Base,
    #[serde(rename = "height")]
    Height,
}

impl Field {
    /// Name shown in prompts, descriptions and errors.
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Radius => "radius",
            Field::SideLength => "sideLength",
            Field::Base => "base",
            Field::Height => "height",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_menu_tokens() {
        assert_eq!(ShapeKind::parse_token("1").unwrap(), ShapeKind::Round);
        assert_eq!(ShapeKind::parse_token("2").unwrap(), ShapeKind::Square);
        assert_eq!(ShapeKind::parse_token(" 3\n").unwrap(), ShapeKind::Triangle);
    }

    #[test]
    fn test_parse_kind_names() {
        assert_eq!(ShapeKind::parse_token("round").unwrap(), ShapeKind::Round);
        assert_eq!(ShapeKind::parse_token("SQUARE").unwrap(), ShapeKind::Square);
        assert_eq!("Triangle".parse::<ShapeKind>().unwrap(), ShapeKind::Triangle);
    }

    #[test]
    fn test_unknown_tokens_rejected() {
        for token in ["", "0", "4", "9", "circle", "1.0", "-1", "12"] {
            let err = ShapeKind::parse_token(token).unwrap_err();
            assert_eq!(err.token(), token.trim());
        }
    }

    #[test]
    fn test_fields_per_kind() {
        assert_eq!(ShapeKind::Round.fields(), &[Field::Radius]);
        assert_eq!(ShapeKind::Square.fields(), &[Field::SideLength]);
        assert_eq!(ShapeKind::Triangle.fields(), &[Field::Base, Field::Height]);
    }

    #[test]
    fn test_field_names() {
        assert_eq!(Field::SideLength.to_string(), "sideLength");
        assert_eq!(
            serde_json::to_string(&Field::SideLength).unwrap(),
            "\"sideLength\""
        );
    }
}
