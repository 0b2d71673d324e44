use crate::card_request::validators::validate_position;
use crate::card_request::ValidationError;

use std::fmt;
use std::str::FromStr;

/// Where the new card goes in its list
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Position {
    Top,
    Bottom,
    Number(f64),
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Position::Top => f.write_str("top"),
            Position::Bottom => f.write_str("bottom"),
            Position::Number(n) => write!(f, "{n}"),
        }
    }
}

impl FromStr for Position {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        validate_position(s)
    }
}
