use crate::{
    constants::COORDINATE_SEPARATOR,
    error::{PlayError, PlayResult},
};

use std::{
    fmt::{Display, Formatter},
    str::FromStr,
};

use serde::Serialize;

/// A point on the drawing surface, in canvas units.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize)]
pub struct Coordinate {
    pub x: f64,
    pub y: f64,
}

impl Coordinate {
    pub const fn new(x: f64, y: f64) -> Self {
        Coordinate { x, y }
    }

    /// Parses an `"x,y"` token. Surrounding whitespace on either
    /// component is ignored, anything else that is not exactly two
    /// finite numbers is rejected.
    pub fn parse(token: &str) -> PlayResult<Self> {
        let malformed = || PlayError::MalformedCoordinate {
            token: token.to_owned(),
        };

        let mut parts = token.split(COORDINATE_SEPARATOR);
        let (Some(x), Some(y), None) = (parts.next(), parts.next(), parts.next()) else {
            return Err(malformed());
        };

        let parse_component = |raw: &str| {
            raw.trim()
                .parse::<f64>()
                .ok()
                .filter(|value| value.is_finite())
                .ok_or_else(malformed)
        };

        Ok(Coordinate::new(parse_component(x)?, parse_component(y)?))
    }

    pub fn to_token(self) -> String {
        format!("{}{}{}", self.x, COORDINATE_SEPARATOR, self.y)
    }
}

impl FromStr for Coordinate {
    type Err = PlayError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Coordinate::parse(s)
    }
}

impl Display for Coordinate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl From<Coordinate> for (f64, f64) {
    fn from(coordinate: Coordinate) -> Self {
        (coordinate.x, coordinate.y)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct PlayerStats {
    /// Goals per game.
    pub gpg: f64,
    /// Assists per game.
    pub apg: f64,
    /// Shots on goal.
    pub sog: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Player {
    pub name: String,
    pub image: String,
    pub team: String,
    /// Height in meters.
    pub height: f64,
    pub stats: PlayerStats,
    pub position: Coordinate,
}

impl Player {
    pub fn new(
        name: impl Into<String>,
        image: impl Into<String>,
        team: impl Into<String>,
        height: f64,
        stats: PlayerStats,
        position: Coordinate,
    ) -> Self {
        Player {
            name: name.into(),
            image: image.into(),
            team: team.into(),
            height,
            stats,
            position,
        }
    }
}

impl Display for Player {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} [{}] at {}", self.name, self.team, self.position)
    }
}
