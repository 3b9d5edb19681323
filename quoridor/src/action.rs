use std::fmt;
use std::str::FromStr;

use anyhow::bail;

use super::board::WallOrientation;
use super::Coordinate;

/// A single ply: step the pawn to an adjacent cell, or anchor a wall.
#[derive(Clone, Copy, Hash, Eq, PartialEq)]
pub enum Action {
    MovePawn(Coordinate),
    PlaceVerticalWall(Coordinate),
    PlaceHorizontalWall(Coordinate),
}

impl Action {
    pub fn coordinate(&self) -> Coordinate {
        match self {
            Action::MovePawn(coordinate) => *coordinate,
            Action::PlaceVerticalWall(coordinate) => *coordinate,
            Action::PlaceHorizontalWall(coordinate) => *coordinate,
        }
    }

    pub fn wall(&self) -> Option<(WallOrientation, Coordinate)> {
        match self {
            Action::MovePawn(_) => None,
            Action::PlaceVerticalWall(coordinate) => {
                Some((WallOrientation::Vertical, *coordinate))
            }
            Action::PlaceHorizontalWall(coordinate) => {
                Some((WallOrientation::Horizontal, *coordinate))
            }
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let (coordinate, action_type) = match self {
            Action::MovePawn(coordinate) => (coordinate, ""),
            Action::PlaceHorizontalWall(coordinate) => (coordinate, "h"),
            Action::PlaceVerticalWall(coordinate) => (coordinate, "v"),
        };

        write!(f, "{}{}", coordinate, action_type)
    }
}

impl fmt::Debug for Action {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self)
    }
}

impl FromStr for Action {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if !s.is_ascii() || s.len() < 2 || s.len() > 3 {
            bail!("invalid move string: {:?}", s);
        }

        let coordinate = s[..2].parse::<Coordinate>()?;

        match s[2..].chars().next() {
            None => Ok(Action::MovePawn(coordinate)),
            Some('v') => Ok(Action::PlaceVerticalWall(coordinate)),
            Some('h') => Ok(Action::PlaceHorizontalWall(coordinate)),
            Some(_) => bail!("invalid move string: {:?}", s),
        }
    }
}
