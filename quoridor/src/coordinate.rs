use std::fmt::{self};
use std::str::FromStr;

use anyhow::{anyhow, bail};

use super::constants::{ASCII_LETTER_A, BOARD_HEIGHT, BOARD_SIZE, BOARD_WIDTH};

/// A cell on the board. x grows to the right (column `a` is x = 0), y grows
/// downward from player 0's home row (displayed row 1 is y = 0).
#[derive(Clone, Copy, Hash, Eq, PartialEq)]
pub struct Coordinate {
    pub x: u8,
    pub y: u8,
}

impl Coordinate {
    pub fn new(x: u8, y: u8) -> Self {
        debug_assert!((x as usize) < BOARD_WIDTH && (y as usize) < BOARD_HEIGHT);

        Self { x, y }
    }

    pub fn up(&self) -> Option<Coordinate> {
        (self.y > 0).then(|| Coordinate::new(self.x, self.y - 1))
    }

    pub fn down(&self) -> Option<Coordinate> {
        ((self.y as usize) < BOARD_HEIGHT - 1).then(|| Coordinate::new(self.x, self.y + 1))
    }

    pub fn left(&self) -> Option<Coordinate> {
        (self.x > 0).then(|| Coordinate::new(self.x - 1, self.y))
    }

    pub fn right(&self) -> Option<Coordinate> {
        ((self.x as usize) < BOARD_WIDTH - 1).then(|| Coordinate::new(self.x + 1, self.y))
    }

    /// Row-major cell index, 0 at the top-left corner through 80 at the
    /// bottom-right.
    pub fn index(&self) -> usize {
        self.y as usize * BOARD_WIDTH + self.x as usize
    }

    pub fn from_index(value: usize) -> Self {
        assert!(
            value < BOARD_SIZE,
            "Coordinate value must be less than {}",
            BOARD_SIZE
        );

        Self::new((value % BOARD_WIDTH) as u8, (value / BOARD_WIDTH) as u8)
    }

    pub fn col(&self) -> char {
        (self.x + ASCII_LETTER_A) as char
    }

    pub fn row(&self) -> usize {
        self.y as usize + 1
    }
}

impl FromStr for Coordinate {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let chars: Vec<char> = s.chars().collect();
        if chars.len() != 2 {
            bail!("invalid coordinate: {:?}", s);
        }

        let col = chars[0];
        let last_col = (ASCII_LETTER_A + BOARD_WIDTH as u8 - 1) as char;
        if !('a'..=last_col).contains(&col) {
            bail!("invalid coordinate column: {:?}", s);
        }

        let row = chars[1]
            .to_digit(10)
            .ok_or_else(|| anyhow!("invalid coordinate row: {:?}", s))? as usize;
        if !(1..=BOARD_HEIGHT).contains(&row) {
            bail!("invalid coordinate row: {:?}", s);
        }

        Ok(Coordinate::new(col as u8 - ASCII_LETTER_A, (row - 1) as u8))
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}{}", self.col(), self.row())
    }
}

impl fmt::Debug for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self)
    }
}
