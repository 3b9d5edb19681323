use std::{
    collections::HashSet,
    fmt::{self, Display, Formatter},
};

use crate::constants::{ASCII_LETTER_A, BOARD_HEIGHT, BOARD_WIDTH};
use crate::{Coordinate, GameState};

impl Display for GameState {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let p0_pawn = self.pawn(0);
        let p1_pawn = self.pawn(1);

        let vertical_walls = self.vertical_walls().collect::<HashSet<_>>();
        let vertical_walls_splayed = vertical_walls
            .iter()
            .flat_map(|c| [*c, Coordinate::new(c.x, c.y + 1)])
            .collect::<HashSet<_>>();

        let horizontal_walls = self.horizontal_walls().collect::<HashSet<_>>();
        let horizontal_walls_splayed = horizontal_walls
            .iter()
            .flat_map(|c| [*c, Coordinate::new(c.x + 1, c.y)])
            .collect::<HashSet<_>>();

        writeln!(f)?;

        for x in 0..BOARD_WIDTH {
            if x == 0 {
                write!(f, "  +")?;
            }
            write!(f, "---+")?;
        }

        writeln!(f)?;

        // row 9 at the top so player 0 races up the page
        for y in (0..BOARD_HEIGHT as u8).rev() {
            for x in 0..BOARD_WIDTH as u8 {
                let coord = Coordinate::new(x, y);
                if x == 0 {
                    write!(f, "{} |", y + 1)?;
                }
                let p = if p0_pawn == coord {
                    "0"
                } else if p1_pawn == coord {
                    "1"
                } else {
                    " "
                };
                let w = if vertical_walls_splayed.contains(&coord) {
                    "█"
                } else {
                    "|"
                };
                write!(f, " {} {}", p, w)?;
            }

            writeln!(f)?;

            // the line below row y carries walls anchored at y - 1
            for x in 0..BOARD_WIDTH as u8 {
                if x == 0 {
                    write!(f, "  +")?;
                }
                let anchor = (y > 0).then(|| Coordinate::new(x, y - 1));
                let w = match anchor {
                    Some(anchor) if horizontal_walls_splayed.contains(&anchor) => "■■■",
                    _ => "---",
                };
                let c = match anchor {
                    Some(anchor) if horizontal_walls.contains(&anchor) => "■",
                    Some(anchor) if vertical_walls.contains(&anchor) => "█",
                    _ => "+",
                };
                write!(f, "{}{}", w, c)?;
            }

            writeln!(f)?;
        }

        for x in 0..BOARD_WIDTH as u8 {
            if x == 0 {
                write!(f, "   ")?;
            }
            let col_letter = (ASCII_LETTER_A + x) as char;
            write!(f, " {}  ", col_letter)?;
        }

        writeln!(f)?;
        writeln!(f)?;
        writeln!(
            f,
            "  P0: {}  P1: {}",
            self.walls_remaining(0),
            self.walls_remaining(1)
        )?;

        Ok(())
    }
}
