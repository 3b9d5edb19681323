use itertools::Itertools;

use super::board::WallOrientation;
use super::constants::{BOARD_HEIGHT, GOAL_ROWS, WALL_GRID};
use super::{Coordinate, GameState};

/// Dominates every achievable combination of the positional terms.
pub const WIN_SCORE: i32 = 100_000;

impl GameState {
    /// Static evaluation of the position, higher favoring player 1.
    ///
    /// Terminal positions score ±WIN_SCORE. Otherwise the score combines the
    /// impact of every currently-legal wall on both players' shortest paths,
    /// row-progress terms for both pawns, and a stall penalty when the side
    /// to move sits where it moved from last.
    pub fn scoring(&self) -> i32 {
        if self.pawn(0).y == GOAL_ROWS[0] {
            return -WIN_SCORE;
        }
        if self.pawn(1).y == GOAL_ROWS[1] {
            return WIN_SCORE;
        }

        let p0_row = self.pawn(0).y as i32;
        let p1_row = self.pawn(1).y as i32;

        let mut score = self.wall_score();
        score += (BOARD_HEIGHT as i32 - p1_row) * 10;
        score -= p0_row * 10;
        score += (p0_row - p1_row) * 5;

        let player = self.turn();
        if self.previous_pawn(player) == Some(self.pawn(player)) {
            score -= 200;
        }

        score
    }

    /// Sums the impact of every wall that could legally be placed right now.
    /// The wall budgets are deliberately ignored here: a threat the opponent
    /// can no longer afford still shapes the position far less than the
    /// pawn-progress terms do.
    fn wall_score(&self) -> i32 {
        // both baseline distances are reused across every candidate
        let base_distances = [
            self.board().distance_to_goal(self.pawn(0), GOAL_ROWS[0]),
            self.board().distance_to_goal(self.pawn(1), GOAL_ROWS[1]),
        ];

        let mut score = 0;
        for (y, x) in (0..WALL_GRID as u8).cartesian_product(0..WALL_GRID as u8) {
            let anchor = Coordinate::new(x, y);

            for orientation in [WallOrientation::Vertical, WallOrientation::Horizontal] {
                if self.is_wall_valid(orientation, anchor) {
                    score += self.wall_impact(orientation, anchor, &base_distances);
                }
            }
        }

        score
    }

    /// How much one speculative wall lengthens each player's shortest path:
    /// +5 per added step for player 0, −10 per added step for player 1.
    fn wall_impact(
        &self,
        orientation: WallOrientation,
        anchor: Coordinate,
        base_distances: &[Option<u32>; 2],
    ) -> i32 {
        let mut probe = self.board().clone();
        probe.place_wall(orientation, anchor);

        let mut impact = 0;

        if let (Some(before), Some(after)) = (
            base_distances[0],
            probe.distance_to_goal(self.pawn(0), GOAL_ROWS[0]),
        ) {
            if after > before {
                impact += (after - before) as i32 * 5;
            }
        }

        if let (Some(before), Some(after)) = (
            base_distances[1],
            probe.distance_to_goal(self.pawn(1), GOAL_ROWS[1]),
        ) {
            if after > before {
                impact -= (after - before) as i32 * 10;
            }
        }

        impact
    }
}
