use std::collections::VecDeque;

use super::constants::{BOARD_SIZE, WALL_GRID};
use super::Coordinate;

#[derive(Clone, Copy, Hash, Eq, PartialEq, Debug)]
pub enum WallOrientation {
    Vertical,
    Horizontal,
}

/// The wall layout. A vertical wall anchored at (x, y) blocks horizontal
/// movement between columns x and x+1 for rows y and y+1; a horizontal wall
/// is the transpose. Walls are kept in insertion order so iteration is
/// deterministic.
#[derive(Clone, Hash, Debug, Default)]
pub struct Board {
    vertical_walls: Vec<Coordinate>,
    horizontal_walls: Vec<Coordinate>,
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn vertical_walls(&self) -> impl Iterator<Item = Coordinate> + '_ {
        self.vertical_walls.iter().copied()
    }

    pub fn horizontal_walls(&self) -> impl Iterator<Item = Coordinate> + '_ {
        self.horizontal_walls.iter().copied()
    }

    pub fn num_walls(&self) -> usize {
        self.vertical_walls.len() + self.horizontal_walls.len()
    }

    pub fn place_wall(&mut self, orientation: WallOrientation, anchor: Coordinate) {
        self.walls_mut(orientation).push(anchor);
    }

    /// Removes the wall matching orientation + anchor. Returns false when no
    /// such wall is stored.
    pub fn remove_wall(&mut self, orientation: WallOrientation, anchor: Coordinate) -> bool {
        let walls = self.walls_mut(orientation);

        match walls.iter().position(|wall| *wall == anchor) {
            Some(idx) => {
                walls.remove(idx);
                true
            }
            None => false,
        }
    }

    /// Geometric wall legality: the anchor must lie in the interior wall
    /// grid, must not share a blocked edge with a stored wall of the same
    /// orientation, and must not cross a stored perpendicular wall at the
    /// same intersection. Connectivity is the validator's concern, not ours.
    pub fn wall_fits(&self, orientation: WallOrientation, anchor: Coordinate) -> bool {
        if anchor.x as usize >= WALL_GRID || anchor.y as usize >= WALL_GRID {
            return false;
        }

        let overlaps = match orientation {
            WallOrientation::Vertical => self
                .vertical_walls
                .iter()
                .any(|wall| wall.x == anchor.x && wall.y.abs_diff(anchor.y) <= 1),
            WallOrientation::Horizontal => self
                .horizontal_walls
                .iter()
                .any(|wall| wall.y == anchor.y && wall.x.abs_diff(anchor.x) <= 1),
        };

        let crosses = self.walls(orientation.opposite()).contains(&anchor);

        !overlaps && !crosses
    }

    /// Whether the single-step move between two orthogonally adjacent cells
    /// is blocked by a stored wall.
    pub fn is_step_blocked(&self, from: Coordinate, to: Coordinate) -> bool {
        if from.x == to.x && to.y + 1 == from.y {
            // up: the boundary above sits between rows to.y and from.y
            self.horizontal_walls
                .iter()
                .any(|wall| wall.y == to.y && (wall.x == from.x || wall.x + 1 == from.x))
        } else if from.x == to.x && from.y + 1 == to.y {
            // down
            self.horizontal_walls
                .iter()
                .any(|wall| wall.y == from.y && (wall.x == from.x || wall.x + 1 == from.x))
        } else if from.y == to.y && to.x + 1 == from.x {
            // left
            self.vertical_walls
                .iter()
                .any(|wall| wall.x == to.x && (wall.y == from.y || wall.y + 1 == from.y))
        } else if from.y == to.y && from.x + 1 == to.x {
            // right
            self.vertical_walls
                .iter()
                .any(|wall| wall.x == from.x && (wall.y == from.y || wall.y + 1 == from.y))
        } else {
            false
        }
    }

    /// In-bounds, unblocked neighbors of a cell, in up, down, left, right
    /// order.
    pub fn neighbors(&self, from: Coordinate) -> impl Iterator<Item = Coordinate> + '_ {
        [from.up(), from.down(), from.left(), from.right()]
            .into_iter()
            .flatten()
            .filter(move |to| !self.is_step_blocked(from, *to))
    }

    /// Shortest path length in steps from `start` to any cell of `goal_row`,
    /// or None when every path is walled off.
    pub fn distance_to_goal(&self, start: Coordinate, goal_row: u8) -> Option<u32> {
        let mut visited = [false; BOARD_SIZE];
        let mut queue = VecDeque::new();

        visited[start.index()] = true;
        queue.push_back((start, 0u32));

        while let Some((current, dist)) = queue.pop_front() {
            if current.y == goal_row {
                return Some(dist);
            }

            for neighbor in self.neighbors(current) {
                if !visited[neighbor.index()] {
                    visited[neighbor.index()] = true;
                    queue.push_back((neighbor, dist + 1));
                }
            }
        }

        None
    }

    pub fn has_path(&self, start: Coordinate, goal_row: u8) -> bool {
        self.distance_to_goal(start, goal_row).is_some()
    }

    fn walls(&self, orientation: WallOrientation) -> &Vec<Coordinate> {
        match orientation {
            WallOrientation::Vertical => &self.vertical_walls,
            WallOrientation::Horizontal => &self.horizontal_walls,
        }
    }

    fn walls_mut(&mut self, orientation: WallOrientation) -> &mut Vec<Coordinate> {
        match orientation {
            WallOrientation::Vertical => &mut self.vertical_walls,
            WallOrientation::Horizontal => &mut self.horizontal_walls,
        }
    }
}

impl WallOrientation {
    pub fn opposite(&self) -> WallOrientation {
        match self {
            WallOrientation::Vertical => WallOrientation::Horizontal,
            WallOrientation::Horizontal => WallOrientation::Vertical,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{BOARD_HEIGHT, GOAL_ROWS};

    fn coord(s: &str) -> Coordinate {
        s.parse().unwrap()
    }

    #[test]
    fn test_vertical_wall_blocks_horizontal_steps() {
        let mut board = Board::new();
        board.place_wall(WallOrientation::Vertical, coord("e5"));

        // between columns e and f, rows 5 and 6
        assert!(board.is_step_blocked(coord("e5"), coord("f5")));
        assert!(board.is_step_blocked(coord("f5"), coord("e5")));
        assert!(board.is_step_blocked(coord("e6"), coord("f6")));
        assert!(board.is_step_blocked(coord("f6"), coord("e6")));

        assert!(!board.is_step_blocked(coord("e4"), coord("f4")));
        assert!(!board.is_step_blocked(coord("e7"), coord("f7")));
        assert!(!board.is_step_blocked(coord("e5"), coord("e6")));
        assert!(!board.is_step_blocked(coord("d5"), coord("e5")));
    }

    #[test]
    fn test_horizontal_wall_blocks_vertical_steps() {
        let mut board = Board::new();
        board.place_wall(WallOrientation::Horizontal, coord("e5"));

        // between rows 5 and 6, columns e and f
        assert!(board.is_step_blocked(coord("e5"), coord("e6")));
        assert!(board.is_step_blocked(coord("e6"), coord("e5")));
        assert!(board.is_step_blocked(coord("f5"), coord("f6")));
        assert!(board.is_step_blocked(coord("f6"), coord("f5")));

        assert!(!board.is_step_blocked(coord("d5"), coord("d6")));
        assert!(!board.is_step_blocked(coord("g5"), coord("g6")));
        assert!(!board.is_step_blocked(coord("e5"), coord("f5")));
    }

    #[test]
    fn test_wall_fits_rejects_out_of_bounds_anchor() {
        let board = Board::new();

        assert!(!board.wall_fits(WallOrientation::Vertical, coord("i1")));
        assert!(!board.wall_fits(WallOrientation::Vertical, coord("a9")));
        assert!(!board.wall_fits(WallOrientation::Horizontal, coord("i9")));
        assert!(board.wall_fits(WallOrientation::Horizontal, coord("h8")));
        assert!(board.wall_fits(WallOrientation::Vertical, coord("a1")));
    }

    #[test]
    fn test_wall_fits_rejects_same_orientation_overlap() {
        let mut board = Board::new();
        board.place_wall(WallOrientation::Vertical, coord("e5"));

        // exact overlap and one-step overlap along the wall's span
        assert!(!board.wall_fits(WallOrientation::Vertical, coord("e5")));
        assert!(!board.wall_fits(WallOrientation::Vertical, coord("e4")));
        assert!(!board.wall_fits(WallOrientation::Vertical, coord("e6")));

        // same column two rows away, or adjacent column, is fine
        assert!(board.wall_fits(WallOrientation::Vertical, coord("e3")));
        assert!(board.wall_fits(WallOrientation::Vertical, coord("e7")));
        assert!(board.wall_fits(WallOrientation::Vertical, coord("d5")));
        assert!(board.wall_fits(WallOrientation::Vertical, coord("f5")));
    }

    #[test]
    fn test_wall_fits_rejects_perpendicular_crossing() {
        let mut board = Board::new();
        board.place_wall(WallOrientation::Horizontal, coord("e5"));

        assert!(!board.wall_fits(WallOrientation::Vertical, coord("e5")));

        // perpendicular walls that do not share the intersection are fine
        assert!(board.wall_fits(WallOrientation::Vertical, coord("d5")));
        assert!(board.wall_fits(WallOrientation::Vertical, coord("e4")));
        assert!(board.wall_fits(WallOrientation::Vertical, coord("f6")));
    }

    #[test]
    fn test_remove_wall_by_equality() {
        let mut board = Board::new();
        board.place_wall(WallOrientation::Vertical, coord("e5"));
        board.place_wall(WallOrientation::Vertical, coord("c3"));

        assert!(board.remove_wall(WallOrientation::Vertical, coord("e5")));
        assert!(!board.remove_wall(WallOrientation::Vertical, coord("e5")));
        assert!(!board.remove_wall(WallOrientation::Horizontal, coord("c3")));
        assert_eq!(board.vertical_walls().collect::<Vec<_>>(), vec![coord("c3")]);
    }

    #[test]
    fn test_distance_on_empty_board() {
        let board = Board::new();

        assert_eq!(board.distance_to_goal(coord("e1"), GOAL_ROWS[0]), Some(8));
        assert_eq!(board.distance_to_goal(coord("e9"), GOAL_ROWS[1]), Some(8));
        assert_eq!(
            board.distance_to_goal(coord("e5"), (BOARD_HEIGHT - 1) as u8),
            Some(4)
        );
        assert_eq!(board.distance_to_goal(coord("a9"), GOAL_ROWS[0]), Some(0));
    }

    #[test]
    fn test_distance_detours_around_walls() {
        let mut board = Board::new();
        // block columns d and e on the boundary between rows 1 and 2
        board.place_wall(WallOrientation::Horizontal, coord("d1"));

        // the pawn on e1 must shift one column before descending
        assert_eq!(board.distance_to_goal(coord("e1"), GOAL_ROWS[0]), Some(9));
        // a pawn already clear of the wall is unaffected
        assert_eq!(board.distance_to_goal(coord("a1"), GOAL_ROWS[0]), Some(8));
    }

    #[test]
    fn test_distance_none_when_walled_off() {
        let mut board = Board::new();
        // anchors a1, c1, e1, g1 seal columns a..h between rows 1 and 2,
        // leaving only the i-file open
        for anchor in ["a1", "c1", "e1", "g1"] {
            board.place_wall(WallOrientation::Horizontal, coord(anchor));
        }
        assert!(board.has_path(coord("e1"), GOAL_ROWS[0]));

        // the vertical wall at h1 cuts the i-file off from the top region
        board.place_wall(WallOrientation::Vertical, coord("h1"));

        assert_eq!(board.distance_to_goal(coord("e1"), GOAL_ROWS[0]), None);
        assert!(!board.has_path(coord("e1"), GOAL_ROWS[0]));
        // the far side of the seal still reaches the bottom row
        assert!(board.has_path(coord("e5"), GOAL_ROWS[0]));
        assert!(!board.has_path(coord("e5"), GOAL_ROWS[1]));
    }

    #[test]
    fn test_neighbors_order_and_blocking() {
        let mut board = Board::new();
        let from = coord("e5");

        assert_eq!(
            board.neighbors(from).collect::<Vec<_>>(),
            vec![coord("e4"), coord("e6"), coord("d5"), coord("f5")]
        );

        board.place_wall(WallOrientation::Horizontal, coord("e5"));
        board.place_wall(WallOrientation::Vertical, coord("d4"));

        assert_eq!(
            board.neighbors(from).collect::<Vec<_>>(),
            vec![coord("e4"), coord("f5")]
        );
    }
}
