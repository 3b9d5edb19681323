pub const BOARD_WIDTH: usize = 9;
pub const BOARD_HEIGHT: usize = 9;
pub const BOARD_SIZE: usize = BOARD_WIDTH * BOARD_HEIGHT;

/// Wall anchors span an (N-1) x (N-1) interior grid.
pub const WALL_GRID: usize = BOARD_WIDTH - 1;
pub const WALL_GRID_SIZE: usize = WALL_GRID * WALL_GRID;

pub const NUM_WALLS_PER_PLAYER: u8 = 10;

/// Goal row per player: player 0 races to the far row, player 1 back to row 0.
pub const GOAL_ROWS: [u8; 2] = [(BOARD_HEIGHT - 1) as u8, 0];

pub const ASCII_LETTER_A: u8 = b'a';
