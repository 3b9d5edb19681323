use anyhow::{bail, Result};
use itertools::Itertools;
use log::debug;

use super::board::{Board, WallOrientation};
use super::constants::{BOARD_WIDTH, GOAL_ROWS, NUM_WALLS_PER_PLAYER, WALL_GRID};
use super::zobrist::Zobrist;
use super::{Action, Coordinate};

#[derive(Clone, Hash, Debug)]
pub struct PlayerState {
    pawn: Coordinate,
    walls_remaining: u8,
    previous_pawn: Option<Coordinate>,
}

/// Full game position: both pawns, wall counts, the wall layout and the side
/// to move. Player 0 starts on row 1 racing to row 9, player 1 the reverse.
#[derive(Clone, Hash, Debug)]
pub struct GameState {
    players: [PlayerState; 2],
    board: Board,
    p1_turn_to_move: bool,
    zobrist: Zobrist,
}

impl GameState {
    pub fn new() -> Self {
        let center = (BOARD_WIDTH / 2) as u8;

        Self {
            players: [
                PlayerState::new(Coordinate::new(center, 0)),
                PlayerState::new(Coordinate::new(center, 8)),
            ],
            board: Board::new(),
            p1_turn_to_move: false,
            zobrist: Zobrist::initial(),
        }
    }

    /// Index of the side to move.
    pub fn turn(&self) -> usize {
        if self.p1_turn_to_move {
            1
        } else {
            0
        }
    }

    pub fn pawn(&self, player: usize) -> Coordinate {
        self.players[player].pawn
    }

    pub fn walls_remaining(&self, player: usize) -> u8 {
        self.players[player].walls_remaining
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn vertical_walls(&self) -> impl Iterator<Item = Coordinate> + '_ {
        self.board.vertical_walls()
    }

    pub fn horizontal_walls(&self) -> impl Iterator<Item = Coordinate> + '_ {
        self.board.horizontal_walls()
    }

    pub fn transposition_hash(&self) -> u64 {
        self.zobrist.board_state_hash()
    }

    pub(crate) fn previous_pawn(&self, player: usize) -> Option<Coordinate> {
        self.players[player].previous_pawn
    }

    /// Applies an action without validating it. The caller is responsible
    /// for only passing actions that `is_legal` accepts.
    pub fn make_move(&mut self, action: &Action) {
        let player = self.turn();

        match action.wall() {
            None => {
                let from = self.players[player].pawn;
                let to = action.coordinate();

                self.players[player].previous_pawn = Some(from);
                self.players[player].pawn = to;
                self.zobrist = self.zobrist.move_pawn(player, from, to);
            }
            Some((orientation, anchor)) => {
                self.board.place_wall(orientation, anchor);
                self.players[player].walls_remaining -= 1;
                self.zobrist = self.zobrist.place_wall(
                    player,
                    orientation,
                    anchor,
                    self.players[player].walls_remaining,
                );
            }
        }

        self.p1_turn_to_move = !self.p1_turn_to_move;
    }

    /// Reverses the most recent `make_move`. Only correct under strict LIFO
    /// make/unmake ordering: each player carries a single previous-pawn
    /// slot, so unmaking out of order restores stale positions.
    pub fn unmake_move(&mut self, action: &Action) {
        self.p1_turn_to_move = !self.p1_turn_to_move;
        let player = self.turn();

        match action.wall() {
            None => {
                if let Some(from) = self.players[player].previous_pawn {
                    let to = action.coordinate();

                    self.players[player].pawn = from;
                    self.zobrist = self.zobrist.move_pawn(player, from, to);
                }
            }
            Some((orientation, anchor)) => {
                self.zobrist = self.zobrist.place_wall(
                    player,
                    orientation,
                    anchor,
                    self.players[player].walls_remaining,
                );
                self.players[player].walls_remaining += 1;
                self.board.remove_wall(orientation, anchor);
            }
        }
    }

    /// Validated entry point for an interactive caller. An illegal action is
    /// rejected without mutating the state and without consuming the turn.
    pub fn try_move(&mut self, action: &Action) -> Result<()> {
        if !self.is_legal(action) {
            debug!("rejected illegal move {} for player {}", action, self.turn());
            bail!("illegal move: {}", action);
        }

        self.make_move(action);

        if self.is_over() {
            debug!("game over, player {} is on their goal row", self.turn());
        }

        Ok(())
    }

    pub fn is_legal(&self, action: &Action) -> bool {
        match action.wall() {
            None => self.valid_step_moves().contains(action),
            Some((orientation, anchor)) => {
                self.players[self.turn()].walls_remaining > 0
                    && self.is_wall_valid(orientation, anchor)
            }
        }
    }

    /// Wall legality: the wall must fit the layout geometrically and, once
    /// speculatively placed on a probe copy, must leave both players with a
    /// path to their goal row. The live layout is never touched.
    pub fn is_wall_valid(&self, orientation: WallOrientation, anchor: Coordinate) -> bool {
        if !self.board.wall_fits(orientation, anchor) {
            return false;
        }

        let mut probe = self.board.clone();
        probe.place_wall(orientation, anchor);

        (0..2).all(|player| probe.has_path(self.players[player].pawn, GOAL_ROWS[player]))
    }

    pub fn valid_step_moves(&self) -> Vec<Action> {
        let pawn = self.players[self.turn()].pawn;

        self.board.neighbors(pawn).map(Action::MovePawn).collect()
    }

    /// All legal actions for the side to move: pawn steps first, then, with
    /// walls left in the budget, every legal wall anchor in row-major order
    /// (vertical before horizontal per anchor).
    pub fn possible_moves(&self) -> Vec<Action> {
        let mut moves = self.valid_step_moves();

        if self.players[self.turn()].walls_remaining > 0 {
            for (y, x) in (0..WALL_GRID as u8).cartesian_product(0..WALL_GRID as u8) {
                let anchor = Coordinate::new(x, y);

                if self.is_wall_valid(WallOrientation::Vertical, anchor) {
                    moves.push(Action::PlaceVerticalWall(anchor));
                }
                if self.is_wall_valid(WallOrientation::Horizontal, anchor) {
                    moves.push(Action::PlaceHorizontalWall(anchor));
                }
            }
        }

        moves
    }

    /// Whether the side to move already occupies their goal row. A player's
    /// winning move is observed on their following turn.
    pub fn win(&self) -> bool {
        let player = self.turn();

        self.players[player].pawn.y == GOAL_ROWS[player]
    }

    pub fn is_over(&self) -> bool {
        self.win()
    }
}

impl PlayerState {
    fn new(pawn: Coordinate) -> Self {
        Self {
            pawn,
            walls_remaining: NUM_WALLS_PER_PLAYER,
            previous_pawn: None,
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl engine::GameState for GameState {
    fn initial() -> Self {
        GameState::new()
    }
}
