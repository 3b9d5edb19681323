use lazy_static::lazy_static;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::board::WallOrientation;
use super::constants::{BOARD_SIZE, NUM_WALLS_PER_PLAYER, WALL_GRID, WALL_GRID_SIZE};
use super::Coordinate;

lazy_static! {
    static ref KEYS: ZobristKeys = ZobristKeys::new();
}

/// Incrementally maintained transposition hash. Every update is an XOR so
/// applying the same update twice is a no-op, which is what lets unmake
/// restore the hash exactly.
///
/// Only player 0's remaining-wall count is keyed in: the walls on the board
/// together with one player's count pin down the other player's count.
#[derive(Clone, Copy, Hash, Eq, PartialEq, Debug)]
pub struct Zobrist {
    hash: u64,
}

struct ZobristKeys {
    pawn: [[u64; BOARD_SIZE]; 2],
    vertical_walls: [u64; WALL_GRID_SIZE],
    horizontal_walls: [u64; WALL_GRID_SIZE],
    walls_remaining: [u64; NUM_WALLS_PER_PLAYER as usize + 1],
    player_to_move: u64,
}

impl Zobrist {
    pub fn initial() -> Self {
        let keys = &*KEYS;
        let hash = keys.pawn[0][Coordinate::new(4, 0).index()]
            ^ keys.pawn[1][Coordinate::new(4, 8).index()]
            ^ keys.walls_remaining[NUM_WALLS_PER_PLAYER as usize];

        Self { hash }
    }

    pub fn board_state_hash(&self) -> u64 {
        self.hash
    }

    pub fn move_pawn(&self, player: usize, from: Coordinate, to: Coordinate) -> Self {
        let keys = &*KEYS;
        let hash = self.hash
            ^ keys.pawn[player][from.index()]
            ^ keys.pawn[player][to.index()]
            ^ keys.player_to_move;

        Self { hash }
    }

    /// `walls_remaining` is the placing player's count after the wall lands.
    pub fn place_wall(
        &self,
        player: usize,
        orientation: WallOrientation,
        anchor: Coordinate,
        walls_remaining: u8,
    ) -> Self {
        let keys = &*KEYS;
        let wall_key = match orientation {
            WallOrientation::Vertical => keys.vertical_walls[wall_index(anchor)],
            WallOrientation::Horizontal => keys.horizontal_walls[wall_index(anchor)],
        };

        let mut hash = self.hash ^ wall_key ^ keys.player_to_move;
        if player == 0 {
            hash ^= keys.walls_remaining[walls_remaining as usize]
                ^ keys.walls_remaining[walls_remaining as usize + 1];
        }

        Self { hash }
    }
}

fn wall_index(anchor: Coordinate) -> usize {
    anchor.y as usize * WALL_GRID + anchor.x as usize
}

impl ZobristKeys {
    fn new() -> Self {
        let mut rng = StdRng::seed_from_u64(0x4f0c_ad9e_13b6_7d21);

        Self {
            pawn: [fill(&mut rng), fill(&mut rng)],
            vertical_walls: fill(&mut rng),
            horizontal_walls: fill(&mut rng),
            walls_remaining: fill(&mut rng),
            player_to_move: rng.gen(),
        }
    }
}

fn fill<const N: usize>(rng: &mut StdRng) -> [u64; N] {
    let mut keys = [0u64; N];

    for key in keys.iter_mut() {
        *key = rng.gen();
    }

    keys
}
