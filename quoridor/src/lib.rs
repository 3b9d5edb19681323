mod action;
mod board;
mod constants;
mod coordinate;
mod display;
mod engine;
mod game_state;
mod heuristic;
mod serde;
mod zobrist;

pub use self::action::Action;
pub use self::board::{Board, WallOrientation};
pub use self::constants::*;
pub use self::coordinate::Coordinate;
pub use self::engine::Engine;
pub use self::game_state::GameState;
pub use self::heuristic::WIN_SCORE;
