use std::fmt::Debug;
use std::hash::Hash;

/// A game position. `Clone` is what allows a parallel search collaborator
/// to explore siblings on deep copies instead of sharing the live state.
pub trait GameState: Hash + Clone + Debug {
    fn initial() -> Self;
}
