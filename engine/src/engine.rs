pub trait GameEngine {
    type Action;
    type State;

    /// Every legal action for the side to move, in a deterministic order.
    fn possible_moves(&self, game_state: &Self::State) -> Vec<Self::Action>;

    /// Applies an action and flips the turn. The action must have been
    /// validated; this is the unchecked fast path for search.
    fn make_move(&self, game_state: &mut Self::State, action: &Self::Action);

    /// Reverses the most recently made action. Calls must mirror the make
    /// order exactly (LIFO); the undo history is one slot deep per player.
    fn unmake_move(&self, game_state: &mut Self::State, action: &Self::Action);

    fn is_over(&self, game_state: &Self::State) -> bool;
    fn win(&self, game_state: &Self::State) -> bool;

    /// Static evaluation of the state, higher favoring the second player.
    fn scoring(&self, game_state: &Self::State) -> i32;

    fn player_to_move(&self, game_state: &Self::State) -> usize;
}
