use super::{Action, GameState};
use engine::GameEngine;

#[derive(Default)]
pub struct Engine {}

impl Engine {
    pub fn new() -> Self {
        Self {}
    }
}

impl GameEngine for Engine {
    type Action = Action;
    type State = GameState;

    fn possible_moves(&self, game_state: &Self::State) -> Vec<Self::Action> {
        game_state.possible_moves()
    }

    fn make_move(&self, game_state: &mut Self::State, action: &Self::Action) {
        game_state.make_move(action);
    }

    fn unmake_move(&self, game_state: &mut Self::State, action: &Self::Action) {
        game_state.unmake_move(action);
    }

    fn is_over(&self, game_state: &Self::State) -> bool {
        game_state.is_over()
    }

    fn win(&self, game_state: &Self::State) -> bool {
        game_state.win()
    }

    fn scoring(&self, game_state: &Self::State) -> i32 {
        game_state.scoring()
    }

    fn player_to_move(&self, game_state: &Self::State) -> usize {
        game_state.turn()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use engine::GameState as GameStateTrait;

    fn node_count(engine: &Engine, game_state: &mut GameState, depth: usize) -> usize {
        if depth == 0 || engine.is_over(game_state) {
            return 1;
        }

        let mut nodes = 0;
        for action in engine.possible_moves(game_state) {
            engine.make_move(game_state, &action);
            nodes += node_count(engine, game_state, depth - 1);
            engine.unmake_move(game_state, &action);
        }

        nodes
    }

    #[test]
    fn test_initial_state_via_trait() {
        let engine = Engine::new();
        let game_state = GameState::initial();

        assert_eq!(engine.player_to_move(&game_state), 0);
        assert_eq!(engine.possible_moves(&game_state).len(), 131);
        assert!(!engine.is_over(&game_state));
    }

    #[test]
    fn test_search_walk_restores_state() {
        let engine = Engine::new();
        let mut game_state = GameState::initial();
        let initial_hash = game_state.transposition_hash();

        let nodes = node_count(&engine, &mut game_state, 2);

        assert!(nodes > 131);
        assert_eq!(game_state.transposition_hash(), initial_hash);
        assert_eq!(engine.player_to_move(&game_state), 0);
        assert_eq!(game_state.pawn(0), "e1".parse().unwrap());
        assert_eq!(game_state.pawn(1), "e9".parse().unwrap());
    }
}
