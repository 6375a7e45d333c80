use engine::GameEngine;
use shakmaty::{Chess, Color, Move, Position};

use crate::{material_balance, PieceValues};

pub const WHITE: usize = 0;
pub const BLACK: usize = 1;

pub fn color_to_agent(color: Color) -> usize {
    match color {
        Color::White => WHITE,
        Color::Black => BLACK,
    }
}

/// Chess through the shakmaty rules. White is agent 0 and black agent 1.
#[derive(Debug, Default)]
pub struct Engine {
    piece_values: PieceValues,
}

impl Engine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_piece_values(piece_values: PieceValues) -> Self {
        Self { piece_values }
    }
}

impl GameEngine for Engine {
    type Action = Move;
    type State = Chess;

    /// Moves of the side to move. Chess has no moves for the side that is waiting.
    fn legal_actions(&self, game_state: &Self::State, _agent: usize) -> Vec<Self::Action> {
        game_state.legal_moves().into_iter().collect()
    }

    fn take_action(
        &self,
        game_state: &Self::State,
        _agent: usize,
        action: &Self::Action,
    ) -> Self::State {
        let mut next = game_state.clone();
        next.play_unchecked(action);
        next
    }

    fn is_terminal(&self, game_state: &Self::State) -> bool {
        game_state.is_game_over()
    }

    fn num_agents(&self, _game_state: &Self::State) -> usize {
        2
    }

    fn agent_to_move(&self, game_state: &Self::State) -> usize {
        color_to_agent(game_state.turn())
    }

    /// Material balance from white's side.
    fn score(&self, game_state: &Self::State) -> f32 {
        material_balance(game_state.board(), &self.piece_values)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ChessMapper;
    use assert_approx_eq::assert_approx_eq;

    #[test]
    fn test_initial_position() {
        let engine = Engine::new();
        let state = Chess::default();

        assert_eq!(engine.legal_actions(&state, WHITE).len(), 20);
        assert_eq!(engine.agent_to_move(&state), WHITE);
        assert!(!engine.is_terminal(&state));
        assert_approx_eq!(engine.score(&state), 0.0);
    }

    #[test]
    fn test_successor_does_not_modify_input() {
        let engine = Engine::new();
        let state = Chess::default();
        let board = state.board().clone();

        for action in engine.legal_actions(&state, WHITE) {
            let next = engine.take_action(&state, WHITE, &action);
            assert_eq!(engine.agent_to_move(&next), BLACK);
        }

        assert_eq!(state.board(), &board);
        assert_eq!(state.turn(), Color::White);
    }

    #[test]
    fn test_checkmate_is_terminal() {
        let mapper = ChessMapper::default();
        let state = mapper
            .parse_fen("rnb1kbnr/pppp1ppp/8/4p3/6Pq/5P2/PPPPP2P/RNBQKBNR w KQkq - 1 3")
            .unwrap();

        assert!(Engine::new().is_terminal(&state));
    }
}
