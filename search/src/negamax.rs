use engine::{next_agent, GameEngine};

use crate::tree::{ensure_two_agents, expand};
use crate::{Algorithm, Evaluator, SearchBudget, SearchError, SearchResult, TieBreaker};

/// Negamax for two agent zero-sum games. `depth` counts plies.
///
/// Every candidate move is searched on its own successor state. A backed-up score of exactly zero
/// goes through the tie breaker before it is compared.
pub struct Negamax<'a, E, V, T> {
    engine: &'a E,
    evaluator: &'a V,
    tie_breaker: T,
    depth: u32,
}

impl<'a, E, V, T> Negamax<'a, E, V, T>
where
    E: GameEngine,
    V: Evaluator<State = E::State>,
    T: TieBreaker,
{
    pub fn new(engine: &'a E, evaluator: &'a V, tie_breaker: T, depth: u32) -> Self {
        Self {
            engine,
            evaluator,
            tie_breaker,
            depth,
        }
    }

    pub fn search(
        &mut self,
        game_state: &E::State,
        budget: &mut SearchBudget,
    ) -> Result<SearchResult<E::Action>, SearchError> {
        ensure_two_agents(self.engine, game_state, Algorithm::Negamax)?;

        let agent = self.engine.agent_to_move(game_state);
        self.negamax(game_state, self.depth, agent, budget)
    }

    fn negamax(
        &mut self,
        game_state: &E::State,
        depth: u32,
        agent: usize,
        budget: &mut SearchBudget,
    ) -> Result<SearchResult<E::Action>, SearchError> {
        budget.enter()?;

        if depth == 0 || self.engine.is_terminal(game_state) {
            return Ok(SearchResult::leaf(
                self.evaluator.evaluate(game_state, agent),
            ));
        }

        let actions = expand(self.engine, game_state, agent)?;
        let opponent = next_agent(agent, 2);

        let mut best = SearchResult::leaf(f32::NEG_INFINITY);
        for action in actions {
            let successor = self.engine.take_action(game_state, agent, &action);
            let score = -self.negamax(&successor, depth - 1, opponent, budget)?.score;
            let score = self.tie_breaker.break_tie(score);

            if score > best.score {
                best = SearchResult::new(score, Some(action));
            }
        }

        Ok(best)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::counting_game::{CountingAction, CountingGameEngine, CountingGameState};
    use crate::{NoTieBreak, ScoreEvaluator};
    use engine::GameState;

    #[test]
    fn test_negamax_matches_minimax_on_counting_game() {
        let engine = CountingGameEngine::new(2);
        let evaluator = ScoreEvaluator::new(&engine);
        let mut negamax = Negamax::new(&engine, &evaluator, NoTieBreak, 4);

        let result = negamax
            .search(&CountingGameState::initial(), &mut SearchBudget::unlimited())
            .unwrap();

        assert_eq!(result.score, 50.0);
        assert_eq!(result.action, Some(CountingAction::Increment));
    }

    #[test]
    fn test_negamax_from_second_agent() {
        let engine = CountingGameEngine::new(2);
        let evaluator = ScoreEvaluator::new(&engine);
        let mut negamax = Negamax::new(&engine, &evaluator, NoTieBreak, 1);
        let state = CountingGameState {
            agent_to_move: 1,
            ..CountingGameState::initial()
        };

        let result = negamax
            .search(&state, &mut SearchBudget::unlimited())
            .unwrap();

        assert_eq!(result.score, -49.0);
        assert_eq!(result.action, Some(CountingAction::Decrement));
    }

    #[test]
    fn test_negamax_rejects_three_agents() {
        let engine = CountingGameEngine::new(3);
        let evaluator = ScoreEvaluator::new(&engine);
        let mut negamax = Negamax::new(&engine, &evaluator, NoTieBreak, 2);

        let result = negamax.search(&CountingGameState::initial(), &mut SearchBudget::unlimited());

        assert_eq!(
            result,
            Err(SearchError::UnsupportedGame {
                algorithm: Algorithm::Negamax,
                agents: 3
            })
        );
    }
}
