use engine::GameEngine;

use crate::tree::{advance_turn, at_least_as_good, expand};
use crate::{Evaluator, SearchBudget, SearchError, SearchResult};

/// The root agent maximizes, every other agent is modeled as choosing uniformly at random.
///
/// Chance nodes back up the mean of their children and select no action.
pub struct Expectimax<'a, E, V> {
    engine: &'a E,
    evaluator: &'a V,
    depth: u32,
}

impl<'a, E, V> Expectimax<'a, E, V>
where
    E: GameEngine,
    V: Evaluator<State = E::State>,
{
    pub fn new(engine: &'a E, evaluator: &'a V, depth: u32) -> Self {
        Self {
            engine,
            evaluator,
            depth,
        }
    }

    pub fn search(
        &self,
        game_state: &E::State,
        budget: &mut SearchBudget,
    ) -> Result<SearchResult<E::Action>, SearchError> {
        let root = self.engine.agent_to_move(game_state);
        self.expectimax(root, root, 0, game_state, budget)
    }

    fn expectimax(
        &self,
        root: usize,
        agent: usize,
        depth: u32,
        game_state: &E::State,
        budget: &mut SearchBudget,
    ) -> Result<SearchResult<E::Action>, SearchError> {
        budget.enter()?;

        if self.engine.is_terminal(game_state) || depth == self.depth {
            return Ok(SearchResult::leaf(
                self.evaluator.evaluate(game_state, root),
            ));
        }

        let actions = expand(self.engine, game_state, agent)?;
        let (next_agent, next_depth) = advance_turn(self.engine, game_state, root, agent, depth);

        if agent != root {
            let num_children = actions.len();
            let mut sum = 0.0;
            for action in actions {
                let successor = self.engine.take_action(game_state, agent, &action);
                sum += self
                    .expectimax(root, next_agent, next_depth, &successor, budget)?
                    .score;
            }

            return Ok(SearchResult::leaf(sum / num_children as f32));
        }

        let mut best = SearchResult::leaf(f32::NEG_INFINITY);
        for action in actions {
            let successor = self.engine.take_action(game_state, agent, &action);
            let score = self
                .expectimax(root, next_agent, next_depth, &successor, budget)?
                .score;

            if at_least_as_good(score, best.score, true) {
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
    use crate::ScoreEvaluator;
    use assert_approx_eq::assert_approx_eq;
    use engine::GameState;

    #[test]
    fn test_expectimax_against_random_opponent() {
        let engine = CountingGameEngine::new(2);
        let evaluator = ScoreEvaluator::new(&engine);
        let expectimax = Expectimax::new(&engine, &evaluator, 1);

        let result = expectimax
            .search(&CountingGameState::initial(), &mut SearchBudget::unlimited())
            .unwrap();

        assert_approx_eq!(result.score, 51.0);
        assert_eq!(result.action, Some(CountingAction::Increment));
    }

    #[test]
    fn test_expectimax_three_agents_two_rounds() {
        let engine = CountingGameEngine::new(3);
        let evaluator = ScoreEvaluator::new(&engine);
        let expectimax = Expectimax::new(&engine, &evaluator, 2);

        let result = expectimax
            .search(&CountingGameState::initial(), &mut SearchBudget::unlimited())
            .unwrap();

        assert_approx_eq!(result.score, 52.0);
        assert_eq!(result.action, Some(CountingAction::Increment));
    }
}
