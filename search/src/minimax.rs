use engine::GameEngine;

use crate::tree::{advance_turn, at_least_as_good, expand};
use crate::{Evaluator, SearchBudget, SearchError, SearchResult};

/// Fixed depth minimax over any number of agents.
///
/// The agent to move at the root maximizes, every other agent minimizes. `depth` counts rounds of
/// one move per agent.
pub struct Minimax<'a, E, V> {
    engine: &'a E,
    evaluator: &'a V,
    depth: u32,
}

impl<'a, E, V> Minimax<'a, E, V>
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
        self.minimax(root, root, 0, game_state, budget)
    }

    fn minimax(
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
        let maximizing = agent == root;

        let mut best = SearchResult::leaf(if maximizing {
            f32::NEG_INFINITY
        } else {
            f32::INFINITY
        });

        for action in actions {
            let successor = self.engine.take_action(game_state, agent, &action);
            let score = self
                .minimax(root, next_agent, next_depth, &successor, budget)?
                .score;

            if at_least_as_good(score, best.score, maximizing) {
                best = SearchResult::new(score, Some(action));
            }
        }

        Ok(best)
    }
}
