use engine::GameEngine;

use crate::tree::{advance_turn, expand};
use crate::{CutoffRule, Evaluator, SearchBudget, SearchError, SearchResult};

/// Minimax with alpha-beta pruning over any number of agents.
///
/// Agents other than the root agent all minimize and share the beta bound.
pub struct AlphaBeta<'a, E, V> {
    engine: &'a E,
    evaluator: &'a V,
    depth: u32,
    cutoff: CutoffRule,
}

impl<'a, E, V> AlphaBeta<'a, E, V>
where
    E: GameEngine,
    V: Evaluator<State = E::State>,
{
    pub fn new(engine: &'a E, evaluator: &'a V, depth: u32, cutoff: CutoffRule) -> Self {
        Self {
            engine,
            evaluator,
            depth,
            cutoff,
        }
    }

    pub fn search(
        &self,
        game_state: &E::State,
        budget: &mut SearchBudget,
    ) -> Result<SearchResult<E::Action>, SearchError> {
        let root = self.engine.agent_to_move(game_state);
        self.alpha_beta(
            root,
            root,
            0,
            game_state,
            f32::NEG_INFINITY,
            f32::INFINITY,
            budget,
        )
    }

    #[allow(clippy::too_many_arguments)]
    fn alpha_beta(
        &self,
        root: usize,
        agent: usize,
        depth: u32,
        game_state: &E::State,
        mut alpha: f32,
        mut beta: f32,
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
                .alpha_beta(
                    root,
                    next_agent,
                    next_depth,
                    &successor,
                    alpha,
                    beta,
                    budget,
                )?
                .score;

            if self.cutoff.replaces(score, best.score, maximizing) {
                best = SearchResult::new(score, Some(action));
            }

            if maximizing {
                alpha = alpha.max(best.score);
            } else {
                beta = beta.min(best.score);
            }

            if self.cutoff.prunes(alpha, beta) {
                break;
            }
        }

        Ok(best)
    }
}
