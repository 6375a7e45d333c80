use engine::{next_agent, GameEngine};

use crate::tree::{ensure_two_agents, expand};
use crate::{Algorithm, Evaluator, SearchBudget, SearchError, SearchResult, TieBreaker};

/// Width of the null window. Scores are expected to be integral apart from tie breaks.
const NULL_WINDOW: f32 = 1.0;

/// Principal variation search in negamax form. `depth` counts plies.
///
/// The first move is searched with the full window, later moves with a null window around alpha.
/// A null window score strictly inside `(alpha, beta)` at depth above one is re-searched with
/// `(score, beta)`.
pub struct NegaScout<'a, E, V, T> {
    engine: &'a E,
    evaluator: &'a V,
    tie_breaker: T,
    depth: u32,
}

impl<'a, E, V, T> NegaScout<'a, E, V, T>
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
        ensure_two_agents(self.engine, game_state, Algorithm::NegaScout)?;

        let agent = self.engine.agent_to_move(game_state);
        self.nega_scout(
            game_state,
            self.depth,
            f32::NEG_INFINITY,
            f32::INFINITY,
            agent,
            budget,
        )
    }

    fn nega_scout(
        &mut self,
        game_state: &E::State,
        depth: u32,
        mut alpha: f32,
        beta: f32,
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

        let mut window = beta;
        let mut best = SearchResult::leaf(f32::NEG_INFINITY);

        for (index, action) in actions.into_iter().enumerate() {
            let successor = self.engine.take_action(game_state, agent, &action);
            let mut score = -self
                .nega_scout(&successor, depth - 1, -window, -alpha, opponent, budget)?
                .score;

            if score > alpha && score < beta && index > 0 && depth > 1 {
                let research = -self
                    .nega_scout(&successor, depth - 1, -beta, -score, opponent, budget)?
                    .score;
                score = score.max(research);
            }

            let score = self.tie_breaker.break_tie(score);

            if score > best.score {
                best = SearchResult::new(score, Some(action));
            }

            alpha = alpha.max(score);
            if alpha >= beta {
                break;
            }

            window = alpha + NULL_WINDOW;
        }

        Ok(best)
    }
}
