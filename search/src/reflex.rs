use engine::GameEngine;
use rand::seq::SliceRandom;
use rand::Rng;

use crate::tree::expand;
use crate::{Evaluator, SearchBudget, SearchError, SearchResult};

/// Looks one move ahead: evaluates every successor and picks uniformly among the best.
pub fn reflex<E, V, R>(
    engine: &E,
    evaluator: &V,
    game_state: &E::State,
    rng: &mut R,
    budget: &mut SearchBudget,
) -> Result<SearchResult<E::Action>, SearchError>
where
    E: GameEngine,
    V: Evaluator<State = E::State>,
    R: Rng,
{
    budget.enter()?;

    let agent = engine.agent_to_move(game_state);
    if engine.is_terminal(game_state) {
        return Ok(SearchResult::leaf(evaluator.evaluate(game_state, agent)));
    }

    let actions = expand(engine, game_state, agent)?;
    let mut scores = Vec::with_capacity(actions.len());
    for action in &actions {
        budget.enter()?;
        let successor = engine.take_action(game_state, agent, action);
        scores.push(evaluator.evaluate(&successor, agent));
    }

    let best_score = scores.iter().copied().fold(f32::NEG_INFINITY, f32::max);
    let best_indices: Vec<usize> = scores
        .iter()
        .enumerate()
        .filter(|(_, score)| **score == best_score)
        .map(|(index, _)| index)
        .collect();

    let chosen = *best_indices
        .choose(rng)
        .ok_or_else(|| SearchError::InconsistentState {
            agent,
            reason: "no successor could be scored".to_string(),
        })?;

    let action = actions.into_iter().nth(chosen);
    Ok(SearchResult::new(best_score, action))
}

/// Picks a uniformly random legal action. The score is the evaluation of the current state.
pub fn random_action<E, V, R>(
    engine: &E,
    evaluator: &V,
    game_state: &E::State,
    rng: &mut R,
    budget: &mut SearchBudget,
) -> Result<SearchResult<E::Action>, SearchError>
where
    E: GameEngine,
    V: Evaluator<State = E::State>,
    R: Rng,
{
    budget.enter()?;

    let agent = engine.agent_to_move(game_state);
    let score = evaluator.evaluate(game_state, agent);
    if engine.is_terminal(game_state) {
        return Ok(SearchResult::leaf(score));
    }

    let mut actions = expand(engine, game_state, agent)?;
    let index = rng.gen_range(0..actions.len());
    Ok(SearchResult::new(score, Some(actions.swap_remove(index))))
}
