use engine::{next_agent, GameEngine};

use crate::{Algorithm, SearchError};

/// Legal actions of a non-terminal node. An empty set means the engine broke its contract.
pub(crate) fn expand<E: GameEngine>(
    engine: &E,
    game_state: &E::State,
    agent: usize,
) -> Result<Vec<E::Action>, SearchError> {
    let actions = engine.legal_actions(game_state, agent);

    if actions.is_empty() {
        return Err(SearchError::InconsistentState {
            agent,
            reason: "no legal actions in a non-terminal state".to_string(),
        });
    }

    Ok(actions)
}

/// The agent to move next and the round depth it moves at.
///
/// A round is one move per agent starting from `root`; the depth only advances once the turn
/// returns to `root`.
pub(crate) fn advance_turn<E: GameEngine>(
    engine: &E,
    game_state: &E::State,
    root: usize,
    agent: usize,
    depth: u32,
) -> (usize, u32) {
    let next = next_agent(agent, engine.num_agents(game_state));
    let depth = if next == root { depth + 1 } else { depth };
    (next, depth)
}

/// A score at least as good as `best` replaces it, so the last of equal moves is kept.
pub(crate) fn at_least_as_good(score: f32, best: f32, maximizing: bool) -> bool {
    if maximizing {
        score >= best
    } else {
        score <= best
    }
}

pub(crate) fn ensure_two_agents<E: GameEngine>(
    engine: &E,
    game_state: &E::State,
    algorithm: Algorithm,
) -> Result<(), SearchError> {
    let agents = engine.num_agents(game_state);
    if agents == 2 {
        Ok(())
    } else {
        Err(SearchError::UnsupportedGame { algorithm, agents })
    }
}
