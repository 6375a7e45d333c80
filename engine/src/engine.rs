/// The capabilities a search needs from a game implementation.
///
/// Agents are indexed from `0` to `num_agents - 1`. Implementations must return legal actions in a
/// deterministic order and must never mutate the state passed to `take_action`.
pub trait GameEngine {
    type Action;
    type State;

    fn legal_actions(&self, game_state: &Self::State, agent: usize) -> Vec<Self::Action>;
    fn take_action(
        &self,
        game_state: &Self::State,
        agent: usize,
        action: &Self::Action,
    ) -> Self::State;
    fn is_terminal(&self, game_state: &Self::State) -> bool;
    fn num_agents(&self, game_state: &Self::State) -> usize;
    fn agent_to_move(&self, game_state: &Self::State) -> usize;

    /// The engine's own score of the state. Used as the default evaluation.
    fn score(&self, game_state: &Self::State) -> f32;
}

/// The agent that moves after `agent` in a game of `num_agents` agents.
pub fn next_agent(agent: usize, num_agents: usize) -> usize {
    (agent + 1) % num_agents
}
