use engine::{next_agent, GameEngine, GameState};

use crate::Evaluator;

#[derive(PartialEq, Eq, Clone, Debug)]
pub struct CountingGameState {
    pub agent_to_move: usize,
    pub count: usize,
    pub plies: usize,
}

impl GameState for CountingGameState {
    fn initial() -> Self {
        Self {
            agent_to_move: 0,
            count: 50,
            plies: 0,
        }
    }
}

#[derive(PartialEq, Eq, Clone, Debug)]
pub enum CountingAction {
    Increment,
    Decrement,
    Stay,
}

/// Agents take turns moving a shared counter. The game ends at 0 or 100 and the score is the count.
pub struct CountingGameEngine {
    num_agents: usize,
    max_actions: Vec<CountingAction>,
    opponent_actions: Vec<CountingAction>,
}

impl CountingGameEngine {
    pub fn new(num_agents: usize) -> Self {
        let all = vec![
            CountingAction::Increment,
            CountingAction::Decrement,
            CountingAction::Stay,
        ];

        Self::with_actions(num_agents, all.clone(), all)
    }

    pub fn with_actions(
        num_agents: usize,
        max_actions: Vec<CountingAction>,
        opponent_actions: Vec<CountingAction>,
    ) -> Self {
        Self {
            num_agents,
            max_actions,
            opponent_actions,
        }
    }
}

impl GameEngine for CountingGameEngine {
    type Action = CountingAction;
    type State = CountingGameState;

    fn legal_actions(&self, _game_state: &Self::State, agent: usize) -> Vec<Self::Action> {
        if agent == 0 {
            self.max_actions.clone()
        } else {
            self.opponent_actions.clone()
        }
    }

    fn take_action(
        &self,
        game_state: &Self::State,
        agent: usize,
        action: &Self::Action,
    ) -> Self::State {
        let count = game_state.count;

        let count = match action {
            CountingAction::Increment => count + 1,
            CountingAction::Decrement => count - 1,
            CountingAction::Stay => count,
        };

        Self::State {
            agent_to_move: next_agent(agent, self.num_agents),
            count,
            plies: game_state.plies + 1,
        }
    }

    fn is_terminal(&self, game_state: &Self::State) -> bool {
        game_state.count == 0 || game_state.count == 100
    }

    fn num_agents(&self, _game_state: &Self::State) -> usize {
        self.num_agents
    }

    fn agent_to_move(&self, game_state: &Self::State) -> usize {
        game_state.agent_to_move
    }

    fn score(&self, game_state: &Self::State) -> f32 {
        game_state.count as f32
    }
}

/// Scores a state by the number of moves played to reach it.
pub struct PliesEvaluator;

impl Evaluator for PliesEvaluator {
    type State = CountingGameState;

    fn evaluate(&self, game_state: &Self::State, _agent: usize) -> f32 {
        game_state.plies as f32
    }
}
