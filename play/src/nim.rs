use engine::{next_agent, GameEngine};
use search::{Agent, SearchError};

use crate::{FormatAction, FormatState, InitialGameState, InvalidMoveError, ParseAction};

/// Two agents take one or two sticks in turn. Whoever takes the last stick wins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NimState {
    pub sticks: usize,
    pub agent_to_move: usize,
}

pub struct NimEngine;

impl GameEngine for NimEngine {
    type Action = usize;
    type State = NimState;

    fn legal_actions(&self, game_state: &Self::State, _agent: usize) -> Vec<Self::Action> {
        (1..=game_state.sticks.min(2)).collect()
    }

    fn take_action(&self, game_state: &Self::State, agent: usize, action: &usize) -> NimState {
        NimState {
            sticks: game_state.sticks - action,
            agent_to_move: next_agent(agent, 2),
        }
    }

    fn is_terminal(&self, game_state: &Self::State) -> bool {
        game_state.sticks == 0
    }

    fn num_agents(&self, _game_state: &Self::State) -> usize {
        2
    }

    fn agent_to_move(&self, game_state: &Self::State) -> usize {
        game_state.agent_to_move
    }

    fn score(&self, game_state: &Self::State) -> f32 {
        match (self.is_terminal(game_state), game_state.agent_to_move) {
            (false, _) => 0.0,
            (true, 0) => -1.0,
            (true, _) => 1.0,
        }
    }
}

pub struct NimMapper {
    pub sticks: usize,
}

impl ParseAction for NimMapper {
    type State = NimState;
    type Action = usize;

    fn parse_action(&self, _game_state: &NimState, input: &str) -> Result<usize, InvalidMoveError> {
        input
            .parse()
            .map_err(|_| InvalidMoveError::new(input, "not a number"))
    }
}

impl FormatAction for NimMapper {
    type State = NimState;
    type Action = usize;

    fn format_action(&self, _game_state: &NimState, action: &usize) -> String {
        action.to_string()
    }
}

impl FormatState for NimMapper {
    type State = NimState;

    fn format_state(&self, game_state: &NimState) -> String {
        format!("sticks: {}", game_state.sticks)
    }
}

impl InitialGameState for NimMapper {
    type State = NimState;

    fn initial_game_state(&self) -> NimState {
        NimState {
            sticks: self.sticks,
            agent_to_move: 0,
        }
    }
}

/// Always takes a single stick.
pub struct TakeOne;

impl Agent for TakeOne {
    type State = NimState;
    type Action = usize;

    fn choose_action(&mut self, game_state: &NimState) -> Result<Option<usize>, SearchError> {
        Ok((game_state.sticks > 0).then_some(1))
    }

    fn name(&self) -> &str {
        "take-one"
    }
}
