use crate::InvalidMoveError;

pub trait ParseAction {
    type State;
    type Action;

    /// Parses a move typed by the external actor. Only legal moves are accepted.
    fn parse_action(
        &self,
        game_state: &Self::State,
        input: &str,
    ) -> Result<Self::Action, InvalidMoveError>;
}

pub trait FormatAction {
    type State;
    type Action;

    fn format_action(&self, game_state: &Self::State, action: &Self::Action) -> String;
}

pub trait FormatState {
    type State;

    fn format_state(&self, game_state: &Self::State) -> String;
}

pub trait InitialGameState {
    type State;

    fn initial_game_state(&self) -> Self::State;
}
