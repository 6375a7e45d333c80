use std::io::{BufRead, Write};

use anyhow::{anyhow, Context, Result};
use engine::GameEngine;
use log::{info, warn};
use search::Agent;

use crate::{
    parse_command, Command, Ending, FormatAction, FormatState, InvalidMoveError, Outcome,
    ParseAction, HELP,
};

/// Alternates moves read from an external actor with moves chosen by an agent until the game ends.
///
/// The external actor plays `human`; with `None` the agent plays every side.
pub struct Driver<'a, E, M, G> {
    engine: &'a E,
    mapper: &'a M,
    agent: G,
    human: Option<usize>,
}

impl<'a, E, M, G, S, A> Driver<'a, E, M, G>
where
    E: GameEngine<State = S, Action = A>,
    M: ParseAction<State = S, Action = A> + FormatAction<State = S, Action = A> + FormatState<State = S>,
    G: Agent<State = S, Action = A>,
    A: Clone + PartialEq,
{
    pub fn new(engine: &'a E, mapper: &'a M, agent: G, human: Option<usize>) -> Self {
        Self {
            engine,
            mapper,
            agent,
            human,
        }
    }

    pub fn run<R, W>(&mut self, game_state: S, mut input: R, mut output: W) -> Result<Outcome<A>>
    where
        R: BufRead,
        W: Write,
    {
        let mut state = game_state;
        let mut history: Vec<A> = vec![];
        let mut notation: Vec<String> = vec![];

        while !self.engine.is_terminal(&state) {
            let agent = self.engine.agent_to_move(&state);

            let action = if self.human == Some(agent) {
                writeln!(output, "{}", self.mapper.format_state(&state))?;

                match self.read_action(&state, agent, &notation, &mut input, &mut output)? {
                    Some(action) => action,
                    None => {
                        info!("Game aborted after {} moves", history.len());
                        return Ok(Outcome {
                            ending: Ending::Aborted,
                            history,
                        });
                    }
                }
            } else {
                let action = self
                    .agent
                    .choose_action(&state)
                    .with_context(|| format!("{} failed to choose a move", self.agent.name()))?
                    .ok_or_else(|| anyhow!("{} returned no move", self.agent.name()))?;

                let formatted = self.mapper.format_action(&state, &action);
                info!("{} plays {}", self.agent.name(), formatted);
                writeln!(output, "{} plays {}", self.agent.name(), formatted)?;
                action
            };

            notation.push(self.mapper.format_action(&state, &action));
            state = self.engine.take_action(&state, agent, &action);
            history.push(action);
        }

        let score = self.engine.score(&state);
        writeln!(output, "{}", self.mapper.format_state(&state))?;
        writeln!(output, "Game over: {}", score)?;
        info!("Game over after {} moves with score {}", history.len(), score);

        Ok(Outcome {
            ending: Ending::Terminal { score },
            history,
        })
    }

    /// Prompts until a legal move is entered. `None` when input ends or the actor quits.
    fn read_action<R, W>(
        &self,
        game_state: &S,
        agent: usize,
        notation: &[String],
        input: &mut R,
        output: &mut W,
    ) -> Result<Option<A>>
    where
        R: BufRead,
        W: Write,
    {
        loop {
            write!(output, "Input your move: ")?;
            output.flush()?;

            let mut line = String::new();
            if input.read_line(&mut line)? == 0 {
                return Ok(None);
            }

            let rejected = match parse_command(&line) {
                Ok(Command::Empty) => None,
                Ok(Command::Help) => {
                    writeln!(output, "{}", HELP)?;
                    None
                }
                Ok(Command::Moves) => {
                    writeln!(output, "{}", notation.join(","))?;
                    None
                }
                Ok(Command::Quit) => return Ok(None),
                Ok(Command::Move(text)) => match self.parse_legal(game_state, agent, text) {
                    Ok(action) => return Ok(Some(action)),
                    Err(err) => Some(err),
                },
                Err(err) => Some(err),
            };

            if let Some(err) = rejected {
                warn!("{}", err);
                writeln!(output, "{}", err)?;
            }
        }
    }

    fn parse_legal(&self, game_state: &S, agent: usize, text: &str) -> Result<A, InvalidMoveError> {
        let action = self.mapper.parse_action(game_state, text)?;

        if self
            .engine
            .legal_actions(game_state, agent)
            .contains(&action)
        {
            Ok(action)
        } else {
            Err(InvalidMoveError::new(text, "illegal in this position"))
        }
    }
}
