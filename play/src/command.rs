use once_cell::sync::Lazy;
use regex::Regex;

use crate::InvalidMoveError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command<'a> {
    Help,
    Moves,
    Quit,
    Move(&'a str),
    Empty,
}

static HELP_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)^(help|\?)$").unwrap());
static MOVES_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)^(moves|history)$").unwrap());
static QUIT_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)^(quit|exit)$").unwrap());
static MOVE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(?:(?i:move)\s+)?(\S+)$").unwrap());

pub fn parse_command(line: &str) -> Result<Command<'_>, InvalidMoveError> {
    let line = line.trim();

    match line {
        "" => Ok(Command::Empty),
        _ if HELP_RE.is_match(line) => Ok(Command::Help),
        _ if MOVES_RE.is_match(line) => Ok(Command::Moves),
        _ if QUIT_RE.is_match(line) => Ok(Command::Quit),
        _ => MOVE_RE
            .captures(line)
            .and_then(|cap| cap.get(1))
            .map(|m| Command::Move(m.as_str()))
            .ok_or_else(|| InvalidMoveError::new(line, "expected a single move")),
    }
}

pub const HELP: &str = "\
help: Displays the available commands.
moves: Lists the previous moves to get to this state.
quit: Ends the game.
{A}: Plays the move A.";
