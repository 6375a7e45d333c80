use anyhow::{Context, Result};
use play::{FormatAction, FormatState, InitialGameState, InvalidMoveError, ParseAction};
use shakmaty::fen::Fen;
use shakmaty::san::San;
use shakmaty::{CastlingMode, Chess, Color, File, Move, Position, Rank, Square};

/// Converts between chess positions and moves and their text forms: SAN for moves, FEN for
/// positions.
#[derive(Debug, Default, Clone)]
pub struct ChessMapper {}

impl ChessMapper {
    pub fn new() -> Self {
        Self {}
    }

    pub fn parse_fen(&self, fen: &str) -> Result<Chess> {
        let fen: Fen = fen
            .trim()
            .parse()
            .with_context(|| format!("Failed to parse FEN '{}'", fen))?;

        let position: Chess = fen
            .into_position(CastlingMode::Standard)
            .context("FEN does not describe a legal position")?;

        Ok(position)
    }
}

impl ParseAction for ChessMapper {
    type State = Chess;
    type Action = Move;

    fn parse_action(&self, game_state: &Chess, input: &str) -> Result<Move, InvalidMoveError> {
        let san: San = input
            .parse()
            .map_err(|err| InvalidMoveError::new(input, format!("{}", err)))?;

        san.to_move(game_state)
            .map_err(|err| InvalidMoveError::new(input, format!("{}", err)))
    }
}

impl FormatAction for ChessMapper {
    type State = Chess;
    type Action = Move;

    fn format_action(&self, game_state: &Chess, action: &Move) -> String {
        San::from_move(game_state, action).to_string()
    }
}

impl FormatState for ChessMapper {
    type State = Chess;

    fn format_state(&self, game_state: &Chess) -> String {
        let board = game_state.board();
        let mut output = String::new();

        for rank in Rank::ALL.iter().rev() {
            let row = File::ALL
                .iter()
                .map(|file| {
                    board
                        .piece_at(Square::from_coords(*file, *rank))
                        .map_or('.', |piece| piece.char())
                        .to_string()
                })
                .collect::<Vec<_>>()
                .join(" ");

            output.push_str(&row);
            output.push('\n');
        }

        let side = match game_state.turn() {
            Color::White => "White",
            Color::Black => "Black",
        };
        output.push_str(&format!("{} to move", side));

        output
    }
}

impl InitialGameState for ChessMapper {
    type State = Chess;

    fn initial_game_state(&self) -> Chess {
        Chess::default()
    }
}
