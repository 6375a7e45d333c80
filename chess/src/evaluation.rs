use anyhow::Result;
use common::{Config, ConfigLoader};
use serde::{Deserialize, Serialize};
use shakmaty::{Board, Chess, Color, Position, Role};

use search::Evaluator;

use crate::WHITE;

const ROLES: [Role; 5] = [Role::Pawn, Role::Knight, Role::Bishop, Role::Rook, Role::Queen];

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct PieceValues {
    pub pawn: f32,
    pub knight: f32,
    pub bishop: f32,
    pub rook: f32,
    pub queen: f32,
}

impl PieceValues {
    pub fn value(&self, role: Role) -> f32 {
        match role {
            Role::Pawn => self.pawn,
            Role::Knight => self.knight,
            Role::Bishop => self.bishop,
            Role::Rook => self.rook,
            Role::Queen => self.queen,
            Role::King => 0.0,
        }
    }
}

impl Default for PieceValues {
    fn default() -> Self {
        Self {
            pawn: 1.0,
            knight: 3.0,
            bishop: 3.0,
            rook: 5.0,
            queen: 9.0,
        }
    }
}

impl Config for PieceValues {
    fn load(config: &ConfigLoader) -> Result<Self> {
        let default = Self::default();
        let value = |name: &str, default: f32| {
            config
                .get(name)
                .and_then(|v| v.as_f32())
                .unwrap_or(default)
        };

        Ok(Self {
            pawn: value("pawn_value", default.pawn),
            knight: value("knight_value", default.knight),
            bishop: value("bishop_value", default.bishop),
            rook: value("rook_value", default.rook),
            queen: value("queen_value", default.queen),
        })
    }
}

/// Weighted material of white minus that of black.
pub fn material_balance(board: &Board, values: &PieceValues) -> f32 {
    ROLES
        .iter()
        .map(|role| {
            let pieces = board.by_role(*role);
            let white = (pieces & board.by_color(Color::White)).count() as f32;
            let black = (pieces & board.by_color(Color::Black)).count() as f32;
            values.value(*role) * (white - black)
        })
        .sum()
}

/// Pieces of one side, kings excluded.
pub fn piece_count(board: &Board, color: Color) -> usize {
    (board.by_color(color) & !board.kings()).count()
}

/// Material balance scaled by the difference in piece counts, signed for the perspective agent.
#[derive(Debug, Default, Clone)]
pub struct MaterialEvaluator {
    values: PieceValues,
}

impl MaterialEvaluator {
    pub fn new(values: PieceValues) -> Self {
        Self { values }
    }
}

impl Evaluator for MaterialEvaluator {
    type State = Chess;

    fn evaluate(&self, game_state: &Self::State, agent: usize) -> f32 {
        let board = game_state.board();
        let who = if agent == WHITE { 1.0 } else { -1.0 };
        let pieces = piece_count(board, Color::White) as f32 - piece_count(board, Color::Black) as f32;

        material_balance(board, &self.values) * pieces * who
    }
}
