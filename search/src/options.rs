use std::fmt::{self, Display, Formatter};
use std::str::FromStr;
use std::time::Duration;

use anyhow::{anyhow, Result};
use common::{Config, ConfigLoader};
use serde::{Deserialize, Serialize};

use crate::EvaluationKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Algorithm {
    Minimax,
    AlphaBeta,
    Expectimax,
    Negamax,
    NegaScout,
    Reflex,
    Random,
}

impl FromStr for Algorithm {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace(['-', '_'], "").as_str() {
            "minimax" => Ok(Algorithm::Minimax),
            "alphabeta" => Ok(Algorithm::AlphaBeta),
            "expectimax" => Ok(Algorithm::Expectimax),
            "negamax" => Ok(Algorithm::Negamax),
            "negascout" | "pvs" => Ok(Algorithm::NegaScout),
            "reflex" => Ok(Algorithm::Reflex),
            "random" => Ok(Algorithm::Random),
            _ => Err(anyhow!("Unknown search algorithm: {}", s)),
        }
    }
}

impl Display for Algorithm {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let name = match self {
            Algorithm::Minimax => "minimax",
            Algorithm::AlphaBeta => "alpha-beta",
            Algorithm::Expectimax => "expectimax",
            Algorithm::Negamax => "negamax",
            Algorithm::NegaScout => "negascout",
            Algorithm::Reflex => "reflex",
            Algorithm::Random => "random",
        };
        write!(f, "{}", name)
    }
}

/// Boundary at which alpha-beta stops exploring siblings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CutoffRule {
    /// Prune when `alpha > beta`.
    Strict,
    /// Prune when `alpha >= beta`.
    Inclusive,
}

impl CutoffRule {
    pub fn prunes(self, alpha: f32, beta: f32) -> bool {
        match self {
            CutoffRule::Strict => alpha > beta,
            CutoffRule::Inclusive => alpha >= beta,
        }
    }

    /// Whether `score` replaces `best` as the kept move.
    ///
    /// Equal scores replace under the strict rule. Under the inclusive rule a pruned child can
    /// report a bound equal to the current best, so only strictly better scores replace.
    pub fn replaces(self, score: f32, best: f32, maximizing: bool) -> bool {
        match (self, maximizing) {
            (CutoffRule::Strict, true) => score >= best,
            (CutoffRule::Strict, false) => score <= best,
            (CutoffRule::Inclusive, true) => score > best,
            (CutoffRule::Inclusive, false) => score < best,
        }
    }
}

impl FromStr for CutoffRule {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "strict" | ">" => Ok(CutoffRule::Strict),
            "inclusive" | ">=" => Ok(CutoffRule::Inclusive),
            other => Err(anyhow!("Unknown cutoff rule: {}", other)),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct SearchOptions {
    /// Rounds for the minimax family, plies for the negamax family.
    pub depth: u32,
    pub algorithm: Algorithm,
    pub evaluation: EvaluationKind,
    pub cutoff: CutoffRule,
    pub tie_break: bool,
    pub seed: Option<u64>,
    pub max_nodes: Option<u64>,
    pub move_time_ms: Option<u64>,
}

impl SearchOptions {
    pub fn new(algorithm: Algorithm, depth: u32) -> Self {
        Self {
            depth,
            algorithm,
            ..Default::default()
        }
    }

    pub fn move_time(&self) -> Option<Duration> {
        self.move_time_ms.map(Duration::from_millis)
    }
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            depth: 2,
            algorithm: Algorithm::Minimax,
            evaluation: EvaluationKind::Score,
            cutoff: CutoffRule::Strict,
            tie_break: true,
            seed: None,
            max_nodes: None,
            move_time_ms: None,
        }
    }
}

impl Config for SearchOptions {
    fn load(config: &ConfigLoader) -> Result<Self> {
        let defaults = Self::default();

        Ok(Self {
            depth: config
                .get("depth")
                .and_then(|v| v.as_usize())
                .map(|v| v as u32)
                .unwrap_or(defaults.depth),
            algorithm: config
                .get("algorithm")
                .and_then(|v| v.as_string())
                .map(|v| v.parse())
                .transpose()?
                .unwrap_or(defaults.algorithm),
            evaluation: config
                .get("evaluation")
                .and_then(|v| v.as_string())
                .map(|v| v.parse())
                .transpose()?
                .unwrap_or(defaults.evaluation),
            cutoff: config
                .get("cutoff")
                .and_then(|v| v.as_string())
                .map(|v| v.parse())
                .transpose()?
                .unwrap_or(defaults.cutoff),
            tie_break: config
                .get("tie_break")
                .and_then(|v| v.as_bool())
                .unwrap_or(defaults.tie_break),
            seed: config.get("seed").and_then(|v| v.as_u64()),
            max_nodes: config.get("max_nodes").and_then(|v| v.as_u64()),
            move_time_ms: config.get("move_time_ms").and_then(|v| v.as_u64()),
        })
    }
}
