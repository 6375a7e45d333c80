use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use anyhow::anyhow;
use engine::GameEngine;
use serde::{Deserialize, Serialize};

use crate::SearchError;

/// Scores a leaf state from the point of view of `agent`. Higher is better for that agent.
pub trait Evaluator {
    type State;

    fn evaluate(&self, game_state: &Self::State, agent: usize) -> f32;
}

impl<T: Evaluator + ?Sized> Evaluator for &T {
    type State = T::State;

    fn evaluate(&self, game_state: &Self::State, agent: usize) -> f32 {
        (**self).evaluate(game_state, agent)
    }
}

impl<T: Evaluator + ?Sized> Evaluator for Box<T> {
    type State = T::State;

    fn evaluate(&self, game_state: &Self::State, agent: usize) -> f32 {
        (**self).evaluate(game_state, agent)
    }
}

/// Uses the engine's own score.
///
/// The engine score is taken to be agent 0's. Any other perspective receives the negation, which
/// is what a zero-sum opponent sees.
pub struct ScoreEvaluator<'a, E> {
    engine: &'a E,
}

impl<'a, E> ScoreEvaluator<'a, E> {
    pub fn new(engine: &'a E) -> Self {
        Self { engine }
    }
}

impl<E: GameEngine> Evaluator for ScoreEvaluator<'_, E> {
    type State = E::State;

    fn evaluate(&self, game_state: &Self::State, agent: usize) -> f32 {
        let score = self.engine.score(game_state);
        if agent == 0 {
            score
        } else {
            -score
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EvaluationKind {
    Score,
    /// A game specific evaluation that has to be supplied by the caller.
    Better,
}

impl FromStr for EvaluationKind {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "score" => Ok(EvaluationKind::Score),
            "better" => Ok(EvaluationKind::Better),
            other => Err(anyhow!("Unknown evaluation function: {}", other)),
        }
    }
}

impl Display for EvaluationKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            EvaluationKind::Score => write!(f, "score"),
            EvaluationKind::Better => write!(f, "better"),
        }
    }
}

/// Resolves the configured evaluation.
///
/// Selecting `better` without supplying an implementation fails here, before any search starts.
pub fn select_evaluator<'a, E>(
    kind: EvaluationKind,
    engine: &'a E,
    better: Option<Box<dyn Evaluator<State = E::State> + 'a>>,
) -> Result<Box<dyn Evaluator<State = E::State> + 'a>, SearchError>
where
    E: GameEngine,
{
    match kind {
        EvaluationKind::Score => Ok(Box::new(ScoreEvaluator::new(engine))),
        EvaluationKind::Better => better.ok_or_else(|| {
            SearchError::NotImplemented(
                "the better evaluation function has no implementation for this game".to_string(),
            )
        }),
    }
}
