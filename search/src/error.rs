use std::fmt;

use crate::Algorithm;

#[derive(Debug, Clone, PartialEq)]
pub enum SearchError {
    /// The engine reported a non-terminal state without legal actions.
    InconsistentState { agent: usize, reason: String },
    NotImplemented(String),
    UnsupportedGame { algorithm: Algorithm, agents: usize },
    BudgetExhausted { nodes: u64 },
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchError::InconsistentState { agent, reason } => {
                write!(f, "Inconsistent game state for agent {agent}: {reason}")
            }
            SearchError::NotImplemented(what) => write!(f, "Not implemented: {what}"),
            SearchError::UnsupportedGame { algorithm, agents } => write!(
                f,
                "{algorithm} requires a two agent zero-sum game, found {agents} agents"
            ),
            SearchError::BudgetExhausted { nodes } => {
                write!(f, "Search budget exhausted after {nodes} nodes")
            }
        }
    }
}

impl std::error::Error for SearchError {}
