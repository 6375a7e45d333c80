use std::time::{Duration, Instant};

use crate::SearchError;

const TIME_CHECK_INTERVAL: u64 = 1024;

/// Counts visited nodes and stops a search once a node limit or deadline is reached.
///
/// `enter` is called at every recursive entry of every algorithm.
#[derive(Debug, Clone)]
pub struct SearchBudget {
    start_time: Instant,
    max_nodes: Option<u64>,
    move_time: Option<Duration>,
    nodes: u64,
}

impl SearchBudget {
    pub fn new(max_nodes: Option<u64>, move_time: Option<Duration>) -> Self {
        Self {
            start_time: Instant::now(),
            max_nodes,
            move_time,
            nodes: 0,
        }
    }

    pub fn unlimited() -> Self {
        Self::new(None, None)
    }

    pub fn is_limited(&self) -> bool {
        self.max_nodes.is_some() || self.move_time.is_some()
    }

    pub fn nodes(&self) -> u64 {
        self.nodes
    }

    pub fn elapsed(&self) -> Duration {
        self.start_time.elapsed()
    }

    pub fn enter(&mut self) -> Result<(), SearchError> {
        if let Some(max_nodes) = self.max_nodes {
            if self.nodes >= max_nodes {
                return Err(SearchError::BudgetExhausted { nodes: self.nodes });
            }
        }

        self.nodes += 1;

        if let Some(move_time) = self.move_time {
            if self.nodes % TIME_CHECK_INTERVAL == 0 && self.elapsed() >= move_time {
                return Err(SearchError::BudgetExhausted { nodes: self.nodes });
            }
        }

        Ok(())
    }
}

impl Default for SearchBudget {
    fn default() -> Self {
        Self::unlimited()
    }
}
