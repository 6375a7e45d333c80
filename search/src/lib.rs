mod agent;
mod alpha_beta;
mod budget;
#[cfg(test)]
mod counting_game;
mod error;
mod evaluation;
mod expectimax;
mod minimax;
mod nega_scout;
mod negamax;
mod options;
mod reflex;
mod search_result;
mod tie_break;
mod tree;
#[cfg(test)]
mod tree_game;

pub use agent::*;
pub use alpha_beta::*;
pub use budget::*;
pub use error::*;
pub use evaluation::*;
pub use expectimax::*;
pub use minimax::*;
pub use nega_scout::*;
pub use negamax::*;
pub use options::*;
pub use reflex::*;
pub use search_result::*;
pub use tie_break::*;
