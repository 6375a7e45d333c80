mod agent;
mod engine;
mod evaluation;
mod mapper;

pub use agent::*;
pub use crate::engine::*;
pub use evaluation::*;
pub use mapper::*;
