mod command;
mod driver;
mod error;
mod mapper;
#[cfg(test)]
mod nim;
mod outcome;

pub use command::*;
pub use driver::*;
pub use error::*;
pub use mapper::*;
pub use outcome::*;
