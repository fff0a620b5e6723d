//! Core infrastructure: RNG, command dispatch, error taxonomy.

mod command;
mod error;
mod rng;

pub use command::Command;
pub use error::GameError;
pub use rng::{GameRng, GameRngState};
