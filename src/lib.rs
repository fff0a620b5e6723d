//! # set-core
//!
//! Core engine for the card game Set: the 81-card universe, the set
//! predicate, and the board controller that drives a game.
//!
//! ## Design Principles
//!
//! 1. **Immutable cards**: a [`Card`] is a value - four attributes and
//!    nothing else. Where a card sits on the board and whether it is
//!    highlighted is board state, keyed by card identity.
//!
//! 2. **Injected randomness**: every shuffle goes through a seeded
//!    [`GameRng`], so any game is reproducible from a single `u64`.
//!
//! 3. **Presentation-agnostic**: rendering and input live outside this
//!    crate. The UI feeds [`Command`]s into the controller and reads the
//!    board back through [`BoardController::board_snapshot`]; nothing in
//!    here knows about pixels, sprites, or pointers.
//!
//! ## Modules
//!
//! - `cards`: attribute enums, the `Card` value, the set predicate
//! - `deck`: the shuffled 81-card draw pile
//! - `board`: the board controller (dealing, selection, replenishment, hints)
//! - `core`: RNG, command dispatch, error taxonomy

pub mod board;
pub mod cards;
pub mod core;
pub mod deck;

// Re-export commonly used types
pub use crate::cards::{is_set, third_card, Card, Colour, Number, Shading, Shape, UNIVERSE_SIZE};

pub use crate::deck::Deck;

pub use crate::board::{
    Advisory, BoardController, CardSnapshot, CardView, SlotPos, BASE_DEAL, BASE_ROWS,
    GRID_COLUMNS, MAX_BOARD, MAX_ROWS,
};

pub use crate::core::{Command, GameError, GameRng, GameRngState};
