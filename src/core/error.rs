//! Error taxonomy.
//!
//! Deliberately small: everything that can go wrong in this core is
//! locally recoverable. Out-of-range selections are no-ops (stale input
//! coordinates arise benignly), and validating a selection of the wrong
//! size is a caller bug guarded by `debug_assert`, not an error value.

use thiserror::Error;

/// Errors surfaced by the game core.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum GameError {
    /// Drawing from a deck with zero remaining cards. Callers on the
    /// replenishment paths check the remaining count first and branch
    /// to an advisory instead of letting this propagate.
    #[error("no cards remaining in the deck")]
    EmptyDeck,
}
