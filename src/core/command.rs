//! Player commands.
//!
//! The presentation layer owns devices and hit-testing; once it has
//! resolved a pointer event to a meaning, it hands the engine one of
//! these variants through `BoardController::handle_command`. A single
//! data-carrying enum keeps the core decoupled from any particular
//! input framework.

use serde::{Deserialize, Serialize};

/// One discrete player action.
///
/// ## Example
///
/// ```
/// use set_core::{BoardController, Command, GameRng};
///
/// let mut game = BoardController::new(GameRng::new(42));
///
/// // Toggle the card at board index 0, then ask for a hint.
/// game.handle_command(Command::SelectCard(0));
/// game.handle_command(Command::Hint);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Command {
    /// Toggle-select the card at this board index. Stale indices
    /// (card already gone, board shrunk) are no-ops.
    SelectCard(usize),
    /// Restart: fresh shuffled deck, fresh board.
    Restart,
    /// Report whether any set exists on the board, without revealing it.
    Hint,
    /// Deal three more cards - or point at an existing set instead,
    /// when one is already on the board.
    AddThree,
    /// Report whether a set exists and pre-select one of its members.
    Reveal,
}
