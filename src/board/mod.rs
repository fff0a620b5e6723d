//! The board controller: dealing, selection, validation, replenishment,
//! and the hint machinery.
//!
//! One controller owns a whole game: the draw pile, the revealed cards,
//! the per-card presentation state, and the current selection. All
//! transitions run synchronously inside one command - nothing suspends,
//! nothing races. The presentation layer reads the board back through
//! [`BoardController::board_snapshot`] and never mutates it.

mod layout;

pub use layout::{CardView, SlotPos, BASE_DEAL, BASE_ROWS, GRID_COLUMNS, MAX_BOARD, MAX_ROWS};

use std::fmt;

use log::debug;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::cards::{is_set, Card};
use crate::core::{Command, GameRng};
use crate::deck::Deck;

/// Advisory text shown to the player. Never a hard failure: every
/// condition here leaves the game running.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Advisory {
    /// A set exists somewhere on the board.
    SetExists,
    /// No combination of revealed cards forms a set.
    NoSetExists,
    /// Three cards were dealt into the overflow region.
    AddedThree,
    /// The draw pile is exhausted.
    NoCardsRemaining,
    /// The board is at capacity.
    TooManyCards,
}

impl Advisory {
    /// The user-facing text for this advisory.
    #[must_use]
    pub fn text(self) -> &'static str {
        match self {
            Advisory::SetExists => "There is a set",
            Advisory::NoSetExists => "No sets exist",
            Advisory::AddedThree => "Added 3 cards",
            Advisory::NoCardsRemaining => "No cards remaining",
            Advisory::TooManyCards => "Too many cards!",
        }
    }
}

impl fmt::Display for Advisory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.text())
    }
}

/// One revealed card as the presentation layer sees it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardSnapshot {
    pub card: Card,
    pub slot: SlotPos,
    pub highlighted: bool,
}

/// Owns a game of Set.
///
/// Constructed with an injected [`GameRng`] so whole games replay from a
/// seed. A fresh controller comes pre-dealt: twelve cards on the board,
/// sixty-nine in the deck.
#[derive(Clone, Debug)]
pub struct BoardController {
    deck: Deck,
    /// Revealed cards in reveal order. Donor search and index-based
    /// selection both follow this order.
    board: Vec<Card>,
    /// Presentation state per revealed card. Cards stay immutable;
    /// slots and highlights live here.
    views: FxHashMap<Card, CardView>,
    selection: SmallVec<[Card; 3]>,
    hint: Option<Advisory>,
    sets_found: u32,
    rng: GameRng,
}

impl BoardController {
    /// Create a controller and deal the opening board.
    #[must_use]
    pub fn new(mut rng: GameRng) -> Self {
        let deck = Deck::new(&mut rng);
        let mut controller = Self {
            deck,
            board: Vec::with_capacity(MAX_BOARD),
            views: FxHashMap::default(),
            selection: SmallVec::new(),
            hint: None,
            sets_found: 0,
            rng,
        };
        controller.deal_base_grid();
        controller
    }

    /// Reset to a fresh game: new shuffled deck, cleared board,
    /// selection, counters and advisory, then twelve cards dealt into
    /// the base grid.
    pub fn deal(&mut self) {
        self.deck = Deck::new(&mut self.rng);
        self.board.clear();
        self.views.clear();
        self.selection.clear();
        self.hint = None;
        self.sets_found = 0;
        self.deal_base_grid();
    }

    /// Draw the opening twelve cards, filling the base grid column by
    /// column. A fresh deck cannot run dry here.
    fn deal_base_grid(&mut self) {
        debug_assert!(self.board.is_empty());
        for col in 0..GRID_COLUMNS {
            for row in 0..BASE_ROWS {
                if let Ok(card) = self.deck.draw() {
                    self.place(card, SlotPos::new(col as u8, row as u8));
                }
            }
        }
        debug!(
            "dealt {} cards, {} remaining in deck",
            self.board.len(),
            self.deck.remaining()
        );
    }

    fn place(&mut self, card: Card, slot: SlotPos) {
        self.board.push(card);
        self.views.insert(card, CardView::at(slot));
    }

    /// Toggle-select a card.
    ///
    /// Selecting a card not on the board is a no-op (stale input).
    /// Selecting a card already in the selection removes it and drops
    /// its highlight. The third selection triggers validation
    /// synchronously before this returns.
    pub fn select_card(&mut self, card: Card) {
        let Some(view) = self.views.get_mut(&card) else {
            return;
        };

        if let Some(index) = self.selection.iter().position(|c| *c == card) {
            self.selection.remove(index);
            view.highlighted = false;
        } else {
            view.highlighted = true;
            self.selection.push(card);
            if self.selection.len() == 3 {
                self.validate_selection();
            }
        }
    }

    /// Validate the three selected cards and resolve the outcome.
    ///
    /// On a valid set the three cards leave the board; each vacated slot
    /// is refilled per `remove_and_refill`. On failure the board is
    /// untouched. Either way the selection is cleared (dropping every
    /// highlight) and the advisory resets.
    fn validate_selection(&mut self) {
        debug_assert_eq!(self.selection.len(), 3, "selection must hold three cards");
        let (c1, c2, c3) = (self.selection[0], self.selection[1], self.selection[2]);

        if is_set(c1, c2, c3) {
            // Whether the board is over-filled is decided once for the
            // whole round; deck emptiness is re-checked at each draw, so
            // one resolution can mix compaction and draw-in.
            let overfilled = self.board.len() > BASE_DEAL;
            for card in [c1, c2, c3] {
                self.remove_and_refill(card, overfilled);
            }
            self.sets_found += 1;
            debug!(
                "set found: {c1} | {c2} | {c3} (total {}, board {}, deck {})",
                self.sets_found,
                self.board.len(),
                self.deck.remaining()
            );
        }

        self.clear_selection();
        self.hint = None;
    }

    /// Remove one card of a found set and resolve its vacated slot.
    ///
    /// Over-filled board, base-grid slot: the first card in board order
    /// sitting in the overflow region (and not part of the selection)
    /// moves down into the slot, so overflow rows drain before the base
    /// grid develops gaps. Over-filled board, overflow slot: the slot
    /// simply empties. Not over-filled: a replacement is drawn when the
    /// deck has one, otherwise the board shrinks.
    fn remove_and_refill(&mut self, card: Card, overfilled: bool) {
        let Some(view) = self.views.remove(&card) else {
            return;
        };
        let slot = view.slot;

        if overfilled {
            if !slot.is_overflow() {
                let donor = self.board.iter().copied().find(|c| {
                    !self.selection.contains(c)
                        && self.views.get(c).is_some_and(|v| v.slot.is_overflow())
                });
                if let Some(donor) = donor {
                    if let Some(donor_view) = self.views.get_mut(&donor) {
                        donor_view.slot = slot;
                    }
                }
            }
        } else if let Ok(replacement) = self.deck.draw() {
            self.place(replacement, slot);
        }

        self.board.retain(|c| *c != card);
    }

    fn clear_selection(&mut self) {
        for card in self.selection.drain(..) {
            if let Some(view) = self.views.get_mut(&card) {
                view.highlighted = false;
            }
        }
    }

    /// Deal three more cards into the overflow region.
    ///
    /// Reports [`Advisory::NoCardsRemaining`] on an empty deck and
    /// [`Advisory::TooManyCards`] at board capacity, both without
    /// mutation. Callers wanting the "hint instead of more cards" policy
    /// get it from [`BoardController::handle_command`]; this operation
    /// itself never checks for existing sets.
    pub fn add_three(&mut self) -> Advisory {
        let advisory = if self.deck.is_empty() {
            Advisory::NoCardsRemaining
        } else if self.board.len() >= MAX_BOARD {
            Advisory::TooManyCards
        } else {
            // Deck size stays a multiple of three, so a non-empty deck
            // holds at least three cards.
            for slot in self.free_slots(3) {
                if let Ok(card) = self.deck.draw() {
                    self.place(card, slot);
                }
            }
            debug!(
                "added 3 cards, board {}, deck {}",
                self.board.len(),
                self.deck.remaining()
            );
            Advisory::AddedThree
        };
        self.hint = Some(advisory);
        advisory
    }

    /// The first `count` unoccupied slots in row-major order. While the
    /// deck has cards the base grid is always full, so these are the
    /// topmost free overflow slots - in the common case exactly the next
    /// row down.
    fn free_slots(&self, count: usize) -> Vec<SlotPos> {
        let mut free = Vec::with_capacity(count);
        for row in 0..MAX_ROWS {
            for col in 0..GRID_COLUMNS {
                let slot = SlotPos::new(col as u8, row as u8);
                if !self.views.values().any(|v| v.slot == slot) {
                    free.push(slot);
                    if free.len() == count {
                        return free;
                    }
                }
            }
        }
        free
    }

    /// Exhaustively search the board for a set.
    ///
    /// Scans all C(n,3) index-ordered combinations and returns the first
    /// that satisfies [`is_set`], or `None`. At most C(21,3) = 1330
    /// predicate calls, so brute force is fine.
    #[must_use]
    pub fn find_existing_set(&self) -> Option<[Card; 3]> {
        let n = self.board.len();
        for first in 0..n.saturating_sub(2) {
            for second in (first + 1)..(n - 1) {
                for third in (second + 1)..n {
                    let triple = [self.board[first], self.board[second], self.board[third]];
                    if is_set(triple[0], triple[1], triple[2]) {
                        return Some(triple);
                    }
                }
            }
        }
        None
    }

    /// Report whether a set exists, without revealing which cards.
    pub fn hint(&mut self) {
        let advisory = if self.find_existing_set().is_some() {
            Advisory::SetExists
        } else {
            Advisory::NoSetExists
        };
        debug!("hint: {advisory}");
        self.hint = Some(advisory);
    }

    /// Report whether a set exists and, if one does, replace the current
    /// selection with the first member of the found triple, highlighted
    /// as a nudge.
    pub fn reveal(&mut self) {
        match self.find_existing_set() {
            Some(found) => {
                self.clear_selection();
                self.select_card(found[0]);
                self.hint = Some(Advisory::SetExists);
            }
            None => self.hint = Some(Advisory::NoSetExists),
        }
    }

    /// Single entry point for player input.
    ///
    /// `AddThree` carries the original table rule: when a set is already
    /// on the board the player should find it, so the engine answers
    /// with the hint advisory instead of dealing more cards.
    pub fn handle_command(&mut self, command: Command) {
        match command {
            Command::SelectCard(index) => {
                if let Some(&card) = self.board.get(index) {
                    self.select_card(card);
                }
            }
            Command::Restart => self.deal(),
            Command::Hint => self.hint(),
            Command::AddThree => {
                if self.find_existing_set().is_some() {
                    self.hint = Some(Advisory::SetExists);
                } else {
                    self.add_three();
                }
            }
            Command::Reveal => self.reveal(),
        }
    }

    /// Current advisory text; empty when there is nothing to say.
    #[must_use]
    pub fn hint_message(&self) -> &'static str {
        self.hint.map_or("", Advisory::text)
    }

    /// Cards left in the draw pile.
    #[must_use]
    pub fn remaining_in_deck(&self) -> usize {
        self.deck.remaining()
    }

    /// Sets found since the last deal.
    #[must_use]
    pub fn sets_found(&self) -> u32 {
        self.sets_found
    }

    /// The currently selected cards, in selection order.
    #[must_use]
    pub fn selection(&self) -> &[Card] {
        &self.selection
    }

    /// Read-only snapshot of the revealed cards, in board order, with
    /// slot and highlight state. This is the whole rendering contract.
    #[must_use]
    pub fn board_snapshot(&self) -> Vec<CardSnapshot> {
        self.board
            .iter()
            .filter_map(|&card| {
                self.views.get(&card).map(|view| CardSnapshot {
                    card,
                    slot: view.slot,
                    highlighted: view.highlighted,
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_controller_is_dealt() {
        let game = BoardController::new(GameRng::new(42));
        assert_eq!(game.board_snapshot().len(), BASE_DEAL);
        assert_eq!(game.remaining_in_deck(), 69);
        assert!(game.selection().is_empty());
        assert_eq!(game.sets_found(), 0);
        assert_eq!(game.hint_message(), "");
    }

    #[test]
    fn test_opening_deal_fills_the_base_grid() {
        let game = BoardController::new(GameRng::new(42));
        let snapshot = game.board_snapshot();

        let mut slots: Vec<SlotPos> = snapshot.iter().map(|entry| entry.slot).collect();
        slots.sort_by_key(|slot| (slot.col, slot.row));
        slots.dedup();
        assert_eq!(slots.len(), BASE_DEAL);
        assert!(slots.iter().all(|slot| !slot.is_overflow()));
    }

    #[test]
    fn test_selecting_twice_toggles_off() {
        let mut game = BoardController::new(GameRng::new(42));
        let card = game.board_snapshot()[0].card;

        game.select_card(card);
        assert_eq!(game.selection(), &[card]);
        assert!(game.board_snapshot()[0].highlighted);

        game.select_card(card);
        assert!(game.selection().is_empty());
        assert!(!game.board_snapshot()[0].highlighted);
    }

    #[test]
    fn test_selecting_card_not_on_board_is_a_noop() {
        let mut game = BoardController::new(GameRng::new(42));
        let before = game.board_snapshot();

        let stray = Card::universe()
            .find(|card| !before.iter().any(|entry| entry.card == *card))
            .unwrap();
        game.select_card(stray);

        assert!(game.selection().is_empty());
        assert_eq!(game.board_snapshot(), before);
    }

    #[test]
    fn test_add_three_fills_the_next_overflow_row() {
        let mut game = BoardController::new(GameRng::new(42));
        assert_eq!(game.add_three(), Advisory::AddedThree);

        let snapshot = game.board_snapshot();
        assert_eq!(snapshot.len(), 15);
        assert_eq!(game.remaining_in_deck(), 66);
        assert_eq!(game.hint_message(), "Added 3 cards");

        let overflow: Vec<SlotPos> = snapshot
            .iter()
            .filter(|entry| entry.slot.is_overflow())
            .map(|entry| entry.slot)
            .collect();
        assert_eq!(
            overflow,
            vec![SlotPos::new(0, 4), SlotPos::new(1, 4), SlotPos::new(2, 4)]
        );
    }

    #[test]
    fn test_add_three_at_capacity_is_rejected() {
        let mut game = BoardController::new(GameRng::new(42));
        assert_eq!(game.add_three(), Advisory::AddedThree);
        assert_eq!(game.add_three(), Advisory::AddedThree);
        assert_eq!(game.add_three(), Advisory::AddedThree);
        assert_eq!(game.board_snapshot().len(), MAX_BOARD);

        let deck_before = game.remaining_in_deck();
        assert_eq!(game.add_three(), Advisory::TooManyCards);
        assert_eq!(game.board_snapshot().len(), MAX_BOARD);
        assert_eq!(game.remaining_in_deck(), deck_before);
        assert_eq!(game.hint_message(), "Too many cards!");
    }

    #[test]
    fn test_restart_resets_everything() {
        let mut game = BoardController::new(GameRng::new(42));
        game.add_three();
        game.select_card(game.board_snapshot()[0].card);

        game.handle_command(Command::Restart);
        assert_eq!(game.board_snapshot().len(), BASE_DEAL);
        assert_eq!(game.remaining_in_deck(), 69);
        assert!(game.selection().is_empty());
        assert_eq!(game.sets_found(), 0);
        assert_eq!(game.hint_message(), "");
    }

    #[test]
    fn test_stale_select_index_is_a_noop() {
        let mut game = BoardController::new(GameRng::new(42));
        let before = game.board_snapshot();

        game.handle_command(Command::SelectCard(before.len()));
        assert!(game.selection().is_empty());
        assert_eq!(game.board_snapshot(), before);
    }
}
