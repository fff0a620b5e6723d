//! The draw pile: all 81 cards, shuffled once at construction.

use log::trace;

use crate::cards::{Card, UNIVERSE_SIZE};
use crate::core::{GameError, GameRng};

/// An ordered pile of the 81 unique cards, consumed from the back.
///
/// Invariant across a game: deck ∪ board ∪ cards removed in found sets
/// is exactly the universe, with no card in two places.
#[derive(Clone, Debug)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Build a full deck - one card per attribute combination - and
    /// give it a uniform shuffle.
    #[must_use]
    pub fn new(rng: &mut GameRng) -> Self {
        let mut cards: Vec<Card> = Card::universe().collect();
        debug_assert_eq!(cards.len(), UNIVERSE_SIZE);
        rng.shuffle(&mut cards);
        Self { cards }
    }

    /// Remove and return the top card.
    ///
    /// # Errors
    ///
    /// [`GameError::EmptyDeck`] when no cards remain.
    pub fn draw(&mut self) -> Result<Card, GameError> {
        let card = self.cards.pop().ok_or(GameError::EmptyDeck)?;
        trace!("drew {} ({} remaining)", card, self.cards.len());
        Ok(card)
    }

    /// Cards left to draw.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.cards.len()
    }

    /// True when every card has been drawn.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}
