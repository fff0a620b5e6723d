//! The immutable card value and its four attribute dimensions.
//!
//! A Set card is a tuple of four independent three-valued attributes.
//! Equality and hashing cover all four attributes and nothing else -
//! where a card sits on the board or whether it is highlighted is board
//! state (see `board::CardView`), never part of the card itself.
//!
//! The 81-card universe maps onto `0..81` via base-3 digits (one digit
//! per attribute), which gives a cheap enumeration and lets tests draw
//! arbitrary cards from a plain index.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of distinct cards: 3^4 combinations of four attributes.
pub const UNIVERSE_SIZE: usize = 81;

/// A three-valued card attribute.
///
/// Each implementor lists its values in a fixed order so that attributes
/// can be treated as digits `0..3`. `completing` is the mod-3 closure:
/// given two values it returns the unique third value that makes the
/// triple all-same or all-different.
pub(crate) trait Feature: Copy + Eq + Sized {
    const VALUES: [Self; 3];

    fn index(self) -> usize;

    fn from_index(index: usize) -> Self {
        Self::VALUES[index % 3]
    }

    /// The single-feature set rule: all the same or pairwise distinct.
    fn matches(a: Self, b: Self, c: Self) -> bool {
        (a == b && b == c) || (a != b && b != c && a != c)
    }

    /// The value completing `a` and `b` to a matching triple.
    ///
    /// With digit values `a + b + c ≡ 0 (mod 3)` characterizes a match,
    /// so the completion is `(6 - a - b) mod 3`: the shared value when
    /// `a == b`, the remaining third value otherwise.
    fn completing(a: Self, b: Self) -> Self {
        Self::VALUES[(6 - a.index() - b.index()) % 3]
    }
}

macro_rules! feature_enum {
    ($(#[$meta:meta])* $name:ident { $a:ident, $b:ident, $c:ident }) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $a,
            $b,
            $c,
        }

        impl Feature for $name {
            const VALUES: [Self; 3] = [$name::$a, $name::$b, $name::$c];

            fn index(self) -> usize {
                self as usize
            }
        }
    };
}

feature_enum! {
    /// Card colour.
    Colour { Red, Green, Purple }
}

feature_enum! {
    /// Symbol shading.
    Shading { Open, Striped, Solid }
}

feature_enum! {
    /// Symbol shape.
    Shape { Diamond, Oval, Squiggle }
}

feature_enum! {
    /// How many symbols the card shows.
    Number { One, Two, Three }
}

/// An immutable Set card: one value per attribute dimension.
///
/// Two cards are equal iff all four attributes match; a well-formed deck
/// holds every combination exactly once.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    pub colour: Colour,
    pub shading: Shading,
    pub shape: Shape,
    pub number: Number,
}

impl Card {
    /// Create a card from its four attributes.
    #[must_use]
    pub fn new(colour: Colour, shading: Shading, shape: Shape, number: Number) -> Self {
        Self {
            colour,
            shading,
            shape,
            number,
        }
    }

    /// The card at position `index` in the fixed Colour × Shading ×
    /// Shape × Number enumeration of the universe.
    ///
    /// Indices are taken modulo [`UNIVERSE_SIZE`].
    #[must_use]
    pub fn from_index(index: usize) -> Self {
        Self {
            colour: Colour::from_index(index / 27),
            shading: Shading::from_index(index / 9),
            shape: Shape::from_index(index / 3),
            number: Number::from_index(index),
        }
    }

    /// Inverse of [`Card::from_index`]: this card's position in the
    /// fixed enumeration, in `0..81`.
    #[must_use]
    pub fn index(self) -> usize {
        ((self.colour.index() * 3 + self.shading.index()) * 3 + self.shape.index()) * 3
            + self.number.index()
    }

    /// All 81 cards in enumeration order.
    pub fn universe() -> impl Iterator<Item = Card> {
        (0..UNIVERSE_SIZE).map(Card::from_index)
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:?} {:?} {:?} {:?}",
            self.number, self.shading, self.colour, self.shape
        )
    }
}
