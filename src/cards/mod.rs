//! Cards: the four attribute dimensions, the immutable card value, and
//! the set predicate.

mod card;
mod predicate;

pub use card::{Card, Colour, Number, Shading, Shape, UNIVERSE_SIZE};
pub use predicate::{is_set, third_card};
