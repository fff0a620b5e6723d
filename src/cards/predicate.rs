//! The set predicate and its companion: completing a pair to a set.

use super::card::{Card, Feature};

/// Decide whether three cards form a valid set.
///
/// For each of the four attributes independently, the three values must
/// be either all identical or pairwise distinct; the predicate is the
/// AND across attributes. Pure and order-independent: permuting the
/// arguments never changes the result.
///
/// Total over any three cards. Callers must guarantee distinct inputs -
/// a well-formed board never holds duplicates - and the result for
/// duplicated inputs carries no domain meaning (three copies of one card
/// trivially satisfy every attribute rule).
#[must_use]
pub fn is_set(c1: Card, c2: Card, c3: Card) -> bool {
    Feature::matches(c1.colour, c2.colour, c3.colour)
        && Feature::matches(c1.shading, c2.shading, c3.shading)
        && Feature::matches(c1.shape, c2.shape, c3.shape)
        && Feature::matches(c1.number, c2.number, c3.number)
}

/// The unique card completing `c1` and `c2` to a valid set.
///
/// Per attribute: the shared value when the two cards agree, the
/// remaining third value when they differ. For any two distinct cards
/// exactly one such card exists in the universe. Degenerate case:
/// `third_card(c, c) == c`.
#[must_use]
pub fn third_card(c1: Card, c2: Card) -> Card {
    Card {
        colour: Feature::completing(c1.colour, c2.colour),
        shading: Feature::completing(c1.shading, c2.shading),
        shape: Feature::completing(c1.shape, c2.shape),
        number: Feature::completing(c1.number, c2.number),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::card::{Colour, Number, Shading, Shape};

    fn card(colour: Colour, shading: Shading, shape: Shape, number: Number) -> Card {
        Card::new(colour, shading, shape, number)
    }

    #[test]
    fn test_all_same_except_number_is_set() {
        let c1 = card(Colour::Red, Shading::Open, Shape::Diamond, Number::One);
        let c2 = card(Colour::Red, Shading::Open, Shape::Diamond, Number::Two);
        let c3 = card(Colour::Red, Shading::Open, Shape::Diamond, Number::Three);
        assert!(is_set(c1, c2, c3));
    }

    #[test]
    fn test_all_attributes_distinct_is_set() {
        let c1 = card(Colour::Red, Shading::Open, Shape::Diamond, Number::One);
        let c2 = card(Colour::Green, Shading::Striped, Shape::Oval, Number::Two);
        let c3 = card(Colour::Purple, Shading::Solid, Shape::Squiggle, Number::Three);
        assert!(is_set(c1, c2, c3));
    }

    #[test]
    fn test_two_one_split_is_not_a_set() {
        // Shape splits 2-1 (Diamond, Diamond, Oval); everything else matches.
        let c1 = card(Colour::Red, Shading::Open, Shape::Diamond, Number::One);
        let c2 = card(Colour::Red, Shading::Open, Shape::Diamond, Number::Two);
        let c3 = card(Colour::Red, Shading::Open, Shape::Oval, Number::Three);
        assert!(!is_set(c1, c2, c3));
    }

    #[test]
    fn test_order_independent() {
        let c1 = card(Colour::Red, Shading::Striped, Shape::Oval, Number::One);
        let c2 = card(Colour::Green, Shading::Striped, Shape::Oval, Number::Two);
        let c3 = card(Colour::Purple, Shading::Striped, Shape::Oval, Number::Three);
        assert!(is_set(c1, c2, c3));
        assert!(is_set(c3, c1, c2));
        assert!(is_set(c2, c3, c1));
        assert!(is_set(c3, c2, c1));
    }

    #[test]
    fn test_third_card_completes_a_set() {
        let c1 = card(Colour::Red, Shading::Open, Shape::Diamond, Number::One);
        let c2 = card(Colour::Green, Shading::Open, Shape::Squiggle, Number::One);
        let c3 = third_card(c1, c2);
        assert_eq!(
            c3,
            card(Colour::Purple, Shading::Open, Shape::Oval, Number::One)
        );
        assert!(is_set(c1, c2, c3));
    }

    #[test]
    fn test_third_card_of_duplicates_is_degenerate() {
        let c = card(Colour::Green, Shading::Solid, Shape::Oval, Number::Two);
        assert_eq!(third_card(c, c), c);
        assert!(is_set(c, c, c));
    }
}
