//! One extractor per hand category.
//!
//! Each extractor is pure: it either selects five cards that make its
//! category, ordered most significant first, or returns `None`. Extractors
//! assume they run strongest-first, e.g. [`three_of_a_kind`] does not check
//! for a full house.

use std::cmp::Reverse;

use crate::arrange::HandViews;
use crate::card::{Card, CardValue};

/// Values in straight order, with the Ace counted both high and low.
const STRAIGHT_SEQUENCE: [CardValue; 14] = [
    CardValue::Ace,
    CardValue::King,
    CardValue::Queen,
    CardValue::Jack,
    CardValue::Ten,
    CardValue::Nine,
    CardValue::Eight,
    CardValue::Seven,
    CardValue::Six,
    CardValue::Five,
    CardValue::Four,
    CardValue::Three,
    CardValue::Two,
    CardValue::Ace,
];

/// Royal Flush: a straight flush running from Ten to Ace.
pub fn royal_flush(views: &HandViews) -> Option<[Card; 5]> {
    let cards = straight_flush(views)?;
    (cards[4].value() == CardValue::Ten).then_some(cards)
}

/// Straight Flush: the hand's best straight, when its cards share a suit.
///
/// Only the straight picked by [`straight`] is checked.
pub fn straight_flush(views: &HandViews) -> Option<[Card; 5]> {
    let cards = straight(views)?;
    let suit = cards[0].suit();
    cards.iter().all(|c| c.suit() == suit).then_some(cards)
}

/// Four of a Kind: four cards of one value plus the highest kicker.
pub fn four_of_a_kind(views: &HandViews) -> Option<[Card; 5]> {
    n_of_a_kind(views, 4)
}

/// Full House: the three-card cluster and two cards of the next cluster.
pub fn full_house(views: &HandViews) -> Option<[Card; 5]> {
    let [trips, twos, ..] = views.clusters.as_slice() else {
        return None;
    };
    if trips.len() != 3 || twos.len() < 2 {
        return None;
    }

    let mut selected = trips.clone();
    selected.extend_from_slice(&twos[..2]);
    five(selected)
}

/// Flush: five cards of one suit.
///
/// When several suits qualify, the one holding the highest card wins (ties go
/// to the first suit in code order). A suit with more than five cards
/// contributes its first five, which are its highest since suit groups are
/// value-sorted.
pub fn flush(views: &HandViews) -> Option<[Card; 5]> {
    let group = views
        .by_suit
        .values()
        .filter(|group| group.len() >= 5)
        .min_by_key(|group| Reverse(group[0].value()))?;
    five(group[..5].to_vec())
}

/// Straight: five consecutive values, scanned from Ace-high down to the wheel.
///
/// The first card of each value is used, whatever its suit.
pub fn straight(views: &HandViews) -> Option<[Card; 5]> {
    STRAIGHT_SEQUENCE.windows(5).find_map(|window| {
        let picked = window
            .iter()
            .map(|value| views.of_value(*value).first().copied())
            .collect::<Option<Vec<Card>>>()?;
        five(picked)
    })
}

/// Three of a Kind: three cards of one value plus two kickers.
pub fn three_of_a_kind(views: &HandViews) -> Option<[Card; 5]> {
    n_of_a_kind(views, 3)
}

/// Two Pair: the two largest pairs plus one kicker.
pub fn two_pair(views: &HandViews) -> Option<[Card; 5]> {
    let [high, low, ..] = views.clusters.as_slice() else {
        return None;
    };
    if high.len() != 2 || low.len() != 2 {
        return None;
    }

    let mut selected = high.clone();
    selected.extend_from_slice(low);
    complete_hand(views, selected)
}

/// Pair: two cards of one value plus three kickers.
pub fn pair(views: &HandViews) -> Option<[Card; 5]> {
    n_of_a_kind(views, 2)
}

/// High Card: the five highest cards.
///
/// # Panics
///
/// If the hand has fewer than five cards. [`Hand`](crate::hand::Hand) rules
/// that out.
pub fn high_card(views: &HandViews) -> [Card; 5] {
    std::array::from_fn(|i| views.sorted[i])
}

/// Shared by four of a kind, three of a kind and pair: the largest cluster
/// must have exactly `n` cards.
fn n_of_a_kind(views: &HandViews, n: usize) -> Option<[Card; 5]> {
    let cluster = views.clusters.first().filter(|c| c.len() == n)?;
    complete_hand(views, cluster.clone())
}

/// Fills `selected` up to five cards with the highest cards not yet in it.
fn complete_hand(views: &HandViews, mut selected: Vec<Card>) -> Option<[Card; 5]> {
    for card in &views.sorted {
        if selected.len() == 5 {
            break;
        }
        if !selected.contains(card) {
            selected.push(*card);
        }
    }
    five(selected)
}

fn five(cards: Vec<Card>) -> Option<[Card; 5]> {
    cards.try_into().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hand::cards;

    fn views(line: &str) -> HandViews {
        HandViews::new(&cards(line))
    }

    fn codes(selected: Option<[Card; 5]>) -> Option<String> {
        selected.map(|cards| {
            cards
                .iter()
                .map(Card::to_string)
                .collect::<Vec<_>>()
                .join(" ")
        })
    }

    #[test]
    fn test_royal_flush() {
        let v = views("AS KS QS JS TS 2C 3D");
        assert_eq!(codes(royal_flush(&v)).as_deref(), Some("AS KS QS JS TS"));
        assert!(royal_flush(&views("KH QH JH TH 9H 2C 3D")).is_none());
    }

    #[test]
    fn test_straight_flush() {
        let v = views("9H 8H 7H 6H 5H 2C 3D");
        assert_eq!(codes(straight_flush(&v)).as_deref(), Some("9H 8H 7H 6H 5H"));
        assert!(royal_flush(&v).is_none());
    }

    #[test]
    fn test_wheel_straight_flush() {
        let v = views("AD 2D 3D 4D 5D KC QS");
        assert_eq!(codes(straight_flush(&v)).as_deref(), Some("5D 4D 3D 2D AD"));
    }

    #[test]
    fn test_straight_flush_only_checks_the_first_pick() {
        // The 9 of clubs comes before the 9 of hearts, so the picked straight
        // is not suited even though a suited one exists.
        let v = views("9C 9H 8H 7H 6H 5H");
        assert_eq!(codes(straight(&v)).as_deref(), Some("9C 8H 7H 6H 5H"));
        assert!(straight_flush(&v).is_none());
    }

    #[test]
    fn test_four_of_a_kind_takes_highest_kicker() {
        let v = views("KS 2H KH KD 7C KC 3D");
        assert_eq!(codes(four_of_a_kind(&v)).as_deref(), Some("KS KH KD KC 7C"));
        assert!(four_of_a_kind(&views("KS KH KD 7C 3D")).is_none());
    }

    #[test]
    fn test_full_house() {
        let v = views("QS QH QD JC JS 2H 3C");
        assert_eq!(codes(full_house(&v)).as_deref(), Some("QS QH QD JC JS"));
    }

    #[test]
    fn test_full_house_with_two_trips_uses_lower_trips_as_pair() {
        let v = views("5C 5D 5H 8S 8C 8D 2H");
        assert_eq!(codes(full_house(&v)).as_deref(), Some("8S 8C 8D 5C 5D"));
    }

    #[test]
    fn test_flush() {
        let v = views("AC TC 7C 4C 2C KH 3D");
        assert_eq!(codes(flush(&v)).as_deref(), Some("AC TC 7C 4C 2C"));
        assert!(flush(&views("AC TC 7C 4C 2D KH 3D")).is_none());
    }

    #[test]
    fn test_flush_with_six_suited_takes_top_five() {
        let v = views("2H 9H KH 4H 7H JH 3C");
        assert_eq!(codes(flush(&v)).as_deref(), Some("KH JH 9H 7H 4H"));
    }

    #[test]
    fn test_flush_picks_suit_with_highest_card() {
        let v = views("2C 3C 5C 7C 9C 3S 4S 6S 8S AS");
        assert_eq!(codes(flush(&v)).as_deref(), Some("AS 8S 6S 4S 3S"));
    }

    #[test]
    fn test_straight() {
        let v = views("9S 8H 7C 6D 5S 2H KC");
        assert_eq!(codes(straight(&v)).as_deref(), Some("9S 8H 7C 6D 5S"));
    }

    #[test]
    fn test_straight_prefers_highest_window() {
        let v = views("4D 5S 6H 7C 8D 9S TH");
        assert_eq!(codes(straight(&v)).as_deref(), Some("TH 9S 8D 7C 6H"));
    }

    #[test]
    fn test_wheel_straight() {
        let v = views("AS 2H 3C 4D 5S KH QC");
        assert_eq!(codes(straight(&v)).as_deref(), Some("5S 4D 3C 2H AS"));
    }

    #[test]
    fn test_no_wraparound_straight() {
        assert!(straight(&views("QS KH AC 2D 3S 8H 9C")).is_none());
    }

    #[test]
    fn test_three_of_a_kind() {
        let v = views("JS JH JD AC KS 2H 3C");
        assert_eq!(codes(three_of_a_kind(&v)).as_deref(), Some("JS JH JD AC KS"));
    }

    #[test]
    fn test_two_pair() {
        let v = views("AS AH KD KC 2S 3H 4C");
        assert_eq!(codes(two_pair(&v)).as_deref(), Some("AS AH KD KC 4C"));
    }

    #[test]
    fn test_two_pair_kicker_can_come_from_third_pair() {
        let v = views("5S 5H 9D 9C QS QH 3C");
        assert_eq!(codes(two_pair(&v)).as_deref(), Some("QS QH 9D 9C 5S"));
    }

    #[test]
    fn test_pair() {
        let v = views("QS QH AD KC JS 2H 3C");
        assert_eq!(codes(pair(&v)).as_deref(), Some("QS QH AD KC JS"));
        assert!(pair(&views("AS KH 9D 7C 4S 2H 3C")).is_none());
    }

    #[test]
    fn test_high_card() {
        let v = views("2C 7D 9H TC QS 4D KH");
        assert_eq!(codes(Some(high_card(&v))).as_deref(), Some("KH QS TC 9H 7D"));
    }
}
