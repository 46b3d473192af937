//! Views of a card collection used by the category extractors.
//!
//! Every helper keeps the relative order of its input, so arranging an
//! already value-sorted hand yields value-sorted groups.

use std::cmp::Reverse;
use std::collections::BTreeMap;

use crate::card::{Card, CardSuit, CardValue};

/// Returns the cards sorted by value, highest first.
///
/// The sort is stable: cards of equal value keep their input order.
pub fn sort_by_value(cards: &[Card]) -> Vec<Card> {
    let mut sorted = cards.to_vec();
    sorted.sort_by_key(|c| Reverse(c.value()));
    sorted
}

/// Maps each suit present in `cards` to its cards, in input order.
pub fn group_by_suit(cards: &[Card]) -> BTreeMap<CardSuit, Vec<Card>> {
    let mut groups: BTreeMap<CardSuit, Vec<Card>> = BTreeMap::new();
    for card in cards {
        groups.entry(card.suit()).or_default().push(*card);
    }
    groups
}

/// Maps each value present in `cards` to its cards, in input order.
pub fn group_by_value(cards: &[Card]) -> BTreeMap<CardValue, Vec<Card>> {
    let mut groups: BTreeMap<CardValue, Vec<Card>> = BTreeMap::new();
    for card in cards {
        groups.entry(card.value()).or_default().push(*card);
    }
    groups
}

/// Clusters same-valued cards, largest cluster first; clusters of equal size
/// are ordered from highest to lowest value.
pub fn cluster_by_same_value(by_value: &BTreeMap<CardValue, Vec<Card>>) -> Vec<Vec<Card>> {
    let mut clusters: Vec<(CardValue, &Vec<Card>)> = by_value
        .iter()
        .filter(|(_, cards)| !cards.is_empty())
        .map(|(value, cards)| (*value, cards))
        .collect();
    clusters.sort_by(|a, b| b.1.len().cmp(&a.1.len()).then(b.0.cmp(&a.0)));
    clusters.into_iter().map(|(_, cards)| cards.clone()).collect()
}

/// Every arrangement of one hand, built once and shared by all extractors.
#[derive(Debug, Clone)]
pub struct HandViews {
    /// The whole hand, highest value first.
    pub sorted: Vec<Card>,
    /// Suit groups built from `sorted`, so each group is value-descending.
    pub by_suit: BTreeMap<CardSuit, Vec<Card>>,
    /// Value groups in hand order.
    pub by_value: BTreeMap<CardValue, Vec<Card>>,
    pub clusters: Vec<Vec<Card>>,
}

impl HandViews {
    pub fn new(cards: &[Card]) -> Self {
        let sorted = sort_by_value(cards);
        let by_suit = group_by_suit(&sorted);
        let by_value = group_by_value(cards);
        let clusters = cluster_by_same_value(&by_value);
        Self {
            sorted,
            by_suit,
            by_value,
            clusters,
        }
    }

    /// Cards of the given value, in hand order (empty if absent).
    pub fn of_value(&self, value: CardValue) -> &[Card] {
        self.by_value.get(&value).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Size of the `n`-th largest cluster, 0 if there are fewer clusters.
    pub fn cluster_len(&self, n: usize) -> usize {
        self.clusters.get(n).map_or(0, Vec::len)
    }
}
