use serde::{Deserialize, Serialize};

use crate::card::Card;
use crate::category::Category;

/// Totally ordered strength of an evaluated hand.
///
/// Compares the category precedence first, then the value ranks of the five
/// selected cards, most significant first. Equal keys are exact ties.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ComparisonKey {
    pub precedence: u8,
    pub ranks: [u8; 5],
}

impl ComparisonKey {
    pub fn new(category: Category, cards: &[Card; 5]) -> Self {
        Self {
            precedence: category.precedence(),
            ranks: cards.map(|c| c.sort_key()),
        }
    }
}
