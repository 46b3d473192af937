//! Hand evaluation: finds the strongest category a hand makes.

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::arrange::HandViews;
use crate::card::Card;
use crate::category::Category;
use crate::error::EvalError;
use crate::extract;
use crate::hand::Hand;
use crate::key::ComparisonKey;

/// The category a hand makes and the five cards that make it, ordered most
/// significant first (defining cards, then kickers).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EvaluatedHand {
    pub category: Category,
    pub cards: [Card; 5],
}

impl EvaluatedHand {
    pub fn key(&self) -> ComparisonKey {
        ComparisonKey::new(self.category, &self.cards)
    }
}

/// Runs the extractors strongest first and keeps the first match.
pub fn evaluate(hand: &Hand) -> EvaluatedHand {
    let views = HandViews::new(hand.cards());
    let evaluated = Category::PRIORITY
        .into_iter()
        .find_map(|category| {
            category
                .extract(&views)
                .map(|cards| EvaluatedHand { category, cards })
        })
        // HighCard always extracts
        .unwrap_or_else(|| EvaluatedHand {
            category: Category::HighCard,
            cards: extract::high_card(&views),
        });

    trace!(hand = %hand, category = %evaluated.category, "evaluated hand");
    evaluated
}

/// Validates `cards` as a hand, then evaluates it.
pub fn evaluate_cards(cards: &[Card]) -> Result<EvaluatedHand, EvalError> {
    Ok(evaluate(&Hand::new(cards.to_vec())?))
}
