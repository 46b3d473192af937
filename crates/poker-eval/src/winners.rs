//! Finding the winning hands of a showdown.
//!
//! Hands are evaluated independently. With the `parallel` feature they are
//! spread over the rayon thread pool; results always come back in input
//! order.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::evaluator::EvaluatedHand;
use crate::hand::Hand;
use crate::key::ComparisonKey;

/// One hand's result within a [`Showdown`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HandResult {
    pub index: usize,
    #[serde(flatten)]
    pub evaluated: EvaluatedHand,
    pub key: ComparisonKey,
}

/// Every hand's evaluation plus the indices of the winners.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Showdown {
    pub hands: Vec<HandResult>,
    /// Zero-based, ascending. Several entries mean an exact tie.
    pub winners: Vec<usize>,
}

/// Evaluates every hand and picks the winners.
pub fn showdown(hands: &[Hand]) -> Showdown {
    let hands: Vec<HandResult> = evaluate_all(hands)
        .into_iter()
        .enumerate()
        .map(|(index, evaluated)| HandResult {
            index,
            key: evaluated.key(),
            evaluated,
        })
        .collect();

    let winners = match hands.iter().map(|h| h.key).max() {
        Some(best) => hands
            .iter()
            .filter(|h| h.key == best)
            .map(|h| h.index)
            .collect(),
        None => Vec::new(),
    };

    debug!(hands = hands.len(), ?winners, "showdown decided");
    Showdown { hands, winners }
}

/// Indices of all hands tied for best, ascending.
///
/// Returns at least one index for a non-empty input and nothing for an empty
/// one.
pub fn find_winners(hands: &[Hand]) -> Vec<usize> {
    showdown(hands).winners
}

#[cfg(feature = "parallel")]
fn evaluate_all(hands: &[Hand]) -> Vec<EvaluatedHand> {
    use rayon::prelude::*;

    hands.par_iter().map(Hand::evaluate).collect()
}

#[cfg(not(feature = "parallel"))]
fn evaluate_all(hands: &[Hand]) -> Vec<EvaluatedHand> {
    hands.iter().map(Hand::evaluate).collect()
}
