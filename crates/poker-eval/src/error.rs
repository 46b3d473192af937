use thiserror::Error;

/// Errors raised while building cards and hands.
///
/// Evaluation itself cannot fail: once a [`Hand`](crate::hand::Hand) exists it
/// has at least five valid cards.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvalError {
    /// A card code is not one value symbol followed by one suit symbol.
    #[error("`{code}` is not a valid card: {reason}")]
    InvalidCard { code: String, reason: &'static str },

    /// A hand holds fewer than five cards.
    #[error("a hand needs at least 5 cards, got {0}")]
    InsufficientCards(usize),

    /// A hand in a batch failed to parse; `index` is zero-based.
    #[error("hand {index}: {source}")]
    Hand {
        index: usize,
        source: Box<EvalError>,
    },
}
