//! Hands of five or more cards and their text form.

use std::fmt;
use std::str::FromStr;

use crate::card::Card;
use crate::error::EvalError;
use crate::evaluator::{self, EvaluatedHand};

/// Smallest hand that can be evaluated.
pub const MIN_HAND_SIZE: usize = 5;

/// An ordered collection of at least five cards.
///
/// Duplicate cards are accepted; keeping a dealt hand consistent with a real
/// deck is up to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Hand(Vec<Card>);

impl Hand {
    pub fn new(cards: Vec<Card>) -> Result<Self, EvalError> {
        if cards.len() < MIN_HAND_SIZE {
            return Err(EvalError::InsufficientCards(cards.len()));
        }
        Ok(Self(cards))
    }

    pub fn cards(&self) -> &[Card] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Best five-card combination of this hand.
    pub fn evaluate(&self) -> EvaluatedHand {
        evaluator::evaluate(self)
    }
}

impl TryFrom<Vec<Card>> for Hand {
    type Error = EvalError;

    fn try_from(cards: Vec<Card>) -> Result<Self, Self::Error> {
        Hand::new(cards)
    }
}

/// Parses whitespace-separated card codes, e.g. `"AS KS QS JS TS 2C 3D"`.
impl FromStr for Hand {
    type Err = EvalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cards = s
            .split_whitespace()
            .map(Card::from_code)
            .collect::<Result<Vec<_>, _>>()?;
        Hand::new(cards)
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, card) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{card}")?;
        }
        Ok(())
    }
}

/// Parses one hand per item and stops at the first bad one.
///
/// The error carries the zero-based position of the offending hand.
pub fn parse_hands<'a, I>(lines: I) -> Result<Vec<Hand>, EvalError>
where
    I: IntoIterator<Item = &'a str>,
{
    lines
        .into_iter()
        .enumerate()
        .map(|(index, line)| {
            line.parse::<Hand>().map_err(|source| EvalError::Hand {
                index,
                source: Box::new(source),
            })
        })
        .collect()
}

/// Test helper: parses codes without the hand-size check.
#[cfg(test)]
pub(crate) fn cards(line: &str) -> Vec<Card> {
    line.split_whitespace()
        .map(|code| code.parse().unwrap())
        .collect()
}
