//! Card model.
//!
//! A card is a `(value, suit)` pair written as a two-symbol code such as `AS`
//! (ace of spades) or `TD` (ten of diamonds).
//!
//! ```
//! use poker_eval::card::{Card, CardSuit, CardValue};
//!
//! let card: Card = "QH".parse().unwrap();
//! assert_eq!(card, Card(CardValue::Queen, CardSuit::Hearts));
//! assert_eq!(card.to_string(), "QH");
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::EvalError;

/// Represents a card suit (Clubs, Diamonds, Hearts, Spades).
///
/// Suits carry no poker strength; the derived order only exists so suits can
/// key ordered maps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum CardSuit {
    Clubs,
    Diamonds,
    Hearts,
    Spades,
}

impl CardSuit {
    /// All suits in code order (`C`, `D`, `H`, `S`).
    pub const ALL: [CardSuit; 4] = [
        CardSuit::Clubs,
        CardSuit::Diamonds,
        CardSuit::Hearts,
        CardSuit::Spades,
    ];

    /// Returns the suit as its code symbol.
    pub fn symbol(&self) -> char {
        match self {
            CardSuit::Clubs => 'C',
            CardSuit::Diamonds => 'D',
            CardSuit::Hearts => 'H',
            CardSuit::Spades => 'S',
        }
    }

    /// Parses a suit code symbol (`C`, `D`, `H` or `S`).
    pub fn from_symbol(symbol: char) -> Option<CardSuit> {
        match symbol {
            'C' => Some(CardSuit::Clubs),
            'D' => Some(CardSuit::Diamonds),
            'H' => Some(CardSuit::Hearts),
            'S' => Some(CardSuit::Spades),
            _ => None,
        }
    }
}

/// Represents a card value, ordered from Two up to Ace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum CardValue {
    Two = 2,
    Three = 3,
    Four = 4,
    Five = 5,
    Six = 6,
    Seven = 7,
    Eight = 8,
    Nine = 9,
    Ten = 10,
    Jack = 11,
    Queen = 12,
    King = 13,
    Ace = 14,
}

impl CardValue {
    /// All values from lowest to highest.
    pub const ALL: [CardValue; 13] = [
        CardValue::Two,
        CardValue::Three,
        CardValue::Four,
        CardValue::Five,
        CardValue::Six,
        CardValue::Seven,
        CardValue::Eight,
        CardValue::Nine,
        CardValue::Ten,
        CardValue::Jack,
        CardValue::Queen,
        CardValue::King,
        CardValue::Ace,
    ];

    /// Returns the value as its code symbol
    pub fn symbol(&self) -> char {
        match self {
            CardValue::Two => '2',
            CardValue::Three => '3',
            CardValue::Four => '4',
            CardValue::Five => '5',
            CardValue::Six => '6',
            CardValue::Seven => '7',
            CardValue::Eight => '8',
            CardValue::Nine => '9',
            CardValue::Ten => 'T',
            CardValue::Jack => 'J',
            CardValue::Queen => 'Q',
            CardValue::King => 'K',
            CardValue::Ace => 'A',
        }
    }

    /// Parses a value code symbol (`2`-`9`, `T`, `J`, `Q`, `K` or `A`).
    pub fn from_symbol(symbol: char) -> Option<CardValue> {
        CardValue::ALL.into_iter().find(|v| v.symbol() == symbol)
    }

    /// Position in the value domain: 0 for Two up to 12 for Ace.
    pub fn rank(&self) -> u8 {
        *self as u8 - 2
    }
}

/// A playing card. Serialized as its two-symbol code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Card(pub CardValue, pub CardSuit);

impl Card {
    pub fn value(&self) -> CardValue {
        self.0
    }

    pub fn suit(&self) -> CardSuit {
        self.1
    }

    /// Key used wherever cards are compared or sorted by value.
    ///
    /// Only meaningful relative to other keys: higher is stronger.
    pub fn sort_key(&self) -> u8 {
        self.0.rank()
    }

    /// Builds a card from a two-symbol code, e.g. `"9C"`.
    pub fn from_code(code: &str) -> Result<Card, EvalError> {
        let invalid = |reason| EvalError::InvalidCard {
            code: code.to_string(),
            reason,
        };

        let mut symbols = code.chars();
        let (Some(v), Some(s), None) = (symbols.next(), symbols.next(), symbols.next()) else {
            return Err(invalid("a card code is exactly two symbols"));
        };

        let value = CardValue::from_symbol(v).ok_or_else(|| invalid("unknown value symbol"))?;
        let suit = CardSuit::from_symbol(s).ok_or_else(|| invalid("unknown suit symbol"))?;
        Ok(Card(value, suit))
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.0.symbol(), self.1.symbol())
    }
}

impl FromStr for Card {
    type Err = EvalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Card::from_code(s)
    }
}

impl TryFrom<String> for Card {
    type Error = EvalError;

    fn try_from(code: String) -> Result<Self, Self::Error> {
        Card::from_code(&code)
    }
}

impl From<Card> for String {
    fn from(card: Card) -> Self {
        card.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_round_trip() {
        for suit in CardSuit::ALL {
            for value in CardValue::ALL {
                let card = Card(value, suit);
                let code = card.to_string();
                assert_eq!(code.parse::<Card>().unwrap(), card);
                assert_eq!(Card::from_code(&code).unwrap().to_string(), code);
            }
        }
    }

    #[test]
    fn test_invalid_codes() {
        for code in ["", "A", "ASX", "1S", "AX", "as", "10H", "♠A"] {
            let err = code.parse::<Card>().unwrap_err();
            assert!(
                matches!(err, EvalError::InvalidCard { .. }),
                "{code:?} should be rejected, got {err:?}"
            );
        }
    }

    #[test]
    fn test_invalid_reason_names_the_bad_symbol() {
        match Card::from_code("ZS") {
            Err(EvalError::InvalidCard { code, reason }) => {
                assert_eq!(code, "ZS");
                assert_eq!(reason, "unknown value symbol");
            }
            other => panic!("unexpected {other:?}"),
        }
        match Card::from_code("KX") {
            Err(EvalError::InvalidCard { reason, .. }) => assert_eq!(reason, "unknown suit symbol"),
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn test_sort_key_follows_value_order() {
        let keys: Vec<u8> = CardValue::ALL
            .iter()
            .map(|v| Card(*v, CardSuit::Clubs).sort_key())
            .collect();
        assert_eq!(keys, (0..13).collect::<Vec<u8>>());
        assert_eq!(Card(CardValue::Ace, CardSuit::Spades).sort_key(), 12);
    }

    #[test]
    fn test_serde_uses_code() {
        let card = Card(CardValue::Ten, CardSuit::Diamonds);
        assert_eq!(serde_json::to_string(&card).unwrap(), "\"TD\"");
        let back: Card = serde_json::from_str("\"TD\"").unwrap();
        assert_eq!(back, card);
        assert!(serde_json::from_str::<Card>("\"TX\"").is_err());
    }
}
