use std::fmt;

use serde::{Deserialize, Serialize};

use crate::arrange::HandViews;
use crate::card::Card;
use crate::extract;

/// Represents the category of a poker hand, from lowest to highest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// No made hand, only high card.
    HighCard,
    /// Two cards of the same value.
    Pair,
    /// Two different pairs.
    TwoPair,
    /// Three cards of the same value.
    ThreeOfAKind,
    /// Five consecutive values.
    Straight,
    /// Five cards of the same suit.
    Flush,
    /// Three of a kind plus a pair.
    FullHouse,
    /// Four cards of the same value.
    FourOfAKind,
    /// Five consecutive values of the same suit.
    StraightFlush,
    /// A-K-Q-J-T of the same suit.
    RoyalFlush,
}

impl Category {
    /// Extraction order: strongest category first.
    pub const PRIORITY: [Category; 10] = [
        Category::RoyalFlush,
        Category::StraightFlush,
        Category::FourOfAKind,
        Category::FullHouse,
        Category::Flush,
        Category::Straight,
        Category::ThreeOfAKind,
        Category::TwoPair,
        Category::Pair,
        Category::HighCard,
    ];

    /// Precedence used in comparison keys: 1 for High Card up to 10 for Royal Flush.
    pub fn precedence(self) -> u8 {
        self as u8 + 1
    }

    /// Tries to select five cards from `views` that make this category.
    pub fn extract(self, views: &HandViews) -> Option<[Card; 5]> {
        match self {
            Category::RoyalFlush => extract::royal_flush(views),
            Category::StraightFlush => extract::straight_flush(views),
            Category::FourOfAKind => extract::four_of_a_kind(views),
            Category::FullHouse => extract::full_house(views),
            Category::Flush => extract::flush(views),
            Category::Straight => extract::straight(views),
            Category::ThreeOfAKind => extract::three_of_a_kind(views),
            Category::TwoPair => extract::two_pair(views),
            Category::Pair => extract::pair(views),
            Category::HighCard => Some(extract::high_card(views)),
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Category::HighCard => write!(f, "High Card"),
            Category::Pair => write!(f, "Pair"),
            Category::TwoPair => write!(f, "Two Pair"),
            Category::ThreeOfAKind => write!(f, "Three of a Kind"),
            Category::Straight => write!(f, "Straight"),
            Category::Flush => write!(f, "Flush"),
            Category::FullHouse => write!(f, "Full House"),
            Category::FourOfAKind => write!(f, "Four of a Kind"),
            Category::StraightFlush => write!(f, "Straight Flush"),
            Category::RoyalFlush => write!(f, "Royal Flush"),
        }
    }
}
