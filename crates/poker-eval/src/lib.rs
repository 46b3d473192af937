//! Poker hand evaluation and showdown ranking.
//!
//! Finds the best five-card combination of a hand of five or more cards and
//! the winners among several hands.
//!
//! # Examples
//!
//! ```
//! use poker_eval::{Category, Hand, find_winners};
//!
//! let hands: Vec<Hand> = ["AS KS QS JS TS 2C 3D", "2H 2D 2S 3H 3D 9C 4C"]
//!     .iter()
//!     .map(|line| line.parse().unwrap())
//!     .collect();
//!
//! assert_eq!(hands[1].evaluate().category, Category::FullHouse);
//! assert_eq!(find_winners(&hands), vec![0]);
//! ```

pub mod arrange;
pub mod card;
pub mod category;
pub mod error;
pub mod evaluator;
pub mod extract;
pub mod hand;
pub mod key;
pub mod winners;

pub use card::{Card, CardSuit, CardValue};
pub use category::Category;
pub use error::EvalError;
pub use evaluator::{EvaluatedHand, evaluate, evaluate_cards};
pub use hand::{Hand, parse_hands};
pub use key::ComparisonKey;
pub use winners::{HandResult, Showdown, find_winners, showdown};
