// Copyright (C) 2025 Showdown Developers
// SPDX-License-Identifier: Apache-2.0

//! Showdown Poker hand evaluator.
//!
//! Classifies 5 cards poker hands into one of the nine hand ranks with the
//! tie-break values used to compare hands with the same rank, and finds the
//! best 5 cards hand out of 7 cards (hole cards plus board).
//!
//! To use the evaluator create a hand and use [Hand::evaluate] to classify
//! it, or [Hand::best_of] to search the best hand in 7 cards:
//!
//! ```
//! # use showdown_eval::*;
//! let cards = Card::parse_many("A♣ K♣ Q♣ J♣ 10♣ 2♦ 3♦").unwrap();
//! let best = Hand::best_of(&cards).unwrap();
//! assert_eq!(best.rank(), HandRank::StraightFlush);
//! assert_eq!(best.tie_breaks(), &[14]);
//!
//! let pair = Hand::evaluate(&Card::parse_many("A♦ A♥ 7♣ 4♠ 2♣").unwrap()).unwrap();
//! assert!(best > pair);
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
pub mod eval;
pub use eval::{
    EvalError, Hand, HandRank, HandValue, compare_hands, evaluate_hand, find_best_hand,
};

pub mod showdown;
pub use showdown::{PlayerResult, Showdown};

// Reexport cards types.
pub use showdown_cards::{Card, Deck, ParseCardError, Rank, Suit};
