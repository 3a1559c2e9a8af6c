// Copyright (C) 2025 Showdown Developers
// SPDX-License-Identifier: Apache-2.0

//! Poker hand evaluator.
//!
//! A 5 cards hand is classified by looking at its suits for a flush, at its
//! rank values for a straight (including the ace-low wheel), and at how many
//! cards share each rank. The result is a [HandValue]: the [HandRank] plus
//! the tie-break values that order hands of the same rank.
//!
//! It provides [evaluate_hand] to classify exactly 5 cards, [find_best_hand]
//! to search the best 5 cards out of exactly 7, and [compare_hands] to order
//! two classified hands.

pub mod detect;

mod error;
pub use error::EvalError;

mod hand;
pub use hand::{Hand, HandRank, HandValue, compare_hands, evaluate_hand};

mod best;
pub use best::find_best_hand;
