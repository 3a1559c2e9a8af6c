// Copyright (C) 2025 Showdown Developers
// SPDX-License-Identifier: Apache-2.0

//! Best 5 cards hand search.
use log::trace;

use showdown_cards::{Card, subsets::for_each_ksubset};

use super::{EvalError, Hand};

/// Finds the best 5 cards hand out of exactly 7 cards.
///
/// All the 21 5-cards subsets are classified in lexicographic order of the
/// cards positions (`{0, 1, 2, 3, 4}` first, `{2, 3, 4, 5, 6}` last). When
/// more subsets have the best value the first one wins, so the same input
/// always returns the same cards.
///
/// Returns [EvalError::InvalidCardCount] if `cards` doesn't have 7 cards.
pub fn find_best_hand(cards: &[Card]) -> Result<Hand, EvalError> {
    let cards: &[Card; 7] = cards
        .try_into()
        .map_err(|_| EvalError::InvalidCardCount(cards.len()))?;

    let best = best_subset(cards, Hand::classify).ok_or(EvalError::InvalidCardCount(7))?;

    trace!("Best hand {best} with {}", best.value());
    Ok(best)
}

/// Classifies each 5-cards subset once and keeps the first maximum.
fn best_subset<F>(cards: &[Card; 7], mut classify: F) -> Option<Hand>
where
    F: FnMut([Card; 5]) -> Hand,
{
    let mut best: Option<Hand> = None;
    for_each_ksubset(cards.len(), 5, |indices| {
        let hand = classify(std::array::from_fn(|i| cards[indices[i]]));
        if best.as_ref().is_none_or(|best| hand > *best) {
            best = Some(hand);
        }
    });

    best
}
