// Copyright (C) 2025 Showdown Developers
// SPDX-License-Identifier: Apache-2.0

//! Evaluation errors.
use thiserror::Error;

/// Errors returned by the evaluator when given the wrong number of cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum EvalError {
    /// A hand to evaluate must have exactly 5 cards.
    #[error("hand must contain exactly 5 cards, got {0}")]
    InvalidHandSize(usize),
    /// The best hand search needs exactly 7 cards.
    #[error("must provide exactly 7 cards, got {0}")]
    InvalidCardCount(usize),
}
