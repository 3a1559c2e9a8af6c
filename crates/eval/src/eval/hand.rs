// Copyright (C) 2025 Showdown Developers
// SPDX-License-Identifier: Apache-2.0

//! Hand classification and comparison.
use serde::{Deserialize, Serialize};
use std::{cmp::Ordering, fmt};

use showdown_cards::Card;

use super::{
    EvalError,
    detect::{is_flush, is_straight, rank_counts, straight_high},
};

/// The rank of a hand, from the weakest to the strongest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum HandRank {
    /// Five unrelated cards.
    HighCard = 0,
    /// Two cards of one rank.
    OnePair = 1,
    /// Two cards of one rank and two cards of another.
    TwoPair = 2,
    /// Three cards of one rank.
    ThreeOfAKind = 3,
    /// Five cards of consecutive ranks.
    Straight = 4,
    /// Five cards of the same suit.
    Flush = 5,
    /// Three cards of one rank and two of another.
    FullHouse = 6,
    /// Four cards of one rank.
    FourOfAKind = 7,
    /// A straight with all cards of the same suit.
    StraightFlush = 8,
}

impl HandRank {
    /// Returns all hand ranks from the weakest to the strongest.
    pub fn ranks() -> impl DoubleEndedIterator<Item = HandRank> {
        use HandRank::*;
        [
            HighCard,
            OnePair,
            TwoPair,
            ThreeOfAKind,
            Straight,
            Flush,
            FullHouse,
            FourOfAKind,
            StraightFlush,
        ]
        .into_iter()
    }
}

impl fmt::Display for HandRank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            HandRank::HighCard => "High Card",
            HandRank::OnePair => "One Pair",
            HandRank::TwoPair => "Two Pair",
            HandRank::ThreeOfAKind => "Three of a Kind",
            HandRank::Straight => "Straight",
            HandRank::Flush => "Flush",
            HandRank::FullHouse => "Full House",
            HandRank::FourOfAKind => "Four of a Kind",
            HandRank::StraightFlush => "Straight Flush",
        };

        f.pad(name)
    }
}

/// The value of a hand: its rank and the tie-break values.
///
/// Values compare by rank first and then by tie-breaks in lexicographic
/// order, the first tie-break is the most significant. The tie-breaks for
/// each rank are:
///
/// | Rank            | Tie-breaks                                   |
/// |-----------------|----------------------------------------------|
/// | Straight Flush  | straight high card (5 for the wheel)         |
/// | Four of a Kind  | quads rank, kicker                           |
/// | Full House      | trips rank, pair rank                        |
/// | Flush           | the five ranks, descending                   |
/// | Straight        | straight high card (5 for the wheel)         |
/// | Three of a Kind | trips rank, two kickers descending           |
/// | Two Pair        | high pair, low pair, kicker                  |
/// | One Pair        | pair rank, three kickers descending          |
/// | High Card       | the five ranks, descending                   |
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct HandValue {
    rank: HandRank,
    tie_breaks: Vec<u8>,
}

impl HandValue {
    /// The hand rank.
    pub fn rank(&self) -> HandRank {
        self.rank
    }

    /// The rank values that break ties between hands with the same rank.
    pub fn tie_breaks(&self) -> &[u8] {
        &self.tie_breaks
    }
}

impl fmt::Display for HandValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {:?}", self.rank, self.tie_breaks)
    }
}

/// A classified 5 cards hand.
///
/// Hands compare by their [HandValue] only, two hands with the same value
/// but different suits are equal.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Hand {
    value: HandValue,
    cards: [Card; 5],
}

impl Hand {
    /// Classifies exactly 5 cards.
    ///
    /// Returns [EvalError::InvalidHandSize] if `cards` doesn't have 5 cards.
    /// Duplicated cards are evaluated as given.
    pub fn evaluate(cards: &[Card]) -> Result<Hand, EvalError> {
        let cards: [Card; 5] = cards
            .try_into()
            .map_err(|_| EvalError::InvalidHandSize(cards.len()))?;
        Ok(Self::classify(cards))
    }

    /// Finds the best 5 cards hand out of exactly 7 cards, see
    /// [find_best_hand](super::find_best_hand).
    pub fn best_of(cards: &[Card]) -> Result<Hand, EvalError> {
        super::find_best_hand(cards)
    }

    /// Classifies 5 cards, the first matching rank wins.
    pub(crate) fn classify(cards: [Card; 5]) -> Hand {
        use HandRank::*;

        let flush = is_flush(&cards);
        let straight = is_straight(&cards);
        let groups = rank_counts(&cards);
        let counts = groups.iter().map(|&(_, n)| n).collect::<Vec<_>>();

        // Group ranks in group order: quads or trips or pairs before kickers.
        let group_values = || groups.iter().map(|(r, _)| r.value()).collect::<Vec<_>>();

        let all_values = || {
            let mut values = cards.iter().map(Card::value).collect::<Vec<_>>();
            values.sort_unstable_by(|a, b| b.cmp(a));
            values
        };

        let (rank, tie_breaks) = match counts.as_slice() {
            _ if straight && flush => (StraightFlush, vec![straight_high(&cards)]),
            [4, ..] => (FourOfAKind, group_values()),
            [3, 2] => (FullHouse, group_values()),
            _ if flush => (Flush, all_values()),
            _ if straight => (Straight, vec![straight_high(&cards)]),
            [3, ..] => (ThreeOfAKind, group_values()),
            [2, 2, ..] => (TwoPair, group_values()),
            [2, ..] => (OnePair, group_values()),
            _ => (HighCard, all_values()),
        };

        Hand {
            value: HandValue { rank, tie_breaks },
            cards,
        }
    }

    /// The hand rank.
    pub fn rank(&self) -> HandRank {
        self.value.rank
    }

    /// The tie-break values, see [HandValue].
    pub fn tie_breaks(&self) -> &[u8] {
        &self.value.tie_breaks
    }

    /// The hand value.
    pub fn value(&self) -> &HandValue {
        &self.value
    }

    /// The 5 cards that make this hand, in the order they were given.
    pub fn cards(&self) -> &[Card; 5] {
        &self.cards
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [", self.value.rank)?;
        for (idx, card) in self.cards.iter().enumerate() {
            if idx > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{card}")?;
        }
        f.write_str("]")
    }
}

impl PartialEq for Hand {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl Eq for Hand {}

impl PartialOrd for Hand {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Hand {
    fn cmp(&self, other: &Self) -> Ordering {
        self.value.cmp(&other.value)
    }
}

/// Classifies exactly 5 cards, see [Hand::evaluate].
pub fn evaluate_hand(cards: &[Card]) -> Result<Hand, EvalError> {
    Hand::evaluate(cards)
}

/// Compares two hands by rank and then by tie-breaks.
///
/// `Less`, `Equal`, and `Greater` stand for -1, 0, and 1, use `as i8` for the
/// numeric form.
pub fn compare_hands(a: &Hand, b: &Hand) -> Ordering {
    a.cmp(b)
}
