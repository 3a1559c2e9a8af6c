// Copyright (C) 2025 Showdown Developers
// SPDX-License-Identifier: Apache-2.0

//! Multi-player showdown.
//!
//! Ranks the best hands of several players and finds the winners:
//!
//! ```
//! # use showdown_eval::*;
//! let board = Card::parse_many("A♠ K♣ Q♦ 9♥ 2♠").unwrap();
//! let players: [(&str, [Card; 2]); 2] = [
//!     ("alice", ["J♦".parse().unwrap(), "10♦".parse().unwrap()]),
//!     ("bob", ["A♦".parse().unwrap(), "A♥".parse().unwrap()]),
//! ];
//!
//! let showdown = Showdown::new(&board, players).unwrap();
//! assert!(!showdown.is_tie());
//! assert_eq!(showdown.winners()[0].player, "alice");
//! ```
use log::debug;
use serde::{Deserialize, Serialize};

use showdown_cards::Card;

use crate::eval::{EvalError, Hand, find_best_hand};

/// A player best hand.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerResult<P> {
    /// The player identifier.
    pub player: P,
    /// The player best 5 cards hand.
    pub hand: Hand,
}

/// The result of a showdown.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Showdown<P> {
    rankings: Vec<PlayerResult<P>>,
    num_winners: usize,
}

impl<P> Showdown<P> {
    /// Evaluates each player hole cards with the 5 cards board.
    ///
    /// Returns [EvalError::InvalidCardCount] if the board doesn't have 5 cards.
    pub fn new<I>(board: &[Card], players: I) -> Result<Self, EvalError>
    where
        I: IntoIterator<Item = (P, [Card; 2])>,
    {
        if board.len() != 5 {
            return Err(EvalError::InvalidCardCount(board.len() + 2));
        }

        let hands = players
            .into_iter()
            .map(|(player, hole)| {
                let mut cards = Vec::with_capacity(hole.len() + board.len());
                cards.extend_from_slice(&hole);
                cards.extend_from_slice(board);
                find_best_hand(&cards).map(|hand| (player, hand))
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self::from_hands(hands))
    }

    /// Ranks already evaluated hands.
    pub fn from_hands<I>(hands: I) -> Self
    where
        I: IntoIterator<Item = (P, Hand)>,
    {
        let mut rankings = hands
            .into_iter()
            .map(|(player, hand)| PlayerResult { player, hand })
            .collect::<Vec<_>>();

        // Stable sort, players with equal hands keep their order.
        rankings.sort_by(|a, b| b.hand.cmp(&a.hand));

        let num_winners = match rankings.first() {
            Some(best) => rankings.iter().take_while(|r| r.hand == best.hand).count(),
            None => 0,
        };

        debug!(
            "Showdown with {} players and {num_winners} winners",
            rankings.len()
        );

        Self {
            rankings,
            num_winners,
        }
    }

    /// All players sorted from the best hand to the worst.
    pub fn rankings(&self) -> &[PlayerResult<P>] {
        &self.rankings
    }

    /// The players with the best hand.
    pub fn winners(&self) -> &[PlayerResult<P>] {
        &self.rankings[..self.num_winners]
    }

    /// Checks if more than one player has the best hand.
    pub fn is_tie(&self) -> bool {
        self.num_winners > 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::eval::HandRank;

    fn hole(s: &str) -> [Card; 2] {
        Card::parse_many(s).unwrap().try_into().unwrap()
    }

    fn board(s: &str) -> Vec<Card> {
        Card::parse_many(s).unwrap()
    }

    fn winners<P: Copy>(showdown: &Showdown<P>) -> Vec<P> {
        showdown.winners().iter().map(|r| r.player).collect()
    }

    #[test]
    fn flush_beats_straight() {
        let board = board("A♠ K♠ Q♠ J♦ 10♦");
        let showdown = Showdown::new(&board, [(1, hole("9♠ 8♠")), (2, hole("9♥ 8♣"))]).unwrap();

        assert_eq!(winners(&showdown), vec![1]);
        assert!(!showdown.is_tie());
        assert_eq!(showdown.rankings()[0].hand.rank(), HandRank::Flush);
        assert_eq!(showdown.rankings()[1].hand.rank(), HandRank::Straight);
    }

    #[test]
    fn board_plays() {
        let board = board("A♠ K♣ Q♦ J♥ 10♠");
        let players = [
            (1, hole("2♦ 3♠")),
            (2, hole("4♣ 5♥")),
            (3, hole("6♦ 7♠")),
            (4, hole("8♣ 9♥")),
        ];

        let showdown = Showdown::new(&board, players).unwrap();
        assert_eq!(winners(&showdown), vec![1, 2, 3, 4]);
        assert!(showdown.is_tie());
    }

    #[test]
    fn winners_and_losers() {
        let board = board("K♠ K♦ Q♥ 9♣ 8♠");
        let players = [
            (1, hole("2♦ 3♦")),
            (2, hole("A♠ A♦")),
            (3, hole("Q♠ Q♦")),
            (4, hole("K♣ K♥")),
            (5, hole("J♥ J♦")),
        ];

        let showdown = Showdown::new(&board, players).unwrap();
        assert_eq!(winners(&showdown), vec![4]);

        let order = showdown
            .rankings()
            .iter()
            .map(|r| r.player)
            .collect::<Vec<_>>();
        assert_eq!(order, vec![4, 3, 2, 5, 1]);
        assert_eq!(showdown.rankings()[0].hand.rank(), HandRank::FourOfAKind);
        assert_eq!(showdown.rankings()[1].hand.rank(), HandRank::FullHouse);
    }

    #[test]
    fn split_among_some() {
        let board = board("A♠ K♣ Q♦ J♥ 2♠");
        let players = [
            ("a", hole("10♦ 3♠")),
            ("b", hole("3♣ 4♥")),
            ("c", hole("10♣ 5♠")),
        ];

        let showdown = Showdown::new(&board, players).unwrap();
        assert_eq!(winners(&showdown), vec!["a", "c"]);
        assert!(showdown.is_tie());
        assert_eq!(showdown.rankings()[2].player, "b");
    }

    #[test]
    fn invalid_board() {
        let board = board("A♠ K♣ Q♦ J♥");
        let err = Showdown::new(&board, [(1, hole("2♦ 3♠"))]).unwrap_err();
        assert_eq!(err, EvalError::InvalidCardCount(6));

        // The board is checked even without players.
        let err = Showdown::new(&[], Vec::<(u8, [Card; 2])>::new()).unwrap_err();
        assert_eq!(err, EvalError::InvalidCardCount(2));

        let board = self::board("A♠ K♣ Q♦ J♥ 10♠ 2♣");
        let err = Showdown::new(&board, Vec::<(u8, [Card; 2])>::new()).unwrap_err();
        assert_eq!(err, EvalError::InvalidCardCount(8));

        let board = self::board("A♠ K♣ Q♦ J♥ 10♠");
        let showdown = Showdown::new(&board, Vec::<(u8, [Card; 2])>::new()).unwrap();
        assert!(showdown.rankings().is_empty());
    }

    #[test]
    fn no_players() {
        let showdown = Showdown::<u32>::from_hands([]);
        assert!(showdown.rankings().is_empty());
        assert!(showdown.winners().is_empty());
        assert!(!showdown.is_tie());
    }
}
