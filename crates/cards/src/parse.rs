// Copyright (C) 2025 Showdown Developers
// SPDX-License-Identifier: Apache-2.0

//! Cards parsing from their string notation.
use std::str::FromStr;
use thiserror::Error;

use crate::{Card, Rank, Suit};

/// Errors returned when parsing cards.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseCardError {
    /// The input string is empty.
    #[error("empty card string")]
    Empty,
    /// The rank symbol is not one of 2..10, T, J, Q, K, A.
    #[error("invalid rank {0:?}")]
    InvalidRank(String),
    /// The suit symbol is not one of ♣ ♦ ♥ ♠ or C D H S.
    #[error("invalid suit {0:?}")]
    InvalidSuit(String),
}

impl FromStr for Rank {
    type Err = ParseCardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rank = match s {
            "2" => Rank::Deuce,
            "3" => Rank::Trey,
            "4" => Rank::Four,
            "5" => Rank::Five,
            "6" => Rank::Six,
            "7" => Rank::Seven,
            "8" => Rank::Eight,
            "9" => Rank::Nine,
            "10" | "T" | "t" => Rank::Ten,
            "J" | "j" => Rank::Jack,
            "Q" | "q" => Rank::Queen,
            "K" | "k" => Rank::King,
            "A" | "a" => Rank::Ace,
            _ => return Err(ParseCardError::InvalidRank(s.to_string())),
        };

        Ok(rank)
    }
}

impl FromStr for Suit {
    type Err = ParseCardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let suit = match s {
            "♣" | "C" | "c" => Suit::Clubs,
            "♦" | "D" | "d" => Suit::Diamonds,
            "♥" | "H" | "h" => Suit::Hearts,
            "♠" | "S" | "s" => Suit::Spades,
            _ => return Err(ParseCardError::InvalidSuit(s.to_string())),
        };

        Ok(suit)
    }
}

/// Parses a card from a rank followed by a suit, for example `A♣`, `10♥`,
/// or `TH`.
impl FromStr for Card {
    type Err = ParseCardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let Some((suit_idx, _)) = s.char_indices().next_back() else {
            return Err(ParseCardError::Empty);
        };

        let (rank, suit) = s.split_at(suit_idx);
        if rank.is_empty() {
            return Err(ParseCardError::InvalidRank(rank.to_string()));
        }

        Ok(Card::new(rank.parse()?, suit.parse()?))
    }
}

impl Card {
    /// Parses a list of cards separated by whitespace or commas.
    ///
    /// ```
    /// # use showdown_cards::{Card, Rank, Suit};
    /// let cards = Card::parse_many("A♣ 10♥, kd").unwrap();
    /// assert_eq!(cards.len(), 3);
    /// assert_eq!(cards[1], Card::new(Rank::Ten, Suit::Hearts));
    /// ```
    pub fn parse_many(s: &str) -> Result<Vec<Card>, ParseCardError> {
        s.split(|c: char| c.is_whitespace() || c == ',')
            .filter(|token| !token.is_empty())
            .map(str::parse)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Deck;

    #[test]
    fn parse_symbols() {
        let card = "A♣".parse::<Card>().unwrap();
        assert_eq!(card.rank(), Rank::Ace);
        assert_eq!(card.suit(), Suit::Clubs);

        let card = "2♦".parse::<Card>().unwrap();
        assert_eq!(card, Card::new(Rank::Deuce, Suit::Diamonds));

        let card = "K♥".parse::<Card>().unwrap();
        assert_eq!(card, Card::new(Rank::King, Suit::Hearts));

        let card = "10♠".parse::<Card>().unwrap();
        assert_eq!(card, Card::new(Rank::Ten, Suit::Spades));
    }

    #[test]
    fn parse_ascii() {
        assert_eq!(
            "TH".parse::<Card>().unwrap(),
            Card::new(Rank::Ten, Suit::Hearts)
        );
        assert_eq!(
            "qs".parse::<Card>().unwrap(),
            Card::new(Rank::Queen, Suit::Spades)
        );
        assert_eq!(
            " 7c ".parse::<Card>().unwrap(),
            Card::new(Rank::Seven, Suit::Clubs)
        );
    }

    #[test]
    fn parse_all_ranks() {
        let symbols = ["2", "3", "4", "5", "6", "7", "8", "9", "10", "J", "Q", "K", "A"];
        for (symbol, rank) in symbols.iter().zip(Rank::ranks()) {
            assert_eq!(symbol.parse::<Rank>().unwrap(), rank);
        }
    }

    #[test]
    fn invalid_rank() {
        for rank in ["1", "11", "0", "X", "AA", "B"] {
            assert_eq!(
                rank.parse::<Rank>(),
                Err(ParseCardError::InvalidRank(rank.to_string()))
            );
        }

        assert_eq!(
            "1♣".parse::<Card>(),
            Err(ParseCardError::InvalidRank("1".to_string()))
        );
        assert_eq!(
            "♣".parse::<Card>(),
            Err(ParseCardError::InvalidRank(String::new()))
        );
    }

    #[test]
    fn invalid_suit() {
        assert_eq!(
            "AX".parse::<Card>(),
            Err(ParseCardError::InvalidSuit("X".to_string()))
        );
        assert_eq!(
            "10".parse::<Card>(),
            Err(ParseCardError::InvalidRank("1".to_string()))
        );
        assert_eq!("".parse::<Card>(), Err(ParseCardError::Empty));
        assert_eq!("  ".parse::<Card>(), Err(ParseCardError::Empty));
    }

    #[test]
    fn display_roundtrip() {
        for card in Deck::default() {
            assert_eq!(card.to_string().parse::<Card>().unwrap(), card);
            assert_eq!(format!("{card:#}").parse::<Card>().unwrap(), card);
        }
    }

    #[test]
    fn parse_many() {
        let cards = Card::parse_many("A♣ K♣,Q♣ ,, J♣  10♣").unwrap();
        assert_eq!(
            cards,
            vec![
                Card::new(Rank::Ace, Suit::Clubs),
                Card::new(Rank::King, Suit::Clubs),
                Card::new(Rank::Queen, Suit::Clubs),
                Card::new(Rank::Jack, Suit::Clubs),
                Card::new(Rank::Ten, Suit::Clubs),
            ]
        );

        assert_eq!(Card::parse_many("").unwrap(), vec![]);
        assert!(matches!(
            Card::parse_many("A♣ AZ"),
            Err(ParseCardError::InvalidSuit(_))
        ));
    }
}
