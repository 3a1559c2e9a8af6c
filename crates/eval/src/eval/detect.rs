// Copyright (C) 2025 Showdown Developers
// SPDX-License-Identifier: Apache-2.0

//! Patterns detection on 5 cards hands.
use showdown_cards::{Card, Rank};

/// The ace-low straight values once sorted.
const WHEEL: [u8; 5] = [2, 3, 4, 5, 14];

/// Returns the hand rank values sorted in ascending order.
fn sorted_values(cards: &[Card; 5]) -> [u8; 5] {
    let mut values: [u8; 5] = std::array::from_fn(|i| cards[i].value());
    values.sort_unstable();
    values
}

/// Checks if all cards have the same suit.
pub fn is_flush(cards: &[Card; 5]) -> bool {
    let suit = cards[0].suit();
    cards.iter().all(|c| c.suit() == suit)
}

/// Checks if the cards form five consecutive ranks.
///
/// The ace plays high (10-J-Q-K-A) or low in the wheel (A-2-3-4-5), it never
/// wraps around so Q-K-A-2-3 is not a straight.
pub fn is_straight(cards: &[Card; 5]) -> bool {
    let values = sorted_values(cards);
    values == WHEEL || values.windows(2).all(|w| w[1] == w[0] + 1)
}

/// Returns the highest rank value of a straight, 5 for the wheel.
///
/// For other hands this is the highest rank value.
pub fn straight_high(cards: &[Card; 5]) -> u8 {
    let values = sorted_values(cards);
    if values == WHEEL { 5 } else { values[4] }
}

/// Groups cards by rank.
///
/// Groups are sorted by count and then by rank, both descending, so that a
/// full house of kings over deuces yields `[(King, 3), (Deuce, 2)]`.
pub fn rank_counts(cards: &[Card; 5]) -> Vec<(Rank, u8)> {
    let mut counts = [0u8; 15];
    for card in cards {
        counts[card.value() as usize] += 1;
    }

    let mut groups = Rank::ranks()
        .rev()
        .filter(|r| counts[r.value() as usize] > 0)
        .map(|r| (r, counts[r.value() as usize]))
        .collect::<Vec<_>>();

    // Stable sort keeps higher ranks first among groups with the same size.
    groups.sort_by(|a, b| b.1.cmp(&a.1));
    groups
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hand(s: &str) -> [Card; 5] {
        Card::parse_many(s).unwrap().try_into().unwrap()
    }

    #[test]
    fn flush() {
        assert!(is_flush(&hand("A♥ J♥ 8♥ 4♥ 2♥")));
        assert!(!is_flush(&hand("A♥ J♥ 8♥ 4♥ 2♠")));
    }

    #[test]
    fn straight() {
        assert!(is_straight(&hand("9♣ 10♦ J♥ Q♠ K♣")));
        assert!(is_straight(&hand("A♣ K♦ Q♥ J♠ 10♣")));
        assert!(is_straight(&hand("2♣ 6♦ 3♥ 5♠ 4♣")));
        assert!(!is_straight(&hand("2♣ 3♦ 4♥ 5♠ 7♣")));
        assert!(!is_straight(&hand("2♣ 2♦ 3♥ 4♠ 5♣")));
    }

    #[test]
    fn wheel() {
        let wheel = hand("5♣ 4♦ 3♥ 2♠ A♣");
        assert!(is_straight(&wheel));
        assert_eq!(straight_high(&wheel), 5);

        let six_high = hand("2♣ 3♦ 4♥ 5♠ 6♣");
        assert_eq!(straight_high(&six_high), 6);

        let broadway = hand("A♣ K♦ Q♥ J♠ 10♣");
        assert_eq!(straight_high(&broadway), 14);
    }

    #[test]
    fn no_wraparound() {
        assert!(!is_straight(&hand("Q♣ K♦ A♥ 2♠ 3♣")));
        assert!(!is_straight(&hand("K♣ A♦ 2♥ 3♠ 4♣")));
        assert!(!is_straight(&hand("J♣ Q♦ K♥ A♠ 2♣")));
    }

    #[test]
    fn rank_groups() {
        assert_eq!(
            rank_counts(&hand("2♣ K♦ 2♥ K♠ K♣")),
            vec![(Rank::King, 3), (Rank::Deuce, 2)]
        );

        assert_eq!(
            rank_counts(&hand("7♣ 9♦ 7♥ 3♠ 9♣")),
            vec![(Rank::Nine, 2), (Rank::Seven, 2), (Rank::Trey, 1)]
        );

        assert_eq!(
            rank_counts(&hand("4♣ A♦ 4♥ J♠ 8♣")),
            vec![
                (Rank::Four, 2),
                (Rank::Ace, 1),
                (Rank::Jack, 1),
                (Rank::Eight, 1)
            ]
        );

        assert_eq!(
            rank_counts(&hand("5♣ 5♦ 5♥ 5♠ Q♣")),
            vec![(Rank::Five, 4), (Rank::Queen, 1)]
        );
    }
}
