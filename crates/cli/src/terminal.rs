// Copyright (C) 2025 Showdown Developers
// SPDX-License-Identifier: Apache-2.0

//! Terminal output.
use anyhow::Result;
use crossterm::{
    queue,
    style::{self, Stylize},
};
use std::{fmt, io};

use showdown_eval::{Card, Hand, Showdown, Suit};

/// Prints a hand rank, tie-breaks and cards.
pub fn print_hand(w: &mut impl io::Write, hand: &Hand) -> Result<()> {
    queue!(
        w,
        style::PrintStyledContent(format!("{:<16}", hand.rank()).bold()),
        style::Print(format!("{:<20}", format!("{:?}", hand.tie_breaks())))
    )?;

    print_cards(w, hand.cards())?;
    queue!(w, style::Print("\n"))?;
    w.flush()?;

    Ok(())
}

/// Prints the board, the players ranking and the winners.
pub fn print_showdown<P>(
    w: &mut impl io::Write,
    board: &[Card],
    showdown: &Showdown<P>,
) -> Result<()>
where
    P: fmt::Display,
{
    queue!(w, style::Print(format!("{:<10}", "Board")))?;
    print_cards(w, board)?;
    queue!(w, style::Print("\n\n"))?;

    let num_winners = showdown.winners().len();
    for (idx, result) in showdown.rankings().iter().enumerate() {
        let player = format!("{:<10}", format!("Player {}", result.player));
        if idx < num_winners {
            queue!(w, style::PrintStyledContent(player.dark_green().bold()))?;
        } else {
            queue!(w, style::Print(player))?;
        }

        print_hand(w, &result.hand)?;
    }

    let label = if showdown.is_tie() { "Split pot" } else { "Winner" };
    let winners = showdown
        .winners()
        .iter()
        .map(|r| r.player.to_string())
        .collect::<Vec<_>>()
        .join(", ");

    queue!(w, style::Print(format!("\n{label}: {winners}\n")))?;
    w.flush()?;

    Ok(())
}

fn print_cards(w: &mut impl io::Write, cards: &[Card]) -> Result<()> {
    for card in cards {
        let text = format!("{:<4}", card.to_string());
        match card.suit() {
            Suit::Hearts | Suit::Diamonds => queue!(w, style::PrintStyledContent(text.red()))?,
            Suit::Clubs | Suit::Spades => queue!(w, style::Print(text))?,
        }
    }

    Ok(())
}
