// Copyright (C) 2025 Showdown Developers
// SPDX-License-Identifier: Apache-2.0

//! Showdown CLI, evaluates poker hands from the command line.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use log::{debug, info};
use rand::prelude::*;
use std::io;

use showdown_eval::{Card, Deck, Hand, Rank, Showdown, Suit};

pub mod terminal;

#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Enables debug logging.
    #[clap(long, short, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Classifies a 5 cards hand.
    Eval {
        /// The hand cards, for example `A♣ K♣ Q♣ J♣ 10♣` or `AC KC QC JC TC`.
        #[clap(required = true)]
        cards: Vec<String>,
    },
    /// Finds the best 5 cards hand out of 7 cards.
    Best {
        /// The hole and board cards.
        #[clap(required = true)]
        cards: Vec<String>,
    },
    /// Ranks the players hands on a board.
    Showdown {
        /// The 5 board cards.
        #[clap(long, short)]
        board: String,
        /// The 2 hole cards of a player, repeat for each player.
        #[clap(long = "hole", required = true)]
        holes: Vec<String>,
    },
    /// Deals a random hand and runs the showdown.
    Deal {
        /// Number of players.
        #[clap(
            long,
            short,
            default_value_t = 2,
            value_parser = clap::value_parser!(u8).range(2..=9)
        )]
        players: u8,
        /// Seed for a reproducible deal.
        #[clap(long, short)]
        seed: Option<u64>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };

    env_logger::builder()
        .filter_level(level)
        .format_target(false)
        .format_timestamp_millis()
        .parse_default_env()
        .init();

    let mut stdout = io::stdout();
    match cli.command {
        Command::Eval { cards } => {
            let cards = parse_cards(&cards)?;
            let hand = Hand::evaluate(&cards).context("Cannot evaluate hand")?;
            terminal::print_hand(&mut stdout, &hand)?;
        }
        Command::Best { cards } => {
            let cards = parse_cards(&cards)?;
            let hand = Hand::best_of(&cards).context("Cannot find best hand")?;
            terminal::print_hand(&mut stdout, &hand)?;
        }
        Command::Showdown { board, holes } => {
            let board = Card::parse_many(&board).context("Invalid board")?;
            let players = holes
                .iter()
                .enumerate()
                .map(|(idx, hole)| parse_hole(hole).map(|cards| (idx + 1, cards)))
                .collect::<Result<Vec<_>>>()?;

            let showdown = Showdown::new(&board, players).context("Invalid board")?;
            terminal::print_showdown(&mut stdout, &board, &showdown)?;
        }
        Command::Deal { players, seed } => {
            let mut rng = match seed {
                Some(seed) => StdRng::seed_from_u64(seed),
                None => StdRng::from_rng(&mut rand::rng()),
            };

            info!("Dealing a hand to {players} players");
            let mut deck = Deck::new_and_shuffled(&mut rng);

            let holes = (1..=players as usize)
                .map(|player| deal::<2>(&mut deck).map(|cards| (player, cards)))
                .collect::<Result<Vec<_>>>()?;
            let board = deal::<5>(&mut deck)?;
            debug!("Deck has {} cards left", deck.count());

            let showdown = Showdown::new(&board, holes)?;
            terminal::print_showdown(&mut stdout, &board, &showdown)?;
        }
    }

    Ok(())
}

/// Parses cards given as one or more arguments.
fn parse_cards(args: &[String]) -> Result<Vec<Card>> {
    let cards = Card::parse_many(&args.join(" ")).context("Invalid cards")?;
    debug!("Parsed {} cards", cards.len());
    Ok(cards)
}

/// Parses a player 2 hole cards.
fn parse_hole(s: &str) -> Result<[Card; 2]> {
    let cards = Card::parse_many(s).with_context(|| format!("Invalid hole cards {s:?}"))?;
    match cards.as_slice() {
        &[c1, c2] => Ok([c1, c2]),
        _ => anyhow::bail!("Hole cards must be 2 cards, got {s:?}"),
    }
}

/// Deals N cards from the deck.
fn deal<const N: usize>(deck: &mut Deck) -> Result<[Card; N]> {
    let mut cards = [Card::new(Rank::Ace, Suit::Spades); N];
    for card in &mut cards {
        *card = deck.deal().context("The deck is out of cards")?;
    }

    Ok(cards)
}
