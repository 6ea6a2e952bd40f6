// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Bigtwo console game.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
use anyhow::Result;
use clap::Parser;
use rand::{SeedableRng, rngs::StdRng};

use bigtwo_core::{game::Game, player::Player};

pub mod terminal;

#[derive(Debug, Parser)]
struct Cli {
    /// This player nickname.
    #[clap(long, short, default_value = "You")]
    nickname: String,
    /// Number of automated opponents.
    #[clap(long, short, default_value_t = 3, value_parser = clap::value_parser!(u8).range(1..=3))]
    bots: u8,
    /// Seed for a reproducible deal.
    #[clap(long, short)]
    seed: Option<u64>,
}

static NICKNAMES: &[&str] = &["Alice", "Bob", "Carol"];

fn main() -> Result<()> {
    let cli = Cli::parse();

    env_logger::builder()
        .filter_level(log::LevelFilter::Warn)
        .format_target(false)
        .init();

    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    let mut players = vec![Player::new(cli.nickname, false)];
    for idx in 0..cli.bots as usize {
        players.push(Player::new(NICKNAMES[idx % NICKNAMES.len()], true));
    }

    let game = Game::new(players, &mut rng)?;
    terminal::run(game)
}
