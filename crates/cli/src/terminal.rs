// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Terminal I/O.
use anyhow::Result;
use crossterm::style::Stylize;
use std::io::{self, Write};

use bigtwo_bot::{Greedy, Strategy};
use bigtwo_core::{
    Card, Hand, HandValue, Suit,
    game::{Action, Game, TurnReport},
};

/// Runs the game loop until a player wins.
pub fn run(mut game: Game) -> Result<()> {
    let mut strategy = Greedy;

    print_counts(&game);

    while !game.is_over() {
        let seat = game.current_seat();
        println!("\n=== {}'s turn ===", game.player(seat).nickname());

        let report = if game.player(seat).is_bot() {
            bot_turn(&mut game, &mut strategy)?
        } else {
            human_turn(&mut game)?
        };

        print_report(&game, &report);
        print_counts(&game);
    }

    if let Some(winner) = game.winner() {
        println!("\n{} wins!", game.player(winner).nickname());
    }

    Ok(())
}

fn bot_turn(game: &mut Game, strategy: &mut impl Strategy) -> Result<TurnReport> {
    let seat = game.current_seat();
    let pool = game.player(seat).cards().cards().to_vec();
    let standing = game.standing().cloned();

    let action = strategy.decide(&pool, standing.as_ref());
    if let Action::Play(hand) = &action {
        print_played(hand);
    }

    game.apply(action)
}

fn human_turn(game: &mut Game) -> Result<TurnReport> {
    loop {
        match game.standing() {
            Some(standing) => {
                println!("=-= LAST PLAYED HAND =-=");
                print_value(standing.value());
                println!("Cards: {}", hand_label(standing));
            }
            None => println!("You can play any valid hand combination!"),
        }

        let cards = game.player(game.current_seat()).cards().cards().to_vec();
        print_selection(&cards, &[]);

        print!("Select cards by typing their indices (press Enter to pass): ");
        let line = read_line()?;

        if line.trim().is_empty() {
            return game.apply(Action::Pass);
        }

        let Some(selection) = parse_selection(&line, cards.len()) else {
            println!("Invalid selection, type card indices separated by spaces.");
            continue;
        };

        print_selection(&cards, &selection);

        let hand = selection
            .iter()
            .map(|&idx| cards[idx])
            .collect::<Hand>();
        print_played(&hand);

        print!("Type o to confirm, anything else to reselect: ");
        if read_line()?.trim() != "o" {
            continue;
        }

        match game.apply(Action::Play(hand)) {
            Ok(report) => return Ok(report),
            Err(err) => println!("Invalid play! {err}."),
        }
    }
}

/// Parses a whitespace separated list of card indices, deduplicated and
/// in display order.
fn parse_selection(line: &str, len: usize) -> Option<Vec<usize>> {
    let mut selection = line
        .split_whitespace()
        .map(|tok| tok.parse::<usize>().ok().filter(|&idx| idx < len))
        .collect::<Option<Vec<_>>>()?;
    selection.sort_unstable();
    selection.dedup();
    Some(selection)
}

fn read_line() -> Result<String> {
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    Ok(line)
}

fn print_selection(cards: &[Card], selection: &[usize]) {
    println!("--- YOUR CARDS ---");
    for (idx, card) in cards.iter().enumerate() {
        let mark = if selection.contains(&idx) { "X" } else { " " };
        println!("{idx:2}. [{mark}] {}", card_label(*card));
    }
}

fn print_played(hand: &Hand) {
    println!("=== HAND BEING PLAYED ===");
    print_value(hand.value());
    println!("Cards: {}", hand_label(hand));
}

fn print_value(value: HandValue) {
    println!("HAND: {}", value.rank());
    let rank = value.high_rank().map(|r| r.label()).unwrap_or("-");
    println!("RANK: {rank}");
    let suit = value
        .high_suit()
        .map(|s| s.to_string())
        .unwrap_or_else(|| "-".to_string());
    println!("SUIT: {suit}");
}

fn print_report(game: &Game, report: &TurnReport) {
    let nickname = game.player(report.seat).nickname();
    if report.played.is_none() {
        println!("{nickname} passes");
    }

    if report.new_round {
        println!("\n=== New Round ===");
    }
}

fn print_counts(game: &Game) {
    println!("\n=== Card Counts ===");
    for player in game.players() {
        println!("{}: {} cards", player.nickname(), player.cards().len());
    }
    println!("===================");
}

/// A card label with red hearts and diamonds.
fn card_label(card: Card) -> String {
    match card.suit() {
        Suit::Hearts | Suit::Diamonds => card.to_string().red().to_string(),
        Suit::Clubs | Suit::Spades => card.to_string(),
    }
}

fn hand_label(hand: &Hand) -> String {
    hand.cards()
        .iter()
        .map(|&c| card_label(c))
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selection_parsing() {
        assert_eq!(parse_selection("2 0 1", 5), Some(vec![0, 1, 2]));
        assert_eq!(parse_selection(" 3  3 ", 5), Some(vec![3]));
        assert_eq!(parse_selection("7", 5), None);
        assert_eq!(parse_selection("one", 5), None);
    }
}
