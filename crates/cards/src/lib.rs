// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Bigtwo playing cards types.
//!
//! This crate defines the card types used by the game:
//!
//! ```
//! # use bigtwo_cards::{Card, Rank, Suit};
//! let td = Card::new(Rank::Trey, Suit::Diamonds);
//! let dh = Card::new(Rank::Deuce, Suit::Hearts);
//! assert!(td.rank() < dh.rank());
//! ```
//!
//! Ranks order by play strength rather than face value, the trey is the
//! weakest card and the deuce the strongest:
//!
//! ```
//! # use bigtwo_cards::Rank;
//! assert!(Rank::Ace < Rank::Deuce);
//! assert!(Rank::Trey < Rank::Four);
//! ```
//!
//! and a [Deck] type used both for dealing and as a player's card storage:
//!
//! ```
//! # use bigtwo_cards::{Card, Deck, Rank, Suit};
//! let mut deck = Deck::new_and_shuffled(&mut rand::rng());
//! let mut storage = Deck::empty();
//! for _ in 0..13 {
//!     storage.push(deck.deal().unwrap());
//! }
//! assert_eq!(storage.len(), 13);
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
mod deck;
pub use deck::{Card, Deck, DeckError, InvalidCard, Rank, Suit};
