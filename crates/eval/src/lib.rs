// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Bigtwo hand evaluator.
//!
//! Classifies a set of cards into one of the game's eleven hand classes
//! and derives the values used to compare hands. To evaluate a hand use
//! [HandValue::eval]:
//!
//! ```
//! # use bigtwo_eval::*;
//! let cards = [
//!     Card::new(Rank::Nine, Suit::Hearts),
//!     Card::new(Rank::Nine, Suit::Spades),
//! ];
//! let value = HandValue::eval(&cards);
//! assert_eq!(value.rank(), HandRank::Pair);
//! assert_eq!(value.high_rank(), Some(Rank::Nine));
//! ```
//!
//! [HandValue] values order by hand class first, then by the tie-break
//! rank, then by the dominant suit:
//!
//! ```
//! # use bigtwo_eval::*;
//! let pair = |rank| {
//!     HandValue::eval(&[
//!         Card::new(rank, Suit::Hearts),
//!         Card::new(rank, Suit::Spades),
//!     ])
//! };
//! assert!(pair(Rank::Deuce) > pair(Rank::Ace));
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
pub mod eval;
pub use eval::{HandRank, HandValue};

mod hand;
pub use hand::{Hand, is_legal};

// Reexport cards types.
pub use bigtwo_cards::{Card, Deck, Rank, Suit};
