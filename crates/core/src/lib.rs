// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Bigtwo core game types.
//!
//! This crate defines the players and the round engine that drives a
//! game: dealing, the rotating turn order, the played-hand history, pass
//! counting, and win detection.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
pub mod game;
pub mod player;

// Reexport cards and eval types.
pub use bigtwo_cards::{Card, Deck, DeckError, InvalidCard, Rank, Suit};
pub use bigtwo_eval::{Hand, HandRank, HandValue, is_legal};
