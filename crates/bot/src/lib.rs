// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Bigtwo automated player.
//!
//! Searches a player's cards for the best combination to play and
//! decides when to pass. The [Strategy] trait lets the front end drive
//! any automated policy; [Greedy] implements the house bot.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
pub mod search;

mod strategy;
pub use strategy::{Greedy, Strategy, should_pass};
