// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Game player data.
use bigtwo_cards::{Card, Deck};

/// A seated player and the cards they hold.
#[derive(Debug, Clone)]
pub struct Player {
    nickname: String,
    is_bot: bool,
    cards: Deck,
}

impl Player {
    /// Creates a player with no cards.
    pub fn new(nickname: impl Into<String>, is_bot: bool) -> Self {
        Self {
            nickname: nickname.into(),
            is_bot,
            cards: Deck::empty(),
        }
    }

    /// This player nickname.
    pub fn nickname(&self) -> &str {
        &self.nickname
    }

    /// Checks if this player is automated.
    pub fn is_bot(&self) -> bool {
        self.is_bot
    }

    /// This player card storage.
    pub fn cards(&self) -> &Deck {
        &self.cards
    }

    /// Mutable access to this player card storage.
    pub fn cards_mut(&mut self) -> &mut Deck {
        &mut self.cards
    }

    /// Checks if this player holds every given card, duplicates counted.
    pub fn holds(&self, cards: &[Card]) -> bool {
        let mut pool = self.cards.clone();
        cards.iter().all(|&card| {
            let held = pool.contains(card);
            if held {
                pool.remove(card);
            }
            held
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bigtwo_cards::{Rank, Suit};

    #[test]
    fn holds_counts_duplicates() {
        let c = Card::new(Rank::Nine, Suit::Hearts);

        let mut player = Player::new("Alice", true);
        player.cards_mut().push(c);

        assert!(player.holds(&[c]));
        // One copy in storage cannot cover two requests.
        assert!(!player.holds(&[c, c]));
        assert!(!player.holds(&[Card::new(Rank::Nine, Suit::Clubs)]));
    }
}
