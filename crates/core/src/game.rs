// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! The round engine.
//!
//! Runs the turn-based loop of a game: players act in a rotating queue,
//! each turn either plays a hand that beats the standing one or passes.
//! When every other player passes in a row the table clears and the last
//! player to have played leads a new round; the first player to empty
//! their storage wins.
use anyhow::{Result, bail};
use log::info;
use rand::Rng;
use std::collections::VecDeque;

use bigtwo_cards::{Card, Deck, Rank, Suit};
use bigtwo_eval::{Hand, HandValue, is_legal};

use crate::player::Player;

/// A player turn decision.
#[derive(Debug, Clone)]
pub enum Action {
    /// Play the given cards over the standing hand.
    Play(Hand),
    /// Forfeit the turn.
    Pass,
}

/// What a committed turn did.
#[derive(Debug, Clone)]
pub struct TurnReport {
    /// The seat that acted.
    pub seat: usize,
    /// The value of the played hand, `None` for a pass.
    pub played: Option<HandValue>,
    /// The table was cleared and a new round starts.
    pub new_round: bool,
    /// The seat that won the game by emptying its storage.
    pub winner: Option<usize>,
}

/// A game of Bigtwo.
#[derive(Debug)]
pub struct Game {
    players: Vec<Player>,
    turn: VecDeque<usize>,
    history: Vec<Hand>,
    passes: usize,
    last_seat: Option<usize>,
    winner: Option<usize>,
}

impl Game {
    /// Cards dealt to each player.
    pub const CARDS_PER_PLAYER: usize = 13;

    /// Deals a new game.
    ///
    /// Each player receives 13 cards from a shuffled deck and the holder
    /// of the 3♣ takes the first turn.
    pub fn new<R: Rng>(mut players: Vec<Player>, rng: &mut R) -> Result<Self> {
        if !(2..=4).contains(&players.len()) {
            bail!("the game needs 2 to 4 players, got {}", players.len());
        }

        let mut deck = Deck::new_and_shuffled(rng);
        for _ in 0..Self::CARDS_PER_PLAYER {
            for player in players.iter_mut() {
                let card = deck.deal()?;
                player.cards_mut().push(card);
            }
        }

        for player in players.iter_mut() {
            player.cards_mut().sort();
        }

        Ok(Self::seated(players))
    }

    /// Seats already-dealt players, the 3♣ holder first.
    fn seated(players: Vec<Player>) -> Self {
        let opener = Card::new(Rank::Trey, Suit::Clubs);
        let first = players
            .iter()
            .position(|p| p.cards().contains(opener))
            .unwrap_or(0);

        let mut turn = (0..players.len()).collect::<VecDeque<_>>();
        turn.rotate_left(first);

        Self {
            players,
            turn,
            history: Vec::new(),
            passes: 0,
            last_seat: None,
            winner: None,
        }
    }

    /// The seated players.
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// The player at the given seat.
    pub fn player(&self, seat: usize) -> &Player {
        &self.players[seat]
    }

    /// The seat whose turn it is.
    pub fn current_seat(&self) -> usize {
        *self.turn.front().expect("the turn queue is never empty")
    }

    /// The hand to beat, `None` when a round opens.
    pub fn standing(&self) -> Option<&Hand> {
        self.history.last()
    }

    /// The winning seat, if any.
    pub fn winner(&self) -> Option<usize> {
        self.winner
    }

    /// Checks if the game has ended.
    pub fn is_over(&self) -> bool {
        self.winner.is_some()
    }

    /// Commits the current player's turn.
    ///
    /// Rejected actions leave the game untouched so the caller can ask
    /// the player again.
    pub fn apply(&mut self, action: Action) -> Result<TurnReport> {
        if self.is_over() {
            bail!("the game is over");
        }

        let seat = self.current_seat();
        match action {
            Action::Play(hand) => self.play(seat, hand),
            Action::Pass => self.pass(seat),
        }
    }

    fn play(&mut self, seat: usize, hand: Hand) -> Result<TurnReport> {
        if hand.is_empty() {
            bail!("a play needs at least one card");
        }

        if !self.players[seat].holds(hand.cards()) {
            bail!("the selection includes cards the player does not hold");
        }

        if !is_legal(&hand, self.standing()) {
            if self.history.is_empty() {
                bail!("not a valid opening combination");
            } else {
                bail!("must match the standing hand and beat its rank");
            }
        }

        let value = hand.value();
        for &card in hand.cards() {
            self.players[seat].cards_mut().remove(card);
        }

        self.history.push(hand);
        self.passes = 0;
        self.last_seat = Some(seat);

        if self.players[seat].cards().is_empty() {
            self.winner = Some(seat);
            info!("{} wins the game", self.players[seat].nickname());
        }

        self.rotate();

        Ok(TurnReport {
            seat,
            played: Some(value),
            new_round: false,
            winner: self.winner,
        })
    }

    fn pass(&mut self, seat: usize) -> Result<TurnReport> {
        self.passes += 1;
        self.rotate();

        // All other players passed, clear the table and let the last
        // player to have played lead the new round.
        let new_round = self.passes >= self.players.len() - 1;
        if new_round {
            self.history.clear();
            self.passes = 0;

            if let Some(last) = self.last_seat {
                while self.current_seat() != last {
                    self.rotate();
                }
                info!("new round, {} leads", self.players[last].nickname());
            }
        }

        Ok(TurnReport {
            seat,
            played: None,
            new_round,
            winner: None,
        })
    }

    fn rotate(&mut self) {
        if let Some(seat) = self.turn.pop_front() {
            self.turn.push_back(seat);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bigtwo_eval::HandRank;
    use rand::{SeedableRng, rngs::StdRng};

    fn card(rank: Rank, suit: Suit) -> Card {
        Card::new(rank, suit)
    }

    fn player(nickname: &str, cards: &[Card]) -> Player {
        let mut player = Player::new(nickname, true);
        player.cards_mut().extend(cards.iter().copied());
        player
    }

    fn pair(rank: Rank) -> Hand {
        [card(rank, Suit::Clubs), card(rank, Suit::Spades)]
            .into_iter()
            .collect()
    }

    #[test]
    fn deal_gives_thirteen_cards_each() {
        let mut rng = StdRng::seed_from_u64(42);
        let players = vec![
            Player::new("P1", false),
            Player::new("P2", true),
            Player::new("P3", true),
            Player::new("P4", true),
        ];

        let game = Game::new(players, &mut rng).unwrap();
        for player in game.players() {
            assert_eq!(player.cards().len(), Game::CARDS_PER_PLAYER);
        }

        // The 3♣ holder takes the first turn.
        let opener = card(Rank::Trey, Suit::Clubs);
        assert!(game.player(game.current_seat()).cards().contains(opener));
    }

    #[test]
    fn rejects_bad_player_counts() {
        let mut rng = StdRng::seed_from_u64(42);
        assert!(Game::new(vec![Player::new("P1", false)], &mut rng).is_err());

        let players = (0..5)
            .map(|i| Player::new(format!("P{i}"), true))
            .collect::<Vec<_>>();
        assert!(Game::new(players, &mut rng).is_err());
    }

    #[test]
    fn play_moves_cards_to_the_table() {
        let players = vec![
            player("P1", pair(Rank::Seven).cards()),
            player("P2", pair(Rank::Nine).cards()),
        ];
        let mut game = Game::seated(players);

        let seat = game.current_seat();
        let report = game.apply(Action::Play(pair(Rank::Seven))).unwrap();
        assert_eq!(report.seat, seat);
        assert_eq!(report.played.map(|v| v.rank()), Some(HandRank::Pair));

        // The cards left the player's storage and sit on the table.
        assert!(game.player(seat).cards().is_empty());
        assert_eq!(game.standing().map(|h| h.len()), Some(2));

        // Emptying the storage wins.
        assert_eq!(report.winner, Some(seat));
        assert!(game.is_over());
    }

    #[test]
    fn rejects_cards_not_held() {
        let players = vec![
            player("P1", pair(Rank::Seven).cards()),
            player("P2", pair(Rank::Nine).cards()),
        ];
        let mut game = Game::seated(players);

        let err = game.apply(Action::Play(pair(Rank::Jack))).unwrap_err();
        assert!(err.to_string().contains("does not hold"));

        // The rejected turn changed nothing.
        assert_eq!(game.player(game.current_seat()).cards().len(), 2);
        assert!(game.standing().is_none());
    }

    #[test]
    fn rejects_weaker_response() {
        let mut cards = pair(Rank::Seven).cards().to_vec();
        cards.push(card(Rank::Trey, Suit::Clubs));
        let players = vec![
            player("P1", &cards),
            player("P2", pair(Rank::Five).cards()),
        ];
        let mut game = Game::seated(players);

        game.apply(Action::Play(pair(Rank::Seven))).unwrap();
        let err = game.apply(Action::Play(pair(Rank::Five))).unwrap_err();
        assert!(err.to_string().contains("beat"));
    }

    #[test]
    fn passes_clear_the_table() {
        let mut p1_cards = pair(Rank::Seven).cards().to_vec();
        p1_cards.push(card(Rank::Trey, Suit::Clubs));
        let players = vec![
            player("P1", &p1_cards),
            player("P2", pair(Rank::Nine).cards()),
            player("P3", pair(Rank::Jack).cards()),
        ];
        let mut game = Game::seated(players);
        let leader = game.current_seat();

        game.apply(Action::Play(pair(Rank::Seven))).unwrap();

        let report = game.apply(Action::Pass).unwrap();
        assert!(!report.new_round);
        assert!(game.standing().is_some());

        // The second pass in a row clears the table and hands the lead
        // back to the player of the standing hand.
        let report = game.apply(Action::Pass).unwrap();
        assert!(report.new_round);
        assert!(game.standing().is_none());
        assert_eq!(game.current_seat(), leader);
    }

    #[test]
    fn pass_counter_resets_on_a_play() {
        let players = vec![
            player("P1", pair(Rank::Seven).cards()),
            player("P2", pair(Rank::Nine).cards()),
            player("P3", pair(Rank::Jack).cards()),
        ];
        let mut game = Game::seated(players);

        game.apply(Action::Pass).unwrap();
        game.apply(Action::Play(pair(Rank::Nine))).unwrap();
        game.apply(Action::Pass).unwrap();

        // One pass since the last play, the table must still stand.
        assert!(game.standing().is_some());
    }
}
