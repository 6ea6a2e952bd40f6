// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Automated player policy.
use log::debug;

use bigtwo_core::{Card, Hand, HandRank, HandValue, game::Action};

use crate::search;

/// Cards-left threshold at and below which the bot plays aggressively.
const AGGRESSIVE_CARD_COUNT: usize = 3;

/// Standing classes the bot never challenges while holding many cards.
const VERY_STRONG_RANK: HandRank = HandRank::FourOfAKind;

/// Standing classes worth waiting out with a large storage.
const MODERATE_RANK: HandRank = HandRank::Straight;

/// A turn policy for an automated player.
pub trait Strategy {
    /// Decides an action given the player's cards and the hand to beat.
    fn decide(&mut self, pool: &[Card], standing: Option<&Hand>) -> Action;
}

/// Decides if the bot should forfeit the turn.
///
/// Never with three or fewer cards left; otherwise against a very
/// strong standing hand, or a moderate one while still holding more
/// than five cards.
pub fn should_pass(remaining: usize, standing: &HandValue) -> bool {
    if remaining <= AGGRESSIVE_CARD_COUNT {
        return false;
    }

    if standing.rank() >= VERY_STRONG_RANK {
        return true;
    }

    remaining > 5 && standing.rank() >= MODERATE_RANK
}

/// The house bot.
///
/// Opens with the combination that sheds the most cards, answers with
/// the highest qualifying hand, and consults [should_pass] before
/// attempting an endgame push.
#[derive(Debug, Clone, Default)]
pub struct Greedy;

impl Strategy for Greedy {
    fn decide(&mut self, pool: &[Card], standing: Option<&Hand>) -> Action {
        let Some(standing) = standing else {
            return match search::best_opening(pool) {
                Some(hand) => {
                    debug!("opening with {} ({})", hand, hand.value());
                    Action::Play(hand)
                }
                None => Action::Pass,
            };
        };

        if let Some(hand) = search::best_response(pool, standing) {
            debug!("responding with {} ({})", hand, hand.value());
            return Action::Play(hand);
        }

        let standing_value = standing.value();
        if should_pass(pool.len(), &standing_value) {
            debug!("passing on {}", standing_value);
            return Action::Pass;
        }

        // Down to a few cards, try to shed the whole pool: the opening
        // search result counts only if it fits the standing shape and
        // beats it.
        if pool.len() <= AGGRESSIVE_CARD_COUNT {
            if let Some(hand) = search::best_opening(pool) {
                let value = hand.value();
                if value.rank() == standing_value.rank()
                    && hand.len() == standing.len()
                    && value.high_rank() > standing_value.high_rank()
                {
                    debug!("aggressive play {} ({value})", hand);
                    return Action::Play(hand);
                }
            }
        }

        Action::Pass
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bigtwo_core::{Rank, Suit};

    fn cards(defs: &[(Rank, Suit)]) -> Vec<Card> {
        defs.iter().map(|&(r, s)| Card::new(r, s)).collect()
    }

    fn hand(defs: &[(Rank, Suit)]) -> Hand {
        cards(defs).into_iter().collect()
    }

    fn value(defs: &[(Rank, Suit)]) -> HandValue {
        hand(defs).value()
    }

    #[test]
    fn never_passes_with_few_cards() {
        let quads = value(&[
            (Rank::Ace, Suit::Clubs),
            (Rank::Ace, Suit::Spades),
            (Rank::Ace, Suit::Hearts),
            (Rank::Ace, Suit::Diamonds),
            (Rank::Five, Suit::Clubs),
        ]);

        assert!(!should_pass(3, &quads));
        assert!(should_pass(4, &quads));
    }

    #[test]
    fn passes_on_moderate_hands_with_a_full_storage() {
        let straight = value(&[
            (Rank::Four, Suit::Clubs),
            (Rank::Five, Suit::Hearts),
            (Rank::Six, Suit::Spades),
            (Rank::Seven, Suit::Diamonds),
            (Rank::Eight, Suit::Clubs),
        ]);

        assert!(should_pass(6, &straight));
        assert!(!should_pass(5, &straight));

        let pair = value(&[(Rank::Nine, Suit::Clubs), (Rank::Nine, Suit::Hearts)]);
        assert!(!should_pass(10, &pair));
    }

    #[test]
    fn opens_when_leading() {
        let pool = cards(&[
            (Rank::Six, Suit::Clubs),
            (Rank::Six, Suit::Hearts),
            (Rank::Jack, Suit::Spades),
        ]);

        match Greedy.decide(&pool, None) {
            Action::Play(hand) => assert_eq!(hand.value().rank(), HandRank::Pair),
            Action::Pass => panic!("expected an opening play"),
        }
    }

    #[test]
    fn responds_with_the_best_qualifying_hand() {
        let standing = hand(&[(Rank::Seven, Suit::Clubs), (Rank::Seven, Suit::Hearts)]);
        let pool = cards(&[
            (Rank::Ten, Suit::Clubs),
            (Rank::Ten, Suit::Hearts),
            (Rank::Five, Suit::Clubs),
            (Rank::Five, Suit::Spades),
            (Rank::Nine, Suit::Clubs),
            (Rank::Four, Suit::Hearts),
        ]);

        match Greedy.decide(&pool, Some(&standing)) {
            Action::Play(hand) => {
                assert_eq!(hand.value().high_rank(), Some(Rank::Ten));
            }
            Action::Pass => panic!("expected a response"),
        }
    }

    #[test]
    fn passes_on_a_strong_standing_hand() {
        let standing = hand(&[
            (Rank::Nine, Suit::Clubs),
            (Rank::Nine, Suit::Spades),
            (Rank::Nine, Suit::Hearts),
            (Rank::Nine, Suit::Diamonds),
            (Rank::Four, Suit::Clubs),
        ]);

        // Seven cards, nothing that answers quads: pass.
        let pool = cards(&[
            (Rank::Five, Suit::Clubs),
            (Rank::Five, Suit::Spades),
            (Rank::Six, Suit::Hearts),
            (Rank::Seven, Suit::Clubs),
            (Rank::Eight, Suit::Diamonds),
            (Rank::Jack, Suit::Clubs),
            (Rank::Queen, Suit::Hearts),
        ]);

        assert!(matches!(Greedy.decide(&pool, Some(&standing)), Action::Pass));
    }

    #[test]
    fn endgame_single_still_answers() {
        let standing = hand(&[(Rank::Nine, Suit::Clubs)]);

        // One card left and it beats the standing single.
        let pool = cards(&[(Rank::Deuce, Suit::Hearts)]);
        match Greedy.decide(&pool, Some(&standing)) {
            Action::Play(hand) => {
                assert_eq!(hand.value().high_rank(), Some(Rank::Deuce));
            }
            Action::Pass => panic!("expected the last card to play"),
        }

        // One card left that cannot beat it: pass, never an illegal push.
        let pool = cards(&[(Rank::Four, Suit::Hearts)]);
        assert!(matches!(Greedy.decide(&pool, Some(&standing)), Action::Pass));
    }
}
