// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Hand classification.
//!
//! A hand classifies into one of eleven classes evaluated from the
//! strongest down, the first class whose predicate holds wins. Each
//! class also derives a tie-break rank and a dominant suit used to
//! order hands of the same class.
use ahash::AHashMap;
use serde::{Deserialize, Serialize};
use std::fmt;

use bigtwo_cards::{Card, Rank, Suit};

/// The class of a hand, from no valid combination up to a royal flush.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum HandRank {
    /// No valid combination, an empty or unplayable set of cards.
    Skip = 0,
    /// A single card.
    HighCard,
    /// Two cards of one rank.
    Pair,
    /// Two pairs of different ranks.
    TwoPair,
    /// Three cards of one rank.
    ThreeOfAKind,
    /// Five cards in rank sequence.
    Straight,
    /// Five cards of one suit.
    Flush,
    /// Three of a kind plus a pair.
    FullHouse,
    /// Four cards of one rank plus a kicker.
    FourOfAKind,
    /// A straight in a single suit.
    StraightFlush,
    /// An ace-topped straight flush.
    RoyalFlush,
}

impl HandRank {
    /// Returns all hand classes from weakest to strongest.
    pub fn ranks() -> impl DoubleEndedIterator<Item = HandRank> {
        use HandRank::*;
        [
            Skip,
            HighCard,
            Pair,
            TwoPair,
            ThreeOfAKind,
            Straight,
            Flush,
            FullHouse,
            FourOfAKind,
            StraightFlush,
            RoyalFlush,
        ]
        .into_iter()
    }

    /// The number of cards this class is played with, `None` for [Skip].
    ///
    /// [Skip]: HandRank::Skip
    pub fn size(self) -> Option<usize> {
        match self {
            HandRank::Skip => None,
            HandRank::HighCard => Some(1),
            HandRank::Pair => Some(2),
            HandRank::ThreeOfAKind => Some(3),
            HandRank::TwoPair => Some(4),
            HandRank::Straight
            | HandRank::Flush
            | HandRank::FullHouse
            | HandRank::FourOfAKind
            | HandRank::StraightFlush
            | HandRank::RoyalFlush => Some(5),
        }
    }

    /// This class name.
    pub fn name(self) -> &'static str {
        match self {
            HandRank::Skip => "Skip",
            HandRank::HighCard => "High Card",
            HandRank::Pair => "Pair",
            HandRank::TwoPair => "Two Pair",
            HandRank::ThreeOfAKind => "Three Of A Kind",
            HandRank::Straight => "Straight",
            HandRank::Flush => "Flush",
            HandRank::FullHouse => "Full House",
            HandRank::FourOfAKind => "Four Of A Kind",
            HandRank::StraightFlush => "Straight Flush",
            HandRank::RoyalFlush => "Royal Flush",
        }
    }

    /// This class strength tier, 0 for [Skip] up to 10 for [RoyalFlush].
    ///
    /// [Skip]: HandRank::Skip
    /// [RoyalFlush]: HandRank::RoyalFlush
    pub fn tier(self) -> u8 {
        self as u8
    }
}

impl fmt::Display for HandRank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// The value of a classified hand.
///
/// Two hands compare by class first, then by the tie-break rank, then by
/// the dominant suit; the field order drives the derived ordering. Hands
/// with the same triple are equal no matter which cards produced them.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct HandValue {
    rank: HandRank,
    high_rank: Option<Rank>,
    high_suit: Option<Suit>,
}

impl HandValue {
    /// Evaluates a set of cards.
    ///
    /// Total over any well-formed set of 0 to 13 cards; sets that form
    /// no valid combination evaluate to [HandRank::Skip].
    pub fn eval(cards: &[Card]) -> HandValue {
        let mut rank_counts: AHashMap<Rank, u8> = AHashMap::new();
        let mut suit_counts: AHashMap<Suit, u8> = AHashMap::new();
        for card in cards {
            *rank_counts.entry(card.rank()).or_default() += 1;
            *suit_counts.entry(card.suit()).or_default() += 1;
        }

        let rank = hand_rank(cards.len(), &rank_counts, &suit_counts);
        let high_suit = dominant_suit(&suit_counts);
        let high_rank = high_rank(rank, cards, &rank_counts, high_suit);

        HandValue {
            rank,
            high_rank,
            high_suit,
        }
    }

    /// The hand class.
    pub fn rank(&self) -> HandRank {
        self.rank
    }

    /// The rank used to compare hands of the same class.
    pub fn high_rank(&self) -> Option<Rank> {
        self.high_rank
    }

    /// The dominant suit, the final comparison tie-break.
    pub fn high_suit(&self) -> Option<Suit> {
        self.high_suit
    }
}

impl fmt::Display for HandValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.rank)?;
        if let Some(rank) = self.high_rank {
            write!(f, " {rank}")?;
        }
        if let Some(suit) = self.high_suit {
            write!(f, " {suit}")?;
        }
        Ok(())
    }
}

/// Classifies a hand from its size and rank/suit occurrence counts.
fn hand_rank(
    size: usize,
    rank_counts: &AHashMap<Rank, u8>,
    suit_counts: &AHashMap<Suit, u8>,
) -> HandRank {
    let flush = size == 5 && suit_counts.len() == 1;
    let straight = size == 5 && is_run(rank_counts);

    if flush && straight {
        // The ace, not the deuce, caps a royal flush.
        if rank_counts.keys().max() == Some(&Rank::Ace) {
            HandRank::RoyalFlush
        } else {
            HandRank::StraightFlush
        }
    } else if size == 5 && has_count(rank_counts, 4) {
        HandRank::FourOfAKind
    } else if size == 5 && has_count(rank_counts, 3) && has_count(rank_counts, 2) {
        HandRank::FullHouse
    } else if flush {
        HandRank::Flush
    } else if straight {
        HandRank::Straight
    } else if size == 3 && has_count(rank_counts, 3) {
        HandRank::ThreeOfAKind
    } else if size == 4 && rank_counts.values().filter(|&&n| n == 2).count() == 2 {
        HandRank::TwoPair
    } else if size == 2 && has_count(rank_counts, 2) {
        HandRank::Pair
    } else if size == 1 {
        HandRank::HighCard
    } else {
        HandRank::Skip
    }
}

/// Checks if the ranks form five distinct consecutive strength indices.
///
/// Runs never wrap past the trey or the deuce.
fn is_run(rank_counts: &AHashMap<Rank, u8>) -> bool {
    if rank_counts.len() != 5 {
        return false;
    }

    let min = rank_counts.keys().min().map(|r| r.index()).unwrap_or(0);
    let max = rank_counts.keys().max().map(|r| r.index()).unwrap_or(0);
    max - min == 4
}

fn has_count(rank_counts: &AHashMap<Rank, u8>, count: u8) -> bool {
    rank_counts.values().any(|&n| n == count)
}

/// The suit with the most cards, ties broken by the higher suit.
fn dominant_suit(suit_counts: &AHashMap<Suit, u8>) -> Option<Suit> {
    suit_counts
        .iter()
        .max_by_key(|(suit, count)| (**count, **suit))
        .map(|(suit, _)| *suit)
}

/// The tie-break rank for a classified hand.
fn high_rank(
    rank: HandRank,
    cards: &[Card],
    rank_counts: &AHashMap<Rank, u8>,
    high_suit: Option<Suit>,
) -> Option<Rank> {
    match rank {
        HandRank::Skip => None,
        // The strongest card in the hand.
        HandRank::HighCard
        | HandRank::Straight
        | HandRank::StraightFlush
        | HandRank::RoyalFlush => rank_counts.keys().max().copied(),
        // The strongest repeated rank, for two pair and full house the
        // higher grouping.
        HandRank::Pair
        | HandRank::TwoPair
        | HandRank::ThreeOfAKind
        | HandRank::FullHouse
        | HandRank::FourOfAKind => rank_counts
            .iter()
            .filter(|&(_, &n)| n > 1)
            .map(|(rank, _)| *rank)
            .max(),
        // The strongest card within the dominant suit.
        HandRank::Flush => cards
            .iter()
            .filter(|c| Some(c.suit()) == high_suit)
            .map(|c| c.rank())
            .max(),
    }
}
