// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Cards and deck definitions.
use rand::prelude::*;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// A card built from indices outside the valid ranges.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("invalid card (rank={rank}, suit={suit})")]
pub struct InvalidCard {
    /// The rejected rank index.
    pub rank: u8,
    /// The rejected suit index.
    pub suit: u8,
}

/// Errors returned by deck operations.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum DeckError {
    /// An operation that needs at least one card ran on an empty deck.
    #[error("the deck is empty")]
    Empty,
    /// A selection referenced a position beyond the deck size.
    #[error("card index {index} out of range (deck size {len})")]
    OutOfRange {
        /// The rejected index.
        index: usize,
        /// The deck size at the time of the call.
        len: usize,
    },
}

/// Card rank in play strength order.
///
/// Strength does not follow face value: the trey is the weakest rank and
/// the deuce the strongest, with the ace just below it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Rank {
    /// Trey, the weakest rank.
    Trey = 1,
    /// Four
    Four,
    /// Five
    Five,
    /// Six
    Six,
    /// Seven
    Seven,
    /// Eight
    Eight,
    /// Nine
    Nine,
    /// Ten
    Ten,
    /// Jack
    Jack,
    /// Queen
    Queen,
    /// King
    King,
    /// Ace
    Ace,
    /// Deuce, the strongest rank.
    Deuce,
}

impl Rank {
    /// Returns all ranks from weakest to strongest.
    pub fn ranks() -> impl DoubleEndedIterator<Item = Rank> {
        use Rank::*;
        [
            Trey, Four, Five, Six, Seven, Eight, Nine, Ten, Jack, Queen, King, Ace, Deuce,
        ]
        .into_iter()
    }

    /// This rank strength index, 1 for the trey up to 13 for the deuce.
    pub fn index(self) -> u8 {
        self as u8
    }

    /// Returns the rank with the given strength index.
    pub fn from_index(index: u8) -> Option<Rank> {
        Self::ranks().find(|r| r.index() == index)
    }

    /// The face label for this rank.
    pub fn label(self) -> &'static str {
        match self {
            Rank::Trey => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "J",
            Rank::Queen => "Q",
            Rank::King => "K",
            Rank::Ace => "A",
            Rank::Deuce => "2",
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Card suit.
///
/// Suits carry no play strength, the ordering is only used as a final
/// comparison tie-break and for sorted display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Suit {
    /// Clubs suit.
    Clubs = 1,
    /// Spades suit.
    Spades,
    /// Hearts suit.
    Hearts,
    /// Diamonds suit.
    Diamonds,
}

impl Suit {
    /// Returns all suits in display order.
    pub fn suits() -> impl DoubleEndedIterator<Item = Suit> {
        [Suit::Clubs, Suit::Spades, Suit::Hearts, Suit::Diamonds].into_iter()
    }

    /// This suit index, 1 for clubs up to 4 for diamonds.
    pub fn index(self) -> u8 {
        self as u8
    }

    /// Returns the suit with the given index.
    pub fn from_index(index: u8) -> Option<Suit> {
        Self::suits().find(|s| s.index() == index)
    }

    /// The symbol for this suit.
    pub fn symbol(self) -> char {
        match self {
            Suit::Clubs => '♣',
            Suit::Spades => '♠',
            Suit::Hearts => '♥',
            Suit::Diamonds => '♦',
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// A playing card.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    rank: Rank,
    suit: Suit,
}

impl Card {
    /// Creates a card given a rank and a suit.
    pub fn new(rank: Rank, suit: Suit) -> Card {
        Self { rank, suit }
    }

    /// Creates a card from a rank index and a suit index.
    ///
    /// Fails without building a card if either index is out of range.
    pub fn from_indices(rank: u8, suit: u8) -> Result<Card, InvalidCard> {
        match (Rank::from_index(rank), Suit::from_index(suit)) {
            (Some(rank), Some(suit)) => Ok(Self { rank, suit }),
            _ => Err(InvalidCard { rank, suit }),
        }
    }

    /// Returns the card rank.
    pub fn rank(&self) -> Rank {
        self.rank
    }

    /// Returns the card suit.
    pub fn suit(&self) -> Suit {
        self.suit
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank, self.suit)
    }
}

impl fmt::Debug for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Card({}{})", self.rank, self.suit)
    }
}

/// An ordered collection of cards.
///
/// Used both as the dealing deck and as a player's card storage.
#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// The number of cards in a full deck.
    pub const SIZE: usize = 52;

    /// Creates an empty deck.
    pub fn empty() -> Self {
        Self { cards: Vec::new() }
    }

    /// Creates a new shuffled full deck.
    pub fn new_and_shuffled<R: Rng>(rng: &mut R) -> Self {
        let mut deck = Self::default();
        deck.cards.shuffle(rng);
        deck
    }

    /// Shuffles the deck.
    pub fn shuffle<R: Rng>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
    }

    /// Sorts the deck by suit then by rank strength.
    pub fn sort(&mut self) {
        self.cards.sort_by_key(|c| (c.suit(), c.rank()));
    }

    /// Deals the top card from the deck.
    pub fn deal(&mut self) -> Result<Card, DeckError> {
        self.cards.pop().ok_or(DeckError::Empty)
    }

    /// Takes the card at the given position.
    pub fn take_at(&mut self, index: usize) -> Result<Card, DeckError> {
        if self.cards.is_empty() {
            Err(DeckError::Empty)
        } else if index >= self.cards.len() {
            Err(DeckError::OutOfRange {
                index,
                len: self.cards.len(),
            })
        } else {
            Ok(self.cards.remove(index))
        }
    }

    /// Takes the cards at the given positions.
    ///
    /// Duplicate indices collapse to a single selection. If any index is
    /// out of range no card is removed. The cards are returned in deck
    /// order.
    pub fn take_selection(&mut self, selection: &[usize]) -> Result<Vec<Card>, DeckError> {
        if self.cards.is_empty() {
            return Err(DeckError::Empty);
        }

        let mut indices = selection.to_vec();
        indices.sort_unstable();
        indices.dedup();

        if let Some(&index) = indices.iter().find(|&&i| i >= self.cards.len()) {
            return Err(DeckError::OutOfRange {
                index,
                len: self.cards.len(),
            });
        }

        // Remove from the highest index down so lower indices stay valid.
        let mut taken = indices
            .iter()
            .rev()
            .map(|&i| self.cards.remove(i))
            .collect::<Vec<_>>();
        taken.reverse();
        Ok(taken)
    }

    /// Removes one card matching the given card, a no-op if not found.
    pub fn remove(&mut self, card: Card) {
        if let Some(pos) = self.cards.iter().position(|c| c == &card) {
            self.cards.remove(pos);
        }
    }

    /// Places a card into the deck.
    pub fn push(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Places cards into the deck.
    pub fn extend<I: IntoIterator<Item = Card>>(&mut self, cards: I) {
        self.cards.extend(cards);
    }

    /// The cards in deck order.
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Checks if the deck holds the given card.
    pub fn contains(&self, card: Card) -> bool {
        self.cards.contains(&card)
    }

    /// Checks if the deck is empty.
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Number of cards in the deck.
    pub fn len(&self) -> usize {
        self.cards.len()
    }
}

impl Default for Deck {
    /// The full 52-card deck in suit and rank order.
    fn default() -> Self {
        let cards = Suit::suits()
            .flat_map(|s| Rank::ranks().map(move |r| Card::new(r, s)))
            .collect::<Vec<_>>();
        Self { cards }
    }
}

impl IntoIterator for Deck {
    type Item = Card;
    type IntoIter = std::vec::IntoIter<Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.into_iter()
    }
}

impl FromIterator<Card> for Deck {
    fn from_iter<I: IntoIterator<Item = Card>>(iter: I) -> Self {
        Self {
            cards: iter.into_iter().collect(),
        }
    }
}
