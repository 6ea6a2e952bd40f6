// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Combination search over a card pool.
//!
//! Both search modes read a caller-supplied pool of up to 13 cards and
//! never mutate it; the caller removes the winning cards from the real
//! storage after committing the play. Candidates are built directly
//! from rank and suit buckets, which selects the same hands a full
//! subset sweep would without its exponential cost.
use ahash::AHashMap;

use bigtwo_core::{Card, Hand, HandRank, Rank, Suit};

/// Opening-mode scan order, strongest class the mode proposes first.
///
/// Straight flushes sit above the scan on purpose: their subsets
/// classify past every scanned class and are never proposed as
/// openings.
const OPENING_SCAN: [HandRank; 8] = [
    HandRank::FourOfAKind,
    HandRank::FullHouse,
    HandRank::Flush,
    HandRank::Straight,
    HandRank::ThreeOfAKind,
    HandRank::TwoPair,
    HandRank::Pair,
    HandRank::HighCard,
];

/// Finds the best hand to open a round with.
///
/// Scans the opening classes from the strongest down and keeps the
/// candidate with the most cards, ties broken by the higher tie-break
/// rank and then by the earlier, stronger class.
pub fn best_opening(pool: &[Card]) -> Option<Hand> {
    let buckets = Buckets::new(pool);

    let mut best: Option<(Hand, Option<Rank>)> = None;
    for rank in OPENING_SCAN {
        if let Some(hand) = buckets.best_of_class(rank) {
            let high_rank = hand.value().high_rank();
            let better = match &best {
                None => true,
                Some((best_hand, best_rank)) => {
                    hand.len() > best_hand.len()
                        || (hand.len() == best_hand.len() && high_rank > *best_rank)
                }
            };

            if better {
                best = Some((hand, high_rank));
            }
        }
    }

    best.map(|(hand, _)| hand)
}

/// Finds a hand that beats the standing one.
///
/// The candidate matches the standing hand's class and card count with
/// the highest tie-break rank the pool can field; `None` when even that
/// cannot beat the standing hand.
pub fn best_response(pool: &[Card], standing: &Hand) -> Option<Hand> {
    let standing_value = standing.value();
    let buckets = Buckets::new(pool);

    let candidate = buckets.best_of_class(standing_value.rank())?;
    let beats = candidate.len() == standing.len()
        && candidate.value().high_rank() > standing_value.high_rank();
    beats.then_some(candidate)
}

/// Card pool bucketed by rank and by suit.
struct Buckets {
    by_rank: AHashMap<Rank, Vec<Card>>,
    by_suit: AHashMap<Suit, Vec<Card>>,
}

impl Buckets {
    fn new(pool: &[Card]) -> Self {
        let mut by_rank: AHashMap<Rank, Vec<Card>> = AHashMap::new();
        let mut by_suit: AHashMap<Suit, Vec<Card>> = AHashMap::new();
        for &card in pool {
            by_rank.entry(card.rank()).or_default().push(card);
            by_suit.entry(card.suit()).or_default().push(card);
        }

        // Sorted groups make repeated searches pick identical cards no
        // matter how the pool was ordered.
        for cards in by_rank.values_mut() {
            cards.sort_by_key(|c| c.suit());
        }
        for cards in by_suit.values_mut() {
            cards.sort_by_key(|c| c.rank());
        }

        Self { by_rank, by_suit }
    }

    /// The best hand of the given class, `None` if the pool has none.
    fn best_of_class(&self, rank: HandRank) -> Option<Hand> {
        match rank {
            HandRank::HighCard => self.single(),
            HandRank::Pair => self.of_a_kind(2),
            HandRank::TwoPair => self.two_pair(),
            HandRank::ThreeOfAKind => self.of_a_kind(3),
            HandRank::Straight => self.straight(),
            HandRank::Flush => self.flush(),
            HandRank::FullHouse => self.full_house(),
            HandRank::FourOfAKind => self.four_of_a_kind(),
            HandRank::StraightFlush => self.straight_flush(false),
            HandRank::RoyalFlush => self.straight_flush(true),
            HandRank::Skip => None,
        }
    }

    fn rank_group(&self, rank: Rank) -> &[Card] {
        self.by_rank.get(&rank).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Ranks holding at least `count` cards, strongest first.
    fn ranks_with(&self, count: usize) -> impl Iterator<Item = Rank> + '_ {
        Rank::ranks()
            .rev()
            .filter(move |&r| self.rank_group(r).len() >= count)
    }

    fn single(&self) -> Option<Hand> {
        let rank = self.ranks_with(1).next()?;
        Some([self.rank_group(rank)[0]].into_iter().collect())
    }

    fn of_a_kind(&self, count: usize) -> Option<Hand> {
        let rank = self.ranks_with(count).next()?;
        Some(self.rank_group(rank)[..count].iter().copied().collect())
    }

    fn two_pair(&self) -> Option<Hand> {
        let mut pairs = self.ranks_with(2);
        let high = pairs.next()?;
        let low = pairs.next()?;

        let mut hand = self.rank_group(high)[..2].iter().copied().collect::<Hand>();
        hand.extend(self.rank_group(low)[..2].iter().copied());
        Some(hand)
    }

    fn full_house(&self) -> Option<Hand> {
        // Maximize the higher grouping, it carries the comparison; on a
        // tie keep the higher trips.
        let mut best: Option<(Rank, Rank)> = None;
        for trips in self.ranks_with(3) {
            for pair in self.ranks_with(2) {
                if pair == trips {
                    continue;
                }

                let key = trips.max(pair);
                if best.is_none_or(|(t, p)| key > t.max(p)) {
                    best = Some((trips, pair));
                }
            }
        }

        let (trips, pair) = best?;
        let mut hand = self.rank_group(trips)[..3]
            .iter()
            .copied()
            .collect::<Hand>();
        hand.extend(self.rank_group(pair)[..2].iter().copied());
        Some(hand)
    }

    fn four_of_a_kind(&self) -> Option<Hand> {
        let rank = self.ranks_with(4).next()?;

        // Shed the weakest card as the kicker.
        let kicker = self
            .by_rank
            .iter()
            .filter(|&(&r, _)| r != rank)
            .flat_map(|(_, cards)| cards.iter())
            .min_by_key(|c| (c.rank(), c.suit()))
            .copied()?;

        let mut hand = self.rank_group(rank).iter().copied().collect::<Hand>();
        hand.push(kicker);
        Some(hand)
    }

    fn flush(&self) -> Option<Hand> {
        let mut best: Option<(Rank, Suit, Hand)> = None;
        for (&suit, cards) in &self.by_suit {
            if cards.len() < 5 {
                continue;
            }

            // The top five of the suit, unless they run straight and
            // would classify past a flush; swapping the lowest pick for
            // the next card down always breaks the run.
            let mut picks = cards[cards.len() - 5..].to_vec();
            if is_run(&picks) {
                if cards.len() == 5 {
                    continue;
                }
                picks[0] = cards[cards.len() - 6];
            }

            let high_rank = picks[4].rank();
            if best
                .as_ref()
                .is_none_or(|(r, s, _)| (high_rank, suit) > (*r, *s))
            {
                best = Some((high_rank, suit, picks.into_iter().collect()));
            }
        }

        best.map(|(_, _, hand)| hand)
    }

    fn straight(&self) -> Option<Hand> {
        for top in Rank::ranks().rev() {
            if top.index() < 5 {
                break;
            }

            let Some(groups) = self.run_groups(top) else {
                continue;
            };

            let mut picks = groups.iter().map(|g| g[0]).collect::<Vec<_>>();

            // A single-suit pick classifies past a straight; vary one
            // card's suit, or skip a run that only exists in one suit.
            let suit = picks[0].suit();
            if picks.iter().all(|c| c.suit() == suit) {
                let alt = groups
                    .iter()
                    .enumerate()
                    .find_map(|(i, g)| g.iter().find(|c| c.suit() != suit).map(|&c| (i, c)));
                match alt {
                    Some((i, card)) => picks[i] = card,
                    None => continue,
                }
            }

            return Some(picks.into_iter().collect());
        }

        None
    }

    fn straight_flush(&self, royal: bool) -> Option<Hand> {
        let mut best: Option<(Rank, Suit, Hand)> = None;
        for (&suit, cards) in &self.by_suit {
            if cards.len() < 5 {
                continue;
            }

            for top in Rank::ranks().rev() {
                if top.index() < 5 {
                    break;
                }

                // An ace-topped run is a royal flush, any other top a
                // straight flush.
                if royal != (top == Rank::Ace) {
                    continue;
                }

                let run = (top.index() - 4..=top.index())
                    .map(|i| {
                        Rank::from_index(i)
                            .and_then(|r| cards.iter().find(|c| c.rank() == r).copied())
                    })
                    .collect::<Option<Vec<_>>>();

                if let Some(run) = run {
                    if best
                        .as_ref()
                        .is_none_or(|(r, s, _)| (top, suit) > (*r, *s))
                    {
                        best = Some((top, suit, run.into_iter().collect()));
                    }
                    break;
                }
            }
        }

        best.map(|(_, _, hand)| hand)
    }

    /// The rank groups of the five-rank run topping at `top`, `None` if
    /// any rank is missing from the pool.
    fn run_groups(&self, top: Rank) -> Option<Vec<&[Card]>> {
        (top.index() - 4..=top.index())
            .map(|i| {
                let group = self.rank_group(Rank::from_index(i)?);
                (!group.is_empty()).then_some(group)
            })
            .collect()
    }
}

/// Checks if suit-local cards sorted by rank form a five-card run.
fn is_run(cards: &[Card]) -> bool {
    cards.len() == 5 && cards[4].rank().index() - cards[0].rank().index() == 4
}
