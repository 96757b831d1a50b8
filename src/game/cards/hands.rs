use std::cmp::Ordering;
use std::collections::HashMap;
use std::fmt;
use strum_macros::EnumIter;

use super::basic::{Card, Rank};
use crate::game::errors::GameError;

pub const HAND_SIZE: usize = 5;

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize, EnumIter,
)]
pub enum HandCategory {
    HighCard,
    OnePair,
    TwoPair,
    ThreeOfAKind,
    Straight,
    Flush,
    FullHouse,
    FourOfAKind,
    /// Straight and flush at once.
    RoyalFlush,
}

impl HandCategory {
    /// Order in which categories are tried, best first. The first match wins.
    pub const PRECEDENCE: [HandCategory; 9] = [
        HandCategory::RoyalFlush,
        HandCategory::FourOfAKind,
        HandCategory::FullHouse,
        HandCategory::Flush,
        HandCategory::Straight,
        HandCategory::ThreeOfAKind,
        HandCategory::TwoPair,
        HandCategory::OnePair,
        HandCategory::HighCard,
    ];

    pub fn hand_type_value(&self) -> u8 {
        *self as u8
    }

    pub fn name(&self) -> &'static str {
        match self {
            HandCategory::HighCard => "High Card",
            HandCategory::OnePair => "One Pair",
            HandCategory::TwoPair => "Two Pair",
            HandCategory::ThreeOfAKind => "Three of a Kind",
            HandCategory::Straight => "Straight",
            HandCategory::Flush => "Flush",
            HandCategory::FullHouse => "Full House",
            HandCategory::FourOfAKind => "Four of a Kind",
            HandCategory::RoyalFlush => "Royal Flush",
        }
    }
}

impl PartialOrd for HandCategory {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HandCategory {
    fn cmp(&self, other: &Self) -> Ordering {
        self.hand_type_value().cmp(&other.hand_type_value())
    }
}

impl fmt::Display for HandCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

/// Exactly five cards dealt from one deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Hand {
    cards: [Card; HAND_SIZE],
}

impl Hand {
    pub fn new(cards: &[Card]) -> Result<Self, GameError> {
        let cards: [Card; HAND_SIZE] = cards
            .try_into()
            .map_err(|_| GameError::InvalidHandSize(cards.len()))?;
        Ok(Self { cards })
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Best category for this hand. Pure: the same hand always evaluates
    /// to the same result.
    pub fn evaluate(&self) -> EvaluatedHand {
        let groups = RankGroups::new(&self.cards);

        for category in HandCategory::PRECEDENCE {
            if let Some(matched) = self.matches(category, &groups) {
                let (cards, kickers) = match matched {
                    Matched::WholeHand => (self.cards.to_vec(), Vec::new()),
                    Matched::Ranks(ranks) => self
                        .cards
                        .iter()
                        .partition(|card| ranks.contains(&card.rank)),
                };
                return EvaluatedHand {
                    category,
                    cards,
                    kickers,
                    tiebreak: self.tiebreak(category, &groups),
                };
            }
        }

        unreachable!("high card matches every hand")
    }

    fn matches(&self, category: HandCategory, groups: &RankGroups) -> Option<Matched> {
        match category {
            HandCategory::RoyalFlush => {
                (self.is_flush() && self.is_straight()).then_some(Matched::WholeHand)
            }
            HandCategory::FourOfAKind => groups
                .shape_is(&[4, 1])
                .then(|| Matched::Ranks(groups.top(1))),
            HandCategory::FullHouse => groups.shape_is(&[3, 2]).then_some(Matched::WholeHand),
            HandCategory::Flush => self.is_flush().then_some(Matched::WholeHand),
            HandCategory::Straight => self.is_straight().then_some(Matched::WholeHand),
            HandCategory::ThreeOfAKind => groups
                .shape_is(&[3, 1, 1])
                .then(|| Matched::Ranks(groups.top(1))),
            HandCategory::TwoPair => groups
                .shape_is(&[2, 2, 1])
                .then(|| Matched::Ranks(groups.top(2))),
            HandCategory::OnePair => groups
                .shape_is(&[2, 1, 1, 1])
                .then(|| Matched::Ranks(groups.top(1))),
            HandCategory::HighCard => {
                let high = self.cards.iter().max_by(|a, b| a.rank_cmp(b))?;
                Some(Matched::Ranks(vec![high.rank]))
            }
        }
    }

    fn is_flush(&self) -> bool {
        self.cards.iter().all(|card| card.suit == self.cards[0].suit)
    }

    fn is_straight(&self) -> bool {
        self.straight_high().is_some()
    }

    /// Top rank of the straight, if the hand is one. The wheel (A-2-3-4-5)
    /// tops out at five.
    fn straight_high(&self) -> Option<Rank> {
        let mut ranks: Vec<Rank> = self.cards.iter().map(|card| card.rank).collect();
        ranks.sort();
        ranks.dedup();
        if ranks.len() != HAND_SIZE {
            return None;
        }

        if ranks[4].value() - ranks[0].value() == 4 {
            return Some(ranks[4]);
        }

        // Ace plays low
        if ranks == [Rank::Two, Rank::Three, Rank::Four, Rank::Five, Rank::Ace] {
            return Some(Rank::Five);
        }

        None
    }

    fn tiebreak(&self, category: HandCategory, groups: &RankGroups) -> Vec<Rank> {
        match category {
            HandCategory::Straight | HandCategory::RoyalFlush => {
                self.straight_high().into_iter().collect()
            }
            _ => groups.ranks(),
        }
    }
}

/// Result of evaluating a hand: its category, the cards forming the
/// category and the leftover kickers. Deserializing re-evaluates the five
/// cards, so a hand read back compares exactly like the original.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "EvaluatedHandRecord")]
pub struct EvaluatedHand {
    pub category: HandCategory,
    pub cards: Vec<Card>,
    pub kickers: Vec<Card>,
    #[serde(skip)]
    tiebreak: Vec<Rank>,
}

impl EvaluatedHand {
    /// Showdown order: category first, then matched group ranks (bigger
    /// groups first), then kickers high to low. Suits never break ties.
    pub fn showdown_cmp(&self, other: &EvaluatedHand) -> Ordering {
        self.category
            .cmp(&other.category)
            .then_with(|| self.tiebreak.cmp(&other.tiebreak))
    }

    pub fn beats(&self, other: &EvaluatedHand) -> bool {
        self.showdown_cmp(other) == Ordering::Greater
    }
}

/// Wire form of [`EvaluatedHand`]; the stored category is recomputed.
#[derive(serde::Deserialize)]
struct EvaluatedHandRecord {
    cards: Vec<Card>,
    kickers: Vec<Card>,
}

impl TryFrom<EvaluatedHandRecord> for EvaluatedHand {
    type Error = GameError;

    fn try_from(record: EvaluatedHandRecord) -> Result<Self, Self::Error> {
        let mut cards = record.cards;
        cards.extend(record.kickers);
        evaluate(&cards)
    }
}

enum Matched {
    WholeHand,
    Ranks(Vec<Rank>),
}

/// Evaluates exactly five cards.
pub fn evaluate(cards: &[Card]) -> Result<EvaluatedHand, GameError> {
    Ok(Hand::new(cards)?.evaluate())
}

/// Rank multiplicities sorted by (count desc, rank desc).
struct RankGroups {
    groups: Vec<(Rank, usize)>,
}

impl RankGroups {
    fn new(cards: &[Card]) -> Self {
        let mut counts = HashMap::new();
        for card in cards {
            *counts.entry(card.rank).or_insert(0) += 1;
        }

        let mut groups: Vec<(Rank, usize)> = counts.into_iter().collect();
        groups.sort_by(|a, b| b.1.cmp(&a.1).then(b.0.cmp(&a.0)));
        Self { groups }
    }

    fn shape_is(&self, shape: &[usize]) -> bool {
        self.groups.iter().map(|(_, count)| *count).eq(shape.iter().copied())
    }

    fn top(&self, n: usize) -> Vec<Rank> {
        self.groups.iter().take(n).map(|(rank, _)| *rank).collect()
    }

    fn ranks(&self) -> Vec<Rank> {
        self.groups.iter().map(|(rank, _)| *rank).collect()
    }
}
