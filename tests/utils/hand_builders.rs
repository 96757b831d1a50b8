#![allow(dead_code)] // Test utilities may not all be used in every test

use poker_sim::{Card, Rank, Suit};
use rand::rngs::StdRng;
use rand::SeedableRng;

// ============================================================================
// Card Creation Macro
// ============================================================================

#[macro_export]
macro_rules! cards {
    ($($suit:ident $rank:ident),* $(,)?) => {
        vec![$(poker_sim::Card::new(poker_sim::Suit::$suit, poker_sim::Rank::$rank)),*]
    };
}

pub fn seeded_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

// ============================================================================
// Hand Setup Utilities
// ============================================================================

/// Builds five-card hands one card at a time.
pub struct HandBuilder {
    cards: Vec<Card>,
}

impl HandBuilder {
    pub fn new() -> Self {
        Self { cards: vec![] }
    }

    pub fn card(mut self, suit: Suit, rank: Rank) -> Self {
        self.cards.push(Card::new(suit, rank));
        self
    }

    /// Adds `ranks` all of one suit.
    pub fn suited(mut self, suit: Suit, ranks: &[Rank]) -> Self {
        self.cards
            .extend(ranks.iter().map(|rank| Card::new(suit, *rank)));
        self
    }

    pub fn parsed(mut self, spec: &str) -> Self {
        self.cards.push(Card::from_string(spec).unwrap());
        self
    }

    pub fn build(self) -> Vec<Card> {
        self.cards
    }
}
