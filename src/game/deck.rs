use rand::seq::SliceRandom;
use rand::Rng;
use tracing::{debug, trace};

use crate::game::cards::Card;
use crate::game::errors::GameError;

pub const DECK_SIZE: usize = 52;

/// A shuffled 52-card deck. Cards leave from the front; each game owns its
/// own deck.
#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Full deck shuffled with the thread-local generator.
    pub fn new() -> Self {
        Self::with_rng(&mut rand::rng())
    }

    pub fn with_rng<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut cards = Card::all_cards();
        cards.shuffle(rng);
        debug!(cards = cards.len(), "Created shuffled deck");
        Self { cards }
    }

    /// Removes and returns the first `n` cards. Leaves the deck untouched
    /// when fewer than `n` remain.
    pub fn draw(&mut self, n: usize) -> Result<Vec<Card>, GameError> {
        if n > self.cards.len() {
            return Err(GameError::InsufficientCards {
                requested: n,
                remaining: self.cards.len(),
            });
        }

        let drawn: Vec<Card> = self.cards.drain(0..n).collect();
        trace!(drawn = n, remaining = self.cards.len(), "Drew cards");
        Ok(drawn)
    }

    pub fn remaining(&self) -> usize {
        self.cards.len()
    }

    pub fn drawn(&self) -> usize {
        DECK_SIZE - self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}
