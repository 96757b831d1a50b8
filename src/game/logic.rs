// A game is one player's deal: a fresh deck, five cards, one evaluation.
// Showdowns give each player a game of their own, so no deck is ever shared.
use std::fmt;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::game::cards::{evaluate, EvaluatedHand, HAND_SIZE};
use crate::game::deck::Deck;
use crate::game::errors::GameError;

#[derive(Debug, Clone)]
pub struct Game {
    deck: Deck,
}

impl Game {
    pub fn new(deck: Deck) -> Self {
        Self { deck }
    }

    pub fn with_rng<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::new(Deck::with_rng(rng))
    }

    /// Draws five cards from this game's deck and evaluates them.
    pub fn deal_hand(&mut self) -> Result<EvaluatedHand, GameError> {
        let cards = self.deck.draw(HAND_SIZE)?;
        evaluate(&cards)
    }

    pub fn deck(&self) -> &Deck {
        &self.deck
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Outcome {
    #[serde(rename = "Player 1 wins")]
    PlayerOneWins,
    #[serde(rename = "Player 2 wins")]
    PlayerTwoWins,
    Tie,
}

impl Outcome {
    pub const ALL: [Outcome; 3] = [Outcome::PlayerOneWins, Outcome::PlayerTwoWins, Outcome::Tie];

    pub fn from_hands(player_one: &EvaluatedHand, player_two: &EvaluatedHand) -> Self {
        match player_one.showdown_cmp(player_two) {
            std::cmp::Ordering::Greater => Outcome::PlayerOneWins,
            std::cmp::Ordering::Less => Outcome::PlayerTwoWins,
            std::cmp::Ordering::Equal => Outcome::Tie,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(match self {
            Outcome::PlayerOneWins => "Player 1 wins",
            Outcome::PlayerTwoWins => "Player 2 wins",
            Outcome::Tie => "Tie",
        })
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Showdown {
    pub player_one: EvaluatedHand,
    pub player_two: EvaluatedHand,
    pub outcome: Outcome,
    /// Cards left in each player's deck after the deal.
    pub decks_remaining: [usize; 2],
}

/// One single-player game.
pub fn play_single<R: Rng + ?Sized>(rng: &mut R) -> Result<EvaluatedHand, GameError> {
    Game::with_rng(rng).deal_hand()
}

/// One two-player game, each player drawing from their own deck.
pub fn play_showdown<R: Rng + ?Sized>(rng: &mut R) -> Result<Showdown, GameError> {
    let mut games = [Game::with_rng(rng), Game::with_rng(rng)];
    let player_one = games[0].deal_hand()?;
    let player_two = games[1].deal_hand()?;
    let outcome = Outcome::from_hands(&player_one, &player_two);

    Ok(Showdown {
        player_one,
        player_two,
        outcome,
        decks_remaining: [games[0].deck().remaining(), games[1].deck().remaining()],
    })
}
