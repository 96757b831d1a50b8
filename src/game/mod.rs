// Public API
pub use cards::{evaluate, Card, EvaluatedHand, Hand, HandCategory, Rank, Suit, HAND_SIZE};
pub use deck::{Deck, DECK_SIZE};
pub use errors::GameError;
pub use logic::{play_showdown, play_single, Game, Outcome, Showdown};

// Internal modules
mod cards;
mod deck;
mod errors;
mod logic;
