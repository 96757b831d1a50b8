// Library crate for the five-card poker simulator
// This file exposes the public API for the binary and integration tests

pub mod config;
pub mod game;
pub mod stats;

// Re-export commonly used types for easier access in tests
pub use config::{ConfigError, Mode, OutputFormat, SimulationConfig};
pub use game::{
    evaluate, Card, Deck, EvaluatedHand, GameError, Hand, HandCategory, Outcome, Rank, Suit,
};
pub use stats::{run_showdown_batch, run_single_batch, CategoryReport, OutcomeReport, Summary};
