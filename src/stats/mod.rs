pub mod models;
pub mod service;

pub use models::{CategoryReport, OutcomeReport, Summary};
pub use service::{run_batch, run_showdown_batch, run_single_batch};

use crate::game::GameError;

/// Accumulates the results of a batch of games.
pub trait Collector {
    type Item;

    fn record(&mut self, item: Self::Item);

    /// A game failed; it counts as aborted and the batch goes on.
    fn abort(&mut self, error: &GameError);
}
