use std::time::Instant;

use rand::Rng;
use tracing::{info, warn};

use crate::game::{play_showdown, play_single, GameError};

use super::{CategoryReport, Collector, OutcomeReport};

/// Plays `games` games, feeding each result to `collector`. A failed game is
/// logged and aborted on its own; the rest of the batch still runs.
pub fn run_batch<C, F>(games: u32, collector: &mut C, mut play: F)
where
    C: Collector,
    F: FnMut() -> Result<C::Item, GameError>,
{
    for game in 0..games {
        match play() {
            Ok(item) => collector.record(item),
            Err(error) => {
                warn!(game, error = %error, "Game aborted");
                collector.abort(&error);
            }
        }
    }
}

pub fn run_single_batch<R: Rng + ?Sized>(games: u32, rng: &mut R) -> CategoryReport {
    let started = Instant::now();
    let mut report = CategoryReport::new();

    run_batch(games, &mut report, || play_single(rng));

    report.batch.elapsed_ms = started.elapsed().as_millis() as u64;
    info!(
        games = report.batch.games,
        aborted = report.batch.aborted,
        elapsed_ms = report.batch.elapsed_ms,
        "Single-player batch finished"
    );
    report
}

pub fn run_showdown_batch<R: Rng + ?Sized>(games: u32, rng: &mut R) -> OutcomeReport {
    let started = Instant::now();
    let mut report = OutcomeReport::new();

    run_batch(games, &mut report, || play_showdown(rng));

    report.batch.elapsed_ms = started.elapsed().as_millis() as u64;
    info!(
        games = report.batch.games,
        aborted = report.batch.aborted,
        elapsed_ms = report.batch.elapsed_ms,
        "Two-player batch finished"
    );
    report
}
