use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;
use strum::IntoEnumIterator;

use crate::game::{EvaluatedHand, GameError, HandCategory, Outcome, Showdown};

use super::Collector;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BatchStats {
    pub games: u32,
    pub aborted: u32,
    /// Aborted games by error kind.
    pub failures: BTreeMap<&'static str, u32>,
    pub elapsed_ms: u64,
}

impl BatchStats {
    fn record_abort(&mut self, error: &GameError) {
        self.games += 1;
        self.aborted += 1;
        *self.failures.entry(error.kind()).or_insert(0) += 1;
    }
}

/// Single-player tally: how often each category came up.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryReport {
    #[serde(flatten)]
    pub batch: BatchStats,
    pub counts: BTreeMap<HandCategory, u32>,
}

impl CategoryReport {
    pub fn new() -> Self {
        Self {
            batch: BatchStats::default(),
            counts: HandCategory::iter().map(|category| (category, 0)).collect(),
        }
    }

    pub fn count(&self, category: HandCategory) -> u32 {
        self.counts.get(&category).copied().unwrap_or_default()
    }

    pub fn completed(&self) -> u32 {
        self.counts.values().sum()
    }
}

impl Default for CategoryReport {
    fn default() -> Self {
        Self::new()
    }
}

impl Collector for CategoryReport {
    type Item = EvaluatedHand;

    fn record(&mut self, hand: EvaluatedHand) {
        self.batch.games += 1;
        *self.counts.entry(hand.category).or_insert(0) += 1;
    }

    fn abort(&mut self, error: &GameError) {
        self.batch.record_abort(error);
    }
}

/// Two-player tally: how often each outcome came up.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutcomeReport {
    #[serde(flatten)]
    pub batch: BatchStats,
    pub counts: BTreeMap<Outcome, u32>,
}

impl OutcomeReport {
    pub fn new() -> Self {
        Self {
            batch: BatchStats::default(),
            counts: Outcome::ALL.iter().map(|outcome| (*outcome, 0)).collect(),
        }
    }

    pub fn count(&self, outcome: Outcome) -> u32 {
        self.counts.get(&outcome).copied().unwrap_or_default()
    }

    pub fn completed(&self) -> u32 {
        self.counts.values().sum()
    }
}

impl Default for OutcomeReport {
    fn default() -> Self {
        Self::new()
    }
}

impl Collector for OutcomeReport {
    type Item = Showdown;

    fn record(&mut self, showdown: Showdown) {
        self.batch.games += 1;
        *self.counts.entry(showdown.outcome).or_insert(0) += 1;
    }

    fn abort(&mut self, error: &GameError) {
        self.batch.record_abort(error);
    }
}

/// Everything a run prints.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Summary {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub single: Option<CategoryReport>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub showdown: Option<OutcomeReport>,
}

impl Summary {
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(report) = &self.single {
            writeln!(f, "Single-player hands ({})", report.batch)?;
            for category in HandCategory::PRECEDENCE {
                writeln!(f, "  {:<16} {}", category, report.count(category))?;
            }
        }

        if let Some(report) = &self.showdown {
            writeln!(f, "Two-player showdowns ({})", report.batch)?;
            for outcome in Outcome::ALL {
                writeln!(f, "  {:<16} {}", outcome, report.count(outcome))?;
            }
        }

        Ok(())
    }
}

impl fmt::Display for BatchStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} games, {} aborted, {} ms",
            self.games, self.aborted, self.elapsed_ms
        )
    }
}
