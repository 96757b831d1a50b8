pub mod assertions;
pub mod hand_builders;

// Re-export main utilities for use by test files
#[allow(unused_imports)]
pub use assertions::{assert_category, assert_matched_ranks};
#[allow(unused_imports)]
pub use hand_builders::{seeded_rng, HandBuilder};
