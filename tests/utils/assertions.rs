//! Test assertion helpers
#![allow(dead_code)] // Test utilities may not all be used in every test

use poker_sim::{evaluate, Card, EvaluatedHand, HandCategory, Rank};

pub fn assert_category(cards: &[Card], expected: HandCategory) -> EvaluatedHand {
    let result = evaluate(cards).unwrap();
    assert_eq!(
        result.category, expected,
        "hand {:?} evaluated as {}",
        cards, result.category
    );
    result
}

pub fn assert_matched_ranks(result: &EvaluatedHand, expected: &[Rank]) {
    let mut ranks: Vec<Rank> = result.cards.iter().map(|card| card.rank).collect();
    ranks.sort();
    let mut expected = expected.to_vec();
    expected.sort();
    assert_eq!(ranks, expected);
}
