pub mod basic;
pub mod hands;


pub use basic::{Card, Rank, Suit};
pub use hands::{evaluate, EvaluatedHand, Hand, HandCategory, HAND_SIZE};
