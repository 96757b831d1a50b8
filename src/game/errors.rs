use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("Invalid card spec: {0:?}")]
    InvalidCardSpec(String),

    #[error("Insufficient cards: requested {requested}, {remaining} remaining")]
    InsufficientCards { requested: usize, remaining: usize },

    #[error("Invalid hand size: expected 5 cards, got {0}")]
    InvalidHandSize(usize),
}

impl GameError {
    /// Variant name, used to tally failures by kind.
    pub fn kind(&self) -> &'static str {
        match self {
            GameError::InvalidCardSpec(_) => "InvalidCardSpec",
            GameError::InsufficientCards { .. } => "InsufficientCards",
            GameError::InvalidHandSize(_) => "InvalidHandSize",
        }
    }
}
