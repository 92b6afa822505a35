use thiserror::Error;

#[derive(Error, Debug)]
pub enum EquityError {
    #[error("Invalid rank: {0}")]
    InvalidRank(char),

    #[error("Invalid suit: {0}")]
    InvalidSuit(char),

    #[error("Invalid card notation: {0}")]
    InvalidCardNotation(String),

    #[error("Invalid board notation: {0}")]
    InvalidBoardNotation(String),

    #[error("Hole hand must be exactly 2 cards")]
    InvalidHandSize,

    #[error("Need at least {need} cards, got {got}")]
    NotEnoughCards { need: usize, got: usize },

    #[error("Hand must be exactly {expected} cards, got {got}")]
    WrongHandSize { expected: usize, got: usize },

    #[error("Duplicate card: {0}")]
    DuplicateCard(String),

    #[error("Board already holds {len} cards, no completion possible")]
    BoardFull { len: usize },

    #[error("Cannot draw {requested} cards, only {available} remaining in deck")]
    NotEnoughDeck { requested: usize, available: usize },

    #[error("Card not in deck: {0}")]
    CardNotInDeck(String),

    #[error("Invalid value: {0}")]
    InvalidValue(String),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

pub type EquityResult<T> = Result<T, EquityError>;
