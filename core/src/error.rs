use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("No card with this id in the deck")]
    UnknownCard,
    #[error("A revealed pair is still being checked")]
    Busy,
    #[error("Game already ended, no new moves are accepted")]
    AlreadyEnded,
    #[error("Every symbol must appear exactly twice in a deck")]
    InvalidDeck,
}

pub type Result<T> = core::result::Result<T, GameError>;
