use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid coordinates")]
    InvalidCoords,
    #[error("Too many mines")]
    TooManyMines,
    #[error("Board must have at least one row and one column")]
    EmptyBoard,
    #[error("Game already ended, no new moves are accepted")]
    AlreadyEnded,
    #[error("Bet must be positive and no larger than the bankroll")]
    InvalidBet,
    #[error("Place a bet before starting the round")]
    NoBet,
    #[error("Not enough chips to cover the bet")]
    InsufficientChips,
    #[error("Action is only allowed during the player's turn")]
    NotPlayerTurn,
    #[error("A round is already in progress")]
    RoundInProgress,
}

pub type Result<T> = core::result::Result<T, GameError>;
