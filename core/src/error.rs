use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid grid size")]
    InvalidSize,
    #[error("Invalid coordinates")]
    InvalidCoords,
    #[error("Board shape is not square")]
    InvalidBoardShape,
}

pub type Result<T> = core::result::Result<T, GameError>;
