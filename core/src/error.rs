use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid coordinates")]
    InvalidCoords,
    #[error("Grid must be at least 3 cells wide, got {0}")]
    GridTooSmall(u8),
    #[error("Board shape does not match declared size")]
    InvalidBoardShape,
    #[error("Unknown shape character {0:?}")]
    UnknownShape(char),
    #[error("Shape sequence must contain at least one shape")]
    EmptyShapeSequence,
}

pub type Result<T> = core::result::Result<T, GameError>;
