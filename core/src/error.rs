use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid coordinates")]
    InvalidCoords,
    #[error("No zero-neighbor start cell can be generated for this board")]
    GenerationExhausted,
    #[error("Flood fill reached an unflagged bomb outside chord mode")]
    GridCorrupted,
    #[error("Tile kind was still undefined")]
    UndefinedKind,
}

pub type Result<T> = core::result::Result<T, GameError>;
