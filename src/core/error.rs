use thiserror::Error;

#[derive(Error, Debug)]
pub enum GameError {
    #[error("Unknown faction: {0}")]
    UnknownFaction(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, GameError>;
