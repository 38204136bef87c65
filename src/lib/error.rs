use geozero::error::GeozeroError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FixtureError {
    #[error("codec failed: {0}")]
    Codec(#[from] GeozeroError),

    #[error("geometry has no fixture representation: {0}")]
    Unsupported(String),

    #[error("could not write fixture: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, FixtureError>;
