use crate::GamePhase;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("cannot draw from an empty shoe")]
    ShoeEmpty,
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("expected phase {expected:?}, game is in {actual:?}")]
    InvalidPhase {
        expected: GamePhase,
        actual: GamePhase,
    },
    #[error("player quit, the session is over")]
    SessionOver,
}

pub type Result<T> = std::result::Result<T, Error>;
