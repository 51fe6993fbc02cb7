use crate::Code;

/// Errors surfaced by the move codec and the model configuration.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// Input symbol is not one of the three moves. Recoverable: ask again.
    InvalidMove(String),
    /// Move code outside `0..MOVES`. A contract violation upstream.
    InvalidCode(Code),
    /// Model parameters are not valid probability distributions.
    Misconfigured(String),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidMove(s) => write!(f, "invalid move: {:?}", s),
            Self::InvalidCode(c) => write!(f, "invalid move code: {}", c),
            Self::Misconfigured(s) => write!(f, "misconfigured parameters: {}", s),
        }
    }
}

impl std::error::Error for Error {}
