use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RankError {
    KeyNotFound(String),
    EmptyMapping,
    InvalidVotes(String),
}

impl fmt::Display for RankError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RankError::KeyNotFound(key) => write!(f, "key not found: {}", key),
            RankError::EmptyMapping => write!(f, "mapping has no entries"),
            RankError::InvalidVotes(detail) => write!(f, "invalid votes: {}", detail),
        }
    }
}

impl std::error::Error for RankError {}
