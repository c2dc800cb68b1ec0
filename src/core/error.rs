//! Error types.
//!
//! Every error here is local and recoverable: the rejected call leaves the
//! engine, catalog or quiz exactly as it was. Stray UI input (double click,
//! third click, click on a matched card) is not an error at all.

use thiserror::Error;

/// Result alias for engine operations.
pub type Result<T> = std::result::Result<T, GameError>;

/// Errors raised by `MemoryGame`.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("invalid configuration: {requested} pairs requested but the pool has {available} items")]
    InvalidConfiguration { requested: usize, available: usize },

    #[error("invalid position {position}: deck has {deck_size} cards")]
    InvalidPosition { position: usize, deck_size: usize },
}

/// Errors raised by a `GameSession`.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error(transparent)]
    Game(#[from] GameError),

    #[error("game session closed")]
    Closed,
}

/// Errors raised by `Catalog`.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("category {0:?} already registered")]
    DuplicateCategory(String),

    #[error("unknown category {0:?}")]
    UnknownCategory(String),

    #[error("invalid catalog content: {0}")]
    InvalidContent(#[from] serde_json::Error),
}

/// Errors raised by `TranslationQuiz`.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum QuizError {
    #[error("exercise {index} is invalid: correct option {correct} of {options} options")]
    InvalidExercise {
        index: usize,
        correct: usize,
        options: usize,
    },

    #[error("option {choice} out of range: question has {options} options")]
    InvalidOption { choice: usize, options: usize },

    #[error("quiz finished")]
    Finished,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let err = GameError::InvalidPosition {
            position: 7,
            deck_size: 4,
        };
        assert_eq!(err.to_string(), "invalid position 7: deck has 4 cards");

        let err = GameError::InvalidConfiguration {
            requested: 3,
            available: 2,
        };
        assert!(err.to_string().contains("3 pairs requested"));
    }

    #[test]
    fn test_session_error_wraps_game_error() {
        let err: SessionError = GameError::InvalidPosition {
            position: 1,
            deck_size: 0,
        }
        .into();
        assert_eq!(err.to_string(), "invalid position 1: deck has 0 cards");
        assert_eq!(SessionError::Closed.to_string(), "game session closed");
    }
}
