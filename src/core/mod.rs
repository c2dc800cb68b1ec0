//! Shared building blocks: configuration, seeded RNG, and error types.

pub mod config;
pub mod error;
pub mod rng;

pub use config::{
    MatchConfig, DEFAULT_MAILBOX_CAPACITY, DEFAULT_PAIR_COUNT, DEFAULT_RESOLVE_DELAY_MS,
    MAX_MAILBOX_CAPACITY,
};
pub use error::{CatalogError, GameError, QuizError, Result, SessionError};
pub use rng::GameRng;
