//! # vocab-match
//!
//! Vocabulary games for a language-learning page: a memory-matching card
//! game and a multiple-choice translation quiz, plus the word lists and
//! lessons they draw from.
//!
//! ## Design Principles
//!
//! 1. **Single Owner**: `MemoryGame` owns its deck and turn state. There is
//!    no shared mutable state; every change goes through `start_game`,
//!    `select_card` or `resolve`.
//!
//! 2. **Deferred, Cancellable Resolution**: A completed pair is resolved
//!    after a presentation delay. The engine hands out a ticket instead of
//!    sleeping; `GameSession` turns tickets into tokio timers and drops them
//!    when a new game starts.
//!
//! 3. **Injected Randomness**: Decks are shuffled with a seeded `GameRng`,
//!    so layouts are reproducible in tests.
//!
//! ## Modules
//!
//! - `core`: Configuration, RNG, errors
//! - `vocab`: Vocabulary items, the category catalog, lessons
//! - `game`: Deck, turn state, engine, events
//! - `session`: Async driver and the `Presenter` seam
//! - `quiz`: Translation quiz

pub mod core;
pub mod game;
pub mod quiz;
pub mod session;
pub mod vocab;

// Re-export commonly used types
pub use crate::core::{
    CatalogError, GameError, GameRng, MatchConfig, QuizError, SessionError,
};

pub use crate::vocab::{
    builtin_lessons, builtin_pronunciation, Catalog, Category, Lesson, LessonWord,
    PronunciationCue, VocabularyItem,
};

pub use crate::game::{
    CardRef, CardSlot, Deck, GameEvent, GameStart, MemoryGame, PairId, Phase,
    ResolutionTicket, ScheduledResolution, Selection, SlotState,
};

pub use crate::session::{ChannelPresenter, GameSession, Presenter, PresenterUpdate};

pub use crate::quiz::{
    builtin_exercises, AnswerFeedback, Exercise, QuestionView, QuizSummary, TranslationQuiz,
};
