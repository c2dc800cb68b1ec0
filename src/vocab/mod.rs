//! Vocabulary content: word pairs and the categorized catalog.
//!
//! ## Key Types
//!
//! - `VocabularyItem`: Immutable term/translation pair
//! - `Category`: Named list of items
//! - `Catalog`: Ordered category registry, with the bundled word lists
//! - `Lesson`: Themed words with audio keys, phrases and a note

pub mod catalog;
pub mod item;
pub mod lesson;

pub use catalog::{Catalog, Category};
pub use item::VocabularyItem;
pub use lesson::{builtin_lessons, builtin_pronunciation, Lesson, LessonWord, PronunciationCue};
