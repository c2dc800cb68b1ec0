//! Vocabulary items - the static word pairs the games are built from.

use serde::{Deserialize, Serialize};

/// A word in the target language paired with its translation.
///
/// Items are read-only to every game. The memory game compares items by
/// `term`; two distinct catalog entries with the same `term` therefore
/// match each other.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VocabularyItem {
    /// Word in the language being learned.
    pub term: String,

    /// Translation shown alongside the term.
    pub translation: String,
}

impl VocabularyItem {
    /// Create a new vocabulary item.
    pub fn new(term: impl Into<String>, translation: impl Into<String>) -> Self {
        Self {
            term: term.into(),
            translation: translation.into(),
        }
    }

    /// Check whether two items form a pair in the memory game.
    #[must_use]
    pub fn pairs_with(&self, other: &VocabularyItem) -> bool {
        self.term == other.term
    }
}

impl std::fmt::Display for VocabularyItem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.term, self.translation)
    }
}
