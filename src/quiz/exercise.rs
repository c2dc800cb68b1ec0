//! Multiple-choice translation exercises.

use serde::{Deserialize, Serialize};

/// One question: translate `prompt` by picking the right option.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Exercise {
    /// Word or phrase to translate.
    pub prompt: String,

    /// Candidate translations, in display order.
    pub options: Vec<String>,

    /// Index of the correct option.
    pub correct: usize,
}

impl Exercise {
    /// Create an exercise.
    pub fn new<I, S>(prompt: impl Into<String>, options: I, correct: usize) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            prompt: prompt.into(),
            options: options.into_iter().map(Into::into).collect(),
            correct,
        }
    }

    /// Check if `correct` points at an option.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.correct < self.options.len()
    }

    /// Text of the correct option.
    #[must_use]
    pub fn correct_option(&self) -> Option<&str> {
        self.options.get(self.correct).map(String::as_str)
    }
}

/// The bundled Quechua to Spanish exercises.
#[must_use]
pub fn builtin_exercises() -> Vec<Exercise> {
    vec![
        Exercise::new(
            "Allin p'unchay",
            ["Buenos días", "Buenas tardes", "Buenas noches"],
            0,
        ),
        Exercise::new("Mama", ["Padre", "Madre", "Hermano"], 1),
        Exercise::new("Huk", ["Dos", "Tres", "Uno"], 2),
        Exercise::new("Puka", ["Verde", "Azul", "Rojo"], 2),
        Exercise::new("Inti", ["Luna", "Sol", "Estrella"], 1),
    ]
}
