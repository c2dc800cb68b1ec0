//! Lessons - themed word lists with optional example phrases.
//!
//! A lesson's vocabulary doubles as a game pool, so a memory game can be
//! dealt straight from the lesson a learner just read. Audio keys name the
//! clip a presentation layer would play; nothing here plays sound.

use serde::{Deserialize, Serialize};

use super::item::VocabularyItem;

/// A lesson word and its audio clip key.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LessonWord {
    pub item: VocabularyItem,

    /// Clip key, e.g. `"allin-punchay"`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub audio: Option<String>,
}

/// One lesson.
///
/// ## Example
///
/// ```
/// use vocab_match::vocab::Lesson;
///
/// let lesson = Lesson::new("colores", "Colores")
///     .with_word("Puka", "Rojo", "puka")
///     .with_description("Los colores del arcoíris.");
///
/// assert_eq!(lesson.pool()[0].term, "Puka");
/// assert_eq!(lesson.vocabulary[0].audio.as_deref(), Some("puka"));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lesson {
    pub key: String,
    pub title: String,
    pub vocabulary: Vec<LessonWord>,

    #[serde(default)]
    pub phrases: Vec<VocabularyItem>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Lesson {
    /// Create an empty lesson.
    pub fn new(key: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            title: title.into(),
            vocabulary: Vec::new(),
            phrases: Vec::new(),
            description: None,
        }
    }

    /// Add a word with its audio clip key.
    #[must_use]
    pub fn with_word(
        mut self,
        term: impl Into<String>,
        translation: impl Into<String>,
        audio: impl Into<String>,
    ) -> Self {
        self.vocabulary.push(LessonWord {
            item: VocabularyItem::new(term, translation),
            audio: Some(audio.into()),
        });
        self
    }

    /// Add an example phrase.
    #[must_use]
    pub fn with_phrase(mut self, term: impl Into<String>, translation: impl Into<String>) -> Self {
        self.phrases.push(VocabularyItem::new(term, translation));
        self
    }

    /// Set the closing note.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// The lesson's words as a memory game pool, in lesson order.
    #[must_use]
    pub fn pool(&self) -> Vec<VocabularyItem> {
        self.vocabulary.iter().map(|word| word.item.clone()).collect()
    }
}

/// A word to listen to and repeat.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PronunciationCue {
    pub text: String,
    pub audio: String,
}

impl PronunciationCue {
    pub fn new(text: impl Into<String>, audio: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            audio: audio.into(),
        }
    }
}

/// The bundled lessons, in course order.
#[must_use]
pub fn builtin_lessons() -> Vec<Lesson> {
    vec![
        Lesson::new("saludos", "Lección 1: Saludos en Quechua")
            .with_word("Allin p'unchay", "Buenos días", "allin-punchay")
            .with_word("Allin tuta", "Buenas noches", "allin-tuta")
            .with_word("Napaykullayki", "Te saludo", "napaykullayki")
            .with_word("Tupananchiskama", "Hasta pronto", "tupananchiskama")
            .with_description(
                "Intenta usar estos saludos en diferentes momentos del día. \
                 El quechua es un idioma muy expresivo y cálido.",
            ),
        Lesson::new("familia", "Lección 2: La Familia - Ayllu")
            .with_word("Ayllu", "Familia", "ayllu")
            .with_word("Mama", "Madre", "mama")
            .with_word("Tayta", "Padre", "tayta")
            .with_word("Wawa", "Niño/Bebé", "wawa")
            .with_phrase("Aylluymi kusaywan kani", "Estoy con amor con mi familia"),
        Lesson::new("numeros", "Lección 3: Números - Yupana")
            .with_word("Huk", "Uno (1)", "huk")
            .with_word("Iskay", "Dos (2)", "iskay")
            .with_word("Kimsa", "Tres (3)", "kimsa")
            .with_word("Tawa", "Cuatro (4)", "tawa")
            .with_word("Pichqa", "Cinco (5)", "pichqa")
            .with_word("Suqta", "Seis (6)", "suqta")
            .with_word("Qanchis", "Siete (7)", "qanchis")
            .with_word("Pusaq", "Ocho (8)", "pusaq")
            .with_word("Isqun", "Nueve (9)", "isqun")
            .with_word("Chunka", "Diez (10)", "chunka"),
        Lesson::new("colores", "Lección 4: Colores - Llimphikuna")
            .with_word("Yurak", "Blanco", "yurak")
            .with_word("Yana", "Negro", "yana")
            .with_word("Puka", "Rojo", "puka")
            .with_word("Q'umir", "Verde", "qumir")
            .with_word("Anqas", "Azul", "anqas")
            .with_word("Q'illu", "Amarillo", "qillu"),
    ]
}

/// The bundled pronunciation drill.
#[must_use]
pub fn builtin_pronunciation() -> Vec<PronunciationCue> {
    vec![
        PronunciationCue::new("Allin p'unchay", "allin-punchay"),
        PronunciationCue::new("Napaykullayki", "napaykullayki"),
        PronunciationCue::new("Tupananchiskama", "tupananchiskama"),
    ]
}
