//! Multiple-choice translation quiz.
//!
//! - `Exercise`: prompt, options, and the index of the right option
//! - `TranslationQuiz`: asks exercises in order and keeps score

pub mod exercise;
pub mod translation;

pub use exercise::{builtin_exercises, Exercise};
pub use translation::{AnswerFeedback, QuestionView, QuizSummary, TranslationQuiz};
