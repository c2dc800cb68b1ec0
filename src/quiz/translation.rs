//! Translation quiz state machine.
//!
//! Questions are asked in order. Each answer is scored, the quiz advances,
//! and once every question is answered a `QuizSummary` is available.
//! `restart` puts the quiz back at the first question with a zero score.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::exercise::Exercise;
use crate::core::QuizError;

/// The question currently being asked.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct QuestionView<'a> {
    /// 1-based question number.
    pub number: usize,
    pub total: usize,
    pub prompt: &'a str,
    pub options: &'a [String],
}

/// Feedback for one answer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerFeedback {
    /// Whether the chosen option was right.
    pub correct: bool,

    /// The right option, for the "correct answer was ..." message.
    pub correct_option: String,

    /// Score after this answer.
    pub score: usize,
}

/// Final result.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizSummary {
    pub score: usize,
    pub total: usize,
}

impl std::fmt::Display for QuizSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.score, self.total)
    }
}

/// Multiple-choice translation quiz.
#[derive(Clone, Debug)]
pub struct TranslationQuiz {
    exercises: Vec<Exercise>,
    current: usize,
    score: usize,
}

impl TranslationQuiz {
    /// Create a quiz, validating every exercise.
    pub fn new(exercises: Vec<Exercise>) -> Result<Self, QuizError> {
        if let Some((index, bad)) = exercises.iter().enumerate().find(|(_, e)| !e.is_valid()) {
            return Err(QuizError::InvalidExercise {
                index,
                correct: bad.correct,
                options: bad.options.len(),
            });
        }

        Ok(Self {
            exercises,
            current: 0,
            score: 0,
        })
    }

    /// The question waiting for an answer, or `None` when finished.
    #[must_use]
    pub fn current(&self) -> Option<QuestionView<'_>> {
        self.exercises.get(self.current).map(|exercise| QuestionView {
            number: self.current + 1,
            total: self.exercises.len(),
            prompt: &exercise.prompt,
            options: &exercise.options,
        })
    }

    /// Answer the current question with option `choice`.
    pub fn answer(&mut self, choice: usize) -> Result<AnswerFeedback, QuizError> {
        let exercise = self.exercises.get(self.current).ok_or(QuizError::Finished)?;

        if choice >= exercise.options.len() {
            return Err(QuizError::InvalidOption {
                choice,
                options: exercise.options.len(),
            });
        }

        let correct = choice == exercise.correct;
        let correct_option = exercise.options[exercise.correct].clone();
        if correct {
            self.score += 1;
        }
        debug!(question = self.current + 1, choice, correct, "answered");
        self.current += 1;

        if self.is_finished() {
            info!(score = self.score, total = self.exercises.len(), "quiz finished");
        }

        Ok(AnswerFeedback {
            correct,
            correct_option,
            score: self.score,
        })
    }

    /// Check if every question has been answered.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.current >= self.exercises.len()
    }

    /// Score so far.
    #[must_use]
    pub fn score(&self) -> usize {
        self.score
    }

    /// Final result, once finished.
    #[must_use]
    pub fn summary(&self) -> Option<QuizSummary> {
        self.is_finished().then_some(QuizSummary {
            score: self.score,
            total: self.exercises.len(),
        })
    }

    /// Start over from the first question.
    pub fn restart(&mut self) {
        self.current = 0;
        self.score = 0;
    }
}
