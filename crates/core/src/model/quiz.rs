use thiserror::Error;

use crate::model::ids::AnswerId;
use crate::model::{QuizEvent, ScoreSummary, ScoreSummaryError};

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuizConfigError {
    #[error("a quiz needs at least one question")]
    ZeroQuestions,

    #[error("each question must be worth at least one point")]
    ZeroPointsPerQuestion,

    #[error("total points ({questions} questions x {points_per_question} points) overflow u32")]
    MaxPointsOverflow {
        questions: u32,
        points_per_question: u32,
    },
}

//
// ─── CONFIG ────────────────────────────────────────────────────────────────────
//

/// Shape of a quiz run: how many questions there are and what each is worth.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuizConfig {
    total_questions: u32,
    points_per_question: u32,
}

impl QuizConfig {
    /// Creates a quiz configuration.
    ///
    /// # Errors
    ///
    /// Returns `QuizConfigError::ZeroQuestions` or
    /// `QuizConfigError::ZeroPointsPerQuestion` if either count is zero, and
    /// `QuizConfigError::MaxPointsOverflow` if their product does not fit in
    /// `u32`.
    pub fn new(total_questions: u32, points_per_question: u32) -> Result<Self, QuizConfigError> {
        if total_questions == 0 {
            return Err(QuizConfigError::ZeroQuestions);
        }
        if points_per_question == 0 {
            return Err(QuizConfigError::ZeroPointsPerQuestion);
        }
        if total_questions.checked_mul(points_per_question).is_none() {
            return Err(QuizConfigError::MaxPointsOverflow {
                questions: total_questions,
                points_per_question,
            });
        }

        Ok(Self {
            total_questions,
            points_per_question,
        })
    }

    // Accessors
    #[must_use]
    pub fn total_questions(&self) -> u32 {
        self.total_questions
    }

    #[must_use]
    pub fn points_per_question(&self) -> u32 {
        self.points_per_question
    }

    /// Highest score a run can reach.
    #[must_use]
    pub fn max_possible_points(&self) -> u32 {
        // The product fits in u32, checked at construction.
        self.total_questions * self.points_per_question
    }
}

//
// ─── QUIZ STATE ────────────────────────────────────────────────────────────────
//

/// Lifecycle of a quiz run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizPhase {
    /// Questions are still being asked.
    Active,
    /// The last question has been passed; the finish screen is showing.
    Finished,
}

/// State container for a quiz run.
///
/// Owned by the application shell. Views never mutate it directly; they
/// dispatch a [`QuizEvent`] and this container decides what it means.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizState {
    config: QuizConfig,
    index: u32,
    answer: Option<AnswerId>,
    points: u32,
    highscore: u32,
    phase: QuizPhase,
}

impl QuizState {
    /// Fresh run at the first question with nothing answered or scored.
    #[must_use]
    pub fn new(config: QuizConfig) -> Self {
        Self {
            config,
            index: 0,
            answer: None,
            points: 0,
            highscore: 0,
            phase: QuizPhase::Active,
        }
    }

    // Accessors
    #[must_use]
    pub fn config(&self) -> QuizConfig {
        self.config
    }

    #[must_use]
    pub fn index(&self) -> u32 {
        self.index
    }

    #[must_use]
    pub fn answer(&self) -> Option<AnswerId> {
        self.answer
    }

    #[must_use]
    pub fn points(&self) -> u32 {
        self.points
    }

    #[must_use]
    pub fn highscore(&self) -> u32 {
        self.highscore
    }

    #[must_use]
    pub fn phase(&self) -> QuizPhase {
        self.phase
    }

    /// Applies one dispatched event.
    ///
    /// Fire-and-forget: every call performs at most one transition and
    /// reports nothing back to the dispatching view.
    pub fn apply(&mut self, event: QuizEvent) {
        match event {
            QuizEvent::Restart => {
                self.index = 0;
                self.points = 0;
                self.answer = None;
                self.phase = QuizPhase::Active;
                // highscore survives a restart
            }
            QuizEvent::NextQuestion => {
                if self.phase != QuizPhase::Active {
                    return;
                }
                self.answer = None;
                self.index += 1;
                if self.index >= self.config.total_questions() {
                    self.phase = QuizPhase::Finished;
                    self.highscore = self.highscore.max(self.points);
                }
            }
        }
    }

    /// Records the answer to the current question and awards its points.
    ///
    /// Ignored when the run is finished or the question was already answered.
    pub fn select_answer(&mut self, answer: AnswerId, awarded_points: u32) {
        if self.phase != QuizPhase::Active || self.answer.is_some() {
            return;
        }
        self.answer = Some(answer);
        self.points = self.points.saturating_add(awarded_points);
    }

    /// Summary for the finish screen.
    ///
    /// # Errors
    ///
    /// Returns `ScoreSummaryError::PointsExceedMax` if the shell awarded more
    /// points than the configured maximum allows.
    pub fn score_summary(&self) -> Result<ScoreSummary, ScoreSummaryError> {
        ScoreSummary::new(self.points, self.config.max_possible_points(), self.highscore)
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
