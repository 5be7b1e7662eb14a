mod event;
mod ids;
mod quiz;
mod score;
mod tier;

pub use ids::AnswerId;

pub use event::QuizEvent;
pub use quiz::{QuizConfig, QuizConfigError, QuizPhase, QuizState};
pub use score::{ScoreSummary, ScoreSummaryError};
pub use tier::ScoreTier;
