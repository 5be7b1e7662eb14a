use serde::{Deserialize, Serialize};

/// Event a view dispatches into the externally owned quiz state.
///
/// Views never mutate state themselves. They call the dispatch capability
/// they were handed exactly once per activation, and the state container
/// decides what the event means.
///
/// The serialized form is internally tagged so a dispatched event reads as
/// `{"type":"restart"}` or `{"type":"nextQuestion"}` on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum QuizEvent {
    /// Start a fresh run. The highscore survives.
    Restart,
    /// Move past the current question, finishing the run after the last one.
    NextQuestion,
}

impl QuizEvent {
    /// Literal tag carried by the serialized event.
    #[must_use]
    pub fn tag(self) -> &'static str {
        match self {
            QuizEvent::Restart => "restart",
            QuizEvent::NextQuestion => "nextQuestion",
        }
    }
}

// ─── Tests ─────────────────────────────────────────────────────────────────────
