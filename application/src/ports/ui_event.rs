//! UI event types emitted by the engine and the session controller
//!
//! These events form the output port from the application layer to the
//! presentation layer, which applies them to its own view state.

use trivia_domain::GamePhase;

/// Events for the presentation layer to render
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    // === Session lifecycle ===
    /// A new engine started with this many questions
    SessionStarted { total: usize },
    /// The active engine was torn down
    SessionStopped,
    /// Token or question set missing; the settings overlay should open
    SettingsRequired,

    // === Engine state ===
    /// Engine entered a new phase; `index` is the current question (0-based)
    PhaseChanged {
        phase: GamePhase,
        index: usize,
        total: usize,
    },
    /// The pending answer buffer changed
    AnswerChanged(String),

    // === AI text surface ===
    /// Current visible AI text (one frame of an animation)
    AiText(String),
    /// The typing animation finished revealing this text
    AiTextComplete(String),

    // === Grading ===
    /// A grading round-trip returned a reply
    VerdictReceived { correct: bool },
    /// A grading round-trip failed
    GradingFailed { error: String },

    // === Other ===
    /// Transient status-bar message
    Flash(String),
}
