//! TUI presenter: applies engine events to [`TuiState`]

use super::state::TuiState;
use trivia_application::UiEvent;
use trivia_domain::GamePhase;

/// Stateless mapping from [`UiEvent`] to view state
#[derive(Default)]
pub struct TuiPresenter;

impl TuiPresenter {
    pub fn new() -> Self {
        Self
    }

    pub fn apply(&self, state: &mut TuiState, event: &UiEvent) {
        match event {
            UiEvent::SessionStarted { total } => {
                state.reset_game();
                state.total_questions = *total;
            }
            UiEvent::SessionStopped => {
                state.phase = GamePhase::Idle;
                state.answer.clear();
            }
            UiEvent::SettingsRequired => {
                state.set_flash("API token and question set are required");
            }
            UiEvent::PhaseChanged {
                phase,
                index,
                total,
            } => {
                state.phase = *phase;
                state.question_index = *index;
                state.total_questions = *total;
                if *phase == GamePhase::AwaitingInput {
                    state.last_verdict = None;
                }
            }
            UiEvent::AnswerChanged(answer) => {
                state.answer = answer.clone();
            }
            UiEvent::AiText(text) => {
                state.ai_text = text.clone();
                state.ai_text_complete = false;
            }
            UiEvent::AiTextComplete(text) => {
                state.ai_text = text.clone();
                state.ai_text_complete = true;
            }
            UiEvent::VerdictReceived { correct } => {
                state.last_verdict = Some(*correct);
            }
            UiEvent::GradingFailed { error } => {
                state.set_flash(format!("Grading failed: {}", error));
            }
            UiEvent::Flash(message) => {
                state.set_flash(message.clone());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn apply_all(events: &[UiEvent]) -> TuiState {
        let presenter = TuiPresenter::new();
        let mut state = TuiState::new();
        for event in events {
            presenter.apply(&mut state, event);
        }
        state
    }

    #[test]
    fn test_session_started_resets_screen() {
        let presenter = TuiPresenter::new();
        let mut state = TuiState::new();
        state.ai_text = "old".into();
        state.answer = "old".into();
        state.last_verdict = Some(true);

        presenter.apply(&mut state, &UiEvent::SessionStarted { total: 3 });
        assert!(state.ai_text.is_empty());
        assert!(state.answer.is_empty());
        assert_eq!(state.last_verdict, None);
        assert_eq!(state.total_questions, 3);
    }

    #[test]
    fn test_typing_frames_then_completion() {
        let state = apply_all(&[
            UiEvent::AiText("2".into()),
            UiEvent::AiText("2+".into()),
        ]);
        assert_eq!(state.ai_text, "2+");
        assert!(!state.ai_text_complete);

        let state = apply_all(&[
            UiEvent::AiText("2+2".into()),
            UiEvent::AiTextComplete("2+2?".into()),
        ]);
        assert_eq!(state.ai_text, "2+2?");
        assert!(state.ai_text_complete);
    }

    #[test]
    fn test_grading_round() {
        let state = apply_all(&[
            UiEvent::SessionStarted { total: 2 },
            UiEvent::PhaseChanged {
                phase: GamePhase::AwaitingInput,
                index: 0,
                total: 2,
            },
            UiEvent::AnswerChanged("4".into()),
            UiEvent::AnswerChanged(String::new()),
            UiEvent::PhaseChanged {
                phase: GamePhase::Grading,
                index: 0,
                total: 2,
            },
            UiEvent::VerdictReceived { correct: true },
            UiEvent::PhaseChanged {
                phase: GamePhase::Advancing,
                index: 0,
                total: 2,
            },
        ]);
        assert_eq!(state.phase, GamePhase::Advancing);
        assert_eq!(state.last_verdict, Some(true));
        assert!(state.answer.is_empty());
        assert_eq!(state.question_number(), 1);
    }

    #[test]
    fn test_failures_flash() {
        let state = apply_all(&[UiEvent::GradingFailed {
            error: "Timeout".into(),
        }]);
        let (message, _) = state.flash_message.unwrap();
        assert_eq!(message, "Grading failed: Timeout");
    }

    #[test]
    fn test_stop_returns_to_idle() {
        let state = apply_all(&[
            UiEvent::PhaseChanged {
                phase: GamePhase::Grading,
                index: 0,
                total: 1,
            },
            UiEvent::SessionStopped,
        ]);
        assert_eq!(state.phase, GamePhase::Idle);
    }
}
