//! Trivia conversation engine.
//!
//! Runs one game: shows each question with the typing animation, collects
//! the player's answer key by key, sends it to the grader and moves on once
//! the grader replies `YES`.
//!
//! The engine is an actor. [`TriviaEngine::run`] selects over its command
//! inbox and at most one pending step, which is either a grading round-trip
//! or the pause after a correct answer. Those two are the only places the
//! engine waits; everything else happens synchronously in response to a
//! command.
//!
//! ```text
//! Idle ─start─> AwaitingInput ─Enter─> Grading ─┬─ YES ──────> Advancing ─┬─> AwaitingInput
//!                    ^                          │                        └─> Finished
//!                    └──── wrong answer / error ┘
//! ```

use crate::animation::{TextAnimator, TypingHandle};
use crate::config::GameConfig;
use crate::ports::conversation_logger::{
    ConversationEvent, ConversationLogger, NoConversationLogger,
};
use crate::ports::grading_gateway::{GatewayError, GradingGateway};
use crate::ports::speech::{NoSpeech, SpeechPort};
use crate::ports::ui_event::UiEvent;
use serde_json::json;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};
use trivia_domain::{GamePhase, Question, Session, Verdict, incorrect_message, truncate};

/// A key press the engine understands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyInput {
    Char(char),
    Backspace,
    Enter,
}

/// Commands sent to a running engine (Actor inbox)
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineCommand {
    Key(KeyInput),
    /// Speak the latest AI text again
    ReplaySpeech,
}

type PendingStep = Pin<Box<dyn Future<Output = StepOutcome> + Send>>;

enum StepOutcome {
    Graded {
        answer: String,
        result: Result<String, GatewayError>,
    },
    AdvanceReady,
}

/// One game's conversation engine
pub struct TriviaEngine {
    session: Session,
    phase: GamePhase,
    buffer: String,
    config: GameConfig,
    auto_speak: bool,
    gateway: Arc<dyn GradingGateway>,
    speech: Arc<dyn SpeechPort>,
    logger: Arc<dyn ConversationLogger>,
    ui_tx: mpsc::UnboundedSender<UiEvent>,
    animator: TextAnimator,
    latest_ai_text: String,
}

impl TriviaEngine {
    pub fn new(
        questions: Vec<Question>,
        gateway: Arc<dyn GradingGateway>,
        config: GameConfig,
        ui_tx: mpsc::UnboundedSender<UiEvent>,
    ) -> Self {
        let animator = TextAnimator::new(
            ui_tx.clone(),
            config.timings.typing_interval,
            config.timings.loading_interval,
        );
        Self {
            session: Session::new(questions),
            phase: GamePhase::Idle,
            buffer: String::new(),
            config,
            auto_speak: false,
            gateway,
            speech: Arc::new(NoSpeech),
            logger: Arc::new(NoConversationLogger),
            ui_tx,
            animator,
            latest_ai_text: String::new(),
        }
    }

    /// Attach speech output; with `auto_speak` every AI text is spoken once typed.
    pub fn with_speech(mut self, speech: Arc<dyn SpeechPort>, auto_speak: bool) -> Self {
        self.speech = speech;
        self.auto_speak = auto_speak;
        self
    }

    pub fn with_conversation_logger(mut self, logger: Arc<dyn ConversationLogger>) -> Self {
        self.logger = logger;
        self
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn pending_answer(&self) -> &str {
        &self.buffer
    }

    /// Run the engine until the command sender is dropped.
    ///
    /// Dropping the returned future (or aborting its task) cancels any
    /// in-flight grading request and the running animation.
    pub async fn run(mut self, mut commands: mpsc::UnboundedReceiver<EngineCommand>) {
        self.start();
        let mut pending: Option<PendingStep> = None;

        loop {
            tokio::select! {
                command = commands.recv() => {
                    let Some(command) = command else { break };
                    if let Some(step) = self.handle_command(command) {
                        debug_assert!(pending.is_none(), "only one step may be pending");
                        pending = Some(step);
                    }
                }
                outcome = wait_for(&mut pending), if pending.is_some() => {
                    pending = self.complete_step(outcome);
                }
            }
        }

        self.animator.cancel();
        debug!("Trivia engine stopped in phase {}", self.phase.as_str());
    }

    // ==================== Transitions ====================

    /// Idle → AwaitingInput (or straight to Finished for an empty set)
    fn start(&mut self) {
        let total = self.session.len();
        info!("Starting trivia session with {} questions", total);
        let _ = self.ui_tx.send(UiEvent::SessionStarted { total });

        if self.session.is_empty() {
            warn!("Question set is empty, nothing to play");
            let _ = self
                .ui_tx
                .send(UiEvent::Flash("The question set has no questions".to_string()));
            let text = self.config.texts.no_questions.clone();
            self.finish(text);
            return;
        }

        self.show_current_question();
        self.set_phase(GamePhase::AwaitingInput);
    }

    fn handle_command(&mut self, command: EngineCommand) -> Option<PendingStep> {
        match command {
            EngineCommand::Key(key) => self.handle_key(key),
            EngineCommand::ReplaySpeech => {
                if !self.latest_ai_text.is_empty() {
                    self.speak(self.latest_ai_text.clone());
                }
                None
            }
        }
    }

    fn handle_key(&mut self, key: KeyInput) -> Option<PendingStep> {
        match key {
            KeyInput::Char(c) => {
                if self.phase.accepts_typing() && !c.is_control() {
                    self.buffer.push(c);
                    self.emit_answer();
                }
                None
            }
            KeyInput::Backspace => {
                if self.phase.accepts_typing() && self.buffer.pop().is_some() {
                    self.emit_answer();
                }
                None
            }
            KeyInput::Enter => {
                if !self.phase.accepts_submit() {
                    debug!("Ignoring Enter while {}", self.phase.as_str());
                    return None;
                }
                if self.buffer.trim().is_empty() {
                    return None;
                }
                self.begin_grading()
            }
        }
    }

    /// AwaitingInput → Grading
    fn begin_grading(&mut self) -> Option<PendingStep> {
        let answer = std::mem::take(&mut self.buffer);
        self.emit_answer();

        let messages = match self.session.grading_request(&answer) {
            Ok(messages) => messages,
            Err(e) => {
                warn!("Cannot grade answer: {}", e);
                return None;
            }
        };

        let index = self.session.current_index();
        info!(
            "Grading answer for question {}: {}",
            index + 1,
            truncate(&answer, 80)
        );
        self.logger.log(ConversationEvent::new(
            "grading_request",
            json!({
                "question_index": index,
                "answer": answer,
                "messages": messages.len(),
            }),
        ));

        self.set_phase(GamePhase::Grading);
        self.animator.start_loading();

        let gateway = Arc::clone(&self.gateway);
        let timeout = self.config.timings.grading_timeout;
        Some(Box::pin(async move {
            let result = match tokio::time::timeout(timeout, gateway.grade(&messages)).await {
                Ok(result) => result,
                Err(_) => Err(GatewayError::Timeout),
            };
            StepOutcome::Graded { answer, result }
        }))
    }

    fn complete_step(&mut self, outcome: StepOutcome) -> Option<PendingStep> {
        match outcome {
            StepOutcome::Graded { answer, result } => self.apply_grading(answer, result),
            StepOutcome::AdvanceReady => {
                self.advance();
                None
            }
        }
    }

    /// Grading → Advancing on `YES`, otherwise back to AwaitingInput
    fn apply_grading(
        &mut self,
        answer: String,
        result: Result<String, GatewayError>,
    ) -> Option<PendingStep> {
        self.animator.stop_loading();

        let index = self.session.current_index();
        let Some(question) = self.session.current_question().cloned() else {
            warn!("Verdict arrived after the session finished");
            return None;
        };

        let raw = match result {
            Ok(raw) => raw,
            Err(e) => {
                warn!("Grading failed for question {}: {}", index + 1, e);
                self.logger.log(ConversationEvent::new(
                    "grading_failed",
                    json!({ "question_index": index, "error": e.to_string() }),
                ));
                let _ = self.ui_tx.send(UiEvent::GradingFailed {
                    error: e.to_string(),
                });
                self.show_ai_text(incorrect_message(&e.to_string(), question.text()));
                self.set_phase(GamePhase::AwaitingInput);
                return None;
            }
        };

        if let Err(e) = self.session.record_exchange(answer, raw.clone()) {
            warn!("Could not record grading exchange: {}", e);
        }

        let verdict = Verdict::judge(&raw, question.answer(), &self.config.redaction);
        debug!(
            "Verdict for question {}: correct={} reply={}",
            index + 1,
            verdict.is_correct(),
            truncate(verdict.shown(), 120)
        );
        self.logger.log(ConversationEvent::new(
            "verdict",
            json!({
                "question_index": index,
                "correct": verdict.is_correct(),
                "reply": raw,
            }),
        ));
        let _ = self.ui_tx.send(UiEvent::VerdictReceived {
            correct: verdict.is_correct(),
        });

        if verdict.is_correct() {
            self.set_phase(GamePhase::Advancing);
            let text = self.config.texts.correct.clone();
            let typing = self.show_ai_text(text);
            let delay = self.config.timings.advance_delay;
            Some(Box::pin(async move {
                typing.finished().await;
                tokio::time::sleep(delay).await;
                StepOutcome::AdvanceReady
            }))
        } else {
            self.show_ai_text(incorrect_message(verdict.shown(), question.text()));
            self.set_phase(GamePhase::AwaitingInput);
            None
        }
    }

    /// Advancing → AwaitingInput or Finished
    fn advance(&mut self) {
        if let Err(e) = self.session.advance() {
            warn!("Cannot advance: {}", e);
            return;
        }

        if self.session.is_finished() {
            let total = self.session.len();
            info!("All {} questions answered", total);
            self.logger.log(ConversationEvent::new(
                "session_finished",
                json!({ "questions": total }),
            ));
            let text = self.config.texts.finished.clone();
            self.finish(text);
        } else {
            self.show_current_question();
            self.set_phase(GamePhase::AwaitingInput);
        }
    }

    fn finish(&mut self, text: String) {
        if !self.buffer.is_empty() {
            self.buffer.clear();
            self.emit_answer();
        }
        self.set_phase(GamePhase::Finished);
        self.show_ai_text(text);
    }

    // ==================== Output ====================

    fn show_current_question(&mut self) {
        let index = self.session.current_index();
        let Some(text) = self.session.current_question().map(|q| q.text().to_string()) else {
            return;
        };
        debug!("Showing question {}/{}", index + 1, self.session.len());
        self.logger.log(ConversationEvent::new(
            "question_shown",
            json!({ "question_index": index, "question": text }),
        ));
        self.show_ai_text(text);
    }

    fn show_ai_text(&mut self, text: String) -> TypingHandle {
        self.latest_ai_text = text.clone();
        let typing = self.animator.type_text(text.clone());

        if self.auto_speak {
            let speech = Arc::clone(&self.speech);
            let done = typing.clone();
            tokio::spawn(async move {
                if done.finished().await
                    && let Err(e) = speech.speak(&text).await
                {
                    warn!("Speech failed: {}", e);
                }
            });
        }

        typing
    }

    fn speak(&self, text: String) {
        let speech = Arc::clone(&self.speech);
        tokio::spawn(async move {
            if let Err(e) = speech.speak(&text).await {
                warn!("Speech failed: {}", e);
            }
        });
    }

    fn set_phase(&mut self, phase: GamePhase) {
        self.phase = phase;
        let _ = self.ui_tx.send(UiEvent::PhaseChanged {
            phase,
            index: self.session.current_index(),
            total: self.session.len(),
        });
    }

    fn emit_answer(&self) {
        let _ = self.ui_tx.send(UiEvent::AnswerChanged(self.buffer.clone()));
    }
}

async fn wait_for(pending: &mut Option<PendingStep>) -> StepOutcome {
    match pending.as_mut() {
        Some(step) => step.await,
        None => std::future::pending().await,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::speech::SpeechError;
    use async_trait::async_trait;
    use std::collections::VecDeque;
    use std::sync::Mutex;
    use std::time::Duration;
    use trivia_domain::{GameTexts, Message, Role};

    // ==================== Test Mocks ====================

    struct ScriptedGateway {
        replies: Mutex<VecDeque<Result<String, GatewayError>>>,
        requests: Mutex<Vec<Vec<Message>>>,
        delay: Duration,
    }

    impl ScriptedGateway {
        fn new(replies: Vec<Result<String, GatewayError>>) -> Arc<Self> {
            Self::with_delay(replies, Duration::ZERO)
        }

        fn with_delay(replies: Vec<Result<String, GatewayError>>, delay: Duration) -> Arc<Self> {
            Arc::new(Self {
                replies: Mutex::new(VecDeque::from(replies)),
                requests: Mutex::new(Vec::new()),
                delay,
            })
        }

        fn request_count(&self) -> usize {
            self.requests.lock().unwrap().len()
        }

        fn last_request(&self) -> Vec<Message> {
            self.requests.lock().unwrap().last().cloned().unwrap()
        }
    }

    #[async_trait]
    impl GradingGateway for ScriptedGateway {
        async fn grade(&self, messages: &[Message]) -> Result<String, GatewayError> {
            self.requests.lock().unwrap().push(messages.to_vec());
            if !self.delay.is_zero() {
                tokio::time::sleep(self.delay).await;
            }
            self.replies
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or_else(|| Err(GatewayError::Other("No more replies".to_string())))
        }
    }

    #[derive(Default)]
    struct RecordingSpeech {
        spoken: Mutex<Vec<String>>,
    }

    #[async_trait]
    impl SpeechPort for RecordingSpeech {
        async fn speak(&self, text: &str) -> Result<(), SpeechError> {
            self.spoken.lock().unwrap().push(text.to_string());
            Ok(())
        }
    }

    // ==================== Helpers ====================

    fn arithmetic() -> Vec<Question> {
        vec![Question::new("2+2?", "4")]
    }

    fn two_questions() -> Vec<Question> {
        vec![
            Question::new("2+2?", "4"),
            Question::new("Capital of France?", "Paris"),
        ]
    }

    fn engine(
        questions: Vec<Question>,
        gateway: Arc<ScriptedGateway>,
    ) -> (TriviaEngine, mpsc::UnboundedReceiver<UiEvent>) {
        let (ui_tx, ui_rx) = mpsc::unbounded_channel();
        (
            TriviaEngine::new(questions, gateway, GameConfig::default(), ui_tx),
            ui_rx,
        )
    }

    fn type_answer(engine: &mut TriviaEngine, text: &str) {
        for c in text.chars() {
            assert!(engine.handle_key(KeyInput::Char(c)).is_none());
        }
    }

    fn drain(rx: &mut mpsc::UnboundedReceiver<UiEvent>) -> Vec<UiEvent> {
        let mut events = Vec::new();
        while let Ok(event) = rx.try_recv() {
            events.push(event);
        }
        events
    }

    fn completed_texts(events: &[UiEvent]) -> Vec<String> {
        events
            .iter()
            .filter_map(|e| match e {
                UiEvent::AiTextComplete(t) => Some(t.clone()),
                _ => None,
            })
            .collect()
    }

    /// Let every running animation finish
    async fn settle() {
        tokio::time::sleep(Duration::from_secs(30)).await;
    }

    // ==================== Tests ====================

    #[tokio::test(start_paused = true)]
    async fn test_start_shows_first_question() {
        let (mut engine, mut rx) = engine(two_questions(), ScriptedGateway::new(vec![]));
        assert_eq!(engine.phase(), GamePhase::Idle);

        engine.start();
        assert_eq!(engine.phase(), GamePhase::AwaitingInput);
        settle().await;

        let events = drain(&mut rx);
        assert_eq!(events[0], UiEvent::SessionStarted { total: 2 });
        assert!(events.contains(&UiEvent::PhaseChanged {
            phase: GamePhase::AwaitingInput,
            index: 0,
            total: 2
        }));
        assert_eq!(completed_texts(&events), vec!["2+2?"]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_typing_and_backspace_edit_buffer() {
        let (mut engine, mut rx) = engine(arithmetic(), ScriptedGateway::new(vec![]));
        engine.start();
        drain(&mut rx);

        type_answer(&mut engine, "45");
        engine.handle_key(KeyInput::Backspace);
        assert_eq!(engine.pending_answer(), "4");

        let answers: Vec<UiEvent> = drain(&mut rx)
            .into_iter()
            .filter(|e| matches!(e, UiEvent::AnswerChanged(_)))
            .collect();
        assert_eq!(
            answers,
            vec![
                UiEvent::AnswerChanged("4".into()),
                UiEvent::AnswerChanged("45".into()),
                UiEvent::AnswerChanged("4".into()),
            ]
        );

        // Backspace on an empty buffer emits nothing
        engine.handle_key(KeyInput::Backspace);
        engine.handle_key(KeyInput::Backspace);
        assert_eq!(engine.pending_answer(), "");
        assert_eq!(drain(&mut rx), vec![UiEvent::AnswerChanged(String::new())]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_blank_enter_is_ignored() {
        let gateway = ScriptedGateway::new(vec![]);
        let (mut engine, _rx) = engine(arithmetic(), gateway.clone());
        engine.start();

        assert!(engine.handle_key(KeyInput::Enter).is_none());
        type_answer(&mut engine, "   ");
        assert!(engine.handle_key(KeyInput::Enter).is_none());
        assert_eq!(engine.phase(), GamePhase::AwaitingInput);
        assert_eq!(gateway.request_count(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_correct_answer_advances_and_resets_transcript() {
        let gateway = ScriptedGateway::new(vec![Ok("YES".to_string())]);
        let (mut engine, mut rx) = engine(two_questions(), gateway.clone());
        engine.start();
        settle().await;
        drain(&mut rx);

        type_answer(&mut engine, "4");
        let step = engine.handle_key(KeyInput::Enter).expect("grading step");
        assert_eq!(engine.phase(), GamePhase::Grading);
        assert_eq!(engine.pending_answer(), "");

        let advance = engine.complete_step(step.await).expect("advance step");
        assert_eq!(engine.phase(), GamePhase::Advancing);
        assert_eq!(engine.session().current_index(), 0);

        assert!(engine.complete_step(advance.await).is_none());
        assert_eq!(engine.phase(), GamePhase::AwaitingInput);
        assert_eq!(engine.session().current_index(), 1);
        assert!(engine.session().transcript().is_none());

        settle().await;
        let events = drain(&mut rx);
        assert!(events.contains(&UiEvent::VerdictReceived { correct: true }));
        assert_eq!(
            completed_texts(&events),
            vec!["Oikein!", "Capital of France?"]
        );

        // The seed instruction named the answer; the user turn is last
        let request = gateway.last_request();
        assert_eq!(request.len(), 3);
        assert!(request[0].content.contains("\"4\""));
        assert_eq!(request[2], Message::user("4"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_wrong_answer_keeps_transcript() {
        let gateway = ScriptedGateway::new(vec![
            Ok("Not correct, try again".to_string()),
            Ok("Still not right.".to_string()),
        ]);
        let (mut engine, mut rx) = engine(arithmetic(), gateway.clone());
        engine.start();
        settle().await;
        drain(&mut rx);

        type_answer(&mut engine, "5");
        let step = engine.handle_key(KeyInput::Enter).unwrap();
        assert!(engine.complete_step(step.await).is_none());
        assert_eq!(engine.phase(), GamePhase::AwaitingInput);
        assert_eq!(engine.session().current_index(), 0);
        assert_eq!(engine.session().transcript().unwrap().len(), 4);

        settle().await;
        let events = drain(&mut rx);
        assert!(events.contains(&UiEvent::VerdictReceived { correct: false }));
        assert_eq!(
            completed_texts(&events),
            vec!["Not correct, try again. 2+2?"]
        );

        type_answer(&mut engine, "3");
        let step = engine.handle_key(KeyInput::Enter).unwrap();
        assert!(engine.complete_step(step.await).is_none());
        assert_eq!(engine.session().current_index(), 0);
        assert_eq!(engine.session().transcript().unwrap().len(), 6);

        // The second request carries the whole conversation so far
        let request = gateway.last_request();
        assert_eq!(request.len(), 5);
        assert_eq!(request[3], Message::assistant("Not correct, try again"));
        assert_eq!(request[4].role, Role::User);

        settle().await;
        assert_eq!(
            completed_texts(&drain(&mut rx)),
            vec!["Still not right. 2+2?"]
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_hint_never_shows_answer() {
        let gateway = ScriptedGateway::new(vec![Ok("Not quite, think Paris".to_string())]);
        let (mut engine, mut rx) = engine(
            vec![Question::new("Capital of France?", "Paris")],
            gateway,
        );
        engine.start();
        settle().await;
        drain(&mut rx);

        type_answer(&mut engine, "Lyon");
        let step = engine.handle_key(KeyInput::Enter).unwrap();
        engine.complete_step(step.await);
        settle().await;

        let events = drain(&mut rx);
        for event in &events {
            if let UiEvent::AiText(text) | UiEvent::AiTextComplete(text) = event {
                assert!(!text.contains("Paris"), "answer leaked in {:?}", text);
            }
        }
        assert_eq!(
            completed_texts(&events),
            vec!["Not quite, think _____. Capital of France?"]
        );

        // The transcript keeps the raw reply for the grader's context
        let transcript = engine.session().transcript().unwrap();
        assert_eq!(transcript.last_verdict(), Some("Not quite, think Paris"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_grading_failure_returns_to_input() {
        let gateway = ScriptedGateway::new(vec![Err(GatewayError::RequestFailed(
            "HTTP 500".to_string(),
        ))]);
        let (mut engine, mut rx) = engine(arithmetic(), gateway);
        engine.start();
        settle().await;
        drain(&mut rx);

        type_answer(&mut engine, "4");
        let step = engine.handle_key(KeyInput::Enter).unwrap();
        assert!(engine.complete_step(step.await).is_none());

        assert_eq!(engine.phase(), GamePhase::AwaitingInput);
        assert!(engine.session().transcript().is_none());

        settle().await;
        let events = drain(&mut rx);
        assert!(events.contains(&UiEvent::GradingFailed {
            error: "Request failed: HTTP 500".to_string()
        }));
        assert_eq!(
            completed_texts(&events),
            vec!["Request failed: HTTP 500. 2+2?"]
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_slow_grader_times_out() {
        let gateway =
            ScriptedGateway::with_delay(vec![Ok("YES".to_string())], Duration::from_secs(600));
        let (mut engine, mut rx) = engine(arithmetic(), gateway);
        engine.start();

        type_answer(&mut engine, "4");
        let step = engine.handle_key(KeyInput::Enter).unwrap();
        engine.complete_step(step.await);

        assert_eq!(engine.phase(), GamePhase::AwaitingInput);
        assert!(
            drain(&mut rx).contains(&UiEvent::GradingFailed {
                error: "Timeout".to_string()
            })
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_enter_not_accepted_while_grading() {
        let gateway = ScriptedGateway::new(vec![Ok("No".to_string())]);
        let (mut engine, _rx) = engine(arithmetic(), gateway.clone());
        engine.start();

        type_answer(&mut engine, "5");
        let step = engine.handle_key(KeyInput::Enter).unwrap();

        // Typing still works, submitting does not
        type_answer(&mut engine, "7");
        assert!(engine.handle_key(KeyInput::Enter).is_none());
        assert_eq!(engine.pending_answer(), "7");

        engine.complete_step(step.await);
        assert_eq!(gateway.request_count(), 1);
        assert_eq!(engine.pending_answer(), "7");
    }

    #[tokio::test(start_paused = true)]
    async fn test_empty_question_set_finishes() {
        let (mut engine, mut rx) = engine(Vec::new(), ScriptedGateway::new(vec![]));
        engine.start();
        assert_eq!(engine.phase(), GamePhase::Finished);

        type_answer(&mut engine, "x");
        assert_eq!(engine.pending_answer(), "");

        settle().await;
        let events = drain(&mut rx);
        assert!(events.iter().any(|e| matches!(e, UiEvent::Flash(_))));
        assert_eq!(
            completed_texts(&events),
            vec![GameTexts::default().no_questions]
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_auto_speak_after_typing_completes() {
        let speech = Arc::new(RecordingSpeech::default());
        let (ui_tx, _rx) = mpsc::unbounded_channel();
        let mut engine = TriviaEngine::new(
            arithmetic(),
            ScriptedGateway::new(vec![]),
            GameConfig::default(),
            ui_tx,
        )
        .with_speech(speech.clone(), true);

        engine.start();
        assert!(speech.spoken.lock().unwrap().is_empty());
        settle().await;
        assert_eq!(*speech.spoken.lock().unwrap(), vec!["2+2?".to_string()]);

        engine.handle_command(EngineCommand::ReplaySpeech);
        settle().await;
        assert_eq!(speech.spoken.lock().unwrap().len(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_superseded_text_is_not_spoken() {
        let speech = Arc::new(RecordingSpeech::default());
        let gateway = ScriptedGateway::with_delay(vec![Ok("No".into())], Duration::from_secs(5));
        let (ui_tx, _rx) = mpsc::unbounded_channel();
        let mut engine = TriviaEngine::new(
            vec![Question::new("A rather long question text?", "x")],
            gateway,
            GameConfig::default(),
            ui_tx,
        )
        .with_speech(speech.clone(), true);

        engine.start();
        type_answer(&mut engine, "y");
        let step = engine.handle_key(KeyInput::Enter).unwrap();
        engine.complete_step(step.await);
        settle().await;

        assert_eq!(
            *speech.spoken.lock().unwrap(),
            vec!["No. A rather long question text?".to_string()]
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_run_plays_last_question_to_completion() {
        let gateway =
            ScriptedGateway::with_delay(vec![Ok("YES".to_string())], Duration::from_secs(2));
        let (engine, mut rx) = engine(arithmetic(), gateway);
        let (cmd_tx, cmd_rx) = mpsc::unbounded_channel();
        let task = tokio::spawn(engine.run(cmd_rx));

        tokio::time::sleep(Duration::from_secs(1)).await;
        cmd_tx.send(EngineCommand::Key(KeyInput::Char('4'))).unwrap();
        cmd_tx.send(EngineCommand::Key(KeyInput::Enter)).unwrap();

        let finished_text = GameTexts::default().finished;
        let mut events = Vec::new();
        loop {
            let event = rx.recv().await.expect("engine alive");
            let done = event == UiEvent::AiTextComplete(finished_text.clone());
            events.push(event);
            if done {
                break;
            }
        }

        assert_eq!(
            completed_texts(&events),
            vec!["2+2?".to_string(), "Oikein!".to_string(), finished_text]
        );

        // Loading dots were shown between the answer and the verdict
        let grading_at = events
            .iter()
            .position(|e| matches!(e, UiEvent::PhaseChanged { phase: GamePhase::Grading, .. }))
            .unwrap();
        let verdict_at = events
            .iter()
            .position(|e| *e == UiEvent::VerdictReceived { correct: true })
            .unwrap();
        let dots: Vec<&UiEvent> = events[grading_at..verdict_at]
            .iter()
            .filter(|e| matches!(e, UiEvent::AiText(t) if t.starts_with('.')))
            .collect();
        assert!(!dots.is_empty());

        assert!(events.contains(&UiEvent::PhaseChanged {
            phase: GamePhase::Finished,
            index: 1,
            total: 1
        }));

        // Finished engines ignore answer input
        cmd_tx.send(EngineCommand::Key(KeyInput::Char('x'))).unwrap();
        drop(cmd_tx);
        task.await.unwrap();
        assert!(
            !drain(&mut rx)
                .iter()
                .any(|e| matches!(e, UiEvent::AnswerChanged(_)))
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_run_stops_when_inbox_closes() {
        let gateway = ScriptedGateway::with_delay(vec![Ok("YES".into())], Duration::from_secs(600));
        let (engine, _rx) = engine(arithmetic(), gateway);
        let (cmd_tx, cmd_rx) = mpsc::unbounded_channel();
        let task = tokio::spawn(engine.run(cmd_rx));

        cmd_tx.send(EngineCommand::Key(KeyInput::Char('4'))).unwrap();
        cmd_tx.send(EngineCommand::Key(KeyInput::Enter)).unwrap();
        tokio::time::sleep(Duration::from_secs(1)).await;
        drop(cmd_tx);

        // Returns without waiting for the in-flight request
        tokio::time::timeout(Duration::from_secs(5), task)
            .await
            .expect("engine stops promptly")
            .unwrap();
    }
}
