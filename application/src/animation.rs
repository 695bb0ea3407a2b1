//! AI text animations: character-by-character typing and loading dots.
//!
//! Both animations draw on the same surface, so [`TextAnimator`] owns a
//! single animation slot. Starting an animation cancels the one in the slot
//! before spawning the new task, and every frame is tagged with the slot's
//! generation so a superseded task can never draw over its successor.
//!
//! ```text
//! type_text("Hi")   ""  ─100ms─> "H" ─100ms─> "Hi"  (complete)
//! start_loading()   ""  ─500ms─> "." ─500ms─> ".." ─> "..." ─> "" ─> "." ...
//! ```

use crate::ports::ui_event::UiEvent;
use futures::FutureExt;
use futures::future::Shared;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::sync::{mpsc, oneshot};
use tokio::task::JoinHandle;
use tokio::time::{Instant, interval_at};
use tokio_util::sync::CancellationToken;

/// Longest run of loading dots before the cycle restarts
const MAX_LOADING_DOTS: usize = 3;

/// Completion signal of a typing animation.
///
/// Cloneable so both the engine and an auto-speak task can wait on it.
#[derive(Clone)]
pub struct TypingHandle {
    done: Shared<oneshot::Receiver<()>>,
}

impl TypingHandle {
    /// Resolves `true` once the full text is visible, `false` if the
    /// animation was cancelled or superseded first.
    pub async fn finished(self) -> bool {
        self.done.await.is_ok()
    }
}

/// Generation-checked frame output shared with animation tasks
#[derive(Clone)]
struct FrameSink {
    inner: Arc<Mutex<SinkState>>,
}

struct SinkState {
    generation: u64,
    ui_tx: mpsc::UnboundedSender<UiEvent>,
}

impl FrameSink {
    /// Start a new generation and emit its first frame atomically.
    fn begin(&self, first_frame: UiEvent) -> u64 {
        match self.inner.lock() {
            Ok(mut state) => {
                state.generation += 1;
                let _ = state.ui_tx.send(first_frame);
                state.generation
            }
            Err(_) => 0,
        }
    }

    /// Invalidate the current generation without emitting anything.
    fn invalidate(&self) {
        if let Ok(mut state) = self.inner.lock() {
            state.generation += 1;
        }
    }

    /// Emit a frame if `generation` is still current.
    fn emit(&self, generation: u64, event: UiEvent) -> bool {
        match self.inner.lock() {
            Ok(state) if state.generation == generation => {
                let _ = state.ui_tx.send(event);
                true
            }
            _ => false,
        }
    }
}

struct ActiveAnimation {
    token: CancellationToken,
    task: JoinHandle<()>,
}

/// Owner of the AI text animation slot
pub struct TextAnimator {
    sink: FrameSink,
    typing_interval: Duration,
    loading_interval: Duration,
    active: Option<ActiveAnimation>,
}

impl TextAnimator {
    pub fn new(
        ui_tx: mpsc::UnboundedSender<UiEvent>,
        typing_interval: Duration,
        loading_interval: Duration,
    ) -> Self {
        Self {
            sink: FrameSink {
                inner: Arc::new(Mutex::new(SinkState {
                    generation: 0,
                    ui_tx,
                })),
            },
            typing_interval,
            loading_interval,
            active: None,
        }
    }

    /// Reveal `text` one character per typing interval.
    ///
    /// The visible text is reset to empty immediately; after N intervals all
    /// N characters are visible and [`UiEvent::AiTextComplete`] is emitted.
    /// Must be called from within a tokio runtime.
    pub fn type_text(&mut self, text: impl Into<String>) -> TypingHandle {
        self.cancel();
        let text = text.into();
        let (done_tx, done_rx) = oneshot::channel();
        let generation = self.sink.begin(UiEvent::AiText(String::new()));
        let token = CancellationToken::new();

        let sink = self.sink.clone();
        let period = self.typing_interval;
        let task_token = token.clone();
        let task = tokio::spawn(async move {
            let mut ticker = ticker(period);
            let mut shown = String::with_capacity(text.len());
            for ch in text.chars() {
                tokio::select! {
                    biased;
                    _ = task_token.cancelled() => return,
                    _ = ticker.tick() => {}
                }
                shown.push(ch);
                if !sink.emit(generation, UiEvent::AiText(shown.clone())) {
                    return;
                }
            }
            if sink.emit(generation, UiEvent::AiTextComplete(text)) {
                let _ = done_tx.send(());
            }
        });

        self.active = Some(ActiveAnimation { token, task });
        TypingHandle {
            done: done_rx.shared(),
        }
    }

    /// Cycle zero to three dots on the loading interval until stopped.
    pub fn start_loading(&mut self) {
        self.cancel();
        let generation = self.sink.begin(UiEvent::AiText(String::new()));
        let token = CancellationToken::new();

        let sink = self.sink.clone();
        let period = self.loading_interval;
        let task_token = token.clone();
        let task = tokio::spawn(async move {
            let mut ticker = ticker(period);
            let mut dots = 0usize;
            loop {
                tokio::select! {
                    biased;
                    _ = task_token.cancelled() => return,
                    _ = ticker.tick() => {}
                }
                dots = if dots >= MAX_LOADING_DOTS { 0 } else { dots + 1 };
                if !sink.emit(generation, UiEvent::AiText(".".repeat(dots))) {
                    return;
                }
            }
        });

        self.active = Some(ActiveAnimation { token, task });
    }

    /// Stop the loading dots and clear the surface.
    pub fn stop_loading(&mut self) {
        self.cancel();
        self.sink.begin(UiEvent::AiText(String::new()));
    }

    /// Cancel whatever animation is running, leaving the surface as is.
    pub fn cancel(&mut self) {
        self.sink.invalidate();
        if let Some(active) = self.active.take() {
            active.token.cancel();
            active.task.abort();
        }
    }
}

/// Ticks once per `period`, starting one period from now
fn ticker(period: Duration) -> tokio::time::Interval {
    interval_at(Instant::now() + period, period.max(Duration::from_nanos(1)))
}

impl Drop for TextAnimator {
    fn drop(&mut self) {
        self.cancel();
    }
}
