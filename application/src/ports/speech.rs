//! Speech output port

use async_trait::async_trait;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SpeechError {
    #[error("No speech synthesizer available")]
    Unavailable,

    #[error("Speech command failed: {0}")]
    CommandFailed(String),
}

/// Text-to-speech output.
///
/// Speaking a new text replaces whatever is still being spoken.
#[async_trait]
pub trait SpeechPort: Send + Sync {
    async fn speak(&self, text: &str) -> Result<(), SpeechError>;

    /// Whether a synthesizer was found at all
    fn is_available(&self) -> bool {
        true
    }
}

/// No-op speech for tests and systems without a synthesizer
pub struct NoSpeech;

#[async_trait]
impl SpeechPort for NoSpeech {
    async fn speak(&self, _text: &str) -> Result<(), SpeechError> {
        Ok(())
    }

    fn is_available(&self) -> bool {
        false
    }
}
