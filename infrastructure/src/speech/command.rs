//! Text-to-speech through a locally installed speech command.
//!
//! Supports `espeak-ng` / `espeak` (Linux) and `say` (macOS). The voice is
//! chosen once, when the adapter is created, from the command's own voice
//! list.

use async_trait::async_trait;
use std::path::PathBuf;
use std::process::Stdio;
use tokio::process::{Child, Command};
use tokio::sync::Mutex;
use tracing::{debug, info, warn};
use trivia_application::{SpeechError, SpeechPort};

/// Supported speech programs, in discovery order
const CANDIDATES: [&str; 3] = ["espeak-ng", "espeak", "say"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpeechProgram {
    Espeak,
    Say,
}

impl SpeechProgram {
    /// Guess the argument dialect from the executable name
    pub fn from_path(path: &std::path::Path) -> Self {
        match path.file_stem().and_then(|s| s.to_str()) {
            Some("say") => SpeechProgram::Say,
            _ => SpeechProgram::Espeak,
        }
    }

    fn list_voices_args(self) -> &'static [&'static str] {
        match self {
            SpeechProgram::Espeak => &["--voices"],
            SpeechProgram::Say => &["-v", "?"],
        }
    }

    fn parse_voices(self, output: &str) -> Vec<Voice> {
        match self {
            SpeechProgram::Espeak => parse_espeak_voices(output),
            SpeechProgram::Say => parse_say_voices(output),
        }
    }
}

/// One installed voice
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Voice {
    /// Value passed to `-v`
    pub id: String,
    /// Human-readable name
    pub name: String,
    /// Language tag as reported by the program, e.g. `fi` or `fi_FI`
    pub language: String,
}

/// Parse `espeak --voices` output.
///
/// ```text
/// Pty Language       Age/Gender VoiceName          File                 Other Languages
///  5  fi              --/M      Finnish            urj/fi
/// ```
pub fn parse_espeak_voices(output: &str) -> Vec<Voice> {
    output
        .lines()
        .skip(1)
        .filter_map(|line| {
            let mut cols = line.split_whitespace();
            let _priority = cols.next()?;
            let language = cols.next()?;
            let _gender = cols.next()?;
            let name = cols.next()?;
            Some(Voice {
                id: language.to_string(),
                name: name.replace('_', " "),
                language: language.to_string(),
            })
        })
        .collect()
}

/// Parse `say -v ?` output.
///
/// ```text
/// Bad News            en_US    # The light you see at the end of the tunnel...
/// Satu                fi_FI    # Hei, nimeni on Satu.
/// ```
pub fn parse_say_voices(output: &str) -> Vec<Voice> {
    output
        .lines()
        .filter_map(|line| {
            let head = line.split('#').next()?.trim_end();
            let (name, language) = head.rsplit_once(char::is_whitespace)?;
            let name = name.trim();
            if name.is_empty() || language.is_empty() {
                return None;
            }
            Some(Voice {
                id: name.to_string(),
                name: name.to_string(),
                language: language.to_string(),
            })
        })
        .collect()
}

fn matches_locale(language: &str, locale: &str) -> bool {
    let language = language.replace('_', "-").to_lowercase();
    let locale = locale.replace('_', "-").to_lowercase();
    language == locale
        || language
            .strip_prefix(&locale)
            .is_some_and(|rest| rest.starts_with('-'))
}

/// Pick the voice for `locale`, preferring one whose name contains `preferred`.
pub fn select_voice(voices: &[Voice], locale: &str, preferred: Option<&str>) -> Option<Voice> {
    let candidates: Vec<&Voice> = voices
        .iter()
        .filter(|v| matches_locale(&v.language, locale))
        .collect();

    if let Some(preferred) = preferred.map(str::to_lowercase)
        && let Some(voice) = candidates
            .iter()
            .find(|v| v.name.to_lowercase().contains(&preferred))
    {
        return Some((*voice).clone());
    }

    candidates.first().map(|v| (*v).clone())
}

/// [`SpeechPort`] running an external speech program.
///
/// Only one utterance plays at a time: speaking kills the previous process.
pub struct CommandSpeech {
    program: PathBuf,
    voice: Option<Voice>,
    current: Mutex<Option<Child>>,
}

impl CommandSpeech {
    /// Find a speech program and choose a voice.
    ///
    /// Returns `None` when no program is installed, so speech degrades to a
    /// no-op.
    pub async fn try_new(
        command: Option<&str>,
        locale: &str,
        preferred_voice: Option<&str>,
    ) -> Option<Self> {
        let program = match command {
            Some(command) => which::which(command).ok(),
            None => CANDIDATES.iter().find_map(|c| which::which(c).ok()),
        };
        let Some(program) = program else {
            debug!("No speech command found, speech disabled");
            return None;
        };
        let dialect = SpeechProgram::from_path(&program);

        let voices = match Command::new(&program)
            .args(dialect.list_voices_args())
            .stderr(Stdio::null())
            .output()
            .await
        {
            Ok(output) if output.status.success() => {
                dialect.parse_voices(&String::from_utf8_lossy(&output.stdout))
            }
            Ok(output) => {
                warn!("Listing voices failed with {}", output.status);
                Vec::new()
            }
            Err(e) => {
                warn!("Could not list voices of {}: {}", program.display(), e);
                Vec::new()
            }
        };

        let voice = select_voice(&voices, locale, preferred_voice);
        match &voice {
            Some(v) => info!(
                "Speech via {} using voice {} ({})",
                program.display(),
                v.name,
                v.language
            ),
            None => warn!(
                "No '{}' voice among {} voices, using the default voice",
                locale,
                voices.len()
            ),
        }

        Some(Self {
            program,
            voice,
            current: Mutex::new(None),
        })
    }

    fn command_for(&self, text: &str) -> Command {
        let mut cmd = Command::new(&self.program);
        if let Some(voice) = &self.voice {
            cmd.arg("-v").arg(&voice.id);
        }
        cmd.arg(text)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .kill_on_drop(true);
        cmd
    }
}

#[async_trait]
impl SpeechPort for CommandSpeech {
    async fn speak(&self, text: &str) -> Result<(), SpeechError> {
        let mut current = self.current.lock().await;
        if let Some(mut previous) = current.take() {
            let _ = previous.start_kill();
        }

        if text.trim().is_empty() {
            return Ok(());
        }

        let child = self
            .command_for(text)
            .spawn()
            .map_err(|e| SpeechError::CommandFailed(e.to_string()))?;
        *current = Some(child);
        Ok(())
    }
}
