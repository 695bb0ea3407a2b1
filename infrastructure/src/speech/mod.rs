//! Speech output adapters

mod command;

pub use command::{
    CommandSpeech, SpeechProgram, Voice, parse_espeak_voices, parse_say_voices, select_voice,
};
