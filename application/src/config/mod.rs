//! Application configuration.
//!
//! - [`GameConfig`]: static tuning for the conversation engine, built from
//!   the config file at startup
//! - [`Settings`]: the player's persisted settings (token, question set,
//!   auto-speak), edited from the settings overlay

mod game_config;
mod settings;

pub use game_config::{AnimationTimings, GameConfig};
pub use settings::Settings;
