//! Player settings persistence

mod json_repository;

pub use json_repository::JsonSettingsRepository;
