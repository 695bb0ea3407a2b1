//! Use cases (application services)
//!
//! - [`trivia_engine`]: the turn-taking conversation loop for one game
//! - [`session_controller`]: starts, stops and restarts games

pub mod session_controller;
pub mod trivia_engine;
