//! Port definitions (interfaces for external adapters)
//!
//! Ports define the contracts that infrastructure adapters must implement.

pub mod conversation_logger;
pub mod grading_gateway;
pub mod settings_repository;
pub mod speech;
pub mod ui_event;
