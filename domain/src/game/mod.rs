//! Game flow value objects.

pub mod phase;
pub mod texts;
