//! Configuration value types shared by every layer.

pub mod validation;
