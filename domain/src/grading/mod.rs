//! Grading conversation rules.
//!
//! - [`prompt`]: the seed instruction that tells the grader the answer
//! - [`redaction`]: scrubbing the answer out of grader replies
//! - [`verdict`]: interpreting a grader reply
pub mod prompt;
pub mod redaction;
pub mod verdict;
