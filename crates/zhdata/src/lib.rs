//! Functionality for adding traditional Chinese variants to the grammar pattern data files.

pub mod backup;
pub mod grammar_patterns;
pub mod input;
pub mod pipeline;

pub use input::*;
