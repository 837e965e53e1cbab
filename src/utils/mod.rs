//! Utility modules

pub mod parsing;

pub use parsing::*;
