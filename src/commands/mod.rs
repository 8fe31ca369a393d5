//! Command implementations for the unitygen CLI

pub mod check;
pub mod generate;
