//! Terminal output formatting
//!
//! Text shared by both front ends and pretty-printing for the simple CLI.

pub mod display;
pub mod formatters;

pub use display::print_session;
