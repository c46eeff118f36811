//! Word lists for secret word selection
//!
//! Provides embedded word lists compiled into the binary and the [`WordSource`] seam the
//! game draws secret words through.

mod embedded;
pub mod loader;
mod source;

pub use embedded::{EASY, EASY_COUNT, HARD, HARD_COUNT, MEDIUM, MEDIUM_COUNT};
pub use source::{RandomWords, WordLists, WordSource};

#[cfg(test)]
pub(crate) use source::testing;
