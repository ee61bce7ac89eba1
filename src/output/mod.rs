//! Output formatting for the interactive prompts.
//!
//! - [`terminal`] - colored message lines

mod terminal;

pub use terminal::{write_colored, Tone};
