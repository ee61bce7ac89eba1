//! Terminal output utilities.
//!
//! Colored message lines for the interactive prompts.

use colored::{ColoredString, Colorize};
use std::io::{self, Write};

/// What a message line reports, which picks its color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    /// Rejected input (yellow).
    Error,
    /// Progress and hints (cyan).
    Info,
    /// Address inside the subnet (green).
    Success,
    /// Address outside the subnet, or an unexpected error (red).
    Failure,
}

impl Tone {
    pub fn paint(self, message: &str) -> ColoredString {
        match self {
            Tone::Error => message.yellow(),
            Tone::Info => message.cyan(),
            Tone::Success => message.green(),
            Tone::Failure => message.red(),
        }
    }
}

/// Write `message` as one colored line.
pub fn write_colored<W: Write>(out: &mut W, message: &str, tone: Tone) -> io::Result<()> {
    writeln!(out, "{}", tone.paint(message))
}
