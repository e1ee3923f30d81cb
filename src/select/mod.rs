//! Interactive and text-based video selection
//!
//! Channels usually contain more videos than the user wants, so the
//! orchestrator asks for a subset before downloading. Two frontends share
//! the same contract of returning sorted 0-based indices:
//!
//! - [`interactive`] - a raw-mode checkbox selector, used when stdin is a
//!   terminal
//! - [`text`] - a `1-3,5`-style range parser over a printed table, used for
//!   piped input and scripts
//!
//! The `--all` flag and empty video lists bypass both frontends.

use std::io::IsTerminal;

use crate::ui;
use crate::Video;

pub mod interactive;
pub mod key;
pub mod text;

pub use interactive::{SelectionState, Step};
pub use key::Key;

/// Result alias for selection operations.
pub type SelectResult<T> = Result<T, SelectError>;

/// Errors from the selection frontends.
///
/// [`SelectError::Aborted`] is an expected condition: the user pressed
/// Ctrl-C in the selector and the caller should exit quietly. The parsing
/// variants each name the exact rule a text selection violated.
#[derive(Debug, thiserror::Error)]
pub enum SelectError {
    /// The user aborted the selection with Ctrl-C
    #[error("aborted by user")]
    Aborted,

    /// The terminal could not be switched into raw mode
    #[error("failed to set raw mode: {0}")]
    Terminal(#[source] std::io::Error),

    /// Reading a key event or writing to the terminal failed
    #[error("terminal I/O failed: {0}")]
    Io(#[source] std::io::Error),

    /// A token contained a hyphen but not exactly two non-empty parts
    #[error("invalid range format: {0}")]
    InvalidRangeFormat(String),

    /// A single token was not a number
    #[error("invalid number: {0}")]
    InvalidNumber(String),

    /// The start of a range was not a number
    #[error("invalid start number: {0}")]
    InvalidStartNumber(String),

    /// The end of a range was not a number
    #[error("invalid end number: {0}")]
    InvalidEndNumber(String),

    /// A range was out of bounds or ran backwards
    #[error("invalid range: {start}-{end} (must be 1-{max})")]
    InvalidRange {
        /// 1-based range start as entered
        start: usize,
        /// 1-based range end as entered
        end: usize,
        /// Number of selectable items
        max: usize,
    },

    /// A single number was out of bounds
    #[error("number out of range: {number} (must be 1-{max})")]
    NumberOutOfRange {
        /// 1-based number as entered
        number: usize,
        /// Number of selectable items
        max: usize,
    },

    /// The input parsed but produced no indices (e.g. only separators)
    #[error("no valid selections found")]
    NoValidSelections,
}

/// Ask the user which videos to download, returning sorted 0-based indices.
///
/// With `all` set, or for an empty list, every index is returned without any
/// UI. Otherwise the interactive selector runs when stdin is a terminal and
/// the text fallback when it is not. An empty result is a legal outcome
/// meaning "nothing to do".
pub fn select_videos(videos: &[Video], all: bool, use_episode: bool) -> SelectResult<Vec<usize>> {
    if all || videos.is_empty() {
        return Ok((0..videos.len()).collect());
    }

    if std::io::stdin().is_terminal() {
        return interactive::select(videos, use_episode);
    }

    text::print_video_table(videos, use_episode);

    println!("\nSelect videos:");
    println!("   - Single: '1' or '3,5,7'");
    println!("   - Range:  '1-5' or '1-3,7-9'");
    println!("   - All:    Press Enter");

    let input = ui::input("\nSelection: ").map_err(SelectError::Io)?;
    if input.is_empty() {
        // Empty input is the select-all convention, not a parse error.
        return Ok((0..videos.len()).collect());
    }

    text::parse_selection(&input, videos.len())
}
