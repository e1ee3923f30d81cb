//! Raw-mode checkbox selector
//!
//! Renders the video list as a checkbox menu and redraws it in place after
//! every state change, so the terminal never accumulates scrollback. The
//! state machine is plain data ([`SelectionState`] + [`Step`]) and is driven
//! by one decoded [`Key`] per loop iteration, which keeps it testable
//! without a TTY.
//!
//! Raw mode and cursor visibility are global terminal state; both are owned
//! by an RAII guard so every exit path (confirm, abort, I/O error, panic)
//! restores them.

use crossterm::style::Stylize;
use crossterm::terminal::{self, ClearType};
use crossterm::{cursor, execute, queue};
use std::io::{self, Write};

use super::key::{self, Key};
use super::{SelectError, SelectResult};
use crate::Video;

/// What the event loop should do after handling a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// State changed, redraw the list
    Redraw,
    /// Nothing changed
    Idle,
    /// Freeze the selection and return it
    Confirm,
    /// Discard the selection and fail with [`SelectError::Aborted`]
    Abort,
}

/// State of one interactive selection session.
///
/// Every video starts out selected: the common case is "download
/// everything", which then needs a single Enter. Navigation wraps around at
/// both ends of the list.
#[derive(Debug)]
pub struct SelectionState<'a> {
    videos: &'a [Video],
    selected: Vec<bool>,
    cursor: usize,
    use_episode: bool,
    highlight: bool,
    rendered: bool,
}

impl<'a> SelectionState<'a> {
    /// Create a session with every video pre-selected and the cursor on top.
    pub fn new(videos: &'a [Video], use_episode: bool) -> Self {
        Self {
            videos,
            selected: vec![true; videos.len()],
            cursor: 0,
            use_episode,
            highlight: true,
            rendered: false,
        }
    }

    /// Apply one key event and report what the loop should do next.
    pub fn handle_key(&mut self, key: Key) -> Step {
        match key {
            Key::Up => {
                self.cursor = (self.cursor + self.videos.len() - 1) % self.videos.len();
                Step::Redraw
            }
            Key::Down => {
                self.cursor = (self.cursor + 1) % self.videos.len();
                Step::Redraw
            }
            Key::Space => {
                self.selected[self.cursor] = !self.selected[self.cursor];
                self.cursor = (self.cursor + 1) % self.videos.len();
                Step::Redraw
            }
            Key::Enter => {
                self.highlight = false;
                Step::Confirm
            }
            Key::CtrlC => Step::Abort,
            Key::Unknown => Step::Idle,
        }
    }

    /// Ascending indices of all selected videos. May be empty.
    pub fn selected_indices(&self) -> Vec<usize> {
        self.selected
            .iter()
            .enumerate()
            .filter_map(|(i, &on)| on.then_some(i))
            .collect()
    }

    /// Currently highlighted index.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Whether the video at `index` is currently selected.
    pub fn is_selected(&self, index: usize) -> bool {
        self.selected[index]
    }

    /// Draw the list, in place after the first render.
    fn render(&mut self, out: &mut impl Write) -> io::Result<()> {
        if self.rendered {
            // Jump from the help line back to the first video row.
            let rows = u16::try_from(self.videos.len()).unwrap_or(u16::MAX);
            queue!(out, cursor::MoveUp(rows))?;
        } else {
            queue!(out, terminal::Clear(ClearType::CurrentLine))?;
            write!(out, "\r{}\r\n", "Choose videos to download:".cyan().bold())?;
        }

        let episode_width = if self.use_episode {
            self.videos.iter().map(|v| v.episode.len()).max().unwrap_or(0)
        } else {
            0
        };

        for (i, video) in self.videos.iter().enumerate() {
            let is_current = self.highlight && i == self.cursor;
            self.render_row(out, video, self.selected[i], is_current, episode_width)?;
        }

        if !self.rendered {
            queue!(out, terminal::Clear(ClearType::CurrentLine))?;
            write!(
                out,
                "\r{}",
                "Navigation: ↑↓/j/k  Toggle: Space  Confirm: Enter".dim()
            )?;

            self.rendered = true;
        }

        out.flush()
    }

    fn render_row(
        &self,
        out: &mut impl Write,
        video: &Video,
        is_selected: bool,
        is_current: bool,
        episode_width: usize,
    ) -> io::Result<()> {
        queue!(out, terminal::Clear(ClearType::CurrentLine))?;

        let checkbox = if is_selected {
            "[x]".green().to_string()
        } else {
            "[ ]".to_string()
        };

        let label = if self.use_episode {
            format!("{:<episode_width$} {}", video.episode, video.title)
        } else {
            video.title.clone()
        };

        let label = if is_current {
            label.bold().to_string()
        } else {
            label.dim().to_string()
        };

        write!(out, "\r  {checkbox} {label}\r\n")
    }
}

/// Run the interactive selector. Blocks until Enter or Ctrl-C.
pub fn select(videos: &[Video], use_episode: bool) -> SelectResult<Vec<usize>> {
    if videos.is_empty() {
        return Ok(Vec::new());
    }

    let _guard = RawModeGuard::acquire()?;

    let mut out = io::stdout();
    let mut state = SelectionState::new(videos, use_episode);
    state.render(&mut out).map_err(SelectError::Io)?;

    loop {
        match state.handle_key(key::read_key()?) {
            Step::Redraw => state.render(&mut out).map_err(SelectError::Io)?,
            Step::Idle => {}
            Step::Confirm => {
                // One last draw without highlighting, then leave the list
                // on screen and move below the help line.
                state.render(&mut out).map_err(SelectError::Io)?;
                write!(out, "\r\n").map_err(SelectError::Io)?;
                out.flush().map_err(SelectError::Io)?;

                return Ok(state.selected_indices());
            }
            Step::Abort => return Err(SelectError::Aborted),
        }
    }
}


/// Scoped ownership of the terminal's raw mode and cursor visibility.
struct RawModeGuard;

impl RawModeGuard {
    fn acquire() -> SelectResult<Self> {
        terminal::enable_raw_mode().map_err(SelectError::Terminal)?;

        // The guard now exists, so a failure to hide the cursor still
        // restores raw mode on drop.
        let guard = Self;
        execute!(io::stdout(), cursor::Hide).map_err(SelectError::Terminal)?;

        Ok(guard)
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        let _ = terminal::disable_raw_mode();
        let _ = execute!(io::stdout(), cursor::Show);
    }
}
