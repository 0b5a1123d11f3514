//! Query the character-grid size of the terminal attached to a stream.
//!
//! ```
//! // Columns of the terminal on stdout, or 0 when stdout is redirected
//! // away from a terminal. Deciding what to do with 0 is the caller's
//! // business (most hosts default to 80).
//! let cols = tty_size::width();
//!
//! // Checked variant, reports why the query failed instead.
//! match tty_size::size() {
//!     Ok(size) => println!("{}x{}", size.cols, size.rows),
//!     Err(e) => eprintln!("{e}"),
//! }
//! ```
//!
//! Every call goes straight to the terminal driver, so a resize between
//! two calls is reflected by the second one. Nothing is cached, no
//! handle is retained, and the query never blocks.

pub mod error;
#[cfg(unix)]
mod unix;
#[cfg(windows)]
mod windows;

pub use error::SizeError;

#[cfg(unix)]
use std::os::fd::AsRawFd;

#[cfg(unix)]
use crate::unix::tty as sys;
#[cfg(windows)]
use crate::windows::console as sys;

/// Character-grid dimensions reported by the terminal driver.
///
/// Built fresh on every query and handed back by value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TermSize {
    /// Number of character rows.
    pub rows: u16,
    /// Number of character columns.
    pub cols: u16,
}

/// Queries the size of the terminal attached to stdout.
pub fn size() -> Result<TermSize, SizeError> {
    sys::stdout_size()
}

/// Width in columns of the terminal attached to stdout.
///
/// This variant has no error channel: when stdout is not a terminal or
/// the query itself fails, it returns 0. Callers that need to tell
/// "80 columns, confirmed" apart from "unknown" should use [`size`].
pub fn width() -> u16 {
    match size() {
        Ok(size) => size.cols,
        Err(e) => {
            log::trace!("terminal width query failed: {e}");
            0
        }
    }
}

/// Height in rows of the terminal attached to stdout.
///
/// Same contract as [`width`]: 0 when the query fails.
pub fn height() -> u16 {
    match size() {
        Ok(size) => size.rows,
        Err(e) => {
            log::trace!("terminal height query failed: {e}");
            0
        }
    }
}

/// Queries the size of the terminal attached to an arbitrary stream.
#[cfg(unix)]
pub fn size_of(stream: &impl AsRawFd) -> Result<TermSize, SizeError> {
    sys::query(stream.as_raw_fd())
}

/// Width in columns of the terminal attached to an arbitrary stream,
/// 0 when the stream is not a terminal.
#[cfg(unix)]
pub fn width_of(stream: &impl AsRawFd) -> u16 {
    match size_of(stream) {
        Ok(size) => size.cols,
        Err(e) => {
            log::trace!("terminal width query failed: {e}");
            0
        }
    }
}
