//! Terminal geometry over the Windows console API, by way of crossterm.

use crate::error::SizeError;
use crate::TermSize;

/// Asks the console attached to the process for its character-grid
/// size. The console API has no errno to tell "no console" apart from
/// other failures, so everything surfaces as [`SizeError::Query`].
pub(crate) fn stdout_size() -> Result<TermSize, SizeError> {
    let (cols, rows) = crossterm::terminal::size().map_err(SizeError::Query)?;
    Ok(TermSize { rows, cols })
}
