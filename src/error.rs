use std::io;

use thiserror::Error;

/// Why a terminal size query failed.
#[derive(Debug, Error)]
pub enum SizeError {
    /// The stream is not attached to a terminal device, e.g. stdout
    /// redirected to a file or pipe.
    #[error("stream is not attached to a terminal")]
    NotATty,

    /// The platform rejected the geometry query for some other reason.
    #[error("terminal size query failed: {0}")]
    Query(#[source] io::Error),
}
