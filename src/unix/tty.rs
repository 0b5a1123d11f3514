//! Terminal geometry over the POSIX `TIOCGWINSZ` ioctl.

use std::io;
use std::mem;
use std::os::fd::RawFd;

use nix::errno::Errno;
use nix::libc::{self, winsize};

use crate::error::SizeError;
use crate::TermSize;

/// Asks the terminal driver for the window size of `fd`.
///
/// Fresh ioctl on every call; the driver reports whatever geometry the
/// terminal has at this instant.
pub(crate) fn query(fd: RawFd) -> Result<TermSize, SizeError> {
    // Zeroed so a failed query can never read back stack garbage.
    let mut ws: winsize = unsafe { mem::zeroed() };

    if unsafe { libc::ioctl(fd, libc::TIOCGWINSZ, &mut ws as *mut _) } < 0 {
        return Err(match Errno::last() {
            Errno::ENOTTY => SizeError::NotATty,
            errno => SizeError::Query(io::Error::from_raw_os_error(errno as i32)),
        });
    }

    Ok(TermSize {
        rows: ws.ws_row,
        cols: ws.ws_col,
    })
}

pub(crate) fn stdout_size() -> Result<TermSize, SizeError> {
    query(libc::STDOUT_FILENO)
}

#[cfg(test)]
mod tests {
    use std::os::fd::AsRawFd;

    use nix::pty::openpty;
    use nix::unistd;

    use super::*;

    fn configure(fd: RawFd, cols: u16, rows: u16) {
        let ws = winsize {
            ws_row: rows,
            ws_col: cols,
            ws_xpixel: 0,
            ws_ypixel: 0,
        };
        let res = unsafe { libc::ioctl(fd, libc::TIOCSWINSZ, &ws as *const _) };
        assert_eq!(res, 0);
    }

    #[test]
    fn reports_configured_size() {
        let ends = openpty(None, None).unwrap();

        configure(ends.slave, 120, 40);
        let size = query(ends.slave).unwrap();
        assert_eq!(size.cols, 120);
        assert_eq!(size.rows, 40);

        configure(ends.slave, 80, 24);
        let size = query(ends.slave).unwrap();
        assert_eq!(size.cols, 80);
        assert_eq!(size.rows, 24);

        let _ = unistd::close(ends.master);
        let _ = unistd::close(ends.slave);
    }

    #[test]
    fn reflects_resize_between_queries() {
        let ends = openpty(None, None).unwrap();

        configure(ends.slave, 80, 24);
        assert_eq!(query(ends.slave).unwrap().cols, 80);

        configure(ends.slave, 200, 24);
        assert_eq!(query(ends.slave).unwrap().cols, 200);

        let _ = unistd::close(ends.master);
        let _ = unistd::close(ends.slave);
    }

    #[test]
    fn regular_file_is_not_a_terminal() {
        let file = tempfile::tempfile().unwrap();

        match query(file.as_raw_fd()) {
            Err(SizeError::NotATty) => {}
            other => panic!("expected NotATty, got {other:?}"),
        }
    }
}
