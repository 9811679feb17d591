// SPDX-License-Identifier: MIT

use std::{fmt, io};

// Everything fatal here is an I/O failure on an input or output file; list
// parsing is best-effort and never fails the run.

#[derive(Debug)]
pub enum SiftError {
    Io(io::Error),
}

// Allows conversion to SiftError, required for main() to return Result<()> and for '?' to work.

impl From<io::Error> for SiftError {
    fn from(e: io::Error) -> Self {
        SiftError::Io(e)
    }
}

impl fmt::Display for SiftError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SiftError::Io(e) => write!(f, "I/O error: {}", e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn io_errors_convert_and_display() {
        let e = io::Error::new(io::ErrorKind::NotFound, "no such list file");
        let err: SiftError = e.into();
        assert_eq!(err.to_string(), "I/O error: no such list file");
    }
}
