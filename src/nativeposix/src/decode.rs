//! Caller-side decoding of encoded results.
//!
//! The shim itself never decodes anything. These helpers are for Rust code
//! that links the rlib and wants a `Result` instead of a signed value.

use std::fmt;

use crate::adapter::EncodedReturn;
use sysdefs::constants::err_const::Errno;

/// A failure carried in-band by an encoded result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PosixError {
    /// Absolute host errno value.
    pub code: i32,
}

impl PosixError {
    /// The matching `Errno` variant, when the code uses Linux numbering and is
    /// one the enum lists.
    pub fn errno(&self) -> Option<Errno> {
        Errno::from_discriminant(self.code)
    }
}

impl fmt::Display for PosixError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.errno() {
            Some(errno) => write!(f, "{:?} (errno {})", errno, self.code),
            None => write!(f, "errno {}", self.code),
        }
    }
}

impl std::error::Error for PosixError {}

impl From<PosixError> for std::io::Error {
    fn from(err: PosixError) -> Self {
        std::io::Error::from_raw_os_error(err.code)
    }
}

/// Splits an encoded result into the host value or its errno.
///
/// Works for every return type in the catalog: a negative integer, a
/// wrapped-negative `uid_t`/`gid_t`, or an `mmap` address in the top page of
/// the address space is a failure.
pub fn decode<T: EncodedReturn>(ret: T) -> Result<T, PosixError> {
    match ret.error_code() {
        Some(code) => Err(PosixError { code }),
        None => Ok(ret),
    }
}
