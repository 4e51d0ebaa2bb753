//! The implementation used on hosts the shim cannot drive natively.
//!
//! Every operation prints a one-line diagnostic and returns `-ENOSYS`
//! (encoded for its return type). Arguments are never looked at, so nothing
//! is read, written or allocated on the caller's behalf. Having a full
//! implementation here means the library always exports the complete catalog
//! and a missing capability shows up at call time rather than at link time.

use crate::adapter::EncodedReturn;
use crate::ops::PosixOps;
use sysdefs::constants::err_const::ENOSYS_CODE;
use sysdefs::constants::lind_platform_const::{LOG_TARGET, UNSUPPORTED_MESSAGE};
use sysdefs::data::*;

/// Stub implementation of the catalog.
pub struct UnsupportedPosix;

pub(crate) fn diagnostic(operation: &str) -> String {
    format!("{} ({})", UNSUPPORTED_MESSAGE, operation)
}

/// Emits the diagnostic for `operation` and returns its `-ENOSYS` encoding.
///
/// The message goes through `log` when a logger accepts warnings and straight
/// to stderr otherwise, so it is never silently dropped.
fn unsupported<T: EncodedReturn>(operation: &str) -> T {
    if log::log_enabled!(target: LOG_TARGET, log::Level::Warn) {
        log::warn!(target: LOG_TARGET, "{}", diagnostic(operation));
    } else {
        eprintln!("{}", diagnostic(operation));
    }
    T::from_errno(ENOSYS_CODE)
}

macro_rules! impl_unsupported {
    ($($(#[$meta:meta])* $name:ident($($arg:ident: $ty:ty),*) -> $ret:ty;)*) => {
        #[allow(unused_variables)]
        impl PosixOps for UnsupportedPosix {
            $(
                unsafe fn $name($($arg: $ty),*) -> $ret {
                    unsupported(stringify!($name))
                }
            )*
        }
    };
}

for_each_posix_op!(impl_unsupported);
