//! The call adapter: runs one host call and folds its errno into the return
//! value.
//!
//! Host calls report failure on two channels: a sentinel return value (`-1`,
//! or `MAP_FAILED` for `mmap`) and the thread's errno. The managed caller can
//! only see the return value, so the adapter replaces the sentinel with
//! `-errno`, cast to the call's own return type. Errno itself is put back to
//! whatever it held before the call, so from the caller's side the adapter
//! never touches it.

use sysdefs::data::c_void;

/// A return type that can carry either a host result or a negated errno.
///
/// Legitimate successes of every bound call are non-negative (or a real
/// mapping address), so `-errno` never collides with a success value.
pub trait EncodedReturn: Copy {
    /// True when the raw host result is this type's failure sentinel.
    fn is_failure(&self) -> bool;

    /// Builds the in-band encoding of `code`, i.e. `(T)(long)-code`.
    fn from_errno(code: i32) -> Self;

    /// Recovers the errno from an encoded value, `None` on success.
    fn error_code(&self) -> Option<i32>;
}

macro_rules! impl_encoded_signed {
    ($($t:ty),*) => {
        $(
            impl EncodedReturn for $t {
                #[inline]
                fn is_failure(&self) -> bool {
                    *self == -1
                }

                #[inline]
                fn from_errno(code: i32) -> Self {
                    (code as $t).wrapping_neg()
                }

                #[inline]
                fn error_code(&self) -> Option<i32> {
                    if *self < 0 {
                        Some(self.wrapping_neg() as i32)
                    } else {
                        None
                    }
                }
            }
        )*
    };
}

impl_encoded_signed!(i32, i64, isize);

/// Largest errno recognised in the unsigned and pointer encodings. Values
/// above the window are real ids or addresses, not errors.
const MAX_ERRNO: i32 = 4095;

// uid_t / gid_t, where ids of 2^31 and up are legitimate
impl EncodedReturn for u32 {
    #[inline]
    fn is_failure(&self) -> bool {
        *self == u32::MAX
    }

    #[inline]
    fn from_errno(code: i32) -> Self {
        (code as u32).wrapping_neg()
    }

    #[inline]
    fn error_code(&self) -> Option<i32> {
        let signed = *self as i32;
        if (-MAX_ERRNO..0).contains(&signed) {
            Some(signed.wrapping_neg())
        } else {
            None
        }
    }
}

impl EncodedReturn for *mut c_void {
    #[inline]
    fn is_failure(&self) -> bool {
        // MAP_FAILED
        *self as isize == -1
    }

    #[inline]
    fn from_errno(code: i32) -> Self {
        (code as isize).wrapping_neg() as *mut c_void
    }

    #[inline]
    fn error_code(&self) -> Option<i32> {
        // the top page of the address space is never handed out by mmap
        let value = *self as isize;
        if (-(MAX_ERRNO as isize)..0).contains(&value) {
            Some(value.wrapping_neg() as i32)
        } else {
            None
        }
    }
}

#[cfg(lind_native_posix)]
pub use native_adapter::*;

#[cfg(lind_native_posix)]
mod native_adapter {
    use super::EncodedReturn;
    use sysdefs::constants::err_const::{get_errno, set_errno};

    /// Snapshot of the thread's errno, written back when dropped.
    ///
    /// Restoration happens on every way out of the scope holding the guard,
    /// including early returns and unwinding.
    #[must_use = "errno is restored when the guard is dropped"]
    pub struct ErrnoGuard {
        saved: i32,
    }

    impl ErrnoGuard {
        pub fn capture() -> Self {
            ErrnoGuard { saved: get_errno() }
        }

        pub fn saved(&self) -> i32 {
            self.saved
        }
    }

    impl Drop for ErrnoGuard {
        fn drop(&mut self) {
            set_errno(self.saved);
        }
    }

    /// Runs `raw_call` exactly once and encodes its result.
    ///
    /// If the result is the type's sentinel, errno is read (before the guard
    /// restores it) and returned negated. Otherwise the raw result is returned
    /// untouched. If errno happened to be 0 at a sentinel failure the result
    /// is 0, which the caller cannot tell apart from success; that comes from
    /// the host breaking its own contract and is passed through as is.
    #[inline]
    pub fn call<T: EncodedReturn>(raw_call: impl FnOnce() -> T) -> T {
        let _guard = ErrnoGuard::capture();
        let result = raw_call();
        if result.is_failure() {
            T::from_errno(get_errno())
        } else {
            result
        }
    }
}
