//! Errno values and access to the calling thread's errno.
//!
//! The host keeps errno per thread. The shim only ever reads it right after a
//! failed call and writes it back to the value it had on entry, so nothing here
//! keeps state of its own.

// Let's not have clippy warn for EAGAIN, etc.
#![allow(clippy::upper_case_acronyms)]
#![allow(dead_code)]

use std::os::raw::c_int;

#[doc(hidden)]
macro_rules! reversible_enum {
    ($(#[$settings: meta])* $visibility: vis enum $enumname:ident {
        $($valuename: ident = $value: expr,)*
    }) => {
        $(#[$settings])*
        $visibility enum $enumname {
            $($valuename = $value,)*
        }

        impl $enumname {
            /// Looks up the variant for an absolute errno value.
            $visibility fn from_discriminant(v: i32) -> Option<Self> {
                match v {
                    $($value => Some($enumname::$valuename),)*
                    _ => None,
                }
            }
        }
    }
}

reversible_enum! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    #[repr(i32)]
    /// Errno values for OS calls, using Linux numbering.
    #[non_exhaustive]
    pub enum Errno {
        EPERM = 1,	// Operation not permitted
        ENOENT = 2,     // No such file or directory
        ESRCH = 3,	// No such process
        EINTR = 4,	// Interrupted system call
        EIO = 5,	// I/O error
        ENXIO = 6,	// No such device or address
        EBIG = 7,	// Argument list too long
        ENOEXEC = 8,	// Exec format error
        EBADF = 9,	// Bad file number
        ECHILD = 10,	// No child processes
        EAGAIN = 11,	// Try again
        ENOMEM = 12,	// Out of memory
        EACCES = 13,	// Permission denied
        EFAULT = 14,	// Bad address
        ENOTBLK = 15,	// Block device required
        EBUSY = 16,	// Device or resource busy
        EEXIST = 17,	// File exists
        EXDEV = 18,	// Cross-device link
        ENODEV = 19,	// No such device
        ENOTDIR = 20,	// Not a directory
        EISDIR = 21,	// Is a directory
        EINVAL = 22,	// Invalid argument
        ENFILE = 23,	// File table overflow
        EMFILE = 24,	// Too many open files
        ENOTTY = 25,	// Not a typewriter
        ETXTBSY = 26,	// Text file busy
        EFBIG = 27,	// File too large
        ENOSPC = 28,	// No space left on device
        ESPIPE = 29,	// Illegal seek
        EROFS = 30,	// Read-only file system
        EMLINK = 31,	// Too many links
        EPIPE = 32,	// Broken pipe
        EDOM = 33,	// Math argument out of domain of func
        ERANGE = 34,	// Math result not representable
        EDEADLK = 35,	// Resource deadlock would occur
        ENAMETOOLONG = 36,	// File name too long
        ENOLCK = 37,  // No record locks available
        ENOSYS = 38,	// Function not implemented
        ENOTEMPTY = 39,	// Directory not empty
        ELOOP = 40,	// Too many symbolic links encountered
        ENOTSOCK = 88,	// Socket operation on non-socket
        EDESTADDRREQ = 89,	// Destination address required
        EMSGSIZE = 90,	// Message too long
        EPROTOTYPE = 91,	// Protocol wrong type for socket
        ENOPROTOOPT = 92,	// Protocol not available
        EPROTONOSUPPORT = 93,	// Protocol not supported
        EOPNOTSUPP = 95,	// Operation not supported on transport endpoint
        EAFNOSUPPORT = 97,	// Address family not supported by protocol
        EADDRINUSE = 98,	// Address already in use
        EADDRNOTAVAIL = 99,	// Cannot assign requested address
        ENETUNREACH = 101,	// Network is unreachable
        ECONNABORTED = 103,	// Software caused connection abort
        ECONNRESET = 104,	// Connection reset by peer
        EISCONN = 106,	// Transport endpoint is already connected
        ENOTCONN = 107,	// Transport endpoint is not connected
        ETIMEDOUT = 110,	// Connection timed out
        ECONNREFUSED = 111,	// Connection refused
        EALREADY = 114,	// Operation already in progress
        EINPROGRESS = 115,	// Operation now in progress
    }
}

cfg_if::cfg_if! {
    if #[cfg(unix)] {
        /// The host's "function not implemented" code, returned (negated) for
        /// every operation the current build cannot perform.
        pub const ENOSYS_CODE: c_int = libc::ENOSYS;
    } else {
        // MSVC CRT value
        pub const ENOSYS_CODE: c_int = 40;
    }
}

cfg_if::cfg_if! {
    if #[cfg(any(target_os = "linux", target_os = "emscripten", target_os = "redox"))] {
        #[inline]
        fn errno_location() -> *mut c_int {
            unsafe { libc::__errno_location() }
        }
    } else if #[cfg(any(target_os = "android", target_os = "netbsd", target_os = "openbsd"))] {
        #[inline]
        fn errno_location() -> *mut c_int {
            unsafe { libc::__errno() }
        }
    } else if #[cfg(any(target_os = "macos", target_os = "ios", target_os = "freebsd"))] {
        #[inline]
        fn errno_location() -> *mut c_int {
            unsafe { libc::__error() }
        }
    }
}

/// Reads the calling thread's errno.
#[cfg(any(
    target_os = "linux",
    target_os = "emscripten",
    target_os = "redox",
    target_os = "android",
    target_os = "netbsd",
    target_os = "openbsd",
    target_os = "macos",
    target_os = "ios",
    target_os = "freebsd"
))]
pub fn get_errno() -> i32 {
    (unsafe { *errno_location() }) as i32
}

/// Overwrites the calling thread's errno.
#[cfg(any(
    target_os = "linux",
    target_os = "emscripten",
    target_os = "redox",
    target_os = "android",
    target_os = "netbsd",
    target_os = "openbsd",
    target_os = "macos",
    target_os = "ios",
    target_os = "freebsd"
))]
pub fn set_errno(value: i32) {
    unsafe { *errno_location() = value as c_int };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn errno_lookup_round_trips_known_values() {
        assert_eq!(Errno::from_discriminant(2), Some(Errno::ENOENT));
        assert_eq!(Errno::from_discriminant(9), Some(Errno::EBADF));
        assert_eq!(Errno::from_discriminant(111), Some(Errno::ECONNREFUSED));
        assert_eq!(Errno::from_discriminant(0), None);
        assert_eq!(Errno::from_discriminant(-2), None);
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn errno_numbering_matches_host() {
        assert_eq!(Errno::ENOENT as i32, libc::ENOENT);
        assert_eq!(Errno::EBADF as i32, libc::EBADF);
        assert_eq!(Errno::ENOSYS as i32, ENOSYS_CODE);
        assert_eq!(Errno::EINPROGRESS as i32, libc::EINPROGRESS);
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn set_errno_is_visible_to_get_errno() {
        let saved = get_errno();
        set_errno(libc::EEXIST);
        assert_eq!(get_errno(), libc::EEXIST);
        set_errno(saved);
        assert_eq!(get_errno(), saved);
    }
}
