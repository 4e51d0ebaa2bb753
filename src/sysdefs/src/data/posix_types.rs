//! C types used by the exported entry points.
//!
//! On unix these are the host's own definitions from `libc`. Other hosts only
//! ever see the unsupported implementation, which never looks inside these
//! types, so scalar aliases with the usual LP64 widths and opaque structs are
//! enough to keep every entry point's signature identical across targets.
#![allow(non_camel_case_types)]

pub use std::os::raw::{c_char, c_int, c_ulong, c_void};

cfg_if::cfg_if! {
    if #[cfg(unix)] {
        pub use libc::{
            gid_t, iovec, mode_t, msghdr, off_t, size_t, sockaddr, socklen_t, ssize_t, stat, uid_t,
        };
    } else {
        pub type size_t = usize;
        pub type ssize_t = isize;
        pub type off_t = i64;
        pub type mode_t = u32;
        pub type socklen_t = u32;
        pub type uid_t = u32;
        pub type gid_t = u32;

        /// Opaque stand-in for `struct stat`.
        #[repr(C)]
        pub struct stat {
            _private: [u8; 0],
        }

        /// Opaque stand-in for `struct iovec`.
        #[repr(C)]
        pub struct iovec {
            _private: [u8; 0],
        }

        /// Opaque stand-in for `struct sockaddr`.
        #[repr(C)]
        pub struct sockaddr {
            _private: [u8; 0],
        }

        /// Opaque stand-in for `struct msghdr`.
        #[repr(C)]
        pub struct msghdr {
            _private: [u8; 0],
        }
    }
}
