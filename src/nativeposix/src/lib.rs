//! Native posix shim for the lind managed runtime.
//!
//! The managed side cannot read the host's errno, so every call it makes
//! through this library reports failure in the return value alone: a failed
//! call returns `-errno` (cast to the call's return type) instead of the host
//! sentinel, and errno is left exactly as it was before the call. Success
//! values are passed through untouched.
//!
//! Layout:
//! - `adapter`: the save / call / encode / restore convention.
//! - `ops`: the operation catalog and the `PosixOps` interface.
//! - `native` / `unsupported`: the two implementations of `PosixOps`.
//! - `entry`: the exported `__lind_posix_*` symbols.
//! - `decode`: helpers for Rust callers that want a `Result`.
//!
//! Which implementation backs the exported symbols is fixed at build time (see
//! `build.rs`); there is no runtime switch.

#[macro_use]
pub mod ops;

pub mod adapter;
pub mod decode;
pub mod entry;
#[cfg(lind_native_posix)]
pub mod native;
pub mod unsupported;

pub use decode::{decode, PosixError};
pub use entry::*;
pub use ops::{PosixOps, CATALOG};

use sysdefs::constants::lind_platform_const::POSIX_SYMBOL_PREFIX;

cfg_if::cfg_if! {
    if #[cfg(lind_native_posix)] {
        /// The implementation behind the exported symbols on this build.
        pub type Platform = native::NativePosix;
    } else {
        /// The implementation behind the exported symbols on this build.
        pub type Platform = unsupported::UnsupportedPosix;
    }
}

/// True when this build calls into the host, false for the unsupported stub.
pub const IS_NATIVE: bool = cfg!(lind_native_posix);

/// Exported symbol name of a catalog operation, e.g. `__lind_posix_open`.
pub fn symbol_name(operation: &str) -> String {
    format!("{}{}", POSIX_SYMBOL_PREFIX, operation)
}

#[cfg(test)]
mod tests;
