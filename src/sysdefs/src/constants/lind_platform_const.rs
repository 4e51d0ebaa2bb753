//! This file defines constants that are specific to the lind native posix shim.
//!
/// ===== Exported symbols =====
///
/// Every catalog entry is exported as `__lind_posix_<operation>`, e.g.
/// `__lind_posix_open`. The managed side binds to these names, so the prefix
/// is part of the ABI and must not change.
pub const POSIX_SYMBOL_PREFIX: &str = "__lind_posix_";

/// Message printed by the unsupported implementation before it returns
/// `-ENOSYS`.
pub const UNSUPPORTED_MESSAGE: &str = "Syscalls not supported on this OS.";

/// Log target used for diagnostics emitted by the shim.
pub const LOG_TARGET: &str = "lind_posix";
