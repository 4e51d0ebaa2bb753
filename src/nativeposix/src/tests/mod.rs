#![allow(dead_code)]

// nativeposix test suite
//
// Unit tests for the call adapter and both implementations of the catalog.
// The native tests talk to the real host, inside a scratch directory created
// per test.


#[cfg(lind_native_posix)]
mod sys_tests; // identity and memory mapping

use once_cell::sync::Lazy;
use parking_lot::Mutex;

// Tests that close a descriptor twice or pick specific descriptor numbers
// (dup2 / dup3 targets) could hit a descriptor another test thread just
// opened, so every test that touches descriptors runs serially.
static TEST_MUTEX: Lazy<Mutex<bool>> = Lazy::new(|| Mutex::new(true));

/// Setup function for tests
/// Returns a lock guard that keeps the test serialized
pub fn test_setup() -> parking_lot::MutexGuard<'static, bool> {
    init_tracing();
    TEST_MUTEX.lock()
}

/// Installs a tracing subscriber once so tests can report progress.
///
/// Only the tracing dispatcher is set. The `log` facade is left free for the
/// stub diagnostic tests, which install their own logger.
pub fn init_tracing() {
    let subscriber = tracing_subscriber::fmt()
        .with_test_writer()
        .with_max_level(tracing::Level::DEBUG)
        .finish();
    let _ = tracing::subscriber::set_global_default(subscriber);
}

/// Helper to build a NUL-terminated path for the host
#[cfg(unix)]
pub fn cpath(path: &std::path::Path) -> std::ffi::CString {
    use std::os::unix::ffi::OsStrExt;
    std::ffi::CString::new(path.as_os_str().as_bytes()).unwrap()
}
