// Identity and memory mapping tests for the native implementation

use crate::decode;
use crate::native::NativePosix as P;
use crate::ops::PosixOps;
use libc::{MAP_ANONYMOUS, MAP_PRIVATE, PROT_READ, PROT_WRITE};
use sysdefs::constants::err_const::{get_errno, set_errno};
use sysdefs::data::*;

/// Test: identity queries match the host and never disturb errno
#[test]
fn test_identity_queries() {
    set_errno(libc::EACCES);
    assert_eq!(unsafe { P::getuid() }, unsafe { libc::getuid() } as c_int);
    assert_eq!(unsafe { P::getgid() }, unsafe { libc::getgid() } as c_int);
    assert_eq!(unsafe { P::geteuid() }, unsafe { libc::geteuid() });
    assert_eq!(unsafe { P::getegid() }, unsafe { libc::getegid() });
    assert_eq!(get_errno(), libc::EACCES);
}

/// Test: setting the ids we already have is always permitted
#[test]
fn test_set_current_ids() {
    let uid = unsafe { libc::getuid() };
    let gid = unsafe { libc::getgid() };
    if uid != unsafe { libc::geteuid() } || gid != unsafe { libc::getegid() } {
        // setuid semantics differ for set-id binaries; nothing to check here.
        return;
    }
    assert_eq!(unsafe { P::setgid(gid) }, 0);
    assert_eq!(unsafe { P::setuid(uid) }, 0);
}

/// Test: an unprivileged process cannot become root
#[test]
fn test_setuid_denied() {
    if unsafe { libc::geteuid() } == 0 {
        return;
    }
    assert_eq!(unsafe { P::setuid(0) }, -libc::EPERM);
    assert_eq!(unsafe { P::setgid(0) }, -libc::EPERM);
}

/// Test: anonymous mapping is usable and unmaps cleanly
#[test]
fn test_mmap_munmap() {
    let len = 2 * 4096;
    let addr = unsafe {
        P::mmap(std::ptr::null_mut(), len, PROT_READ | PROT_WRITE, MAP_PRIVATE | MAP_ANONYMOUS, -1, 0)
    };
    let addr = decode(addr).expect("anonymous mmap failed");
    assert!(!addr.is_null());

    let bytes = unsafe { std::slice::from_raw_parts_mut(addr as *mut u8, len) };
    bytes[0] = 0xAB;
    bytes[len - 1] = 0xCD;
    assert_eq!(bytes[0], 0xAB);
    assert_eq!(bytes[len - 1], 0xCD);

    assert_eq!(unsafe { P::munmap(addr, len) }, 0);
}

/// Test: a failed mmap returns the pointer whose value is -errno
#[test]
fn test_mmap_failure_encoding() {
    set_errno(0);
    // file-backed mapping on a bad descriptor
    let addr = unsafe { P::mmap(std::ptr::null_mut(), 4096, PROT_READ, MAP_PRIVATE, -1, 0) };
    assert_eq!(addr as isize, -(libc::EBADF as isize));
    assert_ne!(addr, libc::MAP_FAILED);
    assert_eq!(decode(addr).unwrap_err().code, libc::EBADF);
    assert_eq!(get_errno(), 0);

    // zero length
    let addr = unsafe {
        P::mmap(std::ptr::null_mut(), 0, PROT_READ, MAP_PRIVATE | MAP_ANONYMOUS, -1, 0)
    };
    assert_eq!(addr as isize, -(libc::EINVAL as isize));
}

/// Test: munmap of a misaligned address is -EINVAL
#[test]
fn test_munmap_misaligned() {
    let ret = unsafe { P::munmap(1 as *mut c_void, 4096) };
    assert_eq!(ret, -libc::EINVAL);
}
