//! Capable implementation of the catalog.
//!
//! Every operation is one host call through [`call`], which turns the host's
//! `-1` + errno convention into `-errno` and leaves errno as it found it.
//! Arguments go to the host exactly as received. Blocking calls block, and
//! nothing is retried, including on `EINTR`.

use crate::adapter::call;
use crate::ops::PosixOps;
use sysdefs::data::*;

/// Host calls that not every unix provides.
///
/// Linux and Android have them natively. Elsewhere `dup3` and `pipe2` fall
/// back to their flag-less forms, and `sendfile` fails with `ENOSYS` the same
/// way a host call would, so [`call`] encodes it like any other failure.
#[cfg(any(target_os = "linux", target_os = "android"))]
mod host_compat {
    use sysdefs::data::*;

    pub unsafe fn dup3(oldfd: c_int, newfd: c_int, flags: c_int) -> c_int {
        libc::dup3(oldfd, newfd, flags)
    }

    pub unsafe fn pipe2(pipefd: *mut c_int, flags: c_int) -> c_int {
        libc::pipe2(pipefd, flags)
    }

    pub unsafe fn sendfile(out_fd: c_int, in_fd: c_int, offset: *mut off_t, count: size_t) -> ssize_t {
        libc::sendfile(out_fd, in_fd, offset, count)
    }
}

#[cfg(not(any(target_os = "linux", target_os = "android")))]
mod host_compat {
    use sysdefs::constants::err_const::{set_errno, ENOSYS_CODE};
    use sysdefs::data::*;

    pub unsafe fn dup3(oldfd: c_int, newfd: c_int, _flags: c_int) -> c_int {
        libc::dup2(oldfd, newfd)
    }

    pub unsafe fn pipe2(pipefd: *mut c_int, _flags: c_int) -> c_int {
        libc::pipe(pipefd)
    }

    pub unsafe fn sendfile(_out_fd: c_int, _in_fd: c_int, _offset: *mut off_t, _count: size_t) -> ssize_t {
        set_errno(ENOSYS_CODE);
        -1
    }
}

/// The host-backed implementation.
pub struct NativePosix;

impl PosixOps for NativePosix {
    /// Reference to Linux: https://man7.org/linux/man-pages/man2/open.2.html
    ///
    /// `mode` is only read by the host when `flags` contains `O_CREAT` or
    /// `O_TMPFILE`. It is widened to `c_uint` because `open` is variadic and
    /// `mode_t` is narrower than `int` on some hosts.
    unsafe fn open(pathname: *const c_char, flags: c_int, mode: mode_t) -> c_int {
        call(|| unsafe { libc::open(pathname, flags, mode as libc::c_uint) })
    }

    /// Reference to Linux: https://man7.org/linux/man-pages/man2/close.2.html
    ///
    /// Closing the same descriptor twice returns `-EBADF` the second time.
    unsafe fn close(fd: c_int) -> c_int {
        call(|| unsafe { libc::close(fd) })
    }

    unsafe fn dup(oldfd: c_int) -> c_int {
        call(|| unsafe { libc::dup(oldfd) })
    }

    unsafe fn dup2(oldfd: c_int, newfd: c_int) -> c_int {
        call(|| unsafe { libc::dup2(oldfd, newfd) })
    }

    unsafe fn dup3(oldfd: c_int, newfd: c_int, flags: c_int) -> c_int {
        call(|| unsafe { host_compat::dup3(oldfd, newfd, flags) })
    }

    //------------------------------------I/O------------------------------------

    unsafe fn read(fd: c_int, buf: *mut c_void, count: size_t) -> ssize_t {
        call(|| unsafe { libc::read(fd, buf, count) })
    }

    unsafe fn write(fd: c_int, buf: *const c_void, count: size_t) -> ssize_t {
        call(|| unsafe { libc::write(fd, buf, count) })
    }

    unsafe fn readv(fd: c_int, iov: *const iovec, iovcnt: c_int) -> ssize_t {
        call(|| unsafe { libc::readv(fd, iov, iovcnt) })
    }

    unsafe fn writev(fd: c_int, iov: *const iovec, iovcnt: c_int) -> ssize_t {
        call(|| unsafe { libc::writev(fd, iov, iovcnt) })
    }

    /// Reference to Linux: https://man7.org/linux/man-pages/man2/sendfile.2.html
    unsafe fn sendfile(out_fd: c_int, in_fd: c_int, offset: *mut off_t, count: size_t) -> ssize_t {
        call(|| unsafe { host_compat::sendfile(out_fd, in_fd, offset, count) })
    }

    //------------------------------------CONTROL------------------------------------

    /// `arg` is forwarded as the single variadic argument whatever `cmd`
    /// expects; integer commands receive the pointer's value.
    unsafe fn fcntl(fd: c_int, cmd: c_int, arg: *mut c_void) -> c_int {
        call(|| unsafe { libc::fcntl(fd, cmd, arg) })
    }

    unsafe fn ioctl(fd: c_int, request: c_ulong, argp: *mut c_void) -> c_int {
        // The request parameter is `c_int` on some libcs.
        call(|| unsafe { libc::ioctl(fd, request as _, argp) })
    }

    //------------------------------------METADATA------------------------------------

    unsafe fn stat(path: *const c_char, statbuf: *mut stat) -> c_int {
        call(|| unsafe { libc::stat(path, statbuf) })
    }

    unsafe fn fstat(fd: c_int, statbuf: *mut stat) -> c_int {
        call(|| unsafe { libc::fstat(fd, statbuf) })
    }

    unsafe fn lstat(path: *const c_char, statbuf: *mut stat) -> c_int {
        call(|| unsafe { libc::lstat(path, statbuf) })
    }

    unsafe fn unlink(path: *const c_char) -> c_int {
        call(|| unsafe { libc::unlink(path) })
    }

    unsafe fn rename(old: *const c_char, new: *const c_char) -> c_int {
        call(|| unsafe { libc::rename(old, new) })
    }

    unsafe fn renameat(oldfd: c_int, old: *const c_char, newfd: c_int, new: *const c_char) -> c_int {
        call(|| unsafe { libc::renameat(oldfd, old, newfd, new) })
    }

    unsafe fn access(path: *const c_char, amode: c_int) -> c_int {
        call(|| unsafe { libc::access(path, amode) })
    }

    unsafe fn faccessat(fd: c_int, path: *const c_char, amode: c_int, flag: c_int) -> c_int {
        call(|| unsafe { libc::faccessat(fd, path, amode, flag) })
    }

    //------------------------------------MEMORY------------------------------------

    /// Reference to Linux: https://man7.org/linux/man-pages/man2/mmap.2.html
    ///
    /// On failure the returned pointer's value is `-errno`. Callers must not
    /// compare against `MAP_FAILED`.
    unsafe fn mmap(
        addr: *mut c_void,
        length: size_t,
        prot: c_int,
        flags: c_int,
        fd: c_int,
        offset: off_t,
    ) -> *mut c_void {
        call(|| unsafe { libc::mmap(addr, length, prot, flags, fd, offset) })
    }

    unsafe fn munmap(addr: *mut c_void, length: size_t) -> c_int {
        call(|| unsafe { libc::munmap(addr, length) })
    }

    //------------------------------------SOCKETS------------------------------------

    /// Reference to Linux: https://man7.org/linux/man-pages/man2/socket.2.html
    unsafe fn socket(domain: c_int, socktype: c_int, protocol: c_int) -> c_int {
        call(|| unsafe { libc::socket(domain, socktype, protocol) })
    }

    unsafe fn bind(sockfd: c_int, addr: *const sockaddr, addrlen: socklen_t) -> c_int {
        call(|| unsafe { libc::bind(sockfd, addr, addrlen) })
    }

    unsafe fn listen(sockfd: c_int, backlog: c_int) -> c_int {
        call(|| unsafe { libc::listen(sockfd, backlog) })
    }

    /// Blocks until the connection completes unless `sockfd` is non-blocking.
    unsafe fn connect(sockfd: c_int, addr: *const sockaddr, addrlen: socklen_t) -> c_int {
        call(|| unsafe { libc::connect(sockfd, addr, addrlen) })
    }

    unsafe fn accept(sockfd: c_int, addr: *mut sockaddr, addrlen: *mut socklen_t) -> c_int {
        call(|| unsafe { libc::accept(sockfd, addr, addrlen) })
    }

    unsafe fn getsockname(sockfd: c_int, addr: *mut sockaddr, addrlen: *mut socklen_t) -> c_int {
        call(|| unsafe { libc::getsockname(sockfd, addr, addrlen) })
    }

    unsafe fn getsockopt(
        sockfd: c_int,
        level: c_int,
        optname: c_int,
        optval: *mut c_void,
        optlen: *mut socklen_t,
    ) -> c_int {
        call(|| unsafe { libc::getsockopt(sockfd, level, optname, optval, optlen) })
    }

    unsafe fn setsockopt(
        sockfd: c_int,
        level: c_int,
        optname: c_int,
        optval: *const c_void,
        optlen: socklen_t,
    ) -> c_int {
        call(|| unsafe { libc::setsockopt(sockfd, level, optname, optval, optlen) })
    }

    unsafe fn sendto(
        sockfd: c_int,
        message: *const c_void,
        length: size_t,
        flags: c_int,
        dest_addr: *const sockaddr,
        dest_len: socklen_t,
    ) -> ssize_t {
        call(|| unsafe { libc::sendto(sockfd, message, length, flags, dest_addr, dest_len) })
    }

    unsafe fn recvfrom(
        sockfd: c_int,
        buffer: *mut c_void,
        length: size_t,
        flags: c_int,
        address: *mut sockaddr,
        address_len: *mut socklen_t,
    ) -> ssize_t {
        call(|| unsafe { libc::recvfrom(sockfd, buffer, length, flags, address, address_len) })
    }

    unsafe fn sendmsg(sockfd: c_int, message: *const msghdr, flags: c_int) -> ssize_t {
        call(|| unsafe { libc::sendmsg(sockfd, message, flags) })
    }

    unsafe fn recvmsg(sockfd: c_int, message: *mut msghdr, flags: c_int) -> ssize_t {
        call(|| unsafe { libc::recvmsg(sockfd, message, flags) })
    }

    unsafe fn pipe(pipefd: *mut c_int) -> c_int {
        call(|| unsafe { libc::pipe(pipefd) })
    }

    unsafe fn pipe2(pipefd: *mut c_int, flags: c_int) -> c_int {
        call(|| unsafe { host_compat::pipe2(pipefd, flags) })
    }

    //------------------------------------IDENTITY------------------------------------

    // getuid/getgid cannot fail. They are returned as int, so an id of
    // 0xFFFFFFFF reads as -1 and goes through the failure path.
    unsafe fn getuid() -> c_int {
        call(|| unsafe { libc::getuid() as c_int })
    }

    unsafe fn getgid() -> c_int {
        call(|| unsafe { libc::getgid() as c_int })
    }

    unsafe fn geteuid() -> uid_t {
        call(|| unsafe { libc::geteuid() })
    }

    unsafe fn getegid() -> gid_t {
        call(|| unsafe { libc::getegid() })
    }

    unsafe fn setuid(uid: uid_t) -> c_int {
        call(|| unsafe { libc::setuid(uid) })
    }

    unsafe fn setgid(gid: gid_t) -> c_int {
        call(|| unsafe { libc::setgid(gid) })
    }

    //------------------------------------POSITIONING------------------------------------

    unsafe fn lseek(fd: c_int, offset: off_t, whence: c_int) -> off_t {
        call(|| unsafe { libc::lseek(fd, offset, whence) })
    }

    unsafe fn ftruncate(fd: c_int, length: off_t) -> c_int {
        call(|| unsafe { libc::ftruncate(fd, length) })
    }
}
