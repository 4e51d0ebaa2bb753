//! The operation catalog and the capability interface both implementations
//! provide.
//!
//! `for_each_posix_op!` is the single list of bound operations. It is expanded
//! here into the `PosixOps` trait and `CATALOG`, in `unsupported` into the stub
//! implementation, and in `entry` into the exported `__lind_posix_*` symbols,
//! so adding an operation to the list is enough to make every part of the crate
//! see it. Each entry mirrors the host prototype exactly; nothing is converted.

use sysdefs::data::*;

/// Invokes `$callback!` with every catalog entry.
///
/// Entries read `name(arg: type, ...) -> return_type;` and may carry doc
/// attributes, which are forwarded to the trait method and the exported symbol.
macro_rules! for_each_posix_op {
    ($callback:ident) => {
        $callback! {
            // ===== descriptor lifecycle =====
            /// Opens `pathname`, returning a descriptor.
            open(pathname: *const c_char, flags: c_int, mode: mode_t) -> c_int;
            /// Closes `fd`.
            close(fd: c_int) -> c_int;
            dup(oldfd: c_int) -> c_int;
            dup2(oldfd: c_int, newfd: c_int) -> c_int;
            /// Like `dup2`, with `O_CLOEXEC` in `flags`. Hosts without `dup3`
            /// fall back to `dup2` and drop the flags.
            dup3(oldfd: c_int, newfd: c_int, flags: c_int) -> c_int;

            // ===== positional and vectored I/O =====
            read(fd: c_int, buf: *mut c_void, count: size_t) -> ssize_t;
            write(fd: c_int, buf: *const c_void, count: size_t) -> ssize_t;
            readv(fd: c_int, iov: *const iovec, iovcnt: c_int) -> ssize_t;
            writev(fd: c_int, iov: *const iovec, iovcnt: c_int) -> ssize_t;
            /// Copies `count` bytes from `in_fd` to `out_fd` in the kernel.
            /// `-ENOSYS` on hosts without a Linux-compatible `sendfile`.
            sendfile(out_fd: c_int, in_fd: c_int, offset: *mut off_t, count: size_t) -> ssize_t;

            // ===== descriptor control =====
            fcntl(fd: c_int, cmd: c_int, arg: *mut c_void) -> c_int;
            ioctl(fd: c_int, request: c_ulong, argp: *mut c_void) -> c_int;

            // ===== metadata and namespace =====
            stat(path: *const c_char, statbuf: *mut stat) -> c_int;
            fstat(fd: c_int, statbuf: *mut stat) -> c_int;
            lstat(path: *const c_char, statbuf: *mut stat) -> c_int;
            unlink(path: *const c_char) -> c_int;
            rename(old: *const c_char, new: *const c_char) -> c_int;
            renameat(oldfd: c_int, old: *const c_char, newfd: c_int, new: *const c_char) -> c_int;
            access(path: *const c_char, amode: c_int) -> c_int;
            faccessat(fd: c_int, path: *const c_char, amode: c_int, flag: c_int) -> c_int;

            // ===== memory mapping =====
            /// Maps memory. Failure is the address whose value is `-errno`,
            /// never `MAP_FAILED`.
            mmap(addr: *mut c_void, length: size_t, prot: c_int, flags: c_int, fd: c_int, offset: off_t) -> *mut c_void;
            munmap(addr: *mut c_void, length: size_t) -> c_int;

            // ===== sockets and pipes =====
            socket(domain: c_int, socktype: c_int, protocol: c_int) -> c_int;
            bind(sockfd: c_int, addr: *const sockaddr, addrlen: socklen_t) -> c_int;
            listen(sockfd: c_int, backlog: c_int) -> c_int;
            connect(sockfd: c_int, addr: *const sockaddr, addrlen: socklen_t) -> c_int;
            accept(sockfd: c_int, addr: *mut sockaddr, addrlen: *mut socklen_t) -> c_int;
            getsockname(sockfd: c_int, addr: *mut sockaddr, addrlen: *mut socklen_t) -> c_int;
            getsockopt(sockfd: c_int, level: c_int, optname: c_int, optval: *mut c_void, optlen: *mut socklen_t) -> c_int;
            setsockopt(sockfd: c_int, level: c_int, optname: c_int, optval: *const c_void, optlen: socklen_t) -> c_int;
            sendto(sockfd: c_int, message: *const c_void, length: size_t, flags: c_int, dest_addr: *const sockaddr, dest_len: socklen_t) -> ssize_t;
            recvfrom(sockfd: c_int, buffer: *mut c_void, length: size_t, flags: c_int, address: *mut sockaddr, address_len: *mut socklen_t) -> ssize_t;
            sendmsg(sockfd: c_int, message: *const msghdr, flags: c_int) -> ssize_t;
            recvmsg(sockfd: c_int, message: *mut msghdr, flags: c_int) -> ssize_t;
            /// `pipefd` must point at two writable `c_int`s.
            pipe(pipefd: *mut c_int) -> c_int;
            /// Hosts without `pipe2` fall back to `pipe` and drop the flags.
            pipe2(pipefd: *mut c_int, flags: c_int) -> c_int;

            // ===== process identity =====
            getuid() -> c_int;
            getgid() -> c_int;
            geteuid() -> uid_t;
            getegid() -> gid_t;
            setuid(uid: uid_t) -> c_int;
            setgid(gid: gid_t) -> c_int;

            // ===== positioning =====
            lseek(fd: c_int, offset: off_t, whence: c_int) -> off_t;
            ftruncate(fd: c_int, length: off_t) -> c_int;
        }
    };
}

macro_rules! declare_posix_ops {
    ($($(#[$meta:meta])* $name:ident($($arg:ident: $ty:ty),*) -> $ret:ty;)*) => {
        /// One implementation of the whole operation catalog.
        ///
        /// Implementations are stateless, hence associated functions with no
        /// receiver. Every function is `unsafe` because its pointer arguments
        /// are handed to the host as they are.
        pub trait PosixOps {
            $(
                $(#[$meta])*
                #[allow(clippy::missing_safety_doc)]
                unsafe fn $name($($arg: $ty),*) -> $ret;
            )*
        }

        /// Names of all bound operations, in catalog order.
        pub const CATALOG: &[&str] = &[$(stringify!($name)),*];
    };
}

for_each_posix_op!(declare_posix_ops);
