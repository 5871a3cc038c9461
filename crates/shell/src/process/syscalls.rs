// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Thin wrappers over the raw POSIX process primitives the pipeline
//! executor needs. Every function here is the sole caller of its
//! corresponding `libc` function in this crate.

use std::ffi::CString;
use std::fs::File;
use std::io;
use std::os::unix::io::{FromRawFd, RawFd};

fn check(ret: libc::c_int) -> io::Result<libc::c_int> {
    if ret < 0 {
        Err(io::Error::last_os_error())
    } else {
        Ok(ret)
    }
}

/// Create a pipe, returning `(read_end, write_end)`.
pub fn pipe() -> io::Result<(File, File)> {
    let mut fds = [0 as libc::c_int; 2];
    check(unsafe { libc::pipe(fds.as_mut_ptr()) })?;
    Ok(unsafe { (File::from_raw_fd(fds[0]), File::from_raw_fd(fds[1])) })
}

/// `fork(2)`. Returns `0` in the child, the child's pid in the parent.
///
/// # Safety
/// Only async-signal-safe operations may run between this call returning in
/// the child and a subsequent `execvp` or `_exit`.
pub unsafe fn fork() -> io::Result<i32> {
    check(libc::fork())
}

/// `dup2(2)`.
pub fn dup2(oldfd: RawFd, newfd: RawFd) -> io::Result<()> {
    check(unsafe { libc::dup2(oldfd, newfd) })?;
    Ok(())
}

/// `dup(2)`: duplicate `fd` onto the lowest unused descriptor.
pub fn dup(fd: RawFd) -> io::Result<File> {
    let new_fd = check(unsafe { libc::dup(fd) })?;
    Ok(unsafe { File::from_raw_fd(new_fd) })
}

/// `close(2)`, tolerating `EBADF` since callers close defensively.
pub fn close(fd: RawFd) {
    unsafe {
        libc::close(fd);
    }
}

/// `execvp(3)`: replace the current process image. Never returns on success.
pub fn execvp(path: &str, argv: &[String]) -> io::Error {
    let c_path = match CString::new(path) {
        Ok(c) => c,
        Err(_) => return io::Error::from_raw_os_error(libc::EINVAL),
    };
    let c_argv: Vec<CString> = match argv.iter().map(|a| CString::new(a.as_str())).collect() {
        Ok(v) => v,
        Err(_) => return io::Error::from_raw_os_error(libc::EINVAL),
    };
    let mut ptrs: Vec<*const libc::c_char> = c_argv.iter().map(|c| c.as_ptr()).collect();
    ptrs.push(std::ptr::null());

    unsafe { libc::execvp(c_path.as_ptr(), ptrs.as_ptr()) };
    io::Error::last_os_error()
}

/// `_exit(2)`: terminate immediately without running destructors or atexit
/// handlers. Used only from a forked child after `fork` and before `execvp`.
pub fn exit_now(status: i32) -> ! {
    unsafe { libc::_exit(status) }
}

/// `waitpid(2)` for a specific child, blocking until it terminates.
/// Returns the child's exit status, or 128 + signal number if it was
/// terminated by a signal.
pub fn waitpid(pid: i32) -> io::Result<i32> {
    let mut status: libc::c_int = 0;
    check(unsafe { libc::waitpid(pid, &mut status, 0) })?;
    if libc::WIFEXITED(status) {
        Ok(libc::WEXITSTATUS(status))
    } else if libc::WIFSIGNALED(status) {
        Ok(128 + libc::WTERMSIG(status))
    } else {
        Ok(status)
    }
}

#[cfg(test)]
#[path = "syscalls_tests.rs"]
mod tests;
