// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use std::io::{Read, Write};

#[test]
fn pipe_round_trips_bytes() {
    let (mut reader, mut writer) = pipe().expect("create pipe");
    writer.write_all(b"hello").expect("write to pipe");
    drop(writer);

    let mut buf = Vec::new();
    reader.read_to_end(&mut buf).expect("read from pipe");
    assert_eq!(buf, b"hello");
}

#[test]
fn fork_and_waitpid_report_exit_status() {
    let pid = unsafe { fork() }.expect("fork");
    if pid == 0 {
        exit_now(7);
    }
    let status = waitpid(pid).expect("waitpid");
    assert_eq!(status, 7);
}

#[test]
fn fork_child_can_dup2_a_pipe_into_stdout() {
    let (mut reader, writer) = pipe().expect("create pipe");
    let pid = unsafe { fork() }.expect("fork");
    if pid == 0 {
        use std::os::unix::io::AsRawFd;
        dup2(writer.as_raw_fd(), 1).expect("dup2 onto stdout");
        drop(writer);
        println!("from child");
        exit_now(0);
    }
    drop(writer);
    waitpid(pid).expect("waitpid");

    let mut buf = String::new();
    reader.read_to_string(&mut buf).expect("read from pipe");
    assert_eq!(buf, "from child\n");
}

#[test]
fn execvp_on_missing_command_returns_error() {
    let err = execvp("/no/such/binary-xyz", &["/no/such/binary-xyz".to_string()]);
    assert_eq!(err.kind(), std::io::ErrorKind::NotFound);
}
