//! vixctl tests.
//!
//! Every failure must be reported on stderr as `VIX: <message>` and end the
//! process with exit status 1.

use std::process::{Command, Output};

fn vixctl(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_vixctl"))
        .args(args)
        .env_remove("VIX_HOST")
        .env_remove("VIX_USER")
        .env_remove("VIX_PASSWORD")
        .env_remove("VIX_PORT")
        .env_remove("VIX_PROVIDER")
        .output()
        .expect("vixctl should start")
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

#[test]
fn test_connect_without_sdk_exits() {
    if vix::sdk_available() {
        println!("Skipping: linked against the VIX SDK");
        return;
    }

    let output = vixctl(&["connect"]);
    let err = stderr(&output);
    assert_eq!(output.status.code(), Some(1), "stderr: {}", err);
    assert!(err.starts_with("VIX: "), "unexpected stderr: {}", err);
    assert!(err.contains("SDK unavailable"), "unexpected stderr: {}", err);
    assert_eq!(err.matches("VIX: ").count(), 1, "error reported twice: {}", err);
}

#[test]
fn test_open_vm_unreachable_host_exits() {
    if !vix::sdk_available() {
        println!("Skipping: built without the VIX SDK");
        return;
    }

    // Nothing listens on port 1, so the connection is refused
    let output = vixctl(&["--host", "127.0.0.1", "--port", "1", "open-vm", "x.vmx"]);
    let err = stderr(&output);
    assert_eq!(output.status.code(), Some(1), "stderr: {}", err);
    assert!(err.starts_with("VIX: "), "unexpected stderr: {}", err);
}

#[test]
fn test_port_zero_is_rejected() {
    let output = vixctl(&["--port", "0", "connect"]);
    let err = stderr(&output);
    assert_eq!(output.status.code(), Some(1), "stderr: {}", err);
    assert!(err.contains("--port"), "unexpected stderr: {}", err);
    assert!(!err.starts_with("VIX: "), "argument errors are not VIX errors: {}", err);
}

#[test]
fn test_empty_host_is_rejected() {
    let output = vixctl(&["--host", " ", "connect"]);
    let err = stderr(&output);
    assert_eq!(output.status.code(), Some(1), "stderr: {}", err);
    assert!(err.contains("--host"), "unexpected stderr: {}", err);
}
