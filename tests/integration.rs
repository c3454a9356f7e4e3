//! Host integration tests.
//!
//! These tests require a reachable VIX host.
//! Run with: VIX_RUN_HOST_TESTS=1 cargo test
//!
//! VIX_HOST, VIX_USER and VIX_PASSWORD override the default
//! 127.0.0.1 / root / passw0rd. VIX_TEST_VMX names a VM to open.

use std::env;

use vix::{FindKind, HostHandle};

fn should_run_host_tests() -> bool {
    env::var("VIX_RUN_HOST_TESTS").map(|v| v == "1").unwrap_or(false)
}

fn setting(name: &str, default: &str) -> String {
    env::var(name).unwrap_or_else(|_| default.to_string())
}

/// Disconnects on drop so a failed assertion still closes the connection.
struct HostConnection {
    handle: HostHandle,
}

impl HostConnection {
    fn open() -> Self {
        let handle = vix::connect_host(
            &setting("VIX_HOST", "127.0.0.1"),
            &setting("VIX_USER", "root"),
            &setting("VIX_PASSWORD", "passw0rd"),
        )
        .expect("connect_host should succeed");
        Self { handle }
    }
}

impl Drop for HostConnection {
    fn drop(&mut self) {
        self.handle = vix::disconnect_host(self.handle);
    }
}

#[test]
fn test_connection() {
    if !should_run_host_tests() {
        println!("Skipping host test (VIX_RUN_HOST_TESTS not set)");
        return;
    }

    let conn = HostConnection::open();
    assert_ne!(
        conn.handle,
        HostHandle::invalid(),
        "connect_host should return a valid handle"
    );
}

#[test]
fn test_disconnect_returns_invalid() {
    if !should_run_host_tests() {
        println!("Skipping host test (VIX_RUN_HOST_TESTS not set)");
        return;
    }

    let mut conn = HostConnection::open();
    conn.handle = vix::disconnect_host(conn.handle);
    assert_eq!(conn.handle, HostHandle::invalid());
}

#[test]
fn test_open_vm() {
    if !should_run_host_tests() {
        println!("Skipping host test (VIX_RUN_HOST_TESTS not set)");
        return;
    }

    let conn = HostConnection::open();

    let registered = vix::find_vms(Some(conn.handle), FindKind::Registered)
        .expect("find_vms should succeed");
    println!("Registered VMs: {:?}", registered);

    let vmx = match env::var("VIX_TEST_VMX").ok().or_else(|| registered.first().cloned()) {
        Some(vmx) => vmx,
        None => {
            println!("Skipping: no VM registered on the host");
            return;
        }
    };

    let vm = vix::connect_vm(Some(conn.handle), &vmx).expect("connect_vm should succeed");
    assert!(vm.is_valid(), "connect_vm should return a valid handle");

    let vm = vix::disconnect_vm(Some(vm));
    assert!(!vm.is_valid(), "disconnect_vm should return the invalid handle");
}

#[test]
fn test_open_missing_vm() {
    if !should_run_host_tests() {
        println!("Skipping host test (VIX_RUN_HOST_TESTS not set)");
        return;
    }

    let conn = HostConnection::open();
    let err = vix::connect_vm(Some(conn.handle), "[nonexistent] nothing/nothing.vmx")
        .expect_err("opening a missing VM should fail");
    assert!(
        err.to_string().contains("[nonexistent] nothing/nothing.vmx"),
        "error should name the config path: {}",
        err
    );
}
