//! Handle lifecycle tests.
//!
//! These tests do not require a VIX host.

use vix::{ConnectOptions, HostHandle, ServiceProvider, VmHandle};

#[test]
fn test_disconnect_host_invalid_is_noop() {
    let host = vix::disconnect_host(HostHandle::invalid());
    assert_eq!(host, HostHandle::invalid(), "expected the invalid handle back");

    // Again, to check idempotence
    let host = vix::disconnect_host(host);
    assert!(!host.is_valid(), "handle should stay invalid");
}

#[test]
fn test_disconnect_vm_absent_or_invalid() {
    assert_eq!(
        vix::disconnect_vm(None),
        VmHandle::invalid(),
        "absent VM should give back the invalid handle"
    );
    assert_eq!(
        vix::disconnect_vm(Some(VmHandle::invalid())),
        VmHandle::invalid(),
        "invalid VM should give back the invalid handle"
    );
}

#[test]
fn test_connect_vm_requires_host() {
    let err = vix::connect_vm(None, "/vmfs/volumes/datastore1/web/web.vmx")
        .expect_err("connect_vm without a host should fail");
    assert!(err.is_invalid_handle(), "unexpected error: {}", err);

    let err = vix::connect_vm(Some(HostHandle::invalid()), "/vmfs/volumes/datastore1/web/web.vmx")
        .expect_err("connect_vm with the invalid host should fail");
    assert!(err.is_invalid_handle(), "unexpected error: {}", err);
}

#[test]
fn test_find_vms_requires_host() {
    let err = vix::find_vms(None, vix::FindKind::Registered)
        .expect_err("find_vms without a host should fail");
    assert!(err.is_invalid_handle(), "unexpected error: {}", err);
}

#[test]
fn test_connect_without_sdk() {
    if vix::sdk_available() {
        println!("Skipping: linked against the VIX SDK");
        return;
    }

    let err = vix::connect_host("127.0.0.1", "root", "passw0rd")
        .expect_err("connect_host should fail without the SDK");
    assert!(err.is_sdk_unavailable(), "unexpected error: {}", err);
}

#[test]
fn test_connect_options_default() {
    let opts = ConnectOptions::default();
    assert_eq!(opts.port, 443);
    assert_eq!(opts.provider, ServiceProvider::VSphere);
}
