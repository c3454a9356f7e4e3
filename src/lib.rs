//! Rust bindings for the VMware VIX automation library.
//!
//! This crate connects to VIX hosts (ESX/ESXi, vCenter, VMware Server and
//! Workstation) and opens virtual machine sessions through
//! libvixAllProducts. Host and VM handles are plain values owned by the
//! caller; disconnecting hands back the invalid handle.
//!
//! # Example
//!
//! ```no_run
//! fn main() -> vix::Result<()> {
//!     let host = vix::connect_host("127.0.0.1", "root", "passw0rd")?;
//!
//!     for path in vix::find_vms(Some(host), vix::FindKind::Running)? {
//!         let vm = vix::connect_vm(Some(host), &path)?;
//!         println!("opened {}", path);
//!         vix::disconnect_vm(Some(vm));
//!     }
//!
//!     let host = vix::disconnect_host(host);
//!     assert!(!host.is_valid());
//!     Ok(())
//! }
//! ```
//!
//! # Linking
//!
//! The build script links libvixAllProducts from `VIX_LIB_DIR` or the SDK's
//! default install directory. Without the SDK the crate still builds and
//! every library call fails with [`Error::SdkUnavailable`].

pub mod api;
pub mod backend;
pub mod error;
// Job plumbing and callback constants are only reachable with the SDK linked
#[cfg_attr(not(vix_sdk), allow(dead_code, unused_imports))]
mod ffi;
pub mod types;

// Re-export main types at the crate root
pub use api::Client;
pub use backend::{Backend, Sdk};
pub use error::{Error, Result};
pub use ffi::{HostHandle, VmHandle};
pub use types::{ConnectOptions, FindKind, ServiceProvider, DEFAULT_VSPHERE_PORT};

/// Check if the crate was linked against the VIX SDK.
pub fn sdk_available() -> bool {
    Sdk::available()
}

/// Connect to a vSphere host (`https://<host>:443/sdk`).
///
/// See [`Client::connect_host`].
pub fn connect_host(host: &str, user: &str, password: &str) -> Result<HostHandle> {
    Client::new().connect_host(host, user, password)
}

/// Connect to a host with explicit port and product.
pub fn connect_host_with(
    host: &str,
    user: &str,
    password: &str,
    options: &ConnectOptions,
) -> Result<HostHandle> {
    Client::new().connect_host_with(host, user, password, options)
}

/// Disconnect from a host, returning the invalid handle.
pub fn disconnect_host(host: HostHandle) -> HostHandle {
    Client::new().disconnect_host(host)
}

/// Open the VM described by `config_path` on a connected host.
pub fn connect_vm(host: Option<HostHandle>, config_path: &str) -> Result<VmHandle> {
    Client::new().connect_vm(host, config_path)
}

/// Release a VM, returning the invalid handle.
pub fn disconnect_vm(vm: Option<VmHandle>) -> VmHandle {
    Client::new().disconnect_vm(vm)
}

/// Config paths of the running or registered VMs on a host.
pub fn find_vms(host: Option<HostHandle>, kind: FindKind) -> Result<Vec<String>> {
    Client::new().find_vms(host, kind)
}
