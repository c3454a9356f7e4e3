//! Host and VM connection operations.

use crate::backend::{Backend, Sdk};
use crate::error::{Error, Result};
use crate::ffi::{HostHandle, VmHandle};
use crate::types::{ConnectOptions, FindKind};

/// Connection operations forwarded to a [`Backend`].
///
/// Handles are plain values owned by the caller; the client keeps no state
/// besides the backend.
///
/// # Example
///
/// ```no_run
/// use vix::Client;
///
/// # fn example() -> vix::Result<()> {
/// let client = Client::new();
/// let host = client.connect_host("esx01.lab", "root", "secret")?;
/// let vm = client.connect_vm(Some(host), "[datastore1] web/web.vmx")?;
///
/// let vm = client.disconnect_vm(Some(vm));
/// assert!(!vm.is_valid());
/// let host = client.disconnect_host(host);
/// assert!(!host.is_valid());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Default, Clone)]
pub struct Client<B = Sdk> {
    backend: B,
}

impl Client<Sdk> {
    /// Client for the linked VIX library.
    pub fn new() -> Self {
        Self { backend: Sdk }
    }
}

impl<B: Backend> Client<B> {
    /// Client forwarding to the given backend.
    pub fn with_backend(backend: B) -> Self {
        Self { backend }
    }

    /// Get the underlying backend.
    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Connect to a vSphere host on the default port.
    pub fn connect_host(&self, host: &str, user: &str, password: &str) -> Result<HostHandle> {
        self.connect_host_with(host, user, password, &ConnectOptions::default())
    }

    /// Connect to a host.
    pub fn connect_host_with(
        &self,
        host: &str,
        user: &str,
        password: &str,
        options: &ConnectOptions,
    ) -> Result<HostHandle> {
        let (address, port) = options.address(host);
        tracing::debug!(%address, provider = %options.provider, user, "connecting to host");

        match self
            .backend
            .host_connect(options.provider, &address, port, user, password)
        {
            Ok(handle) => {
                tracing::debug!(handle = handle.as_raw(), "connected to host");
                Ok(handle)
            }
            Err(Error::Vix { code, message }) => {
                tracing::error!(host, code, "error connecting to host: {}", message);
                Err(Error::Connect {
                    host: host.to_string(),
                    code,
                    message,
                })
            }
            Err(e) => {
                tracing::error!(host, "error connecting to host: {}", e);
                Err(e)
            }
        }
    }

    /// Disconnect from a host.
    ///
    /// Returns the invalid handle. Disconnecting the invalid handle is a
    /// no-op.
    pub fn disconnect_host(&self, host: HostHandle) -> HostHandle {
        if !host.is_valid() {
            return host;
        }

        tracing::debug!(handle = host.as_raw(), "disconnecting from host");
        self.backend.host_disconnect(host);
        HostHandle::invalid()
    }

    /// Open a VM on a connected host.
    ///
    /// `config_path` is the full path of the VM's `.vmx` file as the host
    /// sees it.
    pub fn connect_vm(&self, host: Option<HostHandle>, config_path: &str) -> Result<VmHandle> {
        let host = require_host(host)?;
        tracing::debug!(host = host.as_raw(), config_path, "opening VM");

        self.backend
            .vm_open(host, config_path)
            .map_err(|e| match e {
                Error::Vix { code, message } => {
                    tracing::error!(config_path, code, "error connecting to VM: {}", message);
                    Error::OpenVm {
                        path: config_path.to_string(),
                        code,
                        message,
                    }
                }
                other => {
                    tracing::error!(config_path, "error connecting to VM: {}", other);
                    other
                }
            })
    }

    /// Release a VM.
    ///
    /// Absent and invalid handles are ignored. Always returns the invalid
    /// handle.
    pub fn disconnect_vm(&self, vm: Option<VmHandle>) -> VmHandle {
        if let Some(vm) = vm.filter(VmHandle::is_valid) {
            tracing::debug!(handle = vm.as_raw(), "releasing VM");
            self.backend.vm_release(vm);
        }
        VmHandle::invalid()
    }

    /// Config paths of the running or registered VMs on a host.
    pub fn find_vms(&self, host: Option<HostHandle>, kind: FindKind) -> Result<Vec<String>> {
        let host = require_host(host)?;
        let paths = self.backend.find_vms(host, kind).map_err(|e| {
            tracing::error!(?kind, "error searching for VMs: {}", e);
            e
        })?;
        tracing::debug!(?kind, count = paths.len(), "found VMs");
        Ok(paths)
    }
}

fn require_host(host: Option<HostHandle>) -> Result<HostHandle> {
    match host {
        Some(h) if h.is_valid() => Ok(h),
        _ => {
            tracing::error!("invalid host handle");
            Err(Error::InvalidHandle)
        }
    }
}
