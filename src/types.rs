//! Type definitions and enums.

use std::fmt;
use std::str::FromStr;

use crate::ffi;

/// Default HTTPS port of a vSphere host.
pub const DEFAULT_VSPHERE_PORT: u16 = 443;

/// Kind of VIX host to connect to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ServiceProvider {
    /// Let the library pick.
    Default,
    /// VMware Server 1.x.
    Server,
    /// VMware Workstation on the local machine.
    Workstation,
    /// VMware Player on the local machine.
    Player,
    /// vSphere: ESX/ESXi or vCenter.
    #[default]
    VSphere,
    /// Shared VMs on a Workstation host.
    WorkstationShared,
}

impl From<ServiceProvider> for i32 {
    fn from(provider: ServiceProvider) -> i32 {
        match provider {
            ServiceProvider::Default => ffi::VIX_SERVICEPROVIDER_DEFAULT,
            ServiceProvider::Server => ffi::VIX_SERVICEPROVIDER_VMWARE_SERVER,
            ServiceProvider::Workstation => ffi::VIX_SERVICEPROVIDER_VMWARE_WORKSTATION,
            ServiceProvider::Player => ffi::VIX_SERVICEPROVIDER_VMWARE_PLAYER,
            ServiceProvider::VSphere => ffi::VIX_SERVICEPROVIDER_VMWARE_VI_SERVER,
            ServiceProvider::WorkstationShared => {
                ffi::VIX_SERVICEPROVIDER_VMWARE_WORKSTATION_SHARED
            }
        }
    }
}

impl FromStr for ServiceProvider {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "default" => Ok(ServiceProvider::Default),
            "server" => Ok(ServiceProvider::Server),
            "workstation" => Ok(ServiceProvider::Workstation),
            "player" => Ok(ServiceProvider::Player),
            "vsphere" | "esx" | "vcenter" => Ok(ServiceProvider::VSphere),
            "workstation-shared" => Ok(ServiceProvider::WorkstationShared),
            other => Err(format!("unknown service provider '{}'", other)),
        }
    }
}

impl fmt::Display for ServiceProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ServiceProvider::Default => "default",
            ServiceProvider::Server => "server",
            ServiceProvider::Workstation => "workstation",
            ServiceProvider::Player => "player",
            ServiceProvider::VSphere => "vsphere",
            ServiceProvider::WorkstationShared => "workstation-shared",
        };
        f.write_str(name)
    }
}

/// Which VMs a host search returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FindKind {
    /// VMs that are powered on.
    #[default]
    Running,
    /// Every VM registered with the host.
    Registered,
}

impl From<FindKind> for i32 {
    fn from(kind: FindKind) -> i32 {
        match kind {
            FindKind::Running => ffi::VIX_FIND_RUNNING_VMS,
            FindKind::Registered => ffi::VIX_FIND_REGISTERED_VMS,
        }
    }
}

/// Options for connecting to a host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectOptions {
    /// Port on the host.
    pub port: u16,
    /// Host product.
    pub provider: ServiceProvider,
}

impl Default for ConnectOptions {
    fn default() -> Self {
        Self {
            port: DEFAULT_VSPHERE_PORT,
            provider: ServiceProvider::VSphere,
        }
    }
}

impl ConnectOptions {
    /// Host name and port as `VixHost_Connect` expects them.
    ///
    /// vSphere hosts are addressed by their SDK URL and the port argument is
    /// ignored by the library, so it is passed as 0.
    pub fn address(&self, host: &str) -> (String, i32) {
        match self.provider {
            ServiceProvider::VSphere => (format!("https://{}:{}/sdk", host, self.port), 0),
            _ => (host.to_string(), i32::from(self.port)),
        }
    }
}
