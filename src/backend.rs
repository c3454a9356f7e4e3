//! The VIX library as seen by the wrapper operations.
//!
//! [`Backend`] lists the calls the wrapper forwards to. [`Sdk`] is the real
//! implementation on top of libvixAllProducts. Library failures come back as
//! [`Error::Vix`]; the wrapper adds host or path context.

use crate::error::{Error, Result};
use crate::ffi::{HostHandle, VmHandle};
use crate::types::{FindKind, ServiceProvider};

/// External collaborator providing host and VM handles.
pub trait Backend {
    /// Connect to a host and wait for the resulting host handle.
    fn host_connect(
        &self,
        provider: ServiceProvider,
        host: &str,
        port: i32,
        user: &str,
        password: &str,
    ) -> Result<HostHandle>;

    /// Disconnect from a host and release its handle.
    fn host_disconnect(&self, host: HostHandle);

    /// Open a VM by its config descriptor and wait for the VM handle.
    fn vm_open(&self, host: HostHandle, vmx_path: &str) -> Result<VmHandle>;

    /// Release a VM handle.
    fn vm_release(&self, vm: VmHandle);

    /// Config descriptor paths of the VMs on a host.
    fn find_vms(&self, host: HostHandle, kind: FindKind) -> Result<Vec<String>>;
}

impl<B: Backend + ?Sized> Backend for &B {
    fn host_connect(
        &self,
        provider: ServiceProvider,
        host: &str,
        port: i32,
        user: &str,
        password: &str,
    ) -> Result<HostHandle> {
        (**self).host_connect(provider, host, port, user, password)
    }

    fn host_disconnect(&self, host: HostHandle) {
        (**self).host_disconnect(host)
    }

    fn vm_open(&self, host: HostHandle, vmx_path: &str) -> Result<VmHandle> {
        (**self).vm_open(host, vmx_path)
    }

    fn vm_release(&self, vm: VmHandle) {
        (**self).vm_release(vm)
    }

    fn find_vms(&self, host: HostHandle, kind: FindKind) -> Result<Vec<String>> {
        (**self).find_vms(host, kind)
    }
}

/// Backend backed by the VIX C library linked at build time.
#[derive(Debug, Default, Clone, Copy)]
pub struct Sdk;

impl Sdk {
    /// Check if the crate was linked against the VIX SDK.
    pub const fn available() -> bool {
        cfg!(vix_sdk)
    }
}

#[cfg(vix_sdk)]
mod linked {
    use std::ffi::{CStr, CString};
    use std::os::raw::{c_char, c_void};
    use std::ptr;
    use std::sync::Mutex;

    use super::*;
    use crate::ffi::{self, check_error, JobHandle, RawHandle, VixEventType};

    fn c_string(what: &str, s: &str) -> Result<CString> {
        CString::new(s).map_err(|_| Error::InvalidArgument(format!("{} contains null byte", what)))
    }

    /// Wait for a job that yields a handle, then release the job.
    unsafe fn wait_for_result_handle(job: JobHandle) -> Result<RawHandle> {
        let mut result: RawHandle = ffi::VIX_INVALID_HANDLE;
        let err = ffi::VixJob_Wait(
            job.as_raw(),
            ffi::VIX_PROPERTY_JOB_RESULT_HANDLE,
            &mut result as *mut RawHandle,
            ffi::VIX_PROPERTY_NONE,
        );
        ffi::Vix_ReleaseHandle(job.as_raw());
        check_error(err)?;
        Ok(result)
    }

    /// Collects `VIX_PROPERTY_FOUND_ITEM_LOCATION` of every found item.
    unsafe extern "C" fn collect_found_item(
        _job: RawHandle,
        event_type: VixEventType,
        more_event_info: RawHandle,
        client_data: *mut c_void,
    ) {
        // Progress events carry no item
        if event_type != ffi::VIX_EVENTTYPE_FIND_ITEM || client_data.is_null() {
            return;
        }

        let mut location: *mut c_char = ptr::null_mut();
        let err = ffi::Vix_GetProperties(
            more_event_info,
            ffi::VIX_PROPERTY_FOUND_ITEM_LOCATION,
            &mut location as *mut *mut c_char,
            ffi::VIX_PROPERTY_NONE,
        );
        if let Err(f) = check_error(err) {
            tracing::warn!(code = f.code, "failed to read found VM location: {}", f.message);
            return;
        }
        if location.is_null() {
            return;
        }

        let path = CStr::from_ptr(location).to_string_lossy().into_owned();
        ffi::Vix_FreeBuffer(location as *mut c_void);

        let paths = &*(client_data as *const Mutex<Vec<String>>);
        if let Ok(mut paths) = paths.lock() {
            paths.push(path);
        }
    }

    impl Backend for Sdk {
        fn host_connect(
            &self,
            provider: ServiceProvider,
            host: &str,
            port: i32,
            user: &str,
            password: &str,
        ) -> Result<HostHandle> {
            let host_c = c_string("host", host)?;
            let user_c = c_string("user", user)?;
            let password_c = c_string("password", password)?;

            unsafe {
                let job = ffi::VixHost_Connect(
                    ffi::VIX_API_VERSION,
                    provider.into(),
                    host_c.as_ptr(),
                    port,
                    user_c.as_ptr(),
                    password_c.as_ptr(),
                    ffi::VIX_HOSTOPTION_NONE,
                    ffi::VIX_INVALID_HANDLE,
                    None,
                    ptr::null_mut(),
                );
                let raw = wait_for_result_handle(JobHandle::from_raw(job))?;
                Ok(HostHandle::from_raw(raw))
            }
        }

        fn host_disconnect(&self, host: HostHandle) {
            unsafe {
                ffi::VixHost_Disconnect(host.as_raw());
                ffi::Vix_ReleaseHandle(host.as_raw());
            }
        }

        fn vm_open(&self, host: HostHandle, vmx_path: &str) -> Result<VmHandle> {
            let path_c = c_string("config path", vmx_path)?;

            unsafe {
                let job = ffi::VixVM_Open(host.as_raw(), path_c.as_ptr(), None, ptr::null_mut());
                let raw = wait_for_result_handle(JobHandle::from_raw(job))?;
                Ok(VmHandle::from_raw(raw))
            }
        }

        fn vm_release(&self, vm: VmHandle) {
            unsafe {
                ffi::Vix_ReleaseHandle(vm.as_raw());
            }
        }

        fn find_vms(&self, host: HostHandle, kind: FindKind) -> Result<Vec<String>> {
            let paths: Mutex<Vec<String>> = Mutex::new(Vec::new());

            unsafe {
                let job = ffi::VixHost_FindItems(
                    host.as_raw(),
                    kind.into(),
                    ffi::VIX_INVALID_HANDLE,
                    // Must always be -1
                    -1,
                    Some(collect_found_item),
                    &paths as *const Mutex<Vec<String>> as *mut c_void,
                );
                let err = ffi::VixJob_Wait(job, ffi::VIX_PROPERTY_NONE);
                ffi::Vix_ReleaseHandle(job);
                check_error(err)?;
            }

            Ok(paths.into_inner().unwrap_or_default())
        }
    }
}

#[cfg(not(vix_sdk))]
impl Backend for Sdk {
    fn host_connect(
        &self,
        _provider: ServiceProvider,
        _host: &str,
        _port: i32,
        _user: &str,
        _password: &str,
    ) -> Result<HostHandle> {
        Err(Error::SdkUnavailable)
    }

    fn host_disconnect(&self, host: HostHandle) {
        tracing::warn!(handle = host.as_raw(), "VIX SDK unavailable, not disconnecting");
    }

    fn vm_open(&self, _host: HostHandle, _vmx_path: &str) -> Result<VmHandle> {
        Err(Error::SdkUnavailable)
    }

    fn vm_release(&self, vm: VmHandle) {
        tracing::warn!(handle = vm.as_raw(), "VIX SDK unavailable, not releasing");
    }

    fn find_vms(&self, _host: HostHandle, _kind: FindKind) -> Result<Vec<String>> {
        Err(Error::SdkUnavailable)
    }
}
