//! Raw C function bindings for libvixAllProducts.
//!
//! This module contains the direct FFI bindings to the VIX C API (vix.h).
//! Users should prefer the safe Rust wrappers in the parent modules.
//!
//! The function declarations only exist when the SDK was found at build
//! time (`cfg(vix_sdk)`); the constants are always available.

use std::os::raw::c_int;
#[cfg(vix_sdk)]
use std::os::raw::{c_char, c_void};

#[cfg(vix_sdk)]
use super::handles::RawHandle;

/// The C `VixError` type (64-bit; the low 16 bits are the error code).
pub type VixError = u64;

/// The C `VixPropertyID` type.
pub type VixPropertyId = c_int;

/// The C `VixEventType` type.
pub type VixEventType = c_int;

/// `VIX_API_VERSION`: always request the newest API the library supports.
pub const VIX_API_VERSION: c_int = -1;

// Error codes
pub const VIX_OK: VixError = 0;
pub const VIX_E_FILE_NOT_FOUND: VixError = 4;
pub const VIX_E_VM_NOT_FOUND: VixError = 4000;

/// `VIX_ERROR_CODE(err)`.
#[inline]
pub const fn vix_error_code(err: VixError) -> u16 {
    (err & 0xFFFF) as u16
}

// Service providers (VixServiceProvider)
pub const VIX_SERVICEPROVIDER_DEFAULT: c_int = 1;
pub const VIX_SERVICEPROVIDER_VMWARE_SERVER: c_int = 2;
pub const VIX_SERVICEPROVIDER_VMWARE_WORKSTATION: c_int = 3;
pub const VIX_SERVICEPROVIDER_VMWARE_PLAYER: c_int = 4;
pub const VIX_SERVICEPROVIDER_VMWARE_VI_SERVER: c_int = 10;
pub const VIX_SERVICEPROVIDER_VMWARE_WORKSTATION_SHARED: c_int = 11;

// Host options (VixHostOptions)
pub const VIX_HOSTOPTION_NONE: c_int = 0;

// Find item types (VixFindItemType)
pub const VIX_FIND_RUNNING_VMS: c_int = 1;
pub const VIX_FIND_REGISTERED_VMS: c_int = 4;

// Property ids
pub const VIX_PROPERTY_NONE: VixPropertyId = 0;
pub const VIX_PROPERTY_JOB_RESULT_HANDLE: VixPropertyId = 3010;
pub const VIX_PROPERTY_FOUND_ITEM_LOCATION: VixPropertyId = 4010;

// Event types
pub const VIX_EVENTTYPE_FIND_ITEM: VixEventType = 8;

/// Callback invoked by the library for job progress and found items.
#[cfg(vix_sdk)]
pub type VixEventProc = Option<
    unsafe extern "C" fn(
        handle: RawHandle,
        event_type: VixEventType,
        more_event_info: RawHandle,
        client_data: *mut c_void,
    ),
>;

#[cfg(vix_sdk)]
extern "C" {
    // ========================================================================
    // Host
    // ========================================================================

    pub fn VixHost_Connect(
        api_version: c_int,
        host_type: c_int,
        host_name: *const c_char,
        host_port: c_int,
        user_name: *const c_char,
        password: *const c_char,
        options: c_int,
        property_list_handle: RawHandle,
        callback_proc: VixEventProc,
        client_data: *mut c_void,
    ) -> RawHandle;

    pub fn VixHost_Disconnect(host_handle: RawHandle);

    pub fn VixHost_FindItems(
        host_handle: RawHandle,
        search_type: c_int,
        search_criteria: RawHandle,
        timeout: i32,
        callback_proc: VixEventProc,
        client_data: *mut c_void,
    ) -> RawHandle;

    // ========================================================================
    // Virtual machines
    // ========================================================================

    pub fn VixVM_Open(
        host_handle: RawHandle,
        vmx_file_path_name: *const c_char,
        callback_proc: VixEventProc,
        client_data: *mut c_void,
    ) -> RawHandle;

    // ========================================================================
    // Jobs, properties and handle management
    // ========================================================================

    /// Property ids and out-pointers alternate, terminated by
    /// `VIX_PROPERTY_NONE`.
    pub fn VixJob_Wait(job_handle: RawHandle, first_property_id: VixPropertyId, ...) -> VixError;

    /// Same varargs convention as `VixJob_Wait`.
    pub fn Vix_GetProperties(
        handle: RawHandle,
        first_property_id: VixPropertyId,
        ...
    ) -> VixError;

    pub fn Vix_FreeBuffer(p: *mut c_void);

    pub fn Vix_ReleaseHandle(handle: RawHandle);

    pub fn Vix_GetErrorText(err: VixError, locale: *const c_char) -> *const c_char;
}
