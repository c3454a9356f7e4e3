//! Error types for the vix crate.

use thiserror::Error;

/// Result type alias for vix operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for vix operations.
#[derive(Error, Debug)]
pub enum Error {
    /// Handle is absent or the invalid sentinel.
    #[error("invalid handle")]
    InvalidHandle,

    /// Function argument cannot be passed to the library.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The library could not connect to the host.
    #[error("error connecting to host {host}: {message} (VIX error {code})")]
    Connect {
        /// Host name as given by the caller.
        host: String,
        /// VIX error code.
        code: u16,
        /// Text from `Vix_GetErrorText`.
        message: String,
    },

    /// The library could not open the VM.
    #[error("error connecting to VM {path}: {message} (VIX error {code})")]
    OpenVm {
        /// Path of the VM config descriptor.
        path: String,
        /// VIX error code.
        code: u16,
        /// Text from `Vix_GetErrorText`.
        message: String,
    },

    /// Any other library failure.
    #[error("VIX error {code}: {message}")]
    Vix {
        /// VIX error code.
        code: u16,
        /// Text from `Vix_GetErrorText`.
        message: String,
    },

    /// The crate was built without the VIX SDK.
    #[error("VIX SDK unavailable: rebuild with VIX_LIB_DIR pointing at libvixAllProducts")]
    SdkUnavailable,
}

impl Error {
    /// The VIX error code, for errors reported by the library.
    pub fn code(&self) -> Option<u16> {
        match self {
            Error::Connect { code, .. } | Error::OpenVm { code, .. } | Error::Vix { code, .. } => {
                Some(*code)
            }
            _ => None,
        }
    }

    /// Check if this is an invalid handle error.
    pub fn is_invalid_handle(&self) -> bool {
        matches!(self, Error::InvalidHandle)
    }

    /// Check if the library reported a missing file or VM.
    pub fn is_not_found(&self) -> bool {
        use crate::ffi::{vix_error_code, VIX_E_FILE_NOT_FOUND, VIX_E_VM_NOT_FOUND};

        let not_found = [
            vix_error_code(VIX_E_FILE_NOT_FOUND),
            vix_error_code(VIX_E_VM_NOT_FOUND),
        ];
        self.code().map_or(false, |code| not_found.contains(&code))
    }

    /// Check if the crate was built without the VIX SDK.
    pub fn is_sdk_unavailable(&self) -> bool {
        matches!(self, Error::SdkUnavailable)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_vm_error_names_the_config_path() {
        let err = Error::OpenVm {
            path: "[datastore1] web/web.vmx".to_string(),
            code: 4000,
            message: "The virtual machine cannot be found".to_string(),
        };
        let text = err.to_string();
        assert!(text.contains("[datastore1] web/web.vmx"), "{}", text);
        assert!(err.is_not_found());
        assert_eq!(err.code(), Some(4000));
    }

    #[test]
    fn precondition_errors_carry_no_code() {
        assert_eq!(Error::InvalidHandle.code(), None);
        assert!(Error::InvalidHandle.is_invalid_handle());
        assert!(!Error::SdkUnavailable.is_not_found());
    }
}
