//! Error conversion utilities for FFI.

use super::raw::{vix_error_code, VixError, VIX_OK};
#[cfg(vix_sdk)]
use super::raw::Vix_GetErrorText;
#[cfg(vix_sdk)]
use std::ffi::CStr;

/// Code and message for a failed `VixError`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Failure {
    pub code: u16,
    pub message: String,
}

/// Look up the library's English text for an error.
#[cfg(vix_sdk)]
pub fn error_text(err: VixError) -> String {
    // The returned string is static storage owned by the library
    unsafe {
        let ptr = Vix_GetErrorText(err, std::ptr::null());
        if ptr.is_null() {
            return "Unknown error".to_string();
        }
        CStr::from_ptr(ptr).to_string_lossy().into_owned()
    }
}

#[cfg(not(vix_sdk))]
pub fn error_text(_err: VixError) -> String {
    "Unknown error".to_string()
}

/// Check a `VixError` and convert to Result.
pub fn check_error(err: VixError) -> Result<(), Failure> {
    if err == VIX_OK {
        Ok(())
    } else {
        Err(Failure {
            code: vix_error_code(err),
            message: error_text(err),
        })
    }
}

impl From<Failure> for crate::Error {
    fn from(f: Failure) -> Self {
        crate::Error::Vix {
            code: f.code,
            message: f.message,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ok_is_not_a_failure() {
        assert!(check_error(VIX_OK).is_ok());
    }

    #[test]
    fn failure_keeps_only_the_error_code() {
        let f = check_error((1u64 << 40) | 3).unwrap_err();
        assert_eq!(f.code, 3);
        assert!(!f.message.is_empty());
    }
}
