//! Handle types for opaque references to VIX objects.
//!
//! VIX hands out every object as a C `int`. Each handle type is a newtype
//! over that integer so host, VM and job handles cannot be mixed up.

use std::os::raw::c_int;

/// The C `VixHandle` type.
pub type RawHandle = c_int;

/// `VIX_INVALID_HANDLE`.
pub const VIX_INVALID_HANDLE: RawHandle = 0;

/// Macro to define a handle type.
macro_rules! define_handle {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[repr(transparent)]
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub struct $name {
            raw: RawHandle,
        }

        impl $name {
            /// The invalid handle sentinel.
            #[inline]
            pub const fn invalid() -> Self {
                Self { raw: VIX_INVALID_HANDLE }
            }

            /// Check if this handle is valid (not the sentinel).
            #[inline]
            pub const fn is_valid(&self) -> bool {
                self.raw != VIX_INVALID_HANDLE
            }

            /// Wrap a raw handle returned by the library.
            #[inline]
            pub const fn from_raw(raw: RawHandle) -> Self {
                Self { raw }
            }

            /// The raw value passed back to the library.
            #[inline]
            pub const fn as_raw(&self) -> RawHandle {
                self.raw
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::invalid()
            }
        }
    };
}

define_handle!(
    /// Connection to a VIX host (ESX, vCenter, Server or Workstation).
    HostHandle
);
define_handle!(
    /// Session on a single virtual machine.
    VmHandle
);
define_handle!(
    /// Asynchronous VIX job; only lives inside a single call.
    JobHandle
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_the_invalid_sentinel() {
        assert_eq!(HostHandle::default(), HostHandle::invalid());
        assert_eq!(VmHandle::default().as_raw(), VIX_INVALID_HANDLE);
        assert!(!JobHandle::default().is_valid());
    }

    #[test]
    fn nonzero_handles_are_valid() {
        let h = HostHandle::from_raw(42);
        assert!(h.is_valid());
        assert_eq!(h.as_raw(), 42);
        assert_ne!(h, HostHandle::invalid());
    }
}
