//! Build script for vix-api crate.
//!
//! Locates the VMware VIX SDK and links against libvixAllProducts.
//! When the SDK is missing the crate still builds; the `Sdk` backend then
//! reports `Error::SdkUnavailable` at runtime.

use std::env;
use std::path::PathBuf;

/// Install locations used by the VIX SDK installers.
const DEFAULT_LIB_DIRS: &[&str] = &[
    "/usr/lib/vmware-vix",
    "/usr/lib",
    "/usr/local/lib",
    "/usr/lib64",
    "C:\\Program Files (x86)\\VMware\\VMware VIX",
    "C:\\Program Files\\VMware\\VMware VIX",
];

fn main() {
    println!("cargo:rustc-check-cfg=cfg(vix_sdk)");
    println!("cargo:rerun-if-env-changed=VIX_LIB_DIR");
    println!("cargo:rerun-if-env-changed=VIX_NO_LINK");

    if env::var_os("VIX_NO_LINK").is_some() {
        println!("cargo:warning=VIX_NO_LINK set, building without the VIX SDK");
        return;
    }

    let target = env::var("TARGET").unwrap_or_default();
    let lib_dir = match find_lib_dir(&target) {
        Some(dir) => dir,
        None => {
            println!(
                "cargo:warning=libvixAllProducts not found; set VIX_LIB_DIR to link the VIX SDK"
            );
            return;
        }
    };

    println!("cargo:rustc-link-search=native={}", lib_dir.display());
    println!("cargo:rustc-link-lib=dylib=vixAllProducts");
    println!("cargo:rustc-cfg=vix_sdk");

    // The SDK's shared object pulls in libdl on older glibc
    if target.contains("linux") {
        println!("cargo:rustc-link-lib=dl");
    }
}

/// Find the directory holding libvixAllProducts, preferring `VIX_LIB_DIR`.
fn find_lib_dir(target: &str) -> Option<PathBuf> {
    let lib_name = library_file_name(target);

    if let Some(dir) = env::var_os("VIX_LIB_DIR") {
        let dir = PathBuf::from(dir);
        if dir.join(lib_name).exists() {
            return Some(dir);
        }
        println!(
            "cargo:warning=VIX_LIB_DIR={} does not contain {}",
            dir.display(),
            lib_name
        );
        return None;
    }

    DEFAULT_LIB_DIRS
        .iter()
        .map(PathBuf::from)
        .find(|dir| dir.join(lib_name).exists())
}

fn library_file_name(target: &str) -> &'static str {
    if target.contains("windows") {
        "VixAllProducts.lib"
    } else if target.contains("apple") {
        "libvixAllProducts.dylib"
    } else {
        "libvixAllProducts.so"
    }
}
