//! Basic example connecting to a VIX host and listing its VMs.
//!
//! Run with: cargo run --example basic -- <host> <user> <password>

use vix::FindKind;

fn main() -> vix::Result<()> {
    let mut args = std::env::args().skip(1);
    let host = args.next().unwrap_or_else(|| "127.0.0.1".to_string());
    let user = args.next().unwrap_or_else(|| "root".to_string());
    let password = args.next().unwrap_or_default();

    if !vix::sdk_available() {
        println!("Built without the VIX SDK - set VIX_LIB_DIR and rebuild");
        return Ok(());
    }

    println!("--- Connecting to {} ---", host);
    let host_handle = vix::connect_host(&host, &user, &password)?;

    println!("\n--- Running VMs ---");
    let running = vix::find_vms(Some(host_handle), FindKind::Running)?;
    for path in &running {
        println!("  {}", path);
    }

    if let Some(path) = running.first() {
        println!("\n--- Opening {} ---", path);
        match vix::connect_vm(Some(host_handle), path) {
            Ok(vm) => {
                println!("VM handle valid: {}", vm.is_valid());
                vix::disconnect_vm(Some(vm));
            }
            Err(e) => println!("Could not open VM: {}", e),
        }
    }

    println!("\n--- Disconnecting ---");
    let host_handle = vix::disconnect_host(host_handle);
    println!("Host handle valid: {}", host_handle.is_valid());

    Ok(())
}
