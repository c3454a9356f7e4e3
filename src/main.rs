use anyhow::{ensure, Result};
use clap::{Parser, Subcommand};
use vix::{Client, ConnectOptions, FindKind, HostHandle, ServiceProvider, DEFAULT_VSPHERE_PORT};

#[derive(Parser)]
#[command(name = "vixctl")]
#[command(about = "Connect to VMware hosts and VMs through the VIX API", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Host name or IP address
    #[arg(long, env = "VIX_HOST", global = true, default_value = "127.0.0.1")]
    host: String,

    /// User on the host
    #[arg(long, env = "VIX_USER", global = true, default_value = "root")]
    user: String,

    /// Password for the user
    #[arg(long, env = "VIX_PASSWORD", global = true, hide_env_values = true, default_value = "")]
    password: String,

    /// Port on the host
    #[arg(long, env = "VIX_PORT", global = true, default_value_t = DEFAULT_VSPHERE_PORT)]
    port: u16,

    /// Host product (vsphere, server, workstation, player, workstation-shared)
    #[arg(long, env = "VIX_PROVIDER", global = true, default_value = "vsphere")]
    provider: ServiceProvider,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Open and close a host connection
    Connect,

    /// Open and release a VM
    OpenVm {
        /// Full path of the VM's .vmx file on the host
        config_path: String,
    },

    /// List VMs on the host
    ListVms {
        /// List every registered VM instead of only running ones
        #[arg(long)]
        registered: bool,
    },
}

/// Report an error and terminate the process.
fn croak(msg: impl std::fmt::Display) -> ! {
    eprintln!("VIX: {}", msg);
    std::process::exit(1);
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::INFO)
            .init();
    }

    ensure!(!cli.host.trim().is_empty(), "--host must not be empty");
    ensure!(cli.port != 0, "--port must be between 1 and 65535");

    if !vix::sdk_available() {
        croak(vix::Error::SdkUnavailable);
    }

    let options = ConnectOptions {
        port: cli.port,
        provider: cli.provider,
    };
    let client = Client::new();

    let host = client
        .connect_host_with(&cli.host, &cli.user, &cli.password, &options)
        .unwrap_or_else(|e| croak(e));
    tracing::info!("Connected to {} ({})", cli.host, cli.provider);

    match cli.command {
        Commands::Connect => {
            println!("✓ Connected to {}", cli.host);
        }
        Commands::OpenVm { config_path } => {
            let vm = client
                .connect_vm(Some(host), &config_path)
                .unwrap_or_else(|e| disconnect_and_croak(&client, host, e));
            println!("✓ Opened {}", config_path);
            client.disconnect_vm(Some(vm));
        }
        Commands::ListVms { registered } => {
            let kind = if registered {
                FindKind::Registered
            } else {
                FindKind::Running
            };
            let paths = client
                .find_vms(Some(host), kind)
                .unwrap_or_else(|e| disconnect_and_croak(&client, host, e));
            if paths.is_empty() {
                println!("No VMs found");
            }
            for path in paths {
                println!("{}", path);
            }
        }
    }

    client.disconnect_host(host);
    tracing::info!("Disconnected from {}", cli.host);

    Ok(())
}

fn disconnect_and_croak(client: &Client, host: HostHandle, err: vix::Error) -> ! {
    client.disconnect_host(host);
    croak(err)
}
