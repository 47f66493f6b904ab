//! Switch VLAN provisioner
//!
//! Connects to one switch over eAPI, reports its version, creates the
//! configured VLANs and prints their state.
//!
//! Configuration comes from the environment:
//! - `SWITCH_HOST`, `SWITCH_USERNAME`, `SWITCH_PASSWORD` (required)
//! - `SWITCH_SCHEME`, `SWITCH_INSECURE`, `SWITCH_TIMEOUT_SECS` (optional)
//! - `SWITCH_VLANS` comma-separated ids, default `1,2,3,4`

use anyhow::{Context, Result};
use eapi_client::{CommandResponse, CommandRunner, SwitchClient, SwitchConfig, VlanId, parse_vlan_list};
use std::env;
use tracing::info;
use tracing_subscriber::EnvFilter;

const DEFAULT_VLANS: &str = "1,2,3,4";

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    info!("Starting switch VLAN provisioner");

    let config = SwitchConfig::from_env().context("loading switch configuration")?;
    let vlans = parse_vlan_list(&env::var("SWITCH_VLANS").unwrap_or_else(|_| DEFAULT_VLANS.to_string()))
        .context("parsing SWITCH_VLANS")?;

    info!("Configuration:");
    info!("  Switch: {}://{}", config.scheme, config.host);
    info!("  Username: {}", config.username);
    info!("  TLS verification: {}", if config.insecure { "disabled" } else { "enabled" });
    info!("  VLANs: {:?}", vlans);

    let switch = SwitchClient::new(&config)?;
    let report = provision(&switch, &vlans).await?;

    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

/// Version check, VLAN creation, then VLAN readback
async fn provision<C: CommandRunner>(switch: &SwitchClient<C>, vlans: &[VlanId]) -> Result<Vec<CommandResponse>> {
    let version = switch.version().await?;
    info!("Connected to {} running {}", version.model_name, version.version);

    switch.add_vlans(vlans).await?;
    info!("Configured {} vlan(s)", vlans.len());

    let vlan_info = switch.show_vlans(vlans).await?;
    Ok(vlan_info)
}
