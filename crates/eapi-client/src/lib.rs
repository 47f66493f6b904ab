//! Arista eAPI Client
//!
//! Client for reading version information and managing VLANs on Arista
//! switches through the eAPI JSON-RPC endpoint (`/command-api`).
//!
//! # Example
//!
//! ```no_run
//! use eapi_client::{SwitchClient, SwitchConfig};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = SwitchConfig::new("admin", "admin", "10.10.10.11").with_insecure(true);
//! let switch = SwitchClient::new(&config)?;
//!
//! let version = switch.version().await?;
//! println!("{} running {}", version.model_name, version.version);
//!
//! switch.add_vlans(&[1, 2, 3, 4]).await?;
//! let vlans = switch.show_vlans(&[1, 2, 3, 4]).await?;
//! # Ok(())
//! # }
//! ```
//!
//! # Features
//!
//! - **Version**: raw `show version` output or a decoded [`VersionInfo`]
//! - **VLANs**: create and inspect VLANs one id at a time, stopping at the
//!   first failure
//! - **Typed errors**: transport, HTTP, authentication, command and
//!   malformed-response failures stay distinguishable
//! - **Mocking**: `test-util` feature provides `MockSwitchConnection`

pub mod client;
pub mod config;
pub mod connection;
pub mod error;
pub mod models;
#[path = "trait.rs"]
pub mod runner_trait;
#[cfg(any(test, feature = "test-util"))]
pub mod mock;


pub use client::SwitchClient;
pub use config::{Scheme, SwitchConfig, parse_vlan_list};
pub use connection::{EapiConnection, Endpoint};
pub use error::{ConfigError, EapiError};
pub use models::*;
pub use runner_trait::CommandRunner;
#[cfg(any(test, feature = "test-util"))]
pub use mock::MockSwitchConnection;
