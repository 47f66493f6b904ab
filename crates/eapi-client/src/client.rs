//! Switch client
//!
//! [`SwitchClient`] turns version and VLAN operations into `runCmds` calls.
//! Calls are issued one at a time, in input order, and the first failure
//! stops the operation.

use crate::config::SwitchConfig;
use crate::connection::EapiConnection;
use crate::error::{ConfigError, EapiError};
use crate::models::{CommandResponse, EAPI_VERSION, VersionInfo, VlanId};
use crate::runner_trait::CommandRunner;
use tracing::{debug, warn};

/// Client for one switch
///
/// Owns its connection for its whole lifetime; there is nothing to close.
#[derive(Debug)]
pub struct SwitchClient<C = EapiConnection> {
    connection: C,
}

impl SwitchClient<EapiConnection> {
    /// Create a client from explicit configuration
    ///
    /// Builds the endpoint and HTTP client only; the switch is not contacted.
    pub fn new(config: &SwitchConfig) -> Result<Self, ConfigError> {
        let connection = EapiConnection::new(config).map_err(|e| match e {
            EapiError::InvalidConfig(msg) => ConfigError::InvalidConfig(msg),
            other => ConfigError::InvalidConfig(format!("failed to build HTTP client: {}", other)),
        })?;
        Ok(Self { connection })
    }

    /// HTTPS client with certificate verification on
    pub fn connect(username: &str, password: &str, address: &str) -> Result<Self, ConfigError> {
        Self::new(&SwitchConfig::new(username, password, address))
    }
}

impl<C: CommandRunner> SwitchClient<C> {
    /// Wrap an existing command runner
    pub fn with_connection(connection: C) -> Self {
        Self { connection }
    }

    /// The underlying connection
    pub fn connection(&self) -> &C {
        &self.connection
    }

    /// Run `show version` and return the raw result unchanged
    pub async fn get_version_info(&self) -> Result<CommandResponse, ConfigError> {
        self.run_checked(&["show version".to_string()])
            .await
            .map_err(|source| {
                warn!("show version failed: {}", source);
                ConfigError::VersionInfo { source }
            })
    }

    /// Run `show version` and decode the output
    pub async fn version(&self) -> Result<VersionInfo, ConfigError> {
        let response = self.get_version_info().await?;
        let first = response
            .as_array()
            .and_then(|results| results.first())
            .ok_or_else(|| ConfigError::VersionInfo {
                source: EapiError::MalformedResponse(format!(
                    "expected a non-empty result list, got {}",
                    response
                )),
            })?;

        serde_json::from_value(first.clone()).map_err(|e| ConfigError::VersionInfo {
            source: EapiError::MalformedResponse(format!("invalid show version output: {}", e)),
        })
    }

    /// Create each VLAN, in order
    ///
    /// Stops at the first VLAN the switch rejects; later VLANs are not sent.
    /// An empty slice sends nothing.
    pub async fn add_vlans(&self, vlans: &[VlanId]) -> Result<(), ConfigError> {
        for &vlan in vlans {
            let cmds = [
                "enable".to_string(),
                "configure".to_string(),
                format!("vlan {}", vlan),
            ];
            self.run_checked(&cmds).await.map_err(|source| {
                warn!("Error in configuring vlan {}: {}", vlan, source);
                ConfigError::AddVlans { vlan, source }
            })?;
            debug!("Configured vlan {}", vlan);
        }
        Ok(())
    }

    /// Fetch `show vlan <id>` for each VLAN, in order
    ///
    /// Returns one response per input id. On the first failure nothing
    /// collected so far is returned.
    pub async fn show_vlans(&self, vlans: &[VlanId]) -> Result<Vec<CommandResponse>, ConfigError> {
        let mut vlan_info = Vec::with_capacity(vlans.len());
        for &vlan in vlans {
            let response = self
                .run_checked(&[format!("show vlan {}", vlan)])
                .await
                .map_err(|source| {
                    warn!("Error in getting vlan {}: {}", vlan, source);
                    ConfigError::ShowVlans { vlan, source }
                })?;
            vlan_info.push(response);
        }
        Ok(vlan_info)
    }

    /// Run an arbitrary command list with the same error checks
    pub async fn run_cmds(&self, cmds: &[String]) -> Result<CommandResponse, ConfigError> {
        self.run_checked(cmds).await.map_err(|source| {
            warn!("runCmds {:?} failed: {}", cmds, source);
            ConfigError::Commands { source }
        })
    }

    async fn run_checked(&self, cmds: &[String]) -> Result<CommandResponse, EapiError> {
        debug!("runCmds {:?}", cmds);
        let response = self.connection.run_cmds(EAPI_VERSION, cmds).await?;
        check_response(response)
    }
}

/// Reject an object result carrying an `"error"` key
pub(crate) fn check_response(response: CommandResponse) -> Result<CommandResponse, EapiError> {
    let Some(map) = response.as_object() else {
        return Ok(response);
    };
    if !map.contains_key("error") {
        return Ok(response);
    }

    let message = match map.get("message") {
        Some(serde_json::Value::String(msg)) => msg.clone(),
        Some(other) => other.to_string(),
        None => map.get("error").map(ToString::to_string).unwrap_or_default(),
    };
    let code = map.get("code").and_then(serde_json::Value::as_i64);
    Err(EapiError::Command { code, message })
}
