//! eAPI client errors
//!
//! Two layers: [`EapiError`] describes what went wrong on a single `runCmds`
//! exchange, [`ConfigError`] names the switch operation that failed and keeps
//! the [`EapiError`] as its source.

use crate::models::VlanId;
use thiserror::Error;

/// Errors from a single eAPI exchange
#[derive(Debug, Error)]
pub enum EapiError {
    /// Connection, TLS, timeout or body read failure
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Switch rejected the credentials (HTTP 401/403)
    #[error("authentication failed: {0}")]
    Authentication(String),

    /// Any other non-success HTTP status
    #[error("HTTP error: {status} - {body}")]
    Http {
        /// HTTP status code
        status: u16,
        /// Response body, possibly empty
        body: String,
    },

    /// The switch reported a command failure
    #[error("command error: {message}")]
    Command {
        /// JSON-RPC error code, when the switch sent one
        code: Option<i64>,
        /// Error message from the switch
        message: String,
    },

    /// The response did not have the expected shape
    #[error("malformed response: {0}")]
    MalformedResponse(String),

    /// Endpoint or client could not be built from the configuration
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Errors returned by [`SwitchClient`](crate::SwitchClient) operations
#[derive(Debug, Error)]
pub enum ConfigError {
    /// `show version` failed
    #[error("could not get the version information: {source}")]
    VersionInfo {
        /// Underlying cause
        #[source]
        source: EapiError,
    },

    /// Configuring a VLAN failed; later VLANs in the request were not sent
    #[error("could not configure vlans (vlan {vlan}): {source}")]
    AddVlans {
        /// VLAN being configured when the failure happened
        vlan: VlanId,
        /// Underlying cause
        #[source]
        source: EapiError,
    },

    /// Reading a VLAN failed; responses collected so far are discarded
    #[error("could not show vlans (vlan {vlan}): {source}")]
    ShowVlans {
        /// VLAN being read when the failure happened
        vlan: VlanId,
        /// Underlying cause
        #[source]
        source: EapiError,
    },

    /// An arbitrary command list failed
    #[error("could not run commands: {source}")]
    Commands {
        /// Underlying cause
        #[source]
        source: EapiError,
    },

    /// Client configuration is invalid
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

impl ConfigError {
    /// The eAPI failure behind this error, if any
    pub fn cause(&self) -> Option<&EapiError> {
        match self {
            Self::VersionInfo { source }
            | Self::AddVlans { source, .. }
            | Self::ShowVlans { source, .. }
            | Self::Commands { source } => Some(source),
            Self::InvalidConfig(_) => None,
        }
    }

    /// VLAN id the failure is attributed to
    pub fn vlan(&self) -> Option<VlanId> {
        match self {
            Self::AddVlans { vlan, .. } | Self::ShowVlans { vlan, .. } => Some(*vlan),
            _ => None,
        }
    }

    /// True when the switch could not be reached or the HTTP layer failed
    pub fn is_transport(&self) -> bool {
        matches!(
            self.cause(),
            Some(EapiError::Transport(_) | EapiError::Http { .. } | EapiError::Authentication(_))
        )
    }

    /// True when the switch executed the request and reported an error
    pub fn is_command(&self) -> bool {
        matches!(self.cause(), Some(EapiError::Command { .. }))
    }
}
