//! eAPI data models
//!
//! JSON-RPC envelopes for the `runCmds` procedure and typed views of the
//! command output the client decodes.

use serde::{Deserialize, Deserializer, Serialize};

/// VLAN identifier. Not range-checked; the switch decides what is valid.
pub type VlanId = u16;

/// Raw `runCmds` result as returned by the switch
///
/// For a successful call this is a list with one entry per command.
pub type CommandResponse = serde_json::Value;

/// eAPI protocol revision sent with every `runCmds` call
pub const EAPI_VERSION: u32 = 1;

/// JSON-RPC request for `runCmds`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunCmdsRequest {
    pub jsonrpc: String,
    pub method: String,
    pub params: RunCmdsParams,
    pub id: String,
}

/// Parameters of a `runCmds` call
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunCmdsParams {
    pub version: u32,
    pub cmds: Vec<String>,
    pub format: String,
}

impl RunCmdsRequest {
    /// Build a request with a fresh id
    pub fn new(version: u32, cmds: &[String]) -> Self {
        Self {
            jsonrpc: "2.0".to_string(),
            method: "runCmds".to_string(),
            params: RunCmdsParams {
                version,
                cmds: cmds.to_vec(),
                format: "json".to_string(),
            },
            id: uuid::Uuid::new_v4().to_string(),
        }
    }
}

/// JSON-RPC response envelope
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RpcResponse {
    #[serde(default)]
    pub jsonrpc: Option<String>,
    #[serde(default)]
    pub id: Option<serde_json::Value>,
    /// `Some(Value::Null)` for `"result": null`, `None` when absent
    #[serde(default, deserialize_with = "present")]
    pub result: Option<serde_json::Value>,
    #[serde(default)]
    pub error: Option<RpcErrorBody>,
}

fn present<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    T::deserialize(deserializer).map(Some)
}

/// JSON-RPC error member
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RpcErrorBody {
    pub code: i64,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,
}

/// `show version` output
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct VersionInfo {
    pub model_name: String,
    pub version: String,
    pub internal_version: String,
    pub internal_build_id: String,
    pub serial_number: String,
    pub system_mac_address: String,
    pub hardware_revision: String,
    pub architecture: String,
    pub uptime: f64,
    pub bootup_timestamp: f64,
    pub mem_total: u64,
    pub mem_free: u64,
    pub is_intl_version: bool,
}
