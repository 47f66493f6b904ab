//! CommandRunner trait for mocking
//!
//! [`SwitchClient`](crate::SwitchClient) only needs something that can execute
//! a `runCmds` call. [`EapiConnection`](crate::EapiConnection) does it over
//! HTTP; tests plug in an in-memory runner instead.

use crate::error::EapiError;
use crate::models::CommandResponse;

/// Executes eAPI command lists
///
/// All async methods must be `Send` to work with Tokio's work-stealing runtime.
#[async_trait::async_trait]
pub trait CommandRunner: Send + Sync {
    /// Run `cmds` in order on the switch and return the raw result
    async fn run_cmds(&self, version: u32, cmds: &[String]) -> Result<CommandResponse, EapiError>;
}
