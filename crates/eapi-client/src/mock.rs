//! Mock CommandRunner for unit testing
//!
//! Replays scripted responses in order and records every call so tests can
//! assert on the exact command lists a [`SwitchClient`](crate::SwitchClient)
//! sends, without a switch.

use crate::error::EapiError;
use crate::models::CommandResponse;
use crate::runner_trait::CommandRunner;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// One recorded `runCmds` call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedCall {
    /// Protocol version sent
    pub version: u32,
    /// Commands sent, in order
    pub cmds: Vec<String>,
}

#[derive(Debug)]
enum Scripted {
    Response(CommandResponse),
    TransportFailure(String),
}

#[derive(Debug)]
struct MockState {
    script: VecDeque<Scripted>,
    default_response: CommandResponse,
    calls: Vec<RecordedCall>,
}

/// In-memory switch
///
/// Clones share state, so keep one handle for assertions and hand the other
/// to the client.
#[derive(Debug, Clone)]
pub struct MockSwitchConnection {
    state: Arc<Mutex<MockState>>,
}

impl Default for MockSwitchConnection {
    fn default() -> Self {
        Self::new()
    }
}

impl MockSwitchConnection {
    /// Mock answering `{}` to every call
    pub fn new() -> Self {
        Self {
            state: Arc::new(Mutex::new(MockState {
                script: VecDeque::new(),
                default_response: serde_json::json!({}),
                calls: Vec::new(),
            })),
        }
    }

    fn state(&self) -> MutexGuard<'_, MockState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Response used once the script is exhausted
    pub fn set_default_response(&self, response: CommandResponse) {
        self.state().default_response = response;
    }

    /// Queue a response for the next unanswered call
    pub fn push_response(&self, response: CommandResponse) {
        self.state().script.push_back(Scripted::Response(response));
    }

    /// Queue a connectivity failure for the next unanswered call
    pub fn push_transport_failure(&self, reason: impl Into<String>) {
        self.state()
            .script
            .push_back(Scripted::TransportFailure(reason.into()));
    }

    /// Calls received so far, in order
    pub fn calls(&self) -> Vec<RecordedCall> {
        self.state().calls.clone()
    }

    /// Number of calls received so far
    pub fn call_count(&self) -> usize {
        self.state().calls.len()
    }
}

#[async_trait::async_trait]
impl CommandRunner for MockSwitchConnection {
    async fn run_cmds(&self, version: u32, cmds: &[String]) -> Result<CommandResponse, EapiError> {
        let mut state = self.state();
        state.calls.push(RecordedCall {
            version,
            cmds: cmds.to_vec(),
        });

        match state.script.pop_front() {
            Some(Scripted::Response(response)) => Ok(response),
            // reqwest::Error has no public constructor, so connectivity
            // failures surface as an HTTP 503 from the mock.
            Some(Scripted::TransportFailure(reason)) => Err(EapiError::Http {
                status: 503,
                body: reason,
            }),
            None => Ok(state.default_response.clone()),
        }
    }
}
