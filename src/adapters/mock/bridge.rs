//! Mock command bridge for testing.
//!
//! Provides a configurable mock bridge that records every invocation and
//! replays predefined results, allowing tests to verify the exact wire
//! payloads the api layer produces without a backend process.

use async_trait::async_trait;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::traits::{CommandBridge, InvokeError};

/// A recorded invocation for verification in tests.
#[derive(Debug, Clone)]
pub struct RecordedInvocation {
    /// Command name
    pub command: String,
    /// Argument payload as sent
    pub args: Value,
}

/// Configuration for a mock result.
#[derive(Debug, Clone)]
pub enum MockResult {
    /// Return a successful JSON result
    Success(Value),
    /// Return an error
    Error(InvokeError),
}

/// Mock command bridge for testing.
///
/// Results are configured per command name; a queue of results can be
/// staged for commands invoked more than once (the last staged result
/// sticks once the queue drains).
///
/// # Example
///
/// ```ignore
/// use folio::adapters::mock::{MockBridge, MockResult};
/// use serde_json::json;
///
/// let bridge = MockBridge::new();
/// bridge.stage("list_books", MockResult::Success(json!([])));
///
/// let books = folio::api::books::list_books(&bridge, &Default::default()).await?;
/// assert!(books.is_empty());
/// assert_eq!(bridge.invocations()[0].command, "list_books");
/// ```
#[derive(Debug, Clone, Default)]
pub struct MockBridge {
    /// Staged results by command name
    results: Arc<Mutex<HashMap<String, Vec<MockResult>>>>,
    /// Recorded invocations for verification
    invocations: Arc<Mutex<Vec<RecordedInvocation>>>,
}

impl MockBridge {
    /// Create a new mock bridge with no staged results.
    pub fn new() -> Self {
        Self::default()
    }

    /// Stage a result for a command, appended to that command's queue.
    pub fn stage(&self, command: &str, result: MockResult) {
        let mut results = self.results.lock().unwrap();
        results.entry(command.to_string()).or_default().push(result);
    }

    /// Stage an error for a command.
    pub fn stage_error(&self, command: &str, error: InvokeError) {
        self.stage(command, MockResult::Error(error));
    }

    /// Get all recorded invocations.
    pub fn invocations(&self) -> Vec<RecordedInvocation> {
        self.invocations.lock().unwrap().clone()
    }

    /// Get recorded invocations of a single command.
    pub fn invocations_of(&self, command: &str) -> Vec<RecordedInvocation> {
        self.invocations()
            .into_iter()
            .filter(|inv| inv.command == command)
            .collect()
    }

    /// Clear recorded invocations.
    pub fn clear_invocations(&self) {
        self.invocations.lock().unwrap().clear();
    }

    /// Take the next staged result for a command.
    ///
    /// Pops from the front of the queue; the final entry is never popped so
    /// repeated invocations keep receiving it.
    fn next_result(&self, command: &str) -> Option<MockResult> {
        let mut results = self.results.lock().unwrap();
        let queue = results.get_mut(command)?;
        if queue.len() > 1 {
            Some(queue.remove(0))
        } else {
            queue.first().cloned()
        }
    }
}

#[async_trait]
impl CommandBridge for MockBridge {
    async fn invoke(&self, command: &str, args: Value) -> Result<Value, InvokeError> {
        self.invocations.lock().unwrap().push(RecordedInvocation {
            command: command.to_string(),
            args,
        });

        match self.next_result(command) {
            Some(MockResult::Success(value)) => Ok(value),
            Some(MockResult::Error(err)) => Err(err),
            None => Err(InvokeError::Other(format!(
                "no mock result staged for '{}'",
                command
            ))),
        }
    }
}
