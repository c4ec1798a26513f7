//! Execution workspace handed to modules at run time.

use crate::core::{now, Timestamp};
use std::collections::HashMap;
use uuid::Uuid;

/// State of one analysis run, shared by every module in a pipeline.
///
/// The host owns the workspace; modules read pipeline state from the data
/// map and report human-readable output through the message list.
#[derive(Clone, Debug)]
pub struct Workspace {
    /// Identifier for this analysis run
    pub run_id: Uuid,
    /// When the run started
    pub started_at: Timestamp,
    /// Shared pipeline state, keyed by name
    data: HashMap<String, serde_json::Value>,
    /// Messages posted by modules, in posting order
    messages: Vec<String>,
}

impl Workspace {
    /// Create a workspace for a fresh run.
    pub fn new() -> Self {
        Self {
            run_id: Uuid::new_v4(),
            started_at: now(),
            data: HashMap::new(),
            messages: Vec::new(),
        }
    }

    /// Get a data value, deserialized to the requested type.
    pub fn get<T: for<'de> serde::Deserialize<'de>>(&self, key: &str) -> Option<T> {
        self.data
            .get(key)
            .and_then(|v| serde_json::from_value(v.clone()).ok())
    }

    /// Store a data value.
    pub fn insert(&mut self, key: &str, value: serde_json::Value) {
        self.data.insert(key.to_string(), value);
    }

    /// Post a human-readable message.
    pub fn post_message(&mut self, message: impl Into<String>) {
        self.messages.push(message.into());
    }

    /// Messages posted so far, in order.
    pub fn messages(&self) -> &[String] {
        &self.messages
    }
}

impl Default for Workspace {
    fn default() -> Self {
        Self::new()
    }
}
