//! Command envelopes sent to the editor plugin
//!
//! Wire format: `{"type": "<command>", "params": {...}}`, compact UTF-8 JSON.
//! The bridge never looks inside `params`; new remote commands need no changes here.

use crate::error::{ChannelError, Result};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Command parameters, an opaque JSON object
pub type Params = Map<String, Value>;

/// One request to the editor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommandEnvelope {
    #[serde(rename = "type")]
    name: String,
    params: Params,
}

impl CommandEnvelope {
    /// Create an envelope, rejecting blank command names
    pub fn new(name: impl Into<String>, params: Params) -> Result<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(ChannelError::InvalidCommand(
                "command name must not be empty".into(),
            ));
        }
        Ok(Self { name, params })
    }

    /// Create an envelope from an arbitrary JSON value
    ///
    /// `null` is treated as no parameters; anything other than an object is rejected.
    pub fn from_value(name: impl Into<String>, params: Value) -> Result<Self> {
        match params {
            Value::Null => Self::new(name, Params::new()),
            Value::Object(map) => Self::new(name, map),
            other => Err(ChannelError::InvalidCommand(format!(
                "params must be a JSON object, got {}",
                json_kind(&other)
            ))),
        }
    }

    /// Remote command name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Command parameters
    pub fn params(&self) -> &Params {
        &self.params
    }

    /// Serialize to the compact wire encoding (no terminator)
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        serde_json::to_vec(self).map_err(|e| ChannelError::Encode(e.to_string()))
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
