//! Request and response envelopes exchanged with the voice platform
//!
//! Inbound shapes are deserialized defensively: the platform owns the
//! envelope contract, so missing fields read as defaults instead of
//! rejecting the turn.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::response::Response;

/// Envelope protocol version echoed on every response
pub const PROTOCOL_VERSION: &str = "1.0";

/// Inbound request envelope
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestEnvelope {
    #[serde(default)]
    pub version: String,
    pub session: Option<SessionEnvelope>,
    pub request: Request,
}

/// The platform-owned session riding on the envelope
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionEnvelope {
    #[serde(default)]
    pub new: bool,
    #[serde(default)]
    pub session_id: String,
    pub application: Option<Application>,
    #[serde(default)]
    pub attributes: Map<String, Value>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Application {
    #[serde(default)]
    pub application_id: String,
}

/// The three request kinds the platform delivers
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type")]
pub enum Request {
    #[serde(rename = "LaunchRequest", rename_all = "camelCase")]
    Launch {
        #[serde(default)]
        request_id: String,
    },
    #[serde(rename = "IntentRequest", rename_all = "camelCase")]
    Intent {
        #[serde(default)]
        request_id: String,
        intent: Intent,
    },
    #[serde(rename = "SessionEndedRequest", rename_all = "camelCase")]
    SessionEnded {
        #[serde(default)]
        request_id: String,
        reason: Option<String>,
    },
}

/// A named, slot-parameterized user request
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Intent {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub slots: HashMap<String, Slot>,
}

impl Intent {
    /// Slot value by name, treating absent and blank values the same way
    pub fn slot_value(&self, name: &str) -> Option<&str> {
        self.slots
            .get(name)
            .and_then(|slot| slot.value.as_deref())
            .filter(|value| !value.trim().is_empty())
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Slot {
    #[serde(default)]
    pub name: String,
    pub value: Option<String>,
}

/// Outbound response envelope
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseEnvelope {
    pub version: String,
    #[serde(skip_serializing_if = "Map::is_empty")]
    pub session_attributes: Map<String, Value>,
    pub response: Response,
}
