//! # Speechlet - Oxford Word Look Up skill core
//!
//! Turns the voice platform's request envelopes into spoken responses:
//! intent routing, the Oxford lookup, defensive response shaping, and the
//! one piece of per-conversation state (examples stored for the yes/no
//! follow-up turn).

pub mod envelope;
pub mod handler;
pub mod response;
pub mod router;
pub mod session;
pub mod speech;


pub use envelope::{Application, Intent, Request, RequestEnvelope, ResponseEnvelope, SessionEnvelope, Slot};
pub use handler::Speechlet;
pub use response::{Card, OutputSpeech, Reprompt, Response};
pub use router::{route, Route};
pub use session::SessionAttributes;

/// Host-side configuration for the skill
#[derive(Debug, Clone, Default)]
pub struct SkillConfig {
    /// Application id the platform must present on every request.
    /// `None` disables verification (local development).
    pub application_id: Option<String>,
}

impl SkillConfig {
    /// Create config from environment variables
    pub fn from_env() -> Self {
        let application_id = std::env::var("SKILL_APPLICATION_ID")
            .ok()
            .filter(|s| !s.trim().is_empty());

        Self { application_id }
    }

    /// Check whether a presented application id is accepted
    pub fn accepts(&self, application_id: &str) -> bool {
        match &self.application_id {
            Some(expected) => expected == application_id,
            None => true,
        }
    }
}
