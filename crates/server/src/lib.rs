use std::sync::Arc;

use oxford_client::OxfordClient;
use speechlet::{SkillConfig, Speechlet};

pub mod error;
pub mod routes;

/// Shared state for the skill host
#[derive(Clone)]
pub struct AppState {
    pub skill_config: SkillConfig,
    pub speechlet: Arc<Speechlet>,
}

impl AppState {
    pub fn new(skill_config: SkillConfig, oxford: Option<OxfordClient>) -> Self {
        Self {
            skill_config,
            speechlet: Arc::new(Speechlet::new(oxford)),
        }
    }
}
