//! Test fixtures and common test helpers.
//!
//! # Usage
//!
//! ```rust,ignore
//! use crate::test_fixtures::{participant, TestEngine};
//!
//! #[tokio::test]
//! async fn victim_is_notified() {
//!     let engine = TestEngine::new();
//!     engine.combat().handle_wound(&wound).await;
//!     assert_eq!(engine.visible_payloads_to("v").len(), 1);
//! }
//! ```

pub mod transport_mocks;

use std::sync::Arc;

use revenge_domain::{Participant, PlayerId, WoundEvent};

use crate::app::{App, Ports};
use crate::infrastructure::config::EngineConfig;
use crate::infrastructure::permissions::AllowListPermissions;
use crate::infrastructure::playtime::UnknownPlaytime;
use crate::infrastructure::ports::{PermissionPort, PlaytimePort};
use crate::infrastructure::profiles::InMemoryProfileRepo;
use crate::use_cases::combat::CombatEventHandler;

use transport_mocks::{visible, Timeline};

pub fn participant(id: &str, name: &str) -> Participant {
    Participant::new(id, name)
}

pub fn wound(attacker: (&str, &str), victim: (&str, &str)) -> WoundEvent {
    WoundEvent::new(
        participant(attacker.0, attacker.1),
        participant(victim.0, victim.1),
    )
}

/// A fully wired [`App`] over a recording transport and in-memory ports.
pub struct TestEngine {
    pub app: App,
    pub timeline: Arc<Timeline>,
    pub profiles: Arc<InMemoryProfileRepo>,
    pub config: EngineConfig,
}

impl TestEngine {
    pub fn new() -> Self {
        Self::builder().build()
    }

    pub fn builder() -> TestEngineBuilder {
        TestEngineBuilder {
            config: EngineConfig::default(),
            playtime: Arc::new(UnknownPlaytime),
            permissions: None,
        }
    }

    pub fn combat(&self) -> &CombatEventHandler {
        &self.app.use_cases.combat
    }

    /// Payloads sent to `player` with delivery padding stripped.
    pub fn visible_payloads_to(&self, player: &str) -> Vec<String> {
        self.timeline
            .payloads_to(&PlayerId::new(player))
            .iter()
            .map(|p| visible(p, self.config.padding_char).to_string())
            .collect()
    }
}

pub struct TestEngineBuilder {
    config: EngineConfig,
    playtime: Arc<dyn PlaytimePort>,
    permissions: Option<Arc<dyn PermissionPort>>,
}

impl TestEngineBuilder {
    pub fn config(mut self, config: EngineConfig) -> Self {
        self.config = config;
        self
    }

    pub fn playtime(mut self, playtime: Arc<dyn PlaytimePort>) -> Self {
        self.playtime = playtime;
        self
    }

    pub fn permissions(mut self, permissions: Arc<dyn PermissionPort>) -> Self {
        self.permissions = Some(permissions);
        self
    }

    pub fn build(self) -> TestEngine {
        let timeline = Timeline::new();
        let profiles = Arc::new(InMemoryProfileRepo::new());
        let permissions: Arc<dyn PermissionPort> = match self.permissions {
            Some(permissions) => permissions,
            None => Arc::new(AllowListPermissions::new(
                self.config.privileged_players.clone(),
            )),
        };

        let app = App::new(
            &self.config,
            Ports {
                transport: timeline.transport(),
                delay: timeline.delay(),
                profiles: profiles.clone(),
                playtime: self.playtime,
                permissions,
            },
        );

        TestEngine {
            app,
            timeline,
            profiles,
            config: self.config,
        }
    }
}
