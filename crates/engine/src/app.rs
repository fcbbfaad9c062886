//! Application state and composition.

use std::sync::Arc;

use crate::api::events::{CommandTable, EventRouter};
use crate::infrastructure::config::EngineConfig;
use crate::infrastructure::ports::{
    DelayPort, PermissionPort, PlaytimePort, ProfileRepo, TransportPort,
};
use crate::stores::Stores;
use crate::use_cases::combat::{CombatEventHandler, CombatSettings, PlayerDirectory};
use crate::use_cases::notification::{DeliverySettings, NotificationChannel};
use crate::use_cases::UseCases;

/// Collaborators supplied by the host.
pub struct Ports {
    pub transport: Arc<dyn TransportPort>,
    pub delay: Arc<dyn DelayPort>,
    pub profiles: Arc<dyn ProfileRepo>,
    pub playtime: Arc<dyn PlaytimePort>,
    pub permissions: Arc<dyn PermissionPort>,
}

/// Main application state.
///
/// Holds the stores, the use cases built on them, and the router that feeds
/// host events into the use cases.
pub struct App {
    pub stores: Stores,
    pub use_cases: UseCases,
    pub router: Arc<EventRouter>,
}

impl App {
    pub fn new(config: &EngineConfig, ports: Ports) -> Self {
        let stores = Stores::new();

        let channel = Arc::new(NotificationChannel::new(
            ports.transport,
            ports.delay,
            DeliverySettings::from(config),
        ));
        let directory = Arc::new(PlayerDirectory::from_config(
            config,
            ports.profiles,
            ports.playtime,
        ));
        let combat = Arc::new(CombatEventHandler::new(
            stores.clone(),
            channel,
            directory,
            ports.permissions,
            CombatSettings::from(config),
        ));

        let router = Arc::new(EventRouter::new(
            combat.clone(),
            CommandTable::from_config(config),
        ));

        Self {
            stores,
            use_cases: UseCases::new(combat),
            router,
        }
    }
}
