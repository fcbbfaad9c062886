//! Use cases - orchestration over stores and ports.

pub mod combat;
pub mod notification;

use std::sync::Arc;

pub use combat::{AppliedWound, CombatError, CombatEventHandler, WoundOutcome};
pub use notification::{NotificationChannel, PendingNotification};

/// Container for all use cases.
pub struct UseCases {
    pub combat: Arc<CombatEventHandler>,
}

impl UseCases {
    pub fn new(combat: Arc<CombatEventHandler>) -> Self {
        Self { combat }
    }
}
