//! External collaborator port traits (game server transport, profiles,
//! playtime lookup, permissions).

use async_trait::async_trait;
use revenge_domain::PlayerId;

use super::error::{PlaytimeError, RepoError, TransportError};
use super::types::Capability;

// =============================================================================
// Transport
// =============================================================================

/// Fire-and-forget text delivery to one player (the server's warn/notice
/// primitive).
///
/// The transport collapses identical consecutive payloads sent to the same
/// player within a short window, and truncates payloads that are too long.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TransportPort: Send + Sync {
    async fn send(&self, player: &PlayerId, text: &str) -> Result<(), TransportError>;
}

// =============================================================================
// Profiles
// =============================================================================

/// Read access to player-configured alternate names and labels.
///
/// Editing is handled by the host's persistence layer.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProfileRepo: Send + Sync {
    async fn alternate_name(&self, player: &PlayerId) -> Result<Option<String>, RepoError>;
    async fn alternate_label(&self, player: &PlayerId) -> Result<Option<String>, RepoError>;
}

// =============================================================================
// Playtime
// =============================================================================

/// Playtime lookup service.
///
/// Returns the highest known playtime in seconds, or `None` when the service
/// has no data for the player.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PlaytimePort: Send + Sync {
    async fn max_playtime_seconds(&self, player: &PlayerId) -> Result<Option<u64>, PlaytimeError>;
}

// =============================================================================
// Permissions
// =============================================================================

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PermissionPort: Send + Sync {
    async fn has_permission(&self, player: &PlayerId, capability: Capability) -> bool;
}
