//! Port traits for infrastructure boundaries.
//!
//! These are the ONLY abstractions in the engine. Everything else is concrete types.
//! Ports exist for:
//! - Message delivery (RCON warn today, anything text-based tomorrow)
//! - Alternate name/label storage
//! - Playtime lookup
//! - Permission checks
//! - Delay (for testing)

mod error;
mod external;
mod testing;
pub mod types;

pub use error::{PlaytimeError, RepoError, TransportError};
pub use external::{PermissionPort, PlaytimePort, ProfileRepo, TransportPort};
pub use testing::DelayPort;
pub use types::Capability;

#[cfg(test)]
pub use external::{MockPermissionPort, MockPlaytimePort, MockProfileRepo, MockTransportPort};
#[cfg(test)]
pub use testing::MockDelayPort;
