//! Revenge engine library.
//!
//! Combat attribution and revenge messaging for a game server: wound
//! ledger, last-attacker tracking, one reply per death, and notifications
//! that survive the transport's duplicate suppression.
//!
//! ## Structure
//!
//! - `stores/` - Shared in-memory state (ledger, attribution, opt-ins, match phase)
//! - `use_cases/` - Combat orchestration and notification delivery
//! - `infrastructure/` - Configuration, ports, and default adapters
//! - `api/` - Host event entry point
//! - `app` - Application composition

pub mod api;
pub mod app;
pub mod infrastructure;
pub mod stores;
pub mod use_cases;

/// Test fixtures module for integration testing.
#[cfg(test)]
pub mod test_fixtures;

pub use app::{App, Ports};
