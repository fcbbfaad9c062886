//! Infrastructure - external dependency implementations.
//!
//! Ports (traits) live in `ports`; the remaining modules are the adapters the
//! binary wires in when no game-server integration is supplied.

pub mod config;
pub mod delay;
pub mod permissions;
pub mod playtime;
pub mod ports;
pub mod profiles;
pub mod transport;
