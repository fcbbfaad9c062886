//! Entry points for events coming from the game server.

pub mod events;

pub use events::{CommandAction, CommandTable, EventRouter, HostEvent};
