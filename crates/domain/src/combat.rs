//! Combat vocabulary: participants, wound events, and chat commands as the
//! game server reports them.

use serde::{Deserialize, Serialize};

use crate::error::DomainError;
use crate::ids::PlayerId;

/// A player as seen by the game server at the moment of an event.
///
/// `name` is the transport-given name, which may differ from any alternate
/// display name the player configured.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Participant {
    pub id: PlayerId,
    pub name: String,
}

impl Participant {
    pub fn new(id: impl Into<PlayerId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

/// A wound or kill reported by the game server.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WoundEvent {
    pub attacker: Participant,
    pub victim: Participant,
    #[serde(default)]
    pub is_teamkill: bool,
    /// Damage of the final blow, when the server reports it.
    #[serde(default)]
    pub damage: Option<f32>,
}

impl WoundEvent {
    pub fn new(attacker: Participant, victim: Participant) -> Self {
        Self {
            attacker,
            victim,
            is_teamkill: false,
            damage: None,
        }
    }

    pub fn teamkill(mut self) -> Self {
        self.is_teamkill = true;
        self
    }

    pub fn with_damage(mut self, damage: f32) -> Self {
        self.damage = Some(damage);
        self
    }

    /// Reject events the server emitted without both identities.
    ///
    /// Suicides and environmental deaths arrive with an empty attacker id.
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.attacker.id.as_str().is_empty() {
            return Err(DomainError::validation("wound event has no attacker id"));
        }
        if self.victim.id.as_str().is_empty() {
            return Err(DomainError::validation("wound event has no victim id"));
        }
        Ok(())
    }
}

/// A `!command text` chat message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatCommand {
    /// Command word without the leading `!`.
    pub command: String,
    pub player: Participant,
    /// Everything after the command word, trimmed.
    #[serde(default)]
    pub message: String,
}

impl ChatCommand {
    pub fn new(
        command: impl Into<String>,
        player: Participant,
        message: impl Into<String>,
    ) -> Self {
        Self {
            command: command.into(),
            player,
            message: message.into(),
        }
    }

    pub fn has_message(&self) -> bool {
        !self.message.trim().is_empty()
    }
}
