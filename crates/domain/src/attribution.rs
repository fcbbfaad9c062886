//! Attribution: who most recently wounded a given victim.

use serde::{Deserialize, Serialize};

use crate::ids::PlayerId;

/// The victim's current last attacker and whether the victim already used
/// their single reply against this record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttributionRecord {
    pub attacker_id: PlayerId,
    /// Transport-given attacker name at the time of the wound.
    pub attacker_name: String,
    pub reply_consumed: bool,
}

impl AttributionRecord {
    pub fn new(attacker_id: PlayerId, attacker_name: impl Into<String>) -> Self {
        Self {
            attacker_id,
            attacker_name: attacker_name.into(),
            reply_consumed: false,
        }
    }
}

/// Result of the atomic check-and-consume on the reply gate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplyGate {
    /// The reply was available and is now consumed. Carries a snapshot of the
    /// record it was consumed against.
    Granted(AttributionRecord),
    /// The victim has no recorded attacker.
    NoAttacker,
    /// The reply for the current record was already used.
    AlreadyReplied,
}

impl ReplyGate {
    pub fn is_granted(&self) -> bool {
        matches!(self, Self::Granted(_))
    }
}
