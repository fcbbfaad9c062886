//! Last-attacker attribution per victim, with the one-shot reply gate.

use dashmap::DashMap;
use revenge_domain::{AttributionRecord, PlayerId, ReplyGate};

/// At most one [`AttributionRecord`] per victim.
///
/// Every operation on a victim runs under that victim's shard lock, so
/// [`AttributionTracker::try_consume_reply`] is a single atomic step.
#[derive(Debug, Default)]
pub struct AttributionTracker {
    records: DashMap<PlayerId, AttributionRecord>,
}

impl AttributionTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the victim's record. Any unused reply against the previous
    /// attacker is forfeited.
    pub fn set_attacker(
        &self,
        victim: &PlayerId,
        attacker_id: PlayerId,
        attacker_name: impl Into<String>,
    ) {
        self.records.insert(
            victim.clone(),
            AttributionRecord::new(attacker_id, attacker_name),
        );
    }

    pub fn get_attacker(&self, victim: &PlayerId) -> Option<AttributionRecord> {
        self.records.get(victim).map(|record| record.value().clone())
    }

    /// Flag the victim's reply as used. Returns false when there is no record.
    pub fn mark_reply_consumed(&self, victim: &PlayerId) -> bool {
        match self.records.get_mut(victim) {
            Some(mut record) => {
                record.reply_consumed = true;
                true
            }
            None => false,
        }
    }

    /// Check-and-set on the reply flag.
    pub fn try_consume_reply(&self, victim: &PlayerId) -> ReplyGate {
        let Some(mut record) = self.records.get_mut(victim) else {
            return ReplyGate::NoAttacker;
        };
        if record.reply_consumed {
            return ReplyGate::AlreadyReplied;
        }
        record.reply_consumed = true;
        ReplyGate::Granted(record.value().clone())
    }

    pub fn clear(&self) {
        self.records.clear();
    }
}
