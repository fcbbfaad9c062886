use dashmap::DashSet;
use revenge_domain::PlayerId;

/// Players who asked for attacker-facing kill notices during this match.
#[derive(Debug, Default)]
pub struct NoticeOptIns {
    players: DashSet<PlayerId>,
}

impl NoticeOptIns {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the player's choice. Returns the previous state.
    pub fn set(&self, player: &PlayerId, enabled: bool) -> bool {
        if enabled {
            !self.players.insert(player.clone())
        } else {
            self.players.remove(player).is_some()
        }
    }

    pub fn is_opted_in(&self, player: &PlayerId) -> bool {
        self.players.contains(player)
    }

    pub fn clear(&self) {
        self.players.clear();
    }
}
