use revenge_domain::MatchPhase;
use tokio::sync::RwLock;

/// Phase of the match currently running on the server, as last reported by
/// the host's new-match signal.
#[derive(Debug, Default)]
pub struct MatchState {
    phase: RwLock<MatchPhase>,
}

impl MatchState {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn current(&self) -> MatchPhase {
        self.phase.read().await.clone()
    }

    pub async fn set(&self, phase: MatchPhase) {
        *self.phase.write().await = phase;
    }
}
