use serde::{Deserialize, Serialize};

/// The phase of the current match, identified by the layer's gamemode name.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MatchPhase {
    pub gamemode: Option<String>,
}

impl MatchPhase {
    pub fn new(gamemode: impl Into<String>) -> Self {
        Self {
            gamemode: Some(gamemode.into()),
        }
    }

    /// Whether this phase is the designated low-stakes seed phase.
    ///
    /// Gamemode names are compared case-insensitively.
    pub fn is_seed(&self, seed_gamemode: &str) -> bool {
        self.gamemode
            .as_deref()
            .is_some_and(|mode| mode.eq_ignore_ascii_case(seed_gamemode))
    }
}
