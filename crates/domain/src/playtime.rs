use serde::{Deserialize, Serialize};

const SECONDS_PER_HOUR: f64 = 3600.0;

/// Known playtime of a player, or the sentinel used when the lookup failed or
/// had no data.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub enum Playtime {
    Hours(f64),
    #[default]
    Unknown,
}

impl Playtime {
    pub fn from_seconds(seconds: u64) -> Self {
        Self::Hours(seconds as f64 / SECONDS_PER_HOUR)
    }

    /// Inline suffix for messages: `" with 120 hours"`, or empty when unknown.
    pub fn suffix(&self) -> String {
        match self {
            Self::Hours(hours) => format!(" with {:.0} hours", hours),
            Self::Unknown => String::new(),
        }
    }
}
