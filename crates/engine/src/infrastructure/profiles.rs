//! In-memory profile storage.

use async_trait::async_trait;
use dashmap::DashMap;
use revenge_domain::PlayerId;

use crate::infrastructure::ports::{ProfileRepo, RepoError};

#[derive(Debug, Clone, Default)]
struct Profile {
    name: Option<String>,
    label: Option<String>,
}

/// Alternate names and labels kept in process memory.
///
/// Seeded by the host at startup; the engine itself only reads.
#[derive(Debug, Default)]
pub struct InMemoryProfileRepo {
    profiles: DashMap<PlayerId, Profile>,
}

impl InMemoryProfileRepo {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_name(&self, player: PlayerId, name: impl Into<String>) {
        self.profiles.entry(player).or_default().name = Some(name.into());
    }

    pub fn set_label(&self, player: PlayerId, label: impl Into<String>) {
        self.profiles.entry(player).or_default().label = Some(label.into());
    }
}

#[async_trait]
impl ProfileRepo for InMemoryProfileRepo {
    async fn alternate_name(&self, player: &PlayerId) -> Result<Option<String>, RepoError> {
        Ok(self.profiles.get(player).and_then(|p| p.name.clone()))
    }

    async fn alternate_label(&self, player: &PlayerId) -> Result<Option<String>, RepoError> {
        Ok(self.profiles.get(player).and_then(|p| p.label.clone()))
    }
}
