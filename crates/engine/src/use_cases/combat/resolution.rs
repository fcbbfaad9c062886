//! Display name, label, and playtime enrichment.
//!
//! Names and labels go through an ordered pipeline of [`TextSource`]s; the
//! first non-empty answer wins. Message composition only sees the resolved
//! strings, so adding a source never touches the composer.

use std::sync::Arc;

use async_trait::async_trait;
use revenge_domain::{Participant, Playtime, PlayerId};

use crate::infrastructure::config::EngineConfig;
use crate::infrastructure::ports::{PlaytimePort, ProfileRepo};

#[async_trait]
pub trait TextSource: Send + Sync {
    async fn resolve(&self, player: &Participant) -> Option<String>;
}

/// First non-empty result wins.
#[derive(Clone, Default)]
pub struct ResolutionPipeline {
    sources: Vec<Arc<dyn TextSource>>,
}

impl ResolutionPipeline {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_source(mut self, source: Arc<dyn TextSource>) -> Self {
        self.sources.push(source);
        self
    }

    pub async fn resolve(&self, player: &Participant) -> Option<String> {
        for source in &self.sources {
            if let Some(text) = source.resolve(player).await {
                if !text.trim().is_empty() {
                    return Some(text);
                }
            }
        }
        None
    }
}

/// Player-configured alternate name.
pub struct AlternateNameSource {
    profiles: Arc<dyn ProfileRepo>,
}

impl AlternateNameSource {
    pub fn new(profiles: Arc<dyn ProfileRepo>) -> Self {
        Self { profiles }
    }
}

#[async_trait]
impl TextSource for AlternateNameSource {
    async fn resolve(&self, player: &Participant) -> Option<String> {
        match self.profiles.alternate_name(&player.id).await {
            Ok(name) => name,
            Err(e) => {
                tracing::warn!(player = %player.id, error = %e, "Alternate name lookup failed");
                None
            }
        }
    }
}

/// Player-configured label (signature line).
pub struct AlternateLabelSource {
    profiles: Arc<dyn ProfileRepo>,
}

impl AlternateLabelSource {
    pub fn new(profiles: Arc<dyn ProfileRepo>) -> Self {
        Self { profiles }
    }
}

#[async_trait]
impl TextSource for AlternateLabelSource {
    async fn resolve(&self, player: &Participant) -> Option<String> {
        match self.profiles.alternate_label(&player.id).await {
            Ok(label) => label,
            Err(e) => {
                tracing::warn!(player = %player.id, error = %e, "Alternate label lookup failed");
                None
            }
        }
    }
}

/// The name the game server reported.
pub struct TransportNameSource;

#[async_trait]
impl TextSource for TransportNameSource {
    async fn resolve(&self, player: &Participant) -> Option<String> {
        Some(player.name.clone())
    }
}

/// Constant fallback.
pub struct FixedText(pub String);

#[async_trait]
impl TextSource for FixedText {
    async fn resolve(&self, _player: &Participant) -> Option<String> {
        Some(self.0.clone())
    }
}

/// Everything the composer needs to know about a player beyond the event.
pub struct PlayerDirectory {
    names: ResolutionPipeline,
    labels: ResolutionPipeline,
    playtime: Arc<dyn PlaytimePort>,
}

impl PlayerDirectory {
    pub fn new(
        names: ResolutionPipeline,
        labels: ResolutionPipeline,
        playtime: Arc<dyn PlaytimePort>,
    ) -> Self {
        Self {
            names,
            labels,
            playtime,
        }
    }

    /// Standard pipelines: alternate name/label when enabled, then the
    /// server name / default label.
    pub fn from_config(
        config: &EngineConfig,
        profiles: Arc<dyn ProfileRepo>,
        playtime: Arc<dyn PlaytimePort>,
    ) -> Self {
        let mut names = ResolutionPipeline::new();
        if config.use_alternate_names {
            names = names.with_source(Arc::new(AlternateNameSource::new(profiles.clone())));
        }
        names = names.with_source(Arc::new(TransportNameSource));

        let mut labels = ResolutionPipeline::new();
        if config.use_alternate_labels {
            labels = labels.with_source(Arc::new(AlternateLabelSource::new(profiles)));
        }
        labels = labels.with_source(Arc::new(FixedText(config.default_label())));

        Self::new(names, labels, playtime)
    }

    pub async fn display_name(&self, player: &Participant) -> String {
        self.names
            .resolve(player)
            .await
            .unwrap_or_else(|| player.name.clone())
    }

    pub async fn label(&self, player: &Participant) -> String {
        self.labels.resolve(player).await.unwrap_or_default()
    }

    /// Never fails: lookup errors become [`Playtime::Unknown`].
    pub async fn playtime(&self, player: &PlayerId) -> Playtime {
        match self.playtime.max_playtime_seconds(player).await {
            Ok(Some(seconds)) => Playtime::from_seconds(seconds),
            Ok(None) => Playtime::Unknown,
            Err(e) => {
                tracing::debug!(player = %player, error = %e, "Playtime lookup failed");
                Playtime::Unknown
            }
        }
    }
}
