use async_trait::async_trait;
use revenge_domain::PlayerId;

use crate::infrastructure::ports::{PlaytimeError, PlaytimePort};

/// Playtime source for deployments without a playtime service.
#[derive(Debug, Default, Clone)]
pub struct UnknownPlaytime;

#[async_trait]
impl PlaytimePort for UnknownPlaytime {
    async fn max_playtime_seconds(&self, _player: &PlayerId) -> Result<Option<u64>, PlaytimeError> {
        Ok(None)
    }
}
