use std::collections::HashSet;

use async_trait::async_trait;
use revenge_domain::PlayerId;

use crate::infrastructure::ports::{Capability, PermissionPort};

/// Grants every capability to a fixed set of privileged players.
#[derive(Debug, Default, Clone)]
pub struct AllowListPermissions {
    privileged: HashSet<PlayerId>,
}

impl AllowListPermissions {
    pub fn new(privileged: impl IntoIterator<Item = PlayerId>) -> Self {
        Self {
            privileged: privileged.into_iter().collect(),
        }
    }
}

#[async_trait]
impl PermissionPort for AllowListPermissions {
    async fn has_permission(&self, player: &PlayerId, capability: Capability) -> bool {
        let allowed = self.privileged.contains(player);
        tracing::debug!(player = %player, capability = %capability, allowed, "Permission check");
        allowed
    }
}
