//! Delay implementation.

use std::time::Duration;

use async_trait::async_trait;

use crate::infrastructure::ports::DelayPort;

/// Real suspension backed by the tokio timer.
pub struct TokioDelay;

impl TokioDelay {
    pub fn new() -> Self {
        Self
    }
}

impl Default for TokioDelay {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DelayPort for TokioDelay {
    async fn sleep(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}
