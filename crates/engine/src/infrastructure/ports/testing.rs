//! Testability port for injecting suspension.

use std::time::Duration;

use async_trait::async_trait;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DelayPort: Send + Sync {
    async fn sleep(&self, duration: Duration);
}
