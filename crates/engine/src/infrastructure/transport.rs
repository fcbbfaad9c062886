//! Log-backed transport for running the engine without a game server.

use async_trait::async_trait;
use revenge_domain::PlayerId;

use crate::infrastructure::ports::{TransportError, TransportPort};

/// Writes every payload as a structured tracing event on the `transport`
/// target. Used by the stdin harness.
#[derive(Debug, Default, Clone)]
pub struct LogTransport;

impl LogTransport {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl TransportPort for LogTransport {
    async fn send(&self, player: &PlayerId, text: &str) -> Result<(), TransportError> {
        tracing::info!(
            target: "transport",
            player = %player,
            chars = text.chars().count(),
            text = %text.trim_end_matches(|c: char| c.is_whitespace() || c == '\u{200B}'),
            "warn"
        );
        Ok(())
    }
}
