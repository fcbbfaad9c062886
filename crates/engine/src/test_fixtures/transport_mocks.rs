//! Recording transport and delay for testing delivery.
//!
//! Both write into one shared [`Timeline`], so tests can assert on the exact
//! interleaving of sends and simulated suspensions.
//!
//! # Usage
//!
//! ```rust,ignore
//! use crate::test_fixtures::transport_mocks::Timeline;
//!
//! let timeline = Timeline::new();
//! let channel = NotificationChannel::new(timeline.transport(), timeline.delay(), settings);
//! channel.deliver(PendingNotification::new(id, "msg")).await;
//! assert_eq!(timeline.payloads_to(&id).len(), 1);
//! ```

use std::collections::HashSet;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use revenge_domain::PlayerId;

use crate::infrastructure::ports::{DelayPort, TransportError, TransportPort};

#[derive(Debug, Clone, PartialEq)]
pub enum TimelineEvent {
    Sent { to: PlayerId, text: String },
    Slept(Duration),
}

/// Ordered log of everything the transport and delay saw.
#[derive(Default)]
pub struct Timeline {
    events: Mutex<Vec<TimelineEvent>>,
    disconnected: Mutex<HashSet<PlayerId>>,
}

impl Timeline {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn transport(self: &Arc<Self>) -> Arc<RecordingTransport> {
        Arc::new(RecordingTransport {
            timeline: self.clone(),
        })
    }

    pub fn delay(self: &Arc<Self>) -> Arc<RecordingDelay> {
        Arc::new(RecordingDelay {
            timeline: self.clone(),
        })
    }

    /// Sends to this player fail with `NotConnected` from now on.
    pub fn disconnect(&self, player: &PlayerId) {
        self.disconnected.lock().unwrap().insert(player.clone());
    }

    pub fn events(&self) -> Vec<TimelineEvent> {
        self.events.lock().unwrap().clone()
    }

    /// Every payload delivered to `player`, in order.
    pub fn payloads_to(&self, player: &PlayerId) -> Vec<String> {
        self.events()
            .into_iter()
            .filter_map(|event| match event {
                TimelineEvent::Sent { to, text } if &to == player => Some(text),
                _ => None,
            })
            .collect()
    }

    fn push(&self, event: TimelineEvent) {
        self.events.lock().unwrap().push(event);
    }
}

pub struct RecordingTransport {
    timeline: Arc<Timeline>,
}

#[async_trait]
impl TransportPort for RecordingTransport {
    async fn send(&self, player: &PlayerId, text: &str) -> Result<(), TransportError> {
        if self.timeline.disconnected.lock().unwrap().contains(player) {
            return Err(TransportError::NotConnected(player.clone()));
        }
        self.timeline.push(TimelineEvent::Sent {
            to: player.clone(),
            text: text.to_string(),
        });
        Ok(())
    }
}

/// Records the requested duration and yields instead of sleeping, so other
/// tasks get a chance to interleave exactly where a real sleep would let them.
pub struct RecordingDelay {
    timeline: Arc<Timeline>,
}

#[async_trait]
impl DelayPort for RecordingDelay {
    async fn sleep(&self, duration: Duration) {
        self.timeline.push(TimelineEvent::Slept(duration));
        tokio::task::yield_now().await;
    }
}

/// Strip delivery padding to get the visible text of a payload.
pub fn visible(text: &str, padding: char) -> &str {
    text.trim_end_matches(padding)
}
