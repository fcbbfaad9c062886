//! Notification delivery through the deduplicating game-server transport.
//!
//! The transport collapses identical payloads sent to the same player close
//! together. Every repeat therefore carries a different amount of invisible
//! padding, and repeats are spaced by a delay so the client shows each one as
//! its own notice.

use std::sync::Arc;
use std::time::Duration;

use dashmap::DashMap;
use revenge_domain::PlayerId;
use tokio::sync::Mutex;

use crate::infrastructure::config::{EngineConfig, DEFAULT_MAX_PADDING, DEFAULT_REPEAT_DELAY_SECS};
use crate::infrastructure::ports::{DelayPort, TransportPort};

/// One message to one player, possibly repeated.
#[derive(Debug, Clone, PartialEq)]
pub struct PendingNotification {
    pub recipient: PlayerId,
    pub body: String,
    pub repeat: u32,
    /// Spacing between repeats; `None` uses the channel default.
    pub delay: Option<Duration>,
}

impl PendingNotification {
    pub fn new(recipient: PlayerId, body: impl Into<String>) -> Self {
        Self {
            recipient,
            body: body.into(),
            repeat: 1,
            delay: None,
        }
    }

    pub fn repeat(mut self, repeat: u32) -> Self {
        self.repeat = repeat;
        self
    }

    pub fn delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DeliverySettings {
    pub default_delay: Duration,
    pub padding_char: char,
    /// Upper bound on padding characters appended to one payload.
    pub max_padding: usize,
}

impl Default for DeliverySettings {
    fn default() -> Self {
        Self {
            default_delay: Duration::from_secs(DEFAULT_REPEAT_DELAY_SECS),
            padding_char: '\u{00A0}',
            max_padding: DEFAULT_MAX_PADDING,
        }
    }
}

impl From<&EngineConfig> for DeliverySettings {
    fn from(config: &EngineConfig) -> Self {
        Self {
            default_delay: config.repeat_delay,
            padding_char: config.padding_char,
            max_padding: config.max_padding,
        }
    }
}

/// Delivers notifications with dedup-defeating padding and spaced repeats.
///
/// Deliveries to the same recipient are queued FIFO: a second notification
/// waits until every repeat of the first has been sent. Different recipients
/// never wait on each other.
pub struct NotificationChannel {
    transport: Arc<dyn TransportPort>,
    delay: Arc<dyn DelayPort>,
    settings: DeliverySettings,
    queues: DashMap<PlayerId, Arc<Mutex<()>>>,
}

impl NotificationChannel {
    pub fn new(
        transport: Arc<dyn TransportPort>,
        delay: Arc<dyn DelayPort>,
        settings: DeliverySettings,
    ) -> Self {
        Self {
            transport,
            delay,
            settings,
            queues: DashMap::new(),
        }
    }

    /// Send `notification.repeat` distinct payloads.
    ///
    /// Send failures are logged and not retried; the remaining repeats are
    /// still attempted. Runs to completion once started.
    pub async fn deliver(&self, notification: PendingNotification) {
        if notification.repeat == 0 {
            return;
        }

        let queue = self.queue_for(&notification.recipient);
        let guard = queue.lock().await;

        self.send_repeats(&notification).await;

        drop(guard);
        drop(queue);
        self.queues
            .remove_if(&notification.recipient, |_, q| Arc::strong_count(q) == 1);
    }

    /// Payload for the `index`-th repeat.
    pub fn payload(&self, body: &str, index: usize) -> String {
        let padding = index.min(self.settings.max_padding);
        let mut text = String::with_capacity(body.len() + padding * 2);
        text.push_str(body);
        text.extend(std::iter::repeat(self.settings.padding_char).take(padding));
        text
    }

    async fn send_repeats(&self, notification: &PendingNotification) {
        let repeat = notification.repeat as usize;
        let delay = notification.delay.unwrap_or(self.settings.default_delay);

        for index in 0..repeat {
            let text = self.payload(&notification.body, index);
            match self.transport.send(&notification.recipient, &text).await {
                Ok(()) => tracing::debug!(
                    recipient = %notification.recipient,
                    attempt = index + 1,
                    repeat,
                    "Notification sent"
                ),
                Err(e) => tracing::warn!(
                    recipient = %notification.recipient,
                    attempt = index + 1,
                    repeat,
                    error = %e,
                    "Failed to send notification"
                ),
            }

            if index + 1 < repeat {
                self.delay.sleep(delay).await;
            }
        }
    }

    fn queue_for(&self, recipient: &PlayerId) -> Arc<Mutex<()>> {
        self.queues
            .entry(recipient.clone())
            .or_default()
            .value()
            .clone()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use crate::infrastructure::ports::{MockDelayPort, MockTransportPort, TransportError};
    use crate::test_fixtures::transport_mocks::{visible, Timeline, TimelineEvent};

    const PAD: char = '\u{00A0}';

    fn channel(timeline: &Arc<Timeline>) -> NotificationChannel {
        NotificationChannel::new(
            timeline.transport(),
            timeline.delay(),
            DeliverySettings::default(),
        )
    }

    #[tokio::test]
    async fn single_delivery_sends_plain_body_without_delay() {
        let timeline = Timeline::new();
        let r = PlayerId::new("r");

        channel(&timeline)
            .deliver(PendingNotification::new(r.clone(), "msg"))
            .await;

        assert_eq!(
            timeline.events(),
            vec![TimelineEvent::Sent {
                to: r,
                text: "msg".to_string()
            }]
        );
    }

    #[tokio::test]
    async fn repeats_are_distinct_spaced_and_visibly_identical() {
        let timeline = Timeline::new();
        let r = PlayerId::new("r");

        channel(&timeline)
            .deliver(
                PendingNotification::new(r.clone(), "msg")
                    .repeat(3)
                    .delay(Duration::from_secs(5)),
            )
            .await;

        let events = timeline.events();
        assert_eq!(events.len(), 5);
        assert!(matches!(events[0], TimelineEvent::Sent { .. }));
        assert!(matches!(events[1], TimelineEvent::Slept(d) if d >= Duration::from_secs(5)));
        assert!(matches!(events[2], TimelineEvent::Sent { .. }));
        assert!(matches!(events[3], TimelineEvent::Slept(d) if d >= Duration::from_secs(5)));
        assert!(matches!(events[4], TimelineEvent::Sent { .. }));

        let payloads = timeline.payloads_to(&r);
        assert_eq!(payloads.len(), 3);
        let distinct: HashSet<&String> = payloads.iter().collect();
        assert_eq!(distinct.len(), 3);
        for payload in &payloads {
            assert_eq!(visible(payload, PAD), "msg");
        }
    }

    #[tokio::test]
    async fn zero_repeat_sends_nothing() {
        let timeline = Timeline::new();

        channel(&timeline)
            .deliver(PendingNotification::new(PlayerId::new("r"), "msg").repeat(0))
            .await;

        assert!(timeline.events().is_empty());
    }

    #[test]
    fn padding_is_capped() {
        let timeline = Timeline::new();
        let channel = NotificationChannel::new(
            timeline.transport(),
            timeline.delay(),
            DeliverySettings {
                max_padding: 2,
                ..DeliverySettings::default()
            },
        );

        assert_eq!(channel.payload("x", 0), "x");
        assert_eq!(channel.payload("x", 1), format!("x{PAD}"));
        assert_eq!(channel.payload("x", 5), format!("x{PAD}{PAD}"));
    }

    #[tokio::test]
    async fn default_delay_applies_when_unset() {
        let timeline = Timeline::new();
        let channel = NotificationChannel::new(
            timeline.transport(),
            timeline.delay(),
            DeliverySettings {
                default_delay: Duration::from_secs(7),
                ..DeliverySettings::default()
            },
        );

        channel
            .deliver(PendingNotification::new(PlayerId::new("r"), "msg").repeat(2))
            .await;

        assert!(timeline
            .events()
            .contains(&TimelineEvent::Slept(Duration::from_secs(7))));
    }

    #[tokio::test]
    async fn failed_send_does_not_stop_remaining_repeats() {
        let mut transport = MockTransportPort::new();
        let mut calls = 0;
        transport.expect_send().times(3).returning(move |player, _| {
            calls += 1;
            if calls == 1 {
                Err(TransportError::NotConnected(player.clone()))
            } else {
                Ok(())
            }
        });
        let mut delay = MockDelayPort::new();
        delay.expect_sleep().times(2).returning(|_| ());

        let channel = NotificationChannel::new(
            Arc::new(transport),
            Arc::new(delay),
            DeliverySettings::default(),
        );

        channel
            .deliver(PendingNotification::new(PlayerId::new("r"), "msg").repeat(3))
            .await;
    }

    #[tokio::test]
    async fn same_recipient_deliveries_do_not_interleave() {
        let timeline = Timeline::new();
        let channel = channel(&timeline);
        let r = PlayerId::new("r");

        tokio::join!(
            channel.deliver(PendingNotification::new(r.clone(), "first").repeat(2)),
            channel.deliver(PendingNotification::new(r.clone(), "second").repeat(2)),
        );

        let visible_order: Vec<String> = timeline
            .payloads_to(&r)
            .iter()
            .map(|p| visible(p, PAD).to_string())
            .collect();
        assert_eq!(visible_order, vec!["first", "first", "second", "second"]);
        assert!(channel.queues.is_empty());
    }

    #[tokio::test]
    async fn different_recipients_do_not_wait_for_each_other() {
        let timeline = Timeline::new();
        let channel = channel(&timeline);
        let (a, b) = (PlayerId::new("a"), PlayerId::new("b"));

        tokio::join!(
            channel.deliver(PendingNotification::new(a.clone(), "to a").repeat(2)),
            channel.deliver(PendingNotification::new(b.clone(), "to b").repeat(2)),
        );

        let recipients: Vec<PlayerId> = timeline
            .events()
            .into_iter()
            .filter_map(|e| match e {
                TimelineEvent::Sent { to, .. } => Some(to),
                TimelineEvent::Slept(_) => None,
            })
            .collect();
        assert_eq!(recipients.len(), 4);

        // b's first send happens while a is still between its repeats.
        let first_b = recipients.iter().position(|r| r == &b).unwrap();
        let last_a = recipients.iter().rposition(|r| r == &a).unwrap();
        assert!(first_b < last_a);
    }
}
