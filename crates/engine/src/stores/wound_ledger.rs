//! Per-ordered-pair wound counts for the current match.

use dashmap::DashMap;
use revenge_domain::{PersonalScore, PlayerId};

/// Cumulative wounds keyed by `(attacker, victim)`.
///
/// A missing entry means zero. Counts only grow until [`WoundLedger::clear`].
#[derive(Debug, Default)]
pub struct WoundLedger {
    wounds: DashMap<(PlayerId, PlayerId), u32>,
}

impl WoundLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one wound from `attacker` on `victim` and return the new total.
    pub fn record_wound(&self, attacker: &PlayerId, victim: &PlayerId) -> u32 {
        let mut count = self
            .wounds
            .entry((attacker.clone(), victim.clone()))
            .or_insert(0);
        *count = count.saturating_add(1);
        *count
    }

    pub fn get_wounds(&self, attacker: &PlayerId, victim: &PlayerId) -> u32 {
        self.wounds
            .get(&(attacker.clone(), victim.clone()))
            .map(|count| *count)
            .unwrap_or(0)
    }

    /// Rivalry score seen from `viewer` against `opponent`.
    pub fn score(&self, viewer: &PlayerId, opponent: &PlayerId) -> PersonalScore {
        PersonalScore::new(
            self.get_wounds(viewer, opponent),
            self.get_wounds(opponent, viewer),
        )
    }

    pub fn clear(&self) {
        self.wounds.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.wounds.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;

    fn id(s: &str) -> PlayerId {
        PlayerId::new(s)
    }

    #[test]
    fn unrecorded_pair_has_zero_wounds() {
        let ledger = WoundLedger::new();
        assert_eq!(ledger.get_wounds(&id("a"), &id("b")), 0);
    }

    #[test]
    fn counts_are_per_ordered_pair() {
        let ledger = WoundLedger::new();
        let (a, b, c) = (id("a"), id("b"), id("c"));

        ledger.record_wound(&a, &b);
        ledger.record_wound(&a, &b);
        ledger.record_wound(&b, &a);
        ledger.record_wound(&a, &c);
        ledger.record_wound(&c, &b);

        assert_eq!(ledger.get_wounds(&a, &b), 2);
        assert_eq!(ledger.get_wounds(&b, &a), 1);
        assert_eq!(ledger.score(&a, &b), PersonalScore::new(2, 1));
        assert_eq!(ledger.score(&b, &a), PersonalScore::new(1, 2));
    }

    #[test]
    fn record_returns_running_total() {
        let ledger = WoundLedger::new();
        assert_eq!(ledger.record_wound(&id("a"), &id("b")), 1);
        assert_eq!(ledger.record_wound(&id("a"), &id("b")), 2);
    }

    #[test]
    fn clear_forgets_every_pair() {
        let ledger = WoundLedger::new();
        ledger.record_wound(&id("a"), &id("b"));
        ledger.record_wound(&id("b"), &id("c"));

        ledger.clear();

        assert!(ledger.is_empty());
        assert_eq!(ledger.get_wounds(&id("a"), &id("b")), 0);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn concurrent_wounds_are_not_lost() {
        let ledger = Arc::new(WoundLedger::new());
        let mut tasks = Vec::new();

        for _ in 0..8 {
            let ledger = ledger.clone();
            tasks.push(tokio::spawn(async move {
                for _ in 0..250 {
                    ledger.record_wound(&id("a"), &id("b"));
                    tokio::task::yield_now().await;
                }
            }));
        }
        for task in tasks {
            task.await.unwrap();
        }

        assert_eq!(ledger.get_wounds(&id("a"), &id("b")), 2000);
    }
}
