//! In-memory state storage modules.
//!
//! Stores manage runtime state that lives for the process (or the match),
//! never in a database:
//! - `WoundLedger` - per-pair wound counts
//! - `AttributionTracker` - last attacker per victim and the reply gate
//! - `NoticeOptIns` - per-match attacker notice toggles
//! - `MatchState` - current match phase

pub mod attribution;
pub mod match_state;
pub mod notice_opt_ins;
pub mod wound_ledger;

pub use attribution::AttributionTracker;
pub use match_state::MatchState;
pub use notice_opt_ins::NoticeOptIns;
pub use wound_ledger::WoundLedger;

use std::sync::Arc;

/// All stores, shared between the handler and the composition root.
#[derive(Clone, Default)]
pub struct Stores {
    pub wounds: Arc<WoundLedger>,
    pub attribution: Arc<AttributionTracker>,
    pub opt_ins: Arc<NoticeOptIns>,
    pub match_state: Arc<MatchState>,
}

impl Stores {
    pub fn new() -> Self {
        Self::default()
    }
}
