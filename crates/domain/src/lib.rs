//! Revenge domain types.
//!
//! Pure value types shared by the engine: player identities, combat events,
//! attribution records, rivalry scores. No I/O and no async.

pub mod attribution;
pub mod combat;
pub mod error;
pub mod ids;
pub mod match_phase;
pub mod playtime;
pub mod score;

pub use attribution::{AttributionRecord, ReplyGate};
pub use combat::{ChatCommand, Participant, WoundEvent};
pub use error::DomainError;
pub use ids::PlayerId;
pub use match_phase::MatchPhase;
pub use playtime::Playtime;
pub use score::PersonalScore;
