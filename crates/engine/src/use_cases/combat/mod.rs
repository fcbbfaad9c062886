//! Combat use cases.
//!
//! Handles wound events and the victim-side commands:
//! - Recording wounds and the victim's last attacker
//! - Notifying the victim (and, when enabled, the attacker)
//! - Relaying the victim's one reply to their last attacker
//! - Per-match toggles and new-match resets

pub mod messages;
pub mod resolution;

use std::sync::Arc;

use revenge_domain::{MatchPhase, Participant, PersonalScore, PlayerId, ReplyGate, WoundEvent};

use crate::infrastructure::config::EngineConfig;
use crate::infrastructure::ports::{Capability, PermissionPort};
use crate::stores::Stores;
use crate::use_cases::notification::{NotificationChannel, PendingNotification};

pub use resolution::PlayerDirectory;

/// Repeats of the relayed reply shown to the attacker.
const REPLY_REPEAT: u32 = 2;

/// Repeats of the teamkill rebuke shown to the attacker.
const TEAMKILL_ATTACKER_REPEAT: u32 = 2;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CombatSettings {
    pub messages_to_victim: u32,
    pub notify_attacker_on_seed: bool,
    pub attacker_notices_enabled: bool,
    pub seed_gamemode: String,
    pub clear_wounds_on_new_match: bool,
    pub reset_notices_on_new_match: bool,
}

impl From<&EngineConfig> for CombatSettings {
    fn from(config: &EngineConfig) -> Self {
        Self {
            messages_to_victim: config.messages_to_victim,
            notify_attacker_on_seed: config.notify_attacker_on_seed,
            attacker_notices_enabled: config.attacker_notices_enabled,
            seed_gamemode: config.seed_gamemode.clone(),
            clear_wounds_on_new_match: config.clear_wounds_on_new_match,
            reset_notices_on_new_match: config.reset_notices_on_new_match,
        }
    }
}

/// User-visible refusals. The player has already been told by the time one
/// of these is returned.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CombatError {
    #[error("no recorded attacker for {0}")]
    NoAttacker(PlayerId),
    #[error("{0} already replied to their last attacker")]
    AlreadyReplied(PlayerId),
    #[error("{player} lacks capability {capability}")]
    PermissionDenied {
        player: PlayerId,
        capability: Capability,
    },
}

/// Store changes made by a wound, fixed in arrival order before any message
/// goes out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppliedWound {
    /// Friendly fire; nothing recorded.
    Teamkill,
    Recorded {
        /// Score from the attacker's side after this wound.
        score: PersonalScore,
        seed_phase: bool,
        notify_attacker: bool,
    },
}

/// What a wound event led to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WoundOutcome {
    /// Friendly fire; nothing recorded.
    Teamkill,
    Recorded {
        /// Score from the attacker's side after this wound.
        score: PersonalScore,
        attacker_notified: bool,
    },
}

/// Orchestrates the wound ledger, attribution, and notifications.
///
/// All state lives in the injected [`Stores`]; this type only sequences it.
///
/// Operations that change state come in two halves. The first half touches
/// the stores and must run in the order events arrive; the second half
/// composes and delivers messages and may run concurrently with later events.
/// The single-call forms (`handle_wound`, `relay_reply`, ...) run both halves
/// back to back.
pub struct CombatEventHandler {
    stores: Stores,
    channel: Arc<NotificationChannel>,
    directory: Arc<PlayerDirectory>,
    permissions: Arc<dyn PermissionPort>,
    settings: CombatSettings,
}

impl CombatEventHandler {
    pub fn new(
        stores: Stores,
        channel: Arc<NotificationChannel>,
        directory: Arc<PlayerDirectory>,
        permissions: Arc<dyn PermissionPort>,
        settings: CombatSettings,
    ) -> Self {
        Self {
            stores,
            channel,
            directory,
            permissions,
            settings,
        }
    }

    /// Process a wound or kill.
    pub async fn handle_wound(&self, event: &WoundEvent) -> WoundOutcome {
        let applied = self.apply_wound(event).await;
        self.notify_wound(event, applied).await
    }

    /// Record the wound and the victim's last attacker.
    ///
    /// Teamkills leave the stores untouched.
    pub async fn apply_wound(&self, event: &WoundEvent) -> AppliedWound {
        if event.is_teamkill {
            return AppliedWound::Teamkill;
        }

        let attacker = &event.attacker;
        let victim = &event.victim;

        self.stores.wounds.record_wound(&attacker.id, &victim.id);
        self.stores
            .attribution
            .set_attacker(&victim.id, attacker.id.clone(), attacker.name.clone());
        let score = self.stores.wounds.score(&attacker.id, &victim.id);

        let seed_phase = self
            .stores
            .match_state
            .current()
            .await
            .is_seed(&self.settings.seed_gamemode);
        let notify_attacker = self.attacker_gets_notice(&attacker.id, seed_phase);

        tracing::debug!(
            attacker = %attacker.id,
            victim = %victim.id,
            score = %score,
            "Wound recorded"
        );

        AppliedWound::Recorded {
            score,
            seed_phase,
            notify_attacker,
        }
    }

    /// Send the messages for a wound already applied to the stores.
    pub async fn notify_wound(&self, event: &WoundEvent, applied: AppliedWound) -> WoundOutcome {
        let attacker = &event.attacker;
        let victim = &event.victim;

        let (score, seed_phase, notify_attacker) = match applied {
            AppliedWound::Teamkill => {
                tracing::info!(attacker = %attacker.id, victim = %victim.id, "Teamkill");
                futures_util::future::join(
                    self.channel.deliver(PendingNotification::new(
                        victim.id.clone(),
                        messages::teamkill_victim(&attacker.name),
                    )),
                    self.channel.deliver(
                        PendingNotification::new(
                            attacker.id.clone(),
                            messages::teamkill_attacker(&victim.name),
                        )
                        .repeat(TEAMKILL_ATTACKER_REPEAT),
                    ),
                )
                .await;
                return WoundOutcome::Teamkill;
            }
            AppliedWound::Recorded {
                score,
                seed_phase,
                notify_attacker,
            } => (score, seed_phase, notify_attacker),
        };

        let victim_notice = self.compose_victim_notice(attacker, score).await;
        self.channel
            .deliver(
                PendingNotification::new(victim.id.clone(), victim_notice)
                    .repeat(self.settings.messages_to_victim),
            )
            .await;

        if notify_attacker {
            let (victim_name, playtime) = futures_util::future::join(
                self.directory.display_name(victim),
                self.directory.playtime(&victim.id),
            )
            .await;
            let notice =
                messages::attacker_notice(&victim_name, playtime, event.damage, score, seed_phase);
            self.channel
                .deliver(PendingNotification::new(attacker.id.clone(), notice))
                .await;
        }

        WoundOutcome::Recorded {
            score,
            attacker_notified: notify_attacker,
        }
    }

    /// Relay the victim's one reply to their current last attacker.
    ///
    /// Returns the attacker the message went to.
    pub async fn relay_reply(
        &self,
        player: &Participant,
        message: &str,
    ) -> Result<PlayerId, CombatError> {
        let gate = self.claim_reply(player);
        self.deliver_reply(player, message, gate).await
    }

    /// Consume the player's reply against their current record.
    pub fn claim_reply(&self, player: &Participant) -> ReplyGate {
        let gate = self.stores.attribution.try_consume_reply(&player.id);
        tracing::debug!(player = %player.id, granted = gate.is_granted(), "Reply claimed");
        gate
    }

    /// Deliver a reply claimed with [`Self::claim_reply`], or tell the player
    /// why there is nothing to deliver.
    pub async fn deliver_reply(
        &self,
        player: &Participant,
        message: &str,
        gate: ReplyGate,
    ) -> Result<PlayerId, CombatError> {
        let record = match gate {
            ReplyGate::Granted(record) => record,
            ReplyGate::NoAttacker => {
                self.tell(&player.id, messages::NO_ATTACKER).await;
                return Err(CombatError::NoAttacker(player.id.clone()));
            }
            ReplyGate::AlreadyReplied => {
                self.tell(&player.id, messages::ALREADY_REPLIED).await;
                return Err(CombatError::AlreadyReplied(player.id.clone()));
            }
        };

        let attacker = Participant::new(record.attacker_id, record.attacker_name);
        let (attacker_name, sender_name) = futures_util::future::join(
            self.directory.display_name(&attacker),
            self.directory.display_name(player),
        )
        .await;

        self.channel
            .deliver(
                PendingNotification::new(
                    attacker.id.clone(),
                    messages::relayed(&sender_name, message),
                )
                .repeat(REPLY_REPEAT),
            )
            .await;
        self.tell(&player.id, &messages::relay_confirmed(&attacker_name))
            .await;

        tracing::info!(from = %player.id, to = %attacker.id, "Reply relayed");
        Ok(attacker.id)
    }

    /// Tell the player the server name of their last attacker, which an
    /// alternate name may hide. Leaves the reply gate untouched.
    pub async fn show_real_attacker_name(&self, player: &Participant) -> Result<(), CombatError> {
        match self.stores.attribution.get_attacker(&player.id) {
            Some(record) => {
                self.tell(&player.id, &messages::real_name(&record.attacker_name))
                    .await;
                Ok(())
            }
            None => {
                self.tell(&player.id, messages::NO_ATTACKER).await;
                Err(CombatError::NoAttacker(player.id.clone()))
            }
        }
    }

    /// Preview of the notice this player's victims receive.
    pub async fn show_my_message(&self, player: &Participant) {
        let preview = self
            .compose_victim_notice(player, PersonalScore::default())
            .await;
        self.tell(&player.id, &preview).await;
    }

    /// Opt in or out of attacker-facing kill notices for this match.
    pub async fn set_attacker_notices(
        &self,
        player: &Participant,
        enabled: bool,
    ) -> Result<(), CombatError> {
        let result = self.apply_notice_toggle(player, enabled).await;
        self.report_notice_toggle(player, enabled, result).await
    }

    /// Permission check and opt-in change, without telling the player.
    pub async fn apply_notice_toggle(
        &self,
        player: &Participant,
        enabled: bool,
    ) -> Result<(), CombatError> {
        let capability = Capability::AttackerNotices;
        if !self.permissions.has_permission(&player.id, capability).await {
            return Err(CombatError::PermissionDenied {
                player: player.id.clone(),
                capability,
            });
        }

        self.stores.opt_ins.set(&player.id, enabled);
        tracing::info!(player = %player.id, enabled, "Attacker notices toggled");
        Ok(())
    }

    /// Tell the player how [`Self::apply_notice_toggle`] went. Returns the
    /// same result.
    pub async fn report_notice_toggle(
        &self,
        player: &Participant,
        enabled: bool,
        result: Result<(), CombatError>,
    ) -> Result<(), CombatError> {
        let text = match (&result, enabled) {
            (Err(_), _) => messages::NO_PERMISSION,
            (Ok(()), true) => messages::NOTICES_ON,
            (Ok(()), false) => messages::NOTICES_OFF,
        };
        self.tell(&player.id, text).await;
        result
    }

    /// Host signal that a new match started.
    pub async fn on_new_match(&self, phase: MatchPhase) {
        tracing::info!(gamemode = ?phase.gamemode, "New match");
        self.stores.match_state.set(phase).await;

        if self.settings.clear_wounds_on_new_match {
            self.stores.wounds.clear();
        }
        if self.settings.reset_notices_on_new_match {
            self.stores.opt_ins.clear();
        }
    }

    fn attacker_gets_notice(&self, attacker: &PlayerId, seed_phase: bool) -> bool {
        let seed = self.settings.notify_attacker_on_seed && seed_phase;
        let opted_in =
            self.settings.attacker_notices_enabled && self.stores.opt_ins.is_opted_in(attacker);
        seed || opted_in
    }

    async fn compose_victim_notice(&self, attacker: &Participant, score: PersonalScore) -> String {
        let (name, playtime, label) = futures_util::future::join3(
            self.directory.display_name(attacker),
            self.directory.playtime(&attacker.id),
            self.directory.label(attacker),
        )
        .await;
        messages::victim_notice(&name, playtime, score, &label)
    }

    async fn tell(&self, player: &PlayerId, text: &str) {
        self.channel
            .deliver(PendingNotification::new(player.clone(), text))
            .await;
    }
}
