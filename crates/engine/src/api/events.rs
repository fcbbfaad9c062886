//! Host event entry point.
//!
//! The game server pushes events. Store changes are applied in arrival order;
//! message delivery runs afterwards and may overlap with later events, so a
//! slow delivery to one player never holds up processing of the next event.

use std::collections::HashMap;
use std::sync::Arc;

use futures_util::future::BoxFuture;
use revenge_domain::{ChatCommand, MatchPhase, Participant, WoundEvent};
use serde::{Deserialize, Serialize};

use crate::infrastructure::config::EngineConfig;
use crate::use_cases::combat::{CombatError, CombatEventHandler};

/// Events emitted by the game server.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum HostEvent {
    Wound(WoundEvent),
    ChatCommand(ChatCommand),
    NewMatch {
        #[serde(default)]
        gamemode: Option<String>,
    },
}

impl HostEvent {
    pub fn from_json(line: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(line)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandAction {
    Reply,
    ShowRealName,
    ShowMyMessage,
    NoticesOn,
    NoticesOff,
}

impl CommandAction {
    /// Commands that do nothing without text after the command word.
    fn needs_message(self) -> bool {
        matches!(self, CommandAction::Reply)
    }
}

/// Command word → action, built from configuration and feature flags.
#[derive(Debug, Clone, Default)]
pub struct CommandTable {
    actions: HashMap<String, CommandAction>,
}

impl CommandTable {
    pub fn from_config(config: &EngineConfig) -> Self {
        let mut table = Self::default();
        table.register(&config.reply_commands, CommandAction::Reply);

        if config.use_alternate_names {
            table.register(&config.show_real_name_commands, CommandAction::ShowRealName);
        }
        if config.use_alternate_names || config.use_alternate_labels {
            table.register(&config.show_my_message_commands, CommandAction::ShowMyMessage);
        }
        if config.attacker_notices_enabled {
            table.register(&config.notices_on_commands, CommandAction::NoticesOn);
            table.register(&config.notices_off_commands, CommandAction::NoticesOff);
        }
        table
    }

    pub fn lookup(&self, command: &str) -> Option<CommandAction> {
        let word = command.trim().trim_start_matches('!').to_lowercase();
        self.actions.get(&word).copied()
    }

    fn register(&mut self, words: &[String], action: CommandAction) {
        for word in words {
            self.actions.insert(word.to_lowercase(), action);
        }
    }
}

/// Message work left over once an event's store changes are applied.
pub type Delivery = BoxFuture<'static, ()>;

/// Routes host events to the combat handler.
///
/// [`EventRouter::accept`] applies the store changes of an event and returns
/// the remaining message delivery. Callers accept events one at a time in
/// arrival order and are free to run the returned deliveries concurrently.
pub struct EventRouter {
    combat: Arc<CombatEventHandler>,
    commands: CommandTable,
}

impl EventRouter {
    pub fn new(combat: Arc<CombatEventHandler>, commands: CommandTable) -> Self {
        Self { combat, commands }
    }

    /// Process the event to completion.
    pub async fn dispatch(&self, event: HostEvent) {
        if let Some(delivery) = self.accept(event).await {
            delivery.await;
        }
    }

    /// Apply the event's store changes now and hand back its deliveries.
    ///
    /// Never fails: refusals are reported to the player inside the delivery
    /// and only logged here.
    pub async fn accept(&self, event: HostEvent) -> Option<Delivery> {
        match event {
            HostEvent::Wound(wound) => {
                if let Err(e) = wound.validate() {
                    tracing::debug!(error = %e, "Ignoring wound event");
                    return None;
                }
                let applied = self.combat.apply_wound(&wound).await;
                let combat = self.combat.clone();
                let delivery: Delivery = Box::pin(async move {
                    let outcome = combat.notify_wound(&wound, applied).await;
                    tracing::debug!(outcome = ?outcome, "Wound handled");
                });
                Some(delivery)
            }
            HostEvent::ChatCommand(command) => self.accept_command(command).await,
            HostEvent::NewMatch { gamemode } => {
                self.combat.on_new_match(MatchPhase { gamemode }).await;
                None
            }
        }
    }

    async fn accept_command(&self, command: ChatCommand) -> Option<Delivery> {
        let action = self.commands.lookup(&command.command)?;
        if command.player.id.as_str().is_empty() {
            return None;
        }
        if action.needs_message() && !command.has_message() {
            tracing::debug!(player = %command.player.id, command = %command.command, "Ignoring empty command");
            return None;
        }

        let combat = self.combat.clone();
        let ChatCommand {
            player, message, ..
        } = command;

        let delivery: Delivery = match action {
            CommandAction::Reply => {
                let gate = combat.claim_reply(&player);
                Box::pin(async move {
                    let result = combat
                        .deliver_reply(&player, message.trim(), gate)
                        .await
                        .map(|_| ());
                    log_refusal(&player, action, result);
                })
            }
            CommandAction::NoticesOn | CommandAction::NoticesOff => {
                let enabled = action == CommandAction::NoticesOn;
                let applied = combat.apply_notice_toggle(&player, enabled).await;
                Box::pin(async move {
                    let result = combat
                        .report_notice_toggle(&player, enabled, applied)
                        .await;
                    log_refusal(&player, action, result);
                })
            }
            CommandAction::ShowRealName => Box::pin(async move {
                let result = combat.show_real_attacker_name(&player).await;
                log_refusal(&player, action, result);
            }),
            CommandAction::ShowMyMessage => Box::pin(async move {
                combat.show_my_message(&player).await;
            }),
        };
        Some(delivery)
    }
}

fn log_refusal(player: &Participant, action: CommandAction, result: Result<(), CombatError>) {
    if let Err(e) = result {
        tracing::debug!(player = %player.id, action = ?action, error = %e, "Command refused");
    }
}
