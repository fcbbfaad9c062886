//! Engine configuration.
//!
//! Every option has a default matching the stock server setup, so an empty
//! environment yields a working engine. Values are read from `REVENGE_*`
//! environment variables (after `.env` loading in `main`).
//!
//! List options are comma separated: `REVENGE_REPLY_COMMANDS=reply,r`.

use std::str::FromStr;
use std::time::Duration;

use revenge_domain::PlayerId;

const PREFIX: &str = "REVENGE_";

/// Default spacing between repeats of one notification.
pub const DEFAULT_REPEAT_DELAY_SECS: u64 = 5;

/// Padding budget of the RCON warn transport.
pub const DEFAULT_MAX_PADDING: usize = 97;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{var}: expected {expected}, got {value:?}")]
    Invalid {
        var: String,
        expected: &'static str,
        value: String,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct EngineConfig {
    // Command words (without the leading `!`)
    pub reply_commands: Vec<String>,
    pub show_real_name_commands: Vec<String>,
    pub show_my_message_commands: Vec<String>,
    pub notices_on_commands: Vec<String>,
    pub notices_off_commands: Vec<String>,

    // Features
    pub use_alternate_names: bool,
    pub use_alternate_labels: bool,
    pub notify_attacker_on_seed: bool,
    pub attacker_notices_enabled: bool,

    // Match lifecycle
    pub clear_wounds_on_new_match: bool,
    pub reset_notices_on_new_match: bool,
    pub seed_gamemode: String,

    // Delivery
    pub messages_to_victim: u32,
    pub repeat_delay: Duration,
    pub max_padding: usize,
    pub padding_char: char,

    pub privileged_players: Vec<PlayerId>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            reply_commands: words(&["reply"]),
            show_real_name_commands: words(&["realname"]),
            show_my_message_commands: words(&["showmessage", "mymessage"]),
            notices_on_commands: words(&["killnotices"]),
            notices_off_commands: words(&["nokillnotices"]),
            use_alternate_names: true,
            use_alternate_labels: true,
            notify_attacker_on_seed: true,
            attacker_notices_enabled: true,
            clear_wounds_on_new_match: false,
            reset_notices_on_new_match: true,
            seed_gamemode: "Seed".to_string(),
            messages_to_victim: 1,
            repeat_delay: Duration::from_secs(DEFAULT_REPEAT_DELAY_SECS),
            max_padding: DEFAULT_MAX_PADDING,
            padding_char: '\u{00A0}',
            privileged_players: Vec::new(),
        }
    }
}

impl EngineConfig {
    /// Load from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load using an arbitrary key lookup (keys include the `REVENGE_` prefix).
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let env = Lookup(lookup);
        let mut config = Self::default();

        env.list("REPLY_COMMANDS", &mut config.reply_commands);
        env.list("SHOW_REAL_NAME_COMMANDS", &mut config.show_real_name_commands);
        env.list("SHOW_MY_MESSAGE_COMMANDS", &mut config.show_my_message_commands);
        env.list("NOTICES_ON_COMMANDS", &mut config.notices_on_commands);
        env.list("NOTICES_OFF_COMMANDS", &mut config.notices_off_commands);

        env.flag("USE_ALTERNATE_NAMES", &mut config.use_alternate_names)?;
        env.flag("USE_ALTERNATE_LABELS", &mut config.use_alternate_labels)?;
        env.flag("NOTIFY_ATTACKER_ON_SEED", &mut config.notify_attacker_on_seed)?;
        env.flag("ATTACKER_NOTICES_ENABLED", &mut config.attacker_notices_enabled)?;
        env.flag("CLEAR_WOUNDS_ON_NEW_MATCH", &mut config.clear_wounds_on_new_match)?;
        env.flag("RESET_NOTICES_ON_NEW_MATCH", &mut config.reset_notices_on_new_match)?;

        if let Some(mode) = env.get("SEED_GAMEMODE") {
            config.seed_gamemode = mode;
        }

        env.number("MESSAGES_TO_VICTIM", &mut config.messages_to_victim)?;
        env.number("MAX_PADDING", &mut config.max_padding)?;

        let mut delay_secs = config.repeat_delay.as_secs();
        env.number("REPEAT_DELAY_SECS", &mut delay_secs)?;
        config.repeat_delay = Duration::from_secs(delay_secs);

        if let Some(raw) = env.get("PADDING_CHAR") {
            let mut chars = raw.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => config.padding_char = c,
                _ => return Err(invalid("PADDING_CHAR", "a single character", raw)),
            }
        }

        let mut privileged = Vec::new();
        env.list("PRIVILEGED_PLAYERS", &mut privileged);
        config.privileged_players = privileged.into_iter().map(PlayerId::new).collect();

        config.validate()?;
        Ok(config)
    }

    /// Repeat `i` of a notification carries `min(i, max_padding)` padding
    /// characters, so every repeat is distinct only while the repeat count
    /// stays within `max_padding + 1`. Replies and teamkill rebukes go out
    /// twice, which needs at least one padding character.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_padding < 1 {
            return Err(invalid(
                "MAX_PADDING",
                "at least 1",
                self.max_padding.to_string(),
            ));
        }
        if self.messages_to_victim as usize > self.max_padding + 1 {
            return Err(invalid(
                "MESSAGES_TO_VICTIM",
                "at most REVENGE_MAX_PADDING + 1",
                self.messages_to_victim.to_string(),
            ));
        }
        Ok(())
    }

    /// Hint appended to victim messages when the attacker has no label.
    pub fn default_label(&self) -> String {
        let command = self
            .reply_commands
            .first()
            .map(String::as_str)
            .unwrap_or("reply");
        format!("!{command} TEXT sends them your message")
    }
}

fn words(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

fn invalid(var: &str, expected: &'static str, value: String) -> ConfigError {
    ConfigError::Invalid {
        var: format!("{PREFIX}{var}"),
        expected,
        value,
    }
}

struct Lookup<F>(F);

impl<F> Lookup<F>
where
    F: Fn(&str) -> Option<String>,
{
    fn get(&self, key: &str) -> Option<String> {
        (self.0)(&format!("{PREFIX}{key}"))
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
    }

    fn list(&self, key: &str, target: &mut Vec<String>) {
        if let Some(raw) = self.get(key) {
            *target = raw
                .split(',')
                .map(|s| s.trim().trim_start_matches('!').to_lowercase())
                .filter(|s| !s.is_empty())
                .collect();
        }
    }

    fn flag(&self, key: &str, target: &mut bool) -> Result<(), ConfigError> {
        let Some(raw) = self.get(key) else {
            return Ok(());
        };
        *target = match raw.to_ascii_lowercase().as_str() {
            "1" | "true" | "yes" | "on" => true,
            "0" | "false" | "no" | "off" => false,
            _ => return Err(invalid(key, "a boolean", raw)),
        };
        Ok(())
    }

    fn number<T: FromStr>(&self, key: &str, target: &mut T) -> Result<(), ConfigError> {
        if let Some(raw) = self.get(key) {
            *target = raw
                .parse()
                .map_err(|_| invalid(key, "a non-negative integer", raw))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn load(pairs: &[(&str, &str)]) -> Result<EngineConfig, ConfigError> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        EngineConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn empty_environment_yields_defaults() {
        assert_eq!(load(&[]).unwrap(), EngineConfig::default());
    }

    #[test]
    fn lists_are_split_trimmed_and_lowercased() {
        let config = load(&[("REVENGE_REPLY_COMMANDS", " Reply, !r ,, revenge")]).unwrap();
        assert_eq!(config.reply_commands, vec!["reply", "r", "revenge"]);
    }

    #[test]
    fn scalar_options_override_defaults() {
        let config = load(&[
            ("REVENGE_MESSAGES_TO_VICTIM", "3"),
            ("REVENGE_REPEAT_DELAY_SECS", "2"),
            ("REVENGE_CLEAR_WOUNDS_ON_NEW_MATCH", "yes"),
            ("REVENGE_SEED_GAMEMODE", "Training"),
            ("REVENGE_PADDING_CHAR", "\u{200B}"),
            ("REVENGE_PRIVILEGED_PLAYERS", "a,b"),
        ])
        .unwrap();

        assert_eq!(config.messages_to_victim, 3);
        assert_eq!(config.repeat_delay, Duration::from_secs(2));
        assert!(config.clear_wounds_on_new_match);
        assert_eq!(config.seed_gamemode, "Training");
        assert_eq!(config.padding_char, '\u{200B}');
        assert_eq!(
            config.privileged_players,
            vec![PlayerId::new("a"), PlayerId::new("b")]
        );
    }

    #[test]
    fn invalid_values_name_the_variable() {
        let err = load(&[("REVENGE_USE_ALTERNATE_NAMES", "maybe")]).unwrap_err();
        assert_eq!(
            err,
            ConfigError::Invalid {
                var: "REVENGE_USE_ALTERNATE_NAMES".to_string(),
                expected: "a boolean",
                value: "maybe".to_string(),
            }
        );

        assert!(load(&[("REVENGE_MESSAGES_TO_VICTIM", "-1")]).is_err());
        assert!(load(&[("REVENGE_PADDING_CHAR", "ab")]).is_err());
    }

    #[test]
    fn repeats_beyond_padding_budget_are_rejected() {
        assert_eq!(
            load(&[("REVENGE_MAX_PADDING", "0")]).unwrap_err(),
            ConfigError::Invalid {
                var: "REVENGE_MAX_PADDING".to_string(),
                expected: "at least 1",
                value: "0".to_string(),
            }
        );

        let err = load(&[
            ("REVENGE_MAX_PADDING", "3"),
            ("REVENGE_MESSAGES_TO_VICTIM", "5"),
        ])
        .unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Invalid { ref var, .. } if var == "REVENGE_MESSAGES_TO_VICTIM"
        ));

        let config = load(&[
            ("REVENGE_MAX_PADDING", "3"),
            ("REVENGE_MESSAGES_TO_VICTIM", "4"),
        ])
        .unwrap();
        assert_eq!(config.messages_to_victim, 4);
        assert!(EngineConfig::default().validate().is_ok());
    }

    #[test]
    fn default_label_uses_first_reply_command() {
        let config = load(&[("REVENGE_REPLY_COMMANDS", "revenge,reply")]).unwrap();
        assert_eq!(config.default_label(), "!revenge TEXT sends them your message");
    }
}
