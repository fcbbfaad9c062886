//! Player-facing message texts.

use revenge_domain::{PersonalScore, Playtime};

pub const NO_ATTACKER: &str = "Could not find your last attacker";
pub const ALREADY_REPLIED: &str = "You already sent a message to your last attacker";
pub const NO_PERMISSION: &str = "You are not allowed to change kill notices";
pub const NOTICES_ON: &str = "Kill notices enabled for this match";
pub const NOTICES_OFF: &str = "Kill notices disabled";

/// Shown to the victim after a wound.
pub fn victim_notice(
    attacker_name: &str,
    playtime: Playtime,
    score: PersonalScore,
    label: &str,
) -> String {
    format!(
        "➼ enemy '{attacker_name}'{}\nPersonal score: {score}\n\n{label}",
        playtime.suffix()
    )
}

/// Shown to the attacker after a wound, when they get notices.
pub fn attacker_notice(
    victim_name: &str,
    playtime: Playtime,
    damage: Option<f32>,
    score: PersonalScore,
    seed_phase: bool,
) -> String {
    let mut text = format!("You killed '{victim_name}'{}", playtime.suffix());
    if let Some(damage) = damage {
        text.push_str(&format!("\nDamage: {damage:.0}"));
    }
    text.push_str(&format!("\nPersonal score: {score}"));
    if seed_phase {
        text.push_str("\n\nKeep it up :-) This message is shown only on seed");
    }
    text
}

pub fn teamkill_victim(attacker_name: &str) -> String {
    format!("You were killed by your teammate {attacker_name}")
}

pub fn teamkill_attacker(victim_name: &str) -> String {
    format!("You killed an ally! {victim_name}. Apologize to them!")
}

pub fn relayed(sender_name: &str, message: &str) -> String {
    format!("{sender_name} relayed: {message}")
}

pub fn relay_confirmed(attacker_name: &str) -> String {
    format!("Your message was relayed to {attacker_name}!")
}

pub fn real_name(attacker_name: &str) -> String {
    format!("Real name of your last attacker: {attacker_name}")
}
