//! Revenge Engine - Main entry point.
//!
//! Reads host events as JSON lines from stdin and writes every outgoing
//! message to the log. A game-server integration replaces the stdin loop and
//! the log transport; everything in between is the same.

use std::sync::Arc;

use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::task::JoinSet;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use revenge_engine::api::HostEvent;
use revenge_engine::infrastructure::{
    config::EngineConfig, delay::TokioDelay, permissions::AllowListPermissions,
    playtime::UnknownPlaytime, profiles::InMemoryProfileRepo, transport::LogTransport,
};
use revenge_engine::{App, Ports};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment from the workspace root, wherever the binary is started from.
    load_dotenv_from_repo_root();

    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "revenge_engine=debug,transport=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Revenge Engine");

    let config = EngineConfig::from_env()?;
    tracing::info!(
        reply_commands = ?config.reply_commands,
        messages_to_victim = config.messages_to_victim,
        repeat_delay_secs = config.repeat_delay.as_secs(),
        privileged = config.privileged_players.len(),
        "Configuration loaded"
    );

    let app = App::new(
        &config,
        Ports {
            transport: Arc::new(LogTransport::new()),
            delay: Arc::new(TokioDelay::new()),
            profiles: Arc::new(InMemoryProfileRepo::new()),
            playtime: Arc::new(UnknownPlaytime),
            permissions: Arc::new(AllowListPermissions::new(
                config.privileged_players.clone(),
            )),
        },
    );

    let mut in_flight = JoinSet::new();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    while let Some(line) = lines.next_line().await? {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        match HostEvent::from_json(line) {
            // Store changes happen here, in arrival order; only delivery is spawned.
            Ok(event) => {
                if let Some(delivery) = app.router.accept(event).await {
                    in_flight.spawn(delivery);
                }
            }
            Err(e) => tracing::warn!(error = %e, "Ignoring malformed host event"),
        }

        // Reap finished events so the set does not grow with the session.
        while let Some(result) = in_flight.try_join_next() {
            if let Err(e) = result {
                tracing::warn!(error = %e, "Event task failed");
            }
        }
    }

    tracing::info!(pending = in_flight.len(), "Input closed, draining deliveries");
    while let Some(result) = in_flight.join_next().await {
        if let Err(e) = result {
            tracing::warn!(error = %e, "Event task failed");
        }
    }

    Ok(())
}

fn load_dotenv_from_repo_root() {
    let repo_root = std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..");

    // Prefer local overrides.
    for filename in [".env.local", ".env"] {
        let path = repo_root.join(filename);
        if path.exists() {
            let _ = dotenvy::from_path(path);
        }
    }
}
