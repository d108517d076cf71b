//! Practigram Worker - Homework status notifier binary
//!
//! Runs the polling loop as a standalone service.
//! For library usage, see the worker crate's lib.rs.

use anyhow::Result;
use std::time::Duration;
use teloxide::Bot;
use teloxide::types::ChatId;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use worker::notifier::TelegramNotifier;
use worker::practicum::PracticumClient;

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Initialize tracing (console + log file)
    let _guard = init_tracing();

    info!("Starting Practigram worker (standalone mode)");

    // Load configuration; missing credentials stop the process before any
    // network call is made
    let config = match worker::Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("Refusing to start, configuration error: {:#}", e);
            return Err(e);
        }
    };

    // Initialize status API client
    let client = PracticumClient::new(
        config.endpoint.clone(),
        config.practicum_token.clone(),
        Duration::from_secs(config.http_timeout_secs),
    )?;
    info!("Status API client initialized (endpoint: {})", config.endpoint);

    // Initialize Telegram bot
    let bot = Bot::new(&config.telegram_token);
    let notifier = TelegramNotifier::new(bot, ChatId(config.telegram_chat_id));
    info!("Telegram bot initialized");

    // Statuses are queried from process start time onwards
    let from_date = chrono::Utc::now().timestamp();

    // Run worker (no shutdown token in standalone mode)
    worker::run_worker(client, notifier, config, from_date, None).await
}

/// Initialize tracing with console output and a daily-rolling log file
fn init_tracing() -> tracing_appender::non_blocking::WorkerGuard {
    // If LOG_DIR is set, use it. Default to "logs/worker"
    let log_dir = std::env::var("LOG_DIR").unwrap_or_else(|_| "logs/worker".to_string());

    let file_appender = tracing_appender::rolling::daily(&log_dir, "practigram-worker.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,worker=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(non_blocking),
        )
        .init();

    guard
}
