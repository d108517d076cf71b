//! Practigram Worker - Homework status notifier
//!
//! Polls the Practicum homework statuses API and forwards status changes
//! to a Telegram chat.

mod config;
pub mod notifier;
pub mod practicum;

pub use config::Config;

use anyhow::Result;
use practigram_core::error::{ShapeError, VerdictError};
use practigram_core::{check_response, render_status_change};
use thiserror::Error;
use tokio::time::Duration;
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info, warn};

use notifier::{Notifier, NotifyError};
use practicum::{FetchError, StatusSource};

/// Mutable polling state, owned by the loop alone
///
/// `from_date` is fixed at process start: the API re-reports everything
/// since then each cycle and `last_seen` dedupes the sends. `last_seen`
/// holds the text of the last successfully delivered notification and is
/// lost on restart.
#[derive(Debug)]
pub struct PollSession {
    pub from_date: i64,
    pub last_seen: Option<String>,
}

impl PollSession {
    pub fn new(from_date: i64) -> Self {
        Self {
            from_date,
            last_seen: None,
        }
    }
}

/// What a single poll cycle did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CycleOutcome {
    /// The API reported no homeworks
    Idle,
    /// The newest homework matches the last sent notification
    Unchanged,
    /// A status change was delivered to the chat
    Notified,
}

/// Everything that can go wrong inside one poll cycle
///
/// All variants are recoverable: the loop logs them and waits for the
/// next cycle.
#[derive(Error, Debug)]
pub enum CycleError {
    #[error("Status fetch failed: {0}")]
    Fetch(#[from] FetchError),

    #[error("Unexpected response shape: {0}")]
    Shape(#[from] ShapeError),

    #[error("Cannot interpret homework record: {0}")]
    Verdict(#[from] VerdictError),

    #[error("Notification failed: {0}")]
    Notify(#[from] NotifyError),
}

/// Run one fetch → validate → render → compare → send cycle
///
/// `last_seen` is updated only after a successful send, so a failed
/// delivery leaves the change pending for the next cycle.
pub async fn run_cycle<S, N>(
    source: &S,
    notifier: &N,
    session: &mut PollSession,
) -> Result<CycleOutcome, CycleError>
where
    S: StatusSource + ?Sized,
    N: Notifier + ?Sized,
{
    let response = source.fetch(session.from_date).await?;
    let homeworks = check_response(&response)?;

    let Some(record) = homeworks.first() else {
        return Ok(CycleOutcome::Idle);
    };

    let text = render_status_change(record)?;
    if session.last_seen.as_deref() == Some(text.as_str()) {
        return Ok(CycleOutcome::Unchanged);
    }

    notifier.notify(&text).await?;
    session.last_seen = Some(text);

    Ok(CycleOutcome::Notified)
}

/// Run the polling loop until cancelled
///
/// Every cycle result is logged and the loop keeps going; only the
/// optional shutdown token stops it.
///
/// # Arguments
/// * `source` - Homework status source
/// * `notifier` - Notification transport
/// * `config` - Worker configuration
/// * `from_date` - Unix timestamp bounding the status query, fixed for the process lifetime
/// * `shutdown` - Optional cancellation token for graceful shutdown
pub async fn run_worker<S, N>(
    source: S,
    notifier: N,
    config: Config,
    from_date: i64,
    shutdown: Option<CancellationToken>,
) -> Result<()>
where
    S: StatusSource,
    N: Notifier,
{
    let poll_interval = Duration::from_secs(config.poll_interval_secs);
    let mut session = PollSession::new(from_date);

    info!(
        "Starting worker: poll_interval={}s, from_date={}",
        config.poll_interval_secs, session.from_date
    );

    loop {
        // Check for shutdown signal
        if let Some(ref token) = shutdown
            && token.is_cancelled()
        {
            info!("Worker received shutdown signal");
            break;
        }

        match run_cycle(&source, &notifier, &mut session).await {
            Ok(CycleOutcome::Idle) => debug!("No homeworks reported this cycle"),
            Ok(CycleOutcome::Unchanged) => debug!("Homework status unchanged"),
            Ok(CycleOutcome::Notified) => debug!("Status change notification sent"),
            Err(CycleError::Notify(e)) => warn!("Failed to deliver notification: {}", e),
            Err(e @ (CycleError::Fetch(_) | CycleError::Shape(_) | CycleError::Verdict(_))) => {
                error!("Poll cycle failed: {}", e);
            }
        }

        tokio::time::sleep(poll_interval).await;
    }

    Ok(())
}
