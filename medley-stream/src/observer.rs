//! Debounced, deduplicating observation of one backend's player.
//!
//! Backends fire several change notifications per logical transition, and a
//! notification carries no payload worth trusting, so the observer always
//! re-reads the player when it evaluates. Each pipeline is a single task
//! owning a single debounce deadline, so no two evaluations for the same
//! backend can ever run concurrently: a notice arriving mid-window re-arms
//! the deadline instead of starting a second evaluation.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::broadcast;
use tokio::sync::broadcast::error::RecvError;
use tokio::task::JoinHandle;
use tokio::time::{sleep_until, Instant};
use tracing::{debug, trace, warn};

use medley_backend::{ChangeKind, ChangeNotice};
use medley_model::{PlaybackSnapshot, PlaybackStatus};

use crate::config::ObserverConfig;
use crate::router::{PlayerEvent, SnapshotRouter};
use crate::source::{resolve_item, SnapshotSource};

/// Parking interval while no evaluation is pending. The sleep branch is
/// disabled whenever the deadline is unarmed, so the value only bounds how
/// stale the unused timer object can get.
const IDLE_PARK: Duration = Duration::from_secs(60);

/// Observes one backend and publishes normalized events to the router.
///
/// Two pipelines run per backend:
/// - the *state* pipeline emits [`PlayerEvent::Snapshot`] at most once per
///   actual status transition (compared against the last *reported* status,
///   not the last observed one);
/// - the *queue* pipeline emits [`PlayerEvent::NowPlaying`] whenever the
///   current entry re-resolves after a queue change.
///
/// The observer is process-lifetime-scoped; callers that lose interest drop
/// their subscriptions, not the observer. Dropping the observer itself
/// aborts both pipelines.
pub struct PlaybackObserver {
    state_task: JoinHandle<()>,
    queue_task: JoinHandle<()>,
}

impl PlaybackObserver {
    /// Spawn the observation pipelines for one source.
    ///
    /// Must be called from within a tokio runtime. Change receivers are
    /// taken synchronously, so notices fired after `spawn` returns are never
    /// missed.
    pub fn spawn<S: SnapshotSource>(
        source: Arc<S>,
        router: Arc<SnapshotRouter>,
        config: ObserverConfig,
    ) -> Self {
        let state_rx = source.changes();
        let queue_rx = source.changes();
        let window = config.debounce_window;

        let state_task = tokio::spawn(run_pipeline(
            Arc::clone(&source),
            Arc::clone(&router),
            window,
            ChangeKind::State,
            state_rx,
            Evaluation::State { last_reported: None },
        ));
        let queue_task = tokio::spawn(run_pipeline(
            source,
            router,
            window,
            ChangeKind::Queue,
            queue_rx,
            Evaluation::Queue,
        ));

        Self { state_task, queue_task }
    }
}

impl Drop for PlaybackObserver {
    fn drop(&mut self) {
        self.state_task.abort();
        self.queue_task.abort();
    }
}

/// Per-pipeline evaluation behavior and its private mutable state.
enum Evaluation {
    /// `last_reported` is `None` until the first report (the pre-first-
    /// observation state).
    State { last_reported: Option<PlaybackStatus> },
    Queue,
}

async fn run_pipeline<S: SnapshotSource>(
    source: Arc<S>,
    router: Arc<SnapshotRouter>,
    window: Duration,
    kind: ChangeKind,
    mut notices: broadcast::Receiver<ChangeNotice>,
    mut evaluation: Evaluation,
) {
    let mut deadline: Option<Instant> = None;

    loop {
        let wake = deadline.unwrap_or_else(|| Instant::now() + IDLE_PARK);
        tokio::select! {
            notice = notices.recv() => match notice {
                Ok(notice) if notice.kind == kind => {
                    // A burst keeps pushing the deadline out; only the last
                    // notice's window actually elapses.
                    deadline = Some(Instant::now() + window);
                }
                Ok(_) => {}
                Err(RecvError::Lagged(skipped)) => {
                    trace!(backend = ?source.backend(), skipped, "change stream lagged; re-arming");
                    deadline = Some(Instant::now() + window);
                }
                Err(RecvError::Closed) => break,
            },
            _ = sleep_until(wake), if deadline.is_some() => {
                deadline = None;
                evaluate(source.as_ref(), &router, &mut evaluation).await;
            }
        }
    }

    // The change stream closed with an evaluation still pending; let the
    // window elapse and run it so the final burst is not lost.
    if let Some(wake) = deadline {
        sleep_until(wake).await;
        evaluate(source.as_ref(), &router, &mut evaluation).await;
    }
    debug!(backend = ?source.backend(), ?kind, "change stream closed, pipeline stopping");
}

async fn evaluate<S: SnapshotSource>(
    source: &S,
    router: &SnapshotRouter,
    evaluation: &mut Evaluation,
) {
    let tick = match source.tick().await {
        Ok(tick) => tick,
        Err(error) => {
            warn!(backend = ?source.backend(), %error, "could not read player state");
            return;
        }
    };

    match evaluation {
        Evaluation::State { last_reported } => {
            if *last_reported == Some(tick.status) {
                trace!(
                    backend = ?source.backend(),
                    status = ?tick.status,
                    "status unchanged; suppressing"
                );
                return;
            }
            // Resolution failure only costs the current_item field; the
            // status change is still reported.
            let current_item = resolve_item(source, &tick).await;
            router.publish(PlayerEvent::Snapshot {
                backend: source.backend(),
                snapshot: PlaybackSnapshot {
                    status: tick.status,
                    rate: tick.rate,
                    position_secs: tick.position_secs,
                    current_item,
                },
            });
            *last_reported = Some(tick.status);
        }
        Evaluation::Queue => match resolve_item(source, &tick).await {
            Some(item) => router.publish(PlayerEvent::NowPlaying {
                backend: source.backend(),
                item,
            }),
            None => debug!(backend = ?source.backend(), "no resolvable current entry"),
        },
    }
}
