//! The single event queue and the tasks that feed it.

use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

use crossterm::event::{Event, EventStream, KeyEvent};
use futures::StreamExt;
use sysdash_sampler::{MetricSnapshot, Sampler};
use tokio::sync::mpsc;
use tracing::{debug, error};

use crate::scheduler::RoundId;

pub type SharedSampler = Arc<Mutex<Sampler>>;
pub type EventSender = mpsc::UnboundedSender<AppEvent>;

/// Everything that can change dashboard state, in arrival order.
#[derive(Debug)]
pub enum AppEvent {
    Key(KeyEvent),
    /// Terminal resized; only a redraw is needed.
    Resize,
    /// SIGINT / console Ctrl+C delivered outside raw-mode key handling.
    Interrupt,
    /// Periodic refresh timer armed for `generation` has elapsed.
    Timer { generation: u64 },
    Sampled {
        round: RoundId,
        snapshot: MetricSnapshot,
    },
    /// The sampling task for `round` died without producing a snapshot.
    RoundFailed { round: RoundId },
    /// Reading terminal input failed; fatal.
    InputFailed(std::io::Error),
}

pub struct EventHandler {
    rx: mpsc::UnboundedReceiver<AppEvent>,
    tx: EventSender,
}

impl EventHandler {
    pub fn new() -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self { rx, tx }
    }

    pub fn sender(&self) -> EventSender {
        self.tx.clone()
    }

    pub async fn next(&mut self) -> Option<AppEvent> {
        self.rx.recv().await
    }

    /// Start terminal input and signal sources.
    pub fn spawn_sources(&self) {
        tokio::spawn(terminal_events(self.sender()));
        tokio::spawn(interrupt_events(self.sender()));
    }
}

impl Default for EventHandler {
    fn default() -> Self {
        Self::new()
    }
}

async fn terminal_events(tx: EventSender) {
    let mut stream = EventStream::new();
    while let Some(item) = stream.next().await {
        let ev = match item {
            Ok(Event::Key(k)) => AppEvent::Key(k),
            Ok(Event::Resize(_, _)) => AppEvent::Resize,
            Ok(_) => continue,
            Err(e) => {
                let _ = tx.send(AppEvent::InputFailed(e));
                return;
            }
        };
        if tx.send(ev).is_err() {
            return;
        }
    }
}

async fn interrupt_events(tx: EventSender) {
    if tokio::signal::ctrl_c().await.is_ok() {
        let _ = tx.send(AppEvent::Interrupt);
    }
}

/// Post `Timer { generation }` after `delay`.
pub fn spawn_timer(tx: EventSender, generation: u64, delay: Duration) {
    tokio::spawn(async move {
        tokio::time::sleep(delay).await;
        let _ = tx.send(AppEvent::Timer { generation });
    });
}

/// Run one sampling round off the async workers and post the result.
/// The round is never cancelled; once the controller is gone the result is dropped.
/// A round that panics still completes, as `RoundFailed`, so the cadence keeps going.
pub fn spawn_round(tx: EventSender, sampler: SharedSampler, round: RoundId) {
    tokio::spawn(async move {
        let result = tokio::task::spawn_blocking(move || {
            sampler
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .sample()
        })
        .await;

        let ev = match result {
            Ok(snapshot) => AppEvent::Sampled { round, snapshot },
            Err(e) => {
                error!(round, error = %e, "sampling round panicked");
                AppEvent::RoundFailed { round }
            }
        };
        if tx.send(ev).is_err() {
            debug!(round, "controller gone, dropping sampling result");
        }
    });
}
