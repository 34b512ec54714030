//! Repeated visual alert.
//!
//! Alternates two cursor frames on a writer for a fixed number of cycles,
//! sleeping half a period after each frame. Runs as a tokio task so the
//! caller is never blocked, and stops early when cancelled through the
//! [`BlinkHandle`].

use std::io::Write;
use std::time::Duration;

use tokio::sync::watch;
use tokio::task::{JoinError, JoinHandle};
use tokio::time;

/// Frames written alternately, each prefixed with a carriage return so
/// they overwrite one another.
pub const BLINK_FRAMES: [&str; 2] = ["\r* ", "\r *"];

/// Default number of full blink cycles.
pub const DEFAULT_CYCLES: u32 = 6;

/// Default time each frame stays on screen.
pub const DEFAULT_HALF_PERIOD: Duration = Duration::from_secs(1);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlinkConfig {
    pub cycles: u32,
    pub half_period: Duration,
}

impl Default for BlinkConfig {
    fn default() -> Self {
        Self {
            cycles: DEFAULT_CYCLES,
            half_period: DEFAULT_HALF_PERIOD,
        }
    }
}

impl BlinkConfig {
    /// Total time a blink runs when not cancelled, saturating at
    /// `Duration::MAX`.
    pub fn total_duration(&self) -> Duration {
        self.half_period
            .checked_mul(2)
            .and_then(|full| full.checked_mul(self.cycles))
            .unwrap_or(Duration::MAX)
    }
}

/// How a blink run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlinkOutcome {
    Completed { cycles: u32 },
    Cancelled { cycles_completed: u32 },
}

/// Run the blink on the current task until it completes or `cancel`
/// becomes `true`.
pub async fn run_blink<W: Write>(
    out: &mut W,
    config: &BlinkConfig,
    mut cancel: watch::Receiver<bool>,
) -> BlinkOutcome {
    tracing::debug!(
        "Blink started ({} cycles, {:?} per frame)",
        config.cycles,
        config.half_period
    );

    for cycle in 0..config.cycles {
        for frame in BLINK_FRAMES {
            write_frame(out, frame);

            tokio::select! {
                _ = time::sleep(config.half_period) => {}
                _ = wait_for_cancel(&mut cancel) => {
                    tracing::info!("Blink cancelled after {} cycles", cycle);
                    return BlinkOutcome::Cancelled { cycles_completed: cycle };
                }
            }
        }
    }

    tracing::debug!("Blink completed");
    BlinkOutcome::Completed {
        cycles: config.cycles,
    }
}

fn write_frame<W: Write>(out: &mut W, frame: &str) {
    if let Err(err) = out.write_all(frame.as_bytes()).and_then(|_| out.flush()) {
        tracing::error!("Failed to write blink frame: {}", err);
    }
}

/// Resolves once cancellation is requested. Never resolves if the sender
/// is dropped without cancelling.
async fn wait_for_cancel(cancel: &mut watch::Receiver<bool>) {
    loop {
        if *cancel.borrow_and_update() {
            return;
        }
        if cancel.changed().await.is_err() {
            std::future::pending::<()>().await;
        }
    }
}

/// Handle to a blink running on its own task.
pub struct BlinkHandle<W> {
    cancel: watch::Sender<bool>,
    task: JoinHandle<(BlinkOutcome, W)>,
}

impl<W> BlinkHandle<W> {
    /// Request the blink to stop at its next frame boundary.
    pub fn cancel(&self) {
        self.cancel.send_replace(true);
    }

    /// Wait for the blink to end, returning its outcome and the writer.
    pub async fn join(self) -> Result<(BlinkOutcome, W), JoinError> {
        self.task.await
    }
}

/// Start a blink on a new task.
pub fn spawn_blink<W>(mut out: W, config: BlinkConfig) -> BlinkHandle<W>
where
    W: Write + Send + 'static,
{
    let (cancel, rx) = watch::channel(false);
    let task = tokio::spawn(async move {
        let outcome = run_blink(&mut out, &config, rx).await;
        (outcome, out)
    });

    BlinkHandle { cancel, task }
}
