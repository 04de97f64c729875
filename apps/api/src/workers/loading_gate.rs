use std::time::Duration;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::Instant;

/// One-shot timer gating the first render of a single page view.
///
/// `is_loading()` is true from `mount` until `delay` elapses. The delay is
/// cosmetic: nothing is fetched while it runs, and it is neither retried nor
/// cancellable except by dropping the gate, which aborts the pending timer.
pub struct LoadingGate {
    ready: watch::Receiver<bool>,
    timer: JoinHandle<()>,
    mounted_at: Instant,
    delay: Duration,
}

impl LoadingGate {
    /// Start the timer. Must be called inside a tokio runtime.
    pub fn mount(delay: Duration) -> Self {
        let (tx, ready) = watch::channel(false);
        let timer = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            let _ = tx.send(true);
            tracing::debug!(delay_ms = delay.as_millis() as u64, "loading gate opened");
        });

        Self {
            ready,
            timer,
            mounted_at: Instant::now(),
            delay,
        }
    }

    pub fn is_loading(&self) -> bool {
        !*self.ready.borrow()
    }

    pub fn mounted_at(&self) -> Instant {
        self.mounted_at
    }

    /// Time left before the gate opens; zero once it has.
    pub fn remaining(&self) -> Duration {
        if self.is_loading() {
            self.delay.saturating_sub(self.mounted_at.elapsed())
        } else {
            Duration::ZERO
        }
    }
}

impl Drop for LoadingGate {
    fn drop(&mut self) {
        if self.is_loading() {
            tracing::debug!("loading gate dropped before opening; cancelling timer");
        }
        self.timer.abort();
    }
}
