//! Minimum inter-request spacing gate.
//!
//! Some providers publish a minimum allowed delay between requests. The
//! pacer enforces that spacing per credential: callers that opt in wait
//! here before each call, and concurrent callers are serialized so the
//! spacing holds across tasks. Nothing in this crate enables pacing by
//! default.

use std::time::{Duration, Instant};

use log::debug;
use tokio::sync::Mutex;

/// Elapsed-time gate that keeps consecutive requests at least `spacing`
/// apart.
pub struct RequestPacer {
    spacing: Duration,
    last: Mutex<Option<Instant>>,
}

impl RequestPacer {
    /// Create a pacer with the given minimum spacing.
    pub fn new(spacing: Duration) -> Self {
        Self {
            spacing,
            last: Mutex::new(None),
        }
    }

    /// The configured minimum spacing.
    pub fn spacing(&self) -> Duration {
        self.spacing
    }

    /// Wait until at least `spacing` has elapsed since the previous call.
    ///
    /// The internal lock is held across the sleep so concurrent callers
    /// are released one spacing interval apart.
    pub async fn wait(&self) {
        let mut last = self.last.lock().await;

        if let Some(previous) = *last {
            let ready_at = previous + self.spacing;
            let now = Instant::now();

            if ready_at > now {
                let delay = ready_at - now;
                debug!("pacer: waiting {:?} before next request", delay);
                tokio::time::sleep(delay).await;
            }
        }

        *last = Some(Instant::now());
    }
}
