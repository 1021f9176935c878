//! Frame-rate-aware pacing

use std::time::Duration;

use tokio::time::Instant;

/// Paces a loop at a fixed frame rate
///
/// Each [`FrameTimer::wait`] sleeps until the next frame deadline, so N
/// waits span exactly N frame periods regardless of how long the work
/// between them took (late frames shorten the following sleep).
#[derive(Debug)]
pub struct FrameTimer {
    period: Duration,
    deadline: Option<Instant>,
}

impl FrameTimer {
    /// Create a timer for the given frame rate
    #[must_use]
    pub fn new(frame_rate: u32) -> Self {
        Self {
            period: Duration::from_secs(1) / frame_rate,
            deadline: None,
        }
    }

    /// One frame period
    #[must_use]
    pub const fn period(&self) -> Duration {
        self.period
    }

    /// Sleep until the next frame deadline
    pub async fn wait(&mut self) {
        let deadline = self
            .deadline
            .unwrap_or_else(|| Instant::now() + self.period);
        tokio::time::sleep_until(deadline).await;
        self.deadline = Some(deadline + self.period);
    }
}
