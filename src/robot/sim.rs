//! Simulated robot backend
//!
//! Stands in for the hardware transport so the CLI and tests can run
//! without a robot on the desk. Motion and playback waits keep their
//! real-time pacing; everything else is logged.

use std::time::Duration;

use async_trait::async_trait;

use super::types::{BackpackLights, DisplayImage, HeadLimits, LiftLimits};
use super::RobotClient;
use crate::{Error, Result};

/// Head angle range of the robot, radians (-25 to 44.5 degrees)
const HEAD_LIMITS: HeadLimits = HeadLimits {
    min_radians: -0.436_332_3,
    max_radians: 0.776_672_2,
};

/// Lift height range of the robot, millimeters
const LIFT_LIMITS: LiftLimits = LiftLimits {
    min_mm: 32.0,
    max_mm: 92.0,
};

/// Sample rate the robot plays audio at
const AUDIO_SAMPLE_RATE: u32 = 22_050;

/// Simulated robot client
#[derive(Debug, Default)]
pub struct SimRobot {
    connected: bool,
    pending_samples: usize,
}

impl SimRobot {
    /// Create a disconnected simulated robot
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn ensure_connected(&self) -> Result<()> {
        if self.connected {
            Ok(())
        } else {
            Err(Error::Robot("not connected".to_string()))
        }
    }
}

#[async_trait]
impl RobotClient for SimRobot {
    async fn connect(&mut self) -> Result<()> {
        self.connected = true;
        tracing::debug!("sim robot connected");
        Ok(())
    }

    async fn disconnect(&mut self) -> Result<()> {
        self.ensure_connected()?;
        self.connected = false;
        tracing::debug!("sim robot disconnected");
        Ok(())
    }

    async fn enable_animations(&mut self) -> Result<()> {
        self.ensure_connected()?;
        tracing::debug!("animations enabled");
        Ok(())
    }

    async fn load_animations(&mut self) -> Result<()> {
        self.ensure_connected()?;
        tracing::debug!("animation assets loaded");
        Ok(())
    }

    async fn drive_wheels(&mut self, left: f32, right: f32, duration: Duration) -> Result<()> {
        self.ensure_connected()?;
        tracing::debug!(left, right, ?duration, "driving wheels");
        // The real client blocks for the motion window before stopping
        tokio::time::sleep(duration).await;
        Ok(())
    }

    async fn set_head_angle(&mut self, radians: f32) -> Result<()> {
        self.ensure_connected()?;
        let clamped = radians.clamp(HEAD_LIMITS.min_radians, HEAD_LIMITS.max_radians);
        tracing::debug!(radians = clamped, "head angle set");
        Ok(())
    }

    async fn set_lift_height(&mut self, mm: f32) -> Result<()> {
        self.ensure_connected()?;
        let clamped = mm.clamp(LIFT_LIMITS.min_mm, LIFT_LIMITS.max_mm);
        tracing::debug!(mm = clamped, "lift height set");
        Ok(())
    }

    async fn set_backpack_lights(&mut self, lights: BackpackLights) -> Result<()> {
        self.ensure_connected()?;
        tracing::debug!(?lights, "backpack lights set");
        Ok(())
    }

    async fn set_volume(&mut self, volume: u32) -> Result<()> {
        self.ensure_connected()?;
        tracing::debug!(volume, "volume set");
        Ok(())
    }

    async fn play_audio(&mut self, samples: Vec<i16>) -> Result<()> {
        self.ensure_connected()?;
        tracing::debug!(samples = samples.len(), "audio submitted");
        self.pending_samples = samples.len();
        Ok(())
    }

    async fn wait_for_audio_complete(&mut self) -> Result<()> {
        self.ensure_connected()?;
        let millis = (self.pending_samples as u64 * 1000) / u64::from(AUDIO_SAMPLE_RATE);
        tokio::time::sleep(Duration::from_millis(millis)).await;
        self.pending_samples = 0;
        tracing::debug!("audio playback complete");
        Ok(())
    }

    async fn display_image(&mut self, image: &DisplayImage) -> Result<()> {
        self.ensure_connected()?;
        tracing::trace!(
            width = image.width(),
            height = image.height(),
            "frame displayed"
        );
        Ok(())
    }

    async fn play_animation(&mut self, name: &str) -> Result<()> {
        self.ensure_connected()?;
        tracing::debug!(name, "animation played");
        Ok(())
    }

    fn head_limits(&self) -> HeadLimits {
        HEAD_LIMITS
    }

    fn lift_limits(&self) -> LiftLimits {
        LIFT_LIMITS
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn commands_require_connection() {
        let mut robot = SimRobot::new();
        assert!(robot.set_volume(100).await.is_err());

        robot.connect().await.unwrap();
        assert!(robot.set_volume(100).await.is_ok());

        robot.disconnect().await.unwrap();
        assert!(robot.set_volume(100).await.is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn audio_wait_scales_with_submitted_samples() {
        let mut robot = SimRobot::new();
        robot.connect().await.unwrap();

        // One second of audio at the robot sample rate
        robot.play_audio(vec![0; 22_050]).await.unwrap();

        let start = tokio::time::Instant::now();
        robot.wait_for_audio_complete().await.unwrap();
        assert_eq!(start.elapsed(), Duration::from_secs(1));
    }
}
