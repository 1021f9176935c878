//! The expression player
//!
//! Sequences interpolated face frames neutral to target and back, pacing
//! each frame at the display cadence and holding on each end pose. Any
//! failure aborts the whole expression.

use std::time::Duration;

use super::Session;
use crate::face::{Expression, FrameTimer};
use crate::robot::{DISPLAY_FRAME_RATE, RobotClient};
use crate::Result;

/// How long each end pose is held when no hold is given
pub const DEFAULT_HOLD: Duration = Duration::from_secs(1);

/// Interpolation steps per transition: a third of the display frame rate
const INTERPOLATION_DIVISOR: u32 = 3;

/// Pacing delay after an expression
const EXPRESSION_DELAY: Duration = Duration::from_secs(1);

impl<C: RobotClient> Session<C> {
    /// Show `expression` on the face display, holding each end pose
    ///
    /// The head is first raised to the midpoint angle so the display is
    /// visible. Two interpolation passes run: neutral to the target, then
    /// the target back to neutral. Each rendered frame is downsampled to
    /// half height and transmitted at the display cadence; each pass ends
    /// holding its final pose for `hold` (frame count `floor(rate * hold)`).
    ///
    /// # Errors
    ///
    /// Returns error if the session is not open, or if frame rendering or
    /// transmission fails; the expression is aborted at the failing frame
    pub async fn express(&mut self, expression: Expression, hold: Option<Duration>) -> Result<()> {
        self.ensure_open()?;
        tracing::info!(expression = %expression, "showing expression");

        self.head_up().await?;

        let hold = hold.unwrap_or(DEFAULT_HOLD);
        let rate = DISPLAY_FRAME_RATE;
        let steps = rate / INTERPOLATION_DIVISOR;
        #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let hold_frames = (rate as f32 * hold.as_secs_f32()).floor() as u32;

        let mut timer = FrameTimer::new(rate);

        for (from, to) in [
            (Expression::Neutral, expression),
            (expression, Expression::Neutral),
        ] {
            for frame in self.renderer.interpolate(from, to, steps) {
                let image = frame.halve_rows();
                self.client.display_image(&image).await?;
                timer.wait().await;
            }

            for _ in 0..hold_frames {
                timer.wait().await;
            }
        }

        self.pace(Some(EXPRESSION_DELAY)).await;
        Ok(())
    }
}
