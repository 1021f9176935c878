//! Robot client seam
//!
//! The wire protocol lives in the vendor transport; this trait is the
//! contract the session facade drives. `SimRobot` is the in-tree backend.

mod sim;
mod types;

use std::time::Duration;

use async_trait::async_trait;

pub use sim::SimRobot;
pub use types::{
    BackpackLights, DISPLAY_FRAME_RATE, DISPLAY_HEIGHT, DISPLAY_WIDTH, DisplayImage, HeadLimits,
    LiftLimits, LightColor,
};

use crate::Result;

/// Connection and control surface of the robot
///
/// One session owns one client for its whole lifetime. Calls are issued
/// strictly sequentially; implementations do not need to be reentrant.
#[async_trait]
pub trait RobotClient: Send {
    /// Establish the transport connection
    async fn connect(&mut self) -> Result<()>;

    /// Tear down the transport connection
    async fn disconnect(&mut self) -> Result<()>;

    /// Enable the on-robot animation controller
    async fn enable_animations(&mut self) -> Result<()>;

    /// Load preloaded animation assets
    async fn load_animations(&mut self) -> Result<()>;

    /// Drive the wheels at the given speeds (mm/s) for `duration`
    ///
    /// Blocks until the motion window has elapsed.
    async fn drive_wheels(&mut self, left: f32, right: f32, duration: Duration) -> Result<()>;

    /// Set the head angle in radians, bounded by [`RobotClient::head_limits`]
    async fn set_head_angle(&mut self, radians: f32) -> Result<()>;

    /// Set the lift height in millimeters, bounded by [`RobotClient::lift_limits`]
    async fn set_lift_height(&mut self, mm: f32) -> Result<()>;

    /// Set the five backpack light segments
    async fn set_backpack_lights(&mut self, lights: BackpackLights) -> Result<()>;

    /// Set the playback volume in integer gain units
    async fn set_volume(&mut self, volume: u32) -> Result<()>;

    /// Transmit an audio buffer (22.05 kHz mono s16) for playback
    async fn play_audio(&mut self, samples: Vec<i16>) -> Result<()>;

    /// Block until the robot signals audio playback completion
    ///
    /// The wait is unbounded; a hung transport hangs the caller.
    async fn wait_for_audio_complete(&mut self) -> Result<()>;

    /// Transmit an image to the face display
    async fn display_image(&mut self, image: &DisplayImage) -> Result<()>;

    /// Play a named preloaded animation
    async fn play_animation(&mut self, name: &str) -> Result<()>;

    /// Robot-reported head angle limits
    fn head_limits(&self) -> HeadLimits;

    /// Robot-reported lift height limits
    fn lift_limits(&self) -> LiftLimits;
}
