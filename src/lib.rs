//! Rover Gateway - Voice and motion gateway for a desk companion robot
//!
//! This library is a convenience facade over a small desk robot:
//! - Motion and lighting commands (wheels, head, lift, backpack lights)
//! - A speech pipeline (TTS synthesis, format conversion, robot playback)
//! - A facial expression player for the robot's face display
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │                  rover CLI / callers                 │
//! └────────────────────┬────────────────────────────────┘
//!                      │
//! ┌────────────────────▼────────────────────────────────┐
//! │                 Session facade                       │
//! │   Motion  │  Speech pipeline  │  Expression player  │
//! └──────┬──────────────┬──────────────────┬────────────┘
//!        │              │                  │
//! ┌──────▼─────┐ ┌──────▼───────┐ ┌────────▼───────────┐
//! │ RobotClient│ │ TTS + ffmpeg │ │    FaceRenderer    │
//! │ (transport)│ │  (external)  │ │ (procedural face)  │
//! └────────────┘ └──────────────┘ └────────────────────┘
//! ```
//!
//! The robot wire protocol, the neural TTS models, and audio resampling
//! stay behind their seams; this crate only sequences them.

pub mod config;
pub mod error;
pub mod face;
pub mod robot;
pub mod session;
pub mod voice;

pub use config::{Config, TtsProvider};
pub use error::{Error, Result};
pub use face::{Expression, FaceRenderer, FrameTimer, ProceduralEyes};
pub use robot::{
    BackpackLights, DisplayImage, HeadLimits, LiftLimits, LightColor, RobotClient, SimRobot,
};
pub use session::{DEFAULT_HOLD, Session};
pub use voice::{
    ElevenLabsSynthesizer, PiperSynthesizer, ROBOT_SAMPLE_RATE, SpeechSynthesizer, Transcoder,
};
