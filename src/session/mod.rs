//! Robot session facade
//!
//! [`Session`] owns the robot client for its lifetime and exposes the
//! command surface: motion and lighting, the speech pipeline, and the
//! expression player. All operations are strictly sequential.

mod expression;
mod motion;
mod speech;

use std::path::PathBuf;
use std::time::Duration;

use crate::config::Config;
use crate::face::{FaceRenderer, ProceduralEyes};
use crate::robot::RobotClient;
use crate::voice::{self, SpeechSynthesizer, Transcoder};
use crate::{Error, Result};

pub use expression::DEFAULT_HOLD;

/// Pacing delay after `close()`
const SHUTDOWN_DELAY: Duration = Duration::from_secs(2);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SessionState {
    Created,
    Open,
    Closed,
}

/// An owned session with one robot
///
/// `open()` must complete before any command; `close()` is one-shot and
/// there is no reconnect.
pub struct Session<C: RobotClient> {
    client: C,
    synthesizer: Box<dyn SpeechSynthesizer>,
    renderer: Box<dyn FaceRenderer>,
    transcoder: Transcoder,
    temp_dir: PathBuf,
    volume: u32,
    action_delay: Duration,
    state: SessionState,
}

impl<C: RobotClient> Session<C> {
    /// Create a session over `client` with the configured synthesizer,
    /// the default face renderer, and an `ffmpeg` transcoder
    ///
    /// # Errors
    ///
    /// Returns error if the configured synthesizer cannot be built
    pub fn new(client: C, config: &Config) -> Result<Self> {
        let synthesizer = voice::from_config(config)?;
        Ok(Self::from_parts(
            client,
            synthesizer,
            Box::new(ProceduralEyes::new()),
            Transcoder::new(config.voice.ffmpeg_path.clone()),
            config,
        ))
    }

    /// Create a session from explicit collaborators
    #[must_use]
    pub fn from_parts(
        client: C,
        synthesizer: Box<dyn SpeechSynthesizer>,
        renderer: Box<dyn FaceRenderer>,
        transcoder: Transcoder,
        config: &Config,
    ) -> Self {
        Self {
            client,
            synthesizer,
            renderer,
            transcoder,
            temp_dir: config.temp_dir(),
            volume: config.robot.volume,
            action_delay: config.action_delay(),
            state: SessionState::Created,
        }
    }

    /// Connect to the robot, enable animations, and load animation assets
    ///
    /// # Errors
    ///
    /// Returns error if the session was already opened, or if any of the
    /// connection steps fail
    pub async fn open(&mut self) -> Result<()> {
        match self.state {
            SessionState::Created => {}
            SessionState::Open => {
                return Err(Error::Session("session already open".to_string()));
            }
            SessionState::Closed => {
                return Err(Error::Session("session was closed".to_string()));
            }
        }

        self.client.connect().await?;
        self.client.enable_animations().await?;
        self.client.load_animations().await?;
        self.state = SessionState::Open;

        tracing::info!("robot connected and animations loaded");
        Ok(())
    }

    /// Disconnect and release the transport
    ///
    /// # Errors
    ///
    /// Returns [`Error::SessionNotOpen`] if the session is not open
    pub async fn close(&mut self) -> Result<()> {
        self.ensure_open()?;
        self.client.disconnect().await?;
        self.state = SessionState::Closed;

        tracing::info!("robot disconnected and stopped");
        self.pace(Some(SHUTDOWN_DELAY)).await;
        Ok(())
    }

    /// Deterministic precondition check for every command
    fn ensure_open(&self) -> Result<()> {
        if self.state == SessionState::Open {
            Ok(())
        } else {
            Err(Error::SessionNotOpen)
        }
    }

    /// Block for a fixed delay, or the configured default
    async fn pace(&self, delay: Option<Duration>) {
        tokio::time::sleep(delay.unwrap_or(self.action_delay)).await;
    }
}
