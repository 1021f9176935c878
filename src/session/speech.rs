//! The speech pipeline
//!
//! Text is synthesized to a waveform, converted to the robot playback
//! format by an external process, transmitted, and played to completion.
//! Both temporary files are removed on every exit path; the pacing delay
//! runs regardless of outcome.

use std::path::Path;
use std::time::Duration;

use uuid::Uuid;

use super::Session;
use crate::robot::RobotClient;
use crate::voice::load_robot_wav;
use crate::Result;

/// Pacing delay after a speech request
const SPEECH_DELAY: Duration = Duration::from_secs(2);

impl<C: RobotClient> Session<C> {
    /// Speak `text` on the robot
    ///
    /// Temporary file names carry a per-call request id, so sequential
    /// calls never collide on paths.
    ///
    /// # Errors
    ///
    /// Returns error if the session is not open, or with the failing
    /// stage's cause (synthesis, transcode, or playback). Temporary files
    /// are cleaned up before the error is returned.
    pub async fn say(&mut self, text: &str) -> Result<()> {
        self.ensure_open()?;
        tracing::info!(text, "speaking");

        let request_id = Uuid::new_v4();
        let raw_path = self.temp_dir.join(format!("rover-say-{request_id}-raw.wav"));
        let converted_path = self.temp_dir.join(format!("rover-say-{request_id}.wav"));

        let result = self.speak_once(text, &raw_path, &converted_path).await;
        if let Err(e) = &result {
            tracing::error!(error = %e, "speech pipeline failed");
        }

        for path in [&raw_path, &converted_path] {
            if path.exists() {
                if let Err(e) = std::fs::remove_file(path) {
                    tracing::warn!(path = %path.display(), error = %e, "temp file not removed");
                }
            }
        }
        tracing::debug!("cleaned up temporary audio files");

        self.pace(Some(SPEECH_DELAY)).await;
        result
    }

    /// Synthesize, transcode, transmit, and wait for playback
    async fn speak_once(&mut self, text: &str, raw: &Path, converted: &Path) -> Result<()> {
        self.synthesizer.synthesize_to_file(text, raw).await?;
        tracing::debug!(path = %raw.display(), "waveform synthesized");

        self.transcoder.transcode(raw, converted).await?;

        let samples = load_robot_wav(converted)?;
        tracing::debug!(samples = samples.len(), "playing on robot");

        self.client.set_volume(self.volume).await?;
        self.client.play_audio(samples).await?;
        self.client.wait_for_audio_complete().await?;
        Ok(())
    }
}
