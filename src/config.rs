//! Configuration management for the Rover gateway

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;

use crate::Result;

/// Rover gateway configuration
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Robot pacing and playback settings
    pub robot: RobotConfig,

    /// Speech synthesis settings
    pub voice: VoiceConfig,

    /// API keys, loaded from the environment only
    #[serde(skip)]
    pub api_keys: ApiKeys,
}

/// Robot pacing and playback settings
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RobotConfig {
    /// Default pacing delay between actions, seconds
    pub action_delay_secs: f32,

    /// Playback volume in integer gain units
    pub volume: u32,
}

impl Default for RobotConfig {
    fn default() -> Self {
        Self {
            action_delay_secs: 1.2,
            volume: 50_000,
        }
    }
}

/// Which speech synthesizer backend to use
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TtsProvider {
    /// Offline neural TTS via a local `piper` process
    #[default]
    Piper,

    /// `ElevenLabs` cloud TTS (requires `ELEVENLABS_API_KEY`)
    ElevenLabs,
}

/// Speech synthesis settings
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct VoiceConfig {
    /// Synthesizer backend
    pub provider: TtsProvider,

    /// Path to the `piper` binary
    pub piper_binary: PathBuf,

    /// Path to the piper voice model (.onnx)
    pub piper_voice: PathBuf,

    /// `ElevenLabs` voice identifier
    pub elevenlabs_voice_id: String,

    /// `ElevenLabs` model identifier
    pub elevenlabs_model: String,

    /// Path to the `ffmpeg` binary used for format conversion
    pub ffmpeg_path: PathBuf,

    /// Directory for temporary audio files; defaults to the OS temp dir
    pub temp_dir: Option<PathBuf>,
}

impl Default for VoiceConfig {
    fn default() -> Self {
        Self {
            provider: TtsProvider::default(),
            piper_binary: PathBuf::from("piper"),
            piper_voice: PathBuf::from("en_US-lessac-medium.onnx"),
            elevenlabs_voice_id: String::new(),
            elevenlabs_model: "eleven_monolingual_v1".to_string(),
            ffmpeg_path: PathBuf::from("ffmpeg"),
            temp_dir: None,
        }
    }
}

/// API keys for external services
#[derive(Debug, Clone, Default)]
pub struct ApiKeys {
    /// `ElevenLabs` API key (cloud TTS)
    pub elevenlabs: Option<String>,
}

impl Config {
    /// Load configuration from an explicit path, or the default location
    ///
    /// A missing file yields the built-in defaults. API keys come from the
    /// environment, never from the file.
    ///
    /// # Errors
    ///
    /// Returns error if the file exists but cannot be read or parsed
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path = path.map_or_else(default_config_path, |p| Some(p.to_path_buf()));

        let mut config = match path {
            Some(p) if p.exists() => {
                let raw = std::fs::read_to_string(&p)?;
                let config: Self = toml::from_str(&raw)?;
                tracing::debug!(path = %p.display(), "loaded configuration");
                config
            }
            _ => Self::default(),
        };

        config.api_keys.elevenlabs = std::env::var("ELEVENLABS_API_KEY").ok();
        Ok(config)
    }

    /// Default pacing delay between actions
    #[must_use]
    pub fn action_delay(&self) -> Duration {
        Duration::from_secs_f32(self.robot.action_delay_secs)
    }

    /// Directory for temporary audio files
    #[must_use]
    pub fn temp_dir(&self) -> PathBuf {
        self.voice
            .temp_dir
            .clone()
            .unwrap_or_else(std::env::temp_dir)
    }
}

/// Default config file location under the platform config dir
///
/// `~/.config/rover/rover.toml` on Linux
fn default_config_path() -> Option<PathBuf> {
    directories::ProjectDirs::from("dev", "rover", "rover")
        .map(|dirs| dirs.config_dir().join("rover.toml"))
}
