//! Text-to-speech synthesis backends

use std::path::{Path, PathBuf};
use std::process::Stdio;

use async_trait::async_trait;
use tokio::io::AsyncWriteExt;
use tokio::process::Command;

use crate::config::{Config, TtsProvider};
use crate::{Error, Result};

/// ElevenLabs voice stability setting
const ELEVENLABS_STABILITY: f32 = 0.4;

/// ElevenLabs similarity boost setting
const ELEVENLABS_SIMILARITY_BOOST: f32 = 0.75;

/// Synthesizes speech from text into an audio file
///
/// Implementations may produce any container `ffmpeg` understands; the
/// pipeline transcodes to the robot format afterward.
#[async_trait]
pub trait SpeechSynthesizer: Send + Sync {
    /// Synthesize `text` and write the waveform to `output`
    async fn synthesize_to_file(&self, text: &str, output: &Path) -> Result<()>;
}

/// Build the synthesizer selected by configuration
///
/// # Errors
///
/// Returns error if the selected backend is missing required settings
pub fn from_config(config: &Config) -> Result<Box<dyn SpeechSynthesizer>> {
    match config.voice.provider {
        TtsProvider::Piper => Ok(Box::new(PiperSynthesizer::new(
            config.voice.piper_binary.clone(),
            config.voice.piper_voice.clone(),
        ))),
        TtsProvider::ElevenLabs => {
            let api_key = config
                .api_keys
                .elevenlabs
                .clone()
                .unwrap_or_default();
            Ok(Box::new(ElevenLabsSynthesizer::new(
                api_key,
                config.voice.elevenlabs_voice_id.clone(),
                config.voice.elevenlabs_model.clone(),
            )?))
        }
    }
}

/// Offline neural TTS via a local `piper` process
///
/// No network dependency; the voice model is a local file.
pub struct PiperSynthesizer {
    binary: PathBuf,
    voice_model: PathBuf,
}

impl PiperSynthesizer {
    /// Create a piper-backed synthesizer
    #[must_use]
    pub fn new(binary: PathBuf, voice_model: PathBuf) -> Self {
        Self {
            binary,
            voice_model,
        }
    }
}

#[async_trait]
impl SpeechSynthesizer for PiperSynthesizer {
    async fn synthesize_to_file(&self, text: &str, output: &Path) -> Result<()> {
        tracing::debug!(model = %self.voice_model.display(), "synthesizing speech with piper");

        let mut child = Command::new(&self.binary)
            .arg("--model")
            .arg(&self.voice_model)
            .arg("--output_file")
            .arg(output)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| Error::Tts(format!("failed to spawn piper: {e}")))?;

        if let Some(mut stdin) = child.stdin.take() {
            stdin.write_all(text.as_bytes()).await?;
        }

        let result = child.wait_with_output().await?;
        if !result.status.success() {
            let stderr = String::from_utf8_lossy(&result.stderr);
            return Err(Error::Tts(format!(
                "piper exited with {}: {}",
                result.status,
                stderr.trim()
            )));
        }

        tracing::debug!(path = %output.display(), "piper waveform written");
        Ok(())
    }
}

/// `ElevenLabs` cloud TTS
///
/// Produces MP3 bytes; the downstream transcode converts to the robot WAV.
pub struct ElevenLabsSynthesizer {
    client: reqwest::Client,
    api_key: String,
    voice_id: String,
    model: String,
}

#[derive(serde::Serialize)]
struct VoiceSettings {
    stability: f32,
    similarity_boost: f32,
}

#[derive(serde::Serialize)]
struct ElevenLabsRequest<'a> {
    text: &'a str,
    model_id: &'a str,
    voice_settings: VoiceSettings,
}

impl ElevenLabsSynthesizer {
    /// Create an `ElevenLabs`-backed synthesizer
    ///
    /// # Errors
    ///
    /// Returns error if the API key is missing
    pub fn new(api_key: String, voice_id: String, model: String) -> Result<Self> {
        if api_key.is_empty() {
            return Err(Error::Config(
                "ElevenLabs API key required for TTS".to_string(),
            ));
        }

        Ok(Self {
            client: reqwest::Client::new(),
            api_key,
            voice_id,
            model,
        })
    }

    fn request_body<'a>(&'a self, text: &'a str) -> ElevenLabsRequest<'a> {
        ElevenLabsRequest {
            text,
            model_id: &self.model,
            voice_settings: VoiceSettings {
                stability: ELEVENLABS_STABILITY,
                similarity_boost: ELEVENLABS_SIMILARITY_BOOST,
            },
        }
    }
}

#[async_trait]
impl SpeechSynthesizer for ElevenLabsSynthesizer {
    async fn synthesize_to_file(&self, text: &str, output: &Path) -> Result<()> {
        let url = format!(
            "https://api.elevenlabs.io/v1/text-to-speech/{}",
            self.voice_id
        );

        let response = self
            .client
            .post(&url)
            .header("xi-api-key", &self.api_key)
            .header("Content-Type", "application/json")
            .json(&self.request_body(text))
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(Error::Tts(format!("ElevenLabs TTS error {status}: {body}")));
        }

        let audio = response.bytes().await?;
        tokio::fs::write(output, &audio).await?;

        tracing::debug!(
            path = %output.display(),
            bytes = audio.len(),
            "ElevenLabs audio written"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn elevenlabs_request_carries_voice_settings() {
        let synth = ElevenLabsSynthesizer::new(
            "key".to_string(),
            "voice".to_string(),
            "eleven_monolingual_v1".to_string(),
        )
        .unwrap();

        let body = serde_json::to_value(synth.request_body("hello")).unwrap();
        assert_eq!(body["text"], "hello");
        assert_eq!(body["model_id"], "eleven_monolingual_v1");

        let settings = &body["voice_settings"];
        let stability = settings["stability"].as_f64().unwrap();
        let similarity = settings["similarity_boost"].as_f64().unwrap();
        assert!((stability - 0.4).abs() < 1e-6);
        assert!((similarity - 0.75).abs() < 1e-6);
    }

    #[test]
    fn elevenlabs_requires_api_key() {
        let result =
            ElevenLabsSynthesizer::new(String::new(), "voice".to_string(), "model".to_string());
        assert!(matches!(result, Err(Error::Config(_))));
    }
}
