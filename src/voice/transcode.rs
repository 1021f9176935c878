//! Waveform conversion to the robot playback format

use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process::Stdio;

use tokio::process::Command;

use crate::{Error, Result};

/// Sample rate the robot plays audio at
pub const ROBOT_SAMPLE_RATE: u32 = 22_050;

/// External transcoding process wrapper
///
/// Forces 22.05 kHz / mono / signed 16-bit PCM output regardless of what the
/// synthesizer produced (WAV or MP3).
#[derive(Debug, Clone)]
pub struct Transcoder {
    program: PathBuf,
}

impl Transcoder {
    /// Create a transcoder invoking the given program (normally `ffmpeg`)
    #[must_use]
    pub fn new(program: PathBuf) -> Self {
        Self { program }
    }

    /// Arguments forcing the robot playback format
    fn args(input: &Path, output: &Path) -> Vec<OsString> {
        vec![
            OsString::from("-y"),
            OsString::from("-i"),
            input.into(),
            OsString::from("-ar"),
            OsString::from(ROBOT_SAMPLE_RATE.to_string()),
            OsString::from("-ac"),
            OsString::from("1"),
            OsString::from("-sample_fmt"),
            OsString::from("s16"),
            output.into(),
        ]
    }

    /// Convert `input` into a robot-format WAV at `output`
    ///
    /// # Errors
    ///
    /// Returns error if the process cannot be spawned or exits non-zero;
    /// the process stderr is carried in the error message
    pub async fn transcode(&self, input: &Path, output: &Path) -> Result<()> {
        tracing::debug!(
            input = %input.display(),
            output = %output.display(),
            "converting waveform to robot format"
        );

        let result = Command::new(&self.program)
            .args(Self::args(input, output))
            .stdout(Stdio::null())
            .stderr(Stdio::piped())
            .output()
            .await
            .map_err(|e| {
                Error::Transcode(format!(
                    "failed to run {}: {e}",
                    self.program.display()
                ))
            })?;

        if !result.status.success() {
            let stderr = String::from_utf8_lossy(&result.stderr);
            return Err(Error::Transcode(format!(
                "{} exited with {}: {}",
                self.program.display(),
                result.status,
                stderr.trim()
            )));
        }

        Ok(())
    }
}

/// Read a converted WAV and return the sample buffer sent to the robot
///
/// # Errors
///
/// Returns error if the file cannot be read or is not 22.05 kHz mono s16
pub fn load_robot_wav(path: &Path) -> Result<Vec<i16>> {
    let mut reader =
        hound::WavReader::open(path).map_err(|e| Error::Audio(e.to_string()))?;

    let spec = reader.spec();
    if spec.sample_rate != ROBOT_SAMPLE_RATE
        || spec.channels != 1
        || spec.bits_per_sample != 16
        || spec.sample_format != hound::SampleFormat::Int
    {
        return Err(Error::Audio(format!(
            "unexpected waveform format: {} Hz, {} ch, {} bit",
            spec.sample_rate, spec.channels, spec.bits_per_sample
        )));
    }

    reader
        .samples::<i16>()
        .collect::<std::result::Result<Vec<_>, _>>()
        .map_err(|e| Error::Audio(e.to_string()))
}
