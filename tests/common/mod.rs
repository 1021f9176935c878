//! Shared test utilities
//!
//! A recording fake robot, a stub synthesizer, a recording face renderer,
//! and a fake transcoder script, so the pipelines run without hardware,
//! voice models, or ffmpeg.

#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use rover_gateway::{
    BackpackLights, Config, DisplayImage, Error, Expression, FaceRenderer, HeadLimits, LiftLimits,
    ProceduralEyes, Result, RobotClient, Session, SpeechSynthesizer, Transcoder,
};

/// Head limits reported by the fake robot
pub const TEST_HEAD_LIMITS: HeadLimits = HeadLimits {
    min_radians: -0.44,
    max_radians: 0.78,
};

/// Lift limits reported by the fake robot
pub const TEST_LIFT_LIMITS: LiftLimits = LiftLimits {
    min_mm: 32.0,
    max_mm: 92.0,
};

/// Everything the fake robot saw, in order
#[derive(Debug, Clone, PartialEq)]
pub enum RobotCall {
    Connect,
    Disconnect,
    EnableAnimations,
    LoadAnimations,
    DriveWheels {
        left: f32,
        right: f32,
        duration: Duration,
    },
    SetHeadAngle(f32),
    SetLiftHeight(f32),
    SetBackpackLights(BackpackLights),
    SetVolume(u32),
    PlayAudio {
        samples: usize,
    },
    WaitForAudioComplete,
    DisplayImage {
        width: usize,
        height: usize,
    },
    PlayAnimation(String),
}

pub type CallLog = Arc<Mutex<Vec<RobotCall>>>;

/// Fake robot client that records every call
#[derive(Default)]
pub struct RecordingRobot {
    calls: CallLog,
    pub fail_play_audio: bool,
    pub fail_display_image: bool,
}

impl RecordingRobot {
    /// Create a fake robot and a handle to its call log
    pub fn new() -> (Self, CallLog) {
        let calls = CallLog::default();
        let robot = Self {
            calls: Arc::clone(&calls),
            ..Self::default()
        };
        (robot, calls)
    }

    fn record(&self, call: RobotCall) {
        self.calls.lock().unwrap().push(call);
    }
}

#[async_trait]
impl RobotClient for RecordingRobot {
    async fn connect(&mut self) -> Result<()> {
        self.record(RobotCall::Connect);
        Ok(())
    }

    async fn disconnect(&mut self) -> Result<()> {
        self.record(RobotCall::Disconnect);
        Ok(())
    }

    async fn enable_animations(&mut self) -> Result<()> {
        self.record(RobotCall::EnableAnimations);
        Ok(())
    }

    async fn load_animations(&mut self) -> Result<()> {
        self.record(RobotCall::LoadAnimations);
        Ok(())
    }

    async fn drive_wheels(&mut self, left: f32, right: f32, duration: Duration) -> Result<()> {
        self.record(RobotCall::DriveWheels {
            left,
            right,
            duration,
        });
        Ok(())
    }

    async fn set_head_angle(&mut self, radians: f32) -> Result<()> {
        self.record(RobotCall::SetHeadAngle(radians));
        Ok(())
    }

    async fn set_lift_height(&mut self, mm: f32) -> Result<()> {
        self.record(RobotCall::SetLiftHeight(mm));
        Ok(())
    }

    async fn set_backpack_lights(&mut self, lights: BackpackLights) -> Result<()> {
        self.record(RobotCall::SetBackpackLights(lights));
        Ok(())
    }

    async fn set_volume(&mut self, volume: u32) -> Result<()> {
        self.record(RobotCall::SetVolume(volume));
        Ok(())
    }

    async fn play_audio(&mut self, samples: Vec<i16>) -> Result<()> {
        if self.fail_play_audio {
            return Err(Error::Robot("transmit failed".to_string()));
        }
        self.record(RobotCall::PlayAudio {
            samples: samples.len(),
        });
        Ok(())
    }

    async fn wait_for_audio_complete(&mut self) -> Result<()> {
        self.record(RobotCall::WaitForAudioComplete);
        Ok(())
    }

    async fn display_image(&mut self, image: &DisplayImage) -> Result<()> {
        if self.fail_display_image {
            return Err(Error::Robot("display failed".to_string()));
        }
        self.record(RobotCall::DisplayImage {
            width: image.width(),
            height: image.height(),
        });
        Ok(())
    }

    async fn play_animation(&mut self, name: &str) -> Result<()> {
        self.record(RobotCall::PlayAnimation(name.to_string()));
        Ok(())
    }

    fn head_limits(&self) -> HeadLimits {
        TEST_HEAD_LIMITS
    }

    fn lift_limits(&self) -> LiftLimits {
        TEST_LIFT_LIMITS
    }
}

/// Stub synthesizer writing a small robot-format WAV, or failing
pub struct StubSynthesizer {
    fail: bool,
}

impl StubSynthesizer {
    pub fn ok() -> Self {
        Self { fail: false }
    }

    pub fn failing() -> Self {
        Self { fail: true }
    }
}

#[async_trait]
impl SpeechSynthesizer for StubSynthesizer {
    async fn synthesize_to_file(&self, _text: &str, output: &Path) -> Result<()> {
        if self.fail {
            return Err(Error::Tts("stub synthesizer failure".to_string()));
        }

        let spec = hound::WavSpec {
            channels: 1,
            sample_rate: 22_050,
            bits_per_sample: 16,
            sample_format: hound::SampleFormat::Int,
        };
        let mut writer =
            hound::WavWriter::create(output, spec).map_err(|e| Error::Audio(e.to_string()))?;
        for _ in 0..2_205 {
            writer
                .write_sample(0i16)
                .map_err(|e| Error::Audio(e.to_string()))?;
        }
        writer.finalize().map_err(|e| Error::Audio(e.to_string()))?;
        Ok(())
    }
}

/// Face renderer that records interpolation passes and yields blank frames
pub struct RecordingRenderer {
    passes: Arc<Mutex<Vec<(Expression, Expression)>>>,
}

pub type PassLog = Arc<Mutex<Vec<(Expression, Expression)>>>;

impl RecordingRenderer {
    pub fn new() -> (Self, PassLog) {
        let passes = PassLog::default();
        let renderer = Self {
            passes: Arc::clone(&passes),
        };
        (renderer, passes)
    }
}

impl FaceRenderer for RecordingRenderer {
    fn interpolate(
        &self,
        from: Expression,
        to: Expression,
        steps: u32,
    ) -> Box<dyn Iterator<Item = DisplayImage> + Send> {
        self.passes.lock().unwrap().push((from, to));
        Box::new((0..steps).map(|_| DisplayImage::new(128, 64, vec![0; 128 * 64])))
    }
}

/// Write a fake ffmpeg that copies its input to its output path
///
/// Mirrors the argument layout the transcoder uses:
/// `-y -i <in> -ar 22050 -ac 1 -sample_fmt s16 <out>`
#[cfg(unix)]
pub fn stub_transcoder(dir: &Path) -> PathBuf {
    use std::os::unix::fs::PermissionsExt;

    let path = dir.join("fake-ffmpeg");
    std::fs::write(&path, "#!/bin/sh\nexec cp \"$3\" \"${10}\"\n").unwrap();

    let mut perms = std::fs::metadata(&path).unwrap().permissions();
    perms.set_mode(0o755);
    std::fs::set_permissions(&path, perms).unwrap();
    path
}

/// Config pointing temp files at a test-owned directory
pub fn test_config(temp_dir: &Path) -> Config {
    let mut config = Config::default();
    config.voice.temp_dir = Some(temp_dir.to_path_buf());
    config
}

/// Assemble a session over the fake robot with explicit collaborators
pub fn build_session(
    robot: RecordingRobot,
    synthesizer: Box<dyn SpeechSynthesizer>,
    transcoder_program: PathBuf,
    temp_dir: &Path,
) -> Session<RecordingRobot> {
    Session::from_parts(
        robot,
        synthesizer,
        Box::new(ProceduralEyes::new()),
        Transcoder::new(transcoder_program),
        &test_config(temp_dir),
    )
}

/// Count the audio files left in the temp directory (the stub transcoder
/// script itself does not count)
pub fn leftover_audio_files(dir: &Path) -> usize {
    std::fs::read_dir(dir)
        .unwrap()
        .filter_map(|entry| entry.ok())
        .filter(|entry| {
            entry
                .path()
                .extension()
                .is_some_and(|ext| ext == "wav" || ext == "mp3")
        })
        .count()
}
