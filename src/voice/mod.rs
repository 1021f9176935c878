//! Speech synthesis and waveform conversion
//!
//! The synthesizer backends produce an audio file; the transcoder forces it
//! into the robot playback format. Sequencing lives in `session::speech`.

mod transcode;
mod tts;

pub use transcode::{ROBOT_SAMPLE_RATE, Transcoder, load_robot_wav};
pub use tts::{ElevenLabsSynthesizer, PiperSynthesizer, SpeechSynthesizer, from_config};
