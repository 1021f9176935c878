//! Facial expressions for the robot's display
//!
//! The expression player in `session::expression` sequences frames; the
//! rendering itself sits behind [`FaceRenderer`].

mod render;
mod timer;

use std::fmt;
use std::str::FromStr;

pub use render::{FaceRenderer, ProceduralEyes};
pub use timer::FrameTimer;

use crate::Error;

/// A named facial expression
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Expression {
    /// Resting face, the start and end of every transition
    Neutral,
    /// Anger
    Anger,
    /// Sadness
    Sadness,
    /// Happiness
    Happiness,
    /// Surprise
    Surprise,
    /// Disgust
    Disgust,
    /// Fear
    Fear,
    /// Guilt
    Guilt,
    /// Disappointment
    Disappointment,
    /// Embarrassment
    Embarrassment,
    /// Annoyance
    Annoyance,
    /// Tiredness
    Tiredness,
    /// Excitement
    Excitement,
    /// Amazement
    Amazement,
    /// Confusion
    Confusion,
    /// Boredom
    Boredom,
    /// Fury
    Fury,
    /// Suspicion
    Suspicion,
    /// Rejection
    Rejection,
}

impl Expression {
    /// Every expression, neutral included
    pub const ALL: [Self; 19] = [
        Self::Neutral,
        Self::Anger,
        Self::Sadness,
        Self::Happiness,
        Self::Surprise,
        Self::Disgust,
        Self::Fear,
        Self::Guilt,
        Self::Disappointment,
        Self::Embarrassment,
        Self::Annoyance,
        Self::Tiredness,
        Self::Excitement,
        Self::Amazement,
        Self::Confusion,
        Self::Boredom,
        Self::Fury,
        Self::Suspicion,
        Self::Rejection,
    ];

    /// Lowercase name used on the CLI and in logs
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Neutral => "neutral",
            Self::Anger => "anger",
            Self::Sadness => "sadness",
            Self::Happiness => "happiness",
            Self::Surprise => "surprise",
            Self::Disgust => "disgust",
            Self::Fear => "fear",
            Self::Guilt => "guilt",
            Self::Disappointment => "disappointment",
            Self::Embarrassment => "embarrassment",
            Self::Annoyance => "annoyance",
            Self::Tiredness => "tiredness",
            Self::Excitement => "excitement",
            Self::Amazement => "amazement",
            Self::Confusion => "confusion",
            Self::Boredom => "boredom",
            Self::Fury => "fury",
            Self::Suspicion => "suspicion",
            Self::Rejection => "rejection",
        }
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Expression {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|e| e.name() == wanted)
            .ok_or_else(|| Error::Config(format!("unknown expression: {s}")))
    }
}
