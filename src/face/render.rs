//! Procedural face rendering
//!
//! A compact parametric-eyes renderer stands in for the vendor's procedural
//! face library. The player only depends on the [`FaceRenderer`] contract:
//! a finite, lazily produced frame sequence between two expressions.

use super::Expression;
use crate::robot::{DISPLAY_HEIGHT, DISPLAY_WIDTH, DisplayImage};

/// Produces interpolated face frames between two expressions
pub trait FaceRenderer: Send + Sync {
    /// Render `steps` frames morphing `from` into `to`
    ///
    /// The first frame shows `from`, the last shows `to`.
    fn interpolate(
        &self,
        from: Expression,
        to: Expression,
        steps: u32,
    ) -> Box<dyn Iterator<Item = DisplayImage> + Send>;
}

/// Pose of the two eyes, all fields in normalized units
#[derive(Debug, Clone, Copy, PartialEq)]
struct FaceParams {
    /// Eye height as a fraction of the maximum (0 closed, 1 wide open)
    openness: f32,
    /// Upper lid slant; positive tips the inner corners down (angry)
    tilt: f32,
    /// Vertical placement of the eyes (-1 low, 1 high)
    raise: f32,
}

impl FaceParams {
    const fn new(openness: f32, tilt: f32, raise: f32) -> Self {
        Self {
            openness,
            tilt,
            raise,
        }
    }

    fn for_expression(expression: Expression) -> Self {
        match expression {
            Expression::Neutral => Self::new(0.6, 0.0, 0.0),
            Expression::Anger => Self::new(0.45, 0.7, 0.1),
            Expression::Sadness => Self::new(0.4, -0.6, -0.2),
            Expression::Happiness => Self::new(0.75, -0.15, 0.25),
            Expression::Surprise => Self::new(1.0, 0.0, 0.3),
            Expression::Disgust => Self::new(0.35, 0.4, 0.0),
            Expression::Fear => Self::new(0.9, -0.3, 0.2),
            Expression::Guilt => Self::new(0.3, -0.5, -0.4),
            Expression::Disappointment => Self::new(0.35, -0.4, -0.25),
            Expression::Embarrassment => Self::new(0.4, -0.3, -0.3),
            Expression::Annoyance => Self::new(0.4, 0.5, 0.0),
            Expression::Tiredness => Self::new(0.2, -0.1, -0.35),
            Expression::Excitement => Self::new(0.95, 0.1, 0.35),
            Expression::Amazement => Self::new(1.0, 0.05, 0.25),
            Expression::Confusion => Self::new(0.55, 0.25, 0.05),
            Expression::Boredom => Self::new(0.25, 0.0, -0.3),
            Expression::Fury => Self::new(0.5, 0.9, 0.15),
            Expression::Suspicion => Self::new(0.3, 0.35, -0.05),
            Expression::Rejection => Self::new(0.3, -0.55, -0.35),
        }
    }

    fn lerp(a: Self, b: Self, alpha: f32) -> Self {
        // Exact endpoints; x + (y - x) does not round-trip in f32
        if alpha <= 0.0 {
            return a;
        }
        if alpha >= 1.0 {
            return b;
        }
        let mix = |x: f32, y: f32| x + (y - x) * alpha;
        Self {
            openness: mix(a.openness, b.openness),
            tilt: mix(a.tilt, b.tilt),
            raise: mix(a.raise, b.raise),
        }
    }
}

/// Eye geometry, pixels
const EYE_WIDTH: usize = 28;
const EYE_MAX_HEIGHT: f32 = 44.0;
const LEFT_EYE_CENTER_X: usize = 40;
const RIGHT_EYE_CENTER_X: usize = 88;
const TILT_DEPTH: f32 = 10.0;

/// Default in-tree renderer: two parametric eyes on a black field
#[derive(Debug, Clone, Copy, Default)]
pub struct ProceduralEyes;

impl ProceduralEyes {
    /// Create the default renderer
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    fn render(params: &FaceParams) -> DisplayImage {
        let mut pixels = vec![0u8; DISPLAY_WIDTH * DISPLAY_HEIGHT];

        let height = (params.openness.clamp(0.0, 1.0) * EYE_MAX_HEIGHT).max(2.0);
        let center_y =
            (DISPLAY_HEIGHT as f32) / 2.0 - params.raise * (DISPLAY_HEIGHT as f32) / 4.0;

        // mirror = -1 for the left eye so the tilt is symmetric about the nose
        for (center_x, mirror) in [(LEFT_EYE_CENTER_X, -1.0), (RIGHT_EYE_CENTER_X, 1.0)] {
            for column in 0..EYE_WIDTH {
                let x = center_x + column - EYE_WIDTH / 2;
                if x >= DISPLAY_WIDTH {
                    continue;
                }

                // Position across the eye, -1 at the outer edge, 1 at the inner
                let across =
                    mirror * (column as f32 - EYE_WIDTH as f32 / 2.0) / (EYE_WIDTH as f32 / 2.0);
                let lid_drop = params.tilt * across * TILT_DEPTH;

                let top = (center_y - height / 2.0 + lid_drop).max(0.0) as usize;
                let bottom =
                    ((center_y + height / 2.0) as usize).min(DISPLAY_HEIGHT.saturating_sub(1));

                for y in top..=bottom {
                    pixels[y * DISPLAY_WIDTH + x] = 255;
                }
            }
        }

        DisplayImage::new(DISPLAY_WIDTH, DISPLAY_HEIGHT, pixels)
    }
}

impl FaceRenderer for ProceduralEyes {
    fn interpolate(
        &self,
        from: Expression,
        to: Expression,
        steps: u32,
    ) -> Box<dyn Iterator<Item = DisplayImage> + Send> {
        let a = FaceParams::for_expression(from);
        let b = FaceParams::for_expression(to);

        Box::new((0..steps).map(move |i| {
            let alpha = if steps <= 1 {
                1.0
            } else {
                i as f32 / (steps - 1) as f32
            };
            Self::render(&FaceParams::lerp(a, b, alpha))
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interpolate_yields_exactly_steps_frames() {
        let renderer = ProceduralEyes::new();
        let frames: Vec<_> = renderer
            .interpolate(Expression::Neutral, Expression::Happiness, 10)
            .collect();
        assert_eq!(frames.len(), 10);
    }

    #[test]
    fn endpoints_match_pure_renders() {
        let renderer = ProceduralEyes::new();
        let frames: Vec<_> = renderer
            .interpolate(Expression::Neutral, Expression::Anger, 5)
            .collect();

        let neutral = ProceduralEyes::render(&FaceParams::for_expression(Expression::Neutral));
        let anger = ProceduralEyes::render(&FaceParams::for_expression(Expression::Anger));
        assert_eq!(frames[0], neutral);
        assert_eq!(frames[4], anger);
    }

    #[test]
    fn frames_are_full_display_size() {
        let renderer = ProceduralEyes::new();
        let frame = renderer
            .interpolate(Expression::Neutral, Expression::Surprise, 1)
            .next()
            .unwrap();
        assert_eq!(frame.width(), DISPLAY_WIDTH);
        assert_eq!(frame.height(), DISPLAY_HEIGHT);
        // Eyes light up at least some pixels
        assert!(frame.pixels().iter().any(|&p| p > 0));
    }

    #[test]
    fn every_expression_renders() {
        for expression in Expression::ALL {
            let frame = ProceduralEyes::render(&FaceParams::for_expression(expression));
            assert!(frame.pixels().iter().any(|&p| p > 0), "{expression} is blank");
        }
    }
}
