use crate::foundation::error::{ReelError, ReelResult};
use crate::foundation::math::even_floor;

/// Integer output frame rate.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(transparent)]
pub struct Fps(u32);

impl Fps {
    /// Frame rate every reference render uses.
    pub const DEFAULT: Fps = Fps(25);

    /// Create a validated frame rate.
    pub fn new(fps: u32) -> ReelResult<Self> {
        if fps == 0 {
            return Err(ReelError::validation("fps must be > 0"));
        }
        Ok(Self(fps))
    }

    /// Frames per second as an integer.
    pub fn get(self) -> u32 {
        self.0
    }

    /// Frames per second as a float.
    pub fn as_f64(self) -> f64 {
        f64::from(self.0)
    }

    /// Whole frames covered by `secs`, floor semantics, at least one frame.
    pub fn frames_for(self, secs: f64) -> u64 {
        if !secs.is_finite() || secs <= 0.0 {
            return 1;
        }
        ((secs * self.as_f64()).floor() as u64).max(1)
    }
}

impl Default for Fps {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Output frame dimensions in pixels.
///
/// Both dimensions are even once constructed through [`Canvas::new`] or [`Canvas::coerced`];
/// the downstream H.264/yuv420p encoder rejects odd sizes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Canvas {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Canvas {
    /// 1280×720, the default render size.
    pub const HD: Canvas = Canvas {
        width: 1280,
        height: 720,
    };

    /// Create a canvas, rejecting dimensions below 2 and rounding odd ones down to even.
    pub fn new(width: u32, height: u32) -> ReelResult<Self> {
        if width < 2 || height < 2 {
            return Err(ReelError::validation("canvas width/height must be >= 2"));
        }
        Ok(Self::coerced(width, height))
    }

    /// Round both dimensions down to even without failing.
    ///
    /// A dimension below 2 has no even size at or under it, so the whole canvas falls back to
    /// [`Canvas::HD`].
    pub fn coerced(width: u32, height: u32) -> Self {
        if width < 2 || height < 2 {
            return Self::HD;
        }
        Self {
            width: even_floor(width),
            height: even_floor(height),
        }
    }

    /// Return `true` when both dimensions are even.
    pub fn is_even(self) -> bool {
        self.width.is_multiple_of(2) && self.height.is_multiple_of(2)
    }

    /// `WxH` size token used by ffmpeg `s=` options.
    pub fn size_token(self) -> String {
        format!("{}x{}", self.width, self.height)
    }
}

impl Default for Canvas {
    fn default() -> Self {
        Self::HD
    }
}

/// Output sizes offered by the authoring UI.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResolutionPreset {
    /// 1280×720 landscape.
    Hd720,
    /// 1920×1080 landscape.
    FullHd1080,
    /// 1080×1080 square.
    Square1080,
    /// 1080×1920 portrait.
    Portrait1080,
}

impl ResolutionPreset {
    /// Every preset, in UI order.
    pub const ALL: [ResolutionPreset; 4] = [
        Self::Hd720,
        Self::FullHd1080,
        Self::Square1080,
        Self::Portrait1080,
    ];

    /// Canvas for this preset.
    pub fn canvas(self) -> Canvas {
        let (width, height) = match self {
            Self::Hd720 => (1280, 720),
            Self::FullHd1080 => (1920, 1080),
            Self::Square1080 => (1080, 1080),
            Self::Portrait1080 => (1080, 1920),
        };
        Canvas { width, height }
    }
}

/// Render parameters shared by a single-scene compile.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct RenderParams {
    /// Clip duration in seconds (usually the narration length).
    pub duration: f64,
    /// Output canvas.
    pub canvas: Canvas,
    /// Output frame rate.
    pub fps: Fps,
}

impl RenderParams {
    /// Seconds used when no narration duration is known yet.
    pub const DEFAULT_DURATION: f64 = 5.0;

    /// Number of output frames for these parameters.
    pub fn frames(&self) -> u64 {
        self.fps.frames_for(self.duration)
    }

    /// Copy with a non-finite or non-positive duration replaced by the default.
    pub fn sanitized(self) -> Self {
        let duration = if self.duration.is_finite() && self.duration > 0.0 {
            self.duration
        } else {
            Self::DEFAULT_DURATION
        };
        Self {
            duration,
            canvas: Canvas::coerced(self.canvas.width, self.canvas.height),
            fps: if self.fps.0 == 0 { Fps::DEFAULT } else { self.fps },
        }
    }
}

impl Default for RenderParams {
    fn default() -> Self {
        Self {
            duration: Self::DEFAULT_DURATION,
            canvas: Canvas::HD,
            fps: Fps::DEFAULT,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
