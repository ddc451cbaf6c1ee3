use crate::animation::raw::RawAnimationSpec;
use crate::animation::spec::AnimationSpec;
use crate::foundation::core::{Canvas, Fps};
use crate::foundation::diagnostic::{Diagnostic, DiagnosticKind, Outcome};
use crate::foundation::error::ReelResult;
use crate::foundation::math::{finite, fmt_num};

/// Most segments a timeline may hold.
pub const MAX_SEGMENTS: usize = 10;
/// Shortest segment, seconds.
pub const MIN_SEGMENT_SECS: f64 = 0.1;
/// Shortest transition, seconds.
pub const MIN_TRANSITION_SECS: f64 = 0.1;
/// Longest transition, seconds.
pub const MAX_TRANSITION_SECS: f64 = 2.0;
/// Transition length used when a name is given without a duration.
pub const DEFAULT_TRANSITION_SECS: f64 = 0.5;
/// Largest segment-sum vs. total difference that is not reported.
pub const DURATION_TOLERANCE_SECS: f64 = 0.05;

/// xfade transition names.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
#[allow(missing_docs)]
pub enum TransitionKind {
    Fade,
    FadeBlack,
    FadeWhite,
    WipeLeft,
    WipeRight,
    WipeUp,
    WipeDown,
    SlideLeft,
    SlideRight,
    SlideUp,
    SlideDown,
    CircleCrop,
    CircleOpen,
    CircleClose,
    Radial,
    RectCrop,
    Distance,
    HBlur,
    VBlur,
    SmoothLeft,
    SmoothRight,
    SmoothUp,
    SmoothDown,
    Dissolve,
    CoverLeft,
    CoverRight,
    CoverUp,
    CoverDown,
    RevealLeft,
    RevealRight,
    RevealUp,
    RevealDown,
}

impl TransitionKind {
    /// Every kind paired with its xfade name.
    pub const ALL: [(TransitionKind, &'static str); 32] = [
        (Self::Fade, "fade"),
        (Self::FadeBlack, "fadeblack"),
        (Self::FadeWhite, "fadewhite"),
        (Self::WipeLeft, "wipeleft"),
        (Self::WipeRight, "wiperight"),
        (Self::WipeUp, "wipeup"),
        (Self::WipeDown, "wipedown"),
        (Self::SlideLeft, "slideleft"),
        (Self::SlideRight, "slideright"),
        (Self::SlideUp, "slideup"),
        (Self::SlideDown, "slidedown"),
        (Self::CircleCrop, "circlecrop"),
        (Self::CircleOpen, "circleopen"),
        (Self::CircleClose, "circleclose"),
        (Self::Radial, "radial"),
        (Self::RectCrop, "rectcrop"),
        (Self::Distance, "distance"),
        (Self::HBlur, "hblur"),
        (Self::VBlur, "vblur"),
        (Self::SmoothLeft, "smoothleft"),
        (Self::SmoothRight, "smoothright"),
        (Self::SmoothUp, "smoothup"),
        (Self::SmoothDown, "smoothdown"),
        (Self::Dissolve, "dissolve"),
        (Self::CoverLeft, "coverleft"),
        (Self::CoverRight, "coverright"),
        (Self::CoverUp, "coverup"),
        (Self::CoverDown, "coverdown"),
        (Self::RevealLeft, "revealleft"),
        (Self::RevealRight, "revealright"),
        (Self::RevealUp, "revealup"),
        (Self::RevealDown, "revealdown"),
    ];

    /// Name passed to `xfade=transition=`.
    pub fn xfade_name(self) -> &'static str {
        Self::ALL
            .iter()
            .find(|(k, _)| *k == self)
            .map(|(_, name)| *name)
            .unwrap_or("fade")
    }

    /// Parse a transition name (case-insensitive, a few common aliases).
    pub fn parse(s: &str) -> Option<Self> {
        let key = s.trim().to_ascii_lowercase();
        let key = match key.as_str() {
            "crossfade" | "xfade" => "fade",
            "wipe" => "wipeleft",
            "slide" => "slideleft",
            "circle" => "circleopen",
            other => other,
        };
        Self::ALL
            .iter()
            .find(|(_, name)| *name == key)
            .map(|(k, _)| *k)
    }
}

impl std::fmt::Display for TransitionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.xfade_name())
    }
}

/// Cross-fade into a segment from the one before it.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Transition {
    /// xfade kind.
    pub kind: TransitionKind,
    /// Overlap in seconds.
    pub duration: f64,
}

/// Path or URL of a still image handed to ffmpeg.
#[derive(Clone, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct ImageRef(String);

impl ImageRef {
    /// `None` for blank input.
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        (!s.is_empty()).then(|| Self(s.to_string()))
    }

    /// The reference as given.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ImageRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// One timeline entry.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct FrameSegment {
    /// Effect; `None` compiles as static.
    pub animation: Option<AnimationSpec>,
    /// Seconds.
    pub duration: f64,
    /// Own image; ignored for segment 0, which always shows the primary image.
    pub source_image: Option<ImageRef>,
    /// Transition from the previous segment; ignored for segment 0.
    pub transition: Option<Transition>,
}

impl FrameSegment {
    /// Segment with an effect and nothing else.
    pub fn new(animation: Option<AnimationSpec>, duration: f64) -> Self {
        Self {
            animation,
            duration,
            source_image: None,
            transition: None,
        }
    }

    /// Builder-style transition setter.
    pub fn with_transition(mut self, kind: TransitionKind, duration: f64) -> Self {
        self.transition = Some(Transition { kind, duration });
        self
    }

    /// Builder-style image setter.
    pub fn with_image(mut self, image: ImageRef) -> Self {
        self.source_image = Some(image);
        self
    }
}

/// Difference between the segment sum and the target duration.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct DurationMismatch {
    /// Sum of segment durations.
    pub segments_total: f64,
    /// Narration / requested total.
    pub target: f64,
}

impl DurationMismatch {
    /// `segments_total - target`.
    pub fn delta(&self) -> f64 {
        self.segments_total - self.target
    }
}

/// Ordered multi-segment animation for one scene.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Timeline {
    /// Segments in playback order.
    pub segments: Vec<FrameSegment>,
    /// Output frame rate.
    pub fps: Fps,
    /// Output size.
    pub canvas: Canvas,
    /// Scene image; required.
    pub primary_image: Option<ImageRef>,
    /// Narration length; the segment sum when unset.
    pub total_duration: Option<f64>,
}

impl Timeline {
    /// Timeline at 25 fps, 1280×720, with no explicit total.
    pub fn new(primary_image: Option<ImageRef>, segments: Vec<FrameSegment>) -> Self {
        Self {
            segments,
            fps: Fps::DEFAULT,
            canvas: Canvas::HD,
            primary_image,
            total_duration: None,
        }
    }

    /// Sum of segment durations.
    pub fn segment_sum(&self) -> f64 {
        self.segments.iter().map(|s| s.duration).sum()
    }

    /// Output length: the explicit total, else the segment sum.
    pub fn total(&self) -> f64 {
        finite(self.total_duration)
            .filter(|t| *t > 0.0)
            .unwrap_or_else(|| self.segment_sum())
    }

    /// Reported when segment durations do not add up to the explicit total.
    pub fn duration_mismatch(&self) -> Option<DurationMismatch> {
        let target = finite(self.total_duration).filter(|t| *t > 0.0)?;
        let segments_total = self.segment_sum();
        ((segments_total - target).abs() > DURATION_TOLERANCE_SECS).then_some(DurationMismatch {
            segments_total,
            target,
        })
    }

    /// Give every segment `total / n` seconds.
    pub fn redistribute(&mut self, total: f64) {
        if self.segments.is_empty() || !total.is_finite() || total <= 0.0 {
            return;
        }
        let each = (total / self.segments.len() as f64).max(MIN_SEGMENT_SECS);
        for segment in &mut self.segments {
            segment.duration = each;
        }
    }

    /// Copy with limits applied: segment count, duration floors, and transitions fitted to
    /// their neighbours. Every change is reported.
    pub fn normalized(&self) -> Outcome<Timeline> {
        let mut diagnostics = Vec::new();
        let mut out = self.clone();

        if out.segments.len() > MAX_SEGMENTS {
            diagnostics.push(Diagnostic::new(
                DiagnosticKind::ValueClamped,
                format!(
                    "timeline has {} segments; keeping the first {MAX_SEGMENTS}",
                    out.segments.len()
                ),
            ));
            out.segments.truncate(MAX_SEGMENTS);
        }

        for (i, segment) in out.segments.iter_mut().enumerate() {
            if !(segment.duration.is_finite() && segment.duration >= MIN_SEGMENT_SECS) {
                diagnostics.push(
                    Diagnostic::new(
                        DiagnosticKind::ValueClamped,
                        format!(
                            "segment duration {} raised to {}",
                            fmt_num(segment.duration),
                            fmt_num(MIN_SEGMENT_SECS)
                        ),
                    )
                    .in_segment(i),
                );
                segment.duration = MIN_SEGMENT_SECS;
            }
        }

        let mut prev_incoming = 0.0;
        for i in 0..out.segments.len() {
            let Some(requested) = out.segments[i].transition else {
                prev_incoming = 0.0;
                continue;
            };
            if i == 0 {
                diagnostics.push(
                    Diagnostic::new(
                        DiagnosticKind::TransitionDropped,
                        "the first segment has no predecessor; transition ignored",
                    )
                    .in_segment(0),
                );
                out.segments[0].transition = None;
                continue;
            }

            let wanted = finite(Some(requested.duration)).unwrap_or(DEFAULT_TRANSITION_SECS);
            let bounded = wanted.clamp(MIN_TRANSITION_SECS, MAX_TRANSITION_SECS);
            if bounded != requested.duration {
                diagnostics.push(
                    Diagnostic::new(
                        DiagnosticKind::ValueClamped,
                        format!(
                            "transition duration {} moved into [{}, {}]",
                            fmt_num(requested.duration),
                            fmt_num(MIN_TRANSITION_SECS),
                            fmt_num(MAX_TRANSITION_SECS)
                        ),
                    )
                    .in_segment(i),
                );
            }

            let own_limit = out.segments[i].duration / 2.0;
            let prev_remaining = out.segments[i - 1].duration - prev_incoming;
            let fitted = bounded.min(own_limit).min(prev_remaining);
            if fitted < MIN_TRANSITION_SECS {
                diagnostics.push(
                    Diagnostic::new(
                        DiagnosticKind::TransitionDropped,
                        format!(
                            "{} transition cannot fit ({}s available); using a cut",
                            requested.kind,
                            fmt_num(fitted.max(0.0))
                        ),
                    )
                    .in_segment(i),
                );
                out.segments[i].transition = None;
                prev_incoming = 0.0;
                continue;
            }
            if fitted < bounded {
                diagnostics.push(
                    Diagnostic::new(
                        DiagnosticKind::TransitionClamped,
                        format!(
                            "{} transition shortened from {}s to {}s",
                            requested.kind,
                            fmt_num(bounded),
                            fmt_num(fitted)
                        ),
                    )
                    .in_segment(i),
                );
            }
            out.segments[i].transition = Some(Transition {
                kind: requested.kind,
                duration: fitted,
            });
            prev_incoming = fitted;
        }

        if let Some(m) = out.duration_mismatch() {
            diagnostics.push(Diagnostic::new(
                DiagnosticKind::DurationMismatch,
                format!(
                    "segments last {}s but the target is {}s",
                    fmt_num(m.segments_total),
                    fmt_num(m.target)
                ),
            ));
        }

        Outcome::with(out, diagnostics)
    }

    /// Build a timeline from a UI job.
    pub fn from_raw(raw: &RawTimeline) -> Outcome<Timeline> {
        let mut diagnostics = Vec::new();
        let mut segments = Vec::with_capacity(raw.frames.len());
        for (i, frame) in raw.frames.iter().enumerate() {
            let animation = match &frame.animation {
                Some(a) => {
                    let out = a.to_spec();
                    diagnostics.extend(out.diagnostics.into_iter().map(|d| d.in_segment(i)));
                    out.value
                }
                None => None,
            };
            let transition = frame
                .transition
                .as_deref()
                .map(str::trim)
                .filter(|t| !t.is_empty())
                .map(|name| {
                    let kind = TransitionKind::parse(name).unwrap_or_else(|| {
                        diagnostics.push(
                            Diagnostic::new(
                                DiagnosticKind::UnknownTransition,
                                format!("unknown transition '{name}'; using fade"),
                            )
                            .in_segment(i),
                        );
                        TransitionKind::Fade
                    });
                    Transition {
                        kind,
                        duration: frame.transition_duration.unwrap_or(DEFAULT_TRANSITION_SECS),
                    }
                });
            segments.push(FrameSegment {
                animation,
                duration: frame.duration,
                source_image: frame.uploaded_image.as_deref().and_then(ImageRef::parse),
                transition,
            });
        }

        let canvas = match (raw.width, raw.height) {
            (Some(w), Some(h)) if w >= 2 && h >= 2 => Canvas::coerced(w, h),
            _ => Canvas::HD,
        };
        let fps = raw
            .fps
            .and_then(|f| Fps::new(f).ok())
            .unwrap_or(Fps::DEFAULT);
        let timeline = Timeline {
            segments,
            fps,
            canvas,
            primary_image: raw.image.as_deref().and_then(ImageRef::parse),
            total_duration: finite(raw.total_duration),
        };
        Outcome::with(timeline, diagnostics)
    }
}

/// One frame of a UI multi-frame job.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawFrame {
    /// UI identifier; informational.
    pub id: Option<u64>,
    /// Seconds.
    pub duration: f64,
    /// xfade name, `""` for none.
    pub transition: Option<String>,
    /// Transition overlap, seconds.
    pub transition_duration: Option<f64>,
    /// Own image path.
    #[serde(alias = "uploadedImageData")]
    pub uploaded_image: Option<String>,
    /// Effect settings.
    pub animation: Option<RawAnimationSpec>,
}

/// A UI multi-frame job as stored on disk.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawTimeline {
    /// Segments in order.
    pub frames: Vec<RawFrame>,
    /// Narration length, seconds.
    pub total_duration: Option<f64>,
    /// Frame rate.
    pub fps: Option<u32>,
    /// Output width.
    pub width: Option<u32>,
    /// Output height.
    pub height: Option<u32>,
    /// Primary scene image.
    pub image: Option<String>,
    /// Narration audio.
    pub audio: Option<String>,
    /// Output video path.
    pub output: Option<String>,
}

impl RawTimeline {
    /// Parse a job from JSON text.
    pub fn from_json(text: &str) -> ReelResult<Self> {
        Ok(serde_json::from_str(text)?)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/timeline/model.rs"]
mod tests;
