//! Compiles declarative camera-motion settings and multi-segment story timelines into
//! ffmpeg filter graphs.
//!
//! The pipeline is pure until the last step:
//!
//! 1. [`RawAnimationSpec`] / [`RawTimeline`] accept the loose JSON shapes produced by the
//!    authoring UI.
//! 2. [`validate`] turns them into typed [`AnimationSpec`]s, repairing what it can and
//!    reporting every repair as a [`Diagnostic`].
//! 3. [`build_motion_fragment`] maps one spec to a [`FilterChain`] fragment.
//! 4. [`compile_timeline`] joins per-segment fragments with cuts and `xfade` transitions
//!    into one [`FilterGraph`].
//! 5. [`FfmpegCommand`] describes the invocation; [`run`] executes it when `ffmpeg` is on
//!    `PATH`.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod animation;
mod encode;
mod foundation;
mod graph;
mod motion;
mod timeline;

pub use animation::direction::{Direction, DirectionSet, HorizontalPan, VerticalPan, Zoom};
pub use animation::raw::{RawAnimationSpec, RawDirection};
pub use animation::spec::{
    AnimationKind, AnimationSpec, Cinemagraph, CinemagraphMotion, DollyZoom, KenBurns,
    MAX_INTENSITY, MAX_SCALE, MIN_SCALE, Parallax, ParallaxDirection, intensity_factor,
};
pub use animation::validate::{
    FallbackReason, FallbackSpec, Validated, clamp_scale, validate, validate_spec,
};
pub use encode::command::{CommandInput, EncodeSettings, FfmpegCommand, FilterSpec, shell_quote};
pub use encode::ffmpeg::{
    StreamDurations, ensure_parent_dir, is_ffmpeg_on_path, is_ffprobe_on_path, media_duration,
    media_duration_or, run, stream_durations,
};
pub use encode::merge::{
    MergePlan, complete_audio_command, completion_length, concat_list, normalize_command,
};
pub use encode::naming::SceneFiles;
pub use foundation::core::{Canvas, Fps, RenderParams, ResolutionPreset};
pub use foundation::diagnostic::{Diagnostic, DiagnosticKind, Outcome};
pub use foundation::error::{ReelError, ReelResult};
pub use graph::filter::{Filter, FilterArg, FilterChain};
pub use graph::node::{FilterGraph, FilterNode};
pub use motion::builder::{
    Built, FragmentFamily, FrameSpan, MotionFragment, build_motion_fragment, build_validated,
    compile_scene_filter, pass_through, safety_stage,
};
pub use timeline::compiler::{CompiledTimeline, compile_timeline};
pub use timeline::model::{
    DEFAULT_TRANSITION_SECS, DURATION_TOLERANCE_SECS, DurationMismatch, FrameSegment, ImageRef,
    MAX_SEGMENTS, MAX_TRANSITION_SECS, MIN_SEGMENT_SECS, MIN_TRANSITION_SECS, RawFrame,
    RawTimeline, Timeline, Transition, TransitionKind,
};
pub use timeline::segment::{CompiledSegment, compile_segment};
pub use timeline::stitch::{Boundary, plan_boundaries, stitch, stitched_duration};
