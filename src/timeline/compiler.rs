use crate::foundation::diagnostic::Diagnostic;
use crate::foundation::error::{ReelError, ReelResult};
use crate::graph::node::FilterGraph;
use crate::timeline::model::{DurationMismatch, ImageRef, Timeline};
use crate::timeline::segment::compile_segment;
use crate::timeline::stitch::{Boundary, plan_boundaries, stitch, stitched_duration};

/// A timeline compiled into one filter graph.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct CompiledTimeline {
    /// `-filter_complex` graph.
    pub graph: FilterGraph,
    /// One image per segment, in input order.
    pub inputs: Vec<ImageRef>,
    /// Input index of the narration track, when wired.
    pub audio_input: Option<usize>,
    /// Join decisions.
    pub boundaries: Vec<Boundary>,
    /// Output length passed to `-t`.
    pub total_duration: f64,
    /// Length of the stitched video before audio is applied.
    pub video_duration: f64,
    /// Set when segment durations do not add up to the target.
    pub mismatch: Option<DurationMismatch>,
    /// Everything recovered during compilation.
    pub diagnostics: Vec<Diagnostic>,
}

/// Compile a whole timeline. When `with_audio` is set, input `N` (after the `N` images) is
/// expected to be the narration track.
#[tracing::instrument(skip(timeline), fields(segments = timeline.segments.len()))]
pub fn compile_timeline(timeline: &Timeline, with_audio: bool) -> ReelResult<CompiledTimeline> {
    if timeline.segments.is_empty() {
        return Err(ReelError::validation("timeline has no segments"));
    }
    let mut diagnostics = Vec::new();
    let timeline = timeline.normalized().drain_into(&mut diagnostics);

    let mut segments = Vec::with_capacity(timeline.segments.len());
    for index in 0..timeline.segments.len() {
        let mut seg = compile_segment(&timeline, index)?;
        diagnostics.append(&mut seg.diagnostics);
        segments.push(seg);
    }

    let total_duration = timeline.total();
    let audio_input = with_audio.then_some(segments.len());
    let graph = stitch(&segments, audio_input, total_duration)?;

    for d in &diagnostics {
        d.log();
    }
    tracing::debug!(
        fingerprint = %format!("{:016x}", graph.fingerprint()),
        graph = %graph,
        "compiled timeline"
    );

    Ok(CompiledTimeline {
        inputs: segments.iter().map(|s| s.input.clone()).collect(),
        audio_input,
        boundaries: plan_boundaries(&segments),
        video_duration: stitched_duration(&segments),
        total_duration,
        mismatch: timeline.duration_mismatch(),
        graph,
        diagnostics,
    })
}

#[cfg(test)]
#[path = "../../tests/unit/timeline/compiler.rs"]
mod tests;
