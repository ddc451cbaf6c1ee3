use crate::animation::spec::AnimationSpec;
use crate::foundation::core::RenderParams;
use crate::foundation::diagnostic::Diagnostic;
use crate::foundation::error::{ReelError, ReelResult};
use crate::foundation::math::fmt_num;
use crate::graph::filter::{Filter, FilterChain};
use crate::motion::builder::{FragmentFamily, build_unlogged};
use crate::timeline::model::{ImageRef, Timeline, Transition};

/// One segment ready for stitching: its input image and a chain that yields exactly
/// `duration` seconds of canvas-sized frames.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct CompiledSegment {
    /// Position in the timeline; also the ffmpeg input index.
    pub index: usize,
    /// Image fed to `-i` for this segment.
    pub input: ImageRef,
    /// Filters from the still image to the trimmed segment.
    pub chain: FilterChain,
    /// Timing family of the underlying effect.
    pub family: FragmentFamily,
    /// Seconds.
    pub duration: f64,
    /// Output frames.
    pub frames: u64,
    /// Incoming transition.
    pub transition: Option<Transition>,
    /// Anomalies recovered while building this segment.
    pub diagnostics: Vec<Diagnostic>,
}

/// Compile segment `index` of `timeline`.
///
/// Segment 0 always shows the primary image; later segments use their own image when present.
/// The only failure is a missing primary image.
pub fn compile_segment(timeline: &Timeline, index: usize) -> ReelResult<CompiledSegment> {
    let segment = timeline.segments.get(index).ok_or_else(|| {
        ReelError::validation(format!(
            "segment {index} out of range ({} segments)",
            timeline.segments.len()
        ))
    })?;
    let primary = timeline
        .primary_image
        .as_ref()
        .ok_or_else(|| ReelError::unrenderable(index, "scene has no primary image"))?;
    let input = match (index, &segment.source_image) {
        (0, _) | (_, None) => primary.clone(),
        (_, Some(own)) => own.clone(),
    };

    let params = RenderParams {
        duration: segment.duration,
        canvas: timeline.canvas,
        fps: timeline.fps,
    }
    .sanitized();
    let frames = params.frames();
    let duration = fmt_num(params.duration);
    let spec = segment.animation.clone().unwrap_or(AnimationSpec::Static);
    let built = build_unlogged(&spec, &params);
    let family = built.fragment.family;

    let mut chain = built.fragment.chain;
    match family {
        FragmentFamily::ZoomPan => {
            if let Some(zoompan) = chain.find_mut("zoompan") {
                zoompan.set("d", frames);
            }
        }
        FragmentFamily::TimeExpression => {
            chain.prepend(Filter::new("setpts").pos(format!("N/{}/TB", params.fps.get())));
            chain.prepend(
                Filter::new("loop")
                    .arg("loop", frames.saturating_sub(1))
                    .arg("size", 1)
                    .arg("start", 0),
            );
        }
        FragmentFamily::PassThrough => {
            chain.push(
                Filter::new("tpad")
                    .arg("stop_mode", "clone")
                    .arg("stop_duration", &duration),
            );
        }
    }
    chain.push(Filter::new("trim").arg("duration", &duration));
    chain.push(Filter::new("setpts").pos("PTS-STARTPTS"));
    chain.push(Filter::new("setsar").pos(1));

    Ok(CompiledSegment {
        index,
        input,
        chain,
        family,
        duration: params.duration,
        frames,
        transition: if index == 0 { None } else { segment.transition },
        diagnostics: built
            .diagnostics
            .into_iter()
            .map(|d| d.in_segment(index))
            .collect(),
    })
}

#[cfg(test)]
#[path = "../../tests/unit/timeline/segment.rs"]
mod tests;
