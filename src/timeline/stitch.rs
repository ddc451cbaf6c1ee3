use crate::foundation::error::{ReelError, ReelResult};
use crate::foundation::math::fmt_num;
use crate::graph::filter::{Filter, FilterChain};
use crate::graph::node::{FilterGraph, FilterNode};
use crate::motion::builder::safety_stage;
use crate::timeline::model::TransitionKind;
use crate::timeline::segment::CompiledSegment;

/// Decision for the join between segment `index - 1` and segment `index`.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Boundary {
    /// Plain two-way concatenation.
    Cut {
        /// Incoming segment.
        index: usize,
    },
    /// Overlapping xfade.
    Transition {
        /// Incoming segment.
        index: usize,
        /// xfade kind.
        kind: TransitionKind,
        /// Overlap, seconds.
        duration: f64,
        /// Output time at which the overlap starts.
        offset: f64,
    },
}

impl Boundary {
    /// Incoming segment index.
    pub fn index(&self) -> usize {
        match *self {
            Self::Cut { index } | Self::Transition { index, .. } => index,
        }
    }
}

/// Per-boundary decisions, left to right.
///
/// The offset of a transition is the output length accumulated before the boundary minus the
/// overlap: `sum(d0..d[i-1]) - t - (earlier overlaps)`. A transition longer than either the
/// accumulated output or the incoming segment is planned as a cut; one fitted exactly to the
/// accumulated output starts at offset 0.
pub fn plan_boundaries(segments: &[CompiledSegment]) -> Vec<Boundary> {
    let Some(first) = segments.first() else {
        return Vec::new();
    };
    let mut running = first.duration;
    let mut boundaries = Vec::with_capacity(segments.len().saturating_sub(1));
    for (index, seg) in segments.iter().enumerate().skip(1) {
        match seg.transition {
            Some(t) if t.duration > 0.0 && t.duration <= running && t.duration <= seg.duration => {
                boundaries.push(Boundary::Transition {
                    index,
                    kind: t.kind,
                    duration: t.duration,
                    offset: running - t.duration,
                });
                running += seg.duration - t.duration;
            }
            _ => {
                boundaries.push(Boundary::Cut { index });
                running += seg.duration;
            }
        }
    }
    boundaries
}

/// Length of the stitched video: the segment sum minus every planned overlap.
pub fn stitched_duration(segments: &[CompiledSegment]) -> f64 {
    let overlap: f64 = plan_boundaries(segments)
        .iter()
        .map(|b| match b {
            Boundary::Transition { duration, .. } => *duration,
            Boundary::Cut { .. } => 0.0,
        })
        .sum();
    segments.iter().map(|s| s.duration).sum::<f64>() - overlap
}

fn concat(n: usize) -> Filter {
    Filter::new("concat").arg("n", n).arg("v", 1).arg("a", 0)
}

/// Compose compiled segments into one graph ending at `[vout]` (and `[aout]` when
/// `audio_input` names the narration input index).
///
/// Segment `k` reads input `k:v`. A single segment gets no join at all; a timeline without
/// transitions gets one N-way concat; otherwise boundaries fold left to right through
/// `xfade` or two-way `concat` nodes.
pub fn stitch(
    segments: &[CompiledSegment],
    audio_input: Option<usize>,
    total_duration: f64,
) -> ReelResult<FilterGraph> {
    if segments.is_empty() {
        return Err(ReelError::validation("timeline has no segments"));
    }

    let mut nodes = Vec::new();
    if let [only] = segments {
        let chain = only.chain.clone().then(safety_stage());
        nodes.push(FilterNode::new(format!("{}:v", only.index), chain, "vout"));
    } else {
        for seg in segments {
            nodes.push(FilterNode::new(
                format!("{}:v", seg.index),
                seg.chain.clone(),
                format!("s{}", seg.index),
            ));
        }
        let boundaries = plan_boundaries(segments);
        let any_transition = boundaries
            .iter()
            .any(|b| matches!(b, Boundary::Transition { .. }));

        if !any_transition {
            let inputs = segments.iter().map(|s| format!("s{}", s.index)).collect();
            let chain = FilterChain::new().then(concat(segments.len())).then(safety_stage());
            nodes.push(FilterNode::join(inputs, chain, "vout"));
        } else {
            let mut current = format!("s{}", segments[0].index);
            for boundary in &boundaries {
                let next = format!("s{}", segments[boundary.index()].index);
                let out = format!("x{}", boundary.index());
                let filter = match *boundary {
                    Boundary::Transition {
                        kind,
                        duration,
                        offset,
                        ..
                    } => Filter::new("xfade")
                        .arg("transition", kind)
                        .arg("duration", fmt_num(duration))
                        .arg("offset", fmt_num(offset)),
                    Boundary::Cut { .. } => concat(2),
                };
                nodes.push(FilterNode::join(
                    vec![current, next],
                    FilterChain::new().then(filter),
                    out.clone(),
                ));
                current = out;
            }
            nodes.push(FilterNode::new(
                current,
                FilterChain::new().then(safety_stage()),
                "vout",
            ));
        }
    }

    let audio_out = audio_input.map(|k| {
        let chain = FilterChain::new()
            .then(Filter::new("atrim").arg("duration", fmt_num(total_duration)))
            .then(Filter::new("asetpts").pos("PTS-STARTPTS"));
        nodes.push(FilterNode::new(format!("{k}:a"), chain, "aout"));
        "aout".to_string()
    });

    Ok(FilterGraph {
        nodes,
        video_out: "vout".to_string(),
        audio_out,
    })
}

#[cfg(test)]
#[path = "../../tests/unit/timeline/stitch.rs"]
mod tests;
