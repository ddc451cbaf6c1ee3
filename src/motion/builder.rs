use std::fmt;

use crate::animation::raw::RawAnimationSpec;
use crate::animation::spec::AnimationSpec;
use crate::animation::validate::{Validated, validate, validate_spec};
use crate::foundation::core::{Canvas, RenderParams};
use crate::foundation::diagnostic::{Diagnostic, Outcome};
use crate::graph::filter::{Filter, FilterChain};
use crate::motion::{cinemagraph, dolly, kenburns, parallax};

/// How a fragment advances through time.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FragmentFamily {
    /// Driven by a `zoompan` filter whose `d` token sets the frames per input image.
    ZoomPan,
    /// Driven by the `t` timestamp of a continuous frame stream.
    TimeExpression,
    /// No motion; scale-to-fit and pad.
    PassThrough,
}

/// Timing token the fragment was built with.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FrameSpan {
    /// `d=1`: evaluated once per output frame.
    PerOutputFrame,
    /// `d=frames`: one pass spans the whole clip.
    WholeSegment(u64),
}

impl FrameSpan {
    /// Value of the `d` token.
    pub fn frames(self) -> u64 {
        match self {
            Self::PerOutputFrame => 1,
            Self::WholeSegment(n) => n,
        }
    }
}

/// A single-effect filter chain sized to an exact canvas.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct MotionFragment {
    /// Filters producing the effect.
    pub chain: FilterChain,
    /// Timing family, used when fitting the fragment into a timeline segment.
    pub family: FragmentFamily,
    /// Timing token.
    pub span: FrameSpan,
    /// Resolved output size.
    pub canvas: Canvas,
}

impl MotionFragment {
    /// Resolved output size; always the requested canvas, both dimensions even.
    pub fn output_size(&self) -> Canvas {
        self.canvas
    }

    /// The chain followed by the even-dimension stage.
    pub fn with_safety_stage(&self) -> FilterChain {
        self.chain.clone().then(safety_stage())
    }
}

impl fmt::Display for MotionFragment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.chain)
    }
}

/// A fragment plus the anomalies recovered while building it.
#[derive(Clone, Debug, PartialEq)]
pub struct Built {
    /// Always renderable.
    pub fragment: MotionFragment,
    /// Recovered anomalies.
    pub diagnostics: Vec<Diagnostic>,
}

/// Round both output dimensions down to even: `scale=trunc(iw/2)*2:trunc(ih/2)*2`.
pub fn safety_stage() -> Filter {
    Filter::new("scale")
        .pos("trunc(iw/2)*2")
        .pos("trunc(ih/2)*2")
}

/// Scale-to-fit and pad to the exact canvas: the fragment for `Static` and for recovered failures.
pub fn pass_through(params: &RenderParams) -> MotionFragment {
    let params = params.sanitized();
    let Canvas { width, height } = params.canvas;
    let chain = FilterChain::new()
        .then(
            Filter::new("scale")
                .pos(width)
                .pos(height)
                .arg("force_original_aspect_ratio", "decrease"),
        )
        .then(
            Filter::new("pad")
                .pos(width)
                .pos(height)
                .pos("(ow-iw)/2")
                .pos("(oh-ih)/2"),
        )
        .then(Filter::new("fps").pos(params.fps.get()));
    MotionFragment {
        chain,
        family: FragmentFamily::PassThrough,
        span: FrameSpan::WholeSegment(params.frames()),
        canvas: params.canvas,
    }
}

/// Build the fragment for one effect. Degenerate specs become the static-zoom fallback and
/// missing fields become [`pass_through`]; neither is an error.
#[tracing::instrument(level = "debug", skip(spec), fields(kind = %spec.kind()))]
pub fn build_motion_fragment(spec: &AnimationSpec, params: &RenderParams) -> Built {
    let built = build_unlogged(spec, params);
    for d in &built.diagnostics {
        d.log();
    }
    tracing::debug!(fragment = %built.fragment, "built motion fragment");
    built
}

pub(crate) fn build_unlogged(spec: &AnimationSpec, params: &RenderParams) -> Built {
    let mut diagnostics = Vec::new();
    let validated = validate_spec(spec.clone()).drain_into(&mut diagnostics);
    let built = build_validated(&validated, params);
    diagnostics.extend(built.diagnostics);
    Built {
        fragment: built.fragment,
        diagnostics,
    }
}

/// Build the fragment for an already validated spec.
pub fn build_validated(validated: &Validated, params: &RenderParams) -> Built {
    let params = params.sanitized();
    let mut diagnostics = Vec::new();
    let fragment = match validated {
        Validated::Fallback(fallback) => kenburns::static_zoom(fallback.start_scale, &params),
        Validated::Spec(AnimationSpec::KenBurns(kb)) => kenburns::build(kb, &params),
        Validated::Spec(AnimationSpec::Parallax(p)) => parallax::build(p, &params),
        Validated::Spec(AnimationSpec::Cinemagraph(c)) => cinemagraph::build(c, &params),
        Validated::Spec(AnimationSpec::DollyZoom(d)) => match dolly::build(d, &params) {
            Ok(fragment) => fragment,
            Err(diagnostic) => {
                diagnostics.push(diagnostic);
                pass_through(&params)
            }
        },
        Validated::Spec(AnimationSpec::Static) => pass_through(&params),
    };
    Built {
        fragment,
        diagnostics,
    }
}

/// Single-scene entry point: the complete `-vf` filter for a UI settings object.
///
/// `None` when the kind is unknown or `Static`, meaning the clip renders without a filter.
#[tracing::instrument(level = "debug", skip(raw), fields(kind = %raw.kind))]
pub fn compile_scene_filter(raw: &RawAnimationSpec, params: &RenderParams) -> Outcome<Option<String>> {
    let mut diagnostics = Vec::new();
    let validated = validate(raw).drain_into(&mut diagnostics);
    let filter = match validated {
        None | Some(Validated::Spec(AnimationSpec::Static)) => None,
        Some(validated) => {
            let built = build_validated(&validated, params);
            diagnostics.extend(built.diagnostics);
            Some(built.fragment.with_safety_stage().to_string())
        }
    };
    for d in &diagnostics {
        d.log();
    }
    if let Some(filter) = &filter {
        tracing::debug!(%filter, "compiled scene filter");
    }
    Outcome::with(filter, diagnostics)
}

#[cfg(test)]
#[path = "../../tests/unit/motion/builder.rs"]
mod tests;
