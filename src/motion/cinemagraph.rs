use crate::animation::spec::{Cinemagraph, CinemagraphMotion, intensity_factor};
use crate::foundation::core::RenderParams;
use crate::foundation::math::fmt_num;
use crate::graph::filter::{Filter, FilterChain};
use crate::motion::builder::{FragmentFamily, FrameSpan, MotionFragment};
use crate::motion::kenburns::{CENTER_X, CENTER_Y, zoompan};

// Zoom/scale amplitude at full intensity.
const MAX_AMPLITUDE: f64 = 0.5;
// Wave crop offset in pixels at full intensity.
const MAX_WAVE_PX: f64 = 50.0;

pub(crate) fn build(c: &Cinemagraph, params: &RenderParams) -> MotionFragment {
    let factor = intensity_factor(c.intensity);
    let period = fmt_num(c.loop_duration.unwrap_or(params.duration));
    let fps = params.fps.get();
    let w = params.canvas.width;
    let h = params.canvas.height;

    match c.motion {
        CinemagraphMotion::SubtleZoom => {
            let a = fmt_num(factor * MAX_AMPLITUDE);
            let z = format!("1+{a}*sin(2*PI*(on/{fps})/{period})");
            let span = FrameSpan::PerOutputFrame;
            MotionFragment {
                chain: FilterChain::new().then(zoompan(z, CENTER_X, CENTER_Y, span, params)),
                family: FragmentFamily::ZoomPan,
                span,
                canvas: params.canvas,
            }
        }
        CinemagraphMotion::Wave => {
            let px = (factor * MAX_WAVE_PX).round().max(1.0) as u32;
            let chain = FilterChain::new()
                .then(Filter::new("scale").pos(w.saturating_add(px.saturating_mul(2))).pos(h))
                .then(
                    Filter::new("crop")
                        .pos(w)
                        .pos(h)
                        .expr("x", format!("{px}+{px}*sin(2*PI*t/{period})"))
                        .arg("y", 0),
                )
                .then(Filter::new("fps").pos(fps));
            time_fragment(chain, params)
        }
        CinemagraphMotion::Breathe => {
            let a = fmt_num(factor * MAX_AMPLITUDE);
            // Factor stays >= 1 so the centered crop never exceeds the scaled frame.
            let grow = format!("(1+{a}+{a}*sin(2*PI*t/{period}))");
            let chain = FilterChain::new()
                .then(Filter::new("scale").pos(w).pos(h))
                .then(
                    Filter::new("scale")
                        .expr("w", format!("iw*{grow}"))
                        .expr("h", format!("ih*{grow}"))
                        .arg("eval", "frame"),
                )
                .then(Filter::new("crop").pos(w).pos(h))
                .then(Filter::new("fps").pos(fps));
            time_fragment(chain, params)
        }
    }
}

fn time_fragment(chain: FilterChain, params: &RenderParams) -> MotionFragment {
    MotionFragment {
        chain,
        family: FragmentFamily::TimeExpression,
        span: FrameSpan::WholeSegment(params.frames()),
        canvas: params.canvas,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/motion/cinemagraph.rs"]
mod tests;
