use crate::animation::spec::Parallax;
use crate::foundation::core::RenderParams;
use crate::foundation::math::{even_round, fmt_num};
use crate::graph::filter::{Filter, FilterChain};
use crate::motion::builder::{FragmentFamily, FrameSpan, MotionFragment};

// Crop window covers this share of the pre-scaled source on the moving axis.
const WINDOW_SHARE: f64 = 0.8;
// Speed at which the window crosses the full range exactly once.
const REFERENCE_SPEED: f64 = 0.5;

pub(crate) fn build(p: &Parallax, params: &RenderParams) -> MotionFragment {
    let w = params.canvas.width;
    let h = params.canvas.height;
    let rate = p.speed / REFERENCE_SPEED;
    let progress = format!("min(1,{}*t/{})", fmt_num(rate), fmt_num(params.duration));
    let travel = if p.direction.is_forward() {
        progress
    } else {
        format!("1-{progress}")
    };

    let (scale, crop) = if p.direction.is_horizontal() {
        let sw = even_round(f64::from(w) / WINDOW_SHARE);
        (
            Filter::new("scale").pos(sw).pos(h),
            Filter::new("crop")
                .pos(w)
                .pos(h)
                .arg("x", format!("(iw-ow)*({travel})"))
                .arg("y", 0),
        )
    } else {
        let sh = even_round(f64::from(h) / WINDOW_SHARE);
        (
            Filter::new("scale").pos(w).pos(sh),
            Filter::new("crop")
                .pos(w)
                .pos(h)
                .arg("x", 0)
                .arg("y", format!("(ih-oh)*({travel})")),
        )
    };

    MotionFragment {
        chain: FilterChain::new()
            .then(scale)
            .then(crop)
            .then(Filter::new("fps").pos(params.fps.get())),
        family: FragmentFamily::TimeExpression,
        span: FrameSpan::WholeSegment(params.frames()),
        canvas: params.canvas,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/motion/parallax.rs"]
mod tests;
