use crate::animation::spec::DollyZoom;
use crate::foundation::core::RenderParams;
use crate::foundation::diagnostic::{Diagnostic, DiagnosticKind};
use crate::foundation::math::fmt_num;
use crate::graph::filter::FilterChain;
use crate::motion::builder::{FragmentFamily, FrameSpan, MotionFragment};
use crate::motion::kenburns::{CENTER_X, CENTER_Y, zoompan};

// Field of view that maps to a zoom of 1.
const REFERENCE_FOV: f64 = 50.0;

/// Linear zoom ramp from `50/start_fov` to `50/end_fov`. Errors when either FOV is unusable.
pub(crate) fn build(d: &DollyZoom, params: &RenderParams) -> Result<MotionFragment, Diagnostic> {
    let fov = |name: &str, v: Option<f64>| match v {
        Some(v) if v.is_finite() && v > 0.0 => Ok(v),
        Some(v) => Err(Diagnostic::new(
            DiagnosticKind::MissingField,
            format!("dolly zoom {name} {v} is not positive; using pass-through"),
        )),
        None => Err(Diagnostic::new(
            DiagnosticKind::MissingField,
            format!("dolly zoom {name} is missing; using pass-through"),
        )),
    };
    let start = fov("startFov", d.start_fov)?;
    let end = fov("endFov", d.end_fov)?;

    let frames = params.frames();
    let a = fmt_num(REFERENCE_FOV / start);
    let b = fmt_num(REFERENCE_FOV / end);
    let z = format!("{a}+({b}-{a})*on/{frames}");
    let span = FrameSpan::PerOutputFrame;
    Ok(MotionFragment {
        chain: FilterChain::new().then(zoompan(z, CENTER_X, CENTER_Y, span, params)),
        family: FragmentFamily::ZoomPan,
        span,
        canvas: params.canvas,
    })
}

#[cfg(test)]
#[path = "../../tests/unit/motion/dolly.rs"]
mod tests;
