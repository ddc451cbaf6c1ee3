use crate::animation::direction::{Direction, HorizontalPan, VerticalPan, Zoom};
use crate::animation::spec::{KenBurns, intensity_factor};
use crate::foundation::core::RenderParams;
use crate::foundation::math::{even_round, fmt_num};
use crate::graph::filter::{Filter, FilterChain};
use crate::motion::builder::{FragmentFamily, FrameSpan, MotionFragment};

pub(crate) const CENTER_X: &str = "iw/2-(iw/zoom/2)";
pub(crate) const CENTER_Y: &str = "ih/2-(ih/zoom/2)";

// Over-scale used by a pure pan that carries no zoom growth.
const PAN_OVERSCALE: f64 = 1.5;

/// `zoompan` sized to the canvas with the given expressions.
pub(crate) fn zoompan(
    z: impl std::fmt::Display,
    x: impl std::fmt::Display,
    y: impl std::fmt::Display,
    span: FrameSpan,
    params: &RenderParams,
) -> Filter {
    Filter::new("zoompan")
        .expr("z", z)
        .expr("x", x)
        .expr("y", y)
        .arg("d", span.frames())
        .arg("s", params.canvas.size_token())
        .arg("fps", params.fps.get())
}

/// Centered constant zoom spanning the whole clip.
pub(crate) fn static_zoom(scale: f64, params: &RenderParams) -> MotionFragment {
    let span = FrameSpan::WholeSegment(params.frames());
    MotionFragment {
        chain: FilterChain::new().then(zoompan(fmt_num(scale), CENTER_X, CENTER_Y, span, params)),
        family: FragmentFamily::ZoomPan,
        span,
        canvas: params.canvas,
    }
}

pub(crate) fn build(kb: &KenBurns, params: &RenderParams) -> MotionFragment {
    match kb.directions.single_pan() {
        Some(pan) => pure_pan(kb, pan, params),
        None => zoom_and_pan(kb, params),
    }
}

fn zoom_and_pan(kb: &KenBurns, params: &RenderParams) -> MotionFragment {
    let frames = params.frames();
    let s = fmt_num(kb.start_scale);
    let e = fmt_num(kb.end_scale);
    let f = fmt_num(intensity_factor(kb.intensity));

    let z = match kb.directions.zoom {
        Some(Zoom::In) => format!("{s}+({e}-{s})*on/{frames}"),
        Some(Zoom::Out) => format!("{s}-({s}-{e})*on/{frames}"),
        None => s,
    };
    let x_shift = |sign: char| format!("{sign}((iw-iw/zoom)/2*{f}*on/{frames})");
    let y_shift = |sign: char| format!("{sign}((ih-ih/zoom)/2*{f}*on/{frames})");
    let x = match kb.directions.horizontal {
        Some(HorizontalPan::Right) => format!("{CENTER_X}{}", x_shift('+')),
        Some(HorizontalPan::Left) => format!("{CENTER_X}{}", x_shift('-')),
        None => CENTER_X.to_string(),
    };
    let y = match kb.directions.vertical {
        Some(VerticalPan::Down) => format!("{CENTER_Y}{}", y_shift('+')),
        Some(VerticalPan::Up) => format!("{CENTER_Y}{}", y_shift('-')),
        None => CENTER_Y.to_string(),
    };

    let span = FrameSpan::PerOutputFrame;
    MotionFragment {
        chain: FilterChain::new().then(zoompan(z, x, y, span, params)),
        family: FragmentFamily::ZoomPan,
        span,
        canvas: params.canvas,
    }
}

/// Over-scale, then slide a crop window across normalized time.
fn pure_pan(kb: &KenBurns, pan: Direction, params: &RenderParams) -> MotionFragment {
    let w = params.canvas.width;
    let h = params.canvas.height;
    let scale = if kb.end_scale > kb.start_scale {
        1.0 + (kb.end_scale - kb.start_scale)
    } else {
        PAN_OVERSCALE
    };
    let sw = even_round(f64::from(w) * scale);
    let sh = even_round(f64::from(h) * scale);

    let progress = format!(
        "t/{}*{}",
        fmt_num(params.duration),
        fmt_num(intensity_factor(kb.intensity))
    );
    let center_x = format!("(in_w-{w})/2");
    let center_y = format!("(in_h-{h})/2");
    let (x, y) = match pan {
        Direction::PanRight => (format!("(in_w-{w})*({progress})"), center_y),
        Direction::PanLeft => (format!("(in_w-{w})*(1-{progress})"), center_y),
        Direction::PanDown => (center_x, format!("(in_h-{h})*({progress})")),
        _ => (center_x, format!("(in_h-{h})*(1-{progress})")),
    };

    let chain = FilterChain::new()
        .then(Filter::new("scale").pos(sw).pos(sh))
        .then(Filter::new("crop").pos(w).pos(h).pos(x).pos(y))
        .then(Filter::new("fps").pos(params.fps.get()));
    MotionFragment {
        chain,
        family: FragmentFamily::TimeExpression,
        span: FrameSpan::WholeSegment(params.frames()),
        canvas: params.canvas,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/motion/kenburns.rs"]
mod tests;
