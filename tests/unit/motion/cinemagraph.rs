use super::*;

fn cinemagraph(motion: CinemagraphMotion, intensity: f64, loop_duration: Option<f64>) -> Cinemagraph {
    Cinemagraph {
        intensity,
        mask: "center".into(),
        motion,
        loop_duration,
    }
}

#[test]
fn subtle_zoom_oscillates_around_one() {
    let frag = build(
        &cinemagraph(CinemagraphMotion::SubtleZoom, 1.0, Some(3.0)),
        &RenderParams::default(),
    );
    let zp = frag.chain.find("zoompan").unwrap();
    assert_eq!(zp.get("z"), Some("1+0.05*sin(2*PI*(on/25)/3)"));
    assert_eq!(zp.get("d"), Some("1"));
    assert_eq!(frag.family, FragmentFamily::ZoomPan);
}

#[test]
fn wave_pads_then_crops() {
    let frag = build(
        &cinemagraph(CinemagraphMotion::Wave, 1.0, Some(3.0)),
        &RenderParams::default(),
    );
    assert_eq!(
        frag.to_string(),
        "scale=1290:720,crop=1280:720:x='5+5*sin(2*PI*t/3)':y=0,fps=25"
    );
}

#[test]
fn wave_keeps_at_least_one_pixel() {
    let frag = build(
        &cinemagraph(CinemagraphMotion::Wave, 0.0, None),
        &RenderParams::default(),
    );
    assert_eq!(
        frag.chain.find("crop").unwrap().get("x"),
        Some("1+1*sin(2*PI*t/5)")
    );
}

#[test]
fn wave_padding_saturates_on_huge_canvas() {
    let params = RenderParams {
        canvas: crate::foundation::core::Canvas {
            width: u32::MAX - 1,
            height: 720,
        },
        ..RenderParams::default()
    };
    let frag = build(&cinemagraph(CinemagraphMotion::Wave, 1.0, Some(3.0)), &params);
    let scale = frag.chain.find("scale").unwrap().to_string();
    assert_eq!(scale, format!("scale={}:720", u32::MAX));
}

#[test]
fn breathe_scales_both_axes_in_phase() {
    let frag = build(
        &cinemagraph(CinemagraphMotion::Breathe, 1.0, None),
        &RenderParams::default(),
    );
    assert_eq!(
        frag.to_string(),
        "scale=1280:720,scale=w='iw*(1+0.05+0.05*sin(2*PI*t/5))':h='ih*(1+0.05+0.05*sin(2*PI*t/5))':eval=frame,crop=1280:720,fps=25"
    );
    assert_eq!(frag.span, FrameSpan::WholeSegment(125));
}
