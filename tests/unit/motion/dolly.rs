use super::*;

fn dolly(start: Option<f64>, end: Option<f64>) -> DollyZoom {
    DollyZoom {
        intensity: 1.0,
        start_fov: start,
        end_fov: end,
        focus_point: "center".into(),
    }
}

#[test]
fn ramps_between_fov_ratios() {
    let frag = build(&dolly(Some(50.0), Some(80.0)), &RenderParams::default()).unwrap();
    assert_eq!(
        frag.to_string(),
        "zoompan=z='1+(0.625-1)*on/125':x='iw/2-(iw/zoom/2)':y='ih/2-(ih/zoom/2)':d=1:s=1280x720:fps=25"
    );
}

#[test]
fn missing_or_zero_fov_is_reported() {
    let err = build(&dolly(None, Some(80.0)), &RenderParams::default()).unwrap_err();
    assert_eq!(err.kind, DiagnosticKind::MissingField);
    assert!(err.message.contains("startFov"));

    let err = build(&dolly(Some(50.0), Some(0.0)), &RenderParams::default()).unwrap_err();
    assert!(err.message.contains("endFov"));
}
