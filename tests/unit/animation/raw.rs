use super::*;

fn kb(spec: Option<AnimationSpec>) -> KenBurns {
    match spec {
        Some(AnimationSpec::KenBurns(kb)) => kb,
        other => panic!("expected ken burns, got {other:?}"),
    }
}

#[test]
fn direction_accepts_string_csv_and_list() {
    let one: RawAnimationSpec =
        serde_json::from_str(r#"{"type":"Ken Burns","direction":"pan-left"}"#).unwrap();
    let csv: RawAnimationSpec =
        serde_json::from_str(r#"{"type":"Ken Burns","direction":"zoom-in, pan-left"}"#).unwrap();
    let list: RawAnimationSpec =
        serde_json::from_str(r#"{"type":"Ken Burns","directions":["pan-left","zoom-in"]}"#)
            .unwrap();

    assert_eq!(
        kb(one.to_spec().value).directions.single_pan(),
        Some(Direction::PanLeft)
    );
    assert_eq!(kb(csv.to_spec().value).directions, kb(list.to_spec().value).directions);
}

#[test]
fn unknown_directions_are_dropped_with_diagnostic() {
    let raw: RawAnimationSpec =
        serde_json::from_str(r#"{"type":"Ken Burns","direction":["spin","zoom-out"]}"#).unwrap();
    let out = raw.to_spec();
    assert_eq!(
        kb(out.value).directions.iter().collect::<Vec<_>>(),
        vec![Direction::ZoomOut]
    );
    assert_eq!(out.diagnostics.len(), 1);
    assert_eq!(out.diagnostics[0].kind, DiagnosticKind::UnknownDirection);
}

#[test]
fn scale_defaults_follow_ui_rules() {
    let raw: RawAnimationSpec =
        serde_json::from_str(r#"{"type":"Ken Burns","startScale":0,"direction":"zoom-in"}"#)
            .unwrap();
    let spec = kb(raw.to_spec().value);
    assert_eq!(spec.start_scale, 1.0);
    assert!((spec.end_scale - 1.1).abs() < 1e-12);
    assert_eq!(spec.intensity, 1.0);
}

#[test]
fn zero_intensity_is_kept() {
    let raw: RawAnimationSpec =
        serde_json::from_str(r#"{"type":"Ken Burns","intensity":0,"direction":"pan-up"}"#)
            .unwrap();
    assert_eq!(kb(raw.to_spec().value).intensity, 0.0);
}

#[test]
fn unknown_kind_is_none() {
    let raw: RawAnimationSpec = serde_json::from_str(r#"{"type":"Tilt Shift"}"#).unwrap();
    let out = raw.to_spec();
    assert!(out.value.is_none());
    assert_eq!(out.diagnostics[0].kind, DiagnosticKind::UnknownKind);

    let empty = RawAnimationSpec::default();
    assert!(empty.to_spec().value.is_none());
}

#[test]
fn parallax_and_cinemagraph_fields() {
    let raw: RawAnimationSpec = serde_json::from_str(
        r#"{"type":"Parallax","direction":"bottom-to-top","speed":1.0,"layers":2}"#,
    )
    .unwrap();
    let Some(AnimationSpec::Parallax(p)) = raw.to_spec().value else {
        panic!("expected parallax");
    };
    assert_eq!(p.direction, ParallaxDirection::BottomToTop);
    assert_eq!(p.speed, 1.0);

    let raw: RawAnimationSpec = serde_json::from_str(
        r#"{"type":"Cinemagraph","motionType":"ripple","loopDuration":-2}"#,
    )
    .unwrap();
    let out = raw.to_spec();
    let Some(AnimationSpec::Cinemagraph(c)) = out.value else {
        panic!("expected cinemagraph");
    };
    assert_eq!(c.motion, CinemagraphMotion::SubtleZoom);
    assert_eq!(c.loop_duration, None);
    assert_eq!(c.mask, "center");
    assert_eq!(out.diagnostics[0].kind, DiagnosticKind::UnknownOption);
}

#[test]
fn dolly_zoom_keeps_missing_fov() {
    let raw: RawAnimationSpec =
        serde_json::from_str(r#"{"type":"Dolly Zoom","startFov":40}"#).unwrap();
    let Some(AnimationSpec::DollyZoom(d)) = raw.to_spec().value else {
        panic!("expected dolly zoom");
    };
    assert_eq!(d.start_fov, Some(40.0));
    assert_eq!(d.end_fov, None);
}

#[test]
fn render_params_take_settings_overrides() {
    let raw: RawAnimationSpec =
        serde_json::from_str(r#"{"type":"Static","width":1081,"height":1081,"duration":3}"#)
            .unwrap();
    let p = raw.render_params(RenderParams::default());
    assert_eq!(p.canvas.size_token(), "1080x1080");
    assert_eq!(p.duration, 3.0);
}
