use super::*;
use crate::animation::direction::{Direction, DirectionSet};
use crate::animation::spec::{AnimationKind, DollyZoom, KenBurns};
use crate::foundation::diagnostic::DiagnosticKind;
use crate::motion::kenburns;

fn ken_burns(dirs: &[Direction], start: f64, end: f64, intensity: f64) -> AnimationSpec {
    AnimationSpec::KenBurns(KenBurns {
        intensity,
        start_scale: start,
        end_scale: end,
        directions: dirs.iter().copied().collect::<DirectionSet>(),
    })
}

#[test]
fn building_is_deterministic() {
    let params = RenderParams::default();
    for kind in AnimationKind::ALL {
        let spec = AnimationSpec::default_for(kind);
        assert_eq!(
            build_motion_fragment(&spec, &params),
            build_motion_fragment(&spec, &params)
        );
    }
}

#[test]
fn every_fragment_resolves_to_an_even_canvas() {
    let params = RenderParams {
        duration: 3.0,
        canvas: Canvas {
            width: 641,
            height: 481,
        },
        fps: crate::foundation::core::Fps::DEFAULT,
    };
    for kind in AnimationKind::ALL {
        let built = build_motion_fragment(&AnimationSpec::default_for(kind), &params);
        let size = built.fragment.output_size();
        assert!(size.is_even(), "{kind}: {size:?}");
        assert!(size.width <= 641 && size.height <= 481);
    }
}

#[test]
fn degenerate_zoom_equals_static_zoom() {
    let params = RenderParams::default();
    let built = build_motion_fragment(&ken_burns(&[Direction::ZoomIn], 1.3, 1.3, 5.0), &params);
    assert_eq!(built.fragment, kenburns::static_zoom(1.3, &params));
    assert_eq!(built.diagnostics[0].kind, DiagnosticKind::DegenerateZoom);
}

#[test]
fn zero_intensity_pan_equals_static_zoom() {
    let params = RenderParams::default();
    let built = build_motion_fragment(&ken_burns(&[Direction::PanDown], 1.0, 1.2, 0.0), &params);
    assert_eq!(built.fragment, kenburns::static_zoom(1.0, &params));
}

#[test]
fn empty_directions_use_static_zoom_at_start_scale() {
    let params = RenderParams::default();
    let built = build_motion_fragment(&ken_burns(&[], 1.1, 1.4, 5.0), &params);
    assert_eq!(
        built.fragment.to_string(),
        "zoompan=z='1.1':x='iw/2-(iw/zoom/2)':y='ih/2-(ih/zoom/2)':d=125:s=1280x720:fps=25"
    );
    assert_eq!(built.fragment.span, FrameSpan::WholeSegment(125));
}

#[test]
fn missing_fov_degrades_to_pass_through() {
    let params = RenderParams::default();
    let spec = AnimationSpec::DollyZoom(DollyZoom {
        intensity: 1.0,
        start_fov: Some(50.0),
        end_fov: None,
        focus_point: "center".into(),
    });
    let built = build_motion_fragment(&spec, &params);
    assert_eq!(built.fragment, pass_through(&params));
    assert_eq!(built.diagnostics.len(), 1);
    assert_eq!(built.diagnostics[0].kind, DiagnosticKind::MissingField);
}

#[test]
fn static_is_scale_and_pad() {
    let built = build_motion_fragment(&AnimationSpec::Static, &RenderParams::default());
    assert_eq!(
        built.fragment.to_string(),
        "scale=1280:720:force_original_aspect_ratio=decrease,pad=1280:720:(ow-iw)/2:(oh-ih)/2,fps=25"
    );
    assert_eq!(built.fragment.family, FragmentFamily::PassThrough);
    assert!(built.diagnostics.is_empty());
}

#[test]
fn scene_filter_appends_safety_stage() {
    let raw: RawAnimationSpec = serde_json::from_str(
        r#"{"type":"Ken Burns","direction":"zoom-in","startScale":1.0,"endScale":1.5}"#,
    )
    .unwrap();
    let out = compile_scene_filter(&raw, &RenderParams::default());
    assert_eq!(
        out.value.as_deref(),
        Some(
            "zoompan=z='1+(1.5-1)*on/125':x='iw/2-(iw/zoom/2)':y='ih/2-(ih/zoom/2)':d=1:s=1280x720:fps=25,scale=trunc(iw/2)*2:trunc(ih/2)*2"
        )
    );
    assert!(out.diagnostics.is_empty());
}

#[test]
fn scene_filter_is_none_for_static_and_unknown() {
    let params = RenderParams::default();
    let stat: RawAnimationSpec = serde_json::from_str(r#"{"type":"Static"}"#).unwrap();
    assert_eq!(compile_scene_filter(&stat, &params).value, None);

    let unknown: RawAnimationSpec = serde_json::from_str(r#"{"type":"Vortex"}"#).unwrap();
    let out = compile_scene_filter(&unknown, &params);
    assert_eq!(out.value, None);
    assert_eq!(out.diagnostics[0].kind, DiagnosticKind::UnknownKind);
}
