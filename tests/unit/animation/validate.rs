use super::*;
use crate::animation::direction::{Direction, DirectionSet};
use crate::animation::spec::{AnimationKind, Parallax, ParallaxDirection};

fn ken_burns(dirs: &[Direction], start: f64, end: f64, intensity: f64) -> AnimationSpec {
    AnimationSpec::KenBurns(KenBurns {
        intensity,
        start_scale: start,
        end_scale: end,
        directions: dirs.iter().copied().collect::<DirectionSet>(),
    })
}

#[test]
fn degenerate_zoom_falls_back() {
    let out = validate_spec(ken_burns(&[Direction::ZoomIn], 1.2, 1.2, 5.0));
    assert_eq!(
        out.value,
        Validated::Fallback(FallbackSpec {
            start_scale: 1.2,
            reason: FallbackReason::DegenerateZoom,
        })
    );
    assert_eq!(out.diagnostics[0].kind, DiagnosticKind::DegenerateZoom);
}

#[test]
fn zero_intensity_pan_falls_back() {
    let out = validate_spec(ken_burns(&[Direction::PanRight], 1.0, 1.3, 0.0));
    assert!(matches!(
        out.value,
        Validated::Fallback(FallbackSpec {
            reason: FallbackReason::ZeroIntensityPan,
            ..
        })
    ));
}

#[test]
fn empty_directions_fall_back_at_start_scale() {
    let out = validate_spec(ken_burns(&[], 1.4, 2.0, 5.0));
    assert_eq!(
        out.value,
        Validated::Fallback(FallbackSpec {
            start_scale: 1.4,
            reason: FallbackReason::EmptyDirections,
        })
    );
}

#[test]
fn scales_are_clamped_before_comparison() {
    let out = validate_spec(ken_burns(&[Direction::ZoomIn], 4.0, 9.0, 1.0));
    assert_eq!(
        out.value,
        Validated::Fallback(FallbackSpec {
            start_scale: MAX_SCALE,
            reason: FallbackReason::DegenerateZoom,
        })
    );

    let out = validate_spec(ken_burns(&[Direction::ZoomOut], 0.01, 2.0, 1.0));
    let Validated::Spec(AnimationSpec::KenBurns(kb)) = out.value else {
        panic!("expected spec");
    };
    assert_eq!(kb.start_scale, MIN_SCALE);
    assert_eq!(kb.end_scale, 2.0);
}

#[test]
fn pure_pan_with_equal_scales_is_valid() {
    let out = validate_spec(ken_burns(&[Direction::PanLeft], 1.0, 1.0, 8.0));
    assert!(matches!(out.value, Validated::Spec(AnimationSpec::KenBurns(_))));
    assert!(out.diagnostics.is_empty());
}

#[test]
fn zoom_only_ignores_zero_intensity() {
    let out = validate_spec(ken_burns(&[Direction::ZoomIn], 1.0, 2.0, 0.0));
    assert!(matches!(out.value, Validated::Spec(_)));
}

#[test]
fn parallax_speed_is_repaired() {
    let out = validate_spec(AnimationSpec::Parallax(Parallax {
        intensity: 1.0,
        speed: -1.0,
        direction: ParallaxDirection::LeftToRight,
    }));
    let Validated::Spec(AnimationSpec::Parallax(p)) = out.value else {
        panic!("expected parallax");
    };
    assert_eq!(p.speed, 0.5);
    assert_eq!(out.diagnostics[0].kind, DiagnosticKind::ValueClamped);
}

#[test]
fn validate_raw_reports_unknown_kind_as_none() {
    let raw = RawAnimationSpec {
        kind: "Glitch".to_string(),
        ..RawAnimationSpec::default()
    };
    let out = validate(&raw);
    assert!(out.value.is_none());

    let raw = RawAnimationSpec {
        kind: AnimationKind::Static.label().to_string(),
        ..RawAnimationSpec::default()
    };
    assert_eq!(
        validate(&raw).value,
        Some(Validated::Spec(AnimationSpec::Static))
    );
}
