use super::*;
use crate::animation::spec::{AnimationKind, AnimationSpec};
use crate::foundation::diagnostic::DiagnosticKind;
use crate::timeline::model::{FrameSegment, TransitionKind};

fn kb() -> Option<AnimationSpec> {
    Some(AnimationSpec::default_for(AnimationKind::KenBurns))
}

#[test]
fn inputs_and_audio_index_line_up() {
    let t = Timeline::new(
        ImageRef::parse("scene.png"),
        vec![
            FrameSegment::new(kb(), 2.0),
            FrameSegment::new(kb(), 2.0).with_image(ImageRef::parse("f1.png").unwrap()),
        ],
    );
    let c = compile_timeline(&t, true).unwrap();
    let inputs: Vec<&str> = c.inputs.iter().map(ImageRef::as_str).collect();
    assert_eq!(inputs, vec!["scene.png", "f1.png"]);
    assert_eq!(c.audio_input, Some(2));
    assert!(c.graph.to_string().contains("[2:a]atrim=duration=4"));
    assert_eq!(c.total_duration, 4.0);
}

#[test]
fn transitions_are_fitted_before_stitching() {
    let t = Timeline::new(
        ImageRef::parse("scene.png"),
        vec![
            FrameSegment::new(kb(), 1.0),
            FrameSegment::new(kb(), 1.0).with_transition(TransitionKind::Fade, 2.0),
        ],
    );
    let c = compile_timeline(&t, false).unwrap();
    assert_eq!(
        c.boundaries,
        vec![Boundary::Transition {
            index: 1,
            kind: TransitionKind::Fade,
            duration: 0.5,
            offset: 0.5,
        }]
    );
    assert_eq!(c.video_duration, 1.5);
    assert!(
        c.diagnostics
            .iter()
            .any(|d| d.kind == DiagnosticKind::TransitionClamped)
    );
}

#[test]
fn mismatch_is_reported_without_failing() {
    let mut t = Timeline::new(ImageRef::parse("scene.png"), vec![FrameSegment::new(kb(), 2.0)]);
    t.total_duration = Some(3.0);
    let c = compile_timeline(&t, true).unwrap();
    assert_eq!(c.mismatch.unwrap().target, 3.0);
    assert_eq!(c.total_duration, 3.0);
    assert!(
        c.diagnostics
            .iter()
            .any(|d| d.kind == DiagnosticKind::DurationMismatch)
    );
}

#[test]
fn hard_failures_are_errors() {
    let empty = Timeline::new(ImageRef::parse("scene.png"), vec![]);
    assert!(matches!(
        compile_timeline(&empty, true),
        Err(ReelError::Validation(_))
    ));

    let no_image = Timeline::new(None, vec![FrameSegment::new(kb(), 2.0)]);
    assert!(matches!(
        compile_timeline(&no_image, true),
        Err(ReelError::UnrenderableSegment { index: 0, .. })
    ));
}
