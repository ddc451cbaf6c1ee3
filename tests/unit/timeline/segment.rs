use super::*;
use crate::animation::direction::{Direction, DirectionSet};
use crate::animation::spec::KenBurns;
use crate::timeline::model::{FrameSegment, TransitionKind};

fn ken_burns(dirs: &[Direction], start: f64, end: f64, intensity: f64) -> Option<AnimationSpec> {
    Some(AnimationSpec::KenBurns(KenBurns {
        intensity,
        start_scale: start,
        end_scale: end,
        directions: dirs.iter().copied().collect::<DirectionSet>(),
    }))
}

fn timeline(segments: Vec<FrameSegment>) -> Timeline {
    Timeline::new(ImageRef::parse("scene.png"), segments)
}

#[test]
fn first_segment_always_uses_primary_image() {
    let t = timeline(vec![
        FrameSegment::new(None, 2.0).with_image(ImageRef::parse("own0.png").unwrap()),
        FrameSegment::new(None, 2.0).with_image(ImageRef::parse("own1.png").unwrap()),
        FrameSegment::new(None, 2.0),
    ]);
    assert_eq!(compile_segment(&t, 0).unwrap().input.as_str(), "scene.png");
    assert_eq!(compile_segment(&t, 1).unwrap().input.as_str(), "own1.png");
    assert_eq!(compile_segment(&t, 2).unwrap().input.as_str(), "scene.png");
}

#[test]
fn missing_primary_image_is_unrenderable() {
    let mut t = timeline(vec![FrameSegment::new(None, 2.0), FrameSegment::new(None, 2.0)]);
    t.primary_image = None;
    let err = compile_segment(&t, 1).unwrap_err();
    assert!(matches!(err, ReelError::UnrenderableSegment { index: 1, .. }));
}

#[test]
fn zoompan_duration_token_spans_the_segment() {
    let t = timeline(vec![FrameSegment::new(
        ken_burns(&[Direction::ZoomIn], 1.0, 1.5, 1.0),
        2.0,
    )]);
    let seg = compile_segment(&t, 0).unwrap();
    assert_eq!(seg.frames, 50);
    assert_eq!(
        seg.chain.to_string(),
        "zoompan=z='1+(1.5-1)*on/50':x='iw/2-(iw/zoom/2)':y='ih/2-(ih/zoom/2)':d=50:s=1280x720:fps=25,trim=duration=2,setpts=PTS-STARTPTS,setsar=1"
    );
}

#[test]
fn time_expressions_loop_the_still_image() {
    let t = timeline(vec![FrameSegment::new(
        ken_burns(&[Direction::PanLeft], 1.0, 1.0, 8.0),
        2.0,
    )]);
    let seg = compile_segment(&t, 0).unwrap();
    assert_eq!(seg.family, FragmentFamily::TimeExpression);
    assert!(
        seg.chain
            .to_string()
            .starts_with("loop=loop=49:size=1:start=0,setpts=N/25/TB,scale=1920:1080,crop=")
    );
}

#[test]
fn static_segments_are_held_with_tpad() {
    let t = timeline(vec![FrameSegment::new(None, 1.5)]);
    let seg = compile_segment(&t, 0).unwrap();
    assert_eq!(seg.family, FragmentFamily::PassThrough);
    assert!(seg.chain.to_string().ends_with(
        "fps=25,tpad=stop_mode=clone:stop_duration=1.5,trim=duration=1.5,setpts=PTS-STARTPTS,setsar=1"
    ));
}

#[test]
fn diagnostics_carry_the_segment_index() {
    let t = timeline(vec![
        FrameSegment::new(None, 2.0),
        FrameSegment::new(ken_burns(&[], 1.0, 1.2, 1.0), 2.0)
            .with_transition(TransitionKind::Fade, 0.5),
    ]);
    let seg = compile_segment(&t, 1).unwrap();
    assert_eq!(seg.diagnostics.len(), 1);
    assert_eq!(seg.diagnostics[0].segment, Some(1));
    assert_eq!(seg.transition.unwrap().kind, TransitionKind::Fade);
}

#[test]
fn out_of_range_index_is_rejected() {
    let t = timeline(vec![FrameSegment::new(None, 2.0)]);
    assert!(matches!(
        compile_segment(&t, 3),
        Err(ReelError::Validation(_))
    ));
}
