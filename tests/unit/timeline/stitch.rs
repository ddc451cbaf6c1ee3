use super::*;
use crate::timeline::model::{FrameSegment, ImageRef, Timeline};
use crate::timeline::segment::compile_segment;

fn compiled(segments: Vec<FrameSegment>) -> Vec<CompiledSegment> {
    let t = Timeline::new(ImageRef::parse("scene.png"), segments);
    (0..t.segments.len())
        .map(|i| compile_segment(&t, i).unwrap())
        .collect()
}

#[test]
fn two_segment_offset_is_first_duration_minus_overlap() {
    let segs = compiled(vec![
        FrameSegment::new(None, 3.0),
        FrameSegment::new(None, 2.0).with_transition(TransitionKind::WipeLeft, 0.5),
    ]);
    assert_eq!(
        plan_boundaries(&segs),
        vec![Boundary::Transition {
            index: 1,
            kind: TransitionKind::WipeLeft,
            duration: 0.5,
            offset: 2.5,
        }]
    );
    assert_eq!(stitched_duration(&segs), 4.5);
}

#[test]
fn mixed_boundaries_fold_left_to_right() {
    let segs = compiled(vec![
        FrameSegment::new(None, 2.0),
        FrameSegment::new(None, 2.0).with_transition(TransitionKind::Fade, 0.5),
        FrameSegment::new(None, 2.0),
    ]);
    let graph = stitch(&segs, None, 6.0).unwrap().to_string();
    assert!(graph.contains("[s0][s1]xfade=transition=fade:duration=0.5:offset=1.5[x1]"));
    assert!(graph.contains("[x1][s2]concat=n=2:v=1:a=0[x2]"));
    assert!(graph.ends_with("[x2]scale=trunc(iw/2)*2:trunc(ih/2)*2[vout]"));
}

#[test]
fn later_offsets_account_for_earlier_overlaps() {
    let segs = compiled(vec![
        FrameSegment::new(None, 2.0),
        FrameSegment::new(None, 2.0).with_transition(TransitionKind::Fade, 0.5),
        FrameSegment::new(None, 2.0).with_transition(TransitionKind::Dissolve, 0.5),
    ]);
    let offsets: Vec<f64> = plan_boundaries(&segs)
        .into_iter()
        .filter_map(|b| match b {
            Boundary::Transition { offset, .. } => Some(offset),
            Boundary::Cut { .. } => None,
        })
        .collect();
    assert_eq!(offsets, vec![1.5, 3.0]);
}

#[test]
fn no_transitions_use_one_concat() {
    let segs = compiled(vec![
        FrameSegment::new(None, 1.0),
        FrameSegment::new(None, 2.0),
        FrameSegment::new(None, 1.5),
    ]);
    let graph = stitch(&segs, None, 4.5).unwrap();
    let text = graph.to_string();
    assert!(text.ends_with(
        "[s0][s1][s2]concat=n=3:v=1:a=0,scale=trunc(iw/2)*2:trunc(ih/2)*2[vout]"
    ));
    assert!(!text.contains("xfade"));
    assert_eq!(stitched_duration(&segs), 4.5);
    assert!(plan_boundaries(&segs).iter().all(|b| matches!(b, Boundary::Cut { .. })));
}

#[test]
fn single_segment_has_no_join() {
    let segs = compiled(vec![FrameSegment::new(None, 2.0)]);
    let graph = stitch(&segs, None, 2.0).unwrap();
    assert_eq!(
        graph.to_string(),
        format!(
            "[0:v]{},scale=trunc(iw/2)*2:trunc(ih/2)*2[vout]",
            segs[0].chain
        )
    );
    assert!(plan_boundaries(&segs).is_empty());
}

#[test]
fn audio_is_trimmed_to_total() {
    let segs = compiled(vec![FrameSegment::new(None, 2.0), FrameSegment::new(None, 2.0)]);
    let graph = stitch(&segs, Some(2), 4.2).unwrap();
    assert!(
        graph
            .to_string()
            .ends_with(";[2:a]atrim=duration=4.2,asetpts=PTS-STARTPTS[aout]")
    );
    assert_eq!(graph.mapped_outputs(), vec!["[vout]", "[aout]"]);
}

#[test]
fn empty_timeline_is_rejected() {
    assert!(matches!(stitch(&[], None, 1.0), Err(ReelError::Validation(_))));
}

#[test]
fn oversized_transition_is_planned_as_cut() {
    let mut segs = compiled(vec![FrameSegment::new(None, 1.0), FrameSegment::new(None, 1.0)]);
    segs[1].transition = Some(crate::timeline::model::Transition {
        kind: TransitionKind::Fade,
        duration: 1.5,
    });
    assert_eq!(plan_boundaries(&segs), vec![Boundary::Cut { index: 1 }]);
}

#[test]
fn transition_fitted_to_the_whole_previous_segment_starts_at_zero() {
    let mut segs = compiled(vec![FrameSegment::new(None, 1.0), FrameSegment::new(None, 1.0)]);
    segs[1].transition = Some(crate::timeline::model::Transition {
        kind: TransitionKind::Fade,
        duration: 1.0,
    });
    assert_eq!(
        plan_boundaries(&segs),
        vec![Boundary::Transition {
            index: 1,
            kind: TransitionKind::Fade,
            duration: 1.0,
            offset: 0.0,
        }]
    );
    assert_eq!(stitched_duration(&segs), 1.0);
}
