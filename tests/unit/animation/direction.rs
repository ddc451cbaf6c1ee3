use super::*;

#[test]
fn wire_strings_round_trip() {
    for dir in Direction::ALL {
        assert_eq!(Direction::parse(dir.as_str()), Some(dir));
    }
    assert_eq!(Direction::parse(" pan-up "), Some(Direction::PanUp));
    assert_eq!(Direction::parse("Pan-Up"), None);
    assert_eq!(Direction::parse("left-to-right"), None);
}

#[test]
fn set_is_order_insensitive() {
    let a: DirectionSet = [Direction::PanRight, Direction::ZoomIn].into_iter().collect();
    let b: DirectionSet = [Direction::ZoomIn, Direction::PanRight, Direction::ZoomIn]
        .into_iter()
        .collect();
    assert_eq!(a, b);
    assert_eq!(
        a.iter().collect::<Vec<_>>(),
        vec![Direction::ZoomIn, Direction::PanRight]
    );
}

#[test]
fn conflicts_follow_precedence_regardless_of_order() {
    let (set, diags) =
        DirectionSet::from_directions([Direction::ZoomOut, Direction::ZoomIn, Direction::PanRight, Direction::PanLeft]);
    assert_eq!(set.zoom, Some(Zoom::In));
    assert_eq!(set.horizontal, Some(HorizontalPan::Left));
    assert_eq!(diags.len(), 2);
    assert!(
        diags
            .iter()
            .all(|d| d.kind == DiagnosticKind::ConflictingDirections)
    );

    let (set, _) = DirectionSet::from_directions([Direction::PanUp, Direction::PanDown]);
    assert_eq!(set.vertical, Some(VerticalPan::Up));
}

#[test]
fn horizontal_and_vertical_pans_combine() {
    let set: DirectionSet = [Direction::PanUp, Direction::PanRight].into_iter().collect();
    assert!(set.has_pan());
    assert!(!set.has_zoom());
    assert_eq!(set.single_pan(), None);
}

#[test]
fn single_pan_requires_no_zoom() {
    let set: DirectionSet = [Direction::PanLeft].into_iter().collect();
    assert_eq!(set.single_pan(), Some(Direction::PanLeft));

    let set: DirectionSet = [Direction::PanLeft, Direction::ZoomIn].into_iter().collect();
    assert_eq!(set.single_pan(), None);
}

#[test]
fn serde_uses_wire_strings() {
    let set: DirectionSet = serde_json::from_str(r#"["pan-down","zoom-out"]"#).unwrap();
    assert_eq!(set.zoom, Some(Zoom::Out));
    assert_eq!(set.vertical, Some(VerticalPan::Down));
    assert_eq!(
        serde_json::to_string(&set).unwrap(),
        r#"["zoom-out","pan-down"]"#
    );
}
