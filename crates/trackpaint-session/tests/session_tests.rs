use trackpaint_geom::{BoundBoxXYZ, xyz};
use trackpaint_session::{
    ColourScheme, ColourTemplate, DrawKind, IMAGE_INDEX_UNDEFINED, PaintSession,
    SEGMENT_HEIGHT_BLOCKED, Segment, TunnelGroup, TunnelSubType,
};

#[test]
fn rotated_parent_swaps_odd_directions() {
    let mut s = PaintSession::new();
    let img = s.track_colour(ColourScheme::Track).with_index(100);
    s.add_image_as_parent_rotated(1, img, xyz(1, 2, 3), xyz(32, 20, 2), xyz(0, 6, 3));
    let dc = s.draw_calls()[0];
    assert_eq!(dc.offset, xyz(2, 1, 3));
    assert_eq!(dc.bound_box, BoundBoxXYZ::new(xyz(6, 0, 3), xyz(20, 32, 2)));
    assert_eq!(dc.kind, DrawKind::Parent);
}

#[test]
fn child_without_parent_becomes_parent() {
    let mut s = PaintSession::new();
    let img = s.track_colour(ColourScheme::Misc).with_index(7);
    s.add_image_as_child(img, xyz(0, 0, 0), BoundBoxXYZ::default());
    assert_eq!(s.draw_calls()[0].kind, DrawKind::Parent);
    s.add_image_as_child(img, xyz(0, 0, 0), BoundBoxXYZ::default());
    assert_eq!(s.draw_calls()[1].kind, DrawKind::Child { parent: 0 });
}

#[test]
fn sentinel_images_are_never_drawn() {
    let mut s = PaintSession::new();
    let img = s.track_colour(ColourScheme::Track).with_index(IMAGE_INDEX_UNDEFINED);
    assert!(s.add_image_as_parent(img, xyz(0, 0, 0), BoundBoxXYZ::default()).is_none());
    assert!(s.add_image_as_child(img, xyz(0, 0, 0), BoundBoxXYZ::default()).is_none());
    assert!(s.draw_calls().is_empty());
}

#[test]
fn rotated_tunnels_split_by_parity() {
    let mut s = PaintSession::new();
    for d in 0..4 {
        s.push_tunnel_rotated(d, 16, TunnelGroup::Square, TunnelSubType::Flat);
    }
    assert_eq!(s.left_tunnels.len(), 2);
    assert_eq!(s.right_tunnels.len(), 2);
    assert_eq!(s.left_tunnels[0].legacy_type(), 6);
}

#[test]
fn general_support_height_only_rises() {
    let mut s = PaintSession::new();
    s.set_general_support_height(48, 0x20);
    s.set_general_support_height(32, 0x20);
    assert_eq!(s.support.height, 48);
    assert_eq!(s.stats.general_calls, 2);
}

#[test]
fn blocked_segments_keep_slope() {
    let mut s = PaintSession::new().with_surface(16, 3);
    s.set_segment_support_height(Segment::C4 | Segment::B4, SEGMENT_HEIGHT_BLOCKED, 0);
    assert_eq!(s.support_segments[4].height, SEGMENT_HEIGHT_BLOCKED);
    assert_eq!(s.support_segments[4].slope, 3);
    assert_eq!(s.support_segments[0].height, SEGMENT_HEIGHT_BLOCKED);
    assert_eq!(s.support_segments[1].height, 16);
    assert_eq!(s.stats.segments_touched, (Segment::C4 | Segment::B4).bits());
}

#[test]
fn ghost_sessions_use_ghost_template() {
    let mut s = PaintSession::new();
    s.ghost = true;
    assert_eq!(s.track_colour(ColourScheme::Track).template, ColourTemplate::Ghost);
}

#[test]
fn reset_restores_ground() {
    let mut s = PaintSession::new().with_surface(8, 0);
    s.set_general_support_height(64, 0x20);
    s.push_tunnel_left(0, TunnelGroup::Standard, TunnelSubType::Flat);
    s.reset();
    assert_eq!(s.support.height, 8);
    assert_eq!(s.tunnel_count(), 0);
    assert_eq!(s.stats.general_calls, 0);
}
