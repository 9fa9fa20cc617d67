use proptest::prelude::*;
use trackpaint_geom::{BoundBoxXYZ, xyz};
use trackpaint_session::{
    ColourScheme, ColourTemplate, DrawKind, PaintSession, SEGMENT_HEIGHT_BLOCKED, SUPPORTS_SLOPE_ABOVE_SCENERY,
    SessionFlags, ViewFlags,
};
use trackpaint_supports::{
    MetalSupportType, SupportType, WoodenSupportType, metal_a_supports_paint_setup,
    wooden_a_supports_paint_setup, wooden_b_supports_paint_setup,
};

const TUBES: SupportType = SupportType::Metal(MetalSupportType::Tubes);
const TRUSS: SupportType = SupportType::Wooden(WoodenSupportType::Truss);

fn supports_colour(s: &PaintSession) -> trackpaint_session::ImageId {
    s.track_colour(ColourScheme::Supports)
}

#[test]
fn wooden_single_full_piece_on_flat_ground() {
    let mut s = PaintSession::new();
    let c = supports_colour(&s);
    assert!(wooden_a_supports_paint_setup(&mut s, TRUSS, 0, 0, 32, c));
    let calls = s.draw_calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].image.index, 3392);
    assert_eq!(calls[0].bound_box, BoundBoxXYZ::new(xyz(0, 0, 0), xyz(32, 32, 23)));
}

#[test]
fn wooden_b_caps_a_slope_with_a_thin_box() {
    let mut a = PaintSession::new().with_surface(0, 1);
    let c = supports_colour(&a);
    assert!(wooden_a_supports_paint_setup(&mut a, TRUSS, 0, 0, 32, c));
    let mut b = PaintSession::new().with_surface(0, 1);
    assert!(wooden_b_supports_paint_setup(&mut b, TRUSS, 0, 0, 32, c));

    let images: Vec<u32> = b.draw_calls().iter().map(|d| d.image.index).collect();
    assert_eq!(images, vec![3536, 3393]);
    assert_eq!(a.draw_calls()[0].bound_box, BoundBoxXYZ::new(xyz(0, 0, 2), xyz(32, 32, 11)));
    assert_eq!(b.draw_calls()[0].bound_box, BoundBoxXYZ::new(xyz(0, 0, 2), xyz(32, 32, 3)));
}

#[test]
fn wooden_b_skips_a_base_with_nothing_on_it() {
    let mut a = PaintSession::new().with_surface(32, SUPPORTS_SLOPE_ABOVE_SCENERY);
    let c = supports_colour(&a);
    assert!(wooden_a_supports_paint_setup(&mut a, TRUSS, 0, 0, 32, c));
    assert_eq!(a.draw_calls().len(), 1);

    let mut b = PaintSession::new().with_surface(32, SUPPORTS_SLOPE_ABOVE_SCENERY);
    assert!(!wooden_b_supports_paint_setup(&mut b, TRUSS, 0, 0, 32, c));
    assert!(b.draw_calls().is_empty());
}

#[test]
fn wooden_below_ground_draws_nothing() {
    let mut s = PaintSession::new().with_surface(64, 0);
    let c = supports_colour(&s);
    assert!(!wooden_a_supports_paint_setup(&mut s, TRUSS, 1, 0, 32, c));
    assert!(s.draw_calls().is_empty());
}

#[test]
fn wrong_family_is_not_drawn() {
    let mut s = PaintSession::new();
    let c = supports_colour(&s);
    assert!(!wooden_a_supports_paint_setup(&mut s, TUBES, 0, 0, 32, c));
    assert!(!metal_a_supports_paint_setup(&mut s, TRUSS, 4, 0, 32, c));
    assert!(s.draw_calls().is_empty());
}

#[test]
fn supports_wait_for_surface() {
    let mut s = PaintSession::new();
    s.flags = SessionFlags::empty();
    let c = supports_colour(&s);
    assert!(!metal_a_supports_paint_setup(&mut s, TUBES, 4, 0, 32, c));
    assert!(!wooden_a_supports_paint_setup(&mut s, TRUSS, 0, 0, 32, c));
}

#[test]
fn hidden_supports_darken_or_vanish() {
    let mut s = PaintSession::new();
    s.view_flags = ViewFlags::HIDE_SUPPORTS;
    let c = supports_colour(&s);
    assert!(wooden_a_supports_paint_setup(&mut s, TRUSS, 0, 0, 32, c));
    assert_eq!(s.draw_calls()[0].image.template, ColourTemplate::Darken);

    let mut s = PaintSession::new();
    s.view_flags = ViewFlags::HIDE_SUPPORTS | ViewFlags::INVISIBLE_SUPPORTS;
    assert!(!wooden_a_supports_paint_setup(&mut s, TRUSS, 0, 0, 32, c));
    assert!(s.draw_calls().is_empty());
}

#[test]
fn metal_pole_on_clear_segment() {
    let mut s = PaintSession::new();
    let c = supports_colour(&s);
    assert!(metal_a_supports_paint_setup(&mut s, TUBES, 4, 0, 32, c));
    let images: Vec<u32> = s.draw_calls().iter().map(|d| d.image.index).collect();
    // base plate, a 10 unit stub up to the boundary, one 16 unit beam
    assert_eq!(images, vec![3243, 3209 + 9, 3209 + 15]);
    assert_eq!(s.support_segments[4].height, SEGMENT_HEIGHT_BLOCKED);
    assert_eq!(s.support_segments[4].slope, 0x20);
}

#[test]
fn metal_pole_moves_off_blocked_segment() {
    let mut s = PaintSession::new();
    s.support_segments[4].height = SEGMENT_HEIGHT_BLOCKED;
    let c = supports_colour(&s);
    assert!(metal_a_supports_paint_setup(&mut s, TUBES, 4, 0, 48, c));
    assert_eq!(s.draw_calls()[0].image.index, 3371);
    assert_eq!(s.support_segments[5].height, 48);
}

#[test]
fn metal_special_extends_above_track() {
    let mut s = PaintSession::new();
    let c = supports_colour(&s);
    metal_a_supports_paint_setup(&mut s, TUBES, 4, 8, 32, c);
    let last = s.draw_calls().last().copied().unwrap();
    assert_eq!(last.image.index, 3226 + 7);
    assert_eq!(last.offset, xyz(16, 16, 32));
}

#[test]
fn curved_piece_hangs_under_prepend_target() {
    let mut s = PaintSession::new();
    let track = s.track_colour(ColourScheme::Track).with_index(1);
    let target = s.add_image_as_parent(track, xyz(0, 0, 32), BoundBoxXYZ::default());
    s.wooden_supports_prepend_to = target;
    let c = supports_colour(&s);
    assert!(wooden_a_supports_paint_setup(&mut s, TRUSS, 0, 14, 32, c));
    let last = s.draw_calls().last().copied().unwrap();
    assert_eq!(last.image.index, 3465 + 13);
    assert_eq!(last.kind, DrawKind::Attached { to: 0 });
    assert_eq!(last.bound_box, BoundBoxXYZ::new(xyz(10, 0, 32), xyz(10, 32, 44)));
}

#[test]
fn corner_sub_types_have_no_curves() {
    let mut s = PaintSession::new();
    let c = supports_colour(&s);
    wooden_a_supports_paint_setup(&mut s, TRUSS, 2, 14, 32, c);
    assert_eq!(s.draw_calls().len(), 1);
}

proptest! {
    // Wooden stacks fill exactly the span between ground and track
    #[test]
    fn wooden_stack_reaches_track(steps in 1i32..24, sub in 0u8..2) {
        let mut s = PaintSession::new();
        let c = supports_colour(&s);
        let height = steps * 16;
        prop_assert!(wooden_a_supports_paint_setup(&mut s, TRUSS, sub, 0, height, c));
        let top: i32 = s
            .draw_calls()
            .iter()
            .map(|d| if d.bound_box.length.z >= 23 { 32 } else { 16 })
            .sum();
        prop_assert_eq!(top, height);
    }

    // Metal poles never draw below ground or above the track
    #[test]
    fn metal_pole_stays_in_span(height in 8i32..400, segment in 0u8..9) {
        let mut s = PaintSession::new();
        let c = supports_colour(&s);
        metal_a_supports_paint_setup(&mut s, TUBES, segment, 0, height, c);
        for d in s.draw_calls() {
            prop_assert!(d.offset.z >= 0);
            prop_assert!(d.offset.z < height);
        }
    }
}
