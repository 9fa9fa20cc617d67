use trackpaint_geom::{BoundBoxXYZ, CoordsXY, CoordsXYZ, Direction};
use trackpaint_session::{ImageId, PaintSession, SEGMENT_HEIGHT_BLOCKED, SUPPORTS_SLOPE_ABOVE_SCENERY, Segment};
use trackpaint_supports::SupportType;

use crate::element::{Ride, TrackElement};

/// Paints one tile of one track element into the session.
///
/// Arguments: session, ride, track sequence, direction, height, element, support type.
pub type PaintFunction = fn(&mut PaintSession, &Ride, u8, Direction, i32, &TrackElement, SupportType);

/// Straight pieces only put supports under every other tile, checkerboard style.
#[inline]
pub const fn should_paint_supports(position: CoordsXY) -> bool {
    (position.x & 32) == (position.y & 32)
}

/// Parent sprite whose bounding box starts at the sprite offset.
#[inline]
pub fn add_image_at(session: &mut PaintSession, image: ImageId, offset: CoordsXYZ, length: CoordsXYZ) -> Option<usize> {
    session.add_image_as_parent(image, offset, BoundBoxXYZ::new(offset, length))
}

/// [`add_image_at`] with the layout swapped for odd directions.
#[inline]
pub fn add_image_at_rotated(
    session: &mut PaintSession,
    direction: Direction,
    image: ImageId,
    offset: CoordsXYZ,
    length: CoordsXYZ,
) -> Option<usize> {
    session.add_image_as_parent_rotated(direction, image, offset, length, offset)
}

/// Marks the sub-regions the track occupies so no support is routed through them.
#[inline]
pub fn block_segments(session: &mut PaintSession, segments: Segment) {
    session.set_segment_support_height(segments, SEGMENT_HEIGHT_BLOCKED, 0);
}

/// [`block_segments`] for a mask drawn in direction 0.
#[inline]
pub fn block_segments_rotated(session: &mut PaintSession, segments: Segment, direction: Direction) {
    block_segments(session, segments.rotated(direction));
}

/// Clearance above the piece that scenery and supports must respect.
#[inline]
pub fn set_track_clearance(session: &mut PaintSession, height: i32) {
    session.set_general_support_height(height, SUPPORTS_SLOPE_ABOVE_SCENERY);
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn rotated_block_leaves_centre_in_place() {
        let mut session = PaintSession::new();
        block_segments_rotated(&mut session, Segment::D0 | Segment::C4 | Segment::CC, 1);
        let touched = Segment::from_bits_truncate(session.stats.segments_touched);
        assert!(touched.contains(Segment::C4));
        assert_eq!(touched.bits().count_ones(), 3);
        assert_eq!(session.stats.segment_calls, 1);
    }

    proptest! {
        #[test]
        fn checkerboard_alternates_along_both_axes(tx in 0i32..256, ty in 0i32..256) {
            let here = should_paint_supports(CoordsXY::new(tx * 32, ty * 32));
            prop_assert_ne!(here, should_paint_supports(CoordsXY::new((tx + 1) * 32, ty * 32)));
            prop_assert_ne!(here, should_paint_supports(CoordsXY::new(tx * 32, (ty + 1) * 32)));
            prop_assert_eq!(here, (tx + ty) % 2 == 0);
        }
    }
}
