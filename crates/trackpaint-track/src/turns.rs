//! Table-driven painting shared by the curved pieces.
//!
//! A right quarter turn is described once per direction; left turns reuse it by
//! remapping the sequence and rotating one step clockwise.

use trackpaint_geom::{BoundBoxXYZ, CoordsXY, CoordsXYZ, Direction, xyz};
use trackpaint_session::{ColourScheme, ImageId, ImageIndex, PaintSession, TunnelGroup, TunnelSubType};
use trackpaint_supports::{SupportType, wooden_a_supports_paint_setup};

/// Sprite slot for each tile of a right quarter turn of five; -1 tiles draw nothing.
pub const RIGHT_QUARTER_TURN_5_TILES_SPRITE_MAP: [i8; 7] = [0, -1, 1, 2, -1, 3, 4];
pub const RIGHT_QUARTER_TURN_3_TILES_SPRITE_MAP: [i8; 4] = [0, -1, 1, 2];
pub const EIGHTH_TO_DIAG_SPRITE_MAP: [i8; 5] = [0, 1, 2, -1, 3];

/// Left turn sequence to the matching right turn sequence.
pub const MAP_LEFT_QUARTER_TURN_5_TILES_TO_RIGHT: [u8; 7] = [6, 4, 5, 3, 1, 2, 0];
pub const MAP_LEFT_QUARTER_TURN_3_TILES_TO_RIGHT: [u8; 4] = [3, 1, 2, 0];
pub const MAP_LEFT_EIGHTH_TURN_TO_ORTHOGONAL: [u8; 5] = [4, 2, 3, 1, 0];

/// Direction a left turn borrows from its right-hand twin.
#[inline]
pub const fn left_turn_direction(direction: Direction) -> Direction {
    (direction + 1) & 3
}

#[inline]
pub fn quarter_turn_5_index(sequence: u8) -> Option<usize> {
    match RIGHT_QUARTER_TURN_5_TILES_SPRITE_MAP.get(sequence as usize) {
        Some(&i) if i >= 0 => Some(i as usize),
        _ => None,
    }
}

#[inline]
pub fn quarter_turn_3_index(sequence: u8) -> Option<usize> {
    match RIGHT_QUARTER_TURN_3_TILES_SPRITE_MAP.get(sequence as usize) {
        Some(&i) if i >= 0 => Some(i as usize),
        _ => None,
    }
}

#[inline]
pub fn eighth_to_diag_index(sequence: u8) -> Option<usize> {
    match EIGHTH_TO_DIAG_SPRITE_MAP.get(sequence as usize) {
        Some(&i) if i >= 0 => Some(i as usize),
        _ => None,
    }
}

/// One sprite with its draw offset and bounding box, all relative to the track height.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SpriteBb {
    pub sprite: ImageIndex,
    pub offset: CoordsXYZ,
    pub bb_offset: CoordsXYZ,
    pub bb_size: CoordsXYZ,
}

impl SpriteBb {
    pub const fn new(sprite: ImageIndex, offset: CoordsXYZ, bb_offset: CoordsXYZ, bb_size: CoordsXYZ) -> Self {
        Self { sprite, offset, bb_offset, bb_size }
    }

    /// Draws the entry with its own bounding-box offset.
    pub fn paint(&self, session: &mut PaintSession, height: i32, template: ImageId) -> Option<usize> {
        let offset = self.offset.with_z_offset(height);
        let bound_box = BoundBoxXYZ::new(self.bb_offset.with_z_offset(height), self.bb_size);
        session.add_image_as_parent(template.with_index(self.sprite), offset, bound_box)
    }

    /// Draws the entry with its bounding box anchored at the sprite offset.
    pub fn paint_at_offset(&self, session: &mut PaintSession, height: i32, template: ImageId) -> Option<usize> {
        let offset = self.offset.with_z_offset(height);
        session.add_image_as_parent(template.with_index(self.sprite), offset, BoundBoxXYZ::new(offset, self.bb_size))
    }
}

pub fn right_quarter_turn_5_tiles_paint_2(
    session: &mut PaintSession,
    height: i32,
    direction: Direction,
    sequence: u8,
    template: ImageId,
    sprites: &[[SpriteBb; 5]; 4],
) -> Option<usize> {
    let index = quarter_turn_5_index(sequence)?;
    sprites[(direction & 3) as usize][index].paint(session, height, template)
}

pub fn right_quarter_turn_5_tiles_paint_3(
    session: &mut PaintSession,
    height: i32,
    direction: Direction,
    sequence: u8,
    template: ImageId,
    sprites: &[[SpriteBb; 5]; 4],
) -> Option<usize> {
    let index = quarter_turn_5_index(sequence)?;
    sprites[(direction & 3) as usize][index].paint_at_offset(session, height, template)
}

pub fn right_quarter_turn_3_tiles_paint_3(
    session: &mut PaintSession,
    height: i32,
    direction: Direction,
    sequence: u8,
    template: ImageId,
    sprites: &[[SpriteBb; 3]; 4],
) -> Option<usize> {
    let index = quarter_turn_3_index(sequence)?;
    sprites[(direction & 3) as usize][index].paint(session, height, template)
}

/// Separate sprite, offset and bounds tables for one turn shape.
///
/// Missing offsets draw at the tile origin; missing bound offsets fall back to the
/// sprite offset on the track plane.
#[derive(Clone, Copy)]
pub struct TurnTables<'a, const N: usize> {
    pub sprites: &'a [[ImageIndex; N]; 4],
    pub offsets: Option<&'a [[CoordsXY; N]; 4]>,
    pub bound_lengths: &'a [[CoordsXY; N]; 4],
    pub bound_offsets: Option<&'a [[CoordsXY; N]; 4]>,
}

impl<const N: usize> TurnTables<'_, N> {
    fn paint_index(
        &self,
        session: &mut PaintSession,
        height: i32,
        direction: Direction,
        index: usize,
        template: ImageId,
        thickness: i32,
    ) -> Option<usize> {
        let d = (direction & 3) as usize;
        let offset = self.offsets.map_or(CoordsXY::ZERO, |t| t[d][index]);
        let length = self.bound_lengths[d][index];
        let bound_offset = self.bound_offsets.map_or(offset, |t| t[d][index]);
        session.add_image_as_parent(
            template.with_index(self.sprites[d][index]),
            CoordsXYZ::from_xy(offset, height),
            BoundBoxXYZ::new(CoordsXYZ::from_xy(bound_offset, height), xyz(length.x, length.y, thickness)),
        )
    }
}

pub fn right_quarter_turn_5_tiles_paint(
    session: &mut PaintSession,
    thickness: i32,
    height: i32,
    direction: Direction,
    sequence: u8,
    template: ImageId,
    tables: &TurnTables<'_, 5>,
) -> Option<usize> {
    let Some(index) = quarter_turn_5_index(sequence) else {
        log::trace!("quarter turn 5 draws nothing on sequence {}", sequence);
        return None;
    };
    tables.paint_index(session, height, direction, index, template, thickness)
}

pub fn right_quarter_turn_3_tiles_paint(
    session: &mut PaintSession,
    thickness: i32,
    height: i32,
    direction: Direction,
    sequence: u8,
    template: ImageId,
    tables: &TurnTables<'_, 3>,
) -> Option<usize> {
    let Some(index) = quarter_turn_3_index(sequence) else {
        log::trace!("quarter turn 3 draws nothing on sequence {}", sequence);
        return None;
    };
    tables.paint_index(session, height, direction, index, template, thickness)
}

#[rustfmt::skip]
pub const DEFAULT_RIGHT_QUARTER_TURN_3_TILES_OFFSETS: [[CoordsXY; 3]; 4] = [
    [CoordsXY::new(0, 6), CoordsXY::new(16, 16), CoordsXY::new(6, 0)],
    [CoordsXY::new(6, 0), CoordsXY::new(16, 0), CoordsXY::new(0, 6)],
    [CoordsXY::new(0, 6), CoordsXY::new(0, 0), CoordsXY::new(6, 0)],
    [CoordsXY::new(6, 0), CoordsXY::new(0, 16), CoordsXY::new(0, 6)],
];

#[rustfmt::skip]
pub const DEFAULT_RIGHT_QUARTER_TURN_3_TILES_BOUND_LENGTHS: [[CoordsXY; 3]; 4] = [
    [CoordsXY::new(32, 20), CoordsXY::new(16, 16), CoordsXY::new(20, 32)],
    [CoordsXY::new(20, 32), CoordsXY::new(16, 16), CoordsXY::new(32, 20)],
    [CoordsXY::new(32, 20), CoordsXY::new(16, 16), CoordsXY::new(20, 32)],
    [CoordsXY::new(20, 32), CoordsXY::new(16, 16), CoordsXY::new(32, 20)],
];

/// Tunnels at the two open ends of a right quarter turn of five.
pub fn right_quarter_turn_5_tiles_tunnel(
    session: &mut PaintSession,
    height: i32,
    direction: Direction,
    sequence: u8,
    group: TunnelGroup,
    sub_type: TunnelSubType,
) {
    match (direction, sequence) {
        (0, 0) | (1, 6) => session.push_tunnel_left(height, group, sub_type),
        (0, 6) | (3, 0) => session.push_tunnel_right(height, group, sub_type),
        _ => {}
    }
}

pub fn right_quarter_turn_3_tiles_tunnel(
    session: &mut PaintSession,
    height: i32,
    direction: Direction,
    sequence: u8,
    group: TunnelGroup,
    sub_type: TunnelSubType,
) {
    match (direction, sequence) {
        (0, 0) | (1, 3) => session.push_tunnel_left(height, group, sub_type),
        (0, 3) | (3, 0) => session.push_tunnel_right(height, group, sub_type),
        _ => {}
    }
}

/// Wooden sub-type under each tile of a right quarter turn of five.
#[rustfmt::skip]
const QUARTER_TURN_5_WOODEN_SUB_TYPES: [[Option<u8>; 7]; 4] = [
    [Some(0), None, Some(4), Some(2), None, Some(4), Some(1)],
    [Some(1), None, Some(5), Some(3), None, Some(5), Some(0)],
    [Some(0), None, Some(2), Some(4), None, Some(2), Some(1)],
    [Some(1), None, Some(3), Some(5), None, Some(3), Some(0)],
];

#[inline]
pub fn right_quarter_turn_5_tiles_wooden_sub_type(direction: Direction, sequence: u8) -> Option<u8> {
    QUARTER_TURN_5_WOODEN_SUB_TYPES[(direction & 3) as usize]
        .get(sequence as usize)
        .copied()
        .flatten()
}

/// Plain wooden supports along a right quarter turn of five. Returns whether any were drawn.
pub fn right_quarter_turn_5_tiles_wooden_supports(
    session: &mut PaintSession,
    support_type: SupportType,
    height: i32,
    direction: Direction,
    sequence: u8,
) -> bool {
    let Some(sub_type) = right_quarter_turn_5_tiles_wooden_sub_type(direction, sequence) else {
        return false;
    };
    let template = session.track_colour(ColourScheme::Supports);
    wooden_a_supports_paint_setup(session, support_type, sub_type, 0, height, template)
}

const QUARTER_TURN_1_TILE_BOUNDS: [(CoordsXY, CoordsXY); 4] = [
    (CoordsXY::new(26, 24), CoordsXY::new(6, 2)),
    (CoordsXY::new(26, 26), CoordsXY::new(0, 0)),
    (CoordsXY::new(24, 26), CoordsXY::new(2, 6)),
    (CoordsXY::new(24, 24), CoordsXY::new(6, 6)),
];

/// Single-tile left turn; `bb_z_offset` lifts the box for overlays drawn above the base.
pub fn left_quarter_turn_1_tile_paint(
    session: &mut PaintSession,
    thickness: i32,
    height: i32,
    bb_z_offset: i32,
    direction: Direction,
    template: ImageId,
    sprites: &[ImageIndex; 4],
) -> Option<usize> {
    let d = (direction & 3) as usize;
    let (length, bound_offset) = QUARTER_TURN_1_TILE_BOUNDS[d];
    session.add_image_as_parent(
        template.with_index(sprites[d]),
        xyz(0, 0, height),
        BoundBoxXYZ::new(
            CoordsXYZ::from_xy(bound_offset, height + bb_z_offset),
            xyz(length.x, length.y, thickness),
        ),
    )
}

pub fn left_quarter_turn_1_tile_tunnel(
    session: &mut PaintSession,
    direction: Direction,
    height: i32,
    group: TunnelGroup,
    sub_type: TunnelSubType,
) {
    match direction {
        0 => session.push_tunnel_left(height, group, sub_type),
        2 => session.push_tunnel_right(height, group, sub_type),
        3 => {
            session.push_tunnel_right(height, group, sub_type);
            session.push_tunnel_left(height, group, sub_type);
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn left_remaps_are_involutions_on_drawn_tiles() {
        for s in 0..7u8 {
            let r = MAP_LEFT_QUARTER_TURN_5_TILES_TO_RIGHT[s as usize];
            assert_eq!(MAP_LEFT_QUARTER_TURN_5_TILES_TO_RIGHT[r as usize], s);
            assert_eq!(quarter_turn_5_index(s).is_some(), quarter_turn_5_index(r).is_some());
        }
        for s in 0..4u8 {
            let r = MAP_LEFT_QUARTER_TURN_3_TILES_TO_RIGHT[s as usize];
            assert_eq!(MAP_LEFT_QUARTER_TURN_3_TILES_TO_RIGHT[r as usize], s);
        }
    }

    #[test]
    fn quarter_turn_5_tunnels_only_at_ends() {
        for d in 0..4 {
            for s in 1..6 {
                let mut session = PaintSession::new();
                right_quarter_turn_5_tiles_tunnel(&mut session, 0, d, s, TunnelGroup::Square, TunnelSubType::Flat);
                assert_eq!(session.tunnel_count(), 0);
            }
        }
    }

    #[test]
    fn wooden_sub_types_skip_gap_tiles() {
        for d in 0..4 {
            assert!(right_quarter_turn_5_tiles_wooden_sub_type(d, 1).is_none());
            assert!(right_quarter_turn_5_tiles_wooden_sub_type(d, 4).is_none());
            assert!(right_quarter_turn_5_tiles_wooden_sub_type(d, 3).is_some());
        }
    }
}
