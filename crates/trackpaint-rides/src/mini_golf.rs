//! Mini golf: a felt lane with low fences, five hole shapes, and path-style tunnels.

use trackpaint_geom::{BoundBoxXYZ, CoordsXY, CoordsXYZ, Direction, xyz};
use trackpaint_session::{ColourScheme, ImageIndex, PaintSession, Segment, TunnelGroup, TunnelSubType};
use trackpaint_supports::{MetalSupportType, SupportType, metal_a_supports_paint_setup, wooden_a_supports_paint_setup};
use trackpaint_track::sprites::{SPR_FLOOR_PLANKS, SPR_FLOOR_PLANKS_90_DEG};
use trackpaint_track::turns::{left_quarter_turn_1_tile_paint, left_quarter_turn_1_tile_tunnel};
use trackpaint_track::{
    Edge, PaintFunction, Ride, TrackElemType, TrackElement, block_segments, block_segments_rotated,
    draw_station_covers, has_fence, set_track_clearance,
};

const SPR_MINI_GOLF_FLAT_SW_NE: ImageIndex = 14404;
const SPR_MINI_GOLF_FLAT_NW_SE: ImageIndex = 14405;
const SPR_MINI_GOLF_FLAT_FENCE_BACK_SW_NE: ImageIndex = 14406;
const SPR_MINI_GOLF_FLAT_FENCE_BACK_NW_SE: ImageIndex = 14407;
const SPR_MINI_GOLF_FLAT_FENCE_FRONT_SW_NE: ImageIndex = 14408;
const SPR_MINI_GOLF_FLAT_FENCE_FRONT_NW_SE: ImageIndex = 14409;
const SPR_MINI_GOLF_STATION_FLOOR: ImageIndex = 14410;
const SPR_MINI_GOLF_QUARTER_TURN_1_TILE_FENCE_INSIDE_SW_NW: ImageIndex = 14423;
const SPR_MINI_GOLF_QUARTER_TURN_1_TILE_FENCE_INSIDE_NE_SE: ImageIndex = 14424;

const QUARTER_TURN_1_TILE: [ImageIndex; 4] = [14411, 14412, 14413, 14414];
const QUARTER_TURN_1_TILE_FENCE_BACK: [ImageIndex; 4] = [14415, 14416, 14417, 14418];
const QUARTER_TURN_1_TILE_FENCE_FRONT: [ImageIndex; 4] = [14419, 14420, 14421, 14422];

/// Back fences share the lane's footprint but sit flat on it.
const QUARTER_TURN_1_TILE_FENCE_BACK_BOXES: [(CoordsXY, CoordsXY); 4] = [
    (CoordsXY::new(26, 24), CoordsXY::new(6, 2)),
    (CoordsXY::new(26, 26), CoordsXY::new(0, 0)),
    (CoordsXY::new(24, 26), CoordsXY::new(2, 6)),
    (CoordsXY::new(24, 24), CoordsXY::new(6, 6)),
];

const METAL: SupportType = SupportType::Metal(MetalSupportType::Boxed);
const LANE: Segment = Segment::D0.union(Segment::C4).union(Segment::CC);

/// Fences are left off lanes laid flush on flat ground.
fn should_draw_fence(session: &PaintSession, element: &TrackElement) -> bool {
    if !session.passed_surface() {
        return false;
    }
    session.surface.height as i32 != element.base_z() || session.surface.slope != 0
}

fn metal_supports(session: &mut PaintSession, special: i32, height: i32) {
    let colour = session.track_colour(ColourScheme::Supports);
    metal_a_supports_paint_setup(session, METAL, 4, special, height, colour);
}

fn wooden_supports(session: &mut PaintSession, support_type: SupportType, sub_type: u8, height: i32) -> bool {
    let colour = session.track_colour(ColourScheme::Supports);
    wooden_a_supports_paint_setup(session, support_type, sub_type, 0, height, colour)
}

fn track_flat(
    session: &mut PaintSession,
    _ride: &Ride,
    _sequence: u8,
    direction: Direction,
    height: i32,
    element: &TrackElement,
    _support_type: SupportType,
) {
    let odd = direction & 1 != 0;
    let track = session.track_colour(ColourScheme::Track);
    let lane = if odd { SPR_MINI_GOLF_FLAT_NW_SE } else { SPR_MINI_GOLF_FLAT_SW_NE };
    session.add_image_as_parent_rotated(
        direction & 1,
        track.with_index(lane),
        xyz(0, 0, height),
        xyz(32, 20, 1),
        xyz(0, 6, height),
    );
    session.push_tunnel_rotated(direction & 1, height, TunnelGroup::PathAndMiniGolf, TunnelSubType::Flat);

    metal_supports(session, 0, height);
    block_segments_rotated(session, LANE, direction);

    if should_draw_fence(session, element) {
        let misc = session.track_colour(ColourScheme::Misc);
        let (back, front) = if odd {
            (SPR_MINI_GOLF_FLAT_FENCE_BACK_NW_SE, SPR_MINI_GOLF_FLAT_FENCE_FRONT_NW_SE)
        } else {
            (SPR_MINI_GOLF_FLAT_FENCE_BACK_SW_NE, SPR_MINI_GOLF_FLAT_FENCE_FRONT_SW_NE)
        };
        for (image, y) in [(back, 10), (front, 22)] {
            session.add_image_as_parent_rotated(
                direction & 1,
                misc.with_index(image),
                xyz(0, 0, height),
                xyz(32, 1, 7),
                xyz(0, y, height + 2),
            );
        }
    }

    set_track_clearance(session, height + 32);
}

/// Tunnel height offset, group and sub-type.
type TunnelSpec = (i32, TunnelGroup, TunnelSubType);

struct Slope {
    /// First sprite of the lane, back fence and front fence runs; each run is indexed by direction.
    sprites: [ImageIndex; 3],
    fence_height: i32,
    support_special: i32,
    /// Tunnel for directions 0 and 3.
    near_tunnel: TunnelSpec,
    far_tunnel: TunnelSpec,
    clearance: i32,
}

const UP_25: Slope = Slope {
    sprites: [14433, 14453, 14457],
    fence_height: 15,
    support_special: 8,
    near_tunnel: (-8, TunnelGroup::Standard, TunnelSubType::SlopeStart),
    far_tunnel: (8, TunnelGroup::Standard, TunnelSubType::SlopeEnd),
    clearance: 56,
};

const FLAT_TO_UP_25: Slope = Slope {
    sprites: [14425, 14437, 14445],
    fence_height: 11,
    support_special: 0,
    near_tunnel: (0, TunnelGroup::PathAndMiniGolf, TunnelSubType::Flat),
    far_tunnel: (0, TunnelGroup::Standard, TunnelSubType::SlopeEnd),
    clearance: 48,
};

const UP_25_TO_FLAT: Slope = Slope {
    sprites: [14429, 14441, 14449],
    fence_height: 11,
    support_special: 8,
    near_tunnel: (-8, TunnelGroup::Standard, TunnelSubType::Flat),
    far_tunnel: (8, TunnelGroup::PathAndMiniGolf, TunnelSubType::Flat),
    clearance: 40,
};

fn paint_slope(session: &mut PaintSession, slope: &Slope, direction: Direction, height: i32) {
    let d = direction & 3;
    let [lane, back, front] = slope.sprites.map(|first| first + d as ImageIndex);

    let track = session.track_colour(ColourScheme::Track);
    session.add_image_as_parent_rotated(d, track.with_index(lane), xyz(0, 0, height), xyz(32, 20, 1), xyz(0, 6, height));

    metal_supports(session, slope.support_special, height);
    block_segments_rotated(session, LANE, d);

    // Sloped lanes always stand clear of the ground, so their fences are unconditional.
    let misc = session.track_colour(ColourScheme::Misc);
    for (image, y) in [(back, 10), (front, 22)] {
        session.add_image_as_parent_rotated(
            d,
            misc.with_index(image),
            xyz(0, 0, height),
            xyz(32, 1, slope.fence_height),
            xyz(0, y, height + 2),
        );
    }

    let (dz, group, sub_type) = if d == 0 || d == 3 { slope.near_tunnel } else { slope.far_tunnel };
    session.push_tunnel_rotated(d, height + dz, group, sub_type);

    set_track_clearance(session, height + slope.clearance);
}

macro_rules! slope_paint_fns {
    ($($name:ident => $slope:expr, flip: $flip:expr;)+) => {
        $(
            fn $name(
                session: &mut PaintSession,
                _ride: &Ride,
                _sequence: u8,
                direction: Direction,
                height: i32,
                _element: &TrackElement,
                _support_type: SupportType,
            ) {
                paint_slope(session, &$slope, (direction + $flip) & 3, height);
            }
        )+
    };
}

slope_paint_fns! {
    track_25_deg_up => UP_25, flip: 0;
    track_flat_to_25_deg_up => FLAT_TO_UP_25, flip: 0;
    track_25_deg_up_to_flat => UP_25_TO_FLAT, flip: 0;
    track_25_deg_down => UP_25, flip: 2;
    track_flat_to_25_deg_down => UP_25_TO_FLAT, flip: 2;
    track_25_deg_down_to_flat => FLAT_TO_UP_25, flip: 2;
}

fn track_station(
    session: &mut PaintSession,
    ride: &Ride,
    _sequence: u8,
    direction: Direction,
    height: i32,
    element: &TrackElement,
    support_type: SupportType,
) {
    let axis = direction & 1;
    let track = session.track_colour(ColourScheme::Track);
    session.add_image_as_parent_rotated(
        axis,
        track.with_index(SPR_MINI_GOLF_STATION_FLOOR),
        xyz(0, 0, height),
        xyz(32, 28, 1),
        xyz(0, 0, height),
    );

    let (back_edge, front_edge, back, front) = if axis == 1 {
        (Edge::NE, Edge::SW, SPR_MINI_GOLF_FLAT_FENCE_BACK_NW_SE, SPR_MINI_GOLF_FLAT_FENCE_FRONT_NW_SE)
    } else {
        (Edge::NW, Edge::SE, SPR_MINI_GOLF_FLAT_FENCE_BACK_SW_NE, SPR_MINI_GOLF_FLAT_FENCE_FRONT_SW_NE)
    };
    let position = session.map_position;
    let rotation = session.current_rotation;
    let back_fenced = has_fence(back_edge, position, element, ride, rotation);
    let front_fenced = has_fence(front_edge, position, element, ride, rotation);

    let misc = session.track_colour(ColourScheme::Misc);
    if back_fenced {
        session.add_image_as_parent_rotated(
            axis,
            misc.with_index(back),
            xyz(0, -10, height),
            xyz(32, 1, 7),
            xyz(0, 0, height + 2),
        );
    }
    // The front fence follows the back edge's fence flag.
    if back_fenced {
        session.add_image_as_parent_rotated(
            axis,
            misc.with_index(front),
            xyz(0, 10, height),
            xyz(32, 1, 7),
            xyz(0, 31, height + 2),
        );
    }
    draw_station_covers(session, back_edge, back_fenced, ride.cover_style, height);
    draw_station_covers(session, front_edge, front_fenced, ride.cover_style, height);

    session.push_tunnel_rotated(axis, height, TunnelGroup::Square, TunnelSubType::Flat);

    wooden_supports(session, support_type, axis, height);
    block_segments(session, Segment::ALL);
    set_track_clearance(session, height + 32);
}

fn track_left_quarter_turn_1_tile(
    session: &mut PaintSession,
    _ride: &Ride,
    _sequence: u8,
    direction: Direction,
    height: i32,
    element: &TrackElement,
    _support_type: SupportType,
) {
    let d = direction & 3;
    let track = session.track_colour(ColourScheme::Track);
    left_quarter_turn_1_tile_paint(session, 1, height, 0, d, track, &QUARTER_TURN_1_TILE);

    metal_supports(session, 0, height);
    block_segments_rotated(session, Segment::B8 | Segment::C8 | Segment::C4 | Segment::D0, d);

    left_quarter_turn_1_tile_tunnel(session, d, height, TunnelGroup::PathAndMiniGolf, TunnelSubType::Flat);

    if should_draw_fence(session, element) {
        let misc = session.track_colour(ColourScheme::Misc);
        let (length, bound_offset) = QUARTER_TURN_1_TILE_FENCE_BACK_BOXES[d as usize];
        session.add_image_as_child(
            misc.with_index(QUARTER_TURN_1_TILE_FENCE_BACK[d as usize]),
            xyz(0, 0, height),
            BoundBoxXYZ::new(CoordsXYZ::from_xy(bound_offset, height), xyz(length.x, length.y, 1)),
        );

        left_quarter_turn_1_tile_paint(session, 0, height, 24, d, misc, &QUARTER_TURN_1_TILE_FENCE_FRONT);

        let inside = match d {
            0 => Some((SPR_MINI_GOLF_QUARTER_TURN_1_TILE_FENCE_INSIDE_SW_NW, xyz(24, 0, height + 2))),
            2 => Some((SPR_MINI_GOLF_QUARTER_TURN_1_TILE_FENCE_INSIDE_NE_SE, xyz(0, 24, height + 2))),
            _ => None,
        };
        if let Some((image, bound_offset)) = inside {
            session.add_image_as_parent(
                misc.with_index(image),
                xyz(0, 0, height),
                BoundBoxXYZ::new(bound_offset, xyz(5, 5, 5)),
            );
        }
    }

    set_track_clearance(session, height + 32);
}

fn track_right_quarter_turn_1_tile(
    session: &mut PaintSession,
    ride: &Ride,
    sequence: u8,
    direction: Direction,
    height: i32,
    element: &TrackElement,
    support_type: SupportType,
) {
    track_left_quarter_turn_1_tile(session, ride, sequence, (direction + 3) & 3, height, element, support_type);
}

/// Key for the per-tile exceptions in the hole tables: direction in the high nibble, sequence in the low.
const fn tile_key(direction: Direction, sequence: u8) -> u8 {
    ((direction & 3) << 4) | (sequence & 0x0F)
}

/// Trim box that replaces the default, as (key, size, offset); the offset sits 4 above the lane.
type TrimBox = (u8, CoordsXYZ, CoordsXY);

struct Hole {
    /// First base and trim sprite per direction; parts follow consecutively.
    base: [ImageIndex; 4],
    trim: [ImageIndex; 4],
    /// The last tile of the curved holes runs across the entry axis.
    last_part_turns: bool,
    left_tunnels: &'static [u8],
    right_tunnels: &'static [u8],
    trim_boxes: &'static [TrimBox],
    /// Floor and base sizes that shrink around the cup, keyed like `trim_boxes`.
    floor_lengths: &'static [(u8, CoordsXY)],
}

const fn runs(first: ImageIndex, stride: ImageIndex) -> [ImageIndex; 4] {
    [first, first + stride, first + 2 * stride, first + 3 * stride]
}

const STRAIGHT_LEFT_TUNNELS: &[u8] = &[tile_key(0, 0), tile_key(2, 1)];
const STRAIGHT_RIGHT_TUNNELS: &[u8] = &[tile_key(3, 0), tile_key(1, 1)];
const CURVED_LEFT_TUNNELS: &[u8] = &[tile_key(0, 0), tile_key(1, 2)];
const CURVED_RIGHT_TUNNELS: &[u8] = &[tile_key(0, 2), tile_key(3, 0)];

const ACROSS_X: CoordsXY = CoordsXY::new(30, 3);
const ACROSS_Y: CoordsXY = CoordsXY::new(3, 30);

const HOLE_A: Hole = Hole {
    base: runs(14461, 2),
    trim: runs(14469, 2),
    last_part_turns: false,
    left_tunnels: STRAIGHT_LEFT_TUNNELS,
    right_tunnels: STRAIGHT_RIGHT_TUNNELS,
    trim_boxes: &[],
    floor_lengths: &[],
};

const HOLE_B: Hole = Hole {
    base: runs(14477, 2),
    trim: runs(14485, 2),
    ..HOLE_A
};

const HOLE_C: Hole = Hole {
    base: runs(14493, 2),
    trim: runs(14501, 2),
    trim_boxes: &[
        (tile_key(0, 1), xyz(2, 26, 3), ACROSS_X),
        (tile_key(2, 0), xyz(2, 26, 3), ACROSS_X),
        (tile_key(1, 0), xyz(26, 2, 3), ACROSS_Y),
        (tile_key(3, 1), xyz(26, 2, 3), ACROSS_Y),
    ],
    ..HOLE_A
};

const HOLE_D: Hole = Hole {
    base: runs(14509, 3),
    trim: runs(14521, 3),
    last_part_turns: true,
    left_tunnels: CURVED_LEFT_TUNNELS,
    right_tunnels: CURVED_RIGHT_TUNNELS,
    trim_boxes: &[
        (tile_key(0, 1), xyz(2, 26, 3), ACROSS_X),
        (tile_key(3, 2), xyz(2, 26, 3), ACROSS_X),
        (tile_key(0, 2), xyz(23, 2, 3), ACROSS_Y),
        (tile_key(1, 0), xyz(2, 24, 3), ACROSS_X),
        (tile_key(2, 0), xyz(26, 2, 3), ACROSS_Y),
        (tile_key(3, 1), xyz(26, 2, 3), ACROSS_Y),
    ],
    floor_lengths: &[(tile_key(0, 2), CoordsXY::new(23, 32)), (tile_key(1, 0), CoordsXY::new(24, 32))],
};

const HOLE_E: Hole = Hole {
    base: [14542, 14539, 14536, 14533],
    trim: [14554, 14551, 14548, 14545],
    trim_boxes: &[
        (tile_key(0, 1), xyz(2, 26, 3), ACROSS_X),
        (tile_key(0, 2), xyz(26, 2, 3), ACROSS_Y),
        (tile_key(2, 0), xyz(26, 2, 3), ACROSS_Y),
        (tile_key(3, 1), xyz(26, 2, 3), ACROSS_Y),
        (tile_key(1, 0), xyz(2, 24, 3), ACROSS_X),
        (tile_key(3, 2), xyz(2, 23, 3), ACROSS_X),
    ],
    floor_lengths: &[(tile_key(1, 0), CoordsXY::new(24, 32)), (tile_key(3, 2), CoordsXY::new(32, 23))],
    ..HOLE_D
};

fn paint_hole(
    session: &mut PaintSession,
    hole: &Hole,
    sequence: u8,
    direction: Direction,
    height: i32,
    support_type: SupportType,
) {
    let d = direction & 3;
    let key = tile_key(d, sequence);
    let mut axis = d & 1;
    if hole.last_part_turns && sequence == 2 {
        axis ^= 1;
    }

    let drew_supports = wooden_supports(session, support_type, axis, height);
    block_segments(session, Segment::ALL);
    set_track_clearance(session, height + 32);

    if hole.left_tunnels.contains(&key) {
        session.push_tunnel_left(height, TunnelGroup::PathAndMiniGolf, TunnelSubType::Flat);
    } else if hole.right_tunnels.contains(&key) {
        session.push_tunnel_right(height, TunnelGroup::PathAndMiniGolf, TunnelSubType::Flat);
    }

    let (mut length, bound_offset) = if axis == 1 {
        (CoordsXY::new(26, 32), CoordsXY::new(3, 0))
    } else {
        (CoordsXY::new(32, 26), CoordsXY::new(0, 3))
    };

    let track = session.track_colour(ColourScheme::Track);
    let part = sequence as ImageIndex;
    let origin = xyz(0, 0, height);
    let trim = track.with_index(hole.trim[d as usize] + part);
    let trim_box = match hole.trim_boxes.iter().find(|(k, _, _)| *k == key) {
        Some(&(_, size, offset)) => BoundBoxXYZ::new(CoordsXYZ::from_xy(offset, height + 4), size),
        None => BoundBoxXYZ::new(CoordsXYZ::from_xy(bound_offset, height + 24), xyz(length.x, length.y, 0)),
    };
    session.add_image_as_parent(trim, origin, trim_box);

    if let Some(&(_, shrunk)) = hole.floor_lengths.iter().find(|(k, _)| *k == key) {
        length = shrunk;
    }
    let floor_box = BoundBoxXYZ::new(CoordsXYZ::from_xy(bound_offset, height), xyz(length.x, length.y, 1));
    let base = track.with_index(hole.base[d as usize] + part);
    if drew_supports {
        let planks = if axis == 1 { SPR_FLOOR_PLANKS_90_DEG } else { SPR_FLOOR_PLANKS };
        let supports = session.track_colour(ColourScheme::Supports);
        session.add_image_as_parent(supports.with_index(planks), origin, floor_box);
        session.add_image_as_child(base, origin, floor_box);
    } else {
        session.add_image_as_parent(base, origin, floor_box);
    }
}

macro_rules! hole_paint_fns {
    ($($name:ident => $hole:expr;)+) => {
        $(
            fn $name(
                session: &mut PaintSession,
                _ride: &Ride,
                sequence: u8,
                direction: Direction,
                height: i32,
                _element: &TrackElement,
                support_type: SupportType,
            ) {
                paint_hole(session, &$hole, sequence, direction, height, support_type);
            }
        )+
    };
}

hole_paint_fns! {
    track_hole_a => HOLE_A;
    track_hole_b => HOLE_B;
    track_hole_c => HOLE_C;
    track_hole_d => HOLE_D;
    track_hole_e => HOLE_E;
}

pub fn get_track_paint_function_mini_golf(track_type: TrackElemType) -> Option<PaintFunction> {
    use TrackElemType::*;
    let f: PaintFunction = match track_type {
        Flat => track_flat,
        BeginStation | MiddleStation | EndStation => track_station,
        Up25 => track_25_deg_up,
        FlatToUp25 => track_flat_to_25_deg_up,
        Up25ToFlat => track_25_deg_up_to_flat,
        Down25 => track_25_deg_down,
        FlatToDown25 => track_flat_to_25_deg_down,
        Down25ToFlat => track_25_deg_down_to_flat,
        LeftQuarterTurn1Tile => track_left_quarter_turn_1_tile,
        RightQuarterTurn1Tile => track_right_quarter_turn_1_tile,
        MinigolfHoleA => track_hole_a,
        MinigolfHoleB => track_hole_b,
        MinigolfHoleC => track_hole_c,
        MinigolfHoleD => track_hole_d,
        MinigolfHoleE => track_hole_e,
        _ => return None,
    };
    Some(f)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hole_e_runs_backwards_through_the_directions() {
        assert_eq!(HOLE_E.base[0] + 2, 14544);
        assert_eq!(HOLE_E.trim[3], 14545);
        assert_eq!(HOLE_D.base[3] + 2, 14520);
    }

    #[test]
    fn trim_exceptions_are_unique_per_tile() {
        for hole in [&HOLE_C, &HOLE_D, &HOLE_E] {
            for (i, (key, _, _)) in hole.trim_boxes.iter().enumerate() {
                assert!(hole.trim_boxes[i + 1..].iter().all(|(k, _, _)| k != key));
            }
        }
    }

    #[test]
    fn flush_lanes_skip_the_fence() {
        let mut session = PaintSession::new().with_surface(16, 0);
        let element = TrackElement::new(TrackElemType::Flat, 16);
        assert!(!should_draw_fence(&session, &element));
        session.surface.slope = 1;
        assert!(should_draw_fence(&session, &element));
        let raised = TrackElement::new(TrackElemType::Flat, 32);
        session.surface.slope = 0;
        assert!(should_draw_fence(&session, &raised));
    }
}
