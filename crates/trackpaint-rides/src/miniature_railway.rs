//! Miniature railway: narrow-gauge rails on plank floors over wooden supports.
//!
//! Wherever a wooden support is drawn the plank floor becomes the parent sprite and the
//! rail hangs off it as a child; bare stretches draw the rail on its own.

use trackpaint_geom::{BoundBoxXYZ, CoordsXY, CoordsXYZ, Direction, xyz};
use trackpaint_session::{
    ColourScheme, ColourTemplate, ImageId, ImageIndex, PaintSession, Segment, TunnelGroup, TunnelSubType,
};
use trackpaint_supports::{
    SPR_G2_SUPPORT_BEGIN, SupportType, wooden_a_supports_paint_setup, wooden_b_supports_paint_setup,
};
use trackpaint_track::sprites::*;
use trackpaint_track::turns::{
    DEFAULT_RIGHT_QUARTER_TURN_3_TILES_BOUND_LENGTHS, DEFAULT_RIGHT_QUARTER_TURN_3_TILES_OFFSETS,
    MAP_LEFT_EIGHTH_TURN_TO_ORTHOGONAL, MAP_LEFT_QUARTER_TURN_3_TILES_TO_RIGHT, MAP_LEFT_QUARTER_TURN_5_TILES_TO_RIGHT,
    TurnTables, eighth_to_diag_index, left_turn_direction, quarter_turn_3_index, quarter_turn_5_index,
    right_quarter_turn_3_tiles_paint, right_quarter_turn_3_tiles_tunnel, right_quarter_turn_5_tiles_paint,
    right_quarter_turn_5_tiles_tunnel, right_quarter_turn_5_tiles_wooden_sub_type,
};
use trackpaint_track::{
    PaintFunction, Ride, TrackElemType, TrackElement, block_segments, block_segments_rotated,
    draw_station_with_cover_height, set_track_clearance,
};

const SPR_MINIATURE_RAILWAY_FLAT_SW_NE: ImageIndex = 23341;
const SPR_MINIATURE_RAILWAY_FLAT_NW_SE: ImageIndex = 23342;
const SPR_MINIATURE_RAILWAY_QUARTER_TURN_5_TILES: ImageIndex = 23343;
const SPR_MINIATURE_RAILWAY_QUARTER_TURN_3_TILES: ImageIndex = 23391;
const SPR_MINIATURE_RAILWAY_FLAT_NO_BASE_SW_NE: ImageIndex = 23403;
const SPR_MINIATURE_RAILWAY_FLAT_NO_BASE_NW_SE: ImageIndex = 23404;
const SPR_MINIATURE_RAILWAY_EIGHT_TO_DIAG_RIGHT: ImageIndex = 23405;
const SPR_MINIATURE_RAILWAY_EIGHT_TO_DIAG_LEFT: ImageIndex = 23421;
const SPR_MINIATURE_RAILWAY_DIAG_FLAT: ImageIndex = 23437;
const SPR_MINIATURE_RAILWAY_DIAG_FLAT_TO_25_DEG_UP: ImageIndex = 23441;
const SPR_MINIATURE_RAILWAY_DIAG_25_DEG_UP_TO_FLAT: ImageIndex = 23445;
const SPR_MINIATURE_RAILWAY_DIAG_25_DEG_UP: ImageIndex = 23449;

/// Rails laid through a footpath, in the extended graphics after the curved supports.
const SPR_G2_MINIATURE_RAILWAY_BEGIN: ImageIndex = SPR_G2_SUPPORT_BEGIN + 32;
const SPR_G2_MINIATURE_RAILWAY_GRAVEL_SW_NE: ImageIndex = SPR_G2_MINIATURE_RAILWAY_BEGIN;
const SPR_G2_MINIATURE_RAILWAY_GROOVED_SW_NE: ImageIndex = SPR_G2_MINIATURE_RAILWAY_BEGIN + 2;
const SPR_G2_MINIATURE_RAILWAY_INSET_SW_NE: ImageIndex = SPR_G2_MINIATURE_RAILWAY_BEGIN + 4;
const SPR_G2_MINIATURE_RAILWAY_INSET_NW_SE: ImageIndex = SPR_G2_MINIATURE_RAILWAY_BEGIN + 5;
const SPR_G2_MINIATURE_RAILWAY_INSET_END_SW: ImageIndex = SPR_G2_MINIATURE_RAILWAY_BEGIN + 6;
const SPR_G2_MINIATURE_RAILWAY_INSET_END_NE: ImageIndex = SPR_G2_MINIATURE_RAILWAY_BEGIN + 7;
const SPR_G2_MINIATURE_RAILWAY_INSET_END_SW_NE: ImageIndex = SPR_G2_MINIATURE_RAILWAY_BEGIN + 8;
const SPR_G2_MINIATURE_RAILWAY_INSET_END_NW: ImageIndex = SPR_G2_MINIATURE_RAILWAY_BEGIN + 9;
const SPR_G2_MINIATURE_RAILWAY_INSET_END_SE: ImageIndex = SPR_G2_MINIATURE_RAILWAY_BEGIN + 10;
const SPR_G2_MINIATURE_RAILWAY_INSET_END_NW_SE: ImageIndex = SPR_G2_MINIATURE_RAILWAY_BEGIN + 11;

const FLAT_SPRITES: [ImageIndex; 4] = [
    SPR_MINIATURE_RAILWAY_FLAT_SW_NE,
    SPR_MINIATURE_RAILWAY_FLAT_NW_SE,
    SPR_MINIATURE_RAILWAY_FLAT_SW_NE,
    SPR_MINIATURE_RAILWAY_FLAT_NW_SE,
];

const FLOOR: [ImageIndex; 4] = [SPR_FLOOR_PLANKS, SPR_FLOOR_PLANKS_90_DEG, SPR_FLOOR_PLANKS, SPR_FLOOR_PLANKS_90_DEG];

const N: ImageIndex = SPR_FLOOR_PLANKS_N_SEGMENT;
const E: ImageIndex = SPR_FLOOR_PLANKS_E_SEGMENT;
const S: ImageIndex = SPR_FLOOR_PLANKS_S_SEGMENT;
const W: ImageIndex = SPR_FLOOR_PLANKS_W_SEGMENT;
const P: ImageIndex = SPR_FLOOR_PLANKS;
const P90: ImageIndex = SPR_FLOOR_PLANKS_90_DEG;

fn tunnel(session: &mut PaintSession, direction: Direction, height: i32, sub_type: TunnelSubType) {
    session.push_tunnel_rotated(direction, height, TunnelGroup::Square, sub_type);
}

fn wooden(session: &mut PaintSession, support_type: SupportType, sub_type: u8, special: i32, height: i32) -> bool {
    let colour = session.track_colour(ColourScheme::Supports);
    wooden_a_supports_paint_setup(session, support_type, sub_type, special, height, colour)
}

fn wooden_b(session: &mut PaintSession, support_type: SupportType, sub_type: u8, special: i32, height: i32) -> bool {
    let colour = session.track_colour(ColourScheme::Supports);
    wooden_b_supports_paint_setup(session, support_type, sub_type, special, height, colour)
}

fn colours(session: &PaintSession) -> (ImageId, ImageId) {
    (session.track_colour(ColourScheme::Track), session.track_colour(ColourScheme::Supports))
}

/// Shadow along a grooved rail, closed at each end where the path does not continue.
///
/// `edges` are the path's edges in map orientation; they are turned into view space first.
fn grooved_inset(edges: u8, direction: Direction, rotation: u8) -> ImageIndex {
    let edges = edges & 0x0F;
    let edges = ((edges | edges << 4) >> (4 - (rotation & 3))) & 0x0F;
    let closed = |edge: u8| usize::from(edges & edge == 0);
    if direction & 1 == 1 {
        [
            [SPR_G2_MINIATURE_RAILWAY_INSET_NW_SE, SPR_G2_MINIATURE_RAILWAY_INSET_END_NW],
            [SPR_G2_MINIATURE_RAILWAY_INSET_END_SE, SPR_G2_MINIATURE_RAILWAY_INSET_END_NW_SE],
        ][closed(0x2)][closed(0x8)]
    } else {
        [
            [SPR_G2_MINIATURE_RAILWAY_INSET_SW_NE, SPR_G2_MINIATURE_RAILWAY_INSET_END_SW],
            [SPR_G2_MINIATURE_RAILWAY_INSET_END_NE, SPR_G2_MINIATURE_RAILWAY_INSET_END_SW_NE],
        ][closed(0x1)][closed(0x4)]
    }
}

fn track_flat(
    session: &mut PaintSession,
    _ride: &Ride,
    _sequence: u8,
    direction: Direction,
    height: i32,
    _element: &TrackElement,
    support_type: SupportType,
) {
    let supported = wooden(session, support_type, direction & 1, 0, height);
    let (track, supports) = colours(session);
    let d = (direction & 3) as usize;
    // A footpath at the same height turns the rail into gravel with grooves cut for the path.
    let path_edges = session.path_edges_on_same_height;
    let rail = match path_edges {
        Some(_) => {
            let gravel = FLAT_SPRITES[d] - SPR_MINIATURE_RAILWAY_FLAT_SW_NE + SPR_G2_MINIATURE_RAILWAY_GRAVEL_SW_NE;
            ImageId::new(gravel, ColourTemplate::Plain)
        }
        None => track.with_index(FLAT_SPRITES[d]),
    };

    if supported {
        session.add_image_as_parent_rotated(
            direction,
            supports.with_index(FLOOR[d]),
            xyz(0, 0, height),
            xyz(32, 20, 2),
            xyz(0, 6, height),
        );
    }
    let add_rail = |session: &mut PaintSession, image: ImageId, box_z: i32| {
        let (offset, size, bound) = (xyz(0, 6, height), xyz(32, 20, 2), xyz(0, 6, box_z));
        if supported {
            session.add_image_as_child_rotated(direction, image, offset, size, bound);
        } else {
            session.add_image_as_parent_rotated(direction, image, offset, size, bound);
        }
    };
    add_rail(session, rail, height);
    if let Some(edges) = path_edges {
        let grooved = FLAT_SPRITES[d] - SPR_MINIATURE_RAILWAY_FLAT_SW_NE + SPR_G2_MINIATURE_RAILWAY_GROOVED_SW_NE;
        add_rail(session, ImageId::new(grooved, ColourTemplate::Plain), height + 2);
        let inset = grooved_inset(edges, direction, session.current_rotation);
        add_rail(session, ImageId::new(inset, ColourTemplate::Shadow), height + 2);
    }

    tunnel(session, direction, height, TunnelSubType::Flat);
    block_segments(session, Segment::ALL);
    set_track_clearance(session, height + 32);
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
    wooden(session, support_type, direction & 1, 0, height);

    let (floor, rail) = if direction & 1 == 0 {
        (SPR_STATION_BASE_A_SW_NE, SPR_MINIATURE_RAILWAY_FLAT_NO_BASE_SW_NE)
    } else {
        (SPR_STATION_BASE_A_NW_SE, SPR_MINIATURE_RAILWAY_FLAT_NO_BASE_NW_SE)
    };
    let misc = session.track_colour(ColourScheme::Misc);
    session.add_image_as_parent_rotated(
        direction,
        misc.with_index(floor),
        xyz(0, 0, height - 2),
        xyz(32, 28, 2),
        xyz(0, 2, height),
    );
    let track = session.track_colour(ColourScheme::Track);
    session.add_image_as_child_rotated(
        direction,
        track.with_index(rail),
        xyz(0, 6, height),
        xyz(32, 20, 2),
        xyz(0, 0, height),
    );

    tunnel(session, direction, height, TunnelSubType::Flat);
    // The platform sits on the raised floor but the covers stay at track height.
    draw_station_with_cover_height(session, ride, direction, height + 2, height, element);

    block_segments(session, Segment::ALL);
    set_track_clearance(session, height + 30);
}

struct SlopePiece {
    sprites: [ImageIndex; 4],
    special: i32,
    /// Tunnel for directions 0 and 3.
    near_tunnel: (i32, TunnelSubType),
    far_tunnel: (i32, TunnelSubType),
    clearance: i32,
}

const UP_25: SlopePiece = SlopePiece {
    sprites: [23379, 23385, 23381, 23386],
    special: 45,
    near_tunnel: (-8, TunnelSubType::SlopeStart),
    far_tunnel: (8, TunnelSubType::SlopeEnd),
    clearance: 56,
};

const FLAT_TO_UP_25: SlopePiece = SlopePiece {
    sprites: [23380, 23387, 23382, 23388],
    special: 37,
    near_tunnel: (0, TunnelSubType::Flat),
    far_tunnel: (0, TunnelSubType::SlopeEnd),
    clearance: 48,
};

const UP_25_TO_FLAT: SlopePiece = SlopePiece {
    sprites: [23384, 23390, 23383, 23389],
    special: 41,
    near_tunnel: (-8, TunnelSubType::Flat),
    far_tunnel: (8, TunnelSubType::FlatTo25Deg),
    clearance: 40,
};

fn paint_slope(session: &mut PaintSession, piece: &SlopePiece, direction: Direction, height: i32, support_type: SupportType) {
    let track = session.track_colour(ColourScheme::Track);
    session.add_image_as_parent_rotated(
        direction,
        track.with_index(piece.sprites[(direction & 3) as usize]),
        xyz(0, 2, height),
        xyz(32, 25, 2),
        xyz(0, 3, height),
    );

    let (dz, sub_type) = if direction == 0 || direction == 3 { piece.near_tunnel } else { piece.far_tunnel };
    tunnel(session, direction, height + dz, sub_type);

    wooden(session, support_type, direction & 1, piece.special + direction as i32, height);
    block_segments(session, Segment::ALL);
    set_track_clearance(session, height + piece.clearance);
}

macro_rules! slope_paint_fns {
    ($($name:ident => $piece:expr, flip: $flip:expr;)+) => {
        $(
            fn $name(
                session: &mut PaintSession,
                _ride: &Ride,
                _sequence: u8,
                direction: Direction,
                height: i32,
                _element: &TrackElement,
                support_type: SupportType,
            ) {
                paint_slope(session, &$piece, (direction + $flip) & 3, height, support_type);
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

const fn turn_sprites<const PARTS: usize>(first: ImageIndex) -> [[ImageIndex; PARTS]; 4] {
    let mut table = [[0; PARTS]; 4];
    let mut d = 0;
    while d < 4 {
        let mut p = 0;
        while p < PARTS {
            table[d][p] = first + (d * PARTS + p) as ImageIndex;
            p += 1;
        }
        d += 1;
    }
    table
}

const QUARTER_TURN_5_SPRITES: [[ImageIndex; 5]; 4] = turn_sprites(SPR_MINIATURE_RAILWAY_QUARTER_TURN_5_TILES);
const QUARTER_TURN_3_SPRITES: [[ImageIndex; 3]; 4] = turn_sprites(SPR_MINIATURE_RAILWAY_QUARTER_TURN_3_TILES);

#[rustfmt::skip]
const QUARTER_TURN_5_OFFSETS: [[CoordsXY; 5]; 4] = [
    [CoordsXY::new(0, 2), CoordsXY::new(0, 16), CoordsXY::new(0, 0), CoordsXY::new(16, 0), CoordsXY::new(2, 0)],
    [CoordsXY::new(2, 0), CoordsXY::new(16, 0), CoordsXY::new(0, 16), CoordsXY::new(0, 0), CoordsXY::new(0, 2)],
    [CoordsXY::new(0, 2), CoordsXY::new(0, 0), CoordsXY::new(16, 16), CoordsXY::new(0, 0), CoordsXY::new(2, 0)],
    [CoordsXY::new(2, 0), CoordsXY::new(0, 0), CoordsXY::new(16, 0), CoordsXY::new(0, 16), CoordsXY::new(0, 2)],
];

#[rustfmt::skip]
const QUARTER_TURN_5_BOUND_LENGTHS: [[CoordsXY; 5]; 4] = [
    [CoordsXY::new(32, 32), CoordsXY::new(32, 16), CoordsXY::new(16, 16), CoordsXY::new(16, 32), CoordsXY::new(32, 32)],
    [CoordsXY::new(32, 32), CoordsXY::new(16, 34), CoordsXY::new(16, 16), CoordsXY::new(32, 16), CoordsXY::new(32, 27)],
    [CoordsXY::new(32, 27), CoordsXY::new(32, 16), CoordsXY::new(16, 16), CoordsXY::new(16, 32), CoordsXY::new(27, 32)],
    [CoordsXY::new(27, 32), CoordsXY::new(16, 32), CoordsXY::new(16, 16), CoordsXY::new(32, 16), CoordsXY::new(32, 32)],
];

#[rustfmt::skip]
const QUARTER_TURN_5_FLOOR: [[ImageIndex; 5]; 4] = [
    [P, S, N, S, P90],
    [P90, W, E, W, P],
    [P, N, S, N, P90],
    [P90, E, W, E, P],
];

fn track_right_quarter_turn_5(
    session: &mut PaintSession,
    _ride: &Ride,
    sequence: u8,
    direction: Direction,
    height: i32,
    _element: &TrackElement,
    support_type: SupportType,
) {
    if let Some(sub_type) = right_quarter_turn_5_tiles_wooden_sub_type(direction, sequence) {
        let supported = wooden(session, support_type, sub_type, 0, height);
        let (track, supports) = colours(session);

        // The floor on the third tile of the turn facing north-east hides the rail, so
        // that tile always draws the rail on its own.
        if !supported || (sequence == 3 && direction == 2) {
            let rails = TurnTables {
                sprites: &QUARTER_TURN_5_SPRITES,
                offsets: Some(&QUARTER_TURN_5_OFFSETS),
                bound_lengths: &QUARTER_TURN_5_BOUND_LENGTHS,
                bound_offsets: None,
            };
            right_quarter_turn_5_tiles_paint(session, 2, height, direction, sequence, track, &rails);
        } else {
            let floor = TurnTables {
                sprites: &QUARTER_TURN_5_FLOOR,
                offsets: None,
                bound_lengths: &QUARTER_TURN_5_BOUND_LENGTHS,
                bound_offsets: Some(&QUARTER_TURN_5_OFFSETS),
            };
            right_quarter_turn_5_tiles_paint(session, 2, height, direction, sequence, supports, &floor);

            if let Some(index) = quarter_turn_5_index(sequence) {
                let d = (direction & 3) as usize;
                let offset = CoordsXYZ::from_xy(QUARTER_TURN_5_OFFSETS[d][index], height);
                let length = QUARTER_TURN_5_BOUND_LENGTHS[d][index];
                session.add_image_as_child(
                    track.with_index(QUARTER_TURN_5_SPRITES[d][index]),
                    offset,
                    BoundBoxXYZ::new(offset, xyz(length.x, length.y, 2)),
                );
            }
        }
    }

    right_quarter_turn_5_tiles_tunnel(session, height, direction, sequence, TunnelGroup::Square, TunnelSubType::Flat);

    let segments = match sequence {
        1 | 4 => Segment::B4 | Segment::C8 | Segment::CC,
        2 => Segment::D0 | Segment::C4 | Segment::D4 | Segment::BC | Segment::C0 | Segment::CC,
        3 => {
            Segment::B4 | Segment::B8 | Segment::BC | Segment::C4 | Segment::C8 | Segment::CC | Segment::D0 | Segment::D4
        }
        5 => Segment::D4 | Segment::C4 | Segment::D0 | Segment::B8 | Segment::C0 | Segment::C8,
        _ => Segment::ALL,
    };
    block_segments_rotated(session, segments, direction);
    set_track_clearance(session, height + 32);
}

fn track_left_quarter_turn_5(
    session: &mut PaintSession,
    ride: &Ride,
    sequence: u8,
    direction: Direction,
    height: i32,
    element: &TrackElement,
    support_type: SupportType,
) {
    let sequence = MAP_LEFT_QUARTER_TURN_5_TILES_TO_RIGHT[sequence as usize];
    track_right_quarter_turn_5(session, ride, sequence, left_turn_direction(direction), height, element, support_type);
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Bend {
    Left,
    Right,
}

struct SBend {
    rails: [[ImageIndex; 4]; 2],
    floor: [[ImageIndex; 4]; 2],
    supports: [[u8; 4]; 2],
    offsets: [CoordsXY; 4],
    /// Segments of the two middle tiles.
    middle: [Segment; 2],
}

const S_BEND_BOUNDS: [CoordsXY; 4] =
    [CoordsXY::new(32, 27), CoordsXY::new(32, 26), CoordsXY::new(32, 26), CoordsXY::new(32, 27)];

const S_BEND_LEFT: SBend = SBend {
    rails: [[23367, 23368, 23369, 23370], [23374, 23373, 23372, 23371]],
    floor: [[P, W, E, P], [P90, N, S, P90]],
    supports: [[0, 5, 3, 0], [1, 2, 4, 1]],
    offsets: [CoordsXY::new(0, 2), CoordsXY::new(0, 0), CoordsXY::new(0, 6), CoordsXY::new(0, 2)],
    middle: [
        Segment::D0.union(Segment::C4).union(Segment::CC).union(Segment::B8).union(Segment::C8).union(Segment::B4),
        Segment::D0.union(Segment::C4).union(Segment::CC).union(Segment::C0).union(Segment::D4).union(Segment::BC),
    ],
};

const S_BEND_RIGHT: SBend = SBend {
    rails: [[23363, 23364, 23365, 23366], [23378, 23377, 23376, 23375]],
    floor: [[P, S, N, P], [P90, W, E, P90]],
    supports: [[0, 4, 2, 0], [1, 5, 3, 1]],
    offsets: [CoordsXY::new(0, 2), CoordsXY::new(0, 6), CoordsXY::new(0, 0), CoordsXY::new(0, 2)],
    middle: [
        Segment::D0.union(Segment::C4).union(Segment::CC).union(Segment::C0).union(Segment::D4).union(Segment::BC),
        Segment::D0.union(Segment::C4).union(Segment::CC).union(Segment::B8).union(Segment::C8).union(Segment::B4),
    ],
};

fn paint_s_bend(
    session: &mut PaintSession,
    bend: Bend,
    sequence: u8,
    direction: Direction,
    height: i32,
    support_type: SupportType,
) {
    let shape = match bend {
        Bend::Left => &S_BEND_LEFT,
        Bend::Right => &S_BEND_RIGHT,
    };
    // The reversed facings walk the same tiles from the other end.
    let seq = (if direction >= 2 { 3 - (sequence & 3) } else { sequence & 3 }) as usize;
    let axis = (direction & 1) as usize;

    let supported = wooden(session, support_type, shape.supports[axis][seq], 0, height);
    let (track, supports) = colours(session);
    let offset = CoordsXYZ::from_xy(shape.offsets[seq], height);
    let bounds = xyz(S_BEND_BOUNDS[seq].x, S_BEND_BOUNDS[seq].y, 2);
    let rail = track.with_index(shape.rails[axis][seq]);

    if supported {
        session.add_image_as_parent_rotated(
            direction,
            supports.with_index(shape.floor[axis][seq]),
            xyz(0, 0, height),
            bounds,
            offset,
        );
        session.add_image_as_child_rotated(direction, rail, offset, bounds, offset);
    } else {
        session.add_image_as_parent_rotated(direction, rail, offset, bounds, offset);
    }

    match (axis, seq) {
        (0, 0) => session.push_tunnel_left(height, TunnelGroup::Square, TunnelSubType::Flat),
        (1, 3) => session.push_tunnel_right(height, TunnelGroup::Square, TunnelSubType::Flat),
        _ => {}
    }

    let segments = match seq {
        1 | 2 => shape.middle[seq - 1],
        _ => Segment::ALL,
    };
    block_segments_rotated(session, segments, direction & 1);
    set_track_clearance(session, height + 32);
}

fn track_s_bend_left(
    session: &mut PaintSession,
    _ride: &Ride,
    sequence: u8,
    direction: Direction,
    height: i32,
    _element: &TrackElement,
    support_type: SupportType,
) {
    paint_s_bend(session, Bend::Left, sequence, direction, height, support_type);
}

fn track_s_bend_right(
    session: &mut PaintSession,
    _ride: &Ride,
    sequence: u8,
    direction: Direction,
    height: i32,
    _element: &TrackElement,
    support_type: SupportType,
) {
    paint_s_bend(session, Bend::Right, sequence, direction, height, support_type);
}

#[rustfmt::skip]
const QUARTER_TURN_3_FLOOR: [[ImageIndex; 3]; 4] = [
    [S, 0, S],
    [W, 0, W],
    [N, 0, N],
    [E, 0, E],
];

const QUARTER_TURN_3_SUPPORTS: [u8; 4] = [4, 5, 2, 3];

fn track_right_quarter_turn_3(
    session: &mut PaintSession,
    _ride: &Ride,
    sequence: u8,
    direction: Direction,
    height: i32,
    _element: &TrackElement,
    support_type: SupportType,
) {
    let supported = match sequence {
        1 | 2 => false,
        _ => wooden(session, support_type, QUARTER_TURN_3_SUPPORTS[(direction & 3) as usize], 0, height),
    };
    let (track, supports) = colours(session);

    if supported {
        let floor = TurnTables {
            sprites: &QUARTER_TURN_3_FLOOR,
            offsets: None,
            bound_lengths: &DEFAULT_RIGHT_QUARTER_TURN_3_TILES_BOUND_LENGTHS,
            bound_offsets: Some(&DEFAULT_RIGHT_QUARTER_TURN_3_TILES_OFFSETS),
        };
        right_quarter_turn_3_tiles_paint(session, 3, height, direction, sequence, supports, &floor);

        if let Some(index) = quarter_turn_3_index(sequence) {
            let d = (direction & 3) as usize;
            let offset = CoordsXYZ::from_xy(DEFAULT_RIGHT_QUARTER_TURN_3_TILES_OFFSETS[d][index], height);
            let length = DEFAULT_RIGHT_QUARTER_TURN_3_TILES_BOUND_LENGTHS[d][index];
            session.add_image_as_child(
                track.with_index(QUARTER_TURN_3_SPRITES[d][index]),
                offset,
                BoundBoxXYZ::new(offset, xyz(length.x, length.y, 3)),
            );
        }
    } else {
        let rails = TurnTables {
            sprites: &QUARTER_TURN_3_SPRITES,
            offsets: Some(&DEFAULT_RIGHT_QUARTER_TURN_3_TILES_OFFSETS),
            bound_lengths: &DEFAULT_RIGHT_QUARTER_TURN_3_TILES_BOUND_LENGTHS,
            bound_offsets: None,
        };
        right_quarter_turn_3_tiles_paint(session, 3, height, direction, sequence, track, &rails);
    }

    right_quarter_turn_3_tiles_tunnel(session, height, direction, sequence, TunnelGroup::Square, TunnelSubType::Flat);

    let segments = match sequence {
        0 | 3 => Segment::ALL,
        2 => Segment::D0 | Segment::C4 | Segment::D4 | Segment::C0,
        _ => Segment::empty(),
    };
    block_segments_rotated(session, segments, direction);
    set_track_clearance(session, height + 32);
}

fn track_left_quarter_turn_3(
    session: &mut PaintSession,
    ride: &Ride,
    sequence: u8,
    direction: Direction,
    height: i32,
    element: &TrackElement,
    support_type: SupportType,
) {
    let sequence = MAP_LEFT_QUARTER_TURN_3_TILES_TO_RIGHT[sequence as usize];
    track_right_quarter_turn_3(session, ride, sequence, left_turn_direction(direction), height, element, support_type);
}

/// Geometry for one hand of the eighth turn onto the diagonal.
struct EighthTurn {
    rails: [[ImageIndex; 4]; 4],
    rail_bounds: [[CoordsXYZ; 4]; 4],
    rail_offsets: [[CoordsXY; 4]; 4],
    /// Rail boxes used when the opposite hand's turn back to orthogonal borrows this one.
    orthogonal_bounds: [[CoordsXYZ; 4]; 4],
    orthogonal_offsets: [[CoordsXY; 4]; 4],
    floor: [[ImageIndex; 5]; 4],
    floor_bounds: [[CoordsXYZ; 5]; 4],
    floor_offsets: [[CoordsXY; 5]; 4],
    supports: [[u8; 5]; 4],
    /// Element type that reuses this turn and skips the support on its last tile.
    orthogonal_element: TrackElemType,
}

const fn c(x: i32, y: i32) -> CoordsXY {
    CoordsXY::new(x, y)
}

#[rustfmt::skip]
const LEFT_EIGHTH_TO_DIAG: EighthTurn = EighthTurn {
    rails: turn_sprites(SPR_MINIATURE_RAILWAY_EIGHT_TO_DIAG_LEFT),
    rail_bounds: [
        [xyz(32, 32, 2), xyz(32, 16, 2), xyz(16, 16, 2), xyz(30, 30, 0)],
        [xyz(32, 32, 2), xyz(16, 34, 2), xyz(14, 14, 2), xyz(34, 32, 0)],
        [xyz(32, 32, 2), xyz(32, 16, 2), xyz(16, 16, 2), xyz(16, 16, 2)],
        [xyz(32, 32, 2), xyz(16, 32, 2), xyz(16, 16, 2), xyz(32, 32, 0)],
    ],
    rail_offsets: [
        [c(0, 0), c(0, 0), c(0, 16), c(0, 0)],
        [c(0, 0), c(0, 0), c(16, 16), c(0, 0)],
        [c(0, 0), c(0, 16), c(16, 0), c(0, 0)],
        [c(0, 0), c(16, 0), c(0, 0), c(0, 0)],
    ],
    orthogonal_bounds: [
        [xyz(32, 32, 2), xyz(32, 16, 2), xyz(16, 16, 2), xyz(14, 14, 2)],
        [xyz(32, 32, 2), xyz(16, 34, 2), xyz(14, 14, 2), xyz(18, 16, 2)],
        [xyz(32, 32, 2), xyz(32, 16, 2), xyz(16, 16, 2), xyz(16, 16, 2)],
        [xyz(32, 32, 2), xyz(16, 32, 2), xyz(16, 16, 2), xyz(16, 16, 2)],
    ],
    orthogonal_offsets: [
        [c(0, 0), c(0, 0), c(0, 16), c(16, 16)],
        [c(0, 0), c(0, 0), c(16, 16), c(16, 0)],
        [c(0, 0), c(0, 16), c(16, 0), c(0, 0)],
        [c(0, 0), c(16, 0), c(0, 0), c(0, 16)],
    ],
    floor: [
        [P, P, E, W, P90],
        [P90, P90, S, N, P],
        [P, P, W, E, P90],
        [P90, P90, N, S, P],
    ],
    floor_bounds: [
        [xyz(32, 32, 2), xyz(32, 16, 2), xyz(16, 16, 2), xyz(16, 16, 0), xyz(30, 30, 0)],
        [xyz(32, 32, 2), xyz(16, 34, 2), xyz(14, 14, 2), xyz(16, 16, 0), xyz(34, 32, 0)],
        [xyz(32, 32, 2), xyz(32, 16, 2), xyz(16, 16, 2), xyz(16, 16, 0), xyz(16, 16, 2)],
        [xyz(32, 32, 2), xyz(16, 32, 2), xyz(16, 16, 2), xyz(16, 16, 0), xyz(32, 32, 0)],
    ],
    floor_offsets: [
        [c(0, 0), c(0, 0), c(0, 16), c(16, 0), c(0, 0)],
        [c(0, 0), c(0, 0), c(16, 16), c(0, 0), c(0, 0)],
        [c(0, 0), c(0, 16), c(16, 0), c(0, 16), c(0, 0)],
        [c(0, 0), c(16, 0), c(0, 0), c(16, 16), c(0, 0)],
    ],
    supports: [
        [0, 0, 3, 5, 1],
        [1, 1, 4, 2, 0],
        [0, 0, 5, 3, 1],
        [1, 1, 2, 4, 0],
    ],
    orthogonal_element: TrackElemType::RightEighthToOrthogonal,
};

#[rustfmt::skip]
const RIGHT_EIGHTH_TO_DIAG: EighthTurn = EighthTurn {
    rails: turn_sprites(SPR_MINIATURE_RAILWAY_EIGHT_TO_DIAG_RIGHT),
    rail_bounds: [
        [xyz(32, 32, 2), xyz(32, 16, 2), xyz(16, 16, 2), xyz(32, 32, 0)],
        [xyz(32, 32, 2), xyz(16, 32, 2), xyz(16, 16, 2), xyz(16, 16, 2)],
        [xyz(32, 32, 2), xyz(34, 16, 2), xyz(28, 28, 2), xyz(32, 34, 0)],
        [xyz(32, 32, 2), xyz(16, 32, 2), xyz(16, 16, 2), xyz(30, 30, 0)],
    ],
    rail_offsets: [
        [c(0, 0), c(0, 16), c(0, 0), c(0, 0)],
        [c(0, 0), c(16, 0), c(0, 16), c(0, 0)],
        [c(0, 0), c(0, 0), c(4, 4), c(0, 0)],
        [c(0, 0), c(0, 0), c(16, 0), c(0, 0)],
    ],
    orthogonal_bounds: [
        [xyz(32, 32, 2), xyz(32, 16, 2), xyz(16, 16, 2), xyz(16, 16, 2)],
        [xyz(32, 32, 2), xyz(16, 32, 2), xyz(16, 16, 2), xyz(16, 16, 2)],
        [xyz(32, 32, 2), xyz(34, 16, 2), xyz(28, 28, 2), xyz(16, 18, 2)],
        [xyz(32, 32, 2), xyz(16, 32, 2), xyz(16, 16, 2), xyz(14, 14, 2)],
    ],
    orthogonal_offsets: [
        [c(0, 0), c(0, 16), c(0, 0), c(16, 0)],
        [c(0, 0), c(16, 0), c(0, 16), c(0, 0)],
        [c(0, 0), c(0, 0), c(4, 4), c(0, 16)],
        [c(0, 0), c(0, 0), c(16, 0), c(16, 16)],
    ],
    floor: [
        [P90, P90, N, S, P90],
        [P90, P90, E, W, P],
        [P, P, S, N, P90],
        [P90, P90, W, E, P],
    ],
    floor_bounds: [
        [xyz(32, 32, 2), xyz(32, 16, 2), xyz(16, 16, 2), xyz(16, 16, 0), xyz(32, 32, 0)],
        [xyz(32, 32, 2), xyz(16, 32, 2), xyz(16, 16, 2), xyz(16, 16, 0), xyz(16, 16, 2)],
        [xyz(32, 32, 2), xyz(34, 16, 2), xyz(28, 28, 2), xyz(16, 16, 0), xyz(32, 34, 0)],
        [xyz(32, 32, 2), xyz(16, 32, 2), xyz(16, 16, 2), xyz(16, 16, 0), xyz(30, 30, 0)],
    ],
    floor_offsets: [
        [c(0, 0), c(0, 16), c(0, 0), c(16, 16), c(0, 0)],
        [c(0, 0), c(16, 0), c(0, 16), c(16, 0), c(0, 0)],
        [c(0, 0), c(0, 0), c(4, 4), c(0, 0), c(0, 0)],
        [c(0, 0), c(0, 0), c(16, 0), c(0, 16), c(0, 0)],
    ],
    supports: [
        [0, 0, 2, 4, 1],
        [1, 1, 3, 5, 0],
        [0, 0, 4, 2, 1],
        [1, 1, 5, 3, 0],
    ],
    orthogonal_element: TrackElemType::LeftEighthToOrthogonal,
};

fn paint_eighth_to_diag(
    session: &mut PaintSession,
    turn: &EighthTurn,
    sequence: u8,
    direction: Direction,
    height: i32,
    element: &TrackElement,
    support_type: SupportType,
) {
    let d = (direction & 3) as usize;
    let s = (sequence as usize).min(4);
    let to_orthogonal = element.elem_type() == turn.orthogonal_element;

    let supported = if s == 4 && to_orthogonal {
        false
    } else {
        wooden(session, support_type, turn.supports[d][s], 0, height)
    };
    let (track, supports) = colours(session);
    let origin = xyz(0, 0, height);

    if supported {
        let floor_box = BoundBoxXYZ::new(CoordsXYZ::from_xy(turn.floor_offsets[d][s], height), turn.floor_bounds[d][s]);
        session.add_image_as_parent(supports.with_index(turn.floor[d][s]), origin, floor_box);
        if let Some(index) = eighth_to_diag_index(sequence) {
            let rail_box =
                BoundBoxXYZ::new(CoordsXYZ::from_xy(turn.rail_offsets[d][index], height), turn.rail_bounds[d][index]);
            session.add_image_as_child(track.with_index(turn.rails[d][index]), origin, rail_box);
        }
    } else if let Some(index) = eighth_to_diag_index(sequence) {
        let (offset, bounds) = if to_orthogonal {
            (turn.orthogonal_offsets[d][index], turn.orthogonal_bounds[d][index])
        } else {
            (turn.rail_offsets[d][index], turn.rail_bounds[d][index])
        };
        let rail_box = BoundBoxXYZ::new(CoordsXYZ::from_xy(offset, height), bounds);
        session.add_image_as_parent(track.with_index(turn.rails[d][index]), origin, rail_box);
    }

    match (direction, sequence) {
        (0, 0) => session.push_tunnel_left(height, TunnelGroup::Square, TunnelSubType::Flat),
        (3, 0) => session.push_tunnel_right(height, TunnelGroup::Square, TunnelSubType::Flat),
        _ => {}
    }

    block_segments(session, Segment::ALL);
    set_track_clearance(session, height + 32);
}

fn track_left_eighth_to_diag(
    session: &mut PaintSession,
    _ride: &Ride,
    sequence: u8,
    direction: Direction,
    height: i32,
    element: &TrackElement,
    support_type: SupportType,
) {
    paint_eighth_to_diag(session, &LEFT_EIGHTH_TO_DIAG, sequence, direction, height, element, support_type);
}

fn track_right_eighth_to_diag(
    session: &mut PaintSession,
    _ride: &Ride,
    sequence: u8,
    direction: Direction,
    height: i32,
    element: &TrackElement,
    support_type: SupportType,
) {
    paint_eighth_to_diag(session, &RIGHT_EIGHTH_TO_DIAG, sequence, direction, height, element, support_type);
}

fn track_left_eighth_to_orthogonal(
    session: &mut PaintSession,
    ride: &Ride,
    sequence: u8,
    direction: Direction,
    height: i32,
    element: &TrackElement,
    support_type: SupportType,
) {
    let sequence = MAP_LEFT_EIGHTH_TURN_TO_ORTHOGONAL[sequence as usize];
    track_right_eighth_to_diag(session, ride, sequence, (direction + 2) & 3, height, element, support_type);
}

fn track_right_eighth_to_orthogonal(
    session: &mut PaintSession,
    ride: &Ride,
    sequence: u8,
    direction: Direction,
    height: i32,
    element: &TrackElement,
    support_type: SupportType,
) {
    let sequence = MAP_LEFT_EIGHTH_TURN_TO_ORTHOGONAL[sequence as usize];
    track_left_eighth_to_diag(session, ride, sequence, (direction + 3) & 3, height, element, support_type);
}

/// Tile of each diagonal piece that carries the rail sprite.
const DIAG_RAIL_TILE: [u8; 4] = [1, 3, 2, 0];

/// Floor support sub-type under each diagonal tile; the first tile has none.
#[rustfmt::skip]
const DIAG_SUPPORTS: [[Option<u8>; 4]; 4] = [
    [None, Some(2), Some(4), Some(0)],
    [None, Some(3), Some(5), Some(1)],
    [None, Some(4), Some(2), Some(0)],
    [None, Some(5), Some(3), Some(1)],
];

/// Floor sprite, box size and box offset for each plain wooden sub-type.
const DIAG_FLOORS: [(ImageIndex, CoordsXY, CoordsXY); 6] = [
    (P, c(32, 32), c(0, 0)),
    (P90, c(32, 32), c(0, 0)),
    (N, c(32, 32), c(-16, -16)),
    (E, c(16, 16), c(0, 16)),
    (S, c(16, 16), c(16, 16)),
    (W, c(16, 16), c(16, 0)),
];

/// One diagonal piece: its rail sprite and how far each part sits above the track.
struct DiagPiece {
    rail: ImageIndex,
    /// Quarter turns added to the direction when picking the rail sprite.
    flip: u8,
    clearance: i32,
    /// Rail bound box z, per direction.
    rail_z: [i32; 4],
    /// Floor sprite z and floor bound box z, per direction and tile.
    floor_z: [[(i32, i32); 4]; 4],
    support_z: [[i32; 4]; 4],
    /// Sloped pieces stand on shallow-capped supports everywhere but the last tile.
    sloped: bool,
}

#[rustfmt::skip]
const RISING_FLOOR_Z: [[(i32, i32); 4]; 4] = [
    [(0, 0), (8, 16), (8, 8), (8, 8)],
    [(0, 0), (-8, -8), (-8, -8), (8, 8)],
    [(0, 0), (8, 8), (8, 16), (8, 8)],
    [(0, 0), (-8, -8), (-8, -8), (8, 8)],
];

#[rustfmt::skip]
const FALLING_FLOOR_Z: [[(i32, i32); 4]; 4] = [
    [(0, 0), (8, 8), (8, 8), (-8, -8)],
    [(0, 0), (-8, -8), (-8, -8), (-8, 0)],
    [(0, 0), (8, 8), (8, 16), (-8, -8)],
    [(0, 0), (-8, -8), (-8, -8), (-8, -8)],
];

const DIAG_FLAT: DiagPiece = DiagPiece {
    rail: SPR_MINIATURE_RAILWAY_DIAG_FLAT,
    flip: 0,
    clearance: 32,
    rail_z: [0; 4],
    floor_z: [[(0, 0); 4]; 4],
    support_z: [[0; 4]; 4],
    sloped: false,
};

const DIAG_FLAT_TO_UP_25: DiagPiece = DiagPiece {
    rail: SPR_MINIATURE_RAILWAY_DIAG_FLAT_TO_25_DEG_UP,
    clearance: 48,
    ..DIAG_FLAT
};

// Same sprite as the rising piece seen from the far end.
const DIAG_DOWN_25_TO_FLAT: DiagPiece = DiagPiece { flip: 2, ..DIAG_FLAT_TO_UP_25 };

#[rustfmt::skip]
const DIAG_UP_25: DiagPiece = DiagPiece {
    rail: SPR_MINIATURE_RAILWAY_DIAG_25_DEG_UP,
    flip: 0,
    clearance: 56,
    rail_z: [8, 0, 8, 8],
    floor_z: RISING_FLOOR_Z,
    support_z: [
        [0, 8, 8, 8],
        [0, -8, -8, 8],
        [0, 8, 8, 8],
        [0, -8, -8, 8],
    ],
    sloped: true,
};

#[rustfmt::skip]
const DIAG_UP_25_TO_FLAT: DiagPiece = DiagPiece {
    rail: SPR_MINIATURE_RAILWAY_DIAG_25_DEG_UP_TO_FLAT,
    support_z: [
        [0, 8, 8, 8],
        [0, -8, -8, 0],
        [0, 8, 8, 8],
        [0, -8, -8, 8],
    ],
    ..DIAG_UP_25
};

#[rustfmt::skip]
const DIAG_DOWN_25: DiagPiece = DiagPiece {
    rail: SPR_MINIATURE_RAILWAY_DIAG_25_DEG_UP,
    flip: 2,
    clearance: 56,
    rail_z: [0, 8, 8, 8],
    floor_z: FALLING_FLOOR_Z,
    support_z: [
        [0, 16, 16, 0],
        [0, -8, -8, 0],
        [0, 16, 16, 0],
        [0, -8, -8, -8],
    ],
    sloped: true,
};

#[rustfmt::skip]
const DIAG_FLAT_TO_DOWN_25: DiagPiece = DiagPiece {
    rail: SPR_MINIATURE_RAILWAY_DIAG_25_DEG_UP_TO_FLAT,
    support_z: [
        [0, 16, 16, 0],
        [0, -8, -8, -8],
        [0, 8, 8, 0],
        [0, -8, -8, -8],
    ],
    ..DIAG_DOWN_25
};

fn paint_diag(
    session: &mut PaintSession,
    piece: &DiagPiece,
    sequence: u8,
    direction: Direction,
    height: i32,
    support_type: SupportType,
) {
    let d = (direction & 3) as usize;
    let s = (sequence & 3) as usize;
    let mut supported = false;
    let mut floor = DIAG_FLOORS[0];
    if let Some(sub_type) = DIAG_SUPPORTS[d][s] {
        floor = DIAG_FLOORS[sub_type as usize];
        let support_height = height + piece.support_z[d][s];
        supported = if piece.sloped && s != 3 {
            wooden_b(session, support_type, sub_type, 0, support_height)
        } else {
            wooden(session, support_type, sub_type, 0, support_height)
        };
    }
    if d == 1 && s == 3 {
        floor.2 = c(-16, -16);
    }

    let draw_rail = DIAG_RAIL_TILE[d] as usize == s;
    let (track, supports) = colours(session);
    let rail = track.with_index(piece.rail + ((direction + piece.flip) & 3) as ImageIndex);
    let rail_at = xyz(-16, -16, height);
    let rail_box = BoundBoxXYZ::new(xyz(-16, -16, height + piece.rail_z[d]), xyz(32, 32, 2));

    if supported {
        let (image, size, offset) = floor;
        let (floor_z, floor_box_z) = piece.floor_z[d][s];
        let thickness = if draw_rail { 2 } else { 0 };
        session.add_image_as_parent(
            supports.with_index(image),
            xyz(0, 0, height + floor_z),
            BoundBoxXYZ::new(CoordsXYZ::from_xy(offset, height + floor_box_z), xyz(size.x, size.y, thickness)),
        );
        if draw_rail {
            session.add_image_as_child(rail, rail_at, rail_box);
        }
    } else if draw_rail {
        session.add_image_as_parent(rail, rail_at, rail_box);
    }

    block_segments(session, Segment::ALL);
    set_track_clearance(session, height + piece.clearance);
}

macro_rules! diag_paint_fns {
    ($($name:ident => $piece:expr;)+) => {
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
                paint_diag(session, &$piece, sequence, direction, height, support_type);
            }
        )+
    };
}

diag_paint_fns! {
    track_diag_flat => DIAG_FLAT;
    track_diag_25_deg_up => DIAG_UP_25;
    track_diag_flat_to_25_deg_up => DIAG_FLAT_TO_UP_25;
    track_diag_25_deg_up_to_flat => DIAG_UP_25_TO_FLAT;
    track_diag_25_deg_down => DIAG_DOWN_25;
    track_diag_flat_to_25_deg_down => DIAG_FLAT_TO_DOWN_25;
    track_diag_25_deg_down_to_flat => DIAG_DOWN_25_TO_FLAT;
}

pub fn get_track_paint_function_miniature_railway(track_type: TrackElemType) -> Option<PaintFunction> {
    use TrackElemType::*;
    let f: PaintFunction = match track_type {
        Flat => track_flat,
        EndStation | BeginStation | MiddleStation => track_station,
        Up25 => track_25_deg_up,
        FlatToUp25 => track_flat_to_25_deg_up,
        Up25ToFlat => track_25_deg_up_to_flat,
        Down25 => track_25_deg_down,
        FlatToDown25 => track_flat_to_25_deg_down,
        Down25ToFlat => track_25_deg_down_to_flat,
        LeftQuarterTurn5Tiles => track_left_quarter_turn_5,
        RightQuarterTurn5Tiles => track_right_quarter_turn_5,
        SBendLeft => track_s_bend_left,
        SBendRight => track_s_bend_right,
        LeftQuarterTurn3Tiles => track_left_quarter_turn_3,
        RightQuarterTurn3Tiles => track_right_quarter_turn_3,
        LeftEighthToDiag => track_left_eighth_to_diag,
        RightEighthToDiag => track_right_eighth_to_diag,
        LeftEighthToOrthogonal => track_left_eighth_to_orthogonal,
        RightEighthToOrthogonal => track_right_eighth_to_orthogonal,
        DiagFlat => track_diag_flat,
        DiagUp25 => track_diag_25_deg_up,
        DiagFlatToUp25 => track_diag_flat_to_25_deg_up,
        DiagUp25ToFlat => track_diag_25_deg_up_to_flat,
        DiagDown25 => track_diag_25_deg_down,
        DiagFlatToDown25 => track_diag_flat_to_25_deg_down,
        DiagDown25ToFlat => track_diag_25_deg_down_to_flat,
        _ => return None,
    };
    Some(f)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn turn_sprite_tables_run_direction_major() {
        assert_eq!(QUARTER_TURN_5_SPRITES[1][0], 23348);
        assert_eq!(QUARTER_TURN_3_SPRITES[3][2], 23402);
        assert_eq!(LEFT_EIGHTH_TO_DIAG.rails[3][3], 23436);
        assert_eq!(RIGHT_EIGHTH_TO_DIAG.rails[1][0], 23409);
    }

    fn paint_tile(session: &mut PaintSession, elem: TrackElemType, sequence: u8, direction: Direction) {
        let f = get_track_paint_function_miniature_railway(elem).unwrap();
        let element = TrackElement::new(elem, 48);
        let support = crate::RideType::MiniatureRailway.default_support_type();
        f(session, &Ride::default(), sequence, direction, 48, &element, support);
    }

    fn rail_box_z(elem: TrackElemType, direction: Direction, sprite: ImageIndex) -> i32 {
        let mut session = PaintSession::new();
        paint_tile(&mut session, elem, DIAG_RAIL_TILE[direction as usize], direction);
        let rail = session.draw_calls().iter().find(|c| c.image.index == sprite).unwrap();
        assert_eq!(rail.offset.z, 48);
        rail.bound_box.offset.z
    }

    #[test]
    fn diagonal_slopes_lift_the_rail_box() {
        use TrackElemType::*;
        assert_eq!(rail_box_z(DiagUp25, 0, 23449), 56);
        assert_eq!(rail_box_z(DiagUp25, 1, 23450), 48);
        assert_eq!(rail_box_z(DiagUp25ToFlat, 2, 23447), 56);
        assert_eq!(rail_box_z(DiagDown25, 0, 23451), 48);
        assert_eq!(rail_box_z(DiagFlatToDown25, 3, 23446), 56);
        assert_eq!(rail_box_z(DiagFlat, 0, 23437), 48);
    }

    #[test]
    fn every_diagonal_piece_is_painted() {
        use TrackElemType::*;
        for elem in [DiagFlat, DiagUp25, DiagFlatToUp25, DiagUp25ToFlat, DiagDown25, DiagFlatToDown25, DiagDown25ToFlat] {
            assert!(get_track_paint_function_miniature_railway(elem).is_some(), "{elem:?}");
        }
    }

    #[test]
    fn sloped_diagonals_raise_their_supports() {
        // The floor of a rising diagonal's second tile rides 8 units up with its support.
        let mut level = PaintSession::new();
        paint_tile(&mut level, TrackElemType::DiagFlat, 1, 0);
        let mut sloped = PaintSession::new();
        paint_tile(&mut sloped, TrackElemType::DiagUp25, 1, 0);
        let floor = |s: &PaintSession| s.draw_calls().iter().find(|c| c.image.index == N).map(|c| c.offset.z);
        assert_eq!(floor(&level), Some(48));
        assert_eq!(floor(&sloped), Some(56));
    }

    #[test]
    fn rails_through_a_path_are_gravel_with_a_shadowed_groove() {
        let mut session = PaintSession::new();
        session.path_edges_on_same_height = Some(0b0001);
        paint_tile(&mut session, TrackElemType::Flat, 0, 0);
        let calls = session.draw_calls();
        let tail: Vec<_> = calls[calls.len() - 3..].iter().map(|c| (c.image.index, c.image.template)).collect();
        assert_eq!(
            tail,
            vec![
                (SPR_G2_MINIATURE_RAILWAY_GRAVEL_SW_NE, ColourTemplate::Plain),
                (SPR_G2_MINIATURE_RAILWAY_GROOVED_SW_NE, ColourTemplate::Plain),
                (SPR_G2_MINIATURE_RAILWAY_INSET_END_SW, ColourTemplate::Shadow),
            ]
        );
        assert_eq!(calls[calls.len() - 1].bound_box.offset.z, 50);
        assert_eq!(calls[calls.len() - 3].bound_box.offset.z, 48);
    }

    #[test]
    fn rails_without_a_path_keep_the_track_colour() {
        let mut session = PaintSession::new();
        paint_tile(&mut session, TrackElemType::Flat, 0, 1);
        let last = session.draw_calls().last().unwrap();
        assert_eq!(last.image.index, SPR_MINIATURE_RAILWAY_FLAT_NW_SE);
        assert_eq!(last.image.template, ColourTemplate::Scheme(ColourScheme::Track));
    }

    #[test]
    fn groove_inset_follows_view_rotation() {
        assert_eq!(grooved_inset(0b0101, 0, 0), SPR_G2_MINIATURE_RAILWAY_INSET_SW_NE);
        assert_eq!(grooved_inset(0b0000, 0, 0), SPR_G2_MINIATURE_RAILWAY_INSET_END_SW_NE);
        assert_eq!(grooved_inset(0b0001, 1, 1), SPR_G2_MINIATURE_RAILWAY_INSET_END_NW);
        assert_eq!(grooved_inset(0b1010, 1, 0), SPR_G2_MINIATURE_RAILWAY_INSET_NW_SE);
    }

    #[test]
    fn every_diagonal_has_exactly_one_rail_tile() {
        for d in 0..4 {
            let tiles = (0..4u8).filter(|&s| DIAG_RAIL_TILE[d] == s).count();
            assert_eq!(tiles, 1);
        }
    }
}
