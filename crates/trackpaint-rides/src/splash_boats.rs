//! Splash boats (log flume): boat trough on wooden trestles with square tunnels.

use trackpaint_geom::{BoundBoxXYZ, CoordsXYZ, Direction, xyz};
use trackpaint_session::{ColourScheme, ImageId, ImageIndex, PaintSession, Segment, TunnelGroup, TunnelSubType};
use trackpaint_session::TunnelSubType::{Flat as TFlat, FlatTo25Deg as TFlatTo25, SlopeEnd as TEnd, SlopeStart as TStart};
use trackpaint_supports::{SupportType, wooden_a_supports_paint_setup};
use trackpaint_track::sprites::{SPR_STATION_BASE_B_NW_SE, SPR_STATION_BASE_B_SW_NE, SPR_STATION_BASE_D};
use trackpaint_track::turns::{right_quarter_turn_5_tiles_paint_2, right_quarter_turn_5_tiles_wooden_supports};
use trackpaint_track::{
    PaintFunction, Ride, SpriteBb, TrackElemType, TrackElement, add_image_at, add_image_at_rotated, block_segments,
    block_segments_rotated, draw_narrow_station_platform, onride_photo_paint, set_track_clearance,
};

const SPR_SPLASH_BOATS_FLAT_TOP_SW_NE: ImageIndex = 20820;
const SPR_SPLASH_BOATS_FLAT_TOP_NW_SE: ImageIndex = 20821;
const SPR_SPLASH_BOATS_FLAT_TOP_NE_SW: ImageIndex = 20822;
const SPR_SPLASH_BOATS_FLAT_TOP_SE_NW: ImageIndex = 20823;
const SPR_SPLASH_BOATS_FLAT_SIDE_SW_NE: ImageIndex = 20824;
const SPR_SPLASH_BOATS_FLAT_SIDE_NW_SE: ImageIndex = 20825;
const SPR_SPLASH_BOATS_FLAT_SIDE_NE_SW: ImageIndex = 20826;
const SPR_SPLASH_BOATS_FLAT_SIDE_SE_NW: ImageIndex = 20827;

// Up pieces: four track sprites by direction, then four side sprites.
const SPR_SPLASH_BOATS_FLAT_TO_25_DEG_UP: ImageIndex = 20828;
const SPR_SPLASH_BOATS_25_DEG_UP_TO_FLAT: ImageIndex = 20836;
const SPR_SPLASH_BOATS_25_DEG_UP: ImageIndex = 20844;
const SPR_SPLASH_BOATS_25_DEG_UP_TO_60_DEG_UP: ImageIndex = 20864;
const SPR_SPLASH_BOATS_60_DEG_UP_TO_25_DEG_UP: ImageIndex = 20872;
const SPR_SPLASH_BOATS_60_DEG_UP: ImageIndex = 20880;

const SPR_SPLASH_BOATS_RIGHT_QUARTER_TURN_5_TOP: ImageIndex = 20888;
const SPR_SPLASH_BOATS_RIGHT_QUARTER_TURN_5_SIDE: ImageIndex = 20908;

const SPR_SPLASH_BOATS_S_BEND_TOP_NE_NW_NE: ImageIndex = 20948;
const SPR_SPLASH_BOATS_S_BEND_TOP_NW_SW_NW: ImageIndex = 20952;
const SPR_SPLASH_BOATS_S_BEND_TOP_NE_SE_NE: ImageIndex = 20956;
const SPR_SPLASH_BOATS_S_BEND_TOP_SE_SW_SE: ImageIndex = 20960;
const SPR_SPLASH_BOATS_S_BEND_SIDE_NE_NW_NE: ImageIndex = 20964;
const SPR_SPLASH_BOATS_S_BEND_SIDE_NW_SW_NW: ImageIndex = 20968;
const SPR_SPLASH_BOATS_S_BEND_SIDE_NE_SE_NE: ImageIndex = 20972;
const SPR_SPLASH_BOATS_S_BEND_SIDE_SE_SW_SE: ImageIndex = 20976;
// These four run backwards: sequence 0 is the highest index.
const SPR_SPLASH_BOATS_S_BEND_TOP_SW_SE_SW_LAST: ImageIndex = 20983;
const SPR_SPLASH_BOATS_S_BEND_TOP_SE_NE_SE_LAST: ImageIndex = 20987;
const SPR_SPLASH_BOATS_S_BEND_TOP_SW_NW_SW_LAST: ImageIndex = 20991;
const SPR_SPLASH_BOATS_S_BEND_TOP_NW_NE_NW_LAST: ImageIndex = 20995;

fn tunnel(session: &mut PaintSession, direction: Direction, height: i32, sub_type: TunnelSubType) {
    session.push_tunnel_rotated(direction, height, TunnelGroup::Square, sub_type);
}

fn wooden(session: &mut PaintSession, support_type: SupportType, sub_type: u8, special: i32, height: i32) -> bool {
    let colour = session.track_colour(ColourScheme::Supports);
    wooden_a_supports_paint_setup(session, support_type, sub_type, special, height, colour)
}

fn parent(session: &mut PaintSession, image: ImageId, height: i32, bb_offset: CoordsXYZ, length: CoordsXYZ) -> Option<usize> {
    session.add_image_as_parent(image, xyz(0, 0, height), BoundBoxXYZ::new(bb_offset, length))
}

/// A straight sloped trough, with track and side sprites per direction.
struct SlopePiece {
    top: [ImageIndex; 4],
    side: [ImageIndex; 4],
    side_height: i32,
    special: [i32; 4],
    /// Tunnel for directions 0 and 3.
    near_tunnel: (i32, TunnelSubType),
    far_tunnel: (i32, TunnelSubType),
    clearance: i32,
    /// Steep pieces hang their curved support tops under the track sprite.
    prepend_supports: bool,
}

const fn up_piece(
    first: ImageIndex,
    side_height: i32,
    special: i32,
    near_tunnel: (i32, TunnelSubType),
    far_tunnel: (i32, TunnelSubType),
    clearance: i32,
    prepend_supports: bool,
) -> SlopePiece {
    SlopePiece {
        top: [first, first + 1, first + 2, first + 3],
        side: [first + 4, first + 5, first + 6, first + 7],
        side_height,
        special: [special, special + 1, special + 2, special + 3],
        near_tunnel,
        far_tunnel,
        clearance,
        prepend_supports,
    }
}

const UP_25: SlopePiece = up_piece(SPR_SPLASH_BOATS_25_DEG_UP, 50, 9, (-8, TStart), (8, TEnd), 56, false);
const UP_60: SlopePiece = up_piece(SPR_SPLASH_BOATS_60_DEG_UP, 98, 21, (-8, TStart), (56, TEnd), 104, true);
const FLAT_TO_UP_25: SlopePiece = up_piece(SPR_SPLASH_BOATS_FLAT_TO_25_DEG_UP, 42, 1, (0, TFlat), (0, TEnd), 48, false);
const UP_25_TO_FLAT: SlopePiece = up_piece(SPR_SPLASH_BOATS_25_DEG_UP_TO_FLAT, 34, 5, (-8, TFlat), (8, TFlatTo25), 40, false);
const UP_25_TO_UP_60: SlopePiece =
    up_piece(SPR_SPLASH_BOATS_25_DEG_UP_TO_60_DEG_UP, 66, 13, (-8, TStart), (24, TEnd), 72, true);
const UP_60_TO_UP_25: SlopePiece =
    up_piece(SPR_SPLASH_BOATS_60_DEG_UP_TO_25_DEG_UP, 66, 17, (-8, TStart), (24, TEnd), 72, true);

// The shallow down pieces have their own sprites rather than reusing the reversed up piece.
const DOWN_25: SlopePiece = SlopePiece {
    top: [20862, 20863, 20860, 20861],
    side: [20850, 20851, 20848, 20849],
    side_height: 50,
    special: [11, 12, 9, 10],
    near_tunnel: (8, TEnd),
    far_tunnel: (-8, TStart),
    clearance: 56,
    prepend_supports: false,
};

const FLAT_TO_DOWN_25: SlopePiece = SlopePiece {
    top: [20858, 20859, 20856, 20857],
    side: [20842, 20843, 20840, 20841],
    side_height: 34,
    special: [7, 8, 5, 6],
    near_tunnel: (8, TFlatTo25),
    far_tunnel: (-8, TFlat),
    clearance: 40,
    prepend_supports: false,
};

const DOWN_25_TO_FLAT: SlopePiece = SlopePiece {
    top: [20854, 20855, 20852, 20853],
    side: [20834, 20835, 20832, 20833],
    side_height: 42,
    special: [3, 4, 1, 2],
    near_tunnel: (0, TEnd),
    far_tunnel: (0, TFlat),
    clearance: 48,
    prepend_supports: false,
};

fn paint_slope(
    session: &mut PaintSession,
    piece: &SlopePiece,
    direction: Direction,
    height: i32,
    support_type: SupportType,
) {
    let d = (direction & 3) as usize;
    let track = session.track_colour(ColourScheme::Track);
    let top = session.add_image_as_parent_rotated(
        direction,
        track.with_index(piece.top[d]),
        xyz(0, 0, height),
        xyz(32, 20, 2),
        xyz(0, 6, height),
    );
    session.add_image_as_parent_rotated(
        direction,
        track.with_index(piece.side[d]),
        xyz(0, 0, height),
        xyz(32, 1, piece.side_height),
        xyz(0, 27, height),
    );

    if piece.prepend_supports {
        session.wooden_supports_prepend_to = top;
    }
    wooden(session, support_type, direction & 1, piece.special[d], height);

    let (dz, sub_type) = if direction == 0 || direction == 3 { piece.near_tunnel } else { piece.far_tunnel };
    tunnel(session, direction, height + dz, sub_type);

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
    track_60_deg_up => UP_60, flip: 0;
    track_flat_to_25_deg_up => FLAT_TO_UP_25, flip: 0;
    track_25_deg_up_to_60_deg_up => UP_25_TO_UP_60, flip: 0;
    track_60_deg_up_to_25_deg_up => UP_60_TO_UP_25, flip: 0;
    track_25_deg_up_to_flat => UP_25_TO_FLAT, flip: 0;
    track_25_deg_down => DOWN_25, flip: 0;
    track_flat_to_25_deg_down => FLAT_TO_DOWN_25, flip: 0;
    track_25_deg_down_to_flat => DOWN_25_TO_FLAT, flip: 0;
    track_60_deg_down => UP_60, flip: 2;
    track_25_deg_down_to_60_deg_down => UP_60_TO_UP_25, flip: 2;
    track_60_deg_down_to_25_deg_down => UP_25_TO_UP_60, flip: 2;
}

/// Straight trough drawn in screen axes, without supports or tunnels.
fn paint_flat_trough(session: &mut PaintSession, direction: Direction, height: i32) {
    let track = session.track_colour(ColourScheme::Track);
    if direction & 1 != 0 {
        let (top, side) = if direction == 1 {
            (SPR_SPLASH_BOATS_FLAT_TOP_NW_SE, SPR_SPLASH_BOATS_FLAT_SIDE_NW_SE)
        } else {
            (SPR_SPLASH_BOATS_FLAT_TOP_SE_NW, SPR_SPLASH_BOATS_FLAT_SIDE_SE_NW)
        };
        parent(session, track.with_index(top), height, xyz(6, 0, height), xyz(20, 32, 2));
        parent(session, track.with_index(side), height, xyz(27, 0, height), xyz(1, 32, 26));
    } else {
        let (top, side) = if direction == 0 {
            (SPR_SPLASH_BOATS_FLAT_TOP_SW_NE, SPR_SPLASH_BOATS_FLAT_SIDE_SW_NE)
        } else {
            (SPR_SPLASH_BOATS_FLAT_TOP_NE_SW, SPR_SPLASH_BOATS_FLAT_SIDE_NE_SW)
        };
        parent(session, track.with_index(top), height, xyz(0, 6, height), xyz(32, 20, 2));
        parent(session, track.with_index(side), height, xyz(0, 27, height), xyz(32, 1, 26));
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
    paint_flat_trough(session, direction, height);
    wooden(session, support_type, direction & 1, 0, height);
    tunnel(session, direction, height, TFlat);
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
    let track = session.track_colour(ColourScheme::Track);
    let misc = session.track_colour(ColourScheme::Misc);
    if direction & 1 != 0 {
        parent(session, track.with_index(SPR_SPLASH_BOATS_FLAT_TOP_NW_SE), height, xyz(6, 0, height + 3), xyz(20, 32, 1));
        add_image_at(session, misc.with_index(SPR_STATION_BASE_B_NW_SE), xyz(0, 0, height), xyz(32, 32, 1));
    } else {
        parent(session, track.with_index(SPR_SPLASH_BOATS_FLAT_TOP_SW_NE), height, xyz(0, 6, height + 3), xyz(32, 20, 1));
        add_image_at(session, misc.with_index(SPR_STATION_BASE_B_SW_NE), xyz(0, 0, height), xyz(32, 32, 1));
    }

    wooden(session, support_type, direction & 1, 0, height);
    draw_narrow_station_platform(session, ride, direction, height, 7, element);
    tunnel(session, direction, height, TFlat);
    block_segments(session, Segment::ALL);
    set_track_clearance(session, height + 32);
}

fn track_on_ride_photo(
    session: &mut PaintSession,
    _ride: &Ride,
    _sequence: u8,
    direction: Direction,
    height: i32,
    element: &TrackElement,
    support_type: SupportType,
) {
    let misc = session.track_colour(ColourScheme::Misc);
    add_image_at_rotated(session, direction, misc.with_index(SPR_STATION_BASE_D), xyz(0, 0, height), xyz(32, 32, 1));
    paint_flat_trough(session, direction, height);
    wooden(session, support_type, direction & 1, 0, height);
    tunnel(session, direction, height, TFlat);
    onride_photo_paint(session, direction, height + 3, element);
    block_segments(session, Segment::ALL);
    set_track_clearance(session, height + 48);
}

/// Track or side layer of a five-tile turn; sides sit 27 units up with a flat box.
const fn quarter_turn_5_layer(
    sprites: [[ImageIndex; 5]; 4],
    boxes: &[[((i32, i32), (i32, i32)); 5]; 4],
    side: bool,
) -> [[SpriteBb; 5]; 4] {
    let mut table = [[SpriteBb::new(0, CoordsXYZ::ZERO, CoordsXYZ::ZERO, CoordsXYZ::ZERO); 5]; 4];
    let (bz, sz) = if side { (27, 0) } else { (0, 2) };
    let mut d = 0;
    while d < 4 {
        let mut p = 0;
        while p < 5 {
            let ((bx, by), (sx, sy)) = boxes[d][p];
            table[d][p] = SpriteBb::new(sprites[d][p], CoordsXYZ::ZERO, xyz(bx, by, bz), xyz(sx, sy, sz));
            p += 1;
        }
        d += 1;
    }
    table
}

const fn descending(first: ImageIndex) -> [ImageIndex; 5] {
    [first, first - 1, first - 2, first - 3, first - 4]
}

const fn ascending(first: ImageIndex) -> [ImageIndex; 5] {
    [first, first + 1, first + 2, first + 3, first + 4]
}

/// (bound offset, bound size) per direction and part.
#[rustfmt::skip]
const LEFT_QUARTER_TURN_5_BOXES: [[((i32, i32), (i32, i32)); 5]; 4] = [
    [((0, 2), (32, 27)), ((0, 0), (32, 16)), ((0, 16), (16, 16)), ((16, 0), (16, 34)), ((2, 0), (32, 32))],
    [((2, 0), (27, 32)), ((0, 0), (16, 32)), ((16, 16), (16, 16)), ((0, 0), (32, 16)), ((0, 2), (32, 27))],
    [((0, 2), (32, 32)), ((0, 16), (32, 16)), ((16, 0), (16, 16)), ((0, 0), (16, 32)), ((2, 0), (27, 32))],
    [((2, 0), (32, 32)), ((16, 0), (16, 32)), ((0, 0), (16, 16)), ((0, 16), (32, 16)), ((0, 2), (32, 32))],
];

#[rustfmt::skip]
const RIGHT_QUARTER_TURN_5_BOXES: [[((i32, i32), (i32, i32)); 5]; 4] = [
    [((0, 2), (32, 32)), ((0, 16), (32, 16)), ((0, 0), (16, 16)), ((16, 0), (16, 32)), ((2, 0), (32, 32))],
    [((2, 0), (32, 32)), ((16, 0), (16, 34)), ((0, 16), (16, 16)), ((0, 0), (32, 16)), ((0, 2), (32, 27))],
    [((0, 2), (32, 27)), ((0, 0), (32, 16)), ((16, 16), (16, 16)), ((0, 0), (16, 32)), ((2, 0), (27, 32))],
    [((2, 0), (27, 32)), ((0, 0), (16, 32)), ((16, 0), (16, 16)), ((0, 16), (32, 16)), ((0, 2), (32, 32))],
];

const LEFT_QUARTER_TURN_5_TOP_SPRITES: [[ImageIndex; 5]; 4] =
    [descending(20937), descending(20942), descending(20947), descending(20932)];
const LEFT_QUARTER_TURN_5_SIDE_SPRITES: [[ImageIndex; 5]; 4] =
    [descending(20917), descending(20922), descending(20927), descending(20912)];

const fn right_turn_sprites(first: ImageIndex) -> [[ImageIndex; 5]; 4] {
    [ascending(first), ascending(first + 5), ascending(first + 10), ascending(first + 15)]
}

const LEFT_QUARTER_TURN_5_TOP: [[SpriteBb; 5]; 4] =
    quarter_turn_5_layer(LEFT_QUARTER_TURN_5_TOP_SPRITES, &LEFT_QUARTER_TURN_5_BOXES, false);
const LEFT_QUARTER_TURN_5_SIDE: [[SpriteBb; 5]; 4] =
    quarter_turn_5_layer(LEFT_QUARTER_TURN_5_SIDE_SPRITES, &LEFT_QUARTER_TURN_5_BOXES, true);
const RIGHT_QUARTER_TURN_5_TOP: [[SpriteBb; 5]; 4] = quarter_turn_5_layer(
    right_turn_sprites(SPR_SPLASH_BOATS_RIGHT_QUARTER_TURN_5_TOP),
    &RIGHT_QUARTER_TURN_5_BOXES,
    false,
);
const RIGHT_QUARTER_TURN_5_SIDE: [[SpriteBb; 5]; 4] = quarter_turn_5_layer(
    right_turn_sprites(SPR_SPLASH_BOATS_RIGHT_QUARTER_TURN_5_SIDE),
    &RIGHT_QUARTER_TURN_5_BOXES,
    true,
);

/// Wooden sub-types under the left turn, which has its own corner pieces.
#[rustfmt::skip]
const LEFT_QUARTER_TURN_5_WOODEN: [[Option<u8>; 7]; 4] = [
    [Some(0), None, Some(5), Some(3), None, Some(5), Some(1)],
    [Some(1), None, Some(2), Some(4), None, Some(2), Some(0)],
    [Some(0), None, Some(3), Some(5), None, Some(3), Some(1)],
    [Some(1), None, Some(4), Some(2), None, Some(4), Some(0)],
];

fn track_left_quarter_turn_5(
    session: &mut PaintSession,
    _ride: &Ride,
    sequence: u8,
    direction: Direction,
    height: i32,
    _element: &TrackElement,
    support_type: SupportType,
) {
    let track = session.track_colour(ColourScheme::Track);
    right_quarter_turn_5_tiles_paint_2(session, height, direction, sequence, track, &LEFT_QUARTER_TURN_5_TOP);
    right_quarter_turn_5_tiles_paint_2(session, height, direction, sequence, track, &LEFT_QUARTER_TURN_5_SIDE);

    if let Some(sub_type) = LEFT_QUARTER_TURN_5_WOODEN[(direction & 3) as usize][sequence as usize] {
        wooden(session, support_type, sub_type, 0, height);
    }

    match (sequence, direction) {
        (0, 0) | (0, 3) => tunnel(session, direction, height, TFlat),
        (6, 2) | (6, 3) => tunnel(session, direction ^ 1, height, TFlat),
        _ => {}
    }

    let segments = match sequence {
        1 | 4 => Segment::BC | Segment::CC | Segment::D4,
        2 => Segment::C8 | Segment::C4 | Segment::CC | Segment::B4 | Segment::B8 | Segment::D0,
        3 => {
            Segment::CC | Segment::D4 | Segment::BC | Segment::C4 | Segment::B4 | Segment::C0 | Segment::C8 | Segment::D0
        }
        5 => Segment::C8 | Segment::C4 | Segment::D4 | Segment::D0 | Segment::C0 | Segment::B8,
        _ => Segment::ALL,
    };
    block_segments_rotated(session, segments, direction);
    set_track_clearance(session, height + 32);
}

fn track_right_quarter_turn_5(
    session: &mut PaintSession,
    _ride: &Ride,
    sequence: u8,
    direction: Direction,
    height: i32,
    _element: &TrackElement,
    support_type: SupportType,
) {
    let track = session.track_colour(ColourScheme::Track);
    right_quarter_turn_5_tiles_paint_2(session, height, direction, sequence, track, &RIGHT_QUARTER_TURN_5_TOP);
    right_quarter_turn_5_tiles_paint_2(session, height, direction, sequence, track, &RIGHT_QUARTER_TURN_5_SIDE);

    right_quarter_turn_5_tiles_wooden_supports(session, support_type, height, direction, sequence);

    match (sequence, direction) {
        (0, 0) | (0, 3) => tunnel(session, direction, height, TFlat),
        (6, 0) | (6, 1) => tunnel(session, direction ^ 1, height, TFlat),
        _ => {}
    }

    let segments = match sequence {
        1 | 4 => Segment::B4 | Segment::C8 | Segment::CC,
        2 => Segment::D0 | Segment::C4 | Segment::D4 | Segment::BC | Segment::C0 | Segment::CC,
        3 => {
            Segment::B4 | Segment::C8 | Segment::CC | Segment::C4 | Segment::B8 | Segment::BC | Segment::D0 | Segment::D4
        }
        5 => Segment::D4 | Segment::C4 | Segment::D0 | Segment::B8 | Segment::C0 | Segment::C8,
        _ => Segment::ALL,
    };
    block_segments_rotated(session, segments, direction);
    set_track_clearance(session, height + 32);
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Bend {
    Left,
    Right,
}

/// (top, side) sprites for one tile of an S-bend.
fn s_bend_sprites(bend: Bend, direction: Direction, sequence: u8) -> (ImageIndex, ImageIndex) {
    let s = (sequence & 3) as ImageIndex;
    match (bend, direction & 3) {
        (Bend::Left, 0) => (SPR_SPLASH_BOATS_S_BEND_TOP_NE_NW_NE + s, SPR_SPLASH_BOATS_S_BEND_SIDE_NE_NW_NE + s),
        (Bend::Left, 1) => (SPR_SPLASH_BOATS_S_BEND_TOP_NW_SW_NW + s, SPR_SPLASH_BOATS_S_BEND_SIDE_NW_SW_NW + s),
        (Bend::Left, 2) => (SPR_SPLASH_BOATS_S_BEND_TOP_SW_SE_SW_LAST - s, SPR_SPLASH_BOATS_S_BEND_SIDE_NE_NW_NE + 3 - s),
        (Bend::Left, _) => (SPR_SPLASH_BOATS_S_BEND_TOP_SE_NE_SE_LAST - s, SPR_SPLASH_BOATS_S_BEND_SIDE_NW_SW_NW + 3 - s),
        (Bend::Right, 0) => (SPR_SPLASH_BOATS_S_BEND_TOP_NE_SE_NE + s, SPR_SPLASH_BOATS_S_BEND_SIDE_NE_SE_NE + s),
        (Bend::Right, 1) => (SPR_SPLASH_BOATS_S_BEND_TOP_SE_SW_SE + s, SPR_SPLASH_BOATS_S_BEND_SIDE_SE_SW_SE + s),
        (Bend::Right, 2) => (SPR_SPLASH_BOATS_S_BEND_TOP_SW_NW_SW_LAST - s, SPR_SPLASH_BOATS_S_BEND_SIDE_NE_SE_NE + 3 - s),
        (Bend::Right, _) => (SPR_SPLASH_BOATS_S_BEND_TOP_NW_NE_NW_LAST - s, SPR_SPLASH_BOATS_S_BEND_SIDE_SE_SW_SE + 3 - s),
    }
}

fn paint_s_bend(
    session: &mut PaintSession,
    bend: Bend,
    sequence: u8,
    direction: Direction,
    height: i32,
    support_type: SupportType,
) {
    let (top, side) = s_bend_sprites(bend, direction, sequence);
    let d = (direction & 3) as usize;
    let near_half = direction == 0 || direction == 1;

    let (width, bb_y, sub_type) = match (bend, sequence) {
        (_, 0) | (_, 3) => (27, 2, direction & 1),
        (Bend::Left, 1) => (26, if near_half { 0 } else { 6 }, [5, 2, 3, 4][d]),
        (Bend::Left, _) => (26, if near_half { 6 } else { 0 }, [3, 4, 5, 2][d]),
        (Bend::Right, 1) => (26, if near_half { 6 } else { 0 }, [4, 5, 2, 3][d]),
        (Bend::Right, _) => (26, if near_half { 0 } else { 6 }, [2, 3, 4, 5][d]),
    };

    let track = session.track_colour(ColourScheme::Track);
    session.add_image_as_parent_rotated(
        direction,
        track.with_index(top),
        xyz(0, 0, height),
        xyz(32, width, 2),
        xyz(0, bb_y, height),
    );
    session.add_image_as_parent_rotated(
        direction,
        track.with_index(side),
        xyz(0, 0, height),
        xyz(32, width, 0),
        xyz(0, bb_y, height + 27),
    );
    wooden(session, support_type, sub_type, 0, height);

    let segments = match (bend, sequence) {
        (_, 0) | (_, 3) => Segment::ALL,
        (Bend::Left, 1) | (Bend::Right, 2) => {
            Segment::B4 | Segment::B8 | Segment::C4 | Segment::C8 | Segment::CC | Segment::D0
        }
        _ => Segment::BC | Segment::C0 | Segment::C4 | Segment::CC | Segment::D0 | Segment::D4,
    };
    block_segments_rotated(session, segments, direction);

    match (sequence, direction) {
        (0, 0) | (0, 3) | (3, 1) | (3, 2) => tunnel(session, direction, height, TFlat),
        _ => {}
    }
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

pub fn get_track_paint_function_splash_boats(track_type: TrackElemType) -> Option<PaintFunction> {
    use TrackElemType::*;
    let f: PaintFunction = match track_type {
        Flat => track_flat,
        EndStation | BeginStation | MiddleStation => track_station,
        Up25 => track_25_deg_up,
        Up60 => track_60_deg_up,
        FlatToUp25 => track_flat_to_25_deg_up,
        Up25ToUp60 => track_25_deg_up_to_60_deg_up,
        Up60ToUp25 => track_60_deg_up_to_25_deg_up,
        Up25ToFlat => track_25_deg_up_to_flat,
        Down25 => track_25_deg_down,
        Down60 => track_60_deg_down,
        FlatToDown25 => track_flat_to_25_deg_down,
        Down25ToDown60 => track_25_deg_down_to_60_deg_down,
        Down60ToDown25 => track_60_deg_down_to_25_deg_down,
        Down25ToFlat => track_25_deg_down_to_flat,
        LeftQuarterTurn5Tiles => track_left_quarter_turn_5,
        RightQuarterTurn5Tiles => track_right_quarter_turn_5,
        SBendLeft => track_s_bend_left,
        SBendRight => track_s_bend_right,
        OnRidePhoto => track_on_ride_photo,
        _ => return None,
    };
    Some(f)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn left_turn_sprites_count_down() {
        assert_eq!(LEFT_QUARTER_TURN_5_TOP[0][0].sprite, 20937);
        assert_eq!(LEFT_QUARTER_TURN_5_TOP[0][4].sprite, 20933);
        assert_eq!(LEFT_QUARTER_TURN_5_SIDE[3][4].sprite, 20908);
        assert_eq!(LEFT_QUARTER_TURN_5_SIDE[1][2].bb_offset, xyz(16, 16, 27));
    }

    #[test]
    fn reversed_s_bend_sides_reuse_the_forward_run() {
        assert_eq!(s_bend_sprites(Bend::Left, 2, 0), (20983, 20967));
        assert_eq!(s_bend_sprites(Bend::Right, 3, 3), (20992, 20976));
    }
}
