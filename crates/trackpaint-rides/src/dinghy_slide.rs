//! Dinghy slide: an open or covered water chute on metal tube supports.

use trackpaint_geom::{CoordsXYZ, Direction, xyz};
use trackpaint_session::{ColourScheme, ImageIndex, PaintSession, Segment, TunnelGroup, TunnelSubType};
use trackpaint_supports::{SupportType, metal_a_supports_paint_setup};
use trackpaint_track::sprites::{SPR_STATION_BASE_B_NW_SE, SPR_STATION_BASE_B_SW_NE};
use trackpaint_track::turns::{
    DEFAULT_RIGHT_QUARTER_TURN_3_TILES_BOUND_LENGTHS, DEFAULT_RIGHT_QUARTER_TURN_3_TILES_OFFSETS,
    MAP_LEFT_QUARTER_TURN_3_TILES_TO_RIGHT, MAP_LEFT_QUARTER_TURN_5_TILES_TO_RIGHT, left_turn_direction,
    right_quarter_turn_3_tiles_paint_3, right_quarter_turn_3_tiles_tunnel, right_quarter_turn_5_tiles_paint_2,
    right_quarter_turn_5_tiles_tunnel,
};
use trackpaint_track::{
    PaintFunction, Ride, SpriteBb, TrackElemType, TrackElement, add_image_at_rotated, block_segments,
    block_segments_rotated, draw_station, set_track_clearance, should_paint_supports,
};

const TUNNEL_GROUP: TunnelGroup = TunnelGroup::Standard;

const SPR_DINGHY_SLIDE_FLAT_SW_NE: ImageIndex = 19720;
const SPR_DINGHY_SLIDE_FLAT_NW_SE: ImageIndex = 19721;
const SPR_DINGHY_SLIDE_FLAT_FRONT_SW_NE: ImageIndex = 19722;
const SPR_DINGHY_SLIDE_FLAT_FRONT_NW_SE: ImageIndex = 19723;
const SPR_DINGHY_SLIDE_FLAT_CHAIN_SW_NE: ImageIndex = 19724;
const SPR_DINGHY_SLIDE_FLAT_CHAIN_NW_SE: ImageIndex = 19725;
const SPR_DINGHY_SLIDE_FLAT_CHAIN_FRONT_SW_NE: ImageIndex = 19726;
const SPR_DINGHY_SLIDE_FLAT_CHAIN_FRONT_NW_SE: ImageIndex = 19727;
const SPR_DINGHY_SLIDE_FLAT_CHAIN_NE_SW: ImageIndex = 19728;
const SPR_DINGHY_SLIDE_FLAT_CHAIN_SE_NW: ImageIndex = 19729;
const SPR_DINGHY_SLIDE_FLAT_CHAIN_FRONT_NE_SW: ImageIndex = 19730;
const SPR_DINGHY_SLIDE_FLAT_CHAIN_FRONT_SE_NW: ImageIndex = 19731;
const SPR_DINGHY_SLIDE_STATION_SW_NE: ImageIndex = 19732;
const SPR_DINGHY_SLIDE_STATION_NW_SE: ImageIndex = 19733;
const SPR_DINGHY_SLIDE_FLAT_COVERED_SW_NE: ImageIndex = 19736;
const SPR_DINGHY_SLIDE_FLAT_COVERED_NW_SE: ImageIndex = 19737;
const SPR_DINGHY_SLIDE_FLAT_COVERED_FRONT_SW_NE: ImageIndex = 19738;
const SPR_DINGHY_SLIDE_FLAT_COVERED_FRONT_NW_SE: ImageIndex = 19739;

// Slope sprites run SW_NE, NW_SE, NE_SW, SE_NW from the base, then the four fronts.
const SPR_DINGHY_SLIDE_FLAT_TO_25_DEG: ImageIndex = 19740;
const SPR_DINGHY_SLIDE_25_DEG_TO_FLAT: ImageIndex = 19748;
const SPR_DINGHY_SLIDE_25_DEG: ImageIndex = 19756;
const SPR_DINGHY_SLIDE_25_DEG_TO_60_DEG: ImageIndex = 19764;
const SPR_DINGHY_SLIDE_60_DEG_TO_25_DEG: ImageIndex = 19772;
const SPR_DINGHY_SLIDE_60_DEG: ImageIndex = 19780;
const SPR_DINGHY_SLIDE_FLAT_TO_25_DEG_CHAIN: ImageIndex = 19788;
const SPR_DINGHY_SLIDE_25_DEG_TO_FLAT_CHAIN: ImageIndex = 19796;
const SPR_DINGHY_SLIDE_25_DEG_CHAIN: ImageIndex = 19804;
const SPR_DINGHY_SLIDE_FLAT_TO_25_DEG_COVERED: ImageIndex = 19812;
const SPR_DINGHY_SLIDE_25_DEG_TO_FLAT_COVERED: ImageIndex = 19820;
const SPR_DINGHY_SLIDE_25_DEG_COVERED: ImageIndex = 19828;
const SPR_DINGHY_SLIDE_25_DEG_TO_60_DEG_COVERED: ImageIndex = 19836;
const SPR_DINGHY_SLIDE_60_DEG_TO_25_DEG_COVERED: ImageIndex = 19844;
const SPR_DINGHY_SLIDE_60_DEG_COVERED: ImageIndex = 19852;

// Turn sprites are laid out direction-major, part-minor.
const SPR_DINGHY_SLIDE_QUARTER_TURN_3: ImageIndex = 19860;
const SPR_DINGHY_SLIDE_QUARTER_TURN_3_FRONT: ImageIndex = 19872;
const SPR_DINGHY_SLIDE_QUARTER_TURN_3_COVERED: ImageIndex = 19884;
const SPR_DINGHY_SLIDE_QUARTER_TURN_3_COVERED_FRONT: ImageIndex = 19896;
const SPR_DINGHY_SLIDE_QUARTER_TURN_5: ImageIndex = 19908;
const SPR_DINGHY_SLIDE_QUARTER_TURN_5_FRONT: ImageIndex = 19928;
const SPR_DINGHY_SLIDE_QUARTER_TURN_5_COVERED: ImageIndex = 19948;
const SPR_DINGHY_SLIDE_QUARTER_TURN_5_COVERED_FRONT: ImageIndex = 19968;

/// Covered S-bend sprites sit this far past the open ones.
const S_BEND_COVERED_OFFSET: ImageIndex = 32;

const FLAT_SPRITES: [[ImageIndex; 2]; 4] = [
    [SPR_DINGHY_SLIDE_FLAT_SW_NE, SPR_DINGHY_SLIDE_FLAT_FRONT_SW_NE],
    [SPR_DINGHY_SLIDE_FLAT_NW_SE, SPR_DINGHY_SLIDE_FLAT_FRONT_NW_SE],
    [SPR_DINGHY_SLIDE_FLAT_SW_NE, SPR_DINGHY_SLIDE_FLAT_FRONT_SW_NE],
    [SPR_DINGHY_SLIDE_FLAT_NW_SE, SPR_DINGHY_SLIDE_FLAT_FRONT_NW_SE],
];

const FLAT_CHAIN_SPRITES: [[ImageIndex; 2]; 4] = [
    [SPR_DINGHY_SLIDE_FLAT_CHAIN_SW_NE, SPR_DINGHY_SLIDE_FLAT_CHAIN_FRONT_SW_NE],
    [SPR_DINGHY_SLIDE_FLAT_CHAIN_NW_SE, SPR_DINGHY_SLIDE_FLAT_CHAIN_FRONT_NW_SE],
    [SPR_DINGHY_SLIDE_FLAT_CHAIN_NE_SW, SPR_DINGHY_SLIDE_FLAT_CHAIN_FRONT_NE_SW],
    [SPR_DINGHY_SLIDE_FLAT_CHAIN_SE_NW, SPR_DINGHY_SLIDE_FLAT_CHAIN_FRONT_SE_NW],
];

const FLAT_COVERED_SPRITES: [[ImageIndex; 2]; 4] = [
    [SPR_DINGHY_SLIDE_FLAT_COVERED_SW_NE, SPR_DINGHY_SLIDE_FLAT_COVERED_FRONT_SW_NE],
    [SPR_DINGHY_SLIDE_FLAT_COVERED_NW_SE, SPR_DINGHY_SLIDE_FLAT_COVERED_FRONT_NW_SE],
    [SPR_DINGHY_SLIDE_FLAT_COVERED_SW_NE, SPR_DINGHY_SLIDE_FLAT_COVERED_FRONT_SW_NE],
    [SPR_DINGHY_SLIDE_FLAT_COVERED_NW_SE, SPR_DINGHY_SLIDE_FLAT_COVERED_FRONT_NW_SE],
];

const STRAIGHT_SEGMENTS: Segment = Segment::D0.union(Segment::C4).union(Segment::CC);

fn supports_colour(session: &PaintSession) -> trackpaint_session::ImageId {
    session.track_colour(ColourScheme::Supports)
}

fn paint_flat_sprites(
    session: &mut PaintSession,
    sprites: &[[ImageIndex; 2]; 4],
    direction: Direction,
    height: i32,
    support_type: SupportType,
) {
    let track = session.track_colour(ColourScheme::Track);
    let [base, front] = sprites[(direction & 3) as usize];
    session.add_image_as_parent_rotated(direction, track.with_index(base), xyz(0, 0, height), xyz(32, 20, 2), xyz(0, 6, height));
    session.add_image_as_parent_rotated(direction, track.with_index(front), xyz(0, 0, height), xyz(32, 1, 26), xyz(0, 27, height));

    if should_paint_supports(session.map_position) {
        let colour = supports_colour(session);
        metal_a_supports_paint_setup(session, support_type, 4, 0, height, colour);
    }

    session.push_tunnel_rotated(direction, height, TUNNEL_GROUP, TunnelSubType::Flat);
    block_segments_rotated(session, STRAIGHT_SEGMENTS, direction);
    set_track_clearance(session, height + 32);
}

fn track_flat(
    session: &mut PaintSession,
    _ride: &Ride,
    _sequence: u8,
    direction: Direction,
    height: i32,
    element: &TrackElement,
    support_type: SupportType,
) {
    let sprites = if element.has_chain() { &FLAT_CHAIN_SPRITES } else { &FLAT_SPRITES };
    paint_flat_sprites(session, sprites, direction, height, support_type);
}

fn track_flat_covered(
    session: &mut PaintSession,
    _ride: &Ride,
    _sequence: u8,
    direction: Direction,
    height: i32,
    _element: &TrackElement,
    support_type: SupportType,
) {
    paint_flat_sprites(session, &FLAT_COVERED_SPRITES, direction, height, support_type);
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
    let (track_sprite, base_sprite) = if direction & 1 == 0 {
        (SPR_DINGHY_SLIDE_STATION_SW_NE, SPR_STATION_BASE_B_SW_NE)
    } else {
        (SPR_DINGHY_SLIDE_STATION_NW_SE, SPR_STATION_BASE_B_NW_SE)
    };
    let track = session.track_colour(ColourScheme::Track).with_index(track_sprite);
    session.add_image_as_parent_rotated(direction, track, xyz(0, 0, height), xyz(32, 20, 1), xyz(0, 6, height + 3));
    let base = session.track_colour(ColourScheme::Misc).with_index(base_sprite);
    add_image_at_rotated(session, direction, base, xyz(0, 0, height), xyz(32, 32, 1));

    let colour = supports_colour(session);
    metal_a_supports_paint_setup(session, support_type, 5 + (direction & 1), 0, height, colour);
    metal_a_supports_paint_setup(session, support_type, 8 - (direction & 1), 0, height, colour);

    draw_station(session, ride, direction, height, element);

    session.push_tunnel_rotated(direction, height, TunnelGroup::Square, TunnelSubType::Flat);
    block_segments(session, Segment::ALL);
    set_track_clearance(session, height + 32);
}

/// One straight sloped shape. Sprites are indexed by direction, fronts follow four later.
struct SlopeShape {
    open: ImageIndex,
    chain: Option<ImageIndex>,
    covered: ImageIndex,
    front_height: i32,
    special: i32,
    /// Tunnel for directions 0 and 3, where the camera sees the low end.
    low_tunnel: (i32, TunnelSubType),
    high_tunnel: (i32, TunnelSubType),
    clearance: i32,
}

const UP_25: SlopeShape = SlopeShape {
    open: SPR_DINGHY_SLIDE_25_DEG,
    chain: Some(SPR_DINGHY_SLIDE_25_DEG_CHAIN),
    covered: SPR_DINGHY_SLIDE_25_DEG_COVERED,
    front_height: 50,
    special: 8,
    low_tunnel: (-8, TunnelSubType::SlopeStart),
    high_tunnel: (8, TunnelSubType::SlopeEnd),
    clearance: 56,
};

const UP_60: SlopeShape = SlopeShape {
    open: SPR_DINGHY_SLIDE_60_DEG,
    chain: None,
    covered: SPR_DINGHY_SLIDE_60_DEG_COVERED,
    front_height: 98,
    special: 32,
    low_tunnel: (-8, TunnelSubType::SlopeStart),
    high_tunnel: (56, TunnelSubType::SlopeEnd),
    clearance: 104,
};

const FLAT_TO_UP_25: SlopeShape = SlopeShape {
    open: SPR_DINGHY_SLIDE_FLAT_TO_25_DEG,
    chain: Some(SPR_DINGHY_SLIDE_FLAT_TO_25_DEG_CHAIN),
    covered: SPR_DINGHY_SLIDE_FLAT_TO_25_DEG_COVERED,
    front_height: 42,
    special: 3,
    low_tunnel: (0, TunnelSubType::Flat),
    high_tunnel: (0, TunnelSubType::SlopeEnd),
    clearance: 48,
};

const UP_25_TO_UP_60: SlopeShape = SlopeShape {
    open: SPR_DINGHY_SLIDE_25_DEG_TO_60_DEG,
    chain: None,
    covered: SPR_DINGHY_SLIDE_25_DEG_TO_60_DEG_COVERED,
    front_height: 66,
    special: 12,
    low_tunnel: (-8, TunnelSubType::SlopeStart),
    high_tunnel: (24, TunnelSubType::SlopeEnd),
    clearance: 72,
};

const UP_60_TO_UP_25: SlopeShape = SlopeShape {
    open: SPR_DINGHY_SLIDE_60_DEG_TO_25_DEG,
    chain: None,
    covered: SPR_DINGHY_SLIDE_60_DEG_TO_25_DEG_COVERED,
    front_height: 66,
    special: 20,
    low_tunnel: (-8, TunnelSubType::SlopeStart),
    high_tunnel: (24, TunnelSubType::SlopeEnd),
    clearance: 72,
};

const UP_25_TO_FLAT: SlopeShape = SlopeShape {
    open: SPR_DINGHY_SLIDE_25_DEG_TO_FLAT,
    chain: Some(SPR_DINGHY_SLIDE_25_DEG_TO_FLAT_CHAIN),
    covered: SPR_DINGHY_SLIDE_25_DEG_TO_FLAT_COVERED,
    front_height: 34,
    special: 6,
    low_tunnel: (-8, TunnelSubType::Flat),
    high_tunnel: (8, TunnelSubType::FlatTo25Deg),
    clearance: 40,
};

fn paint_slope(
    session: &mut PaintSession,
    shape: &SlopeShape,
    direction: Direction,
    height: i32,
    element: &TrackElement,
    support_type: SupportType,
    covered: bool,
) {
    let first = match (covered, shape.chain) {
        (true, _) => shape.covered,
        (false, Some(chain)) if element.has_chain() => chain,
        (false, _) => shape.open,
    };
    let d = (direction & 3) as u32;
    let track = session.track_colour(ColourScheme::Track);
    session.add_image_as_parent_rotated(
        direction,
        track.with_index(first + d),
        xyz(0, 0, height),
        xyz(32, 20, 2),
        xyz(0, 6, height),
    );
    session.add_image_as_parent_rotated(
        direction,
        track.with_index(first + 4 + d),
        xyz(0, 0, height),
        xyz(32, 1, shape.front_height),
        xyz(0, 27, height),
    );

    if should_paint_supports(session.map_position) {
        let colour = supports_colour(session);
        metal_a_supports_paint_setup(session, support_type, 4, shape.special, height, colour);
    }

    let (dz, sub_type) = if direction == 0 || direction == 3 { shape.low_tunnel } else { shape.high_tunnel };
    session.push_tunnel_rotated(direction, height + dz, TUNNEL_GROUP, sub_type);

    block_segments_rotated(session, STRAIGHT_SEGMENTS, direction);
    set_track_clearance(session, height + shape.clearance);
}

macro_rules! slope_paint_fns {
    ($($name:ident => $shape:expr, flip: $flip:expr, covered: $covered:expr;)+) => {
        $(
            fn $name(
                session: &mut PaintSession,
                _ride: &Ride,
                _sequence: u8,
                direction: Direction,
                height: i32,
                element: &TrackElement,
                support_type: SupportType,
            ) {
                paint_slope(session, &$shape, (direction + $flip) & 3, height, element, support_type, $covered);
            }
        )+
    };
}

// Down pieces are the up piece seen from the other end.
slope_paint_fns! {
    track_25_deg_up => UP_25, flip: 0, covered: false;
    track_60_deg_up => UP_60, flip: 0, covered: false;
    track_flat_to_25_deg_up => FLAT_TO_UP_25, flip: 0, covered: false;
    track_25_deg_up_to_60_deg_up => UP_25_TO_UP_60, flip: 0, covered: false;
    track_60_deg_up_to_25_deg_up => UP_60_TO_UP_25, flip: 0, covered: false;
    track_25_deg_up_to_flat => UP_25_TO_FLAT, flip: 0, covered: false;
    track_25_deg_down => UP_25, flip: 2, covered: false;
    track_60_deg_down => UP_60, flip: 2, covered: false;
    track_flat_to_25_deg_down => UP_25_TO_FLAT, flip: 2, covered: false;
    track_25_deg_down_to_60_deg_down => UP_60_TO_UP_25, flip: 2, covered: false;
    track_60_deg_down_to_25_deg_down => UP_25_TO_UP_60, flip: 2, covered: false;
    track_25_deg_down_to_flat => FLAT_TO_UP_25, flip: 2, covered: false;
    track_25_deg_up_covered => UP_25, flip: 0, covered: true;
    track_60_deg_up_covered => UP_60, flip: 0, covered: true;
    track_flat_to_25_deg_up_covered => FLAT_TO_UP_25, flip: 0, covered: true;
    track_25_deg_up_to_60_deg_up_covered => UP_25_TO_UP_60, flip: 0, covered: true;
    track_60_deg_up_to_25_deg_up_covered => UP_60_TO_UP_25, flip: 0, covered: true;
    track_25_deg_up_to_flat_covered => UP_25_TO_FLAT, flip: 0, covered: true;
    track_25_deg_down_covered => UP_25, flip: 2, covered: true;
    track_60_deg_down_covered => UP_60, flip: 2, covered: true;
    track_flat_to_25_deg_down_covered => UP_25_TO_FLAT, flip: 2, covered: true;
    track_25_deg_down_to_60_deg_down_covered => UP_60_TO_UP_25, flip: 2, covered: true;
    track_60_deg_down_to_25_deg_down_covered => UP_25_TO_UP_60, flip: 2, covered: true;
    track_25_deg_down_to_flat_covered => FLAT_TO_UP_25, flip: 2, covered: true;
}

#[rustfmt::skip]
const QUARTER_TURN_5_OFFSETS: [[(i32, i32); 5]; 4] = [
    [(0, 2), (0, 16), (0, 0), (16, 0), (2, 0)],
    [(2, 0), (16, 0), (0, 16), (0, 0), (0, 2)],
    [(0, 2), (0, 0), (16, 16), (0, 0), (2, 0)],
    [(2, 0), (0, 0), (16, 0), (0, 16), (0, 2)],
];

#[rustfmt::skip]
const QUARTER_TURN_5_BB_OFFSETS: [[(i32, i32); 5]; 4] = [
    [(0, 6), (0, 16), (0, 0), (16, 0), (6, 0)],
    [(6, 0), (16, 0), (0, 16), (0, 0), (0, 6)],
    [(0, 6), (0, 0), (16, 16), (0, 0), (6, 0)],
    [(6, 0), (0, 0), (16, 0), (0, 16), (0, 6)],
];

#[rustfmt::skip]
const QUARTER_TURN_5_BB_SIZES: [[(i32, i32); 5]; 4] = [
    [(32, 20), (32, 16), (16, 16), (16, 32), (20, 32)],
    [(20, 32), (16, 34), (16, 16), (32, 16), (32, 20)],
    [(32, 20), (32, 16), (16, 16), (16, 32), (20, 32)],
    [(20, 32), (16, 32), (16, 16), (32, 16), (32, 20)],
];

/// Base or front layer of a quarter turn of five. Fronts sit 27 units up with a flat box.
const fn quarter_turn_5_layer(first: ImageIndex, offsets: bool, front: bool) -> [[SpriteBb; 5]; 4] {
    let mut table = [[SpriteBb::new(0, CoordsXYZ::ZERO, CoordsXYZ::ZERO, CoordsXYZ::ZERO); 5]; 4];
    let mut d = 0;
    while d < 4 {
        let mut p = 0;
        while p < 5 {
            let (ox, oy) = QUARTER_TURN_5_OFFSETS[d][p];
            let (bx, by) = QUARTER_TURN_5_BB_OFFSETS[d][p];
            let (sx, sy) = QUARTER_TURN_5_BB_SIZES[d][p];
            let offset = if offsets { xyz(ox, oy, 0) } else { CoordsXYZ::ZERO };
            let (bz, sz) = if front { (27, 0) } else { (0, 2) };
            table[d][p] = SpriteBb::new(first + (d * 5 + p) as u32, offset, xyz(bx, by, bz), xyz(sx, sy, sz));
            p += 1;
        }
        d += 1;
    }
    if front {
        table[0][0].bb_size = xyz(32, 30, 0);
    }
    table
}

const QUARTER_TURN_5: [[SpriteBb; 5]; 4] = quarter_turn_5_layer(SPR_DINGHY_SLIDE_QUARTER_TURN_5, true, false);
const QUARTER_TURN_5_FRONT: [[SpriteBb; 5]; 4] =
    quarter_turn_5_layer(SPR_DINGHY_SLIDE_QUARTER_TURN_5_FRONT, true, true);
const QUARTER_TURN_5_COVERED: [[SpriteBb; 5]; 4] =
    quarter_turn_5_layer(SPR_DINGHY_SLIDE_QUARTER_TURN_5_COVERED, false, false);
const QUARTER_TURN_5_COVERED_FRONT: [[SpriteBb; 5]; 4] =
    quarter_turn_5_layer(SPR_DINGHY_SLIDE_QUARTER_TURN_5_COVERED_FRONT, false, true);

fn paint_right_quarter_turn_5(
    session: &mut PaintSession,
    layers: [&[[SpriteBb; 5]; 4]; 2],
    sequence: u8,
    direction: Direction,
    height: i32,
    support_type: SupportType,
) {
    let track = session.track_colour(ColourScheme::Track);
    for layer in layers {
        right_quarter_turn_5_tiles_paint_2(session, height, direction, sequence, track, layer);
    }

    if sequence == 0 || sequence == 6 {
        let colour = supports_colour(session);
        metal_a_supports_paint_setup(session, support_type, 4, 0, height, colour);
    }

    right_quarter_turn_5_tiles_tunnel(session, height, direction, sequence, TUNNEL_GROUP, TunnelSubType::Flat);

    let segments = match sequence {
        0 => Segment::D0 | Segment::C4 | Segment::CC | Segment::BC,
        2 => Segment::D0 | Segment::C4 | Segment::D4 | Segment::BC | Segment::C0 | Segment::CC,
        3 => Segment::B4 | Segment::C8 | Segment::CC | Segment::C4,
        5 => Segment::D4 | Segment::C4 | Segment::D0 | Segment::B8 | Segment::C0 | Segment::C8,
        6 => Segment::D4 | Segment::C4 | Segment::C8 | Segment::B8,
        _ => Segment::empty(),
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
    paint_right_quarter_turn_5(session, [&QUARTER_TURN_5, &QUARTER_TURN_5_FRONT], sequence, direction, height, support_type);
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

fn track_right_quarter_turn_5_covered(
    session: &mut PaintSession,
    _ride: &Ride,
    sequence: u8,
    direction: Direction,
    height: i32,
    _element: &TrackElement,
    support_type: SupportType,
) {
    paint_right_quarter_turn_5(
        session,
        [&QUARTER_TURN_5_COVERED, &QUARTER_TURN_5_COVERED_FRONT],
        sequence,
        direction,
        height,
        support_type,
    );
}

fn track_left_quarter_turn_5_covered(
    session: &mut PaintSession,
    ride: &Ride,
    sequence: u8,
    direction: Direction,
    height: i32,
    element: &TrackElement,
    support_type: SupportType,
) {
    let sequence = MAP_LEFT_QUARTER_TURN_5_TILES_TO_RIGHT[sequence as usize];
    track_right_quarter_turn_5_covered(session, ride, sequence, left_turn_direction(direction), height, element, support_type);
}

/// Base or front layer of a quarter turn of three; the boxes are the shared defaults.
const fn quarter_turn_3_layer(first: ImageIndex, front: bool) -> [[SpriteBb; 3]; 4] {
    let mut table = [[SpriteBb::new(0, CoordsXYZ::ZERO, CoordsXYZ::ZERO, CoordsXYZ::ZERO); 3]; 4];
    let mut d = 0;
    while d < 4 {
        let mut p = 0;
        while p < 3 {
            let b = DEFAULT_RIGHT_QUARTER_TURN_3_TILES_OFFSETS[d][p];
            let s = DEFAULT_RIGHT_QUARTER_TURN_3_TILES_BOUND_LENGTHS[d][p];
            let (bz, sz) = if front { (27, 0) } else { (0, 2) };
            table[d][p] = SpriteBb::new(first + (d * 3 + p) as u32, CoordsXYZ::ZERO, xyz(b.x, b.y, bz), xyz(s.x, s.y, sz));
            p += 1;
        }
        d += 1;
    }
    table
}

const QUARTER_TURN_3: [[SpriteBb; 3]; 4] = quarter_turn_3_layer(SPR_DINGHY_SLIDE_QUARTER_TURN_3, false);
const QUARTER_TURN_3_FRONT: [[SpriteBb; 3]; 4] = quarter_turn_3_layer(SPR_DINGHY_SLIDE_QUARTER_TURN_3_FRONT, true);
const QUARTER_TURN_3_COVERED: [[SpriteBb; 3]; 4] = quarter_turn_3_layer(SPR_DINGHY_SLIDE_QUARTER_TURN_3_COVERED, false);
const QUARTER_TURN_3_COVERED_FRONT: [[SpriteBb; 3]; 4] =
    quarter_turn_3_layer(SPR_DINGHY_SLIDE_QUARTER_TURN_3_COVERED_FRONT, true);

fn paint_right_quarter_turn_3(
    session: &mut PaintSession,
    layers: [&[[SpriteBb; 3]; 4]; 2],
    sequence: u8,
    direction: Direction,
    height: i32,
    support_type: SupportType,
) {
    let track = session.track_colour(ColourScheme::Track);
    for layer in layers {
        right_quarter_turn_3_tiles_paint_3(session, height, direction, sequence, track, layer);
    }
    right_quarter_turn_3_tiles_tunnel(session, height, direction, sequence, TUNNEL_GROUP, TunnelSubType::Flat);

    if sequence == 0 || sequence == 3 {
        let colour = supports_colour(session);
        metal_a_supports_paint_setup(session, support_type, 4, 0, height, colour);
    }

    let segments = match sequence {
        0 => Segment::D0 | Segment::C4 | Segment::CC | Segment::BC,
        2 => Segment::D0 | Segment::C4 | Segment::D4 | Segment::C0,
        3 => Segment::D4 | Segment::C4 | Segment::C8 | Segment::B8,
        _ => Segment::empty(),
    };
    block_segments_rotated(session, segments, direction);
    set_track_clearance(session, height + 32);
}

fn track_right_quarter_turn_3(
    session: &mut PaintSession,
    _ride: &Ride,
    sequence: u8,
    direction: Direction,
    height: i32,
    _element: &TrackElement,
    support_type: SupportType,
) {
    paint_right_quarter_turn_3(session, [&QUARTER_TURN_3, &QUARTER_TURN_3_FRONT], sequence, direction, height, support_type);
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

fn track_right_quarter_turn_3_covered(
    session: &mut PaintSession,
    _ride: &Ride,
    sequence: u8,
    direction: Direction,
    height: i32,
    _element: &TrackElement,
    support_type: SupportType,
) {
    paint_right_quarter_turn_3(
        session,
        [&QUARTER_TURN_3_COVERED, &QUARTER_TURN_3_COVERED_FRONT],
        sequence,
        direction,
        height,
        support_type,
    );
}

fn track_left_quarter_turn_3_covered(
    session: &mut PaintSession,
    ride: &Ride,
    sequence: u8,
    direction: Direction,
    height: i32,
    element: &TrackElement,
    support_type: SupportType,
) {
    let sequence = MAP_LEFT_QUARTER_TURN_3_TILES_TO_RIGHT[sequence as usize];
    track_right_quarter_turn_3_covered(session, ride, sequence, left_turn_direction(direction), height, element, support_type);
}

/// (base, front) per direction and sequence.
#[rustfmt::skip]
const S_BEND_LEFT_SPRITES: [[(ImageIndex, ImageIndex); 4]; 4] = [
    [(19988, 20004), (19989, 20005), (19990, 20006), (19991, 20007)],
    [(19992, 20008), (19993, 20009), (19994, 20010), (19995, 20011)],
    [(19991, 20007), (19990, 20006), (19989, 20005), (19988, 20004)],
    [(19995, 20011), (19994, 20010), (19993, 20009), (19992, 20008)],
];

#[rustfmt::skip]
const S_BEND_RIGHT_SPRITES: [[(ImageIndex, ImageIndex); 4]; 4] = [
    [(19996, 20012), (19997, 20013), (19998, 20014), (19999, 20015)],
    [(20000, 20016), (20001, 20017), (20002, 20018), (20003, 20019)],
    [(19999, 20015), (19998, 20014), (19997, 20013), (19996, 20012)],
    [(20003, 20019), (20002, 20018), (20001, 20017), (20000, 20016)],
];

#[derive(Clone, Copy, PartialEq, Eq)]
enum Bend {
    Left,
    Right,
}

fn paint_s_bend(
    session: &mut PaintSession,
    bend: Bend,
    sprite_offset: ImageIndex,
    sequence: u8,
    direction: Direction,
    height: i32,
    support_type: SupportType,
) {
    let table = match bend {
        Bend::Left => &S_BEND_LEFT_SPRITES,
        Bend::Right => &S_BEND_RIGHT_SPRITES,
    };
    let seq = (sequence & 3) as usize;
    let (base, front) = table[(direction & 3) as usize][seq];
    let track = session.track_colour(ColourScheme::Track);
    let colour = supports_colour(session);
    let near_half = direction == 0 || direction == 1;

    let (width, bb_y) = match (bend, seq) {
        (_, 0) | (_, 3) => (27, 2),
        (Bend::Left, 1) | (Bend::Right, 2) => (26, if near_half { 0 } else { 6 }),
        _ => (26, if near_half { 6 } else { 0 }),
    };
    session.add_image_as_parent_rotated(
        direction,
        track.with_index(base + sprite_offset),
        xyz(0, 0, height),
        xyz(32, width, 2),
        xyz(0, bb_y, height),
    );
    session.add_image_as_parent_rotated(
        direction,
        track.with_index(front + sprite_offset),
        xyz(0, 0, height),
        xyz(32, width, 0),
        xyz(0, bb_y, height + 27),
    );

    match seq {
        0 | 3 => {
            metal_a_supports_paint_setup(session, support_type, 4, 0, height, colour);
        }
        1 | 2 if (seq == 1) == near_half => {
            let (segment, special) = match bend {
                Bend::Left => (5 + (direction & 1), (direction & 1) as i32),
                Bend::Right => (8 - (direction & 1), 0),
            };
            metal_a_supports_paint_setup(session, support_type, segment, special, height, colour);
        }
        _ => {}
    }

    let wide_a = Segment::B4 | Segment::B8 | Segment::C4 | Segment::C8 | Segment::CC | Segment::D0;
    let wide_b = Segment::BC | Segment::C0 | Segment::C4 | Segment::CC | Segment::D0 | Segment::D4;
    let segments = match (bend, seq) {
        (Bend::Left, 0) => Segment::B4 | Segment::C4 | Segment::CC | Segment::D0,
        (Bend::Left, 1) | (Bend::Right, 2) => wide_a,
        (Bend::Left, 2) | (Bend::Right, 1) => wide_b,
        (Bend::Left, _) => Segment::C0 | Segment::C4 | Segment::CC | Segment::D0,
        (Bend::Right, 0) => Segment::BC | Segment::C4 | Segment::CC | Segment::D0,
        (Bend::Right, _) => Segment::B8 | Segment::C4 | Segment::CC | Segment::D0,
    };
    block_segments_rotated(session, segments, direction);

    let open_end = match seq {
        0 => direction == 0 || direction == 3,
        3 => direction == 1 || direction == 2,
        _ => false,
    };
    if open_end {
        session.push_tunnel_rotated(direction, height, TUNNEL_GROUP, TunnelSubType::Flat);
    }
    set_track_clearance(session, height + 32);
}

macro_rules! s_bend_paint_fns {
    ($($name:ident => $bend:expr, $offset:expr;)+) => {
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
                paint_s_bend(session, $bend, $offset, sequence, direction, height, support_type);
            }
        )+
    };
}

s_bend_paint_fns! {
    track_s_bend_left => Bend::Left, 0;
    track_s_bend_right => Bend::Right, 0;
    track_s_bend_left_covered => Bend::Left, S_BEND_COVERED_OFFSET;
    track_s_bend_right_covered => Bend::Right, S_BEND_COVERED_OFFSET;
}

pub fn get_track_paint_function_dinghy_slide(track_type: TrackElemType) -> Option<PaintFunction> {
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
        LeftQuarterTurn3Tiles => track_left_quarter_turn_3,
        RightQuarterTurn3Tiles => track_right_quarter_turn_3,
        FlatCovered => track_flat_covered,
        Up25Covered => track_25_deg_up_covered,
        Up60Covered => track_60_deg_up_covered,
        FlatToUp25Covered => track_flat_to_25_deg_up_covered,
        Up25ToUp60Covered => track_25_deg_up_to_60_deg_up_covered,
        Up60ToUp25Covered => track_60_deg_up_to_25_deg_up_covered,
        Up25ToFlatCovered => track_25_deg_up_to_flat_covered,
        Down25Covered => track_25_deg_down_covered,
        Down60Covered => track_60_deg_down_covered,
        FlatToDown25Covered => track_flat_to_25_deg_down_covered,
        Down25ToDown60Covered => track_25_deg_down_to_60_deg_down_covered,
        Down60ToDown25Covered => track_60_deg_down_to_25_deg_down_covered,
        Down25ToFlatCovered => track_25_deg_down_to_flat_covered,
        LeftQuarterTurn5TilesCovered => track_left_quarter_turn_5_covered,
        RightQuarterTurn5TilesCovered => track_right_quarter_turn_5_covered,
        SBendLeftCovered => track_s_bend_left_covered,
        SBendRightCovered => track_s_bend_right_covered,
        LeftQuarterTurn3TilesCovered => track_left_quarter_turn_3_covered,
        RightQuarterTurn3TilesCovered => track_right_quarter_turn_3_covered,
        _ => return None,
    };
    Some(f)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn front_typo_only_on_first_part() {
        assert_eq!(QUARTER_TURN_5_FRONT[0][0].bb_size, xyz(32, 30, 0));
        assert_eq!(QUARTER_TURN_5_COVERED_FRONT[0][0].bb_size, xyz(32, 30, 0));
        assert_eq!(QUARTER_TURN_5_FRONT[2][0].bb_size, xyz(32, 20, 0));
        assert_eq!(QUARTER_TURN_5[0][0].bb_size, xyz(32, 20, 2));
    }

    #[test]
    fn turn_tables_match_sprite_layout() {
        assert_eq!(QUARTER_TURN_5[1][0].sprite, 19913);
        assert_eq!(QUARTER_TURN_5_COVERED_FRONT[3][4].sprite, 19987);
        assert_eq!(QUARTER_TURN_5_COVERED[1][1].offset, CoordsXYZ::ZERO);
        assert_eq!(QUARTER_TURN_3_FRONT[2][1].sprite, 19879);
        assert_eq!(QUARTER_TURN_3_FRONT[2][1].bb_offset, xyz(0, 0, 27));
    }
}
