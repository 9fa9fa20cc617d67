//! Air powered vertical coaster: launched flat track, banked turns, and the vertical tower.
//!
//! The tower pieces draw the steel lattice as the parent sprite with the rail layered
//! on top, except where the rail runs in front of the lattice for the camera.

use trackpaint_geom::{BoundBoxXYZ, CoordsXYZ, Direction, xyz};
use trackpaint_session::{
    ColourScheme, ColourTemplate, ImageId, ImageIndex, PaintSession, Segment, TunnelGroup, TunnelSubType,
};
use trackpaint_supports::{SupportType, wooden_a_supports_paint_setup};
use trackpaint_track::sprites::{SPR_FLOOR_PLANKS, SPR_FLOOR_PLANKS_90_DEG, SPR_STATION_BASE_B_NW_SE, SPR_STATION_BASE_B_SW_NE};
use trackpaint_track::turns::{
    MAP_LEFT_QUARTER_TURN_5_TILES_TO_RIGHT, left_turn_direction, right_quarter_turn_5_tiles_paint_2,
    right_quarter_turn_5_tiles_paint_3, right_quarter_turn_5_tiles_tunnel, right_quarter_turn_5_tiles_wooden_supports,
};
use trackpaint_track::{
    PaintFunction, Ride, SpriteBb, TrackElemType, TrackElement, block_segments, block_segments_rotated,
    draw_narrow_station_platform, onride_photo_paint, set_track_clearance,
};

const SPR_REVERSE_FREEFALL_RC_FLAT_SW_NE: ImageIndex = 22164;
const SPR_REVERSE_FREEFALL_RC_FLAT_NW_SE: ImageIndex = 22165;
const SPR_AIR_POWERED_VERTICAL_RC_FLAT_SW_NE: ImageIndex = 22226;
const SPR_AIR_POWERED_VERTICAL_RC_FLAT_NW_SE: ImageIndex = 22227;
const SPR_AIR_POWERED_VERTICAL_RC_STATION_SW_NE: ImageIndex = 22228;
const SPR_AIR_POWERED_VERTICAL_RC_STATION_NW_SE: ImageIndex = 22229;
const SPR_AIR_POWERED_VERTICAL_RC_BRAKES_NW_SE: ImageIndex = 22230;
const SPR_AIR_POWERED_VERTICAL_RC_BRAKES_SW_NE: ImageIndex = 22231;
const SPR_AIR_POWERED_VERTICAL_RC_VERTICAL_UP_SEQ_1: ImageIndex = 22232;
const SPR_AIR_POWERED_VERTICAL_RC_VERTICAL_UP_SEQ_0: ImageIndex = 22236;
const SPR_AIR_POWERED_VERTICAL_RC_SLOPE: ImageIndex = 22240;
const SPR_AIR_POWERED_VERTICAL_RC_SLOPE_SUPPORTS: ImageIndex = 22264;
const SPR_AIR_POWERED_VERTICAL_RC_QUARTER_TURN_5: ImageIndex = 22292;
const SPR_AIR_POWERED_VERTICAL_RC_BANKED_QUARTER_TURN_5: ImageIndex = 22312;
const SPR_AIR_POWERED_VERTICAL_RC_BANKED_QUARTER_TURN_5_FRONT_NW_SW_PART_4: ImageIndex = 22332;
const SPR_AIR_POWERED_VERTICAL_RC_BANKED_QUARTER_TURN_5_FRONT_SE_NE_PART_0: ImageIndex = 22333;
const SPR_AIR_POWERED_VERTICAL_RC_FLAT_TO_LEFT_BANK: ImageIndex = 22334;
const SPR_AIR_POWERED_VERTICAL_RC_FLAT_TO_RIGHT_BANK: ImageIndex = 22338;
const SPR_AIR_POWERED_VERTICAL_RC_FLAT_TO_LEFT_BANK_FRONT: ImageIndex = 22342;
const SPR_AIR_POWERED_VERTICAL_RC_LEFT_BANK: ImageIndex = 22346;

const FLAT_SPRITES: [ImageIndex; 4] = [
    SPR_AIR_POWERED_VERTICAL_RC_FLAT_SW_NE,
    SPR_AIR_POWERED_VERTICAL_RC_FLAT_NW_SE,
    SPR_AIR_POWERED_VERTICAL_RC_FLAT_SW_NE,
    SPR_AIR_POWERED_VERTICAL_RC_FLAT_NW_SE,
];

// The brake sprites are stored across-axis first.
const BRAKE_SPRITES: [ImageIndex; 4] = [
    SPR_AIR_POWERED_VERTICAL_RC_BRAKES_NW_SE,
    SPR_AIR_POWERED_VERTICAL_RC_BRAKES_SW_NE,
    SPR_AIR_POWERED_VERTICAL_RC_BRAKES_NW_SE,
    SPR_AIR_POWERED_VERTICAL_RC_BRAKES_SW_NE,
];

/// Lattice sprites follow the supports scheme.
fn support_colour(session: &PaintSession) -> ImageId {
    session.track_colour(ColourScheme::Supports)
}

fn wooden(session: &mut PaintSession, support_type: SupportType, sub_type: u8, height: i32) -> bool {
    let colour = support_colour(session);
    wooden_a_supports_paint_setup(session, support_type, sub_type, 0, height, colour)
}

fn square_tunnel(session: &mut PaintSession, direction: Direction, height: i32) {
    session.push_tunnel_rotated(direction, height, TunnelGroup::Square, TunnelSubType::Flat);
}

/// Closing calls shared by every single-tile piece at track level.
fn finish_flat_piece(session: &mut PaintSession, support_type: SupportType, direction: Direction, height: i32) {
    wooden(session, support_type, direction & 1, height);
    square_tunnel(session, direction, height);
    block_segments(session, Segment::ALL);
    set_track_clearance(session, height + 32);
}

fn paint_rail(session: &mut PaintSession, direction: Direction, image: ImageIndex, height: i32) {
    let track = session.track_colour(ColourScheme::Track);
    paint_rail_image(session, direction, track.with_index(image), height);
}

fn paint_rail_image(session: &mut PaintSession, direction: Direction, image: ImageId, height: i32) {
    session.add_image_as_parent_rotated(
        direction,
        image,
        xyz(0, 0, height),
        xyz(32, 20, 1),
        xyz(0, 6, height),
    );
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
    paint_rail(session, direction, FLAT_SPRITES[(direction & 3) as usize], height);
    finish_flat_piece(session, support_type, direction, height);
}

fn track_brakes(
    session: &mut PaintSession,
    _ride: &Ride,
    _sequence: u8,
    direction: Direction,
    height: i32,
    _element: &TrackElement,
    support_type: SupportType,
) {
    paint_rail(session, direction, BRAKE_SPRITES[(direction & 3) as usize], height);
    finish_flat_piece(session, support_type, direction, height);
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
    let (rail, base) = if direction & 1 == 0 {
        (SPR_AIR_POWERED_VERTICAL_RC_STATION_SW_NE, SPR_STATION_BASE_B_SW_NE)
    } else {
        (SPR_AIR_POWERED_VERTICAL_RC_STATION_NW_SE, SPR_STATION_BASE_B_NW_SE)
    };
    let misc = session.track_colour(ColourScheme::Misc);
    session.add_image_as_parent_rotated(
        direction,
        misc.with_index(base),
        xyz(0, 0, height - 2),
        xyz(32, 28, 1),
        xyz(0, 2, height),
    );
    let track = session.track_colour(ColourScheme::Track);
    session.add_image_as_child_rotated(direction, track.with_index(rail), xyz(0, 0, height), xyz(32, 20, 1), xyz(0, 6, height));

    wooden(session, support_type, direction & 1, height);
    draw_narrow_station_platform(session, ride, direction, height, 5, element);
    square_tunnel(session, direction, height);
    block_segments(session, Segment::ALL);
    set_track_clearance(session, height + 32);
}

fn track_booster(
    session: &mut PaintSession,
    _ride: &Ride,
    _sequence: u8,
    direction: Direction,
    height: i32,
    element: &TrackElement,
    support_type: SupportType,
) {
    // Borrowed from the reverse freefall coaster's flat track, which has two track colours.
    let image = if direction & 1 == 0 { SPR_REVERSE_FREEFALL_RC_FLAT_SW_NE } else { SPR_REVERSE_FREEFALL_RC_FLAT_NW_SE };
    let mut track = session.track_colour(ColourScheme::Track);
    if !element.is_ghost() && !element.is_highlighted() && track.template == ColourTemplate::Scheme(ColourScheme::Track) {
        track = ImageId::template(ColourTemplate::TrackSingleRemap);
    }
    paint_rail_image(session, direction & 1, track.with_index(image), height);
    square_tunnel(session, direction & 1, height);
    wooden(session, support_type, direction & 1, height);
    block_segments(session, Segment::ALL);
    set_track_clearance(session, height + 32);
}

fn track_onride_photo(
    session: &mut PaintSession,
    _ride: &Ride,
    _sequence: u8,
    direction: Direction,
    height: i32,
    element: &TrackElement,
    support_type: SupportType,
) {
    paint_rail(session, direction, FLAT_SPRITES[(direction & 3) as usize], height);
    wooden(session, support_type, direction & 1, height);
    onride_photo_paint(session, direction, height + 3, element);
    square_tunnel(session, direction, height);
    block_segments(session, Segment::ALL);
    set_track_clearance(session, height + 32);
}

/// Flat-to-bank transitions: the banked rail plus, on the two facings where the raised
/// edge is nearest the camera, a tall front sprite.
fn paint_bank_transition(
    session: &mut PaintSession,
    first: ImageIndex,
    front_directions: [Direction; 2],
    direction: Direction,
    height: i32,
    support_type: SupportType,
) {
    let d = direction & 3;
    let track = session.track_colour(ColourScheme::Track);
    session.add_image_as_parent_rotated(
        d,
        track.with_index(first + d as ImageIndex),
        xyz(0, 0, height),
        xyz(32, 20, 3),
        xyz(0, 6, height),
    );
    if front_directions.contains(&d) {
        session.add_image_as_parent_rotated(
            d,
            track.with_index(SPR_AIR_POWERED_VERTICAL_RC_FLAT_TO_LEFT_BANK_FRONT + d as ImageIndex),
            xyz(0, 0, height),
            xyz(32, 1, 26),
            xyz(0, 27, height),
        );
    }
    finish_flat_piece(session, support_type, d, height);
}

fn track_flat_to_left_bank(
    session: &mut PaintSession,
    _ride: &Ride,
    _sequence: u8,
    direction: Direction,
    height: i32,
    _element: &TrackElement,
    support_type: SupportType,
) {
    paint_bank_transition(session, SPR_AIR_POWERED_VERTICAL_RC_FLAT_TO_LEFT_BANK, [0, 1], direction, height, support_type);
}

fn track_flat_to_right_bank(
    session: &mut PaintSession,
    _ride: &Ride,
    _sequence: u8,
    direction: Direction,
    height: i32,
    _element: &TrackElement,
    support_type: SupportType,
) {
    paint_bank_transition(session, SPR_AIR_POWERED_VERTICAL_RC_FLAT_TO_RIGHT_BANK, [2, 3], direction, height, support_type);
}

fn track_left_bank_to_flat(
    session: &mut PaintSession,
    ride: &Ride,
    sequence: u8,
    direction: Direction,
    height: i32,
    element: &TrackElement,
    support_type: SupportType,
) {
    track_flat_to_right_bank(session, ride, sequence, (direction + 2) & 3, height, element, support_type);
}

fn track_right_bank_to_flat(
    session: &mut PaintSession,
    ride: &Ride,
    sequence: u8,
    direction: Direction,
    height: i32,
    element: &TrackElement,
    support_type: SupportType,
) {
    track_flat_to_left_bank(session, ride, sequence, (direction + 2) & 3, height, element, support_type);
}

fn track_left_bank(
    session: &mut PaintSession,
    _ride: &Ride,
    _sequence: u8,
    direction: Direction,
    height: i32,
    _element: &TrackElement,
    support_type: SupportType,
) {
    let d = direction & 3;
    let image = session.track_colour(ColourScheme::Track).with_index(SPR_AIR_POWERED_VERTICAL_RC_LEFT_BANK + d as ImageIndex);
    if d == 0 || d == 1 {
        session.add_image_as_parent_rotated(d, image, xyz(0, 0, height), xyz(32, 1, 26), xyz(0, 27, height));
    } else {
        session.add_image_as_parent_rotated(d, image, xyz(0, 0, height), xyz(32, 20, 3), xyz(0, 6, height));
    }
    finish_flat_piece(session, support_type, d, height);
}

fn track_right_bank(
    session: &mut PaintSession,
    ride: &Ride,
    sequence: u8,
    direction: Direction,
    height: i32,
    element: &TrackElement,
    support_type: SupportType,
) {
    track_left_bank(session, ride, sequence, (direction + 2) & 3, height, element, support_type);
}

const fn bb(sprite: ImageIndex, offset: CoordsXYZ, bb_offset: CoordsXYZ, bb_size: CoordsXYZ) -> SpriteBb {
    SpriteBb::new(sprite, offset, bb_offset, bb_size)
}

const ZERO: CoordsXYZ = CoordsXYZ::ZERO;
const Q5: ImageIndex = SPR_AIR_POWERED_VERTICAL_RC_QUARTER_TURN_5;
const B5: ImageIndex = SPR_AIR_POWERED_VERTICAL_RC_BANKED_QUARTER_TURN_5;

/// Flat turn: boxes anchored at the sprite offset.
#[rustfmt::skip]
const QUARTER_TURN_5: [[SpriteBb; 5]; 4] = [
    [
        bb(Q5, xyz(0, 2, 0), ZERO, xyz(32, 32, 2)),
        bb(Q5 + 1, xyz(0, 16, 0), ZERO, xyz(32, 16, 2)),
        bb(Q5 + 2, ZERO, ZERO, xyz(16, 16, 2)),
        bb(Q5 + 3, xyz(16, 0, 0), ZERO, xyz(16, 32, 2)),
        bb(Q5 + 4, xyz(2, 0, 0), ZERO, xyz(32, 32, 2)),
    ],
    [
        bb(Q5 + 5, xyz(2, 0, 0), ZERO, xyz(32, 32, 2)),
        bb(Q5 + 6, xyz(16, 0, 0), ZERO, xyz(16, 34, 2)),
        bb(Q5 + 7, xyz(0, 16, 0), ZERO, xyz(16, 16, 2)),
        bb(Q5 + 8, ZERO, ZERO, xyz(32, 16, 2)),
        bb(Q5 + 9, xyz(0, 2, 0), ZERO, xyz(32, 27, 2)),
    ],
    [
        bb(Q5 + 10, xyz(0, 2, 0), ZERO, xyz(32, 27, 2)),
        bb(Q5 + 11, ZERO, ZERO, xyz(32, 16, 2)),
        bb(Q5 + 12, xyz(16, 16, 0), ZERO, xyz(16, 16, 2)),
        bb(Q5 + 13, ZERO, ZERO, xyz(16, 32, 2)),
        bb(Q5 + 14, xyz(2, 0, 0), ZERO, xyz(27, 32, 2)),
    ],
    [
        bb(Q5 + 15, xyz(2, 0, 0), ZERO, xyz(27, 32, 2)),
        bb(Q5 + 16, ZERO, ZERO, xyz(16, 32, 2)),
        bb(Q5 + 17, xyz(16, 0, 0), ZERO, xyz(16, 16, 2)),
        bb(Q5 + 18, xyz(0, 16, 0), ZERO, xyz(32, 16, 2)),
        bb(Q5 + 19, xyz(0, 2, 0), ZERO, xyz(32, 32, 2)),
    ],
];

/// Banked turn: sprites at the origin with explicit box offsets.
#[rustfmt::skip]
const BANKED_QUARTER_TURN_5: [[SpriteBb; 5]; 4] = [
    [
        bb(B5, ZERO, xyz(0, 6, 0), xyz(32, 20, 3)),
        bb(B5 + 1, ZERO, xyz(0, 16, 0), xyz(32, 16, 3)),
        bb(B5 + 2, ZERO, ZERO, xyz(16, 16, 3)),
        bb(B5 + 3, ZERO, xyz(16, 0, 0), xyz(16, 32, 3)),
        bb(B5 + 4, ZERO, xyz(6, 0, 0), xyz(20, 32, 3)),
    ],
    [
        bb(B5 + 5, ZERO, xyz(6, 0, 0), xyz(20, 32, 3)),
        bb(B5 + 6, ZERO, xyz(16, 0, 0), xyz(16, 32, 3)),
        bb(B5 + 7, ZERO, xyz(0, 16, 0), xyz(16, 16, 3)),
        bb(B5 + 8, ZERO, ZERO, xyz(32, 16, 3)),
        bb(B5 + 9, ZERO, xyz(0, 6, 0), xyz(32, 20, 3)),
    ],
    [
        bb(B5 + 10, ZERO, xyz(0, 27, 0), xyz(32, 1, 26)),
        bb(B5 + 11, ZERO, xyz(0, 0, 27), xyz(32, 16, 1)),
        bb(B5 + 12, ZERO, xyz(16, 16, 27), xyz(16, 16, 1)),
        bb(B5 + 13, ZERO, xyz(0, 0, 27), xyz(16, 32, 1)),
        bb(B5 + 14, ZERO, xyz(27, 0, 0), xyz(1, 32, 26)),
    ],
    [
        bb(B5 + 15, ZERO, xyz(6, 0, 0), xyz(20, 32, 3)),
        bb(B5 + 16, ZERO, ZERO, xyz(16, 32, 3)),
        bb(B5 + 17, ZERO, xyz(16, 0, 0), xyz(16, 16, 3)),
        bb(B5 + 18, ZERO, xyz(0, 16, 0), xyz(32, 16, 3)),
        bb(B5 + 19, ZERO, xyz(0, 6, 0), xyz(32, 20, 3)),
    ],
];

fn quarter_turn_5_segments(sequence: u8) -> Segment {
    match sequence {
        1 | 4 => Segment::B4 | Segment::C8 | Segment::CC,
        2 => Segment::D0 | Segment::C4 | Segment::D4 | Segment::BC | Segment::C0 | Segment::CC,
        3 => {
            Segment::B4 | Segment::C8 | Segment::CC | Segment::C4 | Segment::B8 | Segment::BC | Segment::D0 | Segment::D4
        }
        5 => Segment::D4 | Segment::C4 | Segment::D0 | Segment::B8 | Segment::C0 | Segment::C8,
        _ => Segment::ALL,
    }
}

fn finish_quarter_turn_5(
    session: &mut PaintSession,
    support_type: SupportType,
    sequence: u8,
    direction: Direction,
    height: i32,
) {
    right_quarter_turn_5_tiles_wooden_supports(session, support_type, height, direction, sequence);
    right_quarter_turn_5_tiles_tunnel(session, height, direction, sequence, TunnelGroup::Square, TunnelSubType::Flat);
    block_segments_rotated(session, quarter_turn_5_segments(sequence), direction);
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
    right_quarter_turn_5_tiles_paint_3(session, height, direction, sequence, track, &QUARTER_TURN_5);
    finish_quarter_turn_5(session, support_type, sequence, direction, height);
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

fn track_banked_right_quarter_turn_5(
    session: &mut PaintSession,
    _ride: &Ride,
    sequence: u8,
    direction: Direction,
    height: i32,
    _element: &TrackElement,
    support_type: SupportType,
) {
    let track = session.track_colour(ColourScheme::Track);
    right_quarter_turn_5_tiles_paint_2(session, height, direction, sequence, track, &BANKED_QUARTER_TURN_5);

    let front = match (direction, sequence) {
        (1, 6) => Some((SPR_AIR_POWERED_VERTICAL_RC_BANKED_QUARTER_TURN_5_FRONT_NW_SW_PART_4, xyz(32, 1, 26), xyz(0, 27, height))),
        (3, 0) => Some((SPR_AIR_POWERED_VERTICAL_RC_BANKED_QUARTER_TURN_5_FRONT_SE_NE_PART_0, xyz(1, 32, 26), xyz(27, 0, height))),
        _ => None,
    };
    if let Some((image, length, bound_offset)) = front {
        session.add_image_as_parent(track.with_index(image), xyz(0, 0, height), BoundBoxXYZ::new(bound_offset, length));
    }

    finish_quarter_turn_5(session, support_type, sequence, direction, height);
}

fn track_banked_left_quarter_turn_5(
    session: &mut PaintSession,
    ride: &Ride,
    sequence: u8,
    direction: Direction,
    height: i32,
    element: &TrackElement,
    support_type: SupportType,
) {
    let sequence = MAP_LEFT_QUARTER_TURN_5_TILES_TO_RIGHT[sequence as usize];
    track_banked_right_quarter_turn_5(session, ride, sequence, left_turn_direction(direction), height, element, support_type);
}

/// Lattice slot of each slope tile; the rail has no sprite on tile 5.
const SLOPE_RAIL_SLOTS: [Option<ImageIndex>; 7] = [Some(0), Some(1), Some(2), Some(3), Some(4), None, Some(5)];
const SLOPE_SUPPORT_SLOTS: [ImageIndex; 7] = [0, 1, 2, 3, 4, 6, 5];

const SLOPE_BOX_HEIGHTS_FACING: [i32; 5] = [1, 6, 14, 37, 76];
const SLOPE_BOX_HEIGHTS_AWAY: [i32; 5] = [1, 6, 14, 27, 59];
const SLOPE_CLEARANCES: [i32; 7] = [48, 64, 128, 176, 208, 240, 240];

/// Lattice and rail as a parent/child pair sharing one box.
fn paint_pair(
    session: &mut PaintSession,
    direction: Direction,
    parent: ImageId,
    child: ImageId,
    height: i32,
    length: CoordsXYZ,
    bound_offset: CoordsXYZ,
) {
    let offset = xyz(0, 0, height);
    session.add_image_as_parent_rotated(direction, parent, offset, length, bound_offset);
    session.add_image_as_child_rotated(direction, child, offset, length, bound_offset);
}

fn track_vertical_slope_up(
    session: &mut PaintSession,
    _ride: &Ride,
    sequence: u8,
    direction: Direction,
    height: i32,
    _element: &TrackElement,
    support_type: SupportType,
) {
    let d = direction & 3;
    let seq = (sequence as usize).min(6);
    let lattice =
        support_colour(session).with_index(SPR_AIR_POWERED_VERTICAL_RC_SLOPE_SUPPORTS + d as ImageIndex * 7 + SLOPE_SUPPORT_SLOTS[seq]);
    let rail = SLOPE_RAIL_SLOTS[seq].map(|slot| {
        session.track_colour(ColourScheme::Track).with_index(SPR_AIR_POWERED_VERTICAL_RC_SLOPE + d as ImageIndex * 6 + slot)
    });
    let facing = d == 0 || d == 3;
    let base = xyz(0, 6, height);

    match (seq, rail) {
        (0, Some(rail)) => {
            paint_pair(session, d, lattice, rail, height, xyz(20, 32, SLOPE_BOX_HEIGHTS_AWAY[0]), base);
            wooden(session, support_type, 0, height);
            square_tunnel(session, d, height);
        }
        (1..=4, Some(rail)) => {
            let box_height = if facing { SLOPE_BOX_HEIGHTS_FACING[seq] } else { SLOPE_BOX_HEIGHTS_AWAY[seq] };
            let length = xyz(32, 20, box_height);
            // Near the top the rail passes in front of the lattice on the far facings.
            if seq == 4 && !facing {
                paint_pair(session, d, rail, lattice, height, length, base);
            } else {
                paint_pair(session, d, lattice, rail, height, length, base);
            }
            wooden(session, support_type, d & 1, height);
        }
        (6, Some(rail)) => {
            if facing {
                paint_pair(session, d, lattice, rail, height, xyz(5, 20, 79), xyz(0, 6, height + 128));
            } else {
                paint_pair(session, d, rail, lattice, height, xyz(1, 20, 126), xyz(27, 6, height));
            }
            wooden(session, support_type, d & 1, height);
            session.set_vertical_tunnel(height + 240);
        }
        _ => {
            let length = xyz(26, 26, 126);
            let bound_offset = xyz(3, 3, height);
            if wooden(session, support_type, d & 1, height) {
                let planks = if d & 1 == 1 { SPR_FLOOR_PLANKS_90_DEG } else { SPR_FLOOR_PLANKS };
                let floor = support_colour(session).with_index(planks);
                session.add_image_as_parent(floor, xyz(0, 0, height), BoundBoxXYZ::new(bound_offset, length));
                session.add_image_as_child_rotated(d, lattice, xyz(0, 0, height), length, bound_offset);
            } else {
                session.add_image_as_parent_rotated(d, lattice, xyz(0, 0, height), length, bound_offset);
            }
        }
    }

    block_segments(session, Segment::ALL);
    set_track_clearance(session, height + SLOPE_CLEARANCES[seq]);
}

fn track_vertical_slope_down(
    session: &mut PaintSession,
    ride: &Ride,
    sequence: u8,
    direction: Direction,
    height: i32,
    element: &TrackElement,
    support_type: SupportType,
) {
    let sequence = 6u8.saturating_sub(sequence);
    track_vertical_slope_up(session, ride, sequence, (direction + 2) & 3, height, element, support_type);
}

fn track_vertical_up(
    session: &mut PaintSession,
    _ride: &Ride,
    sequence: u8,
    direction: Direction,
    height: i32,
    _element: &TrackElement,
    _support_type: SupportType,
) {
    let d = direction & 3;
    if sequence == 0 {
        let lattice = support_colour(session).with_index(SPR_AIR_POWERED_VERTICAL_RC_VERTICAL_UP_SEQ_0 + d as ImageIndex);
        session.add_image_as_parent_rotated(d, lattice, xyz(0, 0, height), xyz(26, 26, 79), xyz(3, 3, height));
    } else {
        let rail = session
            .track_colour(ColourScheme::Track)
            .with_index(SPR_AIR_POWERED_VERTICAL_RC_VERTICAL_UP_SEQ_1 + d as ImageIndex);
        let x = if d == 0 || d == 3 { 0 } else { 30 };
        session.add_image_as_parent_rotated(d, rail, xyz(0, 0, height), xyz(2, 20, 79), xyz(x, 6, height));
        session.set_vertical_tunnel(height + 80);
    }
    block_segments(session, Segment::ALL);
    set_track_clearance(session, height + 80);
}

fn track_vertical_down(
    session: &mut PaintSession,
    ride: &Ride,
    sequence: u8,
    direction: Direction,
    height: i32,
    element: &TrackElement,
    support_type: SupportType,
) {
    track_vertical_up(session, ride, sequence ^ 1, (direction + 2) & 3, height, element, support_type);
}

/// Top cap sprites for the two drawn facings: lattice, rails for tiles 0 to 2, far lattice, rail for tile 3.
#[rustfmt::skip]
const TOP_CAP: [[ImageIndex; 6]; 2] = [
    [22358, 22351, 22350, 22353, 22360, 22352],
    [22359, 22355, 22354, 22357, 22361, 22356],
];

fn track_vertical_top(
    session: &mut PaintSession,
    ride: &Ride,
    sequence: u8,
    direction: Direction,
    height: i32,
    element: &TrackElement,
    support_type: SupportType,
) {
    let d = direction & 3;
    if d >= 2 {
        let sequence = 3u8.saturating_sub(sequence);
        track_vertical_top(session, ride, sequence, d - 2, height, element, support_type);
        return;
    }

    let sprites = TOP_CAP[d as usize];
    let track = session.track_colour(ColourScheme::Track);
    let lattice = support_colour(session);
    let origin = xyz(0, 0, height);
    let tall = (xyz(32, 20, 15), xyz(0, 6, height));
    let thin = (xyz(5, 20, 1), xyz(24, 6, height));

    match sequence {
        0 => {
            let parent = lattice.with_index(sprites[0]);
            let rail = track.with_index(sprites[1]);
            if d == 0 {
                session.add_image_as_parent_rotated(d, parent, origin, tall.0, tall.1);
                session.add_image_as_child_rotated(d, rail, origin, xyz(31, 20, 15), xyz(1, 6, height));
            } else {
                paint_pair(session, d, parent, rail, height, thin.0, thin.1);
            }
        }
        1 | 2 => {
            let rail = track.with_index(sprites[sequence as usize + 1]);
            let upright = (d == 0) == (sequence == 1);
            let (length, bound_offset) =
                if upright { (xyz(2, 20, 15), xyz(0, 6, height)) } else { (xyz(2, 20, 1), xyz(33, 6, height)) };
            session.add_image_as_parent_rotated(d, rail, origin, length, bound_offset);
            session.set_vertical_tunnel(height + 80);
        }
        _ => {
            let parent = lattice.with_index(sprites[4]);
            let rail = track.with_index(sprites[5]);
            let (length, bound_offset) = if d == 0 { thin } else { tall };
            paint_pair(session, d, parent, rail, height, length, bound_offset);
        }
    }

    block_segments(session, Segment::ALL);
    set_track_clearance(session, height + 80);
}

pub fn get_track_paint_function_air_powered_vertical_rc(track_type: TrackElemType) -> Option<PaintFunction> {
    use TrackElemType::*;
    let f: PaintFunction = match track_type {
        Flat => track_flat,
        EndStation | BeginStation | MiddleStation => track_station,
        LeftQuarterTurn5Tiles => track_left_quarter_turn_5,
        RightQuarterTurn5Tiles => track_right_quarter_turn_5,
        FlatToLeftBank => track_flat_to_left_bank,
        FlatToRightBank => track_flat_to_right_bank,
        LeftBankToFlat => track_left_bank_to_flat,
        RightBankToFlat => track_right_bank_to_flat,
        BankedLeftQuarterTurn5Tiles => track_banked_left_quarter_turn_5,
        BankedRightQuarterTurn5Tiles => track_banked_right_quarter_turn_5,
        LeftBank => track_left_bank,
        RightBank => track_right_bank,
        Brakes => track_brakes,
        ReverseFreefallSlope => track_vertical_slope_up,
        ReverseFreefallVertical => track_vertical_up,
        AirThrustTopCap => track_vertical_top,
        AirThrustVerticalDown => track_vertical_down,
        AirThrustVerticalDownToLevel => track_vertical_slope_down,
        Booster => track_booster,
        OnRidePhoto => track_onride_photo,
        _ => return None,
    };
    Some(f)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slope_slots_cover_every_lattice_sprite_once() {
        let mut slots = SLOPE_SUPPORT_SLOTS;
        slots.sort_unstable();
        assert_eq!(slots, [0, 1, 2, 3, 4, 5, 6]);
        assert_eq!(SLOPE_RAIL_SLOTS.iter().flatten().count(), 6);
    }

    #[test]
    fn slope_support_runs_match_the_sprite_sheet() {
        // SE_NW part 5 is the last lattice sprite.
        assert_eq!(SPR_AIR_POWERED_VERTICAL_RC_SLOPE_SUPPORTS + 3 * 7 + SLOPE_SUPPORT_SLOTS[5], 22291);
        assert_eq!(SPR_AIR_POWERED_VERTICAL_RC_SLOPE + 3 * 6 + 5, 22263);
    }

    #[test]
    fn quarter_turn_tables_run_in_sheet_order() {
        assert_eq!(QUARTER_TURN_5[3][4].sprite, 22311);
        assert_eq!(BANKED_QUARTER_TURN_5[0][0].sprite, 22312);
        assert_eq!(BANKED_QUARTER_TURN_5[2][1].bb_offset.z, 27);
    }
}
