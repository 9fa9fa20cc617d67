use proptest::prelude::*;
use trackpaint_geom::{CoordsXY, Direction};
use trackpaint_session::{DrawCall, PaintSession, TunnelEntry};
use trackpaint_track::turns::{MAP_LEFT_QUARTER_TURN_3_TILES_TO_RIGHT, MAP_LEFT_QUARTER_TURN_5_TILES_TO_RIGHT};
use trackpaint_track::{Ride, TrackElemType, TrackElement};
use trackpaint_rides::{RideType, track_paint_function};

use RideType::*;
use TrackElemType::*;

type Output = (Vec<DrawCall>, Vec<TunnelEntry>, Vec<TunnelEntry>, Option<i32>, u16);

fn paint(ride: RideType, elem: TrackElemType, sequence: u8, direction: Direction, height: i32, position: CoordsXY) -> Output {
    let f = track_paint_function(ride, elem).unwrap_or_else(|| panic!("{ride} does not paint {elem}"));
    let mut session = PaintSession::new();
    session.map_position = position;
    let element = TrackElement::new(elem, height);
    f(&mut session, &Ride::default(), sequence, direction, height, &element, ride.default_support_type());
    (
        session.draw_calls().to_vec(),
        session.left_tunnels.clone(),
        session.right_tunnels.clone(),
        session.vertical_tunnel_height,
        session.support.height,
    )
}

/// Down piece and the up piece it is drawn as from the far end.
const REVERSED: &[(RideType, TrackElemType, TrackElemType)] = &[
    (DinghySlide, Down25, Up25),
    (DinghySlide, Down60, Up60),
    (DinghySlide, FlatToDown25, Up25ToFlat),
    (DinghySlide, Down25ToFlat, FlatToUp25),
    (DinghySlide, Down25ToDown60, Up60ToUp25),
    (DinghySlide, Down60ToDown25, Up25ToUp60),
    (MiniatureRailway, Down25, Up25),
    (MiniatureRailway, FlatToDown25, Up25ToFlat),
    (MiniatureRailway, Down25ToFlat, FlatToUp25),
    (MiniGolf, Down25, Up25),
    (MiniGolf, FlatToDown25, Up25ToFlat),
    (MiniGolf, Down25ToFlat, FlatToUp25),
    (AirPoweredVerticalCoaster, RightBank, LeftBank),
    (AirPoweredVerticalCoaster, LeftBankToFlat, FlatToRightBank),
    (AirPoweredVerticalCoaster, RightBankToFlat, FlatToLeftBank),
];

/// Left turn and the right turn it mirrors, with the sequence remap.
const MIRRORED: &[(RideType, TrackElemType, TrackElemType, &[u8])] = &[
    (DinghySlide, LeftQuarterTurn5Tiles, RightQuarterTurn5Tiles, &MAP_LEFT_QUARTER_TURN_5_TILES_TO_RIGHT),
    (DinghySlide, LeftQuarterTurn5TilesCovered, RightQuarterTurn5TilesCovered, &MAP_LEFT_QUARTER_TURN_5_TILES_TO_RIGHT),
    (DinghySlide, LeftQuarterTurn3Tiles, RightQuarterTurn3Tiles, &MAP_LEFT_QUARTER_TURN_3_TILES_TO_RIGHT),
    (DinghySlide, LeftQuarterTurn3TilesCovered, RightQuarterTurn3TilesCovered, &MAP_LEFT_QUARTER_TURN_3_TILES_TO_RIGHT),
    (MiniatureRailway, LeftQuarterTurn5Tiles, RightQuarterTurn5Tiles, &MAP_LEFT_QUARTER_TURN_5_TILES_TO_RIGHT),
    (MiniatureRailway, LeftQuarterTurn3Tiles, RightQuarterTurn3Tiles, &MAP_LEFT_QUARTER_TURN_3_TILES_TO_RIGHT),
    (AirPoweredVerticalCoaster, LeftQuarterTurn5Tiles, RightQuarterTurn5Tiles, &MAP_LEFT_QUARTER_TURN_5_TILES_TO_RIGHT),
    (
        AirPoweredVerticalCoaster,
        BankedLeftQuarterTurn5Tiles,
        BankedRightQuarterTurn5Tiles,
        &MAP_LEFT_QUARTER_TURN_5_TILES_TO_RIGHT,
    ),
];

fn arb_position() -> impl Strategy<Value = CoordsXY> {
    (0..64i32, 0..64i32).prop_map(|(x, y)| CoordsXY::new(x * 32, y * 32))
}

fn arb_height() -> impl Strategy<Value = i32> {
    (2..40i32).prop_map(|h| h * 8)
}

proptest! {
    #[test]
    fn down_pieces_are_up_pieces_turned_around(
        case in 0..REVERSED.len(),
        direction in 0..4u8,
        height in arb_height(),
        position in arb_position(),
    ) {
        let (ride, down, up) = REVERSED[case];
        prop_assert_eq!(
            paint(ride, down, 0, direction, height, position),
            paint(ride, up, 0, (direction + 2) & 3, height, position)
        );
    }

    #[test]
    fn left_turns_mirror_right_turns(
        case in 0..MIRRORED.len(),
        direction in 0..4u8,
        sequence in 0..7u8,
        height in arb_height(),
        position in arb_position(),
    ) {
        let (ride, left, right, map) = MIRRORED[case];
        let sequence = sequence % left.sequence_count();
        prop_assert_eq!(
            paint(ride, left, sequence, direction, height, position),
            paint(ride, right, map[sequence as usize], (direction + 1) & 3, height, position)
        );
    }

    #[test]
    fn vertical_descent_replays_the_climb(
        direction in 0..4u8,
        sequence in 0..7u8,
        height in arb_height(),
        position in arb_position(),
    ) {
        let ride = AirPoweredVerticalCoaster;
        prop_assert_eq!(
            paint(ride, AirThrustVerticalDownToLevel, sequence, direction, height, position),
            paint(ride, ReverseFreefallSlope, 6 - sequence, (direction + 2) & 3, height, position)
        );
        let sequence = sequence & 1;
        prop_assert_eq!(
            paint(ride, AirThrustVerticalDown, sequence, direction, height, position),
            paint(ride, ReverseFreefallVertical, sequence ^ 1, (direction + 2) & 3, height, position)
        );
    }

    #[test]
    fn top_cap_far_facings_reverse_the_sequence(
        direction in 2..4u8,
        sequence in 0..4u8,
        height in arb_height(),
    ) {
        let ride = AirPoweredVerticalCoaster;
        let position = CoordsXY::new(0, 0);
        prop_assert_eq!(
            paint(ride, AirThrustTopCap, sequence, direction, height, position),
            paint(ride, AirThrustTopCap, 3 - sequence, direction - 2, height, position)
        );
    }
}
