use proptest::prelude::*;
use trackpaint_geom::{CoordsXY, TileCoordsXY};
use trackpaint_session::{ColourScheme, ColourTemplate, PaintSession, SessionFlags, TunnelGroup, TunnelSubType};
use trackpaint_track::sprites::*;
use trackpaint_track::turns::{
    DEFAULT_RIGHT_QUARTER_TURN_3_TILES_BOUND_LENGTHS, DEFAULT_RIGHT_QUARTER_TURN_3_TILES_OFFSETS,
    TurnTables, left_quarter_turn_1_tile_tunnel, right_quarter_turn_3_tiles_paint,
};
use trackpaint_track::{
    Edge, Ride, RideStation, StationCoverStyle, TrackElemType, TrackElement, draw_narrow_station_platform,
    draw_station, edge_neighbour, onride_photo_paint,
};

const COVERED: StationCoverStyle = StationCoverStyle { base_image: 5000, glass: false };

fn station_tile() -> CoordsXY {
    CoordsXY::new(12 * 32, 9 * 32)
}

fn session_at(position: CoordsXY) -> PaintSession {
    let mut s = PaintSession::new();
    s.map_position = position;
    s
}

#[test]
fn narrow_platform_fenced_on_both_sides_without_entrances() {
    let ride = Ride { stations: vec![RideStation::default()], cover_style: StationCoverStyle::default() };
    let element = TrackElement::new(TrackElemType::MiddleStation, 16);
    let mut s = session_at(station_tile());
    draw_narrow_station_platform(&mut s, &ride, 0, 16, 7, &element);

    let images: Vec<u32> = s.draw_calls().iter().map(|c| c.image.index).collect();
    assert_eq!(images, vec![SPR_STATION_NARROW_EDGE_FENCED_NW, SPR_STATION_NARROW_EDGE_SE, SPR_STATION_FENCE_SW_NE]);
    assert!(s.draw_calls().iter().all(|c| c.image.template == ColourTemplate::Scheme(ColourScheme::Supports)));
    assert_eq!(s.draw_calls()[0].offset.z, 23);
    assert_eq!(s.draw_calls()[2].offset.z, 25);
}

#[test]
fn narrow_platform_opens_toward_the_exit() {
    let position = station_tile();
    let exit = edge_neighbour(Edge::SW, position, 0);
    let ride = Ride {
        stations: vec![RideStation { entrance: None, exit: Some(exit) }],
        cover_style: StationCoverStyle::default(),
    };
    let element = TrackElement::new(TrackElemType::MiddleStation, 16);
    let mut s = session_at(position);
    draw_narrow_station_platform(&mut s, &ride, 1, 16, 5, &element);

    let images: Vec<u32> = s.draw_calls().iter().map(|c| c.image.index).collect();
    assert_eq!(images, vec![SPR_STATION_NARROW_EDGE_FENCED_NE, SPR_STATION_NARROW_EDGE_SW]);
}

#[test]
fn missing_station_counts_as_fenced() {
    let element = TrackElement::new(TrackElemType::MiddleStation, 0).with_station_index(3);
    let mut s = session_at(station_tile());
    draw_narrow_station_platform(&mut s, &Ride::default(), 0, 0, 7, &element);
    assert_eq!(s.draw_calls()[0].image.index, SPR_STATION_NARROW_EDGE_FENCED_NW);
}

#[test]
fn end_station_shows_its_light() {
    let ride = Ride { stations: vec![RideStation::default()], cover_style: StationCoverStyle::default() };
    let red = TrackElement::new(TrackElemType::EndStation, 0);
    let green = red.with_green_light(true);

    let mut s = session_at(station_tile());
    draw_station(&mut s, &ride, 0, 0, &red);
    assert_eq!(s.draw_calls()[0].image.index, SPR_STATION_PLATFORM_FENCED_END_RED_LIGHT_SW_NE);
    assert_eq!(s.draw_calls()[1].image.index, SPR_STATION_PLATFORM_END_RED_LIGHT_SW_NE);

    let mut s = session_at(station_tile());
    draw_station(&mut s, &ride, 3, 0, &green);
    assert_eq!(s.draw_calls()[0].image.index, SPR_STATION_PLATFORM_FENCED_END_GREEN_LIGHT_NW_SE);
    assert_eq!(s.draw_calls()[1].image.index, SPR_STATION_PLATFORM_END_GREEN_LIGHT_NW_SE);
}

#[test]
fn begin_station_draws_the_small_fence_at_the_front() {
    let ride = Ride { stations: vec![RideStation::default()], cover_style: StationCoverStyle::default() };
    let element = TrackElement::new(TrackElemType::BeginStation, 0);
    let mut s = session_at(station_tile());
    draw_station(&mut s, &ride, 0, 0, &element);

    let images: Vec<u32> = s.draw_calls().iter().map(|c| c.image.index).collect();
    assert_eq!(
        images,
        vec![
            SPR_STATION_PLATFORM_FENCED_SW_NE,
            SPR_STATION_PLATFORM_SW_NE,
            SPR_STATION_BEGIN_ANGLE_FENCE_SW_NE,
            SPR_STATION_FENCE_SMALL_NW_SE,
        ]
    );
}

#[test]
fn covers_follow_every_platform_edge() {
    let ride = Ride { stations: vec![RideStation::default()], cover_style: COVERED };
    let element = TrackElement::new(TrackElemType::MiddleStation, 0);
    let mut s = session_at(station_tile());
    draw_station(&mut s, &ride, 1, 32, &element);

    let covers: Vec<u32> = s
        .draw_calls()
        .iter()
        .map(|c| c.image.index)
        .filter(|&i| (5000..5020).contains(&i))
        .collect();
    assert_eq!(covers, vec![5004, 5005]);
}

#[test]
fn covers_skipped_before_the_surface_outside_previews() {
    let ride = Ride { stations: vec![RideStation::default()], cover_style: COVERED };
    let element = TrackElement::new(TrackElemType::MiddleStation, 0);

    let mut s = session_at(station_tile());
    s.flags = SessionFlags::empty();
    draw_station(&mut s, &ride, 0, 0, &element);
    assert!(s.draw_calls().iter().all(|c| c.image.index < 5000 || c.image.index >= 5020));

    let mut s = session_at(station_tile());
    s.flags = SessionFlags::TRACK_PIECE_PREVIEW;
    draw_station(&mut s, &ride, 0, 0, &element);
    assert!(s.draw_calls().iter().any(|c| (5000..5020).contains(&c.image.index)));
}

#[test]
fn photo_sits_above_the_track() {
    let element = TrackElement::new(TrackElemType::OnRidePhoto, 0);
    let mut s = PaintSession::new();
    onride_photo_paint(&mut s, 1, 19, &element);
    assert_eq!(s.draw_calls().len(), 3);
    assert!(s.draw_calls().iter().all(|c| c.offset.z == 19 && c.bound_box.length.z == 19));
    assert!(s.draw_calls().iter().all(|c| c.image.template == ColourTemplate::Scheme(ColourScheme::Misc)));
}

#[test]
fn quarter_turn_3_with_defaults_skips_the_gap_tile() {
    const SPRITES: [[u32; 3]; 4] = [[10, 11, 12], [13, 14, 15], [16, 17, 18], [19, 20, 21]];
    let tables = TurnTables {
        sprites: &SPRITES,
        offsets: Some(&DEFAULT_RIGHT_QUARTER_TURN_3_TILES_OFFSETS),
        bound_lengths: &DEFAULT_RIGHT_QUARTER_TURN_3_TILES_BOUND_LENGTHS,
        bound_offsets: None,
    };
    let mut s = PaintSession::new();
    let template = s.track_colour(ColourScheme::Track);
    assert!(right_quarter_turn_3_tiles_paint(&mut s, 3, 8, 2, 1, template, &tables).is_none());
    assert!(right_quarter_turn_3_tiles_paint(&mut s, 3, 8, 2, 3, template, &tables).is_some());
    let call = s.draw_calls()[0];
    assert_eq!(call.image.index, 18);
    assert_eq!(call.bound_box.offset.x, 6);
    assert_eq!(call.bound_box.length.z, 3);
}

#[test]
fn quarter_turn_1_pushes_both_tunnels_when_both_ends_face_the_camera() {
    let mut counts = [0usize; 4];
    for d in 0..4u8 {
        let mut s = PaintSession::new();
        left_quarter_turn_1_tile_tunnel(&mut s, d, 0, TunnelGroup::PathAndMiniGolf, TunnelSubType::Flat);
        counts[d as usize] = s.tunnel_count();
    }
    assert_eq!(counts, [1, 0, 1, 2]);
}

proptest! {
    #[test]
    fn edge_neighbours_are_adjacent(tx in 1i32..200, ty in 1i32..200, rotation in 0u8..4) {
        let position = CoordsXY::new(tx * 32 + 5, ty * 32 + 17);
        let here = TileCoordsXY::new(tx, ty);
        for edge in [Edge::NE, Edge::SE, Edge::SW, Edge::NW] {
            let n = edge_neighbour(edge, position, rotation);
            prop_assert_eq!((n.x - here.x).abs() + (n.y - here.y).abs(), 1);
        }
    }

    #[test]
    fn rotating_the_view_rotates_the_neighbour(tx in 1i32..200, ty in 1i32..200) {
        let position = CoordsXY::new(tx * 32, ty * 32);
        prop_assert_eq!(edge_neighbour(Edge::NE, position, 2), edge_neighbour(Edge::SW, position, 0));
        prop_assert_eq!(edge_neighbour(Edge::NW, position, 2), edge_neighbour(Edge::SE, position, 0));
    }
}
