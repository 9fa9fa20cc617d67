use trackpaint_geom::{CoordsXY, Direction};
use trackpaint_session::{
    ColourScheme, ColourTemplate, DrawCall, DrawKind, PaintSession, SupportHeight, TunnelEntry, TunnelGroup,
    TunnelSubType,
};
use trackpaint_track::{Ride, RideStation, TrackElemType, TrackElement};
use trackpaint_rides::{RideType, track_paint_function};

const HEIGHT: i32 = 48;

/// Everything one paint call leaves behind in the session.
#[derive(Debug, PartialEq)]
struct Painted {
    draw_calls: Vec<DrawCall>,
    left_tunnels: Vec<TunnelEntry>,
    right_tunnels: Vec<TunnelEntry>,
    vertical_tunnel_height: Option<i32>,
    support: SupportHeight,
    segments_touched: u16,
    segment_calls: u32,
    general_calls: u32,
}

fn ride() -> Ride {
    Ride { stations: vec![RideStation::default()], ..Ride::default() }
}

fn paint_on(
    session: &mut PaintSession,
    ride_type: RideType,
    elem: TrackElemType,
    sequence: u8,
    direction: Direction,
) -> Option<Painted> {
    let f = track_paint_function(ride_type, elem)?;
    session.reset();
    let element = TrackElement::new(elem, HEIGHT);
    f(session, &ride(), sequence, direction, HEIGHT, &element, ride_type.default_support_type());
    Some(Painted {
        draw_calls: session.draw_calls().to_vec(),
        left_tunnels: session.left_tunnels.clone(),
        right_tunnels: session.right_tunnels.clone(),
        vertical_tunnel_height: session.vertical_tunnel_height,
        support: session.support,
        segments_touched: session.stats.segments_touched,
        segment_calls: session.stats.segment_calls,
        general_calls: session.stats.general_calls,
    })
}

fn paint(ride_type: RideType, elem: TrackElemType, sequence: u8, direction: Direction) -> Option<Painted> {
    let mut session = PaintSession::new();
    session.map_position = CoordsXY::new(5 * 32, 7 * 32);
    paint_on(&mut session, ride_type, elem, sequence, direction)
}

/// Every reachable (ride, element, sequence, direction).
fn every_tile() -> impl Iterator<Item = (RideType, TrackElemType, u8, Direction)> {
    RideType::ALL.into_iter().flat_map(|ride| {
        ride.supported_elements().flat_map(move |elem| {
            (0..elem.sequence_count()).flat_map(move |seq| (0..4).map(move |d| (ride, elem, seq, d)))
        })
    })
}

#[test]
fn every_ride_paints_something_and_nothing_else_is_drawn() {
    for ride in RideType::ALL {
        let supported: Vec<_> = ride.supported_elements().collect();
        assert!(supported.len() > 3, "{ride} supports only {supported:?}");
        for &elem in TrackElemType::ALL {
            assert_eq!(track_paint_function(ride, elem).is_some(), supported.contains(&elem));
        }
    }
}

#[test]
fn every_tile_settles_exactly_one_clearance() {
    for (ride, elem, seq, d) in every_tile() {
        let painted = paint(ride, elem, seq, d).unwrap();
        assert_eq!(painted.general_calls, 1, "{ride} {elem} seq {seq} dir {d}");
        assert!(painted.support.height as i32 > HEIGHT, "{ride} {elem} seq {seq} dir {d}");
    }
}

#[test]
fn every_tile_records_its_segments() {
    for (ride, elem, seq, d) in every_tile() {
        let painted = paint(ride, elem, seq, d).unwrap();
        assert!(painted.segment_calls >= 1, "{ride} {elem} seq {seq} dir {d}");
    }
}

#[test]
fn painting_twice_is_identical() {
    let mut session = PaintSession::new();
    session.map_position = CoordsXY::new(3 * 32, 3 * 32);
    for (ride, elem, seq, d) in every_tile() {
        let first = paint_on(&mut session, ride, elem, seq, d);
        let second = paint_on(&mut session, ride, elem, seq, d);
        assert_eq!(first, second, "{ride} {elem} seq {seq} dir {d}");
    }
}

const TURNS: [TrackElemType; 8] = [
    TrackElemType::LeftQuarterTurn5Tiles,
    TrackElemType::RightQuarterTurn5Tiles,
    TrackElemType::BankedLeftQuarterTurn5Tiles,
    TrackElemType::BankedRightQuarterTurn5Tiles,
    TrackElemType::LeftQuarterTurn3Tiles,
    TrackElemType::RightQuarterTurn3Tiles,
    TrackElemType::SBendLeft,
    TrackElemType::SBendRight,
];

#[test]
fn turns_push_tunnels_only_at_their_ends() {
    for ride in RideType::ALL {
        for elem in TURNS {
            if track_paint_function(ride, elem).is_none() {
                continue;
            }
            for d in 0..4 {
                let mut total = 0;
                for seq in 0..elem.sequence_count() {
                    let painted = paint(ride, elem, seq, d).unwrap();
                    let pushed = painted.left_tunnels.len() + painted.right_tunnels.len();
                    assert!(pushed <= 1, "{ride} {elem} seq {seq} dir {d} pushed {pushed}");
                    let middle = seq != 0 && seq + 1 != elem.sequence_count();
                    assert!(!(middle && pushed > 0), "{ride} {elem} pushed mid-piece at seq {seq} dir {d}");
                    total += pushed;
                }
                assert!(total <= 2, "{ride} {elem} dir {d} pushed {total}");
            }
        }
    }
}

#[test]
fn multi_tile_pieces_block_segments() {
    for ride in RideType::ALL {
        for elem in ride.supported_elements().filter(|e| e.sequence_count() > 1) {
            for d in 0..4 {
                let union = (0..elem.sequence_count())
                    .map(|seq| paint(ride, elem, seq, d).unwrap().segments_touched)
                    .fold(0u16, |acc, s| acc | s);
                assert_ne!(union, 0, "{ride} {elem} dir {d}");
            }
        }
    }
}

#[test]
fn dinghy_flat_draws_slide_and_front() {
    let painted = paint(RideType::DinghySlide, TrackElemType::Flat, 0, 0).unwrap();
    let track: Vec<_> = painted
        .draw_calls
        .iter()
        .filter(|c| c.image.template == ColourTemplate::Scheme(ColourScheme::Track))
        .collect();
    assert_eq!(track.iter().map(|c| c.image.index).collect::<Vec<_>>(), vec![19720, 19722]);
    assert!(track.iter().all(|c| c.kind == DrawKind::Parent));
    assert_eq!(painted.left_tunnels, vec![TunnelEntry::new(HEIGHT, TunnelGroup::Standard, TunnelSubType::Flat)]);
    assert!(painted.right_tunnels.is_empty());
    assert_eq!(painted.support.height as i32, HEIGHT + 32);
    assert_eq!(painted.general_calls, 1);
}

#[test]
fn dinghy_chain_swaps_sprites_only() {
    let plain = paint(RideType::DinghySlide, TrackElemType::Flat, 0, 0).unwrap();

    let mut session = PaintSession::new();
    session.map_position = CoordsXY::new(5 * 32, 7 * 32);
    let element = TrackElement::new(TrackElemType::Flat, HEIGHT).with_chain(true);
    let f = track_paint_function(RideType::DinghySlide, TrackElemType::Flat).unwrap();
    f(&mut session, &ride(), 0, 0, HEIGHT, &element, RideType::DinghySlide.default_support_type());

    let chained = session.draw_calls();
    assert_eq!(chained.len(), plain.draw_calls.len());
    assert_eq!(chained[0].image.index, 19724);
    assert_eq!(chained[1].image.index, 19726);
    for (a, b) in chained.iter().zip(&plain.draw_calls) {
        assert_eq!((a.offset, a.bound_box, a.kind), (b.offset, b.bound_box, b.kind));
    }
    assert_eq!(session.left_tunnels, plain.left_tunnels);
    assert_eq!(session.support, plain.support);
}

#[test]
fn vertical_pieces_record_a_vertical_tunnel() {
    let top = paint(RideType::AirPoweredVerticalCoaster, TrackElemType::ReverseFreefallVertical, 1, 0).unwrap();
    assert_eq!(top.vertical_tunnel_height, Some(HEIGHT + 80));
    let base = paint(RideType::AirPoweredVerticalCoaster, TrackElemType::ReverseFreefallVertical, 0, 0).unwrap();
    assert_eq!(base.vertical_tunnel_height, None);
}

#[test]
fn splash_boats_photo_tunnels_like_flat() {
    for d in 0..4 {
        let photo = paint(RideType::SplashBoats, TrackElemType::OnRidePhoto, 0, d).unwrap();
        let flat = paint(RideType::SplashBoats, TrackElemType::Flat, 0, d).unwrap();
        let expected = vec![TunnelEntry::new(HEIGHT, TunnelGroup::Square, TunnelSubType::Flat)];
        let (pushed, empty) =
            if d & 1 == 0 { (&photo.left_tunnels, &photo.right_tunnels) } else { (&photo.right_tunnels, &photo.left_tunnels) };
        assert_eq!(pushed, &expected, "dir {d}");
        assert!(empty.is_empty(), "dir {d}");
        assert_eq!((photo.left_tunnels, photo.right_tunnels), (flat.left_tunnels, flat.right_tunnels));
    }
}

#[test]
fn booster_folds_second_remap_unless_ghost_or_highlighted() {
    let f = track_paint_function(RideType::AirPoweredVerticalCoaster, TrackElemType::Booster).unwrap();
    let support = RideType::AirPoweredVerticalCoaster.default_support_type();
    let rail_template = |element: TrackElement| {
        let mut session = PaintSession::new();
        f(&mut session, &ride(), 0, 1, HEIGHT, &element, support);
        let rail = session.draw_calls()[0];
        assert_eq!(rail.image.index, 22165);
        rail.image.template
    };

    let plain = TrackElement::new(TrackElemType::Booster, HEIGHT);
    assert_eq!(rail_template(plain), ColourTemplate::TrackSingleRemap);
    assert_eq!(rail_template(plain.with_highlight(true)), ColourTemplate::Scheme(ColourScheme::Track));
    assert_eq!(rail_template(plain.with_ghost(true)), ColourTemplate::Scheme(ColourScheme::Track));
}
