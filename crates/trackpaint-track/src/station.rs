//! Station platforms, fences and roofs.

use serde::{Deserialize, Serialize};
use trackpaint_geom::{BoundBoxXYZ, CoordsXY, Direction, TileCoordsXY, xyz};
use trackpaint_session::{ColourScheme, ImageIndex, PaintSession, SessionFlags};

use crate::elem::TrackElemType;
use crate::element::{Ride, StationCoverStyle, TrackElement};
use crate::paint::add_image_at;
use crate::sprites::*;

/// Tile edge, named after the map's compass corners.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(test, derive(proptest_derive::Arbitrary))]
pub enum Edge {
    NE,
    SE,
    SW,
    NW,
}

const FENCE_OFFSETS_A: [(i32, i32); 4] = [(-1, 0), (0, -1), (1, 0), (0, 1)];
const FENCE_OFFSETS_B: [(i32, i32); 4] = [(0, -1), (1, 0), (0, 1), (-1, 0)];

/// Neighbouring tile across `edge`, as seen under `rotation`.
pub fn edge_neighbour(edge: Edge, position: CoordsXY, rotation: u8) -> TileCoordsXY {
    let r = (rotation & 3) as usize;
    let flipped = ((rotation + 2) & 3) as usize;
    let (dx, dy) = match edge {
        Edge::NE => FENCE_OFFSETS_A[r],
        Edge::SE => FENCE_OFFSETS_B[flipped],
        Edge::SW => FENCE_OFFSETS_A[flipped],
        Edge::NW => FENCE_OFFSETS_B[r],
    };
    position.to_tile().offset(dx, dy)
}

/// A station edge is fenced unless the station's entrance or exit sits across it.
pub fn has_fence(edge: Edge, position: CoordsXY, element: &TrackElement, ride: &Ride, rotation: u8) -> bool {
    let neighbour = edge_neighbour(edge, position, rotation);
    match ride.station(element.station_index()) {
        Some(station) => station.is_open_edge(neighbour),
        None => true,
    }
}

const COVER_HEIGHT: i32 = 22;

/// Draws the roof segment over one edge of a station tile. Returns whether anything was drawn.
pub fn draw_station_covers(
    session: &mut PaintSession,
    edge: Edge,
    has_fence: bool,
    style: StationCoverStyle,
    height: i32,
) -> bool {
    if !session
        .flags
        .intersects(SessionFlags::PASSED_SURFACE | SessionFlags::TRACK_PIECE_PREVIEW)
    {
        return false;
    }
    if !style.has_covers() {
        return false;
    }

    let (length, bound_offset, image_offset) = match edge {
        Edge::NE => (xyz(1, 30, COVER_HEIGHT), xyz(0, 1, height + 1), if has_fence { 4 } else { 3 }),
        Edge::SE => (xyz(32, 32, 0), xyz(0, 0, height + 1 + COVER_HEIGHT), 2),
        Edge::SW => (xyz(32, 32, 0), xyz(0, 0, height + 1 + COVER_HEIGHT), 5),
        Edge::NW => (xyz(30, 1, COVER_HEIGHT), xyz(1, 0, height + 1), if has_fence { 1 } else { 0 }),
    };
    let offset = xyz(0, 0, height);
    let bound_box = BoundBoxXYZ::new(bound_offset, length);
    let image = session
        .track_colour(ColourScheme::Misc)
        .with_index(style.base_image + image_offset);
    session.add_image_as_parent(image, offset, bound_box);
    if style.glass {
        let glass = session
            .track_colour(ColourScheme::Track)
            .with_index(style.base_image + image_offset + 12);
        session.add_image_as_child(glass, offset, bound_box);
    }
    true
}

fn platform_image(elem: TrackElemType, direction: Direction, fenced: bool, green: bool) -> ImageIndex {
    let odd = direction & 1 != 0;
    let end_facing = if odd { 3 } else { 0 };
    let begin_facing = if odd { 1 } else { 2 };
    match (elem, fenced, green) {
        (TrackElemType::EndStation, true, true) if direction == end_facing => {
            if odd { SPR_STATION_PLATFORM_FENCED_END_GREEN_LIGHT_NW_SE } else { SPR_STATION_PLATFORM_FENCED_END_GREEN_LIGHT_SW_NE }
        }
        (TrackElemType::EndStation, true, false) if direction == end_facing => {
            if odd { SPR_STATION_PLATFORM_FENCED_END_RED_LIGHT_NW_SE } else { SPR_STATION_PLATFORM_FENCED_END_RED_LIGHT_SW_NE }
        }
        (TrackElemType::EndStation, false, true) if direction == end_facing => {
            if odd { SPR_STATION_PLATFORM_END_GREEN_LIGHT_NW_SE } else { SPR_STATION_PLATFORM_END_GREEN_LIGHT_SW_NE }
        }
        (TrackElemType::EndStation, false, false) if direction == end_facing => {
            if odd { SPR_STATION_PLATFORM_END_RED_LIGHT_NW_SE } else { SPR_STATION_PLATFORM_END_RED_LIGHT_SW_NE }
        }
        (TrackElemType::BeginStation, true, _) if direction == begin_facing => {
            if odd { SPR_STATION_PLATFORM_BEGIN_FENCED_NW_SE } else { SPR_STATION_PLATFORM_BEGIN_FENCED_SW_NE }
        }
        (TrackElemType::BeginStation, false, _) if direction == begin_facing => {
            if odd { SPR_STATION_PLATFORM_BEGIN_NW_SE } else { SPR_STATION_PLATFORM_BEGIN_SW_NE }
        }
        (_, true, _) => {
            if odd { SPR_STATION_PLATFORM_FENCED_NW_SE } else { SPR_STATION_PLATFORM_FENCED_SW_NE }
        }
        (_, false, _) => {
            if odd { SPR_STATION_PLATFORM_NW_SE } else { SPR_STATION_PLATFORM_SW_NE }
        }
    }
}

/// Platform sprites sit this far above the track.
const PLATFORM_Z: i32 = 5;
/// Fences and lights sit this far above the track.
const FENCE_Z: i32 = 7;

/// Full-width platform with fences, end lights and covers on both sides of the track.
pub fn draw_station(
    session: &mut PaintSession,
    ride: &Ride,
    direction: Direction,
    height: i32,
    element: &TrackElement,
) {
    draw_station_with_cover_height(session, ride, direction, height, height, element);
}

/// Platform whose covers sit at `cover_height` rather than the platform height.
pub fn draw_station_with_cover_height(
    session: &mut PaintSession,
    ride: &Ride,
    direction: Direction,
    height: i32,
    cover_height: i32,
    element: &TrackElement,
) {
    let position = session.map_position;
    let rotation = session.current_rotation;
    let style = ride.cover_style;
    let elem = element.elem_type();
    let green = element.has_green_light();
    let template = session.track_colour(ColourScheme::Supports);
    let za = height + PLATFORM_Z;
    let zb = height + FENCE_Z;
    let begin = elem == TrackElemType::BeginStation;
    let end = elem == TrackElemType::EndStation;

    if direction & 1 == 0 {
        let fenced = has_fence(Edge::NW, position, element, ride, rotation);
        let image = platform_image(elem, direction, fenced, green);
        add_image_at(session, template.with_index(image), xyz(0, 0, za), xyz(32, 8, 1));
        draw_station_covers(session, Edge::NW, fenced, style, cover_height);

        let image = platform_image(elem, direction, false, green);
        add_image_at(session, template.with_index(image), xyz(0, 24, za), xyz(32, 8, 1));

        let fenced = has_fence(Edge::SE, position, element, ride, rotation);
        if fenced {
            let image = if begin && direction == 0 {
                SPR_STATION_BEGIN_ANGLE_FENCE_SW_NE
            } else if end && direction == 2 {
                SPR_STATION_LIGHT_BACK_ANGLE_FENCED_NE_SW
            } else {
                SPR_STATION_FENCE_SW_NE
            };
            add_image_at(session, template.with_index(image), xyz(0, 31, zb), xyz(32, 1, 7));
        } else if begin && direction == 0 {
            // Short fence beside an entrance or exit at the start of the platform.
            add_image_at(session, template.with_index(SPR_STATION_FENCE_SMALL_NW_SE), xyz(31, 23, zb), xyz(1, 8, 7));
        } else if end && direction == 2 {
            add_image_at(session, template.with_index(SPR_STATION_LIGHT_BACK_NE_SW), xyz(31, 23, zb), xyz(1, 8, 7));
        }
        draw_station_covers(session, Edge::SE, fenced, style, cover_height);

        if begin && direction == 0 {
            add_image_at(session, template.with_index(SPR_STATION_FENCE_SMALL_NW_SE), xyz(31, 0, zb), xyz(1, 8, 7));
        } else if end && direction == 2 {
            add_image_at(session, template.with_index(SPR_STATION_LIGHT_BACK_NE_SW), xyz(31, 0, zb), xyz(1, 8, 7));
        }
    } else {
        let fenced = has_fence(Edge::NE, position, element, ride, rotation);
        let image = platform_image(elem, direction, fenced, green);
        add_image_at(session, template.with_index(image), xyz(0, 0, za), xyz(8, 32, 1));
        draw_station_covers(session, Edge::NE, fenced, style, cover_height);

        let image = platform_image(elem, direction, false, green);
        add_image_at(session, template.with_index(image), xyz(24, 0, za), xyz(8, 32, 1));

        let fenced = has_fence(Edge::SW, position, element, ride, rotation);
        if fenced {
            let image = if begin && direction == 3 {
                SPR_STATION_BEGIN_ANGLE_FENCE_NW_SE
            } else if end && direction == 1 {
                SPR_STATION_LIGHT_BACK_ANGLE_FENCED_NW_SE
            } else {
                SPR_STATION_FENCE_NW_SE
            };
            add_image_at(session, template.with_index(image), xyz(31, 0, zb), xyz(1, 32, 7));
        } else if begin && direction == 3 {
            add_image_at(session, template.with_index(SPR_STATION_FENCE_SMALL_SW_NE), xyz(23, 31, zb), xyz(8, 1, 7));
        } else if end && direction == 1 {
            add_image_at(session, template.with_index(SPR_STATION_LIGHT_BACK_NW_SE), xyz(23, 31, zb), xyz(8, 1, 7));
        }
        draw_station_covers(session, Edge::SW, fenced, style, cover_height);

        if begin && direction == 3 {
            add_image_at(session, template.with_index(SPR_STATION_FENCE_SMALL_SW_NE), xyz(0, 31, zb), xyz(8, 1, 7));
        } else if end && direction == 1 {
            add_image_at(session, template.with_index(SPR_STATION_LIGHT_BACK_NW_SE), xyz(0, 31, zb), xyz(8, 1, 7));
        }
    }
}

/// Thin platform edges for boat and single-rail stations.
pub fn draw_narrow_station_platform(
    session: &mut PaintSession,
    ride: &Ride,
    direction: Direction,
    height: i32,
    z_offset: i32,
    element: &TrackElement,
) {
    let position = session.map_position;
    let rotation = session.current_rotation;
    let style = ride.cover_style;
    let template = session.track_colour(ColourScheme::Supports);
    let z = height + z_offset;

    if direction & 1 != 0 {
        let fenced = has_fence(Edge::NE, position, element, ride, rotation);
        let image = if fenced { SPR_STATION_NARROW_EDGE_FENCED_NE } else { SPR_STATION_NARROW_EDGE_NE };
        add_image_at(session, template.with_index(image), xyz(0, 0, z), xyz(8, 32, 1));
        draw_station_covers(session, Edge::NE, fenced, style, height);

        add_image_at(session, template.with_index(SPR_STATION_NARROW_EDGE_SW), xyz(24, 0, z), xyz(8, 32, 1));

        let fenced = has_fence(Edge::SW, position, element, ride, rotation);
        if fenced {
            add_image_at(session, template.with_index(SPR_STATION_FENCE_NW_SE), xyz(31, 0, z + 2), xyz(1, 32, 7));
        }
        draw_station_covers(session, Edge::SW, fenced, style, height);
    } else {
        let fenced = has_fence(Edge::NW, position, element, ride, rotation);
        let image = if fenced { SPR_STATION_NARROW_EDGE_FENCED_NW } else { SPR_STATION_NARROW_EDGE_NW };
        add_image_at(session, template.with_index(image), xyz(0, 0, z), xyz(32, 8, 1));
        draw_station_covers(session, Edge::NW, fenced, style, height);

        add_image_at(session, template.with_index(SPR_STATION_NARROW_EDGE_SE), xyz(0, 24, z), xyz(32, 8, 1));

        let fenced = has_fence(Edge::SE, position, element, ride, rotation);
        if fenced {
            add_image_at(session, template.with_index(SPR_STATION_FENCE_SW_NE), xyz(0, 31, z + 2), xyz(32, 1, 7));
        }
        draw_station_covers(session, Edge::SE, fenced, style, height);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::RideStation;

    #[test]
    fn entrance_across_edge_removes_fence() {
        let position = CoordsXY::new(5 * 32, 7 * 32);
        let element = TrackElement::new(TrackElemType::MiddleStation, 0);
        let entrance = edge_neighbour(Edge::NW, position, 0);
        let ride = Ride {
            stations: vec![RideStation { entrance: Some(entrance), exit: None }],
            ..Ride::default()
        };
        assert!(!has_fence(Edge::NW, position, &element, &ride, 0));
        assert!(has_fence(Edge::SE, position, &element, &ride, 0));
    }

    #[test]
    fn opposite_edges_point_opposite_ways() {
        let position = CoordsXY::new(10 * 32, 10 * 32);
        for rotation in 0..4 {
            let ne = edge_neighbour(Edge::NE, position, rotation);
            let sw = edge_neighbour(Edge::SW, position, rotation);
            assert_eq!(ne.x + sw.x, 20);
            assert_eq!(ne.y + sw.y, 20);
        }
    }

    #[test]
    fn covers_need_a_real_style() {
        let mut session = PaintSession::new();
        let style = StationCoverStyle { base_image: 0x20, glass: false };
        assert!(!draw_station_covers(&mut session, Edge::NE, true, style, 16));
        let style = StationCoverStyle { base_image: 1000, glass: true };
        assert!(draw_station_covers(&mut session, Edge::NE, true, style, 16));
        assert_eq!(session.draw_calls().len(), 2);
        assert_eq!(session.draw_calls()[0].image.index, 1004);
        assert_eq!(session.draw_calls()[1].image.index, 1016);
    }

    #[test]
    fn platforms_and_fences_sit_above_the_track() {
        let mut session = PaintSession::new();
        session.map_position = CoordsXY::new(5 * 32, 7 * 32);
        let element = TrackElement::new(TrackElemType::MiddleStation, 48);
        let ride = Ride { stations: vec![RideStation::default()], ..Ride::default() };
        draw_station(&mut session, &ride, 0, 48, &element);

        let calls = session.draw_calls();
        assert_eq!(calls.len(), 3);
        assert_eq!(calls[0].offset.z, 48 + PLATFORM_Z);
        assert_eq!(calls[1].offset.z, 48 + PLATFORM_Z);
        assert_eq!(calls[2].image.index, SPR_STATION_FENCE_SW_NE);
        assert_eq!(calls[2].offset.z, 48 + FENCE_Z);
    }
}
