//! Track element model and the paint helpers every ride type shares.
#![forbid(unsafe_code)]

pub mod elem;
pub mod element;
pub mod error;
pub mod paint;
pub mod photo;
pub mod sprites;
pub mod station;
pub mod turns;

pub use elem::{TRACK_ELEM_TYPE_COUNT, TrackElemType};
pub use element::{Ride, RideStation, StationCoverStyle, TrackElement};
pub use error::ParseError;
pub use paint::{
    PaintFunction, add_image_at, add_image_at_rotated, block_segments, block_segments_rotated, set_track_clearance,
    should_paint_supports,
};
pub use photo::onride_photo_paint;
pub use station::{
    Edge, draw_narrow_station_platform, draw_station, draw_station_covers, draw_station_with_cover_height,
    edge_neighbour, has_fence,
};
pub use turns::SpriteBb;
