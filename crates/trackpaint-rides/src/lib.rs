//! Per-ride track paint functions and the ride-type dispatch registry.
#![forbid(unsafe_code)]

pub mod air_powered_vertical_coaster;
pub mod dinghy_slide;
pub mod mini_golf;
pub mod miniature_railway;
pub mod registry;
pub mod splash_boats;

pub use air_powered_vertical_coaster::get_track_paint_function_air_powered_vertical_rc;
pub use dinghy_slide::get_track_paint_function_dinghy_slide;
pub use mini_golf::get_track_paint_function_mini_golf;
pub use miniature_railway::get_track_paint_function_miniature_railway;
pub use registry::{DispatchTable, RideType, track_paint_function};
pub use splash_boats::get_track_paint_function_splash_boats;
