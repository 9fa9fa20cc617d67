use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use hashbrown::HashMap;
use serde::{Deserialize, Serialize};
use trackpaint_supports::{MetalSupportType, SupportType, WoodenSupportType};
use trackpaint_track::{PaintFunction, ParseError, TRACK_ELEM_TYPE_COUNT, TrackElemType};

use crate::air_powered_vertical_coaster::get_track_paint_function_air_powered_vertical_rc;
use crate::dinghy_slide::get_track_paint_function_dinghy_slide;
use crate::mini_golf::get_track_paint_function_mini_golf;
use crate::miniature_railway::get_track_paint_function_miniature_railway;
use crate::splash_boats::get_track_paint_function_splash_boats;

/// Dense per-ride lookup, indexed by [`TrackElemType::ordinal`].
pub type DispatchTable = [Option<PaintFunction>; TRACK_ELEM_TYPE_COUNT];

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[cfg_attr(test, derive(proptest_derive::Arbitrary))]
pub enum RideType {
    DinghySlide,
    SplashBoats,
    MiniatureRailway,
    MiniGolf,
    AirPoweredVerticalCoaster,
}

impl RideType {
    pub const ALL: [RideType; 5] = [
        RideType::DinghySlide,
        RideType::SplashBoats,
        RideType::MiniatureRailway,
        RideType::MiniGolf,
        RideType::AirPoweredVerticalCoaster,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            RideType::DinghySlide => "dinghy_slide",
            RideType::SplashBoats => "splash_boats",
            RideType::MiniatureRailway => "miniature_railway",
            RideType::MiniGolf => "mini_golf",
            RideType::AirPoweredVerticalCoaster => "air_powered_vertical_coaster",
        }
    }

    /// Support style the ride's track is built on unless the caller overrides it.
    pub const fn default_support_type(self) -> SupportType {
        match self {
            RideType::DinghySlide => SupportType::Metal(MetalSupportType::Tubes),
            RideType::SplashBoats
            | RideType::MiniatureRailway
            | RideType::MiniGolf
            | RideType::AirPoweredVerticalCoaster => SupportType::Wooden(WoodenSupportType::Truss),
        }
    }

    fn lookup(self) -> fn(TrackElemType) -> Option<PaintFunction> {
        match self {
            RideType::DinghySlide => get_track_paint_function_dinghy_slide,
            RideType::SplashBoats => get_track_paint_function_splash_boats,
            RideType::MiniatureRailway => get_track_paint_function_miniature_railway,
            RideType::MiniGolf => get_track_paint_function_mini_golf,
            RideType::AirPoweredVerticalCoaster => get_track_paint_function_air_powered_vertical_rc,
        }
    }

    /// The ride's dispatch table, built on first use.
    pub fn dispatch_table(self) -> &'static DispatchTable {
        static TABLES: [OnceLock<DispatchTable>; 5] =
            [OnceLock::new(), OnceLock::new(), OnceLock::new(), OnceLock::new(), OnceLock::new()];
        TABLES[self as usize].get_or_init(|| {
            let lookup = self.lookup();
            let mut table: DispatchTable = [None; TRACK_ELEM_TYPE_COUNT];
            for &elem in TrackElemType::ALL {
                table[elem.ordinal()] = lookup(elem);
            }
            log::trace!(
                "built {} dispatch table: {} of {} elements painted",
                self.name(),
                table.iter().filter(|f| f.is_some()).count(),
                TRACK_ELEM_TYPE_COUNT
            );
            table
        })
    }

    /// Elements this ride can paint, in ordinal order.
    pub fn supported_elements(self) -> impl Iterator<Item = TrackElemType> {
        let table = self.dispatch_table();
        TrackElemType::ALL.iter().copied().filter(move |elem| table[elem.ordinal()].is_some())
    }
}

/// Paint function for `elem` on `ride`, or `None` when the ride does not draw it.
#[inline]
pub fn track_paint_function(ride: RideType, elem: TrackElemType) -> Option<PaintFunction> {
    ride.dispatch_table()[elem.ordinal()]
}

fn names() -> &'static HashMap<&'static str, RideType> {
    static NAMES: OnceLock<HashMap<&'static str, RideType>> = OnceLock::new();
    NAMES.get_or_init(|| RideType::ALL.iter().map(|&r| (r.name(), r)).collect())
}

impl FromStr for RideType {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        names().get(s).copied().ok_or_else(|| ParseError::UnknownRideType(s.to_string()))
    }
}

impl fmt::Display for RideType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn names_parse_back(ride: RideType) {
            prop_assert_eq!(ride.name().parse::<RideType>(), Ok(ride));
        }

        #[test]
        fn table_agrees_with_lookup(ride in any::<RideType>(), ordinal in 0..TRACK_ELEM_TYPE_COUNT) {
            let elem = TrackElemType::ALL[ordinal];
            prop_assert_eq!(track_paint_function(ride, elem).is_some(), ride.lookup()(elem).is_some());
        }
    }

    #[test]
    fn unknown_ride_is_a_typed_error() {
        assert_eq!(
            "wild_mouse".parse::<RideType>(),
            Err(ParseError::UnknownRideType("wild_mouse".to_string()))
        );
    }

    #[test]
    fn every_ride_paints_flat_and_stations() {
        for ride in RideType::ALL {
            for elem in [TrackElemType::Flat, TrackElemType::BeginStation, TrackElemType::EndStation] {
                assert!(track_paint_function(ride, elem).is_some(), "{ride} misses {elem}");
            }
        }
    }
}
