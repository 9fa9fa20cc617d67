use serde::{Deserialize, Serialize};
use trackpaint_geom::TileCoordsXY;

use crate::elem::TrackElemType;

/// Per-element state a paint function reads. Never written during painting.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrackElement {
    elem_type: TrackElemType,
    base_z: i32,
    chain: bool,
    ghost: bool,
    highlight: bool,
    station_index: u8,
    taking_photo: bool,
    green_light: bool,
}

impl TrackElement {
    pub const fn new(elem_type: TrackElemType, base_z: i32) -> Self {
        Self {
            elem_type,
            base_z,
            chain: false,
            ghost: false,
            highlight: false,
            station_index: 0,
            taking_photo: false,
            green_light: false,
        }
    }

    pub const fn with_chain(mut self, chain: bool) -> Self {
        self.chain = chain;
        self
    }

    pub const fn with_ghost(mut self, ghost: bool) -> Self {
        self.ghost = ghost;
        self
    }

    pub const fn with_highlight(mut self, highlight: bool) -> Self {
        self.highlight = highlight;
        self
    }

    pub const fn with_station_index(mut self, index: u8) -> Self {
        self.station_index = index;
        self
    }

    pub const fn with_taking_photo(mut self, taking_photo: bool) -> Self {
        self.taking_photo = taking_photo;
        self
    }

    pub const fn with_green_light(mut self, green_light: bool) -> Self {
        self.green_light = green_light;
        self
    }

    #[inline]
    pub const fn elem_type(&self) -> TrackElemType {
        self.elem_type
    }

    #[inline]
    pub const fn base_z(&self) -> i32 {
        self.base_z
    }

    #[inline]
    pub const fn has_chain(&self) -> bool {
        self.chain
    }

    #[inline]
    pub const fn is_ghost(&self) -> bool {
        self.ghost
    }

    #[inline]
    pub const fn is_highlighted(&self) -> bool {
        self.highlight
    }

    #[inline]
    pub const fn station_index(&self) -> u8 {
        self.station_index
    }

    #[inline]
    pub const fn is_taking_photo(&self) -> bool {
        self.taking_photo
    }

    /// Station end light shows green while a train may depart.
    #[inline]
    pub const fn has_green_light(&self) -> bool {
        self.green_light
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RideStation {
    pub entrance: Option<TileCoordsXY>,
    pub exit: Option<TileCoordsXY>,
}

impl RideStation {
    /// True when `tile` holds neither the entrance nor the exit.
    #[inline]
    pub fn is_open_edge(&self, tile: TileCoordsXY) -> bool {
        self.entrance != Some(tile) && self.exit != Some(tile)
    }
}

/// Roof sprites drawn over station platforms.
///
/// A `base_image` at or below [`StationCoverStyle::MIN_BASE_IMAGE`] means the
/// station has no covers.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StationCoverStyle {
    pub base_image: u32,
    /// Translucent roof: a second sprite is layered on top of the frame.
    pub glass: bool,
}

impl StationCoverStyle {
    pub const MIN_BASE_IMAGE: u32 = 0x20;

    #[inline]
    pub const fn has_covers(self) -> bool {
        self.base_image > Self::MIN_BASE_IMAGE
    }
}

/// Read-only view of the ride a track element belongs to.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Ride {
    pub stations: Vec<RideStation>,
    pub cover_style: StationCoverStyle,
}

impl Ride {
    #[inline]
    pub fn station(&self, index: u8) -> Option<&RideStation> {
        self.stations.get(index as usize)
    }
}
