//! Integer world coordinates, bounding boxes and direction helpers for track painting.
#![forbid(unsafe_code)]

use core::ops::{Add, AddAssign, Sub};

use serde::Serialize;

/// One of the four map-grid facings, always in `0..4` for orthogonal track.
pub type Direction = u8;

pub const NUM_ORTHOGONAL_DIRECTIONS: usize = 4;

/// World units per tile edge.
pub const COORDS_XY_STEP: i32 = 32;
/// World units per height step.
pub const COORDS_Z_STEP: i32 = 8;

/// The facing pointing the opposite way.
#[inline]
pub const fn direction_reverse(direction: Direction) -> Direction {
    (direction + 2) & 3
}

/// The facing a quarter turn clockwise.
#[inline]
pub const fn direction_next(direction: Direction) -> Direction {
    (direction + 1) & 3
}

/// Rounds `value` down to a multiple of `step` (`step` must be a power of two).
#[inline]
pub const fn floor2(value: i32, step: i32) -> i32 {
    value & !(step - 1)
}

/// Shorthand for the coordinate literals that fill the sprite tables.
#[inline]
pub const fn xyz(x: i32, y: i32, z: i32) -> CoordsXYZ {
    CoordsXYZ { x, y, z }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize)]
#[cfg_attr(test, derive(proptest_derive::Arbitrary))]
pub struct CoordsXY {
    pub x: i32,
    pub y: i32,
}

impl CoordsXY {
    pub const ZERO: CoordsXY = CoordsXY { x: 0, y: 0 };

    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    #[inline]
    pub const fn swapped(self) -> Self {
        Self { x: self.y, y: self.x }
    }

    /// Swaps the axes for the odd facings, which is how rotated sprites lay out their boxes.
    #[inline]
    pub const fn swapped_for(self, direction: Direction) -> Self {
        if direction & 1 != 0 { self.swapped() } else { self }
    }

    #[inline]
    pub const fn to_tile(self) -> TileCoordsXY {
        TileCoordsXY {
            x: self.x.div_euclid(COORDS_XY_STEP),
            y: self.y.div_euclid(COORDS_XY_STEP),
        }
    }
}

impl Add for CoordsXY {
    type Output = CoordsXY;
    #[inline]
    fn add(self, rhs: CoordsXY) -> CoordsXY {
        CoordsXY::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for CoordsXY {
    type Output = CoordsXY;
    #[inline]
    fn sub(self, rhs: CoordsXY) -> CoordsXY {
        CoordsXY::new(self.x - rhs.x, self.y - rhs.y)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize)]
#[cfg_attr(test, derive(proptest_derive::Arbitrary))]
pub struct CoordsXYZ {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl CoordsXYZ {
    pub const ZERO: CoordsXYZ = CoordsXYZ { x: 0, y: 0, z: 0 };

    #[inline]
    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    #[inline]
    pub const fn from_xy(xy: CoordsXY, z: i32) -> Self {
        Self { x: xy.x, y: xy.y, z }
    }

    #[inline]
    pub const fn xy(self) -> CoordsXY {
        CoordsXY { x: self.x, y: self.y }
    }

    #[inline]
    pub const fn swapped_for(self, direction: Direction) -> Self {
        if direction & 1 != 0 {
            Self { x: self.y, y: self.x, z: self.z }
        } else {
            self
        }
    }

    #[inline]
    pub const fn with_z_offset(self, dz: i32) -> Self {
        Self { x: self.x, y: self.y, z: self.z + dz }
    }
}

impl Add for CoordsXYZ {
    type Output = CoordsXYZ;
    #[inline]
    fn add(self, rhs: CoordsXYZ) -> CoordsXYZ {
        CoordsXYZ::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl AddAssign for CoordsXYZ {
    #[inline]
    fn add_assign(&mut self, rhs: CoordsXYZ) {
        self.x += rhs.x;
        self.y += rhs.y;
        self.z += rhs.z;
    }
}

/// Sprite bounding box: world offset of the box corner plus its extent.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize)]
#[cfg_attr(test, derive(proptest_derive::Arbitrary))]
pub struct BoundBoxXYZ {
    pub offset: CoordsXYZ,
    pub length: CoordsXYZ,
}

impl BoundBoxXYZ {
    #[inline]
    pub const fn new(offset: CoordsXYZ, length: CoordsXYZ) -> Self {
        Self { offset, length }
    }

    #[inline]
    pub const fn swapped_for(self, direction: Direction) -> Self {
        Self {
            offset: self.offset.swapped_for(direction),
            length: self.length.swapped_for(direction),
        }
    }

    #[inline]
    pub const fn raised(self, dz: i32) -> Self {
        Self { offset: self.offset.with_z_offset(dz), length: self.length }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, serde::Deserialize)]
#[cfg_attr(test, derive(proptest_derive::Arbitrary))]
pub struct TileCoordsXY {
    pub x: i32,
    pub y: i32,
}

impl TileCoordsXY {
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    #[inline]
    pub const fn offset(self, dx: i32, dy: i32) -> Self {
        Self { x: self.x + dx, y: self.y + dy }
    }

    #[inline]
    pub const fn to_coords(self) -> CoordsXY {
        CoordsXY { x: self.x * COORDS_XY_STEP, y: self.y * COORDS_XY_STEP }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn swapping_twice_is_identity(b in any::<BoundBoxXYZ>(), d in 0u8..4) {
            prop_assert_eq!(b.swapped_for(d).swapped_for(d), b);
        }

        #[test]
        fn tile_round_trip_floors(c in any::<CoordsXY>()) {
            let c = CoordsXY::new(c.x % 100_000, c.y % 100_000);
            let back = c.to_tile().to_coords();
            prop_assert!(back.x <= c.x && c.x - back.x < COORDS_XY_STEP);
            prop_assert!(back.y <= c.y && c.y - back.y < COORDS_XY_STEP);
        }
    }
}
