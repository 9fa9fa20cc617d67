use serde::Serialize;

use trackpaint_geom::Direction;

bitflags::bitflags! {
    /// Tile sub-regions whose support height a track piece records.
    ///
    /// The low byte is the ring of corners and edges in clockwise order, so a quarter
    /// turn of the piece is a two-bit rotation of that byte. `C4` is the centre.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Segment: u16 {
        const B4 = 1 << 0;
        const CC = 1 << 1;
        const BC = 1 << 2;
        const D4 = 1 << 3;
        const C0 = 1 << 4;
        const D0 = 1 << 5;
        const B8 = 1 << 6;
        const C8 = 1 << 7;
        const C4 = 1 << 8;
    }
}

impl Segment {
    /// Every sub-region of the tile.
    pub const ALL: Segment = Segment::all();

    /// Segment flags in support-height array order.
    pub const ORDERED: [Segment; SUPPORT_SEGMENT_COUNT] = [
        Segment::B4,
        Segment::B8,
        Segment::BC,
        Segment::C0,
        Segment::C4,
        Segment::C8,
        Segment::CC,
        Segment::D0,
        Segment::D4,
    ];

    /// Rotates the ring a quarter turn per direction step; the centre stays put.
    #[inline]
    pub const fn rotated(self, direction: Direction) -> Segment {
        let ring = (self.bits() & 0xFF) as u8;
        let ring = ring.rotate_left((direction as u32 & 3) * 2);
        Segment::from_bits_truncate((self.bits() & 0xFF00) | ring as u16)
    }
}

impl Serialize for Segment {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.bits().serialize(serializer)
    }
}

pub const SUPPORT_SEGMENT_COUNT: usize = 9;

/// Height written into a segment that no support may pass through.
pub const SEGMENT_HEIGHT_BLOCKED: u16 = 0xFFFF;

/// Slope flag marking a support height that sits on top of other scenery.
pub const SUPPORTS_SLOPE_ABOVE_SCENERY: u8 = 0x20;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize)]
#[cfg_attr(test, derive(proptest_derive::Arbitrary))]
pub struct SupportHeight {
    pub height: u16,
    pub slope: u8,
}

impl SupportHeight {
    #[inline]
    pub const fn new(height: u16, slope: u8) -> Self {
        Self { height, slope }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn four_rotations_restore(bits in 0u16..0x200, d in 0u8..4) {
            let s = Segment::from_bits_truncate(bits);
            let mut r = s;
            for _ in 0..4 {
                r = r.rotated(d);
            }
            prop_assert_eq!(r, s);
        }

        #[test]
        fn rotation_keeps_popcount(bits in 0u16..0x200, d in 0u8..4) {
            let s = Segment::from_bits_truncate(bits);
            prop_assert_eq!(s.rotated(d).bits().count_ones(), s.bits().count_ones());
        }
    }

    #[test]
    fn centre_never_moves() {
        for d in 0..4 {
            assert_eq!(Segment::C4.rotated(d), Segment::C4);
        }
        assert_eq!(Segment::B4.rotated(1), Segment::BC);
        assert_eq!(Segment::D0.rotated(1), Segment::C8);
    }
}
