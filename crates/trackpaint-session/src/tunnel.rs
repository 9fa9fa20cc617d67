use serde::Serialize;

/// Visual family of a tunnel mouth.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
#[cfg_attr(test, derive(proptest_derive::Arbitrary))]
pub enum TunnelGroup {
    Standard,
    Square,
    PathAndMiniGolf,
}

/// How the track meets the tunnel boundary.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
#[cfg_attr(test, derive(proptest_derive::Arbitrary))]
pub enum TunnelSubType {
    Flat,
    SlopeStart,
    SlopeEnd,
    FlatTo25Deg,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct TunnelEntry {
    pub height: i32,
    pub group: TunnelGroup,
    pub sub_type: TunnelSubType,
}

impl TunnelEntry {
    #[inline]
    pub const fn new(height: i32, group: TunnelGroup, sub_type: TunnelSubType) -> Self {
        Self { height, group, sub_type }
    }

    /// Byte id the tunnel renderer keys its sprites on.
    pub const fn legacy_type(self) -> u8 {
        match (self.group, self.sub_type) {
            (TunnelGroup::Standard, TunnelSubType::Flat) => 0,
            (TunnelGroup::Standard, TunnelSubType::SlopeStart) => 1,
            (TunnelGroup::Standard, TunnelSubType::SlopeEnd) => 2,
            (TunnelGroup::Standard, TunnelSubType::FlatTo25Deg) => 12,
            (TunnelGroup::Square, TunnelSubType::Flat) => 6,
            (TunnelGroup::Square, TunnelSubType::SlopeStart) => 7,
            (TunnelGroup::Square, TunnelSubType::SlopeEnd) => 8,
            (TunnelGroup::Square, TunnelSubType::FlatTo25Deg) => 14,
            (TunnelGroup::PathAndMiniGolf, _) => 0x0A,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        // Standard and square families never share an id
        #[test]
        fn families_are_disjoint(s in any::<TunnelSubType>(), t in any::<TunnelSubType>()) {
            let a = TunnelEntry::new(0, TunnelGroup::Standard, s).legacy_type();
            let b = TunnelEntry::new(0, TunnelGroup::Square, t).legacy_type();
            prop_assert_ne!(a, b);
        }
    }
}
