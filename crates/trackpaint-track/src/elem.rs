use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use hashbrown::HashMap;
use serde::{Deserialize, Serialize};

use crate::error::ParseError;

macro_rules! track_elem_types {
    ($($name:ident => $sequences:expr),+ $(,)?) => {
        /// Track geometry kinds. Ordinals are dense and stable; dispatch tables index by them.
        #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[cfg_attr(test, derive(proptest_derive::Arbitrary))]
        #[repr(u16)]
        pub enum TrackElemType {
            #[default]
            $($name),+
        }

        impl TrackElemType {
            pub const ALL: &'static [TrackElemType] = &[$(TrackElemType::$name),+];

            /// Canonical spelling, as accepted by `from_str`.
            pub const fn name(self) -> &'static str {
                match self {
                    $(TrackElemType::$name => stringify!($name)),+
                }
            }

            /// Number of tiles the piece spans; valid sequences are `0..sequence_count()`.
            pub const fn sequence_count(self) -> u8 {
                match self {
                    $(TrackElemType::$name => $sequences),+
                }
            }
        }
    };
}

track_elem_types! {
    Flat => 1,
    EndStation => 1,
    BeginStation => 1,
    MiddleStation => 1,
    Up25 => 1,
    Up60 => 1,
    FlatToUp25 => 1,
    Up25ToUp60 => 1,
    Up60ToUp25 => 1,
    Up25ToFlat => 1,
    Down25 => 1,
    Down60 => 1,
    FlatToDown25 => 1,
    Down25ToDown60 => 1,
    Down60ToDown25 => 1,
    Down25ToFlat => 1,
    LeftQuarterTurn5Tiles => 7,
    RightQuarterTurn5Tiles => 7,
    FlatToLeftBank => 1,
    FlatToRightBank => 1,
    LeftBankToFlat => 1,
    RightBankToFlat => 1,
    BankedLeftQuarterTurn5Tiles => 7,
    BankedRightQuarterTurn5Tiles => 7,
    LeftBank => 1,
    RightBank => 1,
    SBendLeft => 4,
    SBendRight => 4,
    LeftQuarterTurn3Tiles => 4,
    RightQuarterTurn3Tiles => 4,
    LeftQuarterTurn1Tile => 1,
    RightQuarterTurn1Tile => 1,
    Brakes => 1,
    Booster => 1,
    OnRidePhoto => 1,
    ReverseFreefallSlope => 7,
    ReverseFreefallVertical => 2,
    AirThrustTopCap => 4,
    AirThrustVerticalDown => 2,
    AirThrustVerticalDownToLevel => 7,
    MinigolfHoleA => 2,
    MinigolfHoleB => 2,
    MinigolfHoleC => 2,
    MinigolfHoleD => 3,
    MinigolfHoleE => 3,
    LeftEighthToDiag => 5,
    RightEighthToDiag => 5,
    LeftEighthToOrthogonal => 5,
    RightEighthToOrthogonal => 5,
    DiagFlat => 4,
    DiagUp25 => 4,
    DiagFlatToUp25 => 4,
    DiagUp25ToFlat => 4,
    DiagDown25 => 4,
    DiagFlatToDown25 => 4,
    DiagDown25ToFlat => 4,
    FlatCovered => 1,
    Up25Covered => 1,
    Up60Covered => 1,
    FlatToUp25Covered => 1,
    Up25ToUp60Covered => 1,
    Up60ToUp25Covered => 1,
    Up25ToFlatCovered => 1,
    Down25Covered => 1,
    Down60Covered => 1,
    FlatToDown25Covered => 1,
    Down25ToDown60Covered => 1,
    Down60ToDown25Covered => 1,
    Down25ToFlatCovered => 1,
    LeftQuarterTurn5TilesCovered => 7,
    RightQuarterTurn5TilesCovered => 7,
    SBendLeftCovered => 4,
    SBendRightCovered => 4,
    LeftQuarterTurn3TilesCovered => 4,
    RightQuarterTurn3TilesCovered => 4,
}

/// Number of track element kinds; dispatch tables are this long.
pub const TRACK_ELEM_TYPE_COUNT: usize = TrackElemType::ALL.len();

impl TrackElemType {
    #[inline]
    pub const fn ordinal(self) -> usize {
        self as usize
    }

    #[inline]
    pub fn from_ordinal(ordinal: usize) -> Option<TrackElemType> {
        Self::ALL.get(ordinal).copied()
    }

    #[inline]
    pub const fn is_station(self) -> bool {
        matches!(
            self,
            TrackElemType::EndStation | TrackElemType::BeginStation | TrackElemType::MiddleStation
        )
    }
}

fn names() -> &'static HashMap<&'static str, TrackElemType> {
    static NAMES: OnceLock<HashMap<&'static str, TrackElemType>> = OnceLock::new();
    NAMES.get_or_init(|| TrackElemType::ALL.iter().map(|&t| (t.name(), t)).collect())
}

impl FromStr for TrackElemType {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        names()
            .get(s)
            .copied()
            .ok_or_else(|| ParseError::UnknownTrackElement(s.to_string()))
    }
}

impl fmt::Display for TrackElemType {
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
        fn name_round_trips(t in any::<TrackElemType>()) {
            prop_assert_eq!(t.name().parse::<TrackElemType>().ok(), Some(t));
            prop_assert_eq!(TrackElemType::from_ordinal(t.ordinal()), Some(t));
        }
    }

    #[test]
    fn parsing_is_case_sensitive() {
        assert!("up25".parse::<TrackElemType>().is_err());
        assert_eq!("Up25".parse::<TrackElemType>().ok(), Some(TrackElemType::Up25));
    }
}
