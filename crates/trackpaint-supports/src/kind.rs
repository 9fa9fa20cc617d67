use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[cfg_attr(test, derive(proptest_derive::Arbitrary))]
pub enum MetalSupportType {
    Tubes,
    Fork,
    ForkAlt,
    Boxed,
    Stick,
    StickAlt,
    ThickCentred,
    Thick,
    ThickAlt,
    ThickAltCentred,
    Truss,
    TubesInverted,
    BoxedCoated,
}

impl MetalSupportType {
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[cfg_attr(test, derive(proptest_derive::Arbitrary))]
pub enum WoodenSupportType {
    Truss,
    Mine,
}

impl WoodenSupportType {
    /// First row of this family in the wooden sprite tables; sub-types follow it.
    #[inline]
    pub const fn base_index(self) -> usize {
        match self {
            WoodenSupportType::Truss => 0,
            WoodenSupportType::Mine => 6,
        }
    }
}

/// Support family a ride type builds with, handed to every paint function.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SupportType {
    Wooden(WoodenSupportType),
    Metal(MetalSupportType),
}

impl SupportType {
    #[inline]
    pub const fn wooden(self) -> Option<WoodenSupportType> {
        match self {
            SupportType::Wooden(w) => Some(w),
            SupportType::Metal(_) => None,
        }
    }

    #[inline]
    pub const fn metal(self) -> Option<MetalSupportType> {
        match self {
            SupportType::Metal(m) => Some(m),
            SupportType::Wooden(_) => None,
        }
    }
}
