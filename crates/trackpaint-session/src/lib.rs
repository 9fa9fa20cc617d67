//! Paint session accumulator: draw calls, tunnels and support heights for one frame.
#![forbid(unsafe_code)]

pub mod image;
pub mod segment;
pub mod session;
pub mod tunnel;

pub use image::{ColourScheme, ColourTemplate, IMAGE_INDEX_UNDEFINED, ImageId, ImageIndex};
pub use segment::{
    SEGMENT_HEIGHT_BLOCKED, SUPPORT_SEGMENT_COUNT, SUPPORTS_SLOPE_ABOVE_SCENERY, Segment, SupportHeight,
};
pub use session::{DrawCall, DrawKind, PaintSession, SessionFlags, SessionStats, ViewFlags};
pub use tunnel::{TunnelEntry, TunnelGroup, TunnelSubType};
