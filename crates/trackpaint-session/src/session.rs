use serde::Serialize;

use trackpaint_geom::{BoundBoxXYZ, CoordsXY, CoordsXYZ, Direction};

use crate::image::{ColourScheme, ColourTemplate, ImageId};
use crate::segment::{SEGMENT_HEIGHT_BLOCKED, SUPPORT_SEGMENT_COUNT, Segment, SupportHeight};
use crate::tunnel::{TunnelEntry, TunnelGroup, TunnelSubType};

bitflags::bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct SessionFlags: u8 {
        /// The tile's surface has been painted, so supports have ground to stand on.
        const PASSED_SURFACE = 1 << 0;
        /// Painting a lone piece for the construction preview window.
        const TRACK_PIECE_PREVIEW = 1 << 1;
    }
}

bitflags::bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct ViewFlags: u16 {
        const HIDE_SUPPORTS = 1 << 0;
        const INVISIBLE_SUPPORTS = 1 << 1;
    }
}

/// How a draw call hangs off the paint-struct tree.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DrawKind {
    Parent,
    /// Sorted together with the preceding paint struct.
    Child { parent: usize },
    /// Orphan spliced under the wooden-support prepend target.
    Attached { to: usize },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct DrawCall {
    pub image: ImageId,
    pub offset: CoordsXYZ,
    pub bound_box: BoundBoxXYZ,
    pub kind: DrawKind,
}

/// Bookkeeping counters used to check paint-function contracts.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct SessionStats {
    pub segment_calls: u32,
    pub general_calls: u32,
    /// Union of every segment mask written this tile.
    pub segments_touched: u16,
}

/// Accumulator for one tile's worth of painting.
///
/// Owned by the caller; paint functions borrow it mutably for the duration of one call.
#[derive(Clone, Debug, Serialize)]
pub struct PaintSession {
    pub current_rotation: u8,
    pub map_position: CoordsXY,
    #[serde(skip)]
    pub flags: SessionFlags,
    #[serde(skip)]
    pub view_flags: ViewFlags,
    pub water_height: i32,
    /// Draw the element as a translucent placement ghost.
    pub ghost: bool,
    /// Edges (bit per edge, map orientation) of a footpath sharing the track's tile and height.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path_edges_on_same_height: Option<u8>,
    pub surface: SupportHeight,
    pub support: SupportHeight,
    pub support_segments: [SupportHeight; SUPPORT_SEGMENT_COUNT],
    pub left_tunnels: Vec<TunnelEntry>,
    pub right_tunnels: Vec<TunnelEntry>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vertical_tunnel_height: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wooden_supports_prepend_to: Option<usize>,
    pub stats: SessionStats,
    draw_calls: Vec<DrawCall>,
    #[serde(skip)]
    last_ps: Option<usize>,
}

impl Default for PaintSession {
    fn default() -> Self {
        Self::new()
    }
}

impl PaintSession {
    /// Session over flat ground at height zero, surface already painted.
    pub fn new() -> Self {
        Self {
            current_rotation: 0,
            map_position: CoordsXY::ZERO,
            flags: SessionFlags::PASSED_SURFACE,
            view_flags: ViewFlags::empty(),
            water_height: 0,
            ghost: false,
            path_edges_on_same_height: None,
            surface: SupportHeight::default(),
            support: SupportHeight::default(),
            support_segments: [SupportHeight::default(); SUPPORT_SEGMENT_COUNT],
            left_tunnels: Vec::new(),
            right_tunnels: Vec::new(),
            vertical_tunnel_height: None,
            wooden_supports_prepend_to: None,
            stats: SessionStats::default(),
            draw_calls: Vec::new(),
            last_ps: None,
        }
    }

    /// Seeds the ground every support height starts from.
    pub fn with_surface(mut self, height: u16, slope: u8) -> Self {
        self.surface = SupportHeight::new(height, slope);
        self.support = self.surface;
        self.support_segments = [self.surface; SUPPORT_SEGMENT_COUNT];
        self
    }

    /// Clears everything a paint call produces, keeping the view setup and ground.
    pub fn reset(&mut self) {
        self.support = self.surface;
        self.support_segments = [self.surface; SUPPORT_SEGMENT_COUNT];
        self.left_tunnels.clear();
        self.right_tunnels.clear();
        self.vertical_tunnel_height = None;
        self.wooden_supports_prepend_to = None;
        self.stats = SessionStats::default();
        self.draw_calls.clear();
        self.last_ps = None;
    }

    #[inline]
    pub fn draw_calls(&self) -> &[DrawCall] {
        &self.draw_calls
    }

    #[inline]
    pub fn last_paint_struct(&self) -> Option<usize> {
        self.last_ps
    }

    #[inline]
    pub fn passed_surface(&self) -> bool {
        self.flags.contains(SessionFlags::PASSED_SURFACE)
    }

    /// Colour template for one of the ride's schemes, honouring ghost placement.
    #[inline]
    pub fn track_colour(&self, scheme: ColourScheme) -> ImageId {
        if self.ghost {
            ImageId::template(ColourTemplate::Ghost)
        } else {
            ImageId::template(ColourTemplate::Scheme(scheme))
        }
    }

    fn push(&mut self, image: ImageId, offset: CoordsXYZ, bound_box: BoundBoxXYZ, kind: DrawKind) -> usize {
        let index = self.draw_calls.len();
        self.draw_calls.push(DrawCall { image, offset, bound_box, kind });
        index
    }

    /// Adds a sprite that starts its own sort group. Sentinel sprites are skipped.
    pub fn add_image_as_parent(&mut self, image: ImageId, offset: CoordsXYZ, bound_box: BoundBoxXYZ) -> Option<usize> {
        if image.is_undefined() {
            log::trace!("skip undefined parent sprite at {:?}", offset);
            return None;
        }
        let index = self.push(image, offset, bound_box, DrawKind::Parent);
        self.last_ps = Some(index);
        Some(index)
    }

    /// Parent add with the sprite's box laid out for `direction`; odd facings swap x and y.
    pub fn add_image_as_parent_rotated(
        &mut self,
        direction: Direction,
        image: ImageId,
        offset: CoordsXYZ,
        bb_length: CoordsXYZ,
        bb_offset: CoordsXYZ,
    ) -> Option<usize> {
        let bound_box = BoundBoxXYZ::new(bb_offset, bb_length).swapped_for(direction);
        self.add_image_as_parent(image, offset.swapped_for(direction), bound_box)
    }

    /// Adds a sprite sorted with the previous paint struct, or as a parent when there is none.
    pub fn add_image_as_child(&mut self, image: ImageId, offset: CoordsXYZ, bound_box: BoundBoxXYZ) -> Option<usize> {
        let Some(parent) = self.last_ps else {
            return self.add_image_as_parent(image, offset, bound_box);
        };
        if image.is_undefined() {
            log::trace!("skip undefined child sprite at {:?}", offset);
            return None;
        }
        let index = self.push(image, offset, bound_box, DrawKind::Child { parent });
        self.last_ps = Some(index);
        Some(index)
    }

    pub fn add_image_as_child_rotated(
        &mut self,
        direction: Direction,
        image: ImageId,
        offset: CoordsXYZ,
        bb_length: CoordsXYZ,
        bb_offset: CoordsXYZ,
    ) -> Option<usize> {
        let bound_box = BoundBoxXYZ::new(bb_offset, bb_length).swapped_for(direction);
        self.add_image_as_child(image, offset.swapped_for(direction), bound_box)
    }

    /// Adds a sprite hung under `target` without touching the current parent.
    pub fn add_image_attached(
        &mut self,
        target: usize,
        image: ImageId,
        offset: CoordsXYZ,
        bound_box: BoundBoxXYZ,
    ) -> Option<usize> {
        if image.is_undefined() {
            return None;
        }
        Some(self.push(image, offset, bound_box, DrawKind::Attached { to: target }))
    }

    pub fn push_tunnel_left(&mut self, height: i32, group: TunnelGroup, sub_type: TunnelSubType) {
        self.left_tunnels.push(TunnelEntry::new(height, group, sub_type));
    }

    pub fn push_tunnel_right(&mut self, height: i32, group: TunnelGroup, sub_type: TunnelSubType) {
        self.right_tunnels.push(TunnelEntry::new(height, group, sub_type));
    }

    /// Even facings open onto the left tunnel list, odd ones onto the right.
    pub fn push_tunnel_rotated(
        &mut self,
        direction: Direction,
        height: i32,
        group: TunnelGroup,
        sub_type: TunnelSubType,
    ) {
        if direction & 1 == 0 {
            self.push_tunnel_left(height, group, sub_type);
        } else {
            self.push_tunnel_right(height, group, sub_type);
        }
    }

    #[inline]
    pub fn tunnel_count(&self) -> usize {
        self.left_tunnels.len() + self.right_tunnels.len()
    }

    pub fn set_vertical_tunnel(&mut self, height: i32) {
        self.vertical_tunnel_height = Some(height);
    }

    /// Records `height` for every sub-region in `segments`. Blocked writes keep the old slope.
    pub fn set_segment_support_height(&mut self, segments: Segment, height: u16, slope: u8) {
        self.stats.segment_calls += 1;
        self.stats.segments_touched |= segments.bits();
        for (slot, flag) in self.support_segments.iter_mut().zip(Segment::ORDERED) {
            if segments.contains(flag) {
                slot.height = height;
                if height != SEGMENT_HEIGHT_BLOCKED {
                    slot.slope = slope;
                }
            }
        }
    }

    /// Raises the tile's general support clearance; lower values are ignored.
    pub fn set_general_support_height(&mut self, height: i32, slope: u8) {
        self.stats.general_calls += 1;
        let height = height.clamp(0, u16::MAX as i32) as u16;
        if self.support.height >= height {
            return;
        }
        self.support = SupportHeight::new(height, slope);
    }
}
